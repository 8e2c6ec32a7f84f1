//! Progress reporting for folder scans

mod bar;
mod handler;
mod logging;

pub use bar::BarHandler;
pub use handler::{NoOpHandler, ProgressEvent, ProgressHandler};
pub use logging::LoggingHandler;
