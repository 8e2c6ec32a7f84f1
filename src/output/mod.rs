pub mod schema;

pub use schema::{DetectionReport, OutcomeReport};
