//! External binary inspection tools.
//!
//! The engine never parses Mach-O itself. It asks an external lister for the
//! linked libraries of an executable and an external extractor for its
//! printable strings, and only ever looks at their text output.

mod error;
mod mock;
mod otool;
pub mod process;
mod strings;

pub use error::ToolError;
pub use mock::{MockLister, MockStringExtractor};
pub use otool::OtoolLister;
pub use strings::StringsExtractor;

use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

/// Produces the linked-library listing for an executable
#[async_trait]
pub trait LinkedLibraryLister: Send + Sync {
    async fn list(&self, executable: &Path) -> Result<String, ToolError>;
}

/// Produces the printable strings of an executable within a time bound
#[async_trait]
pub trait StringExtractor: Send + Sync {
    async fn extract(&self, executable: &Path, timeout: Duration) -> Result<String, ToolError>;
}
