//! appdetective - identify the UI/runtime technology stack of macOS app bundles
//!
//! Detection works purely from on-disk evidence. For each bundle the pipeline
//! resolves the analysis root (following the `WrappedBundle` convention used by
//! iOS apps on Apple silicon), locates the executable, then gathers tags from
//! bundled framework names, packaged resources and the executable's linked
//! libraries. Only when all of that comes up empty does it fall back to scanning
//! the executable's printable strings. A final conflict pass guarantees a
//! non-empty result.
//!
//! # Example Usage
//!
//! ```ignore
//! use appdetective::{DetectionContext, PipelineConfig, PipelineOrchestrator, Outcome};
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! async fn classify() {
//!     let context = DetectionContext::from_config(PipelineConfig::default());
//!     let orchestrator = PipelineOrchestrator::new(Arc::new(context));
//!
//!     match orchestrator.classify(Path::new("/Applications/Slack.app")).await {
//!         Outcome::Classified(stack) => println!("{}", stack),
//!         Outcome::Undetermined => println!("no executable"),
//!     }
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`bundle`]: bundle layout, Info.plist metadata and executable resolution
//! - [`stack`]: technology and category enumerations plus the detection rule tables
//! - [`pipeline`]: the detection stages and their orchestration
//! - [`tools`]: `otool` and `strings` wrappers
//! - [`cli`]: command-line front end

pub mod bundle;
pub mod cli;
pub mod config;
pub mod fs;
pub mod heuristics;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod stack;
pub mod tools;

pub use bundle::{AppBundle, ExecutableDescriptor};
pub use config::{ConfigError, DetectiveConfig};
pub use output::DetectionReport;
pub use pipeline::{Detection, DetectionContext, Outcome, PipelineConfig, PipelineOrchestrator};
pub use stack::{Category, TechStack, Technology};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
