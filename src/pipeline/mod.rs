pub mod config;
pub mod context;
pub mod orchestrator;
pub mod outcome;
pub mod phase_trait;
pub mod phases;

pub use config::PipelineConfig;
pub use context::DetectionContext;
pub use orchestrator::PipelineOrchestrator;
pub use outcome::{Detection, Evidence, Outcome};
pub use phase_trait::{EvidencePhase, PhaseInput};
