use crate::pipeline::phase_trait::{EvidencePhase, PhaseInput};
use crate::stack::rules::LINKED_LIBRARY_RULES;
use crate::stack::TechStack;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Classifies the executable by the libraries it links against
pub struct DependencyPhase;

impl DependencyPhase {
    /// Apply every linked-library rule to a listing; rules contribute independently
    pub fn classify_listing(listing: &str) -> TechStack {
        LINKED_LIBRARY_RULES
            .iter()
            .filter(|rule| rule.matches(listing))
            .map(|rule| rule.technology)
            .collect()
    }
}

#[async_trait]
impl EvidencePhase for DependencyPhase {
    fn name(&self) -> &'static str {
        "dependencies"
    }

    async fn execute(&self, input: &PhaseInput<'_>) -> TechStack {
        let executable = &input.executable.path;
        match input.context.library_lister.list(executable).await {
            Ok(listing) => Self::classify_listing(&listing),
            Err(e) if e.is_timeout() => {
                warn!(executable = %executable.display(), error = %e, "Linked library listing timed out");
                TechStack::new()
            }
            Err(e) => {
                debug!(executable = %executable.display(), error = %e, "Linked library listing failed");
                TechStack::new()
            }
        }
    }
}
