use crate::bundle::{AppBundle, ExecutableDescriptor};
use crate::stack::TechStack;
use async_trait::async_trait;

use super::context::DetectionContext;

/// What every evidence stage sees for one bundle
pub struct PhaseInput<'a> {
    pub context: &'a DetectionContext,
    pub bundle: &'a AppBundle,
    pub executable: &'a ExecutableDescriptor,
    /// Tags already established by earlier stages
    pub known: &'a TechStack,
}

/// One evidence-gathering stage.
///
/// Stages never fail: missing directories and tool failures yield an empty set.
#[async_trait]
pub trait EvidencePhase: Send + Sync {
    fn name(&self) -> &'static str;

    async fn execute(&self, input: &PhaseInput<'_>) -> TechStack;
}
