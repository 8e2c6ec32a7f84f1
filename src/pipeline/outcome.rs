use crate::bundle::{AppBundle, BundleMetadata, ExecutableDescriptor};
use crate::stack::{Category, TechStack};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Result of classifying one bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The executable resolved; the stack is never empty
    Classified(TechStack),
    /// No executable could be found
    Undetermined,
}

impl Outcome {
    pub fn is_classified(&self) -> bool {
        matches!(self, Outcome::Classified(_))
    }

    pub fn stack(&self) -> Option<&TechStack> {
        match self {
            Outcome::Classified(stack) => Some(stack),
            Outcome::Undetermined => None,
        }
    }
}

/// What each stage contributed, kept for diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    pub frameworks: TechStack,
    pub resources: TechStack,
    pub dependencies: TechStack,
    /// `None` when structural evidence made the string scan unnecessary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strings: Option<TechStack>,
    pub compiled_interface: bool,
}

/// Everything learned about one bundle
#[derive(Debug, Clone)]
pub struct Detection {
    pub bundle: AppBundle,
    pub metadata: BundleMetadata,
    pub executable: Option<ExecutableDescriptor>,
    pub outcome: Outcome,
    pub category: Category,
    pub evidence: Evidence,
    pub duration: Duration,
}
