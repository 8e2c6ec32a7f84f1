use crate::pipeline::phase_trait::{EvidencePhase, PhaseInput};
use crate::stack::rules::STRING_TABLE_RULES;
use crate::stack::TechStack;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Last-resort scan of the executable's printable strings
pub struct StringPhase;

impl StringPhase {
    /// First matching rule in priority order; at most one tag
    pub fn classify_strings(strings: &str) -> TechStack {
        STRING_TABLE_RULES
            .iter()
            .find(|rule| rule.matches(strings))
            .map(|rule| TechStack::single(rule.technology))
            .unwrap_or_default()
    }
}

#[async_trait]
impl EvidencePhase for StringPhase {
    fn name(&self) -> &'static str {
        "strings"
    }

    async fn execute(&self, input: &PhaseInput<'_>) -> TechStack {
        let executable = &input.executable.path;
        let timeout = input.context.config.strings_timeout;

        match input.context.string_extractor.extract(executable, timeout).await {
            Ok(strings) => Self::classify_strings(&strings),
            Err(e) if e.is_timeout() => {
                warn!(
                    executable = %executable.display(),
                    timeout_ms = timeout.as_millis() as u64,
                    "String extraction timed out"
                );
                TechStack::new()
            }
            Err(e) => {
                debug!(executable = %executable.display(), error = %e, "String extraction failed");
                TechStack::new()
            }
        }
    }
}
