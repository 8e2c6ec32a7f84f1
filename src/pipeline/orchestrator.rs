use super::context::DetectionContext;
use super::outcome::{Detection, Evidence, Outcome};
use super::phase_trait::{EvidencePhase, PhaseInput};
use super::phases::{
    category::CategoryExtractor,
    conflicts::ConflictResolver,
    dependencies::DependencyPhase,
    frameworks::FrameworkPhase,
    resolve::{ResolvePhase, ResolvedBundle},
    resources::ResourcePhase,
    strings::StringPhase,
};
use crate::bundle::{AppBundle, ExecutableDescriptor};
use crate::stack::TechStack;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Runs the detection stages for one bundle at a time.
///
/// Holds no per-bundle state, so one orchestrator can serve many concurrent
/// `detect` calls.
pub struct PipelineOrchestrator {
    context: Arc<DetectionContext>,
}

impl PipelineOrchestrator {
    pub fn new(context: Arc<DetectionContext>) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &DetectionContext {
        &self.context
    }

    /// Classify a bundle, returning only the outcome
    pub async fn classify(&self, path: &Path) -> Outcome {
        self.detect(path).await.outcome
    }

    pub async fn detect(&self, path: &Path) -> Detection {
        let start = Instant::now();
        debug!("Starting detection for: {}", path.display());

        let ResolvedBundle {
            bundle,
            metadata,
            executable,
        } = ResolvePhase.execute(&self.context, path);

        let category = CategoryExtractor.extract(
            self.context.plist_reader.as_ref(),
            &bundle,
            &metadata,
        );

        let Some(exe) = executable.as_ref() else {
            warn!(bundle = %path.display(), "No executable found, bundle undetermined");
            return Detection {
                bundle,
                metadata,
                executable,
                outcome: Outcome::Undetermined,
                category,
                evidence: Evidence::default(),
                duration: start.elapsed(),
            };
        };

        let (stack, evidence) = self.gather(&bundle, exe).await;

        info!(
            bundle = %path.display(),
            stack = %stack,
            category = %category,
            duration_ms = start.elapsed().as_millis() as u64,
            "Bundle classified"
        );

        Detection {
            bundle,
            metadata,
            executable,
            outcome: Outcome::Classified(stack),
            category,
            evidence,
            duration: start.elapsed(),
        }
    }

    async fn gather(&self, bundle: &AppBundle, exe: &ExecutableDescriptor) -> (TechStack, Evidence) {
        let none = TechStack::new();

        // Listing the frameworks directory is cheap; its tags let the resource scan skip work
        let frameworks = self.run_phase(&FrameworkPhase, bundle, exe, &none).await;
        // The lister spawns its child before the resource walk is handed to the blocking pool
        let (dependencies, resources) = tokio::join!(
            self.run_phase(&DependencyPhase, bundle, exe, &none),
            self.run_phase(&ResourcePhase, bundle, exe, &frameworks),
        );

        let mut union = frameworks.union(&resources);
        union.extend(&dependencies);

        let strings = if union.is_empty() {
            let found = self.run_phase(&StringPhase, bundle, exe, &union).await;
            union.extend(&found);
            Some(found)
        } else {
            None
        };

        let started = Instant::now();
        let resolution = ConflictResolver.resolve(self.context.file_system.as_ref(), bundle, union);
        self.context.evidence_logger.log_stage(
            "conflicts",
            &bundle.requested_path,
            &exe.path,
            &resolution.stack,
            started.elapsed().as_millis() as u64,
        );

        let evidence = Evidence {
            frameworks,
            resources,
            dependencies,
            strings,
            compiled_interface: resolution.compiled_interface,
        };

        (resolution.stack, evidence)
    }

    async fn run_phase(
        &self,
        phase: &dyn EvidencePhase,
        bundle: &AppBundle,
        exe: &ExecutableDescriptor,
        known: &TechStack,
    ) -> TechStack {
        let started = Instant::now();
        let input = PhaseInput {
            context: &self.context,
            bundle,
            executable: exe,
            known,
        };

        let stack = phase.execute(&input).await;
        let latency_ms = started.elapsed().as_millis() as u64;

        debug!(phase = phase.name(), stack = %stack, latency_ms, "Phase complete");
        self.context.evidence_logger.log_stage(
            phase.name(),
            &bundle.requested_path,
            &exe.path,
            &stack,
            latency_ms,
        );

        stack
    }
}
