use crate::pipeline::phase_trait::{EvidencePhase, PhaseInput};
use crate::stack::rules::FRAMEWORK_DIRECTORY_RULES;
use crate::stack::TechStack;
use async_trait::async_trait;
use tracing::debug;

/// Matches entries of the bundled frameworks directory by name
pub struct FrameworkPhase;

impl FrameworkPhase {
    pub fn classify_names<'a>(names: impl IntoIterator<Item = &'a str>) -> TechStack {
        let mut stack = TechStack::new();
        for name in names {
            for rule in FRAMEWORK_DIRECTORY_RULES {
                if rule.pattern.matches(name) {
                    stack.insert(rule.technology);
                }
            }
        }
        stack
    }
}

#[async_trait]
impl EvidencePhase for FrameworkPhase {
    fn name(&self) -> &'static str {
        "frameworks"
    }

    async fn execute(&self, input: &PhaseInput<'_>) -> TechStack {
        let frameworks_dir = input.bundle.frameworks_dir();
        let entries = match input.context.file_system.read_dir(&frameworks_dir) {
            Ok(entries) => entries,
            Err(_) => {
                debug!(dir = %frameworks_dir.display(), "No frameworks directory");
                return TechStack::new();
            }
        };

        Self::classify_names(entries.iter().map(|entry| entry.file_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::{AppBundle, ExecutableDescriptor};
    use crate::fs::MockFileSystem;
    use crate::pipeline::{DetectionContext, PipelineConfig};
    use crate::stack::Technology;
    use crate::tools::{MockLister, MockStringExtractor};
    use std::sync::Arc;

    async fn scan(fs: MockFileSystem, bundle: &AppBundle) -> TechStack {
        let context = DetectionContext::with_collaborators(
            Arc::new(fs),
            Arc::new(MockLister::returning("")),
            Arc::new(MockStringExtractor::returning("")),
            PipelineConfig::default(),
        );
        let executable = ExecutableDescriptor {
            name: "Foo".to_string(),
            path: bundle.executable_dir().join("Foo"),
            from_fallback: false,
        };
        let known = TechStack::new();
        FrameworkPhase
            .execute(&PhaseInput {
                context: &context,
                bundle,
                executable: &executable,
                known: &known,
            })
            .await
    }

    #[test]
    fn test_classify_names() {
        let stack = FrameworkPhase::classify_names([
            "Electron Framework.framework",
            "Squirrel.framework",
            "QtCore.framework",
            "libskiko-macos-arm64.dylib",
        ]);
        assert_eq!(stack.canonical_names(), vec!["electron", "qt", "compose"]);
    }

    #[test]
    fn test_python_variants() {
        assert!(FrameworkPhase::classify_names(["Python.framework"]).contains(Technology::Python));
        assert!(
            FrameworkPhase::classify_names(["MyPython3.framework"]).contains(Technology::Python)
        );
        assert!(FrameworkPhase::classify_names(["python-helpers"]).is_empty());
    }

    #[tokio::test]
    async fn test_scans_frameworks_directory() {
        let fs = MockFileSystem::new();
        fs.add_dir("Foo.app/Contents/Frameworks/Electron Framework.framework");
        fs.add_dir("Foo.app/Contents/Frameworks/FlutterMacOS.framework");
        let bundle = AppBundle::standard("/mock/Foo.app");

        let stack = scan(fs, &bundle).await;
        assert!(stack.contains(Technology::Electron));
        assert!(stack.contains(Technology::Flutter));
        assert_eq!(stack.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_directory_is_empty() {
        let fs = MockFileSystem::new();
        fs.add_dir("Foo.app/Contents/MacOS");
        let bundle = AppBundle::standard("/mock/Foo.app");

        assert!(scan(fs, &bundle).await.is_empty());
    }

    #[tokio::test]
    async fn test_wrapped_layout_uses_flat_frameworks_dir() {
        let fs = MockFileSystem::new();
        fs.add_dir("Game.app/Wrapper/Game.app/Frameworks/hermes.framework");
        let bundle = AppBundle::wrapped("/mock/Game.app", "/mock/Game.app/Wrapper/Game.app");

        assert_eq!(
            scan(fs, &bundle).await,
            TechStack::single(Technology::ReactNative)
        );
    }
}
