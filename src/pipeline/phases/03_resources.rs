use crate::fs::{FileSystem, FileType};
use crate::pipeline::phase_trait::{EvidencePhase, PhaseInput};
use crate::stack::rules::{JS_BUNDLE_EXTENSION, JS_BUNDLE_FILES};
use crate::stack::{TechStack, Technology};
use async_trait::async_trait;
use std::path::Path;
use tracing::{debug, trace, warn};

/// Looks for a packaged JavaScript bundle among the resources
pub struct ResourcePhase;

impl ResourcePhase {
    fn has_js_bundle(fs: &dyn FileSystem, resources_dir: &Path) -> bool {
        if JS_BUNDLE_FILES
            .iter()
            .any(|name| fs.is_file(&resources_dir.join(name)))
        {
            return true;
        }
        Self::walk_for_js_bundle(fs, resources_dir)
    }

    fn walk_for_js_bundle(fs: &dyn FileSystem, dir: &Path) -> bool {
        let entries = match fs.read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                trace!(dir = %dir.display(), error = %e, "Skipping unreadable directory");
                return false;
            }
        };

        for entry in &entries {
            if entry.file_type() != FileType::Directory
                && entry.extension() == Some(JS_BUNDLE_EXTENSION)
            {
                debug!(path = %entry.path().display(), "Found JavaScript bundle");
                return true;
            }
        }

        // Symlinked directories are reported as symlinks and never descended into
        entries
            .iter()
            .filter(|entry| entry.is_dir())
            .any(|entry| Self::walk_for_js_bundle(fs, entry.path()))
    }
}

#[async_trait]
impl EvidencePhase for ResourcePhase {
    fn name(&self) -> &'static str {
        "resources"
    }

    async fn execute(&self, input: &PhaseInput<'_>) -> TechStack {
        if input.known.contains(Technology::ReactNative) {
            return TechStack::new();
        }

        // The walk is plain blocking I/O; keep it off the runtime workers
        let fs = input.context.file_system.clone();
        let resources_dir = input.bundle.resources_dir();
        let found =
            tokio::task::spawn_blocking(move || Self::has_js_bundle(fs.as_ref(), &resources_dir))
                .await;

        match found {
            Ok(true) => TechStack::single(Technology::ReactNative),
            Ok(false) => TechStack::new(),
            Err(e) => {
                warn!(error = %e, "Resource scan task failed");
                TechStack::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::{AppBundle, ExecutableDescriptor};
    use crate::fs::MockFileSystem;
    use crate::pipeline::{DetectionContext, PipelineConfig};
    use crate::tools::{MockLister, MockStringExtractor};
    use std::sync::Arc;

    async fn scan(fs: MockFileSystem, bundle: &AppBundle, known: TechStack) -> TechStack {
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
        ResourcePhase
            .execute(&PhaseInput {
                context: &context,
                bundle,
                executable: &executable,
                known: &known,
            })
            .await
    }

    #[tokio::test]
    async fn test_main_jsbundle() {
        let fs = MockFileSystem::new();
        fs.add_file("Foo.app/Contents/Resources/main.jsbundle", "__d(function(){})");
        let bundle = AppBundle::standard("/mock/Foo.app");

        assert_eq!(
            scan(fs, &bundle, TechStack::new()).await,
            TechStack::single(Technology::ReactNative)
        );
    }

    #[tokio::test]
    async fn test_nested_jsbundle() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "Foo.app/Contents/Resources/assets/app/ui.jsbundle",
            "__d(function(){})",
        );
        let bundle = AppBundle::standard("/mock/Foo.app");

        assert!(scan(fs, &bundle, TechStack::new())
            .await
            .contains(Technology::ReactNative));
    }

    #[tokio::test]
    async fn test_skipped_when_already_known() {
        let fs = MockFileSystem::new();
        fs.add_file("Foo.app/Contents/Resources/main.jsbundle", "");
        let bundle = AppBundle::standard("/mock/Foo.app");

        let known = TechStack::single(Technology::ReactNative);
        assert!(scan(fs, &bundle, known).await.is_empty());
    }

    #[tokio::test]
    async fn test_no_bundle_is_empty() {
        let fs = MockFileSystem::new();
        fs.add_file("Foo.app/Contents/Resources/app.asar", "");
        fs.add_dir("Foo.app/Contents/Resources/en.lproj");
        let bundle = AppBundle::standard("/mock/Foo.app");

        assert!(scan(fs, &bundle, TechStack::new()).await.is_empty());
    }

    #[tokio::test]
    async fn test_symlinked_directory_not_followed() {
        let fs = MockFileSystem::new();
        fs.add_file("Shared/bundles/ui.jsbundle", "");
        fs.add_dir("Foo.app/Contents/Resources");
        fs.add_symlink("Foo.app/Contents/Resources/shared", "/mock/Shared/bundles");
        let bundle = AppBundle::standard("/mock/Foo.app");

        assert!(scan(fs, &bundle, TechStack::new()).await.is_empty());
    }

    #[tokio::test]
    async fn test_deeply_nested_jsbundle_is_found() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "Foo.app/Contents/Resources/a/b/c/d/e/f/g/h/i/j/k/l/deep.jsbundle",
            "",
        );
        let bundle = AppBundle::standard("/mock/Foo.app");

        assert_eq!(
            scan(fs, &bundle, TechStack::new()).await,
            TechStack::single(Technology::ReactNative)
        );
    }
}
