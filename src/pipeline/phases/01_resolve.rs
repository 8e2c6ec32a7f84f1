use crate::bundle::{resolve_bundle, resolve_executable, AppBundle, BundleMetadata, ExecutableDescriptor};
use crate::pipeline::context::DetectionContext;
use std::path::Path;
use tracing::debug;

/// A bundle with its analysis root, metadata and executable fixed
#[derive(Debug, Clone)]
pub struct ResolvedBundle {
    pub bundle: AppBundle,
    pub metadata: BundleMetadata,
    pub executable: Option<ExecutableDescriptor>,
}

pub struct ResolvePhase;

impl ResolvePhase {
    pub fn execute(&self, context: &DetectionContext, path: &Path) -> ResolvedBundle {
        let fs = context.file_system.as_ref();
        let bundle = resolve_bundle(fs, path);
        let metadata = BundleMetadata::load(context.plist_reader.as_ref(), &bundle);
        let executable = resolve_executable(fs, &bundle, &metadata);

        debug!(
            bundle = %bundle.requested_path.display(),
            resolved = %bundle.resolved_path.display(),
            wrapped = bundle.is_wrapped,
            executable = ?executable.as_ref().map(|e| &e.name),
            "Bundle resolved"
        );

        ResolvedBundle {
            bundle,
            metadata,
            executable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use crate::pipeline::PipelineConfig;
    use crate::tools::{MockLister, MockStringExtractor};
    use std::path::PathBuf;
    use std::sync::Arc;

    const INFO_PLIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<dict>
    <key>CFBundleExecutable</key>
    <string>Runner</string>
    <key>CFBundleIdentifier</key>
    <string>com.example.runner</string>
</dict>
</plist>"#;

    fn context(fs: MockFileSystem) -> DetectionContext {
        DetectionContext::with_collaborators(
            Arc::new(fs),
            Arc::new(MockLister::returning("")),
            Arc::new(MockStringExtractor::returning("")),
            PipelineConfig::default(),
        )
    }

    #[test]
    fn test_standard_bundle() {
        let fs = MockFileSystem::new();
        fs.add_file("Foo.app/Contents/Info.plist", INFO_PLIST);
        fs.add_file("Foo.app/Contents/MacOS/Runner", "");
        let context = context(fs);

        let resolved = ResolvePhase.execute(&context, Path::new("/mock/Foo.app"));

        assert!(!resolved.bundle.is_wrapped);
        assert_eq!(
            resolved.metadata.identifier.as_deref(),
            Some("com.example.runner")
        );
        let exe = resolved.executable.unwrap();
        assert_eq!(exe.name, "Runner");
        assert!(!exe.from_fallback);
    }

    #[test]
    fn test_wrapped_bundle_reads_inner_metadata() {
        let fs = MockFileSystem::new();
        fs.add_file("Game.app/Wrapper/Game.app/Info.plist", INFO_PLIST);
        fs.add_file("Game.app/Wrapper/Game.app/Runner", "");
        fs.add_symlink("Game.app/WrappedBundle", "Wrapper/Game.app");
        let context = context(fs);

        let resolved = ResolvePhase.execute(&context, Path::new("/mock/Game.app"));

        assert!(resolved.bundle.is_wrapped);
        assert_eq!(
            resolved.bundle.resolved_path,
            PathBuf::from("/mock/Game.app/Wrapper/Game.app")
        );
        assert_eq!(resolved.executable.unwrap().name, "Runner");
    }

    #[test]
    fn test_missing_executable_is_none() {
        let fs = MockFileSystem::new();
        fs.add_file("Empty.app/Contents/Info.plist", INFO_PLIST);
        fs.add_dir("Empty.app/Contents/MacOS");
        let context = context(fs);

        let resolved = ResolvePhase.execute(&context, Path::new("/mock/Empty.app"));
        assert!(resolved.executable.is_none());
    }
}
