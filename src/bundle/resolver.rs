use super::AppBundle;
use crate::fs::FileSystem;
use crate::stack::rules::WRAPPED_BUNDLE_MARKER;
use std::path::Path;
use tracing::debug;

/// Determine the directory to analyze for a bundle root.
///
/// When the root carries a `WrappedBundle` symlink the whole symlink chain is
/// followed to the real bundle. Any failure along the way falls back to the
/// requested root.
pub fn resolve_bundle(fs: &dyn FileSystem, root: &Path) -> AppBundle {
    let marker = root.join(WRAPPED_BUNDLE_MARKER);
    if !fs.is_symlink(&marker) {
        return AppBundle::standard(root);
    }

    match fs.canonicalize(&marker) {
        Ok(resolved) if fs.is_dir(&resolved) => {
            debug!(
                bundle = %root.display(),
                resolved = %resolved.display(),
                "Resolved wrapped bundle"
            );
            AppBundle::wrapped(root, resolved)
        }
        Ok(resolved) => {
            debug!(
                bundle = %root.display(),
                target = %resolved.display(),
                "Wrapped bundle marker does not point at a directory"
            );
            AppBundle::standard(root)
        }
        Err(e) => {
            debug!(bundle = %root.display(), error = %e, "Wrapped bundle marker did not resolve");
            AppBundle::standard(root)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use std::path::PathBuf;

    fn applications() -> MockFileSystem {
        MockFileSystem::with_root(PathBuf::from("/Applications"))
    }

    #[test]
    fn test_plain_bundle_is_not_wrapped() {
        let fs = applications();
        fs.add_file("Foo.app/Contents/MacOS/Foo", "");

        let bundle = resolve_bundle(&fs, Path::new("/Applications/Foo.app"));
        assert_eq!(bundle, AppBundle::standard("/Applications/Foo.app"));
    }

    #[test]
    fn test_wrapped_bundle_resolves_to_inner_bundle() {
        let fs = applications();
        fs.add_file("Game.app/Wrapper/Game.app/Game", "");
        fs.add_symlink("Game.app/WrappedBundle", "Wrapper/Game.app");

        let bundle = resolve_bundle(&fs, Path::new("/Applications/Game.app"));
        assert!(bundle.is_wrapped);
        assert_eq!(bundle.requested_path, PathBuf::from("/Applications/Game.app"));
        assert_eq!(
            bundle.resolved_path,
            PathBuf::from("/Applications/Game.app/Wrapper/Game.app")
        );
    }

    #[test]
    fn test_wrapped_bundle_through_intermediate_symlink() {
        let fs = applications();
        fs.add_file("Game.app/Data/Real.app/Game", "");
        fs.add_symlink("Game.app/Wrapper", "Data");
        fs.add_symlink("Game.app/WrappedBundle", "Wrapper/Real.app");

        let bundle = resolve_bundle(&fs, Path::new("/Applications/Game.app"));
        assert!(bundle.is_wrapped);
        assert_eq!(
            bundle.resolved_path,
            PathBuf::from("/Applications/Game.app/Data/Real.app")
        );
    }

    #[test]
    fn test_dangling_marker_falls_back_to_root() {
        let fs = applications();
        fs.add_dir("Game.app");
        fs.add_symlink("Game.app/WrappedBundle", "Wrapper/Missing.app");

        let bundle = resolve_bundle(&fs, Path::new("/Applications/Game.app"));
        assert_eq!(bundle, AppBundle::standard("/Applications/Game.app"));
    }

    #[test]
    fn test_marker_pointing_at_file_falls_back_to_root() {
        let fs = applications();
        fs.add_file("Game.app/Wrapper/notes.txt", "");
        fs.add_symlink("Game.app/WrappedBundle", "Wrapper/notes.txt");

        let bundle = resolve_bundle(&fs, Path::new("/Applications/Game.app"));
        assert!(!bundle.is_wrapped);
    }

    #[test]
    fn test_marker_directory_is_not_a_wrapper() {
        let fs = applications();
        fs.add_file("Game.app/Contents/MacOS/Game", "");
        fs.add_file("Game.app/WrappedBundle/Contents/MacOS/Other", "");

        let bundle = resolve_bundle(&fs, Path::new("/Applications/Game.app"));
        assert_eq!(bundle, AppBundle::standard("/Applications/Game.app"));
    }
}
