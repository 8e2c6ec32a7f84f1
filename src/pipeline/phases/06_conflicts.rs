use crate::bundle::AppBundle;
use crate::fs::FileSystem;
use crate::stack::rules::{COMPILED_INTERFACE_EXTENSIONS, LEGACY_UI_CARDINALITY_LIMIT};
use crate::stack::{TechStack, Technology};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictResolution {
    /// Final, never empty
    pub stack: TechStack,
    /// Whether compiled interface files sit in the resource directory
    pub compiled_interface: bool,
}

/// Applies the cardinality and fallback rules to the accumulated evidence
pub struct ConflictResolver;

impl ConflictResolver {
    pub fn resolve(
        &self,
        fs: &dyn FileSystem,
        bundle: &AppBundle,
        mut stack: TechStack,
    ) -> ConflictResolution {
        let compiled_interface = has_compiled_interface(fs, bundle);
        if compiled_interface {
            stack.insert(Technology::AppKit);
        }

        if stack.len() > LEGACY_UI_CARDINALITY_LIMIT && stack.remove(Technology::AppKit) {
            debug!(stack = %stack, "Dropped AppKit in favor of more specific tags");
        }

        if stack.is_empty() {
            stack.insert(Technology::AppKit);
        }

        ConflictResolution {
            stack,
            compiled_interface,
        }
    }
}

/// Non-recursive check for `*.nib` / `*.storyboardc` directly in the resource directory
fn has_compiled_interface(fs: &dyn FileSystem, bundle: &AppBundle) -> bool {
    fs.read_dir(&bundle.resources_dir())
        .map(|entries| {
            entries.iter().any(|entry| {
                entry
                    .extension()
                    .is_some_and(|ext| COMPILED_INTERFACE_EXTENSIONS.contains(&ext))
            })
        })
        .unwrap_or(false)
}
