use super::{AppBundle, BundleMetadata};
use crate::fs::{DirEntry, FileSystem, FileType};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// The bundle's primary executable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutableDescriptor {
    pub name: String,
    pub path: PathBuf,
    /// True when the declared `CFBundleExecutable` was missing or absent on disk
    pub from_fallback: bool,
}

/// Locate the executable to inspect.
///
/// The declared `CFBundleExecutable` wins when it exists on disk. Otherwise a
/// file named after the bundle, then the first file by name in the executable
/// directory, stands in for it. `None` means the bundle cannot be classified.
pub fn resolve_executable(
    fs: &dyn FileSystem,
    bundle: &AppBundle,
    metadata: &BundleMetadata,
) -> Option<ExecutableDescriptor> {
    let executable_dir = bundle.executable_dir();

    if let Some(name) = &metadata.executable {
        let path = executable_dir.join(name);
        if fs.is_file(&path) {
            return Some(ExecutableDescriptor {
                name: name.clone(),
                path,
                from_fallback: false,
            });
        }
        debug!(
            bundle = %bundle.requested_path.display(),
            executable = %name,
            "Declared executable not found, falling back"
        );
    }

    let entries = match fs.read_dir(&executable_dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(dir = %executable_dir.display(), error = %e, "Cannot list executable directory");
            return None;
        }
    };

    let mut candidates: Vec<DirEntry> = entries
        .into_iter()
        .filter(|entry| is_candidate(fs, bundle, entry))
        .collect();
    candidates.sort_by(|a, b| a.name.cmp(&b.name));

    let stem = bundle.resolved_stem();
    let chosen = match candidates.iter().position(|entry| entry.name == stem) {
        Some(index) => candidates.swap_remove(index),
        None => candidates.into_iter().next()?,
    };

    Some(ExecutableDescriptor {
        name: chosen.name,
        path: chosen.path,
        from_fallback: true,
    })
}

fn is_candidate(fs: &dyn FileSystem, bundle: &AppBundle, entry: &DirEntry) -> bool {
    if entry.name.starts_with('.') {
        return false;
    }

    let is_file = match entry.file_type {
        FileType::File => true,
        FileType::Symlink => fs.is_file(&entry.path),
        FileType::Directory => false,
    };

    // The flat layout mixes the executable with Info.plist, assets and the like
    is_file && (!bundle.is_wrapped || entry.extension().is_none())
}
