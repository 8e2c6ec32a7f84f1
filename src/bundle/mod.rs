//! Application bundle layout.
//!
//! A regular bundle keeps everything under `Contents/`:
//!
//! ```text
//! Foo.app/Contents/Info.plist
//! Foo.app/Contents/MacOS/Foo
//! Foo.app/Contents/Frameworks/
//! Foo.app/Contents/Resources/
//! ```
//!
//! An iOS app wrapped for macOS exposes a `WrappedBundle` symlink pointing at the
//! real bundle (usually `Wrapper/Foo.app`). That inner bundle is flat: the
//! executable, `Info.plist`, `Frameworks/` and resources all live directly under
//! its root.

pub mod executable;
pub mod metadata;
pub mod resolver;

pub use executable::{resolve_executable, ExecutableDescriptor};
pub use metadata::{BundleMetadata, FsPlistReader, PlistReader};
pub use resolver::resolve_bundle;

use crate::stack::rules::WRAPPED_METADATA_FILE;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppBundle {
    /// Path the caller asked about
    pub requested_path: PathBuf,
    /// Directory actually analyzed
    pub resolved_path: PathBuf,
    /// True for the nested-wrapper layout
    pub is_wrapped: bool,
}

impl AppBundle {
    pub fn standard(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            resolved_path: path.clone(),
            requested_path: path,
            is_wrapped: false,
        }
    }

    pub fn wrapped(requested: impl Into<PathBuf>, resolved: impl Into<PathBuf>) -> Self {
        Self {
            requested_path: requested.into(),
            resolved_path: resolved.into(),
            is_wrapped: true,
        }
    }

    pub fn contents_dir(&self) -> PathBuf {
        if self.is_wrapped {
            self.resolved_path.clone()
        } else {
            self.resolved_path.join("Contents")
        }
    }

    pub fn executable_dir(&self) -> PathBuf {
        if self.is_wrapped {
            self.resolved_path.clone()
        } else {
            self.contents_dir().join("MacOS")
        }
    }

    pub fn frameworks_dir(&self) -> PathBuf {
        self.contents_dir().join("Frameworks")
    }

    pub fn resources_dir(&self) -> PathBuf {
        if self.is_wrapped {
            self.resolved_path.clone()
        } else {
            self.contents_dir().join("Resources")
        }
    }

    pub fn info_plist_path(&self) -> PathBuf {
        self.contents_dir().join("Info.plist")
    }

    /// Store metadata that sits beside a wrapped bundle, inside the wrapper directory
    pub fn wrapper_metadata_path(&self) -> Option<PathBuf> {
        if !self.is_wrapped {
            return None;
        }
        self.resolved_path
            .parent()
            .map(|wrapper| wrapper.join(WRAPPED_METADATA_FILE))
    }

    /// Name of the requested bundle without its extension (`Foo.app` -> `Foo`)
    pub fn display_name(&self) -> String {
        file_stem(&self.requested_path)
    }

    /// Name of the analyzed bundle without its extension
    pub fn resolved_stem(&self) -> String {
        file_stem(&self.resolved_path)
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
