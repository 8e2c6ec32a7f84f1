//! Property list access for bundle metadata

use super::AppBundle;
use crate::fs::FileSystem;
use plist::{Dictionary, Value};
use serde::Serialize;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Reads a property list file into a dictionary; `None` when absent or unreadable
pub trait PlistReader: Send + Sync {
    fn read_dictionary(&self, path: &Path) -> Option<Dictionary>;
}

/// Parses XML and binary property lists read through a [`FileSystem`]
pub struct FsPlistReader {
    file_system: Arc<dyn FileSystem>,
}

impl FsPlistReader {
    pub fn new(file_system: Arc<dyn FileSystem>) -> Self {
        Self { file_system }
    }
}

impl PlistReader for FsPlistReader {
    fn read_dictionary(&self, path: &Path) -> Option<Dictionary> {
        if !self.file_system.is_file(path) {
            return None;
        }

        let bytes = match self.file_system.read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Failed to read property list");
                return None;
            }
        };

        match Value::from_reader(Cursor::new(bytes)) {
            Ok(value) => value.into_dictionary(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to parse property list");
                None
            }
        }
    }
}

/// The Info.plist keys detection cares about
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BundleMetadata {
    pub executable: Option<String>,
    pub identifier: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub category: Option<String>,
}

impl BundleMetadata {
    pub fn from_dictionary(dict: &Dictionary) -> Self {
        let string = |key: &str| {
            dict.get(key)
                .and_then(Value::as_string)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        Self {
            executable: string("CFBundleExecutable"),
            identifier: string("CFBundleIdentifier"),
            name: string("CFBundleDisplayName").or_else(|| string("CFBundleName")),
            version: string("CFBundleShortVersionString"),
            category: string("LSApplicationCategoryType"),
        }
    }

    pub fn load(reader: &dyn PlistReader, bundle: &AppBundle) -> Self {
        reader
            .read_dictionary(&bundle.info_plist_path())
            .map(|dict| Self::from_dictionary(&dict))
            .unwrap_or_default()
    }
}
