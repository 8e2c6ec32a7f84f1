use super::{DirEntry, FileSystem, FileType};
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_symlink(&self, path: &Path) -> bool {
        fs::symlink_metadata(path)
            .map(|meta| meta.file_type().is_symlink())
            .unwrap_or(false)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).context(format!("Failed to read file {:?}", path))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let entries = fs::read_dir(path).context(format!("Failed to read directory {:?}", path))?;

        let mut result = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!(dir = %path.display(), error = %e, "Skipping unreadable directory entry");
                    continue;
                }
            };
            let entry_path = entry.path();
            let Some(file_type) = entry_kind(entry.file_type(), &entry_path) else {
                continue;
            };

            result.push(DirEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                path: entry_path,
                file_type,
            });
        }

        Ok(result)
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        path.canonicalize()
            .context(format!("Failed to canonicalize path {:?}", path))
    }
}

/// Map an entry's type, or `None` when it cannot be determined and the entry is skipped
fn entry_kind(file_type: io::Result<fs::FileType>, path: &Path) -> Option<FileType> {
    match file_type {
        Ok(ft) if ft.is_symlink() => Some(FileType::Symlink),
        Ok(ft) if ft.is_dir() => Some(FileType::Directory),
        Ok(_) => Some(FileType::File),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Skipping entry with unknown file type");
            None
        }
    }
}
