//! FileSystem trait definition

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Type of file system entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    File,
    Directory,
    Symlink,
}

/// A directory entry returned by read_dir
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub path: PathBuf,
    pub name: String,
    pub file_type: FileType,
}

impl DirEntry {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.name
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    pub fn is_file(&self) -> bool {
        self.file_type == FileType::File
    }

    pub fn is_dir(&self) -> bool {
        self.file_type == FileType::Directory
    }

    /// Extension of the entry name, without the leading dot
    pub fn extension(&self) -> Option<&str> {
        Path::new(&self.name).extension().and_then(|e| e.to_str())
    }
}

/// Abstraction over the file system operations used by bundle detection.
///
/// Every stage of the pipeline reads the disk through this trait, so a whole
/// detection can be driven against [`super::MockFileSystem`] in tests.
pub trait FileSystem: Send + Sync {
    /// Check if a path exists (following symlinks)
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory (following symlinks)
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if path is a regular file (following symlinks)
    fn is_file(&self, path: &Path) -> bool;

    /// Check if the path itself is a symlink, without following it
    fn is_symlink(&self, path: &Path) -> bool;

    /// Read the whole file
    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// List immediate children of a directory.
    ///
    /// Symlinks are reported as [`FileType::Symlink`] and never followed.
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;

    /// Resolve every symlink in `path` and return the absolute target
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_entry() {
        let entry = DirEntry {
            path: PathBuf::from("/Applications/Foo.app/Contents/Info.plist"),
            name: "Info.plist".to_string(),
            file_type: FileType::File,
        };
        assert_eq!(
            entry.path(),
            Path::new("/Applications/Foo.app/Contents/Info.plist")
        );
        assert_eq!(entry.file_name(), "Info.plist");
        assert_eq!(entry.file_type(), FileType::File);
        assert_eq!(entry.extension(), Some("plist"));
        assert!(entry.is_file());
        assert!(!entry.is_dir());
    }

    #[test]
    fn test_dir_entry_without_extension() {
        let entry = DirEntry {
            path: PathBuf::from("/Applications/Foo.app/Contents/MacOS/Foo"),
            name: "Foo".to_string(),
            file_type: FileType::File,
        };
        assert_eq!(entry.extension(), None);
    }
}
