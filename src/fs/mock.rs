use super::{DirEntry, FileSystem, FileType};
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};
use std::sync::RwLock;

const MAX_SYMLINK_HOPS: usize = 40;

#[derive(Debug, Clone)]
pub struct MockEntry {
    pub content: Option<Vec<u8>>,
    pub file_type: FileType,
    pub target: Option<PathBuf>,
}

impl MockEntry {
    fn dir() -> Self {
        Self {
            content: None,
            file_type: FileType::Directory,
            target: None,
        }
    }
}

enum Part {
    Root,
    Parent,
    Name(OsString),
}

fn parts_of(path: &Path) -> Vec<Part> {
    path.components()
        .filter_map(|c| match c {
            Component::RootDir => Some(Part::Root),
            Component::ParentDir => Some(Part::Parent),
            Component::Normal(name) => Some(Part::Name(name.to_os_string())),
            Component::CurDir | Component::Prefix(_) => None,
        })
        .collect()
}

/// In-memory file system with symlink support, used to stage app bundles in tests
pub struct MockFileSystem {
    files: RwLock<HashMap<PathBuf, MockEntry>>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
            root: PathBuf::from("/mock"),
        }
    }

    pub fn with_root(root: PathBuf) -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
            root,
        }
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        self.add_bytes(path, content.as_bytes());
    }

    pub fn add_bytes(&self, path: impl AsRef<Path>, content: &[u8]) {
        let path = self.normalize_path(path.as_ref());
        self.insert(
            path,
            MockEntry {
                content: Some(content.to_vec()),
                file_type: FileType::File,
                target: None,
            },
        );
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        self.insert(path, MockEntry::dir());
    }

    /// Create a symlink at `link` pointing to `target`.
    ///
    /// Relative targets are resolved against the link's parent directory, as on a
    /// real file system.
    pub fn add_symlink(&self, link: impl AsRef<Path>, target: impl AsRef<Path>) {
        let link = self.normalize_path(link.as_ref());
        self.insert(
            link,
            MockEntry {
                content: None,
                file_type: FileType::Symlink,
                target: Some(target.as_ref().to_path_buf()),
            },
        );
    }

    fn insert(&self, path: PathBuf, entry: MockEntry) {
        let mut files = self.files.write().unwrap();
        if let Some(parent) = path.parent() {
            Self::ensure_parents(&mut files, parent);
        }
        files.insert(path, entry);
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn ensure_parents(files: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            files.entry(current.clone()).or_insert_with(MockEntry::dir);
        }
    }

    /// Follow every symlink along `path`; `None` if the chain dangles or loops
    fn resolve(files: &HashMap<PathBuf, MockEntry>, path: &Path) -> Option<PathBuf> {
        let mut queue: Vec<Part> = parts_of(path);
        queue.reverse();

        let mut current = PathBuf::new();
        let mut hops = 0;

        while let Some(part) = queue.pop() {
            match part {
                Part::Root => current = PathBuf::from("/"),
                Part::Parent => {
                    current.pop();
                }
                Part::Name(name) => {
                    current.push(name);
                    let entry = files.get(&current)?;
                    if let (FileType::Symlink, Some(target)) = (entry.file_type, &entry.target) {
                        hops += 1;
                        if hops > MAX_SYMLINK_HOPS {
                            return None;
                        }
                        let parent = current.parent().map(Path::to_path_buf).unwrap_or_default();
                        let target = if target.is_absolute() {
                            target.clone()
                        } else {
                            parent.join(target)
                        };
                        current = parent;
                        let mut expanded = parts_of(&target);
                        expanded.reverse();
                        queue.extend(expanded);
                    }
                }
            }
        }

        files.contains_key(&current).then_some(current)
    }

    fn resolved_entry(&self, path: &Path) -> Option<(PathBuf, MockEntry)> {
        let path = self.normalize_path(path);
        let files = self.files.read().unwrap();
        let resolved = Self::resolve(&files, &path)?;
        files.get(&resolved).cloned().map(|entry| (resolved, entry))
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.resolved_entry(path).is_some()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.resolved_entry(path)
            .map(|(_, e)| e.file_type == FileType::Directory)
            .unwrap_or(false)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.resolved_entry(path)
            .map(|(_, e)| e.file_type == FileType::File)
            .unwrap_or(false)
    }

    fn is_symlink(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.files
            .read()
            .unwrap()
            .get(&path)
            .map(|e| e.file_type == FileType::Symlink)
            .unwrap_or(false)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        let (_, entry) = self
            .resolved_entry(path)
            .ok_or_else(|| anyhow!("File not found: {:?}", path))?;

        entry
            .content
            .ok_or_else(|| anyhow!("Not a file: {:?}", path))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let requested = self.normalize_path(path);
        let (resolved, entry) = self
            .resolved_entry(&requested)
            .ok_or_else(|| anyhow!("Directory not found: {:?}", path))?;

        if entry.file_type != FileType::Directory {
            return Err(anyhow!("Not a directory: {:?}", path));
        }

        let files = self.files.read().unwrap();
        let mut entries = Vec::new();
        for (file_path, entry) in files.iter() {
            if file_path.parent() == Some(resolved.as_path()) && file_path != &resolved {
                let name = file_path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("")
                    .to_string();

                entries.push(DirEntry {
                    path: requested.join(&name),
                    name,
                    file_type: entry.file_type,
                });
            }
        }

        Ok(entries)
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        self.resolved_entry(path)
            .map(|(resolved, _)| resolved)
            .ok_or_else(|| anyhow!("Path not found: {:?}", path))
    }
}
