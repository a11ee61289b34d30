use super::FileSystem;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Directory,
}

/// In-memory filesystem with its own working directory.
///
/// Relative paths are joined onto `cwd`, which lets tests observe cwd-relative
/// resolution without touching the process working directory.
pub struct MockFileSystem {
    entries: RwLock<HashMap<PathBuf, EntryKind>>,
    cwd: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::with_cwd(PathBuf::from("/mock"))
    }

    pub fn with_cwd(cwd: impl Into<PathBuf>) -> Self {
        let cwd = cwd.into();
        let fs = Self {
            entries: RwLock::new(HashMap::new()),
            cwd: cwd.clone(),
        };
        fs.add_dir(&cwd);
        fs
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn add_file(&self, path: impl AsRef<Path>) {
        let path = self.resolve(path.as_ref());
        let mut entries = self.entries.write().unwrap();
        if let Some(parent) = path.parent() {
            Self::ensure_parents(&mut entries, parent);
        }
        entries.insert(path, EntryKind::File);
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = self.resolve(path.as_ref());
        let mut entries = self.entries.write().unwrap();
        Self::ensure_parents(&mut entries, &path);
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        };

        let mut normalized = PathBuf::new();
        for component in joined.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    normalized.pop();
                }
                other => normalized.push(other),
            }
        }
        normalized
    }

    fn ensure_parents(entries: &mut HashMap<PathBuf, EntryKind>, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            entries
                .entry(current.clone())
                .or_insert(EntryKind::Directory);
        }
    }

    fn kind(&self, path: &Path) -> Option<EntryKind> {
        let path = self.resolve(path);
        self.entries.read().unwrap().get(&path).copied()
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.kind(path).is_some()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.kind(path) == Some(EntryKind::Directory)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.kind(path) == Some(EntryKind::File)
    }
}
