//! FileSystem trait definition

use std::path::Path;

/// Read-only view of a filesystem.
///
/// Relative paths resolve against the implementation's working directory:
/// the process cwd for [`RealFileSystem`](super::RealFileSystem), a fixed
/// directory for [`MockFileSystem`](super::MockFileSystem). Probes never fail;
/// anything that cannot be inspected is reported as absent.
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if path is a regular file
    fn is_file(&self, path: &Path) -> bool;
}
