//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeSet, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use strata_core::{
    application::{ApplicationError, ports::Filesystem},
    error::StrataResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep one handle and give another to
/// the service under test.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    directories: BTreeSet<PathBuf>,
    files: HashSet<PathBuf>,
    denied: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Place a regular file at `path` (testing helper).
    ///
    /// Creating a directory at or below a file fails, as it would on disk.
    pub fn add_file(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.files.insert(path.into());
        }
    }

    /// Make every `create_dir_all` call for exactly `path` fail with a
    /// permission error.
    pub fn deny(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.denied.insert(path.into());
        }
    }

    /// All directories, sorted.
    pub fn directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> StrataResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::FilesystemLockError)?;

        if inner.denied.contains(path) {
            return Err(ApplicationError::DirectoryCreation {
                path: path.to_path_buf(),
                reason: "Permission denied (os error 13)".into(),
            }
            .into());
        }

        let mut current = PathBuf::new();
        let mut missing = Vec::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains(&current) {
                return Err(ApplicationError::DirectoryCreation {
                    path: path.to_path_buf(),
                    reason: format!("{} is a file", current.display()),
                }
                .into());
            }
            missing.push(current.clone());
        }

        inner.directories.extend(missing);
        Ok(())
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_records_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/a/b/c")).unwrap();

        assert!(fs.is_dir(Path::new("/a")));
        assert!(fs.is_dir(Path::new("/a/b")));
        assert!(fs.is_dir(Path::new("/a/b/c")));
    }

    #[test]
    fn denied_path_fails_without_side_effects() {
        let fs = MemoryFilesystem::new();
        fs.deny("/a/b");

        assert!(fs.create_dir_all(Path::new("/a/b")).is_err());
        assert!(fs.directories().is_empty());
    }

    #[test]
    fn file_blocks_directory_creation() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/a/file");

        let err = fs.create_dir_all(Path::new("/a/file/sub")).unwrap_err();
        assert!(err.to_string().contains("is a file"));
        assert!(!fs.is_dir(Path::new("/a/file")));
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let handle = fs.clone();
        fs.create_dir_all(Path::new("/x")).unwrap();
        assert!(handle.is_dir(Path::new("/x")));

        handle.create_dir_all(Path::new("/y")).unwrap();
        assert_eq!(
            fs.directories(),
            vec![PathBuf::from("/"), PathBuf::from("/x"), PathBuf::from("/y")]
        );
    }
}
