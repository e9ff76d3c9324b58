//! fs::memory_fs
//!
//! In-memory filesystem for deterministic testing.
//!
//! # Design
//!
//! Files live in a shared map; clones see the same tree. Writes land in the
//! stored file immediately, so a failed save leaves exactly what was written
//! before the failure. A single operation can be configured to fail, and
//! every call is recorded for later inspection.
//!
//! # Example
//!
//! ```
//! use modulemd::fs::{FailOn, Filesystem, FsError, MemoryFs};
//! use std::path::Path;
//!
//! let fs = MemoryFs::new().fail_on(FailOn::Create);
//!
//! let result = fs.create(Path::new("module.yaml"));
//! assert!(matches!(result, Err(FsError::Injected(_))));
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::traits::{FileHandle, Filesystem, FsError};

/// In-memory filesystem.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    inner: Arc<Mutex<MemoryFsInner>>,
}

/// Internal mutable state.
#[derive(Debug, Default)]
struct MemoryFsInner {
    /// File contents by resolved path.
    files: BTreeMap<PathBuf, Vec<u8>>,
    /// Operation to fail on.
    fail_on: Option<FailOn>,
    /// Recorded operations.
    operations: Vec<FsOperation>,
}

/// Which operation should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Remove,
    Create,
    Write,
    Close,
    Read,
    Rename,
}

/// Recorded operation for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsOperation {
    Remove { path: PathBuf },
    Create { path: PathBuf },
    Write { path: PathBuf, len: usize },
    Close { path: PathBuf },
    Read { path: PathBuf },
    Rename { from: PathBuf, to: PathBuf },
}

impl MemoryFs {
    /// Create an empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the filesystem to fail on a specific operation.
    pub fn fail_on(self, fail_on: FailOn) -> Self {
        self.state().fail_on = Some(fail_on);
        self
    }

    /// Clear the failure configuration.
    pub fn clear_fail_on(&self) {
        self.state().fail_on = None;
    }

    /// Get all recorded operations.
    pub fn operations(&self) -> Vec<FsOperation> {
        self.state().operations.clone()
    }

    /// Clear recorded operations.
    pub fn clear_operations(&self) {
        self.state().operations.clear();
    }

    /// Insert a file directly, bypassing failure injection and recording.
    pub fn insert(&self, path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) {
        if let Ok(path) = super::resolve_relative(path.as_ref()) {
            self.state().files.insert(path, contents.into());
        }
    }

    /// Get file contents directly, bypassing failure injection and recording.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        let path = super::resolve_relative(path.as_ref()).ok()?;
        self.state().files.get(&path).cloned()
    }

    /// Number of files held.
    pub fn len(&self) -> usize {
        self.state().files.len()
    }

    /// Check whether the filesystem holds no files.
    pub fn is_empty(&self) -> bool {
        self.state().files.is_empty()
    }

    fn state(&self) -> MutexGuard<'_, MemoryFsInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MemoryFsInner {
    fn check(&self, op: FailOn) -> Result<(), FsError> {
        if self.fail_on == Some(op) {
            return Err(FsError::Injected(format!("{:?}", op).to_lowercase()));
        }
        Ok(())
    }
}

impl Filesystem for MemoryFs {
    fn remove(&self, path: &Path) -> Result<(), FsError> {
        let path = super::resolve_relative(path)?;
        let mut inner = self.state();
        inner.operations.push(FsOperation::Remove { path: path.clone() });
        inner.check(FailOn::Remove)?;

        match inner.files.remove(&path) {
            Some(_) => Ok(()),
            None => Err(FsError::NotFound(path)),
        }
    }

    fn create(&self, path: &Path) -> Result<Box<dyn FileHandle>, FsError> {
        let path = super::resolve_relative(path)?;
        let mut inner = self.state();
        inner.operations.push(FsOperation::Create { path: path.clone() });
        inner.check(FailOn::Create)?;

        inner.files.insert(path.clone(), Vec::new());
        Ok(Box::new(MemoryFile {
            fs: self.clone(),
            path,
        }))
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, FsError> {
        let path = super::resolve_relative(path)?;
        let mut inner = self.state();
        inner.operations.push(FsOperation::Read { path: path.clone() });
        inner.check(FailOn::Read)?;

        inner
            .files
            .get(&path)
            .cloned()
            .ok_or(FsError::NotFound(path))
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), FsError> {
        let from = super::resolve_relative(from)?;
        let to = super::resolve_relative(to)?;
        let mut inner = self.state();
        inner.operations.push(FsOperation::Rename {
            from: from.clone(),
            to: to.clone(),
        });
        inner.check(FailOn::Rename)?;

        let contents = inner
            .files
            .remove(&from)
            .ok_or_else(|| FsError::NotFound(from.clone()))?;
        inner.files.insert(to, contents);
        Ok(())
    }

    fn exists(&self, path: &Path) -> Result<bool, FsError> {
        let path = super::resolve_relative(path)?;
        Ok(self.state().files.contains_key(&path))
    }
}

/// Open in-memory file. Writes append to the stored contents.
struct MemoryFile {
    fs: MemoryFs,
    path: PathBuf,
}

impl FileHandle for MemoryFile {
    fn write(&mut self, buf: &[u8]) -> Result<usize, FsError> {
        let mut inner = self.fs.state();
        inner.operations.push(FsOperation::Write {
            path: self.path.clone(),
            len: buf.len(),
        });
        inner.check(FailOn::Write)?;

        match inner.files.get_mut(&self.path) {
            Some(contents) => {
                contents.extend_from_slice(buf);
                Ok(buf.len())
            }
            None => Err(FsError::NotFound(self.path.clone())),
        }
    }

    fn close(self: Box<Self>) -> Result<(), FsError> {
        let mut inner = self.fs.state();
        inner.operations.push(FsOperation::Close {
            path: self.path.clone(),
        });
        inner.check(FailOn::Close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_write_close_read() {
        let fs = MemoryFs::new();

        let mut file = fs.create(Path::new("module.yaml")).expect("create");
        file.write_all(b"hello").expect("write");
        file.close().expect("close");

        assert_eq!(fs.read(Path::new("module.yaml")).expect("read"), b"hello");
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFs::new();
        let clone = fs.clone();

        fs.insert("module.yaml", "x");

        assert!(clone.exists(Path::new("module.yaml")).expect("exists"));
        assert_eq!(clone.len(), 1);
    }

    #[test]
    fn paths_are_normalized() {
        let fs = MemoryFs::new();

        fs.insert("/a/./b/../module.yaml", "x");

        assert_eq!(fs.contents("a/module.yaml"), Some(b"x".to_vec()));
    }

    #[test]
    fn remove_missing_is_not_found() {
        let fs = MemoryFs::new();

        let result = fs.remove(Path::new("missing.yaml"));
        assert!(matches!(result, Err(FsError::NotFound(_))));
    }

    #[test]
    fn create_truncates() {
        let fs = MemoryFs::new();
        fs.insert("module.yaml", "old contents");

        let file = fs.create(Path::new("module.yaml")).expect("create");
        file.close().expect("close");

        assert_eq!(fs.contents("module.yaml"), Some(Vec::new()));
    }

    #[test]
    fn injected_write_failure() {
        let fs = MemoryFs::new().fail_on(FailOn::Write);

        let mut file = fs.create(Path::new("module.yaml")).expect("create");
        let result = file.write(b"data");

        assert!(matches!(result, Err(FsError::Injected(_))));
        assert_eq!(fs.contents("module.yaml"), Some(Vec::new()));
    }

    #[test]
    fn clear_fail_on_restores_behavior() {
        let fs = MemoryFs::new().fail_on(FailOn::Create);
        assert!(fs.create(Path::new("a.yaml")).is_err());

        fs.clear_fail_on();
        assert!(fs.create(Path::new("a.yaml")).is_ok());
    }

    #[test]
    fn records_operations() {
        let fs = MemoryFs::new();

        let mut file = fs.create(Path::new("m.yaml")).expect("create");
        file.write(b"abc").expect("write");
        file.close().expect("close");

        assert_eq!(
            fs.operations(),
            vec![
                FsOperation::Create {
                    path: PathBuf::from("m.yaml")
                },
                FsOperation::Write {
                    path: PathBuf::from("m.yaml"),
                    len: 3
                },
                FsOperation::Close {
                    path: PathBuf::from("m.yaml")
                },
            ]
        );

        fs.clear_operations();
        assert!(fs.operations().is_empty());
    }

    #[test]
    fn rename_moves_contents() {
        let fs = MemoryFs::new();
        fs.insert("a.tmp", "new");
        fs.insert("a", "old");

        fs.rename(Path::new("a.tmp"), Path::new("a")).expect("rename");

        assert_eq!(fs.contents("a"), Some(b"new".to_vec()));
        assert!(fs.contents("a.tmp").is_none());
    }

    #[test]
    fn escaping_root_rejected() {
        let fs = MemoryFs::new();

        let result = fs.read(Path::new("../etc/passwd"));
        assert!(matches!(result, Err(FsError::PathEscapesRoot(_))));
    }
}
