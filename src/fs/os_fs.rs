//! fs::os_fs
//!
//! Real filesystem confined to a root directory.
//!
//! # Example
//!
//! ```no_run
//! use modulemd::fs::{Filesystem, OsFs};
//! use std::path::Path;
//!
//! let fs = OsFs::new("/srv/modules");
//! let bytes = fs.read(Path::new("nodejs/modulemd.yaml"))?;
//! # Ok::<(), modulemd::fs::FsError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::traits::{FileHandle, Filesystem, FsError};

/// Filesystem rooted at a directory on disk.
///
/// Every path handed to this filesystem is resolved beneath `root`.
/// Absolute paths are re-rooted and `..` may not climb out of it.
#[derive(Debug, Clone)]
pub struct OsFs {
    root: PathBuf,
}

impl OsFs {
    /// Create a filesystem rooted at `root`.
    ///
    /// The directory does not need to exist yet; [`Filesystem::create`]
    /// creates missing directories.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a filesystem path to the on-disk path.
    fn full_path(&self, path: &Path) -> Result<PathBuf, FsError> {
        Ok(self.root.join(super::resolve_relative(path)?))
    }
}

impl Filesystem for OsFs {
    fn remove(&self, path: &Path) -> Result<(), FsError> {
        let full = self.full_path(path)?;
        fs::remove_file(&full).map_err(|e| FsError::io(&full, e))
    }

    fn create(&self, path: &Path) -> Result<Box<dyn FileHandle>, FsError> {
        let full = self.full_path(path)?;
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).map_err(|e| FsError::io(parent, e))?;
        }

        let file = File::create(&full).map_err(|e| FsError::io(&full, e))?;
        Ok(Box::new(OsFile { path: full, file }))
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, FsError> {
        let full = self.full_path(path)?;
        fs::read(&full).map_err(|e| FsError::io(&full, e))
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), FsError> {
        let from = self.full_path(from)?;
        let to = self.full_path(to)?;
        fs::rename(&from, &to).map_err(|e| FsError::io(&from, e))
    }

    fn exists(&self, path: &Path) -> Result<bool, FsError> {
        let full = self.full_path(path)?;
        full.try_exists().map_err(|e| FsError::io(&full, e))
    }
}

/// Open file on disk.
struct OsFile {
    path: PathBuf,
    file: File,
}

impl FileHandle for OsFile {
    fn write(&mut self, buf: &[u8]) -> Result<usize, FsError> {
        self.file.write(buf).map_err(|e| FsError::io(&self.path, e))
    }

    fn close(mut self: Box<Self>) -> Result<(), FsError> {
        self.file.flush().map_err(|e| FsError::io(&self.path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_fs() -> (TempDir, OsFs) {
        let temp = TempDir::new().expect("create temp dir");
        let fs = OsFs::new(temp.path());
        (temp, fs)
    }

    fn write_file(fs: &OsFs, path: &str, contents: &[u8]) {
        let mut file = fs.create(Path::new(path)).expect("create");
        file.write_all(contents).expect("write");
        file.close().expect("close");
    }

    #[test]
    fn create_write_read() {
        let (_temp, fs) = create_test_fs();

        write_file(&fs, "module.yaml", b"document: modulemd\n");

        let contents = fs.read(Path::new("module.yaml")).expect("read");
        assert_eq!(contents, b"document: modulemd\n");
    }

    #[test]
    fn create_truncates_existing() {
        let (_temp, fs) = create_test_fs();

        write_file(&fs, "module.yaml", b"a much longer first version\n");
        write_file(&fs, "module.yaml", b"short\n");

        let contents = fs.read(Path::new("module.yaml")).expect("read");
        assert_eq!(contents, b"short\n");
    }

    #[test]
    fn creates_directory_if_missing() {
        let (temp, fs) = create_test_fs();

        write_file(&fs, "nested/dir/module.yaml", b"x");

        assert!(temp.path().join("nested/dir/module.yaml").exists());
    }

    #[test]
    fn absolute_paths_are_rerooted() {
        let (temp, fs) = create_test_fs();

        write_file(&fs, "/module.yaml", b"x");

        assert!(temp.path().join("module.yaml").exists());
    }

    #[test]
    fn escaping_root_rejected() {
        let (_temp, fs) = create_test_fs();

        let result = fs.create(Path::new("../outside.yaml"));
        assert!(matches!(result, Err(FsError::PathEscapesRoot(_))));
    }

    #[test]
    fn remove_missing_is_not_found() {
        let (_temp, fs) = create_test_fs();

        let result = fs.remove(Path::new("missing.yaml"));
        assert!(matches!(result, Err(FsError::NotFound(_))));
    }

    #[test]
    fn remove_existing() {
        let (_temp, fs) = create_test_fs();

        write_file(&fs, "module.yaml", b"x");
        fs.remove(Path::new("module.yaml")).expect("remove");

        assert!(!fs.exists(Path::new("module.yaml")).expect("exists"));
    }

    #[test]
    fn rename_replaces_target() {
        let (_temp, fs) = create_test_fs();

        write_file(&fs, "module.yaml", b"old");
        write_file(&fs, "module.yaml.tmp", b"new");
        fs.rename(Path::new("module.yaml.tmp"), Path::new("module.yaml"))
            .expect("rename");

        assert_eq!(fs.read(Path::new("module.yaml")).expect("read"), b"new");
        assert!(!fs.exists(Path::new("module.yaml.tmp")).expect("exists"));
    }

    #[test]
    fn read_missing_is_not_found() {
        let (_temp, fs) = create_test_fs();

        let result = fs.read(Path::new("missing.yaml"));
        assert!(matches!(result, Err(FsError::NotFound(_))));
    }

    #[test]
    fn root_accessor() {
        let (temp, fs) = create_test_fs();
        assert_eq!(fs.root(), temp.path());
    }
}
