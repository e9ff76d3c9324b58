//! fs::traits
//!
//! Filesystem trait definitions.
//!
//! # Design
//!
//! The trait mirrors the handful of calls a document writer needs: remove,
//! create, write, close, plus read/rename/exists for loading and the atomic
//! save path. Paths are always interpreted relative to the filesystem's
//! root; climbing above it with `..` is an error.
//!
//! # Example
//!
//! ```
//! use modulemd::fs::{FileHandle, Filesystem, MemoryFs};
//! use std::path::Path;
//!
//! let fs = MemoryFs::new();
//! let mut file = fs.create(Path::new("out/module.yaml")).unwrap();
//! file.write_all(b"document: modulemd\n").unwrap();
//! file.close().unwrap();
//!
//! assert_eq!(fs.read(Path::new("out/module.yaml")).unwrap(), b"document: modulemd\n");
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from filesystem operations.
#[derive(Debug, Error)]
pub enum FsError {
    /// Nothing exists at the path.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The path resolves outside the filesystem root.
    #[error("path escapes filesystem root: {}", .0.display())]
    PathEscapesRoot(PathBuf),

    /// I/O failure from the backing store.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failure requested through [`MemoryFs::fail_on`](super::MemoryFs::fail_on).
    #[error("injected failure: {0}")]
    Injected(String),
}

impl FsError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            FsError::NotFound(path.to_path_buf())
        } else {
            FsError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// An open, writable file.
///
/// Handles must be closed explicitly. Dropping a handle without calling
/// [`close`](FileHandle::close) releases the resource but skips any close
/// reporting the backend does.
pub trait FileHandle: Send {
    /// Write part of `buf`, returning how many bytes were accepted.
    fn write(&mut self, buf: &[u8]) -> Result<usize, FsError>;

    /// Close the handle.
    fn close(self: Box<Self>) -> Result<(), FsError>;

    /// Write the whole buffer, retrying short writes.
    ///
    /// A write that accepts zero bytes is reported as
    /// [`io::ErrorKind::WriteZero`].
    fn write_all(&mut self, mut buf: &[u8]) -> Result<usize, FsError> {
        let total = buf.len();
        while !buf.is_empty() {
            let n = self.write(buf)?;
            if n == 0 {
                return Err(FsError::Io {
                    path: PathBuf::new(),
                    source: io::Error::new(
                        io::ErrorKind::WriteZero,
                        "failed to write whole buffer",
                    ),
                });
            }
            buf = &buf[n..];
        }
        Ok(total)
    }
}

/// A rooted filesystem.
///
/// Implementations must be thread-safe (Send + Sync).
pub trait Filesystem: Send + Sync {
    /// Remove the file at `path`.
    ///
    /// Returns [`FsError::NotFound`] if nothing is there.
    fn remove(&self, path: &Path) -> Result<(), FsError>;

    /// Create (or truncate) the file at `path`, creating parent directories.
    fn create(&self, path: &Path) -> Result<Box<dyn FileHandle>, FsError>;

    /// Read the whole file at `path`.
    fn read(&self, path: &Path) -> Result<Vec<u8>, FsError>;

    /// Move `from` over `to`, replacing any file at `to`.
    fn rename(&self, from: &Path, to: &Path) -> Result<(), FsError>;

    /// Check whether a file exists at `path`.
    fn exists(&self, path: &Path) -> Result<bool, FsError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Handle that accepts at most `chunk` bytes per call.
    struct Trickle {
        chunk: usize,
        written: Vec<u8>,
    }

    impl FileHandle for Trickle {
        fn write(&mut self, buf: &[u8]) -> Result<usize, FsError> {
            let n = buf.len().min(self.chunk);
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn close(self: Box<Self>) -> Result<(), FsError> {
            Ok(())
        }
    }

    #[test]
    fn write_all_retries_short_writes() {
        let mut handle = Trickle {
            chunk: 3,
            written: Vec::new(),
        };

        let n = handle.write_all(b"document: modulemd").expect("write_all");

        assert_eq!(n, 18);
        assert_eq!(handle.written, b"document: modulemd");
    }

    #[test]
    fn write_all_reports_zero_progress() {
        let mut handle = Trickle {
            chunk: 0,
            written: Vec::new(),
        };

        let err = handle.write_all(b"x").unwrap_err();
        match err {
            FsError::Io { source, .. } => assert_eq!(source.kind(), io::ErrorKind::WriteZero),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn io_not_found_maps_to_not_found() {
        let err = FsError::io(
            Path::new("gone.yaml"),
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert!(matches!(err, FsError::NotFound(_)));
    }

    #[test]
    fn error_display_formatting() {
        let err = FsError::PathEscapesRoot(PathBuf::from("../etc/passwd"));
        assert!(err.to_string().contains("escapes"));

        let err = FsError::Injected("write".into());
        assert!(err.to_string().contains("injected"));
    }
}
