//! fs
//!
//! Filesystem abstraction used to persist documents.
//!
//! # Architecture
//!
//! Documents are written through the [`Filesystem`] trait, which has two
//! implementations:
//!
//! - [`OsFs`]: the real filesystem, confined to a root directory
//! - [`MemoryFs`]: an in-memory tree with fault injection, for tests
//!
//! Both resolve paths the same way: every path is taken relative to the
//! root, a leading `/` is ignored, and `..` may not climb above the root.

mod memory_fs;
mod os_fs;
mod traits;

pub use memory_fs::{FailOn, FsOperation, MemoryFs};
pub use os_fs::OsFs;
pub use traits::{FileHandle, Filesystem, FsError};

use std::path::{Component, Path, PathBuf};

/// Resolve `path` to a clean path relative to a filesystem root.
pub(crate) fn resolve_relative(path: &Path) -> Result<PathBuf, FsError> {
    let mut resolved = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
            Component::ParentDir => {
                if !resolved.pop() {
                    return Err(FsError::PathEscapesRoot(path.to_path_buf()));
                }
            }
            Component::Normal(part) => resolved.push(part),
        }
    }
    Ok(resolved)
}
