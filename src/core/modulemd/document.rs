//! core::modulemd::document
//!
//! Decoding and persisting modulemd documents.
//!
//! # Operations
//!
//! - [`parse`]: bytes to [`ModuleMd`]
//! - [`parse_stream`]: a multi-document YAML stream to a list of documents
//! - [`ModuleMd::to_yaml`]: encode only
//! - [`ModuleMd::save`]: encode and write through a [`Filesystem`]
//! - [`ModuleMd::load`]: read through a [`Filesystem`] and decode
//!
//! # Save Semantics
//!
//! The default [`SaveStrategy::Replace`] removes whatever is at the target
//! path (ignoring failure), creates the file, writes the encoded bytes and
//! closes the handle. The handle is closed on every path out of the write,
//! and a close failure is not reported. This sequence is not crash-safe:
//! an interruption can leave the path missing or truncated.
//!
//! [`SaveStrategy::Atomic`] runs the same sequence against `<path>.tmp`
//! and then renames the temporary file over the target. If the write or the
//! rename fails the temporary file is removed and the target is untouched.
//!
//! Either way the target ends up holding exactly the new encoding.
//!
//! # Example
//!
//! ```
//! use modulemd::core::modulemd::{parse, ModuleMd};
//! use modulemd::fs::MemoryFs;
//!
//! let doc = parse(b"document: modulemd\nversion: 2\ndata:\n  name: perl\n").unwrap();
//! assert_eq!(doc.data.name, "perl");
//!
//! let fs = MemoryFs::new();
//! doc.save(&fs, "perl.yaml").unwrap();
//! assert_eq!(ModuleMd::load(&fs, "perl.yaml").unwrap(), doc);
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::schema::ModuleMd;
use crate::fs::{Filesystem, FsError};

/// Errors from modulemd operations.
#[derive(Debug, Error)]
pub enum ModuleMdError {
    /// Input is not well-formed YAML or a value has the wrong type.
    #[error("failed to decode modulemd document: {0}")]
    Decode(#[source] serde_yaml::Error),

    /// The document could not be encoded.
    #[error("failed to encode modulemd document: {0}")]
    Encode(#[source] serde_yaml::Error),

    /// Filesystem failure while reading or writing.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: FsError,
    },
}

impl ModuleMdError {
    fn io(path: &Path, source: FsError) -> Self {
        ModuleMdError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Check if this is a decode error.
    pub fn is_decode(&self) -> bool {
        matches!(self, ModuleMdError::Decode(_))
    }

    /// Check if this is an encode error.
    pub fn is_encode(&self) -> bool {
        matches!(self, ModuleMdError::Encode(_))
    }

    /// Check if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, ModuleMdError::Io { .. })
    }
}

/// How [`ModuleMd::save_with`] replaces an existing file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveStrategy {
    /// Remove, create, write, close. Not crash-safe.
    #[default]
    Replace,
    /// Write `<path>.tmp` the same way, then rename it over the target.
    Atomic,
}

/// Decode a single modulemd document.
///
/// Keys missing from the input keep their zero value. Input that is empty
/// or holds only a null document decodes to [`ModuleMd::default`]. In a
/// `---` separated stream only the first document is decoded; use
/// [`parse_stream`] to read them all.
///
/// # Errors
///
/// Returns [`ModuleMdError::Decode`] if the bytes are not well-formed YAML
/// or contain a value that does not fit its field (e.g. a mapping where a
/// list is expected).
pub fn parse(input: &[u8]) -> Result<ModuleMd, ModuleMdError> {
    if input.iter().all(u8::is_ascii_whitespace) {
        return Ok(ModuleMd::default());
    }

    let doc = match serde_yaml::Deserializer::from_slice(input).next() {
        Some(first) => Option::<ModuleMd>::deserialize(first).map_err(ModuleMdError::Decode)?,
        None => None,
    };
    debug!(bytes = input.len(), "decoded modulemd document");
    Ok(doc.unwrap_or_default())
}

/// Decode every document in a YAML stream (`---` separated).
///
/// Repository metadata commonly concatenates many module documents into a
/// single file. An empty stream yields an empty list.
///
/// # Errors
///
/// Returns [`ModuleMdError::Decode`] on the first document that fails.
pub fn parse_stream(input: &[u8]) -> Result<Vec<ModuleMd>, ModuleMdError> {
    let mut docs = Vec::new();
    for document in serde_yaml::Deserializer::from_slice(input) {
        let doc = Option::<ModuleMd>::deserialize(document).map_err(ModuleMdError::Decode)?;
        docs.push(doc.unwrap_or_default());
    }
    debug!(documents = docs.len(), "decoded modulemd stream");
    Ok(docs)
}

impl ModuleMd {
    /// Parse a document from bytes. See [`parse`].
    pub fn parse(input: &[u8]) -> Result<Self, ModuleMdError> {
        parse(input)
    }

    /// Encode the document as YAML.
    ///
    /// Fields at their zero value are left out.
    pub fn to_yaml(&self) -> Result<String, ModuleMdError> {
        serde_yaml::to_string(self).map_err(ModuleMdError::Encode)
    }

    /// Encode the document and write it to `path`, replacing any existing file.
    ///
    /// Uses [`SaveStrategy::Replace`].
    pub fn save(&self, fs: &dyn Filesystem, path: impl AsRef<Path>) -> Result<(), ModuleMdError> {
        self.save_with(fs, path, SaveStrategy::Replace)
    }

    /// Encode the document and write it to `path` using `strategy`.
    ///
    /// # Errors
    ///
    /// - [`ModuleMdError::Encode`] if encoding fails; nothing is written
    /// - [`ModuleMdError::Io`] if create, write or rename fails
    pub fn save_with(
        &self,
        fs: &dyn Filesystem,
        path: impl AsRef<Path>,
        strategy: SaveStrategy,
    ) -> Result<(), ModuleMdError> {
        let path = path.as_ref();
        let contents = self.to_yaml()?;

        match strategy {
            SaveStrategy::Replace => write_replacing(fs, path, contents.as_bytes()),
            SaveStrategy::Atomic => {
                let temp_path = temp_path_for(path);
                if let Err(e) = write_replacing(fs, &temp_path, contents.as_bytes()) {
                    let _ = fs.remove(&temp_path);
                    return Err(e);
                }

                if let Err(e) = fs.rename(&temp_path, path) {
                    let _ = fs.remove(&temp_path);
                    return Err(ModuleMdError::io(path, e));
                }
                debug!(path = %path.display(), "renamed temporary file into place");
                Ok(())
            }
        }
    }

    /// Read and decode the document at `path`.
    ///
    /// # Errors
    ///
    /// - [`ModuleMdError::Io`] if the file cannot be read
    /// - [`ModuleMdError::Decode`] if its contents do not decode
    pub fn load(fs: &dyn Filesystem, path: impl AsRef<Path>) -> Result<Self, ModuleMdError> {
        let path = path.as_ref();
        let bytes = fs.read(path).map_err(|e| ModuleMdError::io(path, e))?;
        parse(&bytes)
    }
}

/// Remove, create, write, close.
fn write_replacing(fs: &dyn Filesystem, path: &Path, bytes: &[u8]) -> Result<(), ModuleMdError> {
    if let Err(e) = fs.remove(path) {
        debug!(path = %path.display(), error = %e, "nothing removed before write");
    }

    let mut file = fs.create(path).map_err(|e| ModuleMdError::io(path, e))?;
    let written = file.write_all(bytes);

    if let Err(e) = file.close() {
        debug!(path = %path.display(), error = %e, "close failed after write");
    }

    written.map_err(|e| ModuleMdError::io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote modulemd document");
    Ok(())
}

/// `<path>.tmp`, next to the target.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
