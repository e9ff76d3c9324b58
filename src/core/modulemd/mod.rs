//! core::modulemd
//!
//! The modulemd document model and its boundary operations.
//!
//! # Modules
//!
//! - [`schema`] - Document types, one struct per record in the format
//! - [`document`] - Parse, encode, save and load
//!
//! # Wire Format
//!
//! A document is a YAML mapping with a fixed envelope:
//!
//! ```yaml
//! document: modulemd
//! version: 2
//! data:
//!   name: nodejs
//!   stream: "18"
//! ```
//!
//! Field names on the wire follow the format's own spelling
//! (`static_context`, `buildopts`, `srpm-buildroot`, `rpm-map`) and are
//! mapped to snake_case Rust fields by serde renames.

pub mod document;
pub mod schema;
mod serde_ext;

// Re-export commonly used types
pub use document::{parse, parse_stream, ModuleMdError, SaveStrategy};
pub use schema::{
    Artifacts, BuildOpts, Components, Dependency, Eol, License, ModuleComponent, ModuleData,
    ModuleMd, Profile, References, RpmArtifact, RpmBuildOpts, RpmComponent, RpmList, ServiceLevel,
    ServiceLevels, DOCUMENT_KIND, DOCUMENT_VERSION,
};
