//! modulemd - typed module metadata documents
//!
//! A modulemd document describes a software module: its name and stream,
//! dependencies, components, build options and produced artifacts. This
//! crate models the document as plain Rust data, decodes it from YAML and
//! writes it back through a small filesystem abstraction.
//!
//! # Architecture
//!
//! - [`core`] - Document schema, parse/save operations, configuration
//! - [`fs`] - Filesystem abstraction (on-disk and in-memory)
//! - [`cli`] - Command-line interface layer
//! - [`ui`] - Output helpers for the CLI
//!
//! # Example
//!
//! ```
//! use modulemd::core::modulemd::{parse, ModuleMd};
//! use modulemd::fs::MemoryFs;
//!
//! let input = b"document: modulemd\nversion: 2\ndata:\n  name: nodejs\n  stream: '18'\n";
//! let doc = parse(input).unwrap();
//! assert_eq!(doc.data.nsvca(), "nodejs:18");
//!
//! let fs = MemoryFs::new();
//! doc.save(&fs, "nodejs.yaml").unwrap();
//! assert_eq!(ModuleMd::load(&fs, "nodejs.yaml").unwrap(), doc);
//! ```

pub mod cli;
pub mod core;
pub mod fs;
pub mod ui;
