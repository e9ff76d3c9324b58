//! core
//!
//! Core domain types, schemas, and operations.
//!
//! # Modules
//!
//! - [`modulemd`] - modulemd document schema, parsing and persistence
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - The document model is plain data; it holds no handles to the codec
//!   or the filesystem
//! - Decoding is permissive (absent means zero), encoding omits zeros

pub mod config;
pub mod modulemd;
