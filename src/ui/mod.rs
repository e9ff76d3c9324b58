//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! Command results go to stdout through this module so `--quiet` is
//! honored in one place. Diagnostics go through `tracing` instead.

pub mod output;
