//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Use this config file instead of the default
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// modulemd - inspect, check and normalize module metadata documents
#[derive(Parser, Debug)]
#[command(name = "modulemd")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that files decode as modulemd documents
    #[command(
        name = "check",
        long_about = "Decode each file and report its module identifier.\n\n\
            Files may hold a single document or a `---` separated stream of \
            documents. Every document is reported as `ok <file> <identifier>`. \
            The command fails if any file does not decode.\n\n\
            Only `modulemd` documents are understood. Other document kinds, \
            such as `modulemd-defaults` in repository metadata, do not decode.",
        after_help = "\
EXAMPLES:
    modulemd check nodejs.yaml
    modulemd check nodejs.yaml perl.yaml"
    )]
    Check {
        /// Files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Summarize a document
    Show {
        /// Document to show
        file: PathBuf,

        /// Print the whole document as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rewrite a document in normalized form
    #[command(
        name = "fmt",
        long_about = "Decode a document and write it back.\n\n\
            Keys are emitted in a fixed order and empty fields are dropped. \
            Unknown keys in the input are not preserved.",
        after_help = "\
EXAMPLES:
    # Normalize in place
    modulemd fmt nodejs.yaml

    # Write elsewhere, replacing the target atomically
    modulemd fmt nodejs.yaml -o out/nodejs.yaml --atomic"
    )]
    Fmt {
        /// Document to rewrite
        file: PathBuf,

        /// Output path (default: overwrite the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write to a temporary file and rename it into place
        #[arg(long)]
        atomic: bool,
    },

    /// Get, set, or list configuration values
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
EXAMPLES:
    modulemd completion bash > ~/.local/share/bash-completion/completions/modulemd
    modulemd completion zsh > ~/.zfunc/_modulemd"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
