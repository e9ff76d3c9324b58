//! fmt command - Rewrite a document in normalized form

use std::path::Path;

use anyhow::{Context as _, Result};

use super::locate;
use crate::cli::Context;
use crate::core::modulemd::{ModuleMd, SaveStrategy};
use crate::ui::output;

/// Decode `file` and write it back to `output_path` (or `file` itself).
///
/// `--atomic` overrides the configured save strategy.
pub fn fmt(ctx: &Context, file: &Path, output_path: Option<&Path>, atomic: bool) -> Result<()> {
    let (in_fs, in_name) = locate(file)?;
    let doc = ModuleMd::load(&in_fs, &in_name)
        .with_context(|| format!("Failed to load {}", file.display()))?;

    let target = output_path.unwrap_or(file);
    let strategy = if atomic {
        SaveStrategy::Atomic
    } else {
        ctx.config.save_strategy()
    };

    let (out_fs, out_name) = locate(target)?;
    doc.save_with(&out_fs, &out_name, strategy)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    output::print(format!("formatted {}", target.display()), ctx.verbosity);
    Ok(())
}
