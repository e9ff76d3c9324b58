//! check command - Decode files and report module identifiers

use std::path::PathBuf;

use anyhow::{bail, Result};

use super::locate;
use crate::cli::Context;
use crate::core::modulemd::parse_stream;
use crate::fs::Filesystem;
use crate::ui::output;

/// Check that every file decodes.
///
/// Each decoded document prints `ok <file> <nsvca>`. Failures are reported
/// as they occur and the command fails once all files have been tried.
pub fn check(ctx: &Context, files: &[PathBuf]) -> Result<()> {
    let mut failed = 0;

    for file in files {
        match check_file(file) {
            Ok(ids) => {
                for id in ids {
                    let id = if id.is_empty() { "-".to_string() } else { id };
                    output::print(format!("ok {} {}", file.display(), id), ctx.verbosity);
                }
            }
            Err(e) => {
                failed += 1;
                output::error(format!("{}: {:#}", file.display(), e));
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} files failed to decode", failed, files.len());
    }
    Ok(())
}

fn check_file(file: &std::path::Path) -> Result<Vec<String>> {
    let (fs, name) = locate(file)?;
    let bytes = fs.read(&name)?;
    let docs = parse_stream(&bytes)?;
    Ok(docs.iter().map(|doc| doc.data.nsvca()).collect())
}
