//! show command - Summarize a document

use std::path::Path;

use anyhow::{Context as _, Result};

use super::locate;
use crate::cli::Context;
use crate::core::modulemd::{ModuleData, ModuleMd};
use crate::ui::output::{self, format_field, format_inline_list};

const LABEL_WIDTH: usize = 12;

/// Print a summary of the document at `file`, or the whole document as JSON.
pub fn show(ctx: &Context, file: &Path, json: bool) -> Result<()> {
    let (fs, name) = locate(file)?;
    let doc = ModuleMd::load(&fs, &name)
        .with_context(|| format!("Failed to load {}", file.display()))?;

    if json {
        let text = serde_json::to_string_pretty(&doc).context("Failed to render JSON")?;
        output::print(text, ctx.verbosity);
    } else {
        output::print(summary(&doc.data), ctx.verbosity);
    }

    Ok(())
}

/// Human-readable summary of the data block.
fn summary(data: &ModuleData) -> String {
    let or_dash = |s: &str| {
        if s.is_empty() {
            "-".to_string()
        } else {
            s.to_string()
        }
    };

    let lines = [
        format_field("name", or_dash(&data.name), LABEL_WIDTH),
        format_field("stream", or_dash(&data.stream), LABEL_WIDTH),
        format_field("version", data.version, LABEL_WIDTH),
        format_field("context", or_dash(&data.context), LABEL_WIDTH),
        format_field("arch", or_dash(&data.arch), LABEL_WIDTH),
        format_field("summary", or_dash(&data.summary), LABEL_WIDTH),
        format_field(
            "profiles",
            format_inline_list(data.profiles.keys().chain(data.profile.keys())),
            LABEL_WIDTH,
        ),
        format_field(
            "components",
            format!(
                "{} rpms, {} modules",
                data.components.rpms.len(),
                data.components.modules.len()
            ),
            LABEL_WIDTH,
        ),
        format_field(
            "artifacts",
            format!(
                "{} rpms, {} mapped",
                data.artifacts.rpms.len(),
                data.artifacts.rpm_map_len()
            ),
            LABEL_WIDTH,
        ),
    ];

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::modulemd::Profile;

    #[test]
    fn summary_lists_identity_and_counts() {
        let mut doc = ModuleMd::new("perl", "5.32");
        doc.data.profiles.insert("common".into(), Profile::default());
        doc.data.profile.insert("minimal".into(), Profile::default());

        let text = summary(&doc.data);

        assert!(text.contains("name:"));
        assert!(text.contains("perl"));
        assert!(text.contains("common, minimal"));
        assert!(text.contains("0 rpms, 0 modules"));
        assert!(text.lines().any(|l| l.starts_with("context:") && l.ends_with('-')));
    }
}
