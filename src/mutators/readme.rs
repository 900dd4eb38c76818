use crate::config::ReadmeConfig;
use crate::error::{PrepareError, Result};
use crate::mutators::{read_target, FileEdit};
use regex::{Captures, Regex};
use std::path::Path;

const FENCE: &str = "```";

/// Rewrite the `rev:` pin that follows the first line containing `marker`.
///
/// At most `window` lines after the marker are examined. The scan stops
/// without a result on another `repo:` line or on a fenced-block closer.
/// Line endings and every other line are preserved.
///
/// # Returns
/// * `Some(updated_text)` - A `rev:` line with a token was rewritten
/// * `None` - No marker, no `rev:` within the window, or an empty `rev:`
///
/// # Example
/// ```ignore
/// let text = "- repo: https://github.com/jakekaplan/loq\n  rev: v0.1.0\n";
/// let updated = plan_revision_pin(text, "repo: https://github.com/jakekaplan/loq", 4, "v0.2.0");
/// assert_eq!(updated.unwrap(), "- repo: https://github.com/jakekaplan/loq\n  rev: v0.2.0\n");
/// ```
pub fn plan_revision_pin(text: &str, marker: &str, window: usize, revision: &str) -> Option<String> {
    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();

    let marker_index = lines.iter().position(|line| line.contains(marker))?;
    let end = (marker_index + 1 + window).min(lines.len());

    let rev_token = Regex::new(r"rev:([ \t]*)\S+").ok()?;

    for index in marker_index + 1..end {
        let line = &lines[index];
        if line.contains("rev:") {
            if !rev_token.is_match(line) {
                return None;
            }
            let rewritten = rev_token
                .replacen(line, 1, |caps: &Captures| format!("rev:{}{}", &caps[1], revision))
                .into_owned();
            lines[index] = rewritten;
            return Some(lines.join("\n"));
        }
        if line.contains("repo:") || line.trim() == FENCE {
            return None;
        }
    }

    None
}

/// Plan the revision pin rewrite in the documentation file.
pub fn update_revision_pin(root: &Path, readme: &ReadmeConfig, revision: &str) -> Result<FileEdit> {
    let original = read_target(root, &readme.path)?;
    let updated = plan_revision_pin(&original, &readme.marker, readme.window, revision)
        .ok_or_else(|| {
            PrepareError::lookup(format!(
                "Could not find {} pre-commit rev to update",
                readme.path.display()
            ))
        })?;

    Ok(FileEdit {
        summary: format!("{}: rev → {}", readme.path.display(), revision),
        path: readme.path.clone(),
        original,
        updated,
    })
}
