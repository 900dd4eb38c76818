use crate::error::{PrepareError, Result};
use crate::mutators::{read_target, FileEdit};
use crate::section::{locate_key_in_section, replace_value};
use std::path::Path;

const VERSION_KEY: &str = "version";

/// Replace `version = "..."` inside `[section]`.
///
/// # Returns
/// * `Some((old_version, updated_text))` - The key was found
/// * `None` - The section or the key is missing
pub fn plan_section_version(text: &str, section: &str, new_version: &str) -> Option<(String, String)> {
    let found = locate_key_in_section(text, section, VERSION_KEY)?;
    let updated = replace_value(text, &found, new_version);
    Some((found.value, updated))
}

/// Plan the version rewrite for a section-scoped file such as the workspace
/// manifest or the packaging descriptor.
pub fn update_section_version(
    root: &Path,
    path: &Path,
    section: &str,
    new_version: &str,
) -> Result<FileEdit> {
    let original = read_target(root, path)?;
    let (old_version, updated) = plan_section_version(&original, section, new_version)
        .ok_or_else(|| {
            PrepareError::lookup(format!(
                "Could not find version in [{}] of {}",
                section,
                path.display()
            ))
        })?;

    Ok(FileEdit {
        summary: format!("{}: {} → {}", path.display(), old_version, new_version),
        path: path.to_path_buf(),
        original,
        updated,
    })
}
