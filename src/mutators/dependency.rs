use crate::error::{PrepareError, Result};
use crate::mutators::{read_target, FileEdit};
use regex::{Captures, Regex};
use std::path::Path;

/// Rewrite the version of every `NAME = { path = "...", version = "..." }`
/// declaration whose NAME is one of `packages`.
///
/// Only the quoted version changes; the package name, the path and anything
/// after the version are kept as written.
///
/// # Returns
/// * `Ok((count, updated_text))` - Number of declarations rewritten
/// * `Err` - If `packages` is empty
pub fn plan_dependency_versions(
    text: &str,
    packages: &[String],
    new_version: &str,
) -> Result<(usize, String)> {
    if packages.is_empty() {
        return Err(PrepareError::config("No internal dependency packages configured"));
    }

    let names = packages
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = Regex::new(&format!(
        r#"(?m)^([ \t]*(?:{}) = \{{ path = "[^"\n]+", version = )"[^"\n]+""#,
        names
    ))
    .map_err(|e| PrepareError::config(format!("Invalid dependency package name: {}", e)))?;

    let mut count = 0;
    let updated = pattern.replace_all(text, |caps: &Captures| {
        count += 1;
        format!("{}\"{}\"", &caps[1], new_version)
    });

    Ok((count, updated.into_owned()))
}

/// Plan the dependency pin rewrite for one subpackage manifest.
///
/// A manifest without any matching declaration is a lookup failure.
pub fn update_dependency_versions(
    root: &Path,
    path: &Path,
    packages: &[String],
    new_version: &str,
) -> Result<FileEdit> {
    let original = read_target(root, path)?;
    let (count, updated) = plan_dependency_versions(&original, packages, new_version)?;

    if count == 0 {
        return Err(PrepareError::lookup(format!(
            "No dependency versions found to update in {}",
            path.display()
        )));
    }

    Ok(FileEdit {
        summary: format!(
            "{}: {} dependency pin{} → {}",
            path.display(),
            count,
            if count == 1 { "" } else { "s" },
            new_version
        ),
        path: path.to_path_buf(),
        original,
        updated,
    })
}
