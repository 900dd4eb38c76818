//! File mutators for the release target set
//!
//! Each mutator is split in two:
//! - a pure `plan_*` function that rewrites text in memory
//! - an `update_*` wrapper that reads the file and returns a [FileEdit]
//!
//! Nothing is written until [FileEdit::apply] is called, which is what lets a
//! dry run surface every lookup failure without touching the tree.

pub mod dependency;
pub mod manifest;
pub mod readme;

pub use dependency::{plan_dependency_versions, update_dependency_versions};
pub use manifest::{plan_section_version, update_section_version};
pub use readme::{plan_revision_pin, update_revision_pin};

use crate::error::{PrepareError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A pending rewrite of one target file
#[derive(Debug, Clone, PartialEq)]
pub struct FileEdit {
    /// Path relative to the repository root
    pub path: PathBuf,
    pub original: String,
    pub updated: String,
    /// One-line description for progress output
    pub summary: String,
}

impl FileEdit {
    pub fn is_change(&self) -> bool {
        self.original != self.updated
    }

    /// Write the updated content back over the file.
    pub fn apply(&self, root: &Path) -> Result<()> {
        let full = root.join(&self.path);
        fs::write(&full, &self.updated).map_err(|e| PrepareError::file(&self.path, e))
    }
}

pub(crate) fn read_target(root: &Path, path: &Path) -> Result<String> {
    fs::read_to_string(root.join(path)).map_err(|e| PrepareError::file(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_writes_updated_content() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("pyproject.toml"), "old").unwrap();

        let edit = FileEdit {
            path: PathBuf::from("pyproject.toml"),
            original: "old".to_string(),
            updated: "new".to_string(),
            summary: "pyproject.toml: old → new".to_string(),
        };
        assert!(edit.is_change());
        edit.apply(dir.path()).unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("pyproject.toml")).unwrap(), "new");
    }

    #[test]
    fn test_read_missing_target_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_target(dir.path(), Path::new("README.md")).unwrap_err();
        assert!(err.to_string().contains("README.md"));
    }
}
