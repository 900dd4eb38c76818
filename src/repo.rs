use crate::error::{PrepareError, Result};
use git2::Repository;
use std::path::{Path, PathBuf};

/// Find the working directory of the git repository containing `start`.
///
/// Searches `start` and its parents, like `git` itself does.
///
/// # Returns
/// * `Ok(PathBuf)` - Root of the working tree
/// * `Err` - If `start` is not inside a repository or the repository is bare
pub fn discover_root<P: AsRef<Path>>(start: P) -> Result<PathBuf> {
    let repo = Repository::discover(start.as_ref())?;

    let workdir = repo.workdir().ok_or_else(|| {
        PrepareError::config(format!(
            "Repository at {} has no working tree",
            repo.path().display()
        ))
    })?;

    Ok(workdir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_from_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        Repository::init(dir.path()).unwrap();
        let nested = dir.path().join("crates/loq_cli");
        std::fs::create_dir_all(&nested).unwrap();

        let root = discover_root(&nested).unwrap();
        assert_eq!(
            root.canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_bare_repository_has_no_root() {
        let dir = tempfile::tempdir().unwrap();
        Repository::init_bare(dir.path()).unwrap();

        let err = discover_root(dir.path()).unwrap_err();
        assert!(err.to_string().contains("no working tree"));
    }

    #[test]
    fn test_outside_repository_fails() {
        let dir = tempfile::tempdir().unwrap();
        // tempdirs normally live outside any repository; skip if not
        if Repository::discover(dir.path()).is_ok() {
            return;
        }
        let err = discover_root(dir.path()).unwrap_err();
        assert!(matches!(err, PrepareError::Git(_)));
    }
}
