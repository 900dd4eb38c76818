#![allow(dead_code)]

use std::fs;
use std::path::Path;

pub const ROOT_MANIFEST: &str = r#"[workspace]
members = ["crates/*"]
resolver = "2"

[workspace.package]
version = "0.1.0-alpha.6"
edition = "2021"
license = "MIT"

[workspace.lints.rust]
unsafe_code = "forbid"
"#;

pub const CLI_MANIFEST: &str = r#"[package]
name = "loq_cli"
version.workspace = true
edition.workspace = true

[dependencies]
loq_core = { path = "../loq_core", version = "0.1.0-alpha.6" }
loq_fs = { path = "../loq_fs", version = "0.1.0-alpha.6" }
clap = { version = "4", features = ["derive"] }
"#;

pub const FS_MANIFEST: &str = r#"[package]
name = "loq_fs"
version.workspace = true

[dependencies]
loq_core = { path = "../loq_core", version = "0.1.0-alpha.6" }
walkdir = "2"
"#;

pub const PYPROJECT: &str = r#"[build-system]
requires = ["maturin>=1.0,<2.0"]
build-backend = "maturin"

[project]
name = "loq"
version = "0.1.0a6"
requires-python = ">=3.9"

[tool.maturin]
bindings = "bin"
"#;

pub const README: &str = r#"# loq

Use it with pre-commit:

```yaml
repos:
  - repo: https://github.com/jakekaplan/loq
    rev: v0.1.0-alpha.6
    hooks:
      - id: loq
```
"#;

pub const LOCK: &str = "# This file is automatically @generated by Cargo.\nversion = 4\n";

/// Lay out a repository with every default target file.
pub fn write_fixture(root: &Path) {
    fs::create_dir_all(root.join("crates/loq_cli")).unwrap();
    fs::create_dir_all(root.join("crates/loq_fs")).unwrap();
    fs::write(root.join("Cargo.toml"), ROOT_MANIFEST).unwrap();
    fs::write(root.join("Cargo.lock"), LOCK).unwrap();
    fs::write(root.join("crates/loq_cli/Cargo.toml"), CLI_MANIFEST).unwrap();
    fs::write(root.join("crates/loq_fs/Cargo.toml"), FS_MANIFEST).unwrap();
    fs::write(root.join("pyproject.toml"), PYPROJECT).unwrap();
    fs::write(root.join("README.md"), README).unwrap();
}

pub fn read(root: &Path, path: &str) -> String {
    fs::read_to_string(root.join(path)).unwrap()
}

/// Initialize a git repository in `root` and commit everything in it.
pub fn commit_all(root: &Path) -> git2::Repository {
    let repo = git2::Repository::init(root).unwrap();
    {
        let mut index = repo.index().unwrap();
        index
            .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
            .unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let sig = git2::Signature::now("Release Bot", "release@example.com").unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
            .unwrap();
    }
    repo
}
