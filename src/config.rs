use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PrepareError, Result};

/// Name of the per-repository configuration file
pub const CONFIG_FILE_NAME: &str = "prepare.toml";

/// Name of the user-level fallback file inside the config directory
pub const USER_CONFIG_FILE_NAME: &str = "prep-release.toml";

/// Complete configuration for prep-release.
///
/// Describes which files carry version numbers and how the branch, commit
/// and pull request are named. Every field has a default, so an empty file
/// or a partial table behaves like the built-in layout.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub root_manifest: RootManifestConfig,

    #[serde(default)]
    pub dependencies: DependenciesConfig,

    #[serde(default)]
    pub packaging: PackagingConfig,

    #[serde(default)]
    pub readme: ReadmeConfig,

    #[serde(default)]
    pub lock: LockConfig,
}

/// Naming templates for the release branch, commit and pull request.
///
/// `{version}` is replaced with the version exactly as given on the command line.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_branch")]
    pub branch: String,

    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    #[serde(default = "default_pr_title")]
    pub pr_title: String,

    #[serde(default = "default_pr_body")]
    pub pr_body: String,

    #[serde(default = "default_remote")]
    pub remote: String,
}

fn default_branch() -> String {
    "prep-{version}".to_string()
}

fn default_commit_message() -> String {
    "prep-{version}".to_string()
}

fn default_pr_title() -> String {
    "prep-{version}".to_string()
}

fn default_pr_body() -> String {
    "Bumps version to {version}".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            branch: default_branch(),
            commit_message: default_commit_message(),
            pr_title: default_pr_title(),
            pr_body: default_pr_body(),
            remote: default_remote(),
        }
    }
}

impl ReleaseConfig {
    pub fn branch_for(&self, version: &str) -> String {
        render_template(&self.branch, version)
    }

    pub fn commit_message_for(&self, version: &str) -> String {
        render_template(&self.commit_message, version)
    }

    pub fn pr_title_for(&self, version: &str) -> String {
        render_template(&self.pr_title, version)
    }

    pub fn pr_body_for(&self, version: &str) -> String {
        render_template(&self.pr_body, version)
    }
}

fn render_template(template: &str, version: &str) -> String {
    template.replace("{version}", version)
}

/// Workspace manifest whose `version = "..."` lives in one section.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RootManifestConfig {
    #[serde(default = "default_root_manifest_path")]
    pub path: PathBuf,

    #[serde(default = "default_root_manifest_section")]
    pub section: String,
}

fn default_root_manifest_path() -> PathBuf {
    PathBuf::from("Cargo.toml")
}

fn default_root_manifest_section() -> String {
    "workspace.package".to_string()
}

impl Default for RootManifestConfig {
    fn default() -> Self {
        RootManifestConfig {
            path: default_root_manifest_path(),
            section: default_root_manifest_section(),
        }
    }
}

/// Packaging descriptor; its version keeps the compact form.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PackagingConfig {
    #[serde(default = "default_packaging_path")]
    pub path: PathBuf,

    #[serde(default = "default_packaging_section")]
    pub section: String,
}

fn default_packaging_path() -> PathBuf {
    PathBuf::from("pyproject.toml")
}

fn default_packaging_section() -> String {
    "project".to_string()
}

impl Default for PackagingConfig {
    fn default() -> Self {
        PackagingConfig {
            path: default_packaging_path(),
            section: default_packaging_section(),
        }
    }
}

/// Subpackage manifests that pin internal crates by path and version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DependenciesConfig {
    #[serde(default = "default_dependency_manifests")]
    pub manifests: Vec<PathBuf>,

    #[serde(default = "default_dependency_packages")]
    pub packages: Vec<String>,
}

fn default_dependency_manifests() -> Vec<PathBuf> {
    vec![
        PathBuf::from("crates/loq_cli/Cargo.toml"),
        PathBuf::from("crates/loq_fs/Cargo.toml"),
    ]
}

fn default_dependency_packages() -> Vec<String> {
    vec!["loq_core".to_string(), "loq_fs".to_string()]
}

impl Default for DependenciesConfig {
    fn default() -> Self {
        DependenciesConfig {
            manifests: default_dependency_manifests(),
            packages: default_dependency_packages(),
        }
    }
}

/// Documentation file with a pre-commit `rev:` pin.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReadmeConfig {
    #[serde(default = "default_readme_path")]
    pub path: PathBuf,

    /// Text identifying the line that opens the repository entry
    #[serde(default = "default_readme_marker")]
    pub marker: String,

    /// How many lines after the marker may hold the `rev:` line
    #[serde(default = "default_readme_window")]
    pub window: usize,
}

fn default_readme_path() -> PathBuf {
    PathBuf::from("README.md")
}

fn default_readme_marker() -> String {
    "repo: https://github.com/jakekaplan/loq".to_string()
}

fn default_readme_window() -> usize {
    4
}

impl Default for ReadmeConfig {
    fn default() -> Self {
        ReadmeConfig {
            path: default_readme_path(),
            marker: default_readme_marker(),
            window: default_readme_window(),
        }
    }
}

/// Lock file refreshed with `cargo update -p ...` after the manifests change.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LockConfig {
    #[serde(default = "default_lock_path")]
    pub path: PathBuf,

    #[serde(default = "default_lock_packages")]
    pub packages: Vec<String>,
}

fn default_lock_path() -> PathBuf {
    PathBuf::from("Cargo.lock")
}

fn default_lock_packages() -> Vec<String> {
    vec![
        "loq_core".to_string(),
        "loq_fs".to_string(),
        "loq".to_string(),
    ]
}

impl Default for LockConfig {
    fn default() -> Self {
        LockConfig {
            path: default_lock_path(),
            packages: default_lock_packages(),
        }
    }
}

impl Config {
    /// Files staged for the release commit, in commit order.
    pub fn target_files(&self) -> Vec<PathBuf> {
        let mut files = vec![self.root_manifest.path.clone(), self.lock.path.clone()];
        files.extend(self.dependencies.manifests.iter().cloned());
        files.push(self.packaging.path.clone());
        files.push(self.readme.path.clone());
        files
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `prepare.toml` in the repository root
/// 3. `prep-release.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, root: &Path) -> Result<Config> {
    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if root.join(CONFIG_FILE_NAME).exists() {
        root.join(CONFIG_FILE_NAME)
    } else if let Some(user_path) = dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE_NAME))
        .filter(|p| p.exists())
    {
        user_path
    } else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| PrepareError::file(&path, e))?;

    toml::from_str(&config_str).map_err(|e| {
        PrepareError::config(format!("{}: {}", path.display(), first_line(e.message())))
    })
}

fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or("").trim()
}
