//! Release preparation workflow
//!
//! Drives every step of a release in a fixed order. Each step is a hard gate:
//! the first error ends the run, and whatever was already done (branch,
//! edited files) is left in place for inspection.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::domain::ReleaseVersion;
use crate::error::{PrepareError, Result};
use crate::mutators::{self, FileEdit};
use crate::process::{args, CommandRunner};
use crate::ui;

/// Arguments for the prepare workflow
///
/// Mirrors the CLI arguments so the workflow can be driven without clap.
#[derive(Debug, Clone, PartialEq)]
pub struct PrepareWorkflowArgs {
    /// Version exactly as typed, e.g. `0.1.0a7`
    pub version: String,

    /// Validate and plan only; no writes, branches or remote calls
    pub dry_run: bool,
}

/// Result of a successful prepare workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Version in compact form, as supplied
    pub version: String,

    /// Version in dashed form
    pub dashed: String,

    /// Release branch name
    pub branch: String,

    /// Files rewritten (or that would be rewritten in a dry run)
    pub edited: Vec<PathBuf>,

    /// Pull request URL reported by `gh`; `None` for a dry run
    pub pull_request: Option<String>,
}

/// An external command with its full argument vector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCommand {
    pub program: &'static str,
    pub args: Vec<String>,
}

impl PlannedCommand {
    fn new(program: &'static str, args: Vec<String>) -> Self {
        PlannedCommand { program, args }
    }
}

impl fmt::Display for PlannedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Release preparation over one repository
pub struct Preparer<'a, R: CommandRunner> {
    root: PathBuf,
    config: &'a Config,
    runner: &'a R,
}

impl<'a, R: CommandRunner> Preparer<'a, R> {
    pub fn new<P: AsRef<Path>>(root: P, config: &'a Config, runner: &'a R) -> Self {
        Preparer {
            root: root.as_ref().to_path_buf(),
            config,
            runner,
        }
    }

    /// Run the whole workflow.
    ///
    /// 1. Require a clean working tree
    /// 2. Validate the version
    /// 3. Create the release branch
    /// 4. Rewrite root manifest, dependency pins, packaging descriptor, README pin
    /// 5. Refresh the lock file for the internal packages
    /// 6. Stage, commit, push and open the pull request
    pub fn run(&self, args: &PrepareWorkflowArgs) -> Result<WorkflowResult> {
        self.check_working_tree()?;
        let version = self.validate_version(&args.version)?;
        let branch = self.config.release.branch_for(version.compact());

        if args.dry_run {
            return self.dry_run(&version, branch);
        }

        let lock = self.lock_command()?;

        ui::display_status(&format!("Creating branch {}...", branch));
        self.exec(&self.branch_command(&branch))?;

        let edits = self.edit_files(&version, true)?;

        ui::display_status(&format!("Running {}...", lock));
        self.exec(&lock)?;

        ui::display_status("Committing changes...");
        self.exec(&self.add_command())?;
        self.exec(&self.commit_command(&version))?;

        ui::display_status("Pushing branch...");
        self.exec(&self.push_command(&branch))?;

        ui::display_status("Creating PR...");
        let pr = self.pr_command(&version);
        let url = self.runner.capture(pr.program, &pr.args)?;
        ui::display_success(&format!("Done: {}", url));

        Ok(WorkflowResult {
            version: version.compact().to_string(),
            dashed: version.to_dashed(),
            branch,
            edited: edits.into_iter().map(|e| e.path).collect(),
            pull_request: Some(url),
        })
    }

    /// Fail unless `git status --porcelain` reports nothing.
    pub fn check_working_tree(&self) -> Result<()> {
        ui::begin_step("Checking working tree")?;

        let status = match self.runner.capture("git", &args(["status", "--porcelain"])) {
            Ok(status) => status,
            Err(e) => {
                ui::fail_step("failed");
                return Err(e);
            }
        };

        if !status.is_empty() {
            ui::fail_step("dirty");
            return Err(PrepareError::DirtyWorkingTree);
        }

        ui::finish_step("clean");
        Ok(())
    }

    /// Parse the version and report its dashed form.
    pub fn validate_version(&self, input: &str) -> Result<ReleaseVersion> {
        ui::begin_step(&format!("Validating version {}", input))?;

        match ReleaseVersion::parse(input) {
            Ok(version) => {
                ui::finish_step(&format!("ok (semver: {})", version.to_dashed()));
                Ok(version)
            }
            Err(e) => {
                ui::fail_step("invalid");
                Err(e)
            }
        }
    }

    /// Plan every file edit in order, writing each one right away when `write`
    /// is set.
    ///
    /// Order: root manifest, dependency manifests, packaging descriptor,
    /// documentation pin. The root manifest and dependency pins take the
    /// dashed form, the packaging descriptor keeps the compact form.
    pub fn edit_files(&self, version: &ReleaseVersion, write: bool) -> Result<Vec<FileEdit>> {
        let dashed = version.to_dashed();
        let mut edits = Vec::new();

        let root_manifest = &self.config.root_manifest;
        let edit = mutators::update_section_version(
            &self.root,
            &root_manifest.path,
            &root_manifest.section,
            &dashed,
        )?;
        edits.push(self.commit_edit(edit, write)?);

        for manifest in &self.config.dependencies.manifests {
            let edit = mutators::update_dependency_versions(
                &self.root,
                manifest,
                &self.config.dependencies.packages,
                &dashed,
            )?;
            edits.push(self.commit_edit(edit, write)?);
        }

        let packaging = &self.config.packaging;
        let edit = mutators::update_section_version(
            &self.root,
            &packaging.path,
            &packaging.section,
            version.compact(),
        )?;
        edits.push(self.commit_edit(edit, write)?);

        let edit = mutators::update_revision_pin(
            &self.root,
            &self.config.readme,
            &format!("v{}", dashed),
        )?;
        edits.push(self.commit_edit(edit, write)?);

        Ok(edits)
    }

    fn commit_edit(&self, edit: FileEdit, write: bool) -> Result<FileEdit> {
        if write {
            ui::display_status(&format!("Updating {}", edit.summary));
            edit.apply(&self.root)?;
        } else {
            ui::display_edit(&edit.summary);
        }
        Ok(edit)
    }

    fn dry_run(&self, version: &ReleaseVersion, branch: String) -> Result<WorkflowResult> {
        ui::display_status("Dry run: planned edits");
        let edits = self.edit_files(version, false)?;

        ui::display_status("Dry run: commands that would run");
        for command in self.planned_commands(version, &branch)? {
            ui::display_planned_command(&command.to_string());
        }

        Ok(WorkflowResult {
            version: version.compact().to_string(),
            dashed: version.to_dashed(),
            branch,
            edited: edits.into_iter().map(|e| e.path).collect(),
            pull_request: None,
        })
    }

    /// Every command a real run issues after validation, in order.
    pub fn planned_commands(
        &self,
        version: &ReleaseVersion,
        branch: &str,
    ) -> Result<Vec<PlannedCommand>> {
        Ok(vec![
            self.branch_command(branch),
            self.lock_command()?,
            self.add_command(),
            self.commit_command(version),
            self.push_command(branch),
            self.pr_command(version),
        ])
    }

    fn exec(&self, command: &PlannedCommand) -> Result<()> {
        self.runner.run(command.program, &command.args)
    }

    fn branch_command(&self, branch: &str) -> PlannedCommand {
        PlannedCommand::new("git", args(["checkout", "-b", branch]))
    }

    /// `cargo update` scoped to the internal packages; never the whole lock file.
    fn lock_command(&self) -> Result<PlannedCommand> {
        if self.config.lock.packages.is_empty() {
            return Err(PrepareError::config("No lock packages configured"));
        }

        let mut lock_args = args(["update"]);
        for package in &self.config.lock.packages {
            lock_args.push("-p".to_string());
            lock_args.push(package.clone());
        }
        Ok(PlannedCommand::new("cargo", lock_args))
    }

    fn add_command(&self) -> PlannedCommand {
        let mut add_args = args(["add"]);
        add_args.extend(
            self.config
                .target_files()
                .iter()
                .map(|p| p.to_string_lossy().to_string()),
        );
        PlannedCommand::new("git", add_args)
    }

    fn commit_command(&self, version: &ReleaseVersion) -> PlannedCommand {
        let message = self.config.release.commit_message_for(version.compact());
        PlannedCommand::new("git", args(["commit".to_string(), "-m".to_string(), message]))
    }

    fn push_command(&self, branch: &str) -> PlannedCommand {
        PlannedCommand::new(
            "git",
            args(["push", "-u", self.config.release.remote.as_str(), branch]),
        )
    }

    fn pr_command(&self, version: &ReleaseVersion) -> PlannedCommand {
        let release = &self.config.release;
        PlannedCommand::new(
            "gh",
            args([
                "pr".to_string(),
                "create".to_string(),
                "--title".to_string(),
                release.pr_title_for(version.compact()),
                "--body".to_string(),
                release.pr_body_for(version.compact()),
            ]),
        )
    }
}

/// Run the prepare workflow with the given runner.
pub fn run_prepare_workflow<R: CommandRunner>(
    args: &PrepareWorkflowArgs,
    root: &Path,
    config: &Config,
    runner: &R,
) -> Result<WorkflowResult> {
    Preparer::new(root, config, runner).run(args)
}
