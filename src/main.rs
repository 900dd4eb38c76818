use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use prep_release::cli::{run_prepare_workflow, PrepareWorkflowArgs};
use prep_release::process::SystemRunner;
use prep_release::{config, repo, ui};

#[derive(clap::Parser)]
#[command(
    name = "prep-release",
    version,
    about = "Prepare a release: bump versions across the repository and open a pull request"
)]
struct Args {
    #[arg(
        value_name = "VERSION",
        help = "Release version in PEP 440 form (e.g., 0.1.0a7, 1.0.0, 2.0.0rc1)"
    )]
    release_version: String,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(
        short = 'C',
        long,
        help = "Repository root (defaults to the git repository containing the current directory)"
    )]
    root: Option<PathBuf>,

    #[arg(long, help = "Validate and show planned edits without making changes")]
    dry_run: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let root = match args.root {
        Some(root) => root,
        None => repo::discover_root(".")?,
    };

    let config = config::load_config(args.config.as_deref(), &root)?;
    let runner = SystemRunner::new(&root);

    let workflow_args = PrepareWorkflowArgs {
        version: args.release_version,
        dry_run: args.dry_run,
    };

    let result = run_prepare_workflow(&workflow_args, &root, &config, &runner)?;

    if args.dry_run {
        ui::display_success(&format!(
            "Dry run complete: {} file(s) would change on branch {}",
            result.edited.len(),
            result.branch
        ));
    }

    Ok(())
}
