use crate::error::{PrepareError, Result};
use crate::process::CommandRunner;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Runs commands as child processes with the repository root as working directory
pub struct SystemRunner {
    root: PathBuf,
}

impl SystemRunner {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        SystemRunner {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn command(&self, program: &str, args: &[String]) -> Command {
        let mut cmd = Command::new(program);
        cmd.args(args).current_dir(&self.root);
        cmd
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<()> {
        let status = self
            .command(program, args)
            .stdin(Stdio::null())
            .status()
            .map_err(|e| PrepareError::command(program, args, None, &e.to_string()))?;

        if !status.success() {
            return Err(PrepareError::command(program, args, status.code(), ""));
        }

        Ok(())
    }

    fn capture(&self, program: &str, args: &[String]) -> Result<String> {
        let output = self
            .command(program, args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| PrepareError::command(program, args, None, &e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PrepareError::command(
                program,
                args,
                output.status.code(),
                &stderr,
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
