use thiserror::Error;

/// Unified error type for prep-release operations
#[derive(Error, Debug)]
pub enum PrepareError {
    #[error("Working tree is not clean")]
    DirtyWorkingTree,

    #[error(
        "Invalid version format '{0}'. Expected PEP 440 (e.g., 0.1.0a7, 1.0.0, 2.0.0rc1)"
    )]
    InvalidVersion(String),

    #[error("Lookup failed: {0}")]
    Lookup(String),

    #[error("Command `{command}` failed with exit code {code}{}", format_stderr(.stderr))]
    Command {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot access {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Git repository error: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in prep-release
pub type Result<T> = std::result::Result<T, PrepareError>;

/// Last non-empty line of the captured stderr; tools print the cause last.
fn format_stderr(stderr: &str) -> String {
    match stderr.lines().map(str::trim).filter(|l| !l.is_empty()).last() {
        Some(line) => format!(": {}", line),
        None => String::new(),
    }
}

impl PrepareError {
    /// Create a lookup error naming the file and what was missing
    pub fn lookup(msg: impl Into<String>) -> Self {
        PrepareError::Lookup(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        PrepareError::Config(msg.into())
    }

    /// Wrap an I/O failure on a target file
    pub fn file(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        PrepareError::File {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Create a command failure for the given argument vector
    pub fn command(program: &str, args: &[String], code: Option<i32>, stderr: &str) -> Self {
        let mut command = program.to_string();
        for arg in args {
            command.push(' ');
            command.push_str(arg);
        }
        PrepareError::Command {
            command,
            code: code.unwrap_or(-1),
            stderr: stderr.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PrepareError::config("bad template");
        assert_eq!(err.to_string(), "Configuration error: bad template");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PrepareError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_invalid_version_names_input() {
        let err = PrepareError::InvalidVersion("1.0.0a".to_string());
        let msg = err.to_string();
        assert!(msg.contains("'1.0.0a'"));
        assert!(msg.contains("PEP 440"));
    }

    #[test]
    fn test_file_error_names_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err = PrepareError::file("crates/loq_fs/Cargo.toml", io_err);
        assert_eq!(
            err.to_string(),
            "Cannot access crates/loq_fs/Cargo.toml: not found"
        );
    }

    #[test]
    fn test_command_error_includes_stderr() {
        let args = vec!["push".to_string(), "-u".to_string(), "origin".to_string()];
        let err = PrepareError::command("git", &args, Some(128), "fatal: no remote\n");
        assert_eq!(
            err.to_string(),
            "Command `git push -u origin` failed with exit code 128: fatal: no remote"
        );
    }

    #[test]
    fn test_command_error_keeps_last_stderr_line() {
        let args = vec!["push".to_string()];
        let stderr = "To github.com:jakekaplan/loq.git\n ! [rejected]  prep-1.0.0 -> prep-1.0.0\n\nerror: failed to push some refs\n";
        let err = PrepareError::command("git", &args, Some(1), stderr);
        assert_eq!(
            err.to_string(),
            "Command `git push` failed with exit code 1: error: failed to push some refs"
        );
        // the full stderr stays available on the variant
        match err {
            PrepareError::Command { stderr: kept, .. } => assert!(kept.contains("[rejected]")),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_command_error_without_stderr() {
        let err = PrepareError::command("cargo", &[], None, "  ");
        assert_eq!(
            err.to_string(),
            "Command `cargo` failed with exit code -1"
        );
    }

    #[test]
    fn test_error_messages_are_single_line() {
        let errors = vec![
            PrepareError::DirtyWorkingTree,
            PrepareError::InvalidVersion("x".to_string()),
            PrepareError::lookup("Could not find version in [project]"),
            PrepareError::config("x"),
            PrepareError::command("git", &[], Some(1), "fatal: a\nfatal: b\n"),
            PrepareError::file("prepare.toml", std::io::Error::new(std::io::ErrorKind::NotFound, "gone")),
        ];

        for err in errors {
            let msg = err.to_string();
            assert!(!msg.is_empty());
            assert!(!msg.contains('\n'), "unexpected newline in '{}'", msg);
        }
    }
}
