//! External command abstraction layer
//!
//! Every tool the release flow drives (`git`, `cargo`, `gh`) goes through the
//! [CommandRunner] trait. Implementations:
//!
//! - [system::SystemRunner]: spawns real processes in the repository root
//! - [mock::MockRunner]: records invocations and replays canned output
//!
//! The orchestrator only depends on the trait, so the whole release flow can
//! run in tests without touching a real remote.

pub mod mock;
pub mod system;

pub use mock::{Invocation, MockRunner};
pub use system::SystemRunner;

use crate::error::Result;

/// Blocking execution of external commands.
///
/// A non-zero exit status is always an error; nothing is retried.
pub trait CommandRunner {
    /// Run a command with inherited stdout and stderr.
    ///
    /// # Returns
    /// * `Ok(())` - The command exited with status 0
    /// * `Err` - The command could not be started or exited non-zero
    fn run(&self, program: &str, args: &[String]) -> Result<()>;

    /// Run a command and capture its standard output.
    ///
    /// On failure the captured stderr is carried in the error so it reaches
    /// the error stream.
    ///
    /// # Returns
    /// * `Ok(String)` - Trimmed stdout of a successful command
    /// * `Err` - The command could not be started or exited non-zero
    fn capture(&self, program: &str, args: &[String]) -> Result<String>;
}

/// Build an owned argument vector from string slices.
pub fn args<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_helper() {
        assert_eq!(args(["status", "--porcelain"]), vec!["status", "--porcelain"]);
        assert!(args(Vec::<String>::new()).is_empty());
    }
}
