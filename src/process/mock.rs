use crate::error::{PrepareError, Result};
use crate::process::CommandRunner;
use std::cell::RefCell;

/// One recorded call to a [MockRunner]
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    /// Whether stdout was captured
    pub captured: bool,
}

impl Invocation {
    /// Program and arguments joined by single spaces
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

struct Failure {
    prefix: String,
    code: i32,
    stderr: String,
}

/// Mock runner for testing without spawning processes
///
/// Responses and failures are keyed by command-line prefix, e.g. `"git status"`.
/// The first registered matching entry applies.
#[derive(Default)]
pub struct MockRunner {
    invocations: RefCell<Vec<Invocation>>,
    responses: Vec<(String, String)>,
    failures: Vec<Failure>,
    on_run: Vec<(String, Box<dyn Fn()>)>,
}

impl MockRunner {
    /// Create a runner where every command succeeds with empty output
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `stdout` for captured commands starting with `prefix`
    pub fn respond(mut self, prefix: impl Into<String>, stdout: impl Into<String>) -> Self {
        self.responses.push((prefix.into(), stdout.into()));
        self
    }

    /// Fail commands starting with `prefix` with the given exit code and stderr
    pub fn fail_on(mut self, prefix: impl Into<String>, code: i32, stderr: impl Into<String>) -> Self {
        self.failures.push(Failure {
            prefix: prefix.into(),
            code,
            stderr: stderr.into(),
        });
        self
    }

    /// Run `effect` whenever a command starting with `prefix` succeeds
    ///
    /// Lets tests simulate side effects such as a lock file being rewritten.
    pub fn on_run(mut self, prefix: impl Into<String>, effect: impl Fn() + 'static) -> Self {
        self.on_run.push((prefix.into(), Box::new(effect)));
        self
    }

    /// All invocations so far, in order
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }

    /// Command lines of all invocations so far, in order
    pub fn command_lines(&self) -> Vec<String> {
        self.invocations
            .borrow()
            .iter()
            .map(Invocation::command_line)
            .collect()
    }

    fn record(&self, program: &str, args: &[String], captured: bool) -> Result<String> {
        let invocation = Invocation {
            program: program.to_string(),
            args: args.to_vec(),
            captured,
        };
        let line = invocation.command_line();
        self.invocations.borrow_mut().push(invocation);

        if let Some(failure) = self.failures.iter().find(|f| line.starts_with(&f.prefix)) {
            return Err(PrepareError::command(
                program,
                args,
                Some(failure.code),
                &failure.stderr,
            ));
        }

        for (prefix, effect) in &self.on_run {
            if line.starts_with(prefix.as_str()) {
                effect();
            }
        }

        Ok(self
            .responses
            .iter()
            .find(|(prefix, _)| line.starts_with(prefix.as_str()))
            .map(|(_, stdout)| stdout.clone())
            .unwrap_or_default())
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<()> {
        self.record(program, args, false).map(|_| ())
    }

    fn capture(&self, program: &str, args: &[String]) -> Result<String> {
        self.record(program, args, true)
    }
}
