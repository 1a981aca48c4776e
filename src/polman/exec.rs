//! Process execution: runs an argument vector as a child process and maps
//! exit status, stdout, and stderr into a typed outcome.

use crate::error::{PolmanError, Result};
use std::io::ErrorKind;
use std::process::Command;
use tracing::{debug, error};

/// Seam between command construction and the external process.
///
/// Production uses [`ProcessRunner`]; tests substitute scripted doubles so
/// the command and decode layers can be exercised without a real backend.
pub trait CommandRunner {
    /// Runs `argv` as a child process and returns its stdout on exit 0.
    ///
    /// Stdout may legally be empty for mutating actions; an empty `Ok` means
    /// the command was accepted, not that there is no data.
    fn run(&self, argv: &[String]) -> Result<String>;
}

/// Spawns the admin CLI directly, no shell in between, and blocks until it
/// exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, argv: &[String]) -> Result<String> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| PolmanError::Validation("empty command line".to_string()))?;

        debug!(command = %redact(argv), "running CLI command");

        let output = Command::new(program).args(args).output().map_err(|e| {
            let message = match e.kind() {
                ErrorKind::NotFound => format!("binary not found: {}", program),
                ErrorKind::PermissionDenied => format!("binary not executable: {}", program),
                _ => format!("failed to spawn {}: {}", program, e),
            };
            error!("{}", message);
            PolmanError::Launch(message)
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if output.status.success() {
            debug!(bytes = stdout.len(), "CLI command succeeded");
            Ok(stdout)
        } else {
            // A signal death carries no exit code; report it as -1.
            let code = output.status.code().unwrap_or(-1);
            let stderr = stderr.trim().to_string();
            error!(code, "CLI command failed: {}", stderr);
            Err(PolmanError::Execution { stderr, code })
        }
    }
}

/// Test doubles for the [`CommandRunner`] seam.
pub mod testing {
    use super::CommandRunner;
    use crate::error::{PolmanError, Result};
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone)]
    enum Reply {
        Stdout(String),
        Fail { stderr: String, code: i32 },
    }

    /// Records every argv it is asked to run and replies from a script.
    /// The last scripted reply repeats once the script runs out.
    #[derive(Debug, Default)]
    pub struct ScriptedRunner {
        replies: RefCell<Vec<Reply>>,
        next: Cell<usize>,
        calls: RefCell<Vec<Vec<String>>>,
    }

    impl ScriptedRunner {
        /// A runner that always succeeds with the given stdout.
        pub fn ok(stdout: &str) -> Self {
            let runner = Self::default();
            runner.push_ok(stdout);
            runner
        }

        /// A runner that always fails with the given stderr and exit code.
        pub fn failing(stderr: &str, code: i32) -> Self {
            let runner = Self::default();
            runner.push_fail(stderr, code);
            runner
        }

        pub fn push_ok(&self, stdout: &str) {
            self.replies
                .borrow_mut()
                .push(Reply::Stdout(stdout.to_string()));
        }

        pub fn push_fail(&self, stderr: &str, code: i32) {
            self.replies.borrow_mut().push(Reply::Fail {
                stderr: stderr.to_string(),
                code,
            });
        }

        /// Every argv this runner has been asked to run, in order.
        pub fn calls(&self) -> Vec<Vec<String>> {
            self.calls.borrow().clone()
        }
    }

    impl CommandRunner for ScriptedRunner {
        fn run(&self, argv: &[String]) -> Result<String> {
            self.calls.borrow_mut().push(argv.to_vec());
            let replies = self.replies.borrow();
            let idx = self.next.get().min(replies.len().saturating_sub(1));
            self.next.set(self.next.get() + 1);
            match replies.get(idx) {
                Some(Reply::Stdout(stdout)) => Ok(stdout.clone()),
                Some(Reply::Fail { stderr, code }) => Err(PolmanError::Execution {
                    stderr: stderr.clone(),
                    code: *code,
                }),
                None => Ok(String::new()),
            }
        }
    }
}

/// Renders an argv for logging with the client secret masked.
pub fn redact(argv: &[String]) -> String {
    let mut out = Vec::with_capacity(argv.len());
    let mut mask_next = false;
    for arg in argv {
        if mask_next {
            out.push("********".to_string());
            mask_next = false;
        } else {
            mask_next = arg == "--client-secret";
            out.push(arg.clone());
        }
    }
    out.join(" ")
}
