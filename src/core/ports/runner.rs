//! External command port

use crate::error::Result;

/// Captured result of an external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the command exited with status 0
    pub success: bool,
    /// Exit code, when the process exited normally
    pub code: Option<i32>,
    /// Captured stdout
    pub stdout: String,
    /// Captured stderr
    pub stderr: String,
}

impl CommandOutput {
    /// Stdout followed by stderr
    #[must_use]
    pub fn combined(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}

/// Runs external tools (linters, build scripts)
pub trait CommandRunner {
    /// Run `program` with `args` and capture its output.
    ///
    /// A non-zero exit is reported through [`CommandOutput::success`]; only a
    /// spawn failure or timeout is an error.
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput>;
}
