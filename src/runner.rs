//! Process execution seam
//!
//! Backends shell out through [`CommandRunner`] so the install loop can be
//! exercised without touching real package managers. The seam never fails:
//! a process that cannot be spawned is reported the same way as a non-zero
//! exit, through the captured [`RunOutput`].

use std::process::Command;

/// Captured result of one process run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code; None when the process was killed by a signal or never
    /// spawned at all.
    pub exit_code: Option<i32>,
}

impl RunOutput {
    /// Whether the process ran and exited zero.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Best-effort error text: stderr, then stdout, then the exit status.
    pub fn diagnostic(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        let stdout = self.stdout.trim();
        if !stdout.is_empty() {
            return stdout.to_string();
        }
        match self.exit_code {
            Some(code) => format!("exited with status {code}"),
            None => "terminated without an exit status".to_string(),
        }
    }
}

/// Runs a program with arguments and captures its output.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> RunOutput;
}

/// Runner backed by `std::process::Command`.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> RunOutput {
        match Command::new(program).args(args).output() {
            Ok(output) => RunOutput {
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                exit_code: output.status.code(),
            },
            Err(e) => RunOutput {
                stdout: String::new(),
                stderr: format!("failed to run {program}: {e}"),
                exit_code: None,
            },
        }
    }
}
