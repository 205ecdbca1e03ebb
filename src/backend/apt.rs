//! System package installation via apt-get

use crate::backend::{InstallOutcome, PackageBackend, outcome_from_output};
use crate::runner::{CommandRunner, RunOutput};

/// Installs system packages with `sudo apt-get install -y`.
pub struct AptBackend<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> AptBackend<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }
}

impl PackageBackend for AptBackend<'_> {
    fn id(&self) -> &'static str {
        "apt"
    }

    fn install_one(&self, package: &str) -> InstallOutcome {
        let output = self
            .runner
            .run("sudo", &["apt-get", "install", "-y", package]);
        outcome_from_output(package, &output)
    }

    fn refresh_index(&self) -> Option<RunOutput> {
        Some(self.runner.run("sudo", &["apt-get", "update"]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct ScriptedRunner {
        response: RunOutput,
        calls: RefCell<Vec<Vec<String>>>,
    }

    impl ScriptedRunner {
        fn new(response: RunOutput) -> Self {
            Self {
                response,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn succeeding() -> Self {
            Self::new(RunOutput {
                stdout: String::new(),
                stderr: String::new(),
                exit_code: Some(0),
            })
        }
    }

    impl CommandRunner for ScriptedRunner {
        fn run(&self, program: &str, args: &[&str]) -> RunOutput {
            let mut call = vec![program.to_string()];
            call.extend(args.iter().map(|a| (*a).to_string()));
            self.calls.borrow_mut().push(call);
            self.response.clone()
        }
    }

    #[test]
    fn test_id() {
        let runner = ScriptedRunner::succeeding();
        assert_eq!(AptBackend::new(&runner).id(), "apt");
    }

    #[test]
    fn test_install_invocation() {
        let runner = ScriptedRunner::succeeding();
        let outcome = AptBackend::new(&runner).install_one("curl");

        assert!(outcome.succeeded);
        assert_eq!(
            runner.calls.borrow().as_slice(),
            [vec![
                "sudo".to_string(),
                "apt-get".to_string(),
                "install".to_string(),
                "-y".to_string(),
                "curl".to_string(),
            ]]
        );
    }

    #[test]
    fn test_install_failure_maps_stderr() {
        let runner = ScriptedRunner::new(RunOutput {
            stdout: String::new(),
            stderr: "E: Unable to locate package nosuch\n".to_string(),
            exit_code: Some(100),
        });
        let outcome = AptBackend::new(&runner).install_one("nosuch");

        assert_eq!(outcome.package, "nosuch");
        assert!(!outcome.succeeded);
        assert_eq!(
            outcome.diagnostic.as_deref(),
            Some("E: Unable to locate package nosuch")
        );
    }

    #[test]
    fn test_refresh_invocation() {
        let runner = ScriptedRunner::succeeding();
        let output = AptBackend::new(&runner).refresh_index().unwrap();

        assert!(output.success());
        assert_eq!(
            runner.calls.borrow().as_slice(),
            [vec![
                "sudo".to_string(),
                "apt-get".to_string(),
                "update".to_string(),
            ]]
        );
    }
}
