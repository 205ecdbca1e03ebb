//! Python package installation via pip

use crate::backend::{InstallOutcome, PackageBackend, outcome_from_output};
use crate::runner::CommandRunner;

/// Installs Python packages with `python3 -m pip install`.
pub struct PipBackend<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> PipBackend<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }
}

impl PackageBackend for PipBackend<'_> {
    fn id(&self) -> &'static str {
        "pip"
    }

    fn install_one(&self, package: &str) -> InstallOutcome {
        let output = self.runner.run("python3", &["-m", "pip", "install", package]);
        outcome_from_output(package, &output)
    }
}
