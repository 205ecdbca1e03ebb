//! Package manager backends
//!
//! Each backend installs exactly one package per call through the process
//! runner seam and reports an [`InstallOutcome`]. The engine stays
//! backend-agnostic: supporting another package manager means another
//! [`PackageBackend`] impl, not an engine change.

pub mod apt;
pub mod pip;

pub use apt::AptBackend;
pub use pip::PipBackend;

use crate::runner::{CommandRunner, RunOutput};

/// Backend identities with a shipped implementation.
pub const BACKEND_IDS: &[&str] = &["apt", "pip"];

/// Canonical backend id for `name` ("APT" becomes "apt").
pub fn canonical_id(name: &str) -> Option<&'static str> {
    BACKEND_IDS
        .iter()
        .copied()
        .find(|id| id.eq_ignore_ascii_case(name))
}

/// Build the backend called `name`, if there is one.
pub fn by_name<'a>(
    name: &str,
    runner: &'a dyn CommandRunner,
) -> Option<Box<dyn PackageBackend + 'a>> {
    match canonical_id(name)? {
        "apt" => Some(Box::new(AptBackend::new(runner))),
        "pip" => Some(Box::new(PipBackend::new(runner))),
        _ => None,
    }
}

/// Result of one backend install call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub package: String,
    pub succeeded: bool,
    /// Captured error text, present only on failure.
    pub diagnostic: Option<String>,
}

/// One package-manager-specific installer.
pub trait PackageBackend {
    /// Stable identity used to key the saved session ("apt", "pip").
    fn id(&self) -> &'static str;

    /// Install a single package.
    ///
    /// Never fails at this seam: a rejected package, a non-zero exit, a
    /// spawn failure, or a runner-enforced timeout all come back as a
    /// failed outcome carrying the process diagnostic.
    fn install_one(&self, package: &str) -> InstallOutcome;

    /// Refresh the manager's package index, where the manager has one.
    ///
    /// Returns None when the backend has no index to refresh.
    fn refresh_index(&self) -> Option<RunOutput> {
        None
    }
}

/// Build the outcome for `package` from a finished process run.
pub(crate) fn outcome_from_output(package: &str, output: &RunOutput) -> InstallOutcome {
    if output.success() {
        InstallOutcome {
            package: package.to_string(),
            succeeded: true,
            diagnostic: None,
        }
    } else {
        InstallOutcome {
            package: package.to_string(),
            succeeded: false,
            diagnostic: Some(output.diagnostic()),
        }
    }
}
