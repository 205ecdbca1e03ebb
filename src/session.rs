//! Installation session model
//!
//! An [`InstallSession`] is one backend's checkpoint: the ordered package
//! list and the index of the next package not yet confirmed installed.
//! Sessions are keyed by backend identity, so apt and pip never share
//! state. The on-disk form is [`SessionRecord`].

use serde::{Deserialize, Serialize};

/// One backend's in-flight installation checkpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallSession {
    /// Backend identity the session is keyed by ("apt", "pip")
    pub backend_id: String,
    /// Ordered package list, fixed for the life of the session
    pub packages: Vec<String>,
    /// Next package not yet confirmed installed; equals `packages.len()`
    /// when every package is installed
    pub next_index: usize,
}

impl InstallSession {
    /// Create a fresh session starting at the first package.
    pub fn new(backend_id: impl Into<String>, packages: Vec<String>) -> Self {
        Self {
            backend_id: backend_id.into(),
            packages,
            next_index: 0,
        }
    }

    /// Whether every package in the session is installed.
    pub fn is_complete(&self) -> bool {
        self.next_index >= self.packages.len()
    }

    /// Number of packages confirmed installed so far.
    pub fn installed(&self) -> usize {
        self.next_index
    }

    /// Number of packages in the session.
    pub fn total(&self) -> usize {
        self.packages.len()
    }

    /// Number of packages still to install.
    pub fn remaining(&self) -> usize {
        self.packages.len().saturating_sub(self.next_index)
    }

    /// The next package to install, or None when complete.
    pub fn next_package(&self) -> Option<&str> {
        self.packages.get(self.next_index).map(String::as_str)
    }
}

/// Wire form of a session file: `{"packages": [...], "current_index": N}`.
///
/// The backend identity is carried by the file name, not the record.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SessionRecord {
    pub packages: Vec<String>,
    pub current_index: usize,
}

impl From<&InstallSession> for SessionRecord {
    fn from(session: &InstallSession) -> Self {
        Self {
            packages: session.packages.clone(),
            current_index: session.next_index,
        }
    }
}

impl SessionRecord {
    /// Rebuild the session for `backend_id`, rejecting an index outside
    /// the package list bounds.
    pub(crate) fn into_session(self, backend_id: &str) -> Result<InstallSession, String> {
        if self.current_index > self.packages.len() {
            return Err(format!(
                "current_index {} exceeds package count {}",
                self.current_index,
                self.packages.len()
            ));
        }
        Ok(InstallSession {
            backend_id: backend_id.to_string(),
            packages: self.packages,
            next_index: self.current_index,
        })
    }
}
