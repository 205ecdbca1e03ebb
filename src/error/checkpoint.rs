//! Saved-session storage errors

use std::path::Path;

use super::RepriseError;

/// Creates a checkpoint read failed error
pub fn read_failed(path: impl AsRef<Path>, reason: impl ToString) -> RepriseError {
    RepriseError::CheckpointReadFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a corrupt checkpoint error
pub fn corrupt(path: impl AsRef<Path>, reason: impl ToString) -> RepriseError {
    RepriseError::CheckpointCorrupt {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a checkpoint write failed error
pub fn write_failed(path: impl AsRef<Path>, reason: impl ToString) -> RepriseError {
    RepriseError::CheckpointWriteFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}
