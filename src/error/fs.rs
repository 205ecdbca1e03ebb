//! File system errors

use std::path::Path;

use super::RepriseError;

/// Creates a state directory creation error
pub fn state_dir_failed(path: impl AsRef<Path>, reason: impl ToString) -> RepriseError {
    RepriseError::StateDirFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a generic IO error
pub fn io_error(message: impl Into<String>) -> RepriseError {
    RepriseError::IoError {
        message: message.into(),
    }
}
