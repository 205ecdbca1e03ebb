//! Package list file errors

use std::path::Path;

use super::RepriseError;

/// Creates a package list read failed error
pub fn read_failed(path: impl AsRef<Path>, reason: impl ToString) -> RepriseError {
    RepriseError::RequirementsReadFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}
