//! Package list files
//!
//! A package list is a plain text file with one package name per line,
//! in the style of pip requirements files. Blank lines and `#` comment
//! lines are skipped.

use std::fs;
use std::path::Path;

use crate::error::{RepriseError, Result};

/// Read the package names from a list file, in file order.
pub fn read_package_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| RepriseError::RequirementsReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
