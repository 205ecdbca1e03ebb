//! Error types and handling for Reprise
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`checkpoint`]: Saved-session storage errors
//! - [`fs`]: File system errors
//! - [`requirements`]: Package list file errors

#![allow(dead_code)]

// Declare submodules
pub mod checkpoint;
pub mod fs;
pub mod requirements;

// Re-export convenience constructors from submodules (used in tests only)
#[allow(unused_imports)]
pub use checkpoint::{
    corrupt as checkpoint_corrupt, read_failed as checkpoint_read_failed,
    write_failed as checkpoint_write_failed,
};
#[allow(unused_imports)]
pub use fs::{io_error, state_dir_failed};
#[allow(unused_imports)]
pub use requirements::read_failed as requirements_read_failed;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Reprise operations
#[derive(Error, Diagnostic, Debug)]
pub enum RepriseError {
    // Checkpoint errors
    #[error("Failed to read checkpoint '{path}': {reason}")]
    #[diagnostic(code(reprise::checkpoint::read_failed))]
    CheckpointReadFailed { path: String, reason: String },

    #[error("Corrupt checkpoint '{path}': {reason}")]
    #[diagnostic(
        code(reprise::checkpoint::corrupt),
        help("The saved session is unreadable. Run 'reprise reset <BACKEND>' to discard it and start over")
    )]
    CheckpointCorrupt { path: String, reason: String },

    #[error("Failed to write checkpoint '{path}': {reason}")]
    #[diagnostic(
        code(reprise::checkpoint::write_failed),
        help("Check free space and permissions on the state directory")
    )]
    CheckpointWriteFailed { path: String, reason: String },

    // State directory errors
    #[error("Failed to create state directory '{path}': {reason}")]
    #[diagnostic(
        code(reprise::state::dir_failed),
        help("Pass --state-dir or set REPRISE_STATE_DIR to a writable directory")
    )]
    StateDirFailed { path: String, reason: String },

    // Package list file errors
    #[error("Failed to read package list '{path}': {reason}")]
    #[diagnostic(
        code(reprise::requirements::read_failed),
        help("Check that the file exists and is readable")
    )]
    RequirementsReadFailed { path: String, reason: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(reprise::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for RepriseError {
    fn from(err: std::io::Error) -> Self {
        RepriseError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, RepriseError>;
