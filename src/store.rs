//! Durable session storage
//!
//! One JSON file per backend identity inside a state directory. The store
//! is a passive holder: it loads, saves, and clears sessions and nothing
//! else. Saves go through a temporary file renamed into place, so a crash
//! mid-write leaves the previous checkpoint intact and a concurrent reader
//! never observes a half-written record.

use std::fs;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use crate::error::{RepriseError, Result};
use crate::session::{InstallSession, SessionRecord};

/// File name suffix for session files, one per backend identity.
pub const SESSION_FILE_SUFFIX: &str = "_install_progress.json";

/// Default state directory: the user state dir, then the cache dir, then
/// the system temp dir.
pub fn default_state_dir() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .map(|dir| dir.join("reprise"))
        .unwrap_or_else(|| std::env::temp_dir().join("reprise"))
}

/// Session storage over a state directory.
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Open a store over `dir`, creating the directory when missing.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| RepriseError::StateDirFailed {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { dir })
    }

    /// Path of the session file for a backend identity.
    pub fn session_path(&self, backend_id: &str) -> PathBuf {
        self.dir.join(format!("{backend_id}{SESSION_FILE_SUFFIX}"))
    }

    /// Whether a session file exists for `backend_id`, readable or not.
    pub fn contains(&self, backend_id: &str) -> bool {
        self.session_path(backend_id).exists()
    }

    /// Load the saved session for `backend_id`.
    ///
    /// Absence is not an error and returns None; an unreadable or
    /// malformed record is.
    pub fn load(&self, backend_id: &str) -> Result<Option<InstallSession>> {
        let path = self.session_path(backend_id);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(RepriseError::CheckpointReadFailed {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                });
            }
        };

        let record: SessionRecord =
            serde_json::from_str(&content).map_err(|e| RepriseError::CheckpointCorrupt {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let session = record
            .into_session(backend_id)
            .map_err(|reason| RepriseError::CheckpointCorrupt {
                path: path.display().to_string(),
                reason,
            })?;

        Ok(Some(session))
    }

    /// Atomically replace the saved session for the session's backend.
    pub fn save(&self, session: &InstallSession) -> Result<()> {
        let path = self.session_path(&session.backend_id);
        let record = SessionRecord::from(session);

        let write_failed = |reason: String| RepriseError::CheckpointWriteFailed {
            path: path.display().to_string(),
            reason,
        };

        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(|e| write_failed(e.to_string()))?;
        serde_json::to_writer(&mut tmp, &record).map_err(|e| write_failed(e.to_string()))?;
        tmp.persist(&path).map_err(|e| write_failed(e.to_string()))?;

        Ok(())
    }

    /// Remove any saved session for `backend_id`; clearing an absent
    /// session is not an error.
    pub fn clear(&self, backend_id: &str) -> Result<()> {
        let path = self.session_path(backend_id);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(RepriseError::CheckpointWriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }
}
