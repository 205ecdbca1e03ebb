//! Common test utilities for Reprise integration tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A sandboxed state directory plus a bin directory of stub tools, so
/// install tests never touch the real package managers.
pub struct TestState {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// State directory, passed to reprise via REPRISE_STATE_DIR
    pub state_dir: PathBuf,
    /// Directory of stub executables, prepended to PATH
    pub bin_dir: PathBuf,
}

impl TestState {
    /// Create a new test state with empty state and bin directories
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let state_dir = temp.path().join("state");
        let bin_dir = temp.path().join("bin");
        fs::create_dir_all(&state_dir).expect("Failed to create state directory");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin directory");
        Self {
            temp,
            state_dir,
            bin_dir,
        }
    }

    /// PATH value with the stub directory first
    pub fn path_env(&self) -> String {
        let current = std::env::var("PATH").unwrap_or_default();
        format!("{}:{}", self.bin_dir.display(), current)
    }

    /// Install a stub executable into the bin directory
    pub fn write_stub(&self, name: &str, script: &str) {
        let path = self.bin_dir.join(name);
        fs::write(&path, script).expect("Failed to write stub");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .expect("Failed to make stub executable");
        }
    }

    /// Stub sudo to run its arguments directly
    #[allow(dead_code)]
    pub fn stub_sudo(&self) {
        self.write_stub("sudo", "#!/bin/sh\nexec \"$@\"\n");
    }

    /// Stub a package tool: every invocation is logged to `<name>.log`,
    /// and any argument starting with `fail-` makes it exit non-zero
    /// with a locate error on stderr.
    #[allow(dead_code)]
    pub fn stub_tool(&self, name: &str) {
        let log = self.temp.path().join(format!("{name}.log"));
        let script = format!(
            r#"#!/bin/sh
echo "$@" >> "{log}"
for arg in "$@"; do
  case "$arg" in
    fail-*)
      echo "E: Unable to locate package $arg" >&2
      exit 100
      ;;
  esac
done
exit 0
"#,
            log = log.display()
        );
        self.write_stub(name, &script);
    }

    /// Invocations logged by a stubbed tool, one line per call
    #[allow(dead_code)]
    pub fn tool_log(&self, name: &str) -> Vec<String> {
        let log = self.temp.path().join(format!("{name}.log"));
        if !log.exists() {
            return Vec::new();
        }
        fs::read_to_string(&log)
            .expect("Failed to read tool log")
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Path of the session file for a backend
    pub fn session_file(&self, backend_id: &str) -> PathBuf {
        self.state_dir
            .join(format!("{backend_id}_install_progress.json"))
    }

    /// Write a session file directly
    #[allow(dead_code)]
    pub fn write_session(&self, backend_id: &str, content: &str) {
        fs::write(self.session_file(backend_id), content).expect("Failed to write session file");
    }

    /// Read a session file back as JSON
    #[allow(dead_code)]
    pub fn read_session(&self, backend_id: &str) -> serde_json::Value {
        let content = fs::read_to_string(self.session_file(backend_id))
            .expect("Failed to read session file");
        serde_json::from_str(&content).expect("Session file is not valid JSON")
    }
}

impl Default for TestState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_creation() {
        let state = TestState::new();
        assert!(state.state_dir.exists());
        assert!(state.bin_dir.exists());
    }

    #[test]
    fn test_write_stub_lands_in_bin_dir() {
        let state = TestState::new();
        state.write_stub("frobnicate", "#!/bin/sh\nexit 0\n");
        assert!(state.bin_dir.join("frobnicate").exists());
    }

    #[test]
    fn test_session_file_helpers_round_trip() {
        let state = TestState::new();
        state.write_session("apt", r#"{"packages": ["curl"], "current_index": 0}"#);
        let session = state.read_session("apt");
        assert_eq!(session["current_index"], 0);
        assert_eq!(session["packages"][0], "curl");
    }
}
