//! Resumable installation engine
//!
//! [`Engine::run`] walks a package list through a [`PackageBackend`],
//! checkpointing after every confirmed install so an interrupted run can
//! pick up where it stopped. A saved session for the backend always takes
//! precedence over the caller's package list; the list recorded at the
//! start of a session is what the session finishes with.

use crate::backend::{InstallOutcome, PackageBackend};
use crate::error::Result;
use crate::progress::{ProgressEvent, ProgressReporter};
use crate::session::InstallSession;
use crate::store::SessionStore;

/// Terminal state of one engine run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Every package in the session is installed and the checkpoint is gone.
    Completed,
    /// A package failed; the checkpoint still points at it for the next run.
    Paused,
}

/// Summary of one engine run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub state: RunState,
    /// Whether the run picked up a saved session.
    pub resumed: bool,
    /// Packages already confirmed installed before this run started.
    pub already_installed: usize,
    /// Packages installed by this run.
    pub installed_now: usize,
    /// Packages in the session.
    pub total: usize,
    /// The failing install, present only when paused.
    pub failure: Option<InstallOutcome>,
}

impl RunReport {
    /// Packages confirmed installed across all runs of the session.
    pub fn installed(&self) -> usize {
        self.already_installed + self.installed_now
    }
}

/// Drives one backend through a checkpointed installation.
pub struct Engine<'a> {
    store: &'a SessionStore,
    backend: &'a dyn PackageBackend,
    reporters: Vec<Box<dyn ProgressReporter + 'a>>,
}

impl<'a> Engine<'a> {
    pub fn new(store: &'a SessionStore, backend: &'a dyn PackageBackend) -> Self {
        Self {
            store,
            backend,
            reporters: Vec::new(),
        }
    }

    /// Attach a reporter; events fan out to every reporter in order.
    pub fn add_reporter(&mut self, reporter: Box<dyn ProgressReporter + 'a>) {
        self.reporters.push(reporter);
    }

    fn emit(&mut self, event: ProgressEvent) {
        for reporter in &mut self.reporters {
            reporter.report(&event);
        }
    }

    /// Install `packages`, or whatever a saved session says is left.
    ///
    /// Packages are attempted in order, each at most once per run. Every
    /// success is checkpointed before the next attempt; the first failure
    /// pauses the run with the checkpoint untouched, so rerunning retries
    /// the failed package. Completion removes the checkpoint.
    ///
    /// Errors are reserved for the checkpoint itself (unreadable, corrupt,
    /// or unwritable state); a package that will not install is a pause,
    /// not an error.
    pub fn run(&mut self, packages: Vec<String>) -> Result<RunReport> {
        let saved = self.store.load(self.backend.id())?;
        let resumed = saved.is_some();
        let mut session = match saved {
            Some(session) => session,
            None => InstallSession::new(self.backend.id(), packages),
        };

        let already_installed = session.installed();
        let total = session.total();
        let mut installed_now = 0;

        while let Some(package) = session.next_package().map(str::to_string) {
            self.emit(ProgressEvent::Step {
                current: session.next_index + 1,
                total,
                package: package.clone(),
            });

            let outcome = self.backend.install_one(&package);
            if !outcome.succeeded {
                self.emit(ProgressEvent::Failed {
                    package: package.clone(),
                    diagnostic: outcome.diagnostic.clone().unwrap_or_default(),
                });
                return Ok(RunReport {
                    state: RunState::Paused,
                    resumed,
                    already_installed,
                    installed_now,
                    total,
                    failure: Some(outcome),
                });
            }

            session.next_index += 1;
            self.store.save(&session)?;
            installed_now += 1;
        }

        self.store.clear(self.backend.id())?;
        self.emit(ProgressEvent::Done);
        Ok(RunReport {
            state: RunState::Completed,
            resumed,
            already_installed,
            installed_now,
            total,
            failure: None,
        })
    }
}
