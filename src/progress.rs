//! Progress reporting for installation runs

use indicatif::{ProgressBar, ProgressStyle};

/// One engine progress event, emitted synchronously and in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// About to attempt `package`, the `current`th of `total`.
    Step {
        current: usize,
        total: usize,
        package: String,
    },
    /// Every package in the session is installed.
    Done,
    /// `package` failed and the run is pausing.
    Failed { package: String, diagnostic: String },
}

/// Receives engine progress events.
pub trait ProgressReporter {
    fn report(&mut self, event: &ProgressEvent);
}

/// Console reporter rendering a progress bar with per-package lines.
///
/// The bar is created on the first step so a resumed run starts with the
/// already-installed count filled in.
pub struct ConsoleReporter {
    bar: Option<ProgressBar>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self { bar: None }
    }

    fn bar_for(&mut self, total: usize) -> &ProgressBar {
        self.bar.get_or_insert_with(|| {
            let style = ProgressStyle::default_bar()
                .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-");

            let bar = ProgressBar::new(total as u64);
            bar.set_style(style);
            bar
        })
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for ConsoleReporter {
    fn report(&mut self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Step {
                current,
                total,
                package,
            } => {
                let bar = self.bar_for(*total);
                bar.set_position((current - 1) as u64);
                bar.set_message(package.clone());
                // suspend keeps the line on stdout; ProgressBar::println
                // targets the draw device and drops the line when piped.
                bar.suspend(|| println!("Installing package {current}/{total}: {package}"));
            }
            ProgressEvent::Done => {
                if let Some(bar) = self.bar.take() {
                    bar.set_position(bar.length().unwrap_or(0));
                    bar.finish_with_message("done");
                }
            }
            ProgressEvent::Failed { package, diagnostic } => {
                if let Some(bar) = self.bar.take() {
                    bar.abandon();
                }
                eprintln!("Error installing package: {package}");
                eprintln!("{diagnostic}");
            }
        }
    }
}
