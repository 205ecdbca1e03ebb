//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - status: Status command arguments
//! - reset: Reset command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod install;
pub mod reset;
pub mod status;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use reset::ResetArgs;
pub use status::StatusArgs;

/// Reprise - resumable package installer
///
/// Install batches of apt and pip packages, resuming interrupted runs where they stopped.
#[derive(Parser, Debug)]
#[command(
    name = "reprise",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resumable batch installer for apt and pip packages",
    long_about = "Reprise installs batches of apt or pip packages one at a time, \
                  checkpointing after every successful install. A run interrupted by a \
                  failure, a crash, or Ctrl-C resumes from the first uninstalled package \
                  when the same command is run again.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  reprise install apt curl jq git        \x1b[90m# Install apt packages, resuming if interrupted\x1b[0m\n   \
                  reprise install pip --from reqs.txt    \x1b[90m# Install pip packages from a list file\x1b[0m\n   \
                  reprise install apt --refresh nginx    \x1b[90m# Refresh the apt index, then install\x1b[0m\n   \
                  reprise status                         \x1b[90m# Show saved sessions\x1b[0m\n   \
                  reprise reset apt                      \x1b[90m# Discard the saved apt session\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// State directory for saved sessions (defaults to the user state dir)
    #[arg(long, short = 's', global = true, env = "REPRISE_STATE_DIR")]
    pub state_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install packages through a backend, resuming any saved session
    Install(InstallArgs),

    /// Show saved session state
    Status(StatusArgs),

    /// Discard a backend's saved session
    Reset(ResetArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
