use clap::Parser;
use std::path::PathBuf;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install apt packages:\n    reprise install apt curl jq git\n\n\
                   Install pip packages from a list file:\n    reprise install pip --from requirements.txt\n\n\
                   Refresh the package index before installing:\n    reprise install apt --refresh nginx\n\n\
                   Resume a paused session:\n    reprise install apt")]
pub struct InstallArgs {
    /// Package backend to install through (apt or pip)
    pub backend: String,

    /// Packages to install, in order. Ignored while a saved session exists
    pub packages: Vec<String>,

    /// Read packages from a list file (one per line, '#' starts a comment)
    #[arg(long = "from", value_name = "FILE")]
    pub from: Option<PathBuf>,

    /// Refresh the backend's package index before installing
    #[arg(long)]
    pub refresh: bool,

    /// Suppress the progress bar
    #[arg(long, short = 'q')]
    pub quiet: bool,
}
