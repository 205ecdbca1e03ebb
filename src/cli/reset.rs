use clap::Parser;

/// Arguments for the reset command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Discard the saved apt session:\n    reprise reset apt\n\n\
                  Discard every saved session:\n    reprise reset --all")]
pub struct ResetArgs {
    /// Backend whose saved session to discard (apt or pip)
    #[arg(required_unless_present = "all")]
    pub backend: Option<String>,

    /// Discard the saved sessions of every backend
    #[arg(long, conflicts_with = "backend")]
    pub all: bool,
}
