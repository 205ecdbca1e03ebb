use clap::Parser;

/// Arguments for the status command
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Backend to inspect (apt or pip); omit to show every backend
    pub backend: Option<String>,
}
