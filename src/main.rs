//! Reprise - resumable package installer
//!
//! A command line tool that installs batches of apt or pip packages one at
//! a time, checkpointing after every success so an interrupted run can be
//! resumed from the first uninstalled package.

use clap::Parser;

mod backend;
mod cli;
mod commands;
mod engine;
mod error;
mod progress;
mod requirements;
mod runner;
mod session;
mod store;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(cli.state_dir, args),
        Commands::Status(args) => commands::status::run(cli.state_dir, args),
        Commands::Reset(args) => commands::reset::run(cli.state_dir, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
