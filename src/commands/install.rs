//! Install command implementation
//!
//! Assembles the package list from the command line and an optional list
//! file, then hands it to the engine. A saved session for the backend
//! always wins over whatever was passed; the command says so and carries
//! on with the session.

use std::path::PathBuf;

use console::Style;

use crate::backend::{self, PackageBackend};
use crate::cli::InstallArgs;
use crate::engine::{Engine, RunState};
use crate::error::Result;
use crate::progress::ConsoleReporter;
use crate::requirements;
use crate::runner::SystemRunner;
use crate::store::{SessionStore, default_state_dir};

/// Run install command
pub fn run(state_dir: Option<PathBuf>, args: InstallArgs) -> Result<()> {
    let runner = SystemRunner;
    let backend = match backend::by_name(&args.backend, &runner) {
        Some(backend) => backend,
        None => {
            eprintln!("Unknown backend: {}", args.backend);
            eprintln!("Supported backends: {}", backend::BACKEND_IDS.join(", "));
            std::process::exit(1);
        }
    };

    let store = SessionStore::open(state_dir.unwrap_or_else(default_state_dir))?;

    let mut packages = args.packages;
    if let Some(path) = &args.from {
        packages.extend(requirements::read_package_list(path)?);
    }

    if args.refresh {
        refresh_index(backend.as_ref());
    }

    match store.load(backend.id())? {
        Some(session) => {
            println!(
                "Resuming {} installation from previous session ({} of {} installed)",
                backend.id(),
                session.installed(),
                session.total()
            );
            if !packages.is_empty() {
                println!("Ignoring the given packages until the saved session finishes.");
            }
        }
        None => {
            if packages.is_empty() {
                println!("Nothing to install.");
                return Ok(());
            }
        }
    }

    let mut engine = Engine::new(&store, backend.as_ref());
    if !args.quiet {
        engine.add_reporter(Box::new(ConsoleReporter::new()));
    }
    let report = engine.run(packages)?;

    match report.state {
        RunState::Completed => {
            println!("All packages installed successfully");
            Ok(())
        }
        RunState::Paused => {
            let package = report
                .failure
                .as_ref()
                .map(|failure| failure.package.clone())
                .unwrap_or_default();
            // The reporter already printed the diagnostic unless we ran quiet.
            if args.quiet {
                eprintln!("Error installing package: {package}");
                if let Some(diagnostic) = report
                    .failure
                    .as_ref()
                    .and_then(|failure| failure.diagnostic.as_deref())
                {
                    eprintln!("{diagnostic}");
                }
            }
            println!(
                "Installation paused at package {} ({} of {} installed).",
                Style::new().bold().cyan().apply_to(&package),
                report.installed(),
                report.total
            );
            println!("Run the same command again to resume.");
            std::process::exit(1);
        }
    }
}

fn refresh_index(backend: &dyn PackageBackend) {
    match backend.refresh_index() {
        Some(output) if output.success() => {
            println!("Updated {} package index", backend.id());
        }
        Some(output) => {
            eprintln!("Failed to update {} package index:", backend.id());
            eprintln!("{}", output.diagnostic());
        }
        None => {
            println!("Index refresh is not supported for {}", backend.id());
        }
    }
}
