//! Status command implementation

use std::path::PathBuf;

use crate::backend;
use crate::cli::StatusArgs;
use crate::error::Result;
use crate::store::{SessionStore, default_state_dir};

/// Run status command
pub fn run(state_dir: Option<PathBuf>, args: StatusArgs) -> Result<()> {
    let backend = match args.backend {
        Some(name) => match backend::canonical_id(&name) {
            Some(id) => Some(id),
            None => {
                eprintln!("Unknown backend: {name}");
                eprintln!("Supported backends: {}", backend::BACKEND_IDS.join(", "));
                std::process::exit(1);
            }
        },
        None => None,
    };

    let store = SessionStore::open(state_dir.unwrap_or_else(default_state_dir))?;

    match backend {
        Some(id) => show_packages(&store, id),
        None => {
            for id in backend::BACKEND_IDS {
                show_summary(&store, id)?;
            }
            Ok(())
        }
    }
}

fn show_summary(store: &SessionStore, backend_id: &str) -> Result<()> {
    match store.load(backend_id)? {
        Some(session) => match session.next_package() {
            Some(next) => println!(
                "{backend_id}: {} of {} installed, next: {next}",
                session.installed(),
                session.total()
            ),
            None => println!(
                "{backend_id}: {} of {} installed",
                session.installed(),
                session.total()
            ),
        },
        None => println!("{backend_id}: no saved session"),
    }
    Ok(())
}

fn show_packages(store: &SessionStore, backend_id: &str) -> Result<()> {
    match store.load(backend_id)? {
        Some(session) => {
            println!(
                "{backend_id}: {} of {} installed",
                session.installed(),
                session.total()
            );
            for (index, package) in session.packages.iter().enumerate() {
                let marker = if index < session.next_index { "x" } else { " " };
                println!("  [{marker}] {package}");
            }
        }
        None => println!("{backend_id}: no saved session"),
    }
    Ok(())
}
