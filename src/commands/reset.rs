//! Reset command implementation

use std::path::PathBuf;

use crate::backend;
use crate::cli::ResetArgs;
use crate::error::Result;
use crate::store::{SessionStore, default_state_dir};

/// Run reset command
pub fn run(state_dir: Option<PathBuf>, args: ResetArgs) -> Result<()> {
    let store_dir = state_dir.unwrap_or_else(default_state_dir);

    if args.all {
        let store = SessionStore::open(store_dir)?;
        let mut discarded = false;
        for id in backend::BACKEND_IDS {
            if store.contains(id) {
                store.clear(id)?;
                println!("Discarded the saved {id} session");
                discarded = true;
            }
        }
        if !discarded {
            println!("No saved sessions");
        }
        return Ok(());
    }

    // clap enforces that a backend is present when --all is absent
    let Some(name) = args.backend.as_deref() else {
        return Ok(());
    };
    let id = match backend::canonical_id(name) {
        Some(id) => id,
        None => {
            eprintln!("Unknown backend: {name}");
            eprintln!("Supported backends: {}", backend::BACKEND_IDS.join(", "));
            std::process::exit(1);
        }
    };

    let store = SessionStore::open(store_dir)?;
    if store.contains(id) {
        store.clear(id)?;
        println!("Discarded the saved {id} session");
    } else {
        println!("No saved {id} session");
    }
    Ok(())
}
