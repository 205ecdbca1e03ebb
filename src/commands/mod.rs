//! Command implementations for the Reprise CLI

pub mod completions;
pub mod install;
pub mod reset;
pub mod status;
pub mod version;
