//! # Fretwise
//!
//! Terminal front end for `fretwise-core`: a REPL for looking up scales,
//! chords and CAGED voicings on the guitar neck, plus timed practice
//! drills whose stats persist between sessions.
//!
//! ## Modules
//!
//! - `commands`: The command registry and every REPL command.
//! - `config`: TOML configuration file and default paths.
//! - `display`: Text fretboard diagrams and tab.
//! - `repl`: The interactive loop.
//! - `store`: JSON persistence for drill stats.

pub mod commands;
pub mod config;
pub mod display;
pub mod repl;
pub mod store;

/// Application name for config and data directories
pub const APP_NAME: &str = "fretwise";
