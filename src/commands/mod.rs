//! Command registry for REPL commands
//!
//! Every line typed at the prompt is matched against registered prefixes,
//! longest first, and handed to that command's handler.

pub mod general;
pub mod theory;
pub mod training;

use crate::config::AppConfig;
use crate::store::JsonStatsStore;
use anyhow::Result;
use fretwise_core::training::{DrillMode, StatsData, StatsStore};
use fretwise_core::types::note::try_pitch_class_of;

/// Result of executing a command
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    /// Command executed successfully, continue REPL
    Success,
    /// Command executed, show this message
    Message(String),
    /// Exit the REPL
    Exit,
    /// No registered prefix matches the input
    NotACommand,
    /// Error occurred
    Error(String),
    /// Hand the prompt over to an interactive drill
    StartDrill(DrillMode),
}

/// Context passed to command handlers
pub struct CommandContext {
    pub config: AppConfig,
    pub stats: StatsData,
    store: Option<JsonStatsStore>,
}

impl CommandContext {
    /// Context backed by a stats file; unreadable stats start empty
    pub fn new(config: AppConfig, store: JsonStatsStore) -> Self {
        let stats = store.load().unwrap_or_else(|e| {
            log::warn!("{:#}. Starting with empty stats.", e);
            StatsData::new()
        });
        Self {
            config,
            stats,
            store: Some(store),
        }
    }

    /// Context whose stats are never written anywhere
    pub fn in_memory(config: AppConfig) -> Self {
        Self {
            config,
            stats: StatsData::new(),
            store: None,
        }
    }

    /// Write stats back to the store, if there is one
    pub fn save_stats(&mut self) -> Result<()> {
        match &mut self.store {
            Some(store) => store.save(&self.stats),
            None => Ok(()),
        }
    }

    /// Validate a note name typed by the user.
    ///
    /// In lenient mode anything is accepted and unreadable names end up as
    /// C; with `strict_note_names` they are rejected.
    pub fn note(&self, name: &str) -> std::result::Result<String, String> {
        let name = normalize_note(name);
        if self.config.strict_note_names {
            try_pitch_class_of(&name).map_err(|e| e.to_string())?;
        }
        Ok(name)
    }
}

/// Upper-case the letter, keep accidentals as typed (`bb` -> `Bb`)
fn normalize_note(name: &str) -> String {
    let mut chars = name.trim().chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// A command handler function
pub type CommandHandler = fn(&str, &mut CommandContext) -> CommandResult;

/// Registry of available commands
pub struct CommandRegistry {
    /// Commands indexed by their prefix (e.g., "stats reset")
    /// Sorted by prefix length descending for longest-match-first lookup
    commands: Vec<(String, CommandHandler)>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Register a command with its prefix
    pub fn register(&mut self, prefix: &str, handler: CommandHandler) {
        self.commands.push((prefix.to_string(), handler));
        // Sort by prefix length descending for longest-match-first
        self.commands.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    }

    /// Execute a command, returning NotACommand if no match found
    pub fn execute(&self, input: &str, ctx: &mut CommandContext) -> CommandResult {
        for (prefix, handler) in &self.commands {
            if input == prefix || input.starts_with(&format!("{} ", prefix)) {
                let args = if input.len() > prefix.len() {
                    input[prefix.len()..].trim()
                } else {
                    ""
                };
                return handler(args, ctx);
            }
        }
        CommandResult::NotACommand
    }

    /// Get all registered command prefixes
    pub fn list_commands(&self) -> Vec<&str> {
        self.commands.iter().map(|(p, _)| p.as_str()).collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a fully populated command registry with all built-in commands
pub fn create_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    // Theory
    registry.register("scale", theory::cmd_scale);
    registry.register("chord", theory::cmd_chord);
    registry.register("diatonic", theory::cmd_diatonic);
    registry.register("relative", theory::cmd_relative);
    registry.register("mode", theory::cmd_mode);
    registry.register("caged", theory::cmd_caged);
    registry.register("find scales", theory::cmd_find_scales);
    registry.register("find", theory::cmd_find_chords);
    registry.register("list", theory::cmd_list);

    // Training
    registry.register("drill", training::cmd_drill);
    registry.register("stats reset", training::cmd_stats_reset);
    registry.register("stats", training::cmd_stats);

    // General commands
    registry.register("help", general::cmd_help);
    registry.register("quit", general::cmd_quit);
    registry.register("exit", general::cmd_quit);

    registry
}
