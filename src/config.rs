use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use fretwise_core::types::fretboard::DEFAULT_FRET_COUNT;
use serde::Deserialize;

/// Application configuration loaded from TOML config file.
/// Every field has a default, so the file is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Highest fret shown in diagrams and used by the note drill.
    pub fret_count: u8,
    /// Build diatonic harmony and chord drills with seventh chords.
    pub use_sevenths: bool,
    /// Reject malformed note names instead of reading them as C.
    pub strict_note_names: bool,
    /// Custom stats file (overrides the data-dir default).
    pub stats_path: Option<PathBuf>,
    /// Questions per `drill` run.
    pub drill_rounds: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fret_count: DEFAULT_FRET_COUNT,
            use_sevenths: false,
            strict_note_names: false,
            stats_path: None,
            drill_rounds: 10,
        }
    }
}

impl AppConfig {
    /// Load config from `path`, or from the platform config dir
    /// (`~/.config/fretwise/config.toml` on Linux) when `path` is `None`.
    /// Returns defaults if the file is missing or unreadable.
    pub fn load(path: Option<&Path>) -> Self {
        let config_path = path.map(Path::to_path_buf).or_else(Self::config_path);
        match config_path {
            Some(path) if path.exists() => match std::fs::read_to_string(&path) {
                Ok(contents) => match Self::parse(&contents) {
                    Ok(config) => {
                        log::info!("Loaded config from {}", path.display());
                        config
                    }
                    Err(e) => {
                        log::warn!("Failed to parse {}: {}. Using defaults.", path.display(), e);
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Failed to read {}: {}. Using defaults.", path.display(), e);
                    Self::default()
                }
            },
            _ => {
                log::debug!("No config file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Stats file to use: CLI override, then config, then the data dir
    pub fn resolve_stats_path(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.stats_path.clone())
            .unwrap_or_else(default_stats_path)
    }

    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", crate::APP_NAME)
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

/// Default stats location in the platform data directory
pub fn default_stats_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("", "", crate::APP_NAME) {
        dirs.data_dir().join("stats.json")
    } else {
        // Fallback: current directory
        PathBuf::from("fretwise-stats.json")
    }
}
