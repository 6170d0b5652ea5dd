//! Stats persistence as a JSON file on disk

use anyhow::{Context, Result};
use fretwise_core::training::{StatsData, StatsStore};
use std::path::PathBuf;

pub struct JsonStatsStore {
    path: PathBuf,
}

impl JsonStatsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StatsStore for JsonStatsStore {
    type Error = anyhow::Error;

    fn load(&self) -> Result<StatsData> {
        if !self.path.exists() {
            log::debug!("No stats at {}, starting fresh", self.path.display());
            return Ok(StatsData::new());
        }
        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read stats from {}", self.path.display()))?;
        let stats = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse stats in {}", self.path.display()))?;
        log::info!("Loaded stats from {}", self.path.display());
        Ok(stats)
    }

    fn save(&mut self, stats: &StatsData) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(stats)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write stats to {}", self.path.display()))?;
        log::debug!("Saved stats to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("fretwise-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_missing_file_is_empty() {
        let store = JsonStatsStore::new(scratch_path("missing.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("round_trip.json");
        let mut store = JsonStatsStore::new(&path);

        let mut stats = StatsData::new();
        stats.record("notes", "G", "3", true, Some(Duration::from_millis(640)));
        store.save(&stats).unwrap();

        let loaded = JsonStatsStore::new(&path).load().unwrap();
        assert_eq!(loaded, stats);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let path = scratch_path("corrupt.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonStatsStore::new(&path).load().unwrap_err();
        assert!(err.to_string().contains("Failed to parse stats"));
        std::fs::remove_file(&path).ok();
    }
}
