use crate::training::stats::StatsData;
use std::convert::Infallible;

/// Somewhere stats can be loaded from and written back to.
///
/// The core only ships an in-memory store; front ends bring their own
/// (a JSON file on desktop, browser storage under WASM).
pub trait StatsStore {
    type Error;

    /// Stored stats, or empty stats if nothing has been saved yet
    fn load(&self) -> Result<StatsData, Self::Error>;

    fn save(&mut self, stats: &StatsData) -> Result<(), Self::Error>;
}

/// Keeps stats for the lifetime of the process only
#[derive(Debug, Clone, Default)]
pub struct MemoryStatsStore {
    stats: StatsData,
}

impl MemoryStatsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatsStore for MemoryStatsStore {
    type Error = Infallible;

    fn load(&self) -> Result<StatsData, Self::Error> {
        Ok(self.stats.clone())
    }

    fn save(&mut self, stats: &StatsData) -> Result<(), Self::Error> {
        self.stats = stats.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStatsStore::new();
        assert!(store.load().unwrap().is_empty());

        let mut stats = StatsData::new();
        stats.record("chords", "A", "min", true, None);
        store.save(&stats).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, stats);
    }
}
