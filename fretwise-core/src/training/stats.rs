//! Per-question answer statistics.
//!
//! The persisted shape is `stats[mode][row][column] = {tested, correct,
//! totalTimeMs, timedCount}`, where the row is usually a root note and the
//! column a semitone count or a chord/scale key. Keys are strings so the
//! whole structure maps one-to-one onto a JSON object.

use std::collections::BTreeMap;
use std::time::Duration;

/// Counters for one (row, column) cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct StatsEntry {
    pub tested: u32,
    pub correct: u32,
    pub total_time_ms: u64,
    pub timed_count: u32,
}

impl StatsEntry {
    /// Count one answer; untimed answers leave the timing counters alone
    pub fn record(&mut self, correct: bool, elapsed: Option<Duration>) {
        self.tested += 1;
        if correct {
            self.correct += 1;
        }
        if let Some(elapsed) = elapsed {
            self.total_time_ms += elapsed.as_millis() as u64;
            self.timed_count += 1;
        }
    }

    /// Fraction of correct answers, `None` if never tested
    pub fn accuracy(&self) -> Option<f64> {
        (self.tested > 0).then(|| self.correct as f64 / self.tested as f64)
    }

    /// Mean reaction time in milliseconds, `None` without timed samples
    pub fn average_time_ms(&self) -> Option<f64> {
        (self.timed_count > 0).then(|| self.total_time_ms as f64 / self.timed_count as f64)
    }

    fn merge(&mut self, other: &StatsEntry) {
        self.tested += other.tested;
        self.correct += other.correct;
        self.total_time_ms += other.total_time_ms;
        self.timed_count += other.timed_count;
    }
}

/// Row key -> column key -> counters, for one game mode
pub type ModeStats = BTreeMap<String, BTreeMap<String, StatsEntry>>;

/// Statistics for every game mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StatsData {
    modes: BTreeMap<String, ModeStats>,
}

impl StatsData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stats for one mode, if anything has been recorded for it
    pub fn mode(&self, mode: &str) -> Option<&ModeStats> {
        self.modes.get(mode)
    }

    pub fn entry(&self, mode: &str, row: &str, column: &str) -> Option<&StatsEntry> {
        self.modes.get(mode)?.get(row)?.get(column)
    }

    /// Record one answer, creating the cell if needed
    pub fn record(
        &mut self,
        mode: &str,
        row: &str,
        column: &str,
        correct: bool,
        elapsed: Option<Duration>,
    ) {
        self.modes
            .entry(mode.to_string())
            .or_default()
            .entry(row.to_string())
            .or_default()
            .entry(column.to_string())
            .or_default()
            .record(correct, elapsed);
    }

    /// Clear one mode, or everything when `mode` is `None`
    pub fn reset(&mut self, mode: Option<&str>) {
        match mode {
            Some(mode) => {
                self.modes.remove(mode);
            }
            None => self.modes.clear(),
        }
    }

    /// Modes that have recorded stats
    pub fn mode_keys(&self) -> impl Iterator<Item = &str> {
        self.modes.keys().map(String::as_str)
    }

    /// All cells of a mode folded into one entry
    pub fn totals(&self, mode: &str) -> StatsEntry {
        let mut total = StatsEntry::default();
        let entries = self
            .modes
            .get(mode)
            .into_iter()
            .flat_map(|m| m.values())
            .flat_map(|row| row.values());
        for entry in entries {
            total.merge(entry);
        }
        total
    }

    /// Per-column totals for a mode, summed over every row
    pub fn column_totals(&self, mode: &str) -> BTreeMap<String, StatsEntry> {
        let mut columns: BTreeMap<String, StatsEntry> = BTreeMap::new();
        for row in self.modes.get(mode).into_iter().flat_map(|m| m.values()) {
            for (column, entry) in row {
                columns.entry(column.clone()).or_default().merge(entry);
            }
        }
        columns
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}
