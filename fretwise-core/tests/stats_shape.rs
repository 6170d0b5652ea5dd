#![cfg(feature = "serde")]

use fretwise_core::training::stats::StatsData;
use std::time::Duration;

#[test]
fn test_persisted_shape() {
    let mut stats = StatsData::new();
    stats.record(
        "intervals",
        "C",
        "4",
        true,
        Some(Duration::from_millis(1500)),
    );
    stats.record("intervals", "C", "4", false, None);

    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "intervals": {
                "C": {
                    "4": { "tested": 2, "correct": 1, "totalTimeMs": 1500, "timedCount": 1 }
                }
            }
        })
    );

    let back: StatsData = serde_json::from_value(json).unwrap();
    assert_eq!(back, stats);
}

#[test]
fn test_missing_counters_default_to_zero() {
    let stats: StatsData =
        serde_json::from_str(r#"{"chords": {"G": {"min": {"tested": 3}}}}"#).unwrap();
    let entry = stats.entry("chords", "G", "min").unwrap();
    assert_eq!((entry.tested, entry.correct, entry.timed_count), (3, 0, 0));
}
