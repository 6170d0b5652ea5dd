//! Weighted question ordering.
//!
//! A whole pool is turned into one queue by weighted sampling without
//! replacement, so every item is asked once before anything repeats.
//! Items the player has never seen, gets wrong, or answers slowly are
//! pulled towards the front.

use crate::training::stats::{ModeStats, StatsEntry};
use rand::Rng;

/// Multiplier for items with no recorded answers
pub const UNTESTED_BOOST: f64 = 3.0;

/// Extra weight at 0% accuracy (1x at 100%, 3x at 0%)
pub const ACCURACY_WEIGHT: f64 = 2.0;

/// Extra weight for the slowest item in the pool (up to 2.5x)
pub const REACTION_TIME_WEIGHT: f64 = 1.5;

/// No item ever drops below this weight
pub const MIN_WEIGHT: f64 = 1.0;

/// A pool item that can be looked up in the stats table.
///
/// The row key is usually the question's root note; the column key is
/// supplied separately when building a queue.
pub trait Drillable {
    fn row_key(&self) -> &str;
}

/// Draw weight for one item given its stats and the slowest average
/// reaction time in the pool
pub fn item_weight(entry: Option<&StatsEntry>, max_average_time_ms: f64) -> f64 {
    let tested = entry.map_or(0, |e| e.tested);

    let untested_boost = if tested == 0 { UNTESTED_BOOST } else { 1.0 };

    let accuracy_factor = match entry.and_then(StatsEntry::accuracy) {
        Some(accuracy) => 1.0 + ACCURACY_WEIGHT * (1.0 - accuracy),
        None => 1.0,
    };

    let reaction_time_factor = match entry.and_then(StatsEntry::average_time_ms) {
        Some(average) if max_average_time_ms > 0.0 => {
            1.0 + REACTION_TIME_WEIGHT * (average / max_average_time_ms)
        }
        _ => 1.0,
    };

    (untested_boost * accuracy_factor * reaction_time_factor).max(MIN_WEIGHT)
}

/// Order the whole pool by weighted random draw.
///
/// Returns a permutation of `pool`. If the first item would repeat
/// `last_drawn`, it is swapped with a random later item; this is a single
/// best-effort swap, not a guarantee against every kind of repeat.
pub fn build_weighted_queue<T, C, E, R>(
    pool: &[T],
    stats: &ModeStats,
    column_of: C,
    last_drawn: Option<&T>,
    items_equal: E,
    rng: &mut R,
) -> Vec<T>
where
    T: Drillable + Clone,
    C: Fn(&T) -> String,
    E: Fn(&T, &T) -> bool,
    R: Rng + ?Sized,
{
    let entries: Vec<Option<&StatsEntry>> = pool
        .iter()
        .map(|item| stats.get(item.row_key())?.get(&column_of(item)))
        .collect();

    // Needs the whole pool before any single weight can be finished
    let max_average_time_ms = entries
        .iter()
        .filter_map(|e| e.and_then(StatsEntry::average_time_ms))
        .fold(0.0, f64::max);

    let mut remaining: Vec<(T, f64)> = pool
        .iter()
        .zip(&entries)
        .map(|(item, entry)| (item.clone(), item_weight(*entry, max_average_time_ms)))
        .collect();

    let mut queue = Vec::with_capacity(pool.len());
    while !remaining.is_empty() {
        let index = draw_index(&remaining, rng);
        queue.push(remaining.remove(index).0);
    }

    if queue.len() > 1 {
        if let Some(last) = last_drawn {
            if items_equal(&queue[0], last) {
                let swap_with = rng.gen_range(1..queue.len());
                queue.swap(0, swap_with);
            }
        }
    }

    queue
}

/// Pick one index with probability proportional to its weight
fn draw_index<T, R: Rng + ?Sized>(weighted: &[(T, f64)], rng: &mut R) -> usize {
    let total: f64 = weighted.iter().map(|(_, w)| w).sum();
    let target = rng.gen::<f64>() * total;

    let mut cumulative = 0.0;
    for (i, (_, weight)) in weighted.iter().enumerate() {
        cumulative += weight;
        if target < cumulative {
            return i;
        }
    }
    weighted.len() - 1
}
