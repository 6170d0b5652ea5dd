use fretwise_core::training::drills::{interval_pool, IntervalQuestion};
use fretwise_core::training::selection::{build_weighted_queue, MIN_WEIGHT};
use fretwise_core::training::session::Question;
use fretwise_core::training::stats::{ModeStats, StatsData};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

fn timed(ms: u64) -> Option<Duration> {
    Some(Duration::from_millis(ms))
}

fn perfect_stats(pool: &[IntervalQuestion]) -> StatsData {
    let mut stats = StatsData::new();
    for q in pool {
        for _ in 0..20 {
            stats.record("intervals", &q.root, &q.column_key(), true, timed(0));
        }
    }
    stats
}

#[test]
fn test_queue_is_a_permutation_of_the_pool() {
    let pool = interval_pool(&[1, 3, 4, 7, 10]);
    let mut stats = StatsData::new();
    stats.record("intervals", "C", "3", false, timed(4000));
    stats.record("intervals", "Eb", "7", true, timed(700));
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..20 {
        let queue = build_weighted_queue(
            &pool,
            stats.mode("intervals").unwrap(),
            IntervalQuestion::column_key,
            None,
            |a, b| a == b,
            &mut rng,
        );
        assert_eq!(queue.len(), pool.len());
        for item in &pool {
            let want = pool.iter().filter(|q| *q == item).count();
            let got = queue.iter().filter(|q| *q == item).count();
            assert_eq!(want, got);
        }
    }
}

#[test]
fn test_perfect_history_keeps_every_item() {
    let pool = interval_pool(&[5, 7]);
    let stats = perfect_stats(&pool);
    let mut rng = StdRng::seed_from_u64(77);

    let mut first_seen = std::collections::HashSet::new();
    for _ in 0..400 {
        let queue = build_weighted_queue(
            &pool,
            stats.mode("intervals").unwrap(),
            IntervalQuestion::column_key,
            None,
            |a, b| a == b,
            &mut rng,
        );
        assert_eq!(queue.len(), pool.len());
        first_seen.insert(queue[0].clone());
    }
    // Every item still gets drawn first now and then
    assert_eq!(first_seen.len(), pool.len());
    assert!(MIN_WEIGHT > 0.0);
}

#[test]
fn test_single_item_pool_with_matching_last_drawn() {
    let pool = vec![IntervalQuestion::new("A", 4)];
    let last = IntervalQuestion::new("A", 4);
    let mut rng = StdRng::seed_from_u64(1);
    let queue = build_weighted_queue(
        &pool,
        &ModeStats::new(),
        IntervalQuestion::column_key,
        Some(&last),
        |a, b| a == b,
        &mut rng,
    );
    assert_eq!(queue, pool);
}
