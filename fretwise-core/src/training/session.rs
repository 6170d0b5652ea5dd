use crate::training::selection::{build_weighted_queue, Drillable};
use crate::training::stats::{ModeStats, StatsData};
use rand::Rng;
use std::collections::VecDeque;
use std::time::Duration;

/// A pool item that carries its own stats column and can be asked and
/// checked by a front end
pub trait Question: Drillable + Clone + PartialEq {
    /// Stats column the item is filed under
    fn column_key(&self) -> String;

    /// Text shown to the player
    fn prompt(&self) -> String;

    /// Whether `answer` is an acceptable response
    fn check(&self, answer: &str) -> bool;

    /// The expected answer, for feedback
    fn solution(&self) -> String;
}

/// State of one drill: the pool being worked through and what comes next.
///
/// The session owns no stats; callers pass their `StatsData` in, so
/// persistence stays outside the core.
#[derive(Debug, Clone)]
pub struct TrainingSession<T: Question> {
    mode: String,
    pool: Vec<T>,
    queue: VecDeque<T>,
    last_drawn: Option<T>,
    asked: usize,
}

impl<T: Question> TrainingSession<T> {
    pub fn new(mode: &str, pool: Vec<T>) -> Self {
        TrainingSession {
            mode: mode.to_string(),
            pool,
            queue: VecDeque::new(),
            last_drawn: None,
            asked: 0,
        }
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn pool(&self) -> &[T] {
        &self.pool
    }

    /// Questions left before the pool is reshuffled
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Questions handed out so far
    pub fn asked(&self) -> usize {
        self.asked
    }

    /// Next question, rebuilding the queue from current stats once the
    /// previous pass through the pool is used up
    pub fn next_question<R: Rng + ?Sized>(
        &mut self,
        stats: &StatsData,
        rng: &mut R,
    ) -> Option<&T> {
        if self.queue.is_empty() {
            let empty = ModeStats::new();
            let mode_stats = stats.mode(&self.mode).unwrap_or(&empty);
            let queue = build_weighted_queue(
                &self.pool,
                mode_stats,
                T::column_key,
                self.last_drawn.as_ref(),
                T::eq,
                rng,
            );
            log::debug!("Rebuilt {} queue with {} items", self.mode, queue.len());
            self.queue = queue.into();
        }

        let next = self.queue.pop_front()?;
        self.asked += 1;
        self.last_drawn = Some(next);
        self.last_drawn.as_ref()
    }

    /// Check an answer to `question` and record the outcome
    pub fn answer(
        &self,
        stats: &mut StatsData,
        question: &T,
        answer: &str,
        elapsed: Option<Duration>,
    ) -> bool {
        let correct = question.check(answer);
        self.record_answer(stats, question, correct, elapsed);
        correct
    }

    /// Record an already-judged answer
    pub fn record_answer(
        &self,
        stats: &mut StatsData,
        question: &T,
        correct: bool,
        elapsed: Option<Duration>,
    ) {
        stats.record(
            &self.mode,
            question.row_key(),
            &question.column_key(),
            correct,
            elapsed,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::drills::IntervalQuestion;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn pool() -> Vec<IntervalQuestion> {
        [3u8, 4, 7]
            .iter()
            .map(|&st| IntervalQuestion::new("C", st))
            .collect()
    }

    #[test]
    fn test_pool_exhausted_before_repeat() {
        let mut session = TrainingSession::new("intervals", pool());
        let stats = StatsData::new();
        let mut rng = StdRng::seed_from_u64(9);

        let mut seen = HashSet::new();
        for _ in 0..3 {
            let q = session.next_question(&stats, &mut rng).unwrap().clone();
            seen.insert(q.semitones);
        }
        assert_eq!(seen.len(), 3);
        assert_eq!(session.remaining(), 0);
        assert_eq!(session.asked(), 3);
    }

    #[test]
    fn test_no_back_to_back_repeat_across_passes() {
        let mut session = TrainingSession::new("intervals", pool());
        let stats = StatsData::new();
        let mut rng = StdRng::seed_from_u64(21);

        let mut previous: Option<IntervalQuestion> = None;
        for _ in 0..30 {
            let was_last_of_pass = session.remaining() == 0;
            let q = session.next_question(&stats, &mut rng).unwrap().clone();
            if was_last_of_pass {
                assert_ne!(Some(&q), previous.as_ref());
            }
            previous = Some(q);
        }
    }

    #[test]
    fn test_answers_land_in_stats() {
        let mut session = TrainingSession::new("intervals", pool());
        let mut stats = StatsData::new();
        let mut rng = StdRng::seed_from_u64(4);

        let q = session.next_question(&stats, &mut rng).unwrap().clone();
        let solution = q.solution();
        assert!(session.answer(&mut stats, &q, &solution, Some(Duration::from_millis(900))));
        assert!(!session.answer(&mut stats, &q, "nonsense", None));

        let entry = stats
            .entry("intervals", "C", &q.semitones.to_string())
            .unwrap();
        assert_eq!((entry.tested, entry.correct, entry.timed_count), (2, 1, 1));
    }

    #[test]
    fn test_empty_pool_yields_nothing() {
        let mut session: TrainingSession<IntervalQuestion> =
            TrainingSession::new("intervals", vec![]);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(session.next_question(&StatsData::new(), &mut rng).is_none());
    }
}
