//! Drill and stats commands

use crate::commands::{CommandContext, CommandResult};
use colored::*;
use fretwise_core::training::drills::{
    chord_pool, default_chord_keys, interval_pool, note_pool, DrillMode,
};
use fretwise_core::training::{Question, StatsEntry, TrainingSession};
use rand::Rng;
use std::time::Instant;

/// Interval drill covers every distance inside the octave
const DRILL_SEMITONES: [u8; 11] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

/// Handle `drill [notes|intervals|chords]`
pub fn cmd_drill(args: &str, _ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::StartDrill(DrillMode::Intervals);
    }
    match args.parse::<DrillMode>() {
        Ok(mode) => CommandResult::StartDrill(mode),
        Err(e) => CommandResult::Error(format!("{e} (try notes, intervals or chords)")),
    }
}

fn describe_entry(entry: &StatsEntry) -> String {
    let accuracy = entry
        .accuracy()
        .map_or_else(|| "-".to_string(), |a| format!("{:.0}%", a * 100.0));
    let time = entry
        .average_time_ms()
        .map_or_else(|| "-".to_string(), |ms| format!("{:.1}s", ms / 1000.0));
    format!(
        "{:>4} answered  {:>4} correct  {:>6} avg",
        entry.tested, accuracy, time
    )
}

/// Handle `stats [mode]`
pub fn cmd_stats(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let modes: Vec<String> = if args.is_empty() {
        ctx.stats.mode_keys().map(str::to_string).collect()
    } else {
        match args.parse::<DrillMode>() {
            Ok(mode) => vec![mode.key().to_string()],
            Err(e) => return CommandResult::Error(e),
        }
    };

    let mut out = String::new();
    for mode in modes.iter().filter(|m| ctx.stats.mode(m).is_some()) {
        out.push_str(&format!(
            "{}  {}\n",
            format!("{mode:<10}").bright_green().bold(),
            describe_entry(&ctx.stats.totals(mode))
        ));
        for (column, entry) in ctx.stats.column_totals(mode) {
            out.push_str(&format!("  {:<8}  {}\n", column, describe_entry(&entry)));
        }
    }

    if out.is_empty() {
        return CommandResult::Message("No stats recorded yet. Try 'drill'.".to_string());
    }
    CommandResult::Message(out.trim_end().to_string())
}

/// Handle `stats reset [mode]`
pub fn cmd_stats_reset(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let mode = if args.is_empty() {
        None
    } else {
        match args.parse::<DrillMode>() {
            Ok(mode) => Some(mode),
            Err(e) => return CommandResult::Error(e),
        }
    };

    ctx.stats.reset(mode.map(DrillMode::key));
    if let Err(e) = ctx.save_stats() {
        return CommandResult::Error(format!("{e:#}"));
    }
    match mode {
        Some(mode) => CommandResult::Message(format!("Cleared {mode} stats")),
        None => CommandResult::Message("Cleared all stats".to_string()),
    }
}

/// Outcome of one drill run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrillSummary {
    pub asked: usize,
    pub correct: usize,
}

/// Ask up to `rounds` questions from `session`, recording every answer in
/// `ctx.stats`. `ask` shows a prompt and returns the reply; `None`, an
/// empty reply or `q` ends the drill early.
pub fn run_session<T, R, F>(
    session: &mut TrainingSession<T>,
    ctx: &mut CommandContext,
    rounds: usize,
    rng: &mut R,
    mut ask: F,
) -> DrillSummary
where
    T: Question,
    R: Rng + ?Sized,
    F: FnMut(&str) -> Option<String>,
{
    let mut summary = DrillSummary::default();

    for round in 1..=rounds {
        let Some(question) = session.next_question(&ctx.stats, rng).cloned() else {
            break;
        };
        let prompt = format!("[{}/{}] {}", round, rounds, question.prompt());

        let started = Instant::now();
        let Some(reply) = ask(&prompt) else {
            break;
        };
        let reply = reply.trim();
        if reply.is_empty() || reply == "q" {
            break;
        }

        let correct = session.answer(&mut ctx.stats, &question, reply, Some(started.elapsed()));
        summary.asked += 1;
        if correct {
            summary.correct += 1;
            println!("{}", "✓ Correct".bright_green());
        } else {
            println!("{} {}", "✗ It was".bright_red(), question.solution().bold());
        }
    }

    summary
}

/// Build the pool for `mode`, run it, and save stats afterwards
pub fn run_drill<R, F>(
    mode: DrillMode,
    ctx: &mut CommandContext,
    rng: &mut R,
    ask: F,
) -> Result<DrillSummary, String>
where
    R: Rng + ?Sized,
    F: FnMut(&str) -> Option<String>,
{
    let rounds = ctx.config.drill_rounds;
    let summary = match mode {
        DrillMode::Notes => {
            let mut session = TrainingSession::new(mode.key(), note_pool(ctx.config.fret_count));
            run_session(&mut session, ctx, rounds, rng, ask)
        }
        DrillMode::Intervals => {
            let mut session = TrainingSession::new(mode.key(), interval_pool(&DRILL_SEMITONES));
            run_session(&mut session, ctx, rounds, rng, ask)
        }
        DrillMode::Chords => {
            let pool = chord_pool(&default_chord_keys(ctx.config.use_sevenths))
                .map_err(|e| e.to_string())?;
            let mut session = TrainingSession::new(mode.key(), pool);
            run_session(&mut session, ctx, rounds, rng, ask)
        }
    };

    log::info!(
        "{} drill: {}/{} correct",
        mode, summary.correct, summary.asked
    );
    if let Err(e) = ctx.save_stats() {
        log::warn!("{:#}", e);
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ctx(rounds: usize) -> CommandContext {
        colored::control::set_override(false);
        let config = AppConfig {
            drill_rounds: rounds,
            ..AppConfig::default()
        };
        CommandContext::in_memory(config)
    }

    #[test]
    fn test_drill_command_modes() {
        let mut ctx = ctx(5);
        assert_eq!(
            cmd_drill("", &mut ctx),
            CommandResult::StartDrill(DrillMode::Intervals)
        );
        assert_eq!(
            cmd_drill("chords", &mut ctx),
            CommandResult::StartDrill(DrillMode::Chords)
        );
        assert!(matches!(cmd_drill("scales", &mut ctx), CommandResult::Error(_)));
    }

    #[test]
    fn test_drill_records_every_answer() {
        let mut ctx = ctx(6);
        let mut rng = StdRng::seed_from_u64(3);

        // Always answer a perfect fifth
        let answer_fifth = |_: &str| Some("5".to_string());
        let summary = run_drill(DrillMode::Intervals, &mut ctx, &mut rng, answer_fifth).unwrap();
        assert_eq!(summary.asked, 6);
        assert!(summary.correct <= 6);

        let totals = ctx.stats.totals("intervals");
        assert_eq!(totals.tested, 6);
        assert_eq!(totals.correct as usize, summary.correct);
        assert_eq!(totals.timed_count, 6);
    }

    #[test]
    fn test_drill_stops_on_quit() {
        let mut ctx = ctx(10);
        let mut rng = StdRng::seed_from_u64(8);
        let mut replies = vec!["C".to_string(), "q".to_string()].into_iter();

        let ask = |_: &str| replies.next();
        let summary = run_drill(DrillMode::Notes, &mut ctx, &mut rng, ask).unwrap();
        assert_eq!(summary.asked, 1);
        assert_eq!(ctx.stats.totals("notes").tested, 1);
    }

    #[test]
    fn test_perfect_chord_drill() {
        let mut ctx = ctx(4);
        let mut rng = StdRng::seed_from_u64(12);
        let mut session =
            TrainingSession::new("chords", chord_pool(&default_chord_keys(false)).unwrap());

        // Answer each prompt with its own solution
        for _ in 0..4 {
            let q = session.next_question(&ctx.stats, &mut rng).unwrap().clone();
            assert!(session.answer(&mut ctx.stats, &q, &q.solution(), None));
        }
        assert_eq!(ctx.stats.totals("chords").correct, 4);
    }

    #[test]
    fn test_stats_commands() {
        let mut ctx = ctx(1);
        assert_eq!(
            cmd_stats("", &mut ctx),
            CommandResult::Message("No stats recorded yet. Try 'drill'.".to_string())
        );

        ctx.stats.record("intervals", "C", "7", true, None);
        ctx.stats.record("notes", "E", "6", false, None);
        match cmd_stats("intervals", &mut ctx) {
            CommandResult::Message(out) => {
                assert!(out.starts_with("intervals"));
                assert!(out.contains("100%"));
                assert!(!out.contains("notes"));
            }
            other => panic!("unexpected {:?}", other),
        }

        assert_eq!(
            cmd_stats_reset("notes", &mut ctx),
            CommandResult::Message("Cleared notes stats".to_string())
        );
        assert!(ctx.stats.mode("notes").is_none());
        assert!(ctx.stats.mode("intervals").is_some());
    }
}
