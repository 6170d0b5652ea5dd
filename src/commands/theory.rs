//! Theory lookup commands (scale, chord, diatonic, relative, mode, caged,
//! find, list)

use crate::commands::{CommandContext, CommandResult};
use crate::display::{render_fretboard, render_tab};
use colored::*;
use fretwise_core::types::formula::{CHORDS, MODES, SCALES};
use fretwise_core::types::{self as theory, CagedShape, Chord, PitchClass, Scale};
use std::collections::BTreeSet;

/// Split `<root> [rest...]`, validating the root
fn root_and_rest<'a>(
    args: &'a str,
    ctx: &CommandContext,
    usage: &str,
) -> Result<(String, Vec<&'a str>), CommandResult> {
    let mut parts = args.split_whitespace();
    let root = parts
        .next()
        .ok_or_else(|| CommandResult::Error(format!("Usage: {usage}")))?;
    let root = ctx.note(root).map_err(CommandResult::Error)?;
    Ok((root, parts.collect()))
}

/// Pitch classes of a space- or comma-separated note list
fn parse_note_set(
    args: &str,
    ctx: &CommandContext,
) -> Result<BTreeSet<PitchClass>, CommandResult> {
    let mut set = BTreeSet::new();
    for token in args.split(|c: char| c == ',' || c.is_whitespace()) {
        if token.is_empty() {
            continue;
        }
        let name = ctx.note(token).map_err(CommandResult::Error)?;
        set.insert(theory::pitch_class_of(&name));
    }
    if set.len() < 2 {
        return Err(CommandResult::Error(
            "Give at least two different notes".to_string(),
        ));
    }
    Ok(set)
}

fn describe_scale(scale: &Scale, fret_count: u8) -> String {
    let labels: Vec<&str> = scale.intervals.iter().map(|i| i.label()).collect();
    let positions = theory::positions_on_fretboard(
        &scale.labels(),
        fret_count,
        Some(theory::pitch_class_of(&scale.root)),
    );
    format!(
        "{} {}\n  Notes:     {}\n  Intervals: {}\n\n{}",
        scale.root.bright_green().bold(),
        scale.name.bold(),
        scale.notes.join(" ").cyan(),
        labels.join(" "),
        render_fretboard(&positions, fret_count)
    )
}

fn describe_chord(chord: &Chord, fret_count: u8) -> String {
    let labels: Vec<&str> = chord.intervals.iter().map(|i| i.label()).collect();
    let positions = theory::positions_on_fretboard(
        &chord.labels(),
        fret_count,
        Some(theory::pitch_class_of(&chord.root)),
    );
    format!(
        "{} ({} {})\n  Notes:     {}\n  Intervals: {}\n\n{}",
        chord.symbol.bright_green().bold(),
        chord.root,
        chord.name,
        chord.notes.join(" ").cyan(),
        labels.join(" "),
        render_fretboard(&positions, fret_count)
    )
}

/// Handle `scale <root> [type]`
pub fn cmd_scale(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let (root, rest) = match root_and_rest(args, ctx, "scale <root> [type]") {
        Ok(parsed) => parsed,
        Err(result) => return result,
    };
    let key = rest.first().copied().unwrap_or("major");
    match Scale::build(&root, key) {
        Ok(scale) => CommandResult::Message(describe_scale(&scale, ctx.config.fret_count)),
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// Handle `chord <root> [type]`
pub fn cmd_chord(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let (root, rest) = match root_and_rest(args, ctx, "chord <root> [type]") {
        Ok(parsed) => parsed,
        Err(result) => return result,
    };
    let key = rest.first().copied().unwrap_or("major");
    match Chord::build(&root, key) {
        Ok(chord) => CommandResult::Message(describe_chord(&chord, ctx.config.fret_count)),
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// Handle `diatonic <root> [type] [7]`
pub fn cmd_diatonic(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let (root, rest) = match root_and_rest(args, ctx, "diatonic <root> [type] [7]") {
        Ok(parsed) => parsed,
        Err(result) => return result,
    };
    let sevenths = ctx.config.use_sevenths || rest.iter().any(|a| *a == "7" || *a == "sevenths");
    let key = rest
        .iter()
        .copied()
        .find(|a| *a != "7" && *a != "sevenths")
        .unwrap_or("major");

    match theory::build_scale_chords(&root, key, sevenths) {
        Ok(chords) => {
            let mut out = format!(
                "Diatonic chords of {} {}\n",
                root.bright_green().bold(),
                key
            );
            for dc in &chords {
                out.push_str(&format!(
                    "  {:<7} {:<8} {}\n",
                    dc.numeral,
                    dc.chord.symbol,
                    dc.chord.notes.join(" ")
                ));
            }
            CommandResult::Message(out.trim_end().to_string())
        }
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// Handle `relative <root> [type]`
pub fn cmd_relative(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let (root, rest) = match root_and_rest(args, ctx, "relative <root> [major|natural_minor]") {
        Ok(parsed) => parsed,
        Err(result) => return result,
    };
    let key = rest.first().copied().unwrap_or("major");

    let Some(related) = theory::relative_scale(&root, key) else {
        return CommandResult::Message(format!("{key} has no relative scale"));
    };
    match Scale::build(&related.root, related.scale_key) {
        Ok(scale) => CommandResult::Message(format!(
            "Relative of {} {}: {} {}\n  Notes: {}",
            root,
            key,
            scale.root.bright_green().bold(),
            scale.name,
            scale.notes.join(" ").cyan()
        )),
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// Handle `mode <parent root> [mode]`
pub fn cmd_mode(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let (root, rest) = match root_and_rest(args, ctx, "mode <parent root> [mode]") {
        Ok(parsed) => parsed,
        Err(result) => return result,
    };

    if let Some(mode_key) = rest.first() {
        return match theory::build_mode(&root, &mode_key.to_ascii_lowercase()) {
            Ok(scale) => CommandResult::Message(describe_scale(&scale, ctx.config.fret_count)),
            Err(e) => CommandResult::Error(e.to_string()),
        };
    }

    match theory::scale::modes_of(&root) {
        Ok(scales) => {
            let mut out = format!("Modes of {} major\n", root.bright_green().bold());
            for (mode, scale) in MODES.iter().zip(&scales) {
                out.push_str(&format!(
                    "  {:<11} {:<3} {}\n",
                    mode.name,
                    scale.root,
                    scale.notes.join(" ")
                ));
            }
            CommandResult::Message(out.trim_end().to_string())
        }
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// Handle `caged <root> [shape] [type]`
pub fn cmd_caged(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let (root, rest) = match root_and_rest(args, ctx, "caged <root> [C|A|G|E|D] [type]") {
        Ok(parsed) => parsed,
        Err(result) => return result,
    };

    let mut rest = rest.into_iter().peekable();
    let shape = rest.peek().and_then(|s| s.parse::<CagedShape>().ok());
    if shape.is_some() {
        rest.next();
    }
    let key = rest.next().unwrap_or("major");

    let shapes = match shape {
        Some(shape) => vec![shape],
        None => CagedShape::ALL.to_vec(),
    };
    let single = shapes.len() == 1;

    let mut out = String::new();
    for shape in shapes {
        let positions = match theory::caged_positions_with_max_fret(
            &root,
            shape,
            key,
            ctx.config.fret_count,
        ) {
            Ok(positions) => positions,
            Err(e) => return CommandResult::Error(e.to_string()),
        };

        if positions.is_empty() {
            out.push_str(&format!("{}: no playable voicing\n", shape));
            continue;
        }
        let label = shape.to_string().bold();
        out.push_str(&format!("{label}: {}\n", render_tab(&positions)));
        if single {
            let top = positions.iter().map(|p| p.fret).max().unwrap_or(0);
            out.push('\n');
            out.push_str(&render_fretboard(&positions, top.max(4)));
        }
    }
    CommandResult::Message(out.trim_end().to_string())
}

/// Handle `find <notes...>`: chords containing every given note
pub fn cmd_find_chords(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let notes = match parse_note_set(args, ctx) {
        Ok(notes) => notes,
        Err(result) => return result,
    };

    let exact: Vec<String> = theory::identify_chords(&notes)
        .into_iter()
        .map(|c| c.symbol)
        .collect();
    let containing: Vec<String> = theory::find_chords_containing(&notes)
        .into_iter()
        .map(|c| c.symbol)
        .filter(|s| !exact.contains(s))
        .collect();

    if exact.is_empty() && containing.is_empty() {
        return CommandResult::Message("No chord contains all of those notes".to_string());
    }

    let mut out = String::new();
    if !exact.is_empty() {
        out.push_str(&format!("Exact:    {}\n", exact.join(", ").bright_green()));
    }
    if !containing.is_empty() {
        out.push_str(&format!("Contains: {}\n", containing.join(", ")));
    }
    CommandResult::Message(out.trim_end().to_string())
}

/// Handle `find scales <notes...>`
pub fn cmd_find_scales(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let notes = match parse_note_set(args, ctx) {
        Ok(notes) => notes,
        Err(result) => return result,
    };

    let scales = theory::find_scales_containing(&notes);
    if scales.is_empty() {
        return CommandResult::Message("No scale contains all of those notes".to_string());
    }
    let names: Vec<String> = scales
        .iter()
        .map(|s| format!("{} {}", s.root, s.name))
        .collect();
    CommandResult::Message(names.join("\n"))
}

/// Handle `list [scales|chords|modes]`
pub fn cmd_list(args: &str, _ctx: &mut CommandContext) -> CommandResult {
    let mut out = String::new();
    let all = args.is_empty();

    if all || args == "scales" {
        out.push_str(&format!("{}\n", "Scales:".green()));
        for s in SCALES {
            out.push_str(&format!("  {:<18} {}\n", s.key.cyan(), s.name));
        }
    }
    if all || args == "chords" {
        out.push_str(&format!("{}\n", "Chords:".green()));
        for c in CHORDS {
            let suffix = if c.suffix.is_empty() {
                "(none)"
            } else {
                c.suffix
            };
            out.push_str(&format!("  {:<10} {:<8} {}\n", c.key.cyan(), suffix, c.name));
        }
    }
    if all || args == "modes" {
        out.push_str(&format!("{}\n", "Modes:".green()));
        for m in MODES {
            out.push_str(&format!("  {:<11} degree {}\n", m.key.cyan(), m.degree));
        }
    }

    if out.is_empty() {
        return CommandResult::Error("Usage: list [scales|chords|modes]".to_string());
    }
    CommandResult::Message(out.trim_end().to_string())
}
