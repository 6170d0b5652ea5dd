//! Text rendering of fretboard positions for the terminal

use colored::*;
use fretwise_core::types::fretboard::{string_index, FretPosition, OPEN_STRINGS, STRING_COUNT};
use fretwise_core::types::note::note_name;
use std::collections::BTreeMap;

const CELL_WIDTH: usize = 4;
const INLAY_FRETS: [u8; 6] = [3, 5, 7, 9, 12, 15];

/// Fretboard diagram: one row per string (high E on top), one column per
/// fret, with chord or scale tones labelled and roots highlighted
pub fn render_fretboard(positions: &[FretPosition], fret_count: u8) -> String {
    let cells: BTreeMap<(u8, u8), &FretPosition> =
        positions.iter().map(|p| ((p.string, p.fret), p)).collect();

    let mut out = String::new();

    out.push_str("     ");
    for fret in 0..=fret_count {
        out.push_str(&format!("{:^CELL_WIDTH$}", fret).dimmed().to_string());
        if fret == 0 {
            out.push_str("  ");
        }
    }
    out.push('\n');

    for display in 1..=STRING_COUNT as u8 {
        let open = string_index(display).map_or(0, |i| OPEN_STRINGS[i]);
        out.push_str(&format!("{} {:<2} ", display, note_name(open, false)));

        for fret in 0..=fret_count {
            let cell = match cells.get(&(display, fret)) {
                Some(p) if p.is_root => format!("{:^CELL_WIDTH$}", p.label)
                    .bright_yellow()
                    .bold()
                    .to_string(),
                Some(p) => format!("{:^CELL_WIDTH$}", p.label).cyan().to_string(),
                None => "-".repeat(CELL_WIDTH).dimmed().to_string(),
            };
            out.push_str(&cell);
            out.push_str(if fret == 0 { "||" } else { "|" });
        }
        out.push('\n');
    }

    out.push_str("     ");
    for fret in 0..=fret_count {
        let marker = if INLAY_FRETS.contains(&fret) {
            "•"
        } else {
            " "
        };
        out.push_str(&format!("{:^CELL_WIDTH$}", marker));
        out.push_str(if fret == 0 { "  " } else { " " });
    }
    out.push('\n');

    out
}

/// Compact tab, low E first: `x 3 2 0 1 0`
pub fn render_tab(positions: &[FretPosition]) -> String {
    let mut frets: [Option<u8>; STRING_COUNT] = [None; STRING_COUNT];
    for p in positions {
        if let Some(i) = string_index(p.string) {
            frets[i] = Some(p.fret);
        }
    }
    frets
        .iter()
        .map(|f| f.map_or_else(|| "x".to_string(), |fret| fret.to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}
