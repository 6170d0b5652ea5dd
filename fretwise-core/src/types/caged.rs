//! CAGED chord shapes.
//!
//! Each shape is a template of fret offsets relative to the root on its
//! anchor string, written for a major triad with an optional seventh slot.
//! Generating a voicing substitutes the requested chord's intervals into
//! the template, then reduces the result to something a hand can play: one
//! note per string and at most four consecutive fretted frets.

use crate::error::{Result, TheoryError};
use crate::types::formula::{self, ChordFormula};
use crate::types::fretboard::{
    display_string, pitch_class_at, FretPosition, DEFAULT_FRET_COUNT, OPEN_STRINGS,
};
use crate::types::interval::Interval::{self, Fifth, Root, Seventh, Third};
use crate::types::note::pitch_class_of;
use std::fmt;
use std::str::FromStr;

/// Widest allowed distance between the lowest and highest fretted note
const MAX_SPAN: i16 = 3;

/// Window score bonus for keeping the anchor-string root
const ANCHOR_ROOT_BONUS: u32 = 10;

/// The five CAGED shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CagedShape {
    C,
    A,
    G,
    E,
    D,
}

/// One note of a shape template
#[derive(Debug, Clone, Copy)]
struct ShapeNote {
    /// Internal string index, 0 = low E
    string: usize,
    /// Fret offset from the root fret on the anchor string
    offset: i16,
    interval: Interval,
}

const fn note(string: usize, offset: i16, interval: Interval) -> ShapeNote {
    ShapeNote {
        string,
        offset,
        interval,
    }
}

const C_SHAPE: &[ShapeNote] = &[
    note(1, 0, Root),
    note(2, -1, Third),
    note(3, -3, Fifth),
    note(3, 1, Seventh),
    note(4, -2, Root),
    note(5, -3, Third),
];

const A_SHAPE: &[ShapeNote] = &[
    note(1, 0, Root),
    note(2, 2, Fifth),
    note(3, 2, Root),
    note(3, 1, Seventh),
    note(4, 2, Third),
    note(5, 0, Fifth),
];

const G_SHAPE: &[ShapeNote] = &[
    note(0, 0, Root),
    note(1, -1, Third),
    note(2, -3, Fifth),
    note(3, -3, Root),
    note(4, -3, Third),
    note(5, 0, Root),
    note(5, -1, Seventh),
];

const E_SHAPE: &[ShapeNote] = &[
    note(0, 0, Root),
    note(1, 2, Fifth),
    note(2, 2, Root),
    note(2, 1, Seventh),
    note(3, 1, Third),
    note(4, 0, Fifth),
    note(5, 0, Root),
];

const D_SHAPE: &[ShapeNote] = &[
    note(2, 0, Root),
    note(3, 2, Fifth),
    note(4, 3, Root),
    note(4, 2, Seventh),
    note(5, 2, Third),
];

impl CagedShape {
    pub const ALL: [CagedShape; 5] = [
        CagedShape::C,
        CagedShape::A,
        CagedShape::G,
        CagedShape::E,
        CagedShape::D,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CagedShape::C => "C",
            CagedShape::A => "A",
            CagedShape::G => "G",
            CagedShape::E => "E",
            CagedShape::D => "D",
        }
    }

    /// Internal index of the string carrying the shape's reference root
    pub fn anchor_string(self) -> usize {
        match self {
            CagedShape::C | CagedShape::A => 1,
            CagedShape::G | CagedShape::E => 0,
            CagedShape::D => 2,
        }
    }

    fn template(self) -> &'static [ShapeNote] {
        match self {
            CagedShape::C => C_SHAPE,
            CagedShape::A => A_SHAPE,
            CagedShape::G => G_SHAPE,
            CagedShape::E => E_SHAPE,
            CagedShape::D => D_SHAPE,
        }
    }
}

impl FromStr for CagedShape {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "C" => Ok(CagedShape::C),
            "A" => Ok(CagedShape::A),
            "G" => Ok(CagedShape::G),
            "E" => Ok(CagedShape::E),
            "D" => Ok(CagedShape::D),
            _ => Err(TheoryError::UnknownShape(s.to_string())),
        }
    }
}

impl fmt::Display for CagedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} shape", self.name())
    }
}

/// A template note resolved to an absolute fret
#[derive(Debug, Clone, Copy)]
struct Candidate {
    string: usize,
    fret: i16,
    interval: Interval,
    anchor_root: bool,
    priority: u32,
}

/// How hard a chord tone is to give up when two notes want one string.
///
/// Anchor root > 7th (or added 6th) > 3rd > sus 2nd/4th > 5th > other roots.
fn priority(interval: Interval, anchor_root: bool) -> u32 {
    if anchor_root {
        return 6;
    }
    match interval.degree() {
        7 | 6 => 5,
        3 => 4,
        2 | 4 => 3,
        5 => 2,
        1 => 1,
        _ => 0,
    }
}

/// Chord interval filling a template slot; `None` drops the note
fn substitute(template: Interval, formula: &ChordFormula) -> Option<Interval> {
    let slot = match template {
        Interval::Root => 0,
        Interval::Third => 1,
        Interval::Fifth => 2,
        Interval::Seventh => 3,
        other => return Some(other),
    };
    formula.intervals.get(slot).copied()
}

/// Voicing of `chord_key` on `root` in the given shape, within the default
/// fret range
pub fn caged_positions(
    root: &str,
    shape: CagedShape,
    chord_key: &str,
) -> Result<Vec<FretPosition>> {
    caged_positions_with_max_fret(root, shape, chord_key, DEFAULT_FRET_COUNT)
}

/// Same as [`caged_positions`] but parses the shape name first
pub fn caged_shape(root: &str, shape_name: &str, chord_key: &str) -> Result<Vec<FretPosition>> {
    let shape: CagedShape = shape_name.parse()?;
    caged_positions(root, shape, chord_key)
}

/// Voicing of `chord_key` on `root` in the given shape, with every note
/// between the nut and `max_fret`.
///
/// Output is sorted low string first; no two positions share a string and
/// fretted notes span at most four frets.
pub fn caged_positions_with_max_fret(
    root: &str,
    shape: CagedShape,
    chord_key: &str,
    max_fret: u8,
) -> Result<Vec<FretPosition>> {
    let formula = formula::chord_formula(chord_key)?;
    let root_pc = pitch_class_of(root);
    let anchor = shape.anchor_string();
    let root_fret = (root_pc as i16 - OPEN_STRINGS[anchor] as i16).rem_euclid(12);

    let mut candidates: Vec<Candidate> = shape
        .template()
        .iter()
        .filter_map(|tn| {
            let interval = substitute(tn.interval, formula)?;
            let correction = interval.semitones() as i16 - tn.interval.semitones() as i16;
            let fret = root_fret + tn.offset + correction;
            if !(0..=max_fret as i16).contains(&fret) {
                return None;
            }
            let anchor_root = tn.string == anchor && tn.interval == Interval::Root;
            Some(Candidate {
                string: tn.string,
                fret,
                interval,
                anchor_root,
                priority: priority(interval, anchor_root),
            })
        })
        .collect();

    candidates = one_note_per_string(candidates);
    candidates = limit_span(candidates);
    candidates.sort_by_key(|c| c.string);

    log::debug!(
        "{} {} in {}: root fret {}, {} notes kept",
        root,
        chord_key,
        shape,
        root_fret,
        candidates.len()
    );

    Ok(candidates
        .into_iter()
        .map(|c| {
            let fret = c.fret as u8;
            FretPosition {
                string: display_string(c.string),
                fret,
                pitch_class: pitch_class_at(c.string, fret),
                label: c.interval.label().to_string(),
                is_root: c.interval == Interval::Root,
            }
        })
        .collect())
}

/// Keep the highest-priority note on each string (first one wins ties)
fn one_note_per_string(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut kept: Vec<Candidate> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        match kept.iter_mut().find(|k| k.string == candidate.string) {
            Some(existing) if candidate.priority > existing.priority => *existing = candidate,
            Some(_) => {}
            None => kept.push(candidate),
        }
    }
    kept
}

/// Drop fretted notes outside the best-scoring four-fret window.
///
/// Open strings never count towards the span and are always kept.
fn limit_span(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let fretted: Vec<&Candidate> = candidates.iter().filter(|c| c.fret > 0).collect();
    let (Some(min), Some(max)) = (
        fretted.iter().map(|c| c.fret).min(),
        fretted.iter().map(|c| c.fret).max(),
    ) else {
        return candidates;
    };

    if max - min <= MAX_SPAN {
        return candidates;
    }

    let mut best_window = min;
    let mut best_score = 0;
    for window in min..=(max - MAX_SPAN) {
        let range = window..=window + MAX_SPAN;
        let mut score = 0;
        let mut has_anchor_root = false;
        for c in fretted.iter().filter(|c| range.contains(&c.fret)) {
            score += c.priority;
            has_anchor_root |= c.anchor_root;
        }
        if has_anchor_root {
            score += ANCHOR_ROOT_BONUS;
        }
        if window == min || score > best_score {
            best_window = window;
            best_score = score;
        }
    }

    log::debug!(
        "Fret span {}-{} too wide, keeping window {}-{}",
        min,
        max,
        best_window,
        best_window + MAX_SPAN
    );

    let keep = best_window..=best_window + MAX_SPAN;
    candidates
        .into_iter()
        .filter(|c| c.fret == 0 || keep.contains(&c.fret))
        .collect()
}
