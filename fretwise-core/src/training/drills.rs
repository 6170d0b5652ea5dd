//! Built-in question pools for the training games.

use crate::error::Result;
use crate::training::selection::Drillable;
use crate::training::session::Question;
use crate::types::chord::Chord;
use crate::types::formula::{self, chord_formula};
use crate::types::fretboard::{display_string, pitch_class_at, STRING_COUNT};
use crate::types::interval::Interval;
use crate::types::note::{
    is_enharmonically_ambiguous, is_flat_key, note_name, pitch_class_of, prefer_flats,
    try_pitch_class_of, FLAT_NAMES, SHARP_NAMES,
};
use std::fmt;
use std::str::FromStr;

/// The three drill games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrillMode {
    /// Name the note at a string/fret position
    Notes,
    /// Name the interval between two notes
    Intervals,
    /// Name a chord from its notes
    Chords,
}

impl DrillMode {
    /// Key used for this mode in the stats table
    pub fn key(self) -> &'static str {
        match self {
            DrillMode::Notes => "notes",
            DrillMode::Intervals => "intervals",
            DrillMode::Chords => "chords",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DrillMode::Notes => "name the note at a fretboard position",
            DrillMode::Intervals => "name the interval between two notes",
            DrillMode::Chords => "name a chord from its notes",
        }
    }
}

impl FromStr for DrillMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "notes" | "note" => Ok(DrillMode::Notes),
            "intervals" | "interval" => Ok(DrillMode::Intervals),
            "chords" | "chord" => Ok(DrillMode::Chords),
            other => Err(format!("Unknown drill mode: {other}")),
        }
    }
}

impl fmt::Display for DrillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Root names used by the drills: flats for the flat-key tonics
pub fn drill_roots() -> Vec<String> {
    (0..12u8)
        .map(|pc| note_name(pc, is_flat_key(pc)).to_string())
        .collect()
}

/// Both spellings for accidentals ("C#/Db"), the plain name otherwise
fn both_spellings(pitch_class: u8) -> String {
    let pc = (pitch_class % 12) as usize;
    if is_enharmonically_ambiguous(pitch_class) {
        format!("{}/{}", SHARP_NAMES[pc], FLAT_NAMES[pc])
    } else {
        SHARP_NAMES[pc].to_string()
    }
}

/// "Which note is this?" at a string/fret position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteQuestion {
    pub root: String,
    /// Display string number, 1 = high E
    pub string: u8,
    pub fret: u8,
}

impl NoteQuestion {
    pub fn new(string_index: usize, fret: u8) -> Self {
        let pc = pitch_class_at(string_index, fret);
        NoteQuestion {
            root: note_name(pc, false).to_string(),
            string: display_string(string_index),
            fret,
        }
    }
}

impl Drillable for NoteQuestion {
    fn row_key(&self) -> &str {
        &self.root
    }
}

impl Question for NoteQuestion {
    fn column_key(&self) -> String {
        self.string.to_string()
    }

    fn prompt(&self) -> String {
        format!(
            "Which note is at fret {} on string {}?",
            self.fret, self.string
        )
    }

    fn check(&self, answer: &str) -> bool {
        try_pitch_class_of(answer).is_ok_and(|pc| pc == pitch_class_of(&self.root))
    }

    fn solution(&self) -> String {
        both_spellings(pitch_class_of(&self.root))
    }
}

/// One question per pitch class on every string, within `fret_count`
pub fn note_pool(fret_count: u8) -> Vec<NoteQuestion> {
    let last_fret = fret_count.min(11);
    (0..STRING_COUNT)
        .flat_map(|string| (0..=last_fret).map(move |fret| NoteQuestion::new(string, fret)))
        .collect()
}

/// "What interval is this?" above a root
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntervalQuestion {
    pub root: String,
    pub semitones: u8,
}

impl IntervalQuestion {
    pub fn new(root: &str, semitones: u8) -> Self {
        IntervalQuestion {
            root: root.to_string(),
            semitones: semitones % 12,
        }
    }

    pub fn interval(&self) -> Interval {
        Interval::from_semitones(self.semitones)
    }

    /// The upper note, spelled to match the root's key preference
    pub fn target_note(&self) -> &'static str {
        let pc = (pitch_class_of(&self.root) + self.semitones) % 12;
        note_name(pc, prefer_flats(&self.root))
    }
}

impl Drillable for IntervalQuestion {
    fn row_key(&self) -> &str {
        &self.root
    }
}

impl Question for IntervalQuestion {
    fn column_key(&self) -> String {
        self.semitones.to_string()
    }

    fn prompt(&self) -> String {
        format!(
            "What interval is {} above {}?",
            self.target_note(),
            self.root
        )
    }

    /// Accepts a degree label (`b3`) or an interval name (`minor 3rd`);
    /// enharmonic labels count as correct
    fn check(&self, answer: &str) -> bool {
        let answer = answer.trim();
        if let Ok(interval) = answer.parse::<Interval>() {
            return interval.semitones() == self.semitones;
        }
        Interval::ALL
            .iter()
            .any(|i| i.semitones() == self.semitones && i.name().eq_ignore_ascii_case(answer))
    }

    fn solution(&self) -> String {
        self.interval().label().to_string()
    }
}

/// Every root against each of the given semitone distances
pub fn interval_pool(semitones: &[u8]) -> Vec<IntervalQuestion> {
    drill_roots()
        .iter()
        .flat_map(|root| semitones.iter().map(move |&st| IntervalQuestion::new(root, st)))
        .collect()
}

/// "What chord is this?" from its spelled notes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordQuestion {
    pub root: String,
    pub chord_key: &'static str,
    pub chord: Chord,
}

impl ChordQuestion {
    pub fn new(root: &str, chord_key: &str) -> Result<Self> {
        let chord = Chord::build(root, chord_key)?;
        Ok(ChordQuestion {
            root: root.to_string(),
            chord_key: chord.key,
            chord,
        })
    }
}

impl Drillable for ChordQuestion {
    fn row_key(&self) -> &str {
        &self.root
    }
}

impl Question for ChordQuestion {
    fn column_key(&self) -> String {
        self.chord_key.to_string()
    }

    fn prompt(&self) -> String {
        format!("Name the chord: {}", self.chord.notes.join(" "))
    }

    /// Accepts the symbol (`F#m7`), the formula key (`min7`) or its name
    fn check(&self, answer: &str) -> bool {
        let answer = answer.trim();
        if answer.is_empty() {
            return false;
        }
        answer == self.chord.symbol
            || answer == self.chord_key
            || answer.eq_ignore_ascii_case(self.chord.name)
            || format!("{} {}", self.root, self.chord.name).eq_ignore_ascii_case(answer)
    }

    fn solution(&self) -> String {
        self.chord.symbol.clone()
    }
}

/// Every root against each of the given chord types
pub fn chord_pool(chord_keys: &[&str]) -> Result<Vec<ChordQuestion>> {
    // Validate keys once, up front
    for key in chord_keys {
        chord_formula(key)?;
    }
    let mut pool = Vec::with_capacity(12 * chord_keys.len());
    for root in drill_roots() {
        for key in chord_keys {
            pool.push(ChordQuestion::new(&root, key)?);
        }
    }
    Ok(pool)
}

/// Chord types drilled when the caller does not choose
pub fn default_chord_keys(use_sevenths: bool) -> Vec<&'static str> {
    let triads = ["major", "min", "dim", "aug"];
    let sevenths = ["maj7", "min7", "dom7", "m7b5"];
    let mut keys: Vec<&'static str> = triads.to_vec();
    if use_sevenths {
        keys.extend(sevenths);
    }
    debug_assert!(keys.iter().all(|k| formula::chord_formula(k).is_ok()));
    keys
}
