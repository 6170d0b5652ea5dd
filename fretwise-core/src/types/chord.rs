use crate::error::Result;
use crate::types::formula::{self, ChordFormula};
use crate::types::interval::Interval;
use crate::types::note::PitchClass;
use crate::types::scale::realize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A chord formula realized against a root note
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Chord {
    pub root: String,
    pub key: &'static str,
    pub name: &'static str,
    /// Display symbol, root plus suffix (e.g. `"F#m7"`)
    pub symbol: String,
    pub notes: Vec<String>,
    pub intervals: Vec<Interval>,
    pub interval_map: BTreeMap<PitchClass, Interval>,
    pub note_map: BTreeMap<PitchClass, String>,
}

impl Chord {
    /// Build a chord from a root note and a chord-type key (e.g. `"min7"`)
    pub fn build(root: &str, chord_key: &str) -> Result<Self> {
        let formula = formula::chord_formula(chord_key)?;
        Ok(Self::from_formula(root, formula))
    }

    pub(crate) fn from_formula(root: &str, formula: &'static ChordFormula) -> Self {
        let realized = realize(root, formula.intervals);

        Chord {
            root: root.to_string(),
            key: formula.key,
            name: formula.name,
            symbol: format!("{}{}", root, formula.suffix),
            notes: realized.notes,
            intervals: formula.intervals.to_vec(),
            interval_map: realized.interval_map,
            note_map: realized.note_map,
        }
    }

    /// Get the number of notes in the chord
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Check if the chord is empty
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Set of pitch classes in the chord
    pub fn pitch_classes(&self) -> BTreeSet<PitchClass> {
        self.interval_map.keys().copied().collect()
    }

    /// Check if the chord contains a pitch class
    pub fn contains(&self, pitch_class: PitchClass) -> bool {
        self.interval_map.contains_key(&(pitch_class % 12))
    }

    /// Whether the chord has a seventh-slot tone
    pub fn is_seventh(&self) -> bool {
        self.intervals.len() >= 4
    }

    /// Interval-label map suitable for fretboard display
    pub fn labels(&self) -> BTreeMap<PitchClass, String> {
        self.interval_map
            .iter()
            .map(|(&pc, interval)| (pc, interval.label().to_string()))
            .collect()
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}]", self.symbol, self.notes.join(", "))
    }
}

/// Shorthand for [`Chord::build`]
pub fn build_chord(root: &str, chord_key: &str) -> Result<Chord> {
    Chord::build(root, chord_key)
}
