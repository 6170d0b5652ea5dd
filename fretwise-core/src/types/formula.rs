//! Fixed formula tables for scales, chords and modes.
//!
//! Declaration order matters: reverse lookup walks these tables in order,
//! so results come back in the order the formulas are listed here.

use crate::error::{Result, TheoryError};
use crate::types::interval::Interval::{self, *};

/// A named scale formula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleFormula {
    pub key: &'static str,
    pub name: &'static str,
    pub intervals: &'static [Interval],
}

/// A named chord formula with its symbol suffix (`"m7"`, `"dim"`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordFormula {
    pub key: &'static str,
    pub name: &'static str,
    pub suffix: &'static str,
    pub intervals: &'static [Interval],
}

/// One of the seven modes of the major scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode {
    pub key: &'static str,
    pub name: &'static str,
    /// Degree of the parent major scale the mode starts on (1-7)
    pub degree: usize,
    /// Scale formula used to build the mode from its own root
    pub scale_key: &'static str,
}

pub const SCALES: &[ScaleFormula] = &[
    ScaleFormula {
        key: "major",
        name: "Major",
        intervals: &[Root, Second, Third, Fourth, Fifth, Sixth, Seventh],
    },
    ScaleFormula {
        key: "natural_minor",
        name: "Natural Minor",
        intervals: &[
            Root,
            Second,
            FlatThird,
            Fourth,
            Fifth,
            FlatSixth,
            FlatSeventh,
        ],
    },
    ScaleFormula {
        key: "harmonic_minor",
        name: "Harmonic Minor",
        intervals: &[Root, Second, FlatThird, Fourth, Fifth, FlatSixth, Seventh],
    },
    ScaleFormula {
        key: "melodic_minor",
        name: "Melodic Minor",
        intervals: &[Root, Second, FlatThird, Fourth, Fifth, Sixth, Seventh],
    },
    ScaleFormula {
        key: "major_pentatonic",
        name: "Major Pentatonic",
        intervals: &[Root, Second, Third, Fifth, Sixth],
    },
    ScaleFormula {
        key: "minor_pentatonic",
        name: "Minor Pentatonic",
        intervals: &[Root, FlatThird, Fourth, Fifth, FlatSeventh],
    },
    ScaleFormula {
        key: "blues",
        name: "Blues",
        intervals: &[Root, FlatThird, Fourth, FlatFifth, Fifth, FlatSeventh],
    },
    ScaleFormula {
        key: "dorian",
        name: "Dorian",
        intervals: &[Root, Second, FlatThird, Fourth, Fifth, Sixth, FlatSeventh],
    },
    ScaleFormula {
        key: "phrygian",
        name: "Phrygian",
        intervals: &[
            Root,
            FlatSecond,
            FlatThird,
            Fourth,
            Fifth,
            FlatSixth,
            FlatSeventh,
        ],
    },
    ScaleFormula {
        key: "lydian",
        name: "Lydian",
        intervals: &[Root, Second, Third, SharpFourth, Fifth, Sixth, Seventh],
    },
    ScaleFormula {
        key: "mixolydian",
        name: "Mixolydian",
        intervals: &[Root, Second, Third, Fourth, Fifth, Sixth, FlatSeventh],
    },
    ScaleFormula {
        key: "locrian",
        name: "Locrian",
        intervals: &[
            Root,
            FlatSecond,
            FlatThird,
            Fourth,
            FlatFifth,
            FlatSixth,
            FlatSeventh,
        ],
    },
    ScaleFormula {
        key: "whole_tone",
        name: "Whole Tone",
        intervals: &[Root, Second, Third, SharpFourth, SharpFifth, FlatSeventh],
    },
];

pub const CHORDS: &[ChordFormula] = &[
    ChordFormula {
        key: "major",
        name: "Major",
        suffix: "",
        intervals: &[Root, Third, Fifth],
    },
    ChordFormula {
        key: "min",
        name: "Minor",
        suffix: "m",
        intervals: &[Root, FlatThird, Fifth],
    },
    ChordFormula {
        key: "dim",
        name: "Diminished",
        suffix: "dim",
        intervals: &[Root, FlatThird, FlatFifth],
    },
    ChordFormula {
        key: "aug",
        name: "Augmented",
        suffix: "aug",
        intervals: &[Root, Third, SharpFifth],
    },
    ChordFormula {
        key: "sus2",
        name: "Suspended 2nd",
        suffix: "sus2",
        intervals: &[Root, Second, Fifth],
    },
    ChordFormula {
        key: "sus4",
        name: "Suspended 4th",
        suffix: "sus4",
        intervals: &[Root, Fourth, Fifth],
    },
    ChordFormula {
        key: "maj7",
        name: "Major 7th",
        suffix: "maj7",
        intervals: &[Root, Third, Fifth, Seventh],
    },
    ChordFormula {
        key: "min7",
        name: "Minor 7th",
        suffix: "m7",
        intervals: &[Root, FlatThird, Fifth, FlatSeventh],
    },
    ChordFormula {
        key: "dom7",
        name: "Dominant 7th",
        suffix: "7",
        intervals: &[Root, Third, Fifth, FlatSeventh],
    },
    ChordFormula {
        key: "dim7",
        name: "Diminished 7th",
        suffix: "dim7",
        intervals: &[Root, FlatThird, FlatFifth, DoubleFlatSeventh],
    },
    ChordFormula {
        key: "m7b5",
        name: "Half-Diminished",
        suffix: "m7b5",
        intervals: &[Root, FlatThird, FlatFifth, FlatSeventh],
    },
    ChordFormula {
        key: "minmaj7",
        name: "Minor Major 7th",
        suffix: "m(maj7)",
        intervals: &[Root, FlatThird, Fifth, Seventh],
    },
    ChordFormula {
        key: "aug7",
        name: "Augmented 7th",
        suffix: "7#5",
        intervals: &[Root, Third, SharpFifth, FlatSeventh],
    },
    ChordFormula {
        key: "maj6",
        name: "Major 6th",
        suffix: "6",
        intervals: &[Root, Third, Fifth, Sixth],
    },
    ChordFormula {
        key: "min6",
        name: "Minor 6th",
        suffix: "m6",
        intervals: &[Root, FlatThird, Fifth, Sixth],
    },
];

pub const MODES: &[Mode] = &[
    Mode {
        key: "ionian",
        name: "Ionian",
        degree: 1,
        scale_key: "major",
    },
    Mode {
        key: "dorian",
        name: "Dorian",
        degree: 2,
        scale_key: "dorian",
    },
    Mode {
        key: "phrygian",
        name: "Phrygian",
        degree: 3,
        scale_key: "phrygian",
    },
    Mode {
        key: "lydian",
        name: "Lydian",
        degree: 4,
        scale_key: "lydian",
    },
    Mode {
        key: "mixolydian",
        name: "Mixolydian",
        degree: 5,
        scale_key: "mixolydian",
    },
    Mode {
        key: "aeolian",
        name: "Aeolian",
        degree: 6,
        scale_key: "natural_minor",
    },
    Mode {
        key: "locrian",
        name: "Locrian",
        degree: 7,
        scale_key: "locrian",
    },
];

/// Look up a scale formula by key
pub fn scale_formula(key: &str) -> Result<&'static ScaleFormula> {
    SCALES
        .iter()
        .find(|f| f.key == key)
        .ok_or_else(|| TheoryError::unknown_scale(key))
}

/// Look up a chord formula by key
pub fn chord_formula(key: &str) -> Result<&'static ChordFormula> {
    CHORDS
        .iter()
        .find(|f| f.key == key)
        .ok_or_else(|| TheoryError::unknown_chord(key))
}

/// Look up a mode by key
pub fn mode(key: &str) -> Result<&'static Mode> {
    MODES
        .iter()
        .find(|m| m.key == key)
        .ok_or_else(|| TheoryError::UnknownMode(key.to_string()))
}

pub fn chord_keys() -> impl Iterator<Item = &'static str> {
    CHORDS.iter().map(|f| f.key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula_lookup() {
        assert_eq!(scale_formula("major").unwrap().intervals.len(), 7);
        assert_eq!(chord_formula("min7").unwrap().suffix, "m7");
        assert!(matches!(
            scale_formula("bebop"),
            Err(TheoryError::UnknownFormula { .. })
        ));
        assert!(chord_formula("13sus").is_err());
        assert!(matches!(mode("ionic"), Err(TheoryError::UnknownMode(_))));
    }

    #[test]
    fn test_tables_start_on_root() {
        for f in SCALES {
            assert_eq!(f.intervals[0], Root, "{}", f.key);
        }
        for f in CHORDS {
            assert_eq!(f.intervals[0], Root, "{}", f.key);
        }
    }

    #[test]
    fn test_chord_table_size() {
        assert_eq!(CHORDS.len(), 15);
        assert_eq!(chord_keys().next(), Some("major"));
    }

    #[test]
    fn test_modes_reference_known_scales() {
        for m in MODES {
            assert!(scale_formula(m.scale_key).is_ok(), "{}", m.key);
        }
    }
}
