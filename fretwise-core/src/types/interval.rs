use crate::error::TheoryError;
use crate::types::note::degree_number;
use std::fmt;
use std::str::FromStr;

/// Interval above a root, named by its scale-degree label
///
/// Several labels share a semitone distance (`#4`/`b5`, `#5`/`b6`,
/// `6`/`bb7`); they stay distinct because the label decides which letter
/// the note is spelled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Interval {
    Root,
    FlatSecond,
    Second,
    FlatThird,
    Third,
    Fourth,
    SharpFourth,
    FlatFifth,
    Fifth,
    SharpFifth,
    FlatSixth,
    Sixth,
    DoubleFlatSeventh,
    FlatSeventh,
    Seventh,
}

impl Interval {
    pub const ALL: [Interval; 15] = [
        Interval::Root,
        Interval::FlatSecond,
        Interval::Second,
        Interval::FlatThird,
        Interval::Third,
        Interval::Fourth,
        Interval::SharpFourth,
        Interval::FlatFifth,
        Interval::Fifth,
        Interval::SharpFifth,
        Interval::FlatSixth,
        Interval::Sixth,
        Interval::DoubleFlatSeventh,
        Interval::FlatSeventh,
        Interval::Seventh,
    ];

    /// Scale-degree label, e.g. `"b3"`
    pub fn label(self) -> &'static str {
        match self {
            Interval::Root => "1",
            Interval::FlatSecond => "b2",
            Interval::Second => "2",
            Interval::FlatThird => "b3",
            Interval::Third => "3",
            Interval::Fourth => "4",
            Interval::SharpFourth => "#4",
            Interval::FlatFifth => "b5",
            Interval::Fifth => "5",
            Interval::SharpFifth => "#5",
            Interval::FlatSixth => "b6",
            Interval::Sixth => "6",
            Interval::DoubleFlatSeventh => "bb7",
            Interval::FlatSeventh => "b7",
            Interval::Seventh => "7",
        }
    }

    /// Distance from the root in semitones (0-11)
    pub fn semitones(self) -> u8 {
        match self {
            Interval::Root => 0,
            Interval::FlatSecond => 1,
            Interval::Second => 2,
            Interval::FlatThird => 3,
            Interval::Third => 4,
            Interval::Fourth => 5,
            Interval::SharpFourth | Interval::FlatFifth => 6,
            Interval::Fifth => 7,
            Interval::SharpFifth | Interval::FlatSixth => 8,
            Interval::Sixth | Interval::DoubleFlatSeventh => 9,
            Interval::FlatSeventh => 10,
            Interval::Seventh => 11,
        }
    }

    /// Scale-degree number with accidentals stripped (`b3` -> 3)
    pub fn degree(self) -> u8 {
        degree_number(self.label()).unwrap_or(1)
    }

    /// Full interval name for display
    pub fn name(self) -> &'static str {
        match self {
            Interval::Root => "unison",
            Interval::FlatSecond => "minor 2nd",
            Interval::Second => "major 2nd",
            Interval::FlatThird => "minor 3rd",
            Interval::Third => "major 3rd",
            Interval::Fourth => "perfect 4th",
            Interval::SharpFourth => "augmented 4th",
            Interval::FlatFifth => "diminished 5th",
            Interval::Fifth => "perfect 5th",
            Interval::SharpFifth => "augmented 5th",
            Interval::FlatSixth => "minor 6th",
            Interval::Sixth => "major 6th",
            Interval::DoubleFlatSeventh => "diminished 7th",
            Interval::FlatSeventh => "minor 7th",
            Interval::Seventh => "major 7th",
        }
    }

    /// Conventional label for a bare semitone distance, preferring flats
    /// except for the tritone, which reads as `b5`
    pub fn from_semitones(semitones: u8) -> Interval {
        match semitones % 12 {
            0 => Interval::Root,
            1 => Interval::FlatSecond,
            2 => Interval::Second,
            3 => Interval::FlatThird,
            4 => Interval::Third,
            5 => Interval::Fourth,
            6 => Interval::FlatFifth,
            7 => Interval::Fifth,
            8 => Interval::FlatSixth,
            9 => Interval::Sixth,
            10 => Interval::FlatSeventh,
            _ => Interval::Seventh,
        }
    }
}

impl FromStr for Interval {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::ALL
            .iter()
            .copied()
            .find(|i| i.label() == s.trim())
            .ok_or_else(|| TheoryError::UnknownInterval(s.to_string()))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Interval {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
