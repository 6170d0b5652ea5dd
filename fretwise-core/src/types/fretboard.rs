//! Mapping between pitch classes and (string, fret) positions.
//!
//! Internally strings are indexed 0-5 from the lowest-pitched open string.
//! Everything returned to callers uses the display convention instead:
//! string 1 is the highest-pitched string and string 6 the lowest.

use crate::types::interval::Interval;
use crate::types::note::PitchClass;
use std::collections::BTreeMap;

/// Number of strings on the instrument
pub const STRING_COUNT: usize = 6;

/// Default number of frets shown and searched
pub const DEFAULT_FRET_COUNT: u8 = 15;

/// Open-string pitch classes in standard tuning, low E first (E A D G B E)
pub const OPEN_STRINGS: [PitchClass; STRING_COUNT] = [4, 9, 2, 7, 11, 4];

/// MIDI note number of each open string, low E first (E2 ... E4)
pub const OPEN_STRING_MIDI: [u8; STRING_COUNT] = [40, 45, 50, 55, 59, 64];

/// A labelled note on the fretboard
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FretPosition {
    /// Display string number, 1 = highest pitch, 6 = lowest
    pub string: u8,
    pub fret: u8,
    pub pitch_class: PitchClass,
    pub label: String,
    pub is_root: bool,
}

/// Convert an internal string index (0 = low E) to its display number
pub fn display_string(string_index: usize) -> u8 {
    (STRING_COUNT - string_index) as u8
}

/// Convert a display string number (1 = high E) to the internal index
pub fn string_index(display_string: u8) -> Option<usize> {
    let display = display_string as usize;
    (1..=STRING_COUNT)
        .contains(&display)
        .then(|| STRING_COUNT - display)
}

/// Pitch class sounding at a fret on an internal string index
pub fn pitch_class_at(string_index: usize, fret: u8) -> PitchClass {
    ((OPEN_STRINGS[string_index] as u16 + fret as u16) % 12) as PitchClass
}

/// Scientific-pitch octave of a fret on an internal string index
pub fn octave_at(string_index: usize, fret: u8) -> i8 {
    let midi = OPEN_STRING_MIDI[string_index] as i16 + fret as i16;
    (midi / 12 - 1) as i8
}

/// Every fret position whose pitch class is a key of `labels`.
///
/// Scans all strings and frets `0..=fret_count`, low string first. This is
/// the single mapping behind every "show X on the fretboard" feature:
/// callers only build the pitch-class-to-label map for their scale, chord
/// or interval set.
pub fn positions_on_fretboard<L: ToString>(
    labels: &BTreeMap<PitchClass, L>,
    fret_count: u8,
    root: Option<PitchClass>,
) -> Vec<FretPosition> {
    let mut positions = Vec::new();

    for string in 0..STRING_COUNT {
        for fret in 0..=fret_count {
            let pc = pitch_class_at(string, fret);
            if let Some(label) = labels.get(&pc) {
                positions.push(FretPosition {
                    string: display_string(string),
                    fret,
                    pitch_class: pc,
                    label: label.to_string(),
                    is_root: root.is_some_and(|r| r % 12 == pc),
                });
            }
        }
    }

    positions
}

/// Interval-label map for a set of semitone distances above a root,
/// for interval drills and other synthetic displays
pub fn interval_labels(root: PitchClass, semitones: &[u8]) -> BTreeMap<PitchClass, String> {
    semitones
        .iter()
        .map(|&st| {
            let pc = ((root as u16 + st as u16) % 12) as PitchClass;
            (pc, Interval::from_semitones(st).label().to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_strings() {
        assert_eq!(pitch_class_at(0, 0), 4);
        assert_eq!(pitch_class_at(5, 0), 4);
        assert_eq!(pitch_class_at(1, 3), 0); // C on the A string
        assert_eq!(pitch_class_at(0, 12), 4);
    }

    #[test]
    fn test_octaves() {
        assert_eq!(octave_at(0, 0), 2); // E2
        assert_eq!(octave_at(1, 3), 3); // C3
        assert_eq!(octave_at(5, 0), 4); // E4
        assert_eq!(octave_at(4, 1), 4); // C4 on the B string
        assert_eq!(octave_at(0, 7), 2); // B2
        assert_eq!(octave_at(0, 8), 3); // C3
    }

    #[test]
    fn test_string_numbering() {
        assert_eq!(display_string(0), 6);
        assert_eq!(display_string(5), 1);
        assert_eq!(string_index(6), Some(0));
        assert_eq!(string_index(1), Some(5));
        assert_eq!(string_index(0), None);
        assert_eq!(string_index(7), None);
    }

    #[test]
    fn test_full_chromatic_map_covers_every_cell() {
        let labels: BTreeMap<PitchClass, String> =
            (0..12).map(|pc| (pc, pc.to_string())).collect();
        let positions = positions_on_fretboard(&labels, 15, None);
        assert_eq!(positions.len(), 6 * 16);
    }

    #[test]
    fn test_root_flagging() {
        let labels = interval_labels(9, &[0, 7]);
        let positions = positions_on_fretboard(&labels, 12, Some(9));
        assert!(positions.iter().all(|p| p.is_root == (p.pitch_class == 9)));
        // Open A string
        assert!(positions
            .iter()
            .any(|p| p.string == 5 && p.fret == 0 && p.is_root && p.label == "1"));
        // E is the fifth of A; open low E
        assert!(positions
            .iter()
            .any(|p| p.string == 6 && p.fret == 0 && p.label == "5"));
    }

    #[test]
    fn test_scan_order_starts_on_low_string() {
        let labels = interval_labels(4, &[0]);
        let positions = positions_on_fretboard(&labels, 12, Some(4));
        assert_eq!(positions[0].string, 6);
        assert_eq!(positions[0].fret, 0);
        assert_eq!(positions.last().unwrap().string, 1);
    }
}
