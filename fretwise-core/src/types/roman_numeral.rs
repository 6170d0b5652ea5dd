//! Diatonic chords of a scale, labelled with Roman numerals.
//!
//! Only major and natural minor have their own quality tables. Every other
//! scale type is harmonized with the major table, which is an
//! approximation rather than a general diatonic-harmony solver.

use crate::error::Result;
use crate::types::chord::Chord;
use crate::types::scale::Scale;

/// A chord built on one degree of a scale
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DiatonicChord {
    /// Scale degree (1-7)
    pub degree: usize,
    /// Roman numeral label, e.g. `"ii"` or `"viiø7"`
    pub numeral: &'static str,
    pub chord: Chord,
}

struct HarmonyTable {
    triads: [&'static str; 7],
    triad_numerals: [&'static str; 7],
    sevenths: [&'static str; 7],
    seventh_numerals: [&'static str; 7],
}

const MAJOR_HARMONY: HarmonyTable = HarmonyTable {
    triads: ["major", "min", "min", "major", "major", "min", "dim"],
    triad_numerals: ["I", "ii", "iii", "IV", "V", "vi", "vii°"],
    sevenths: ["maj7", "min7", "min7", "maj7", "dom7", "min7", "m7b5"],
    seventh_numerals: ["Imaj7", "ii7", "iii7", "IVmaj7", "V7", "vi7", "viiø7"],
};

const MINOR_HARMONY: HarmonyTable = HarmonyTable {
    triads: ["min", "dim", "major", "min", "min", "major", "major"],
    triad_numerals: ["i", "ii°", "III", "iv", "v", "VI", "VII"],
    sevenths: ["min7", "m7b5", "maj7", "min7", "min7", "maj7", "dom7"],
    seventh_numerals: ["i7", "iiø7", "IIImaj7", "iv7", "v7", "VImaj7", "VII7"],
};

fn harmony_for(scale_key: &str) -> &'static HarmonyTable {
    match scale_key {
        "natural_minor" => &MINOR_HARMONY,
        _ => &MAJOR_HARMONY,
    }
}

/// Build the diatonic chords on the first seven degrees of a scale.
///
/// Fails only when `scale_key` is not a known scale. Scales with fewer than
/// seven notes get one chord per note.
pub fn build_scale_chords(
    root: &str,
    scale_key: &str,
    use_sevenths: bool,
) -> Result<Vec<DiatonicChord>> {
    let scale = Scale::build(root, scale_key)?;
    let table = harmony_for(scale.key);
    let (qualities, numerals) = if use_sevenths {
        (&table.sevenths, &table.seventh_numerals)
    } else {
        (&table.triads, &table.triad_numerals)
    };

    if !matches!(scale.key, "major" | "natural_minor") {
        log::debug!(
            "No diatonic table for {}, harmonizing with major qualities",
            scale.key
        );
    }

    scale
        .notes
        .iter()
        .take(7)
        .enumerate()
        .map(|(i, note)| {
            Ok(DiatonicChord {
                degree: i + 1,
                numeral: numerals[i],
                chord: Chord::build(note, qualities[i])?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(chords: &[DiatonicChord]) -> Vec<&str> {
        chords.iter().map(|c| c.chord.symbol.as_str()).collect()
    }

    #[test]
    fn test_c_major_triads() {
        let chords = build_scale_chords("C", "major", false).unwrap();
        assert_eq!(
            symbols(&chords),
            vec!["C", "Dm", "Em", "F", "G", "Am", "Bdim"]
        );
        assert_eq!(chords[6].numeral, "vii°");
        assert_eq!(chords[4].degree, 5);
    }

    #[test]
    fn test_c_major_sevenths() {
        let chords = build_scale_chords("C", "major", true).unwrap();
        assert_eq!(
            symbols(&chords),
            vec!["Cmaj7", "Dm7", "Em7", "Fmaj7", "G7", "Am7", "Bm7b5"]
        );
        assert_eq!(chords[4].numeral, "V7");
    }

    #[test]
    fn test_minor_triads() {
        let chords = build_scale_chords("A", "natural_minor", false).unwrap();
        assert_eq!(
            symbols(&chords),
            vec!["Am", "Bdim", "C", "Dm", "Em", "F", "G"]
        );
        assert_eq!(chords[0].numeral, "i");
        assert_eq!(chords[2].numeral, "III");
    }

    #[test]
    fn test_flat_key_chord_roots() {
        let chords = build_scale_chords("Bb", "major", false).unwrap();
        assert_eq!(
            symbols(&chords),
            vec!["Bb", "Cm", "Dm", "Eb", "F", "Gm", "Adim"]
        );
    }

    #[test]
    fn test_other_scales_use_major_table() {
        let chords = build_scale_chords("D", "dorian", false).unwrap();
        assert_eq!(chords[0].numeral, "I");
        assert_eq!(chords[0].chord.symbol, "D");

        let penta = build_scale_chords("C", "major_pentatonic", false).unwrap();
        assert_eq!(penta.len(), 5);
    }

    #[test]
    fn test_unknown_scale_fails() {
        assert!(build_scale_chords("C", "enigmatic", false).is_err());
    }
}
