use crate::error::Result;
use crate::types::formula::{self, ScaleFormula, MODES};
use crate::types::interval::Interval;
use crate::types::note::{
    letter_after, letter_of, pitch_class_of, spell_for_degree_letter, PitchClass,
};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A scale formula realized against a root note
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Scale {
    pub root: String,
    pub key: &'static str,
    pub name: &'static str,
    /// Spelled note names, one per formula interval
    pub notes: Vec<String>,
    pub intervals: Vec<Interval>,
    pub interval_map: BTreeMap<PitchClass, Interval>,
    pub note_map: BTreeMap<PitchClass, String>,
}

/// Notes and lookup maps produced by spelling a formula from a root
pub(crate) struct Realized {
    pub notes: Vec<String>,
    pub interval_map: BTreeMap<PitchClass, Interval>,
    pub note_map: BTreeMap<PitchClass, String>,
}

/// Spell every interval of a formula from `root`.
///
/// Each degree gets the letter `degree - 1` steps past the root letter, so
/// the spelling follows the formula's own degree numbers rather than the
/// table spelling of each pitch class.
pub(crate) fn realize(root: &str, intervals: &[Interval]) -> Realized {
    let root_pc = pitch_class_of(root);
    let root_letter = letter_of(root).unwrap_or('C');

    let mut notes = Vec::with_capacity(intervals.len());
    let mut interval_map = BTreeMap::new();
    let mut note_map = BTreeMap::new();

    for &interval in intervals {
        let pc = (root_pc + interval.semitones()) % 12;
        let letter = letter_after(root_letter, interval.degree().saturating_sub(1) as usize);
        let name = spell_for_degree_letter(pc, letter);

        interval_map.insert(pc, interval);
        note_map.insert(pc, name.clone());
        notes.push(name);
    }

    Realized {
        notes,
        interval_map,
        note_map,
    }
}

impl Scale {
    /// Build a scale from a root note and a scale-type key (e.g. `"dorian"`)
    pub fn build(root: &str, scale_key: &str) -> Result<Self> {
        let formula = formula::scale_formula(scale_key)?;
        Ok(Self::from_formula(root, formula))
    }

    pub(crate) fn from_formula(root: &str, formula: &'static ScaleFormula) -> Self {
        let realized = realize(root, formula.intervals);

        Scale {
            root: root.to_string(),
            key: formula.key,
            name: formula.name,
            notes: realized.notes,
            intervals: formula.intervals.to_vec(),
            interval_map: realized.interval_map,
            note_map: realized.note_map,
        }
    }

    /// Get the number of notes in the scale
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Set of pitch classes in the scale
    pub fn pitch_classes(&self) -> BTreeSet<PitchClass> {
        self.interval_map.keys().copied().collect()
    }

    /// Check if the scale contains a pitch class
    pub fn contains(&self, pitch_class: PitchClass) -> bool {
        self.interval_map.contains_key(&(pitch_class % 12))
    }

    /// Interval-label map suitable for fretboard display
    pub fn labels(&self) -> BTreeMap<PitchClass, String> {
        self.interval_map
            .iter()
            .map(|(&pc, interval)| (pc, interval.label().to_string()))
            .collect()
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: [{}]",
            self.root,
            self.name,
            self.notes.join(", ")
        )
    }
}

/// Shorthand for [`Scale::build`]
pub fn build_scale(root: &str, scale_key: &str) -> Result<Scale> {
    Scale::build(root, scale_key)
}

/// Root and scale type of a related key
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RelatedScale {
    pub root: String,
    pub scale_key: &'static str,
}

/// Relative minor of a major scale, or relative major of a natural minor.
///
/// Any other scale type has no relative and yields `None`.
pub fn relative_scale(root: &str, scale_key: &str) -> Option<RelatedScale> {
    let root_pc = pitch_class_of(root);
    let root_letter = letter_of(root).unwrap_or('C');

    let (semitones, letter_steps, target_key) = match scale_key {
        "major" => (9, 5, "natural_minor"),
        "natural_minor" => (3, 2, "major"),
        _ => return None,
    };

    let pc = (root_pc + semitones) % 12;
    Some(RelatedScale {
        root: spell_for_degree_letter(pc, letter_after(root_letter, letter_steps)),
        scale_key: target_key,
    })
}

/// Root of a mode relative to its parent major scale
/// (e.g. D is the Dorian root of C major)
pub fn mode_root(parent_root: &str, mode_key: &str) -> Result<String> {
    let mode = formula::mode(mode_key)?;
    let parent = Scale::build(parent_root, "major")?;
    Ok(parent.notes[mode.degree - 1].clone())
}

/// Build a mode of `parent_root` major from its own root, using the mode's
/// predefined formula
pub fn build_mode(parent_root: &str, mode_key: &str) -> Result<Scale> {
    let mode = formula::mode(mode_key)?;
    let root = mode_root(parent_root, mode_key)?;
    Scale::build(&root, mode.scale_key)
}

/// All seven modes of a parent major scale, in degree order
pub fn modes_of(parent_root: &str) -> Result<Vec<Scale>> {
    MODES
        .iter()
        .map(|m| build_mode(parent_root, m.key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TheoryError;

    fn notes(scale: &Scale) -> Vec<&str> {
        scale.notes.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_c_major() {
        let scale = build_scale("C", "major").unwrap();
        assert_eq!(notes(&scale), vec!["C", "D", "E", "F", "G", "A", "B"]);
        let degrees: Vec<&str> = scale.intervals.iter().map(|i| i.label()).collect();
        assert_eq!(degrees, vec!["1", "2", "3", "4", "5", "6", "7"]);
    }

    #[test]
    fn test_a_natural_minor() {
        let scale = build_scale("A", "natural_minor").unwrap();
        assert_eq!(notes(&scale), vec!["A", "B", "C", "D", "E", "F", "G"]);
    }

    #[test]
    fn test_flat_key_spelling() {
        let scale = build_scale("Eb", "major").unwrap();
        assert_eq!(notes(&scale), vec!["Eb", "F", "G", "Ab", "Bb", "C", "D"]);
        assert!(!scale.notes.iter().any(|n| n.contains('#')));
    }

    #[test]
    fn test_sharp_key_spelling() {
        let scale = build_scale("F#", "major").unwrap();
        assert_eq!(notes(&scale), vec!["F#", "G#", "A#", "B", "C#", "D#", "E#"]);

        let scale = build_scale("G#", "harmonic_minor").unwrap();
        assert_eq!(notes(&scale), vec!["G#", "A#", "B", "C#", "D#", "E", "F##"]);
    }

    #[test]
    fn test_pentatonic_keeps_degree_letters() {
        let scale = build_scale("A", "minor_pentatonic").unwrap();
        assert_eq!(notes(&scale), vec!["A", "C", "D", "E", "G"]);

        let blues = build_scale("C", "blues").unwrap();
        assert_eq!(notes(&blues), vec!["C", "Eb", "F", "Gb", "G", "Bb"]);
    }

    #[test]
    fn test_maps() {
        let scale = build_scale("D", "major").unwrap();
        assert_eq!(scale.interval_map.get(&6), Some(&Interval::Third));
        assert_eq!(scale.note_map.get(&1).map(String::as_str), Some("C#"));
        assert!(scale.contains(14));
        assert!(!scale.contains(0));
        assert_eq!(scale.pitch_classes().len(), 7);
    }

    #[test]
    fn test_unknown_scale() {
        let err = build_scale("C", "hungarian").unwrap_err();
        assert_eq!(
            err,
            TheoryError::UnknownFormula {
                kind: crate::error::FormulaKind::Scale,
                key: "hungarian".to_string(),
            }
        );
    }

    #[test]
    fn test_relative_scales() {
        let rel = relative_scale("C", "major").unwrap();
        assert_eq!(rel.root, "A");
        assert_eq!(rel.scale_key, "natural_minor");

        let rel = relative_scale("Eb", "major").unwrap();
        assert_eq!(rel.root, "C");

        let rel = relative_scale("F#", "natural_minor").unwrap();
        assert_eq!(rel.root, "A");
        assert_eq!(rel.scale_key, "major");

        let rel = relative_scale("Db", "major").unwrap();
        assert_eq!(rel.root, "Bb");

        assert!(relative_scale("C", "dorian").is_none());
    }

    #[test]
    fn test_mode_roots() {
        assert_eq!(mode_root("C", "ionian").unwrap(), "C");
        assert_eq!(mode_root("C", "dorian").unwrap(), "D");
        assert_eq!(mode_root("Bb", "lydian").unwrap(), "Eb");
        assert_eq!(mode_root("G", "locrian").unwrap(), "F#");
        assert!(mode_root("C", "hypodorian").is_err());
    }

    #[test]
    fn test_modes_share_parent_notes() {
        let parent = build_scale("G", "major").unwrap().pitch_classes();
        for mode in modes_of("G").unwrap() {
            assert_eq!(mode.pitch_classes(), parent, "{}", mode);
        }
    }
}
