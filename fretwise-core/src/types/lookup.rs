//! Reverse lookup: which chords or scales contain a set of notes.
//!
//! Brute force over 12 roots and every formula. A formula matches when the
//! input set is a subset of its pitch classes, so chords with tones the user
//! has not placed yet still show up. Results come back roots 0-11 first,
//! then formulas in table order; there is no relevance ranking.

use crate::types::chord::Chord;
use crate::types::formula::{CHORDS, SCALES};
use crate::types::interval::Interval;
use crate::types::note::{is_flat_key, note_name, PitchClass};
use crate::types::scale::Scale;
use std::collections::BTreeSet;

/// Fewer notes than this match far too much to be useful
const MIN_NOTES: usize = 2;

fn formula_pitch_classes(root: PitchClass, intervals: &[Interval]) -> BTreeSet<PitchClass> {
    intervals
        .iter()
        .map(|i| (root + i.semitones()) % 12)
        .collect()
}

fn normalize(pitch_classes: &BTreeSet<PitchClass>) -> BTreeSet<PitchClass> {
    pitch_classes.iter().map(|pc| pc % 12).collect()
}

/// Root spelling for lookup results: flats for the flat-key tonics
fn root_name(root: PitchClass) -> &'static str {
    note_name(root, is_flat_key(root))
}

/// Every chord whose pitch classes include all of `pitch_classes`
pub fn find_chords_containing(pitch_classes: &BTreeSet<PitchClass>) -> Vec<Chord> {
    let wanted = normalize(pitch_classes);
    if wanted.len() < MIN_NOTES {
        return Vec::new();
    }

    let mut results = Vec::new();
    for root in 0..12u8 {
        for formula in CHORDS {
            if wanted.is_subset(&formula_pitch_classes(root, formula.intervals)) {
                results.push(Chord::from_formula(root_name(root), formula));
            }
        }
    }

    log::debug!("{} chords contain {:?}", results.len(), wanted);
    results
}

/// Every scale whose pitch classes include all of `pitch_classes`
pub fn find_scales_containing(pitch_classes: &BTreeSet<PitchClass>) -> Vec<Scale> {
    let wanted = normalize(pitch_classes);
    if wanted.len() < MIN_NOTES {
        return Vec::new();
    }

    let mut results = Vec::new();
    for root in 0..12u8 {
        for formula in SCALES {
            if wanted.is_subset(&formula_pitch_classes(root, formula.intervals)) {
                results.push(Scale::from_formula(root_name(root), formula));
            }
        }
    }

    log::debug!("{} scales contain {:?}", results.len(), wanted);
    results
}

/// Chords that contain exactly the given notes and nothing else
pub fn identify_chords(pitch_classes: &BTreeSet<PitchClass>) -> Vec<Chord> {
    let wanted = normalize(pitch_classes);
    find_chords_containing(&wanted)
        .into_iter()
        .filter(|c| c.pitch_classes() == wanted)
        .collect()
}
