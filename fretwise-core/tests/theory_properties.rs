use fretwise_core::types::caged::{caged_positions, CagedShape};
use fretwise_core::types::formula::{chord_keys, CHORDS};
use fretwise_core::types::note::{pitch_class_of, prefer_flats, spell_for_degree_letter, LETTERS};
use fretwise_core::types::{
    build_chord, build_scale, find_chords_containing, positions_on_fretboard, PitchClass,
};
use std::collections::{BTreeMap, BTreeSet};

#[test]
fn test_degree_spelling_round_trips() {
    for pc in 0..12u8 {
        for &letter in LETTERS.iter() {
            let name = spell_for_degree_letter(pc, letter);
            assert_eq!(pitch_class_of(&name), pc, "{name} spelled for {letter}");
        }
    }
}

#[test]
fn test_scale_order_and_degrees() {
    let c = build_scale("C", "major").unwrap();
    assert_eq!(c.notes, ["C", "D", "E", "F", "G", "A", "B"]);
    let degrees: Vec<u8> = c.intervals.iter().map(|i| i.degree()).collect();
    assert_eq!(degrees, [1, 2, 3, 4, 5, 6, 7]);

    let a = build_scale("A", "natural_minor").unwrap();
    assert_eq!(a.notes, ["A", "B", "C", "D", "E", "F", "G"]);
}

#[test]
fn test_chord_symbol() {
    assert_eq!(build_chord("F#", "min7").unwrap().symbol, "F#m7");
    assert_eq!(build_chord("Bb", "dom7").unwrap().symbol, "Bb7");
    assert_eq!(build_chord("E", "major").unwrap().symbol, "E");
}

#[test]
fn test_flat_roots_spell_with_flats() {
    assert!(prefer_flats("Eb"));
    let eb = build_scale("Eb", "major").unwrap();
    assert!(eb.notes.iter().any(|n| n == "Ab"));
    assert!(eb.notes.iter().all(|n| !n.contains('#')));
}

#[test]
fn test_full_chromatic_map_covers_every_cell() {
    let labels: BTreeMap<PitchClass, String> = (0..12u8).map(|pc| (pc, pc.to_string())).collect();
    let positions = positions_on_fretboard(&labels, 15, None);
    assert_eq!(positions.len(), 6 * 16);
}

#[test]
fn test_caged_voicings_are_playable() {
    for shape in CagedShape::ALL {
        for root in 0..12u8 {
            let root_name = fretwise_core::types::note_name(root, false);
            for key in chord_keys() {
                let positions = caged_positions(root_name, shape, key).unwrap();

                let strings: BTreeSet<u8> = positions.iter().map(|p| p.string).collect();
                assert_eq!(strings.len(), positions.len(), "{root_name} {key} {shape}");

                let fretted: Vec<u8> = positions
                    .iter()
                    .map(|p| p.fret)
                    .filter(|&f| f > 0)
                    .collect();
                if let (Some(min), Some(max)) = (fretted.iter().min(), fretted.iter().max()) {
                    assert!(max - min <= 3, "{root_name} {key} {shape}: {fretted:?}");
                }
            }
        }
    }
}

#[test]
fn test_subset_search() {
    let wanted: BTreeSet<PitchClass> = [0, 4, 7].into_iter().collect();
    let chords = find_chords_containing(&wanted);
    assert!(chords.iter().any(|c| c.symbol == "C" && c.key == "major"));
    for chord in &chords {
        assert!(wanted.is_subset(&chord.pitch_classes()));
    }
    assert!(chords.len() < 12 * CHORDS.len());

    let single: BTreeSet<PitchClass> = [0].into_iter().collect();
    assert!(find_chords_containing(&single).is_empty());
}
