//! Note names, pitch classes and enharmonic spelling.
//!
//! Pitch classes are plain `u8` values in 0-11 with 0 = C. Note names are
//! strings made of one letter (A-G) followed by any number of `#` or `b`
//! accidentals, e.g. `"F##"` or `"Bbb"`.

use crate::error::{Result, TheoryError};

/// Chromatic pitch class (0-11), 0=C, 1=C#/Db, ... 11=B
pub type PitchClass = u8;

/// Sharp-preferring spelling for each pitch class
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat-preferring spelling for each pitch class
pub const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Musical alphabet in scale order, used for degree-letter walking
pub const LETTERS: [char; 7] = ['C', 'D', 'E', 'F', 'G', 'A', 'B'];

/// Keys conventionally written with flats
pub const FLAT_KEYS: [&str; 6] = ["F", "Bb", "Eb", "Ab", "Db", "Gb"];

/// Semitone of the unaltered letter, if `letter` is A-G
pub fn letter_semitone(letter: char) -> Option<PitchClass> {
    match letter {
        'C' => Some(0),
        'D' => Some(2),
        'E' => Some(4),
        'F' => Some(5),
        'G' => Some(7),
        'A' => Some(9),
        'B' => Some(11),
        _ => None,
    }
}

/// Leading letter of a note name, upper-cased
pub fn letter_of(note_name: &str) -> Option<char> {
    note_name
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| letter_semitone(*c).is_some())
}

/// Walk `steps` letters forward through the musical alphabet (wrapping)
pub fn letter_after(letter: char, steps: usize) -> char {
    let start = LETTERS.iter().position(|&l| l == letter).unwrap_or(0);
    LETTERS[(start + steps) % LETTERS.len()]
}

/// Pitch class of a note name.
///
/// Accepts any number of stacked accidentals. A name whose leading letter
/// is not A-G yields 0; use [`try_pitch_class_of`] where that should be an
/// error instead.
pub fn pitch_class_of(note_name: &str) -> PitchClass {
    if let Some(pc) = table_lookup(note_name) {
        return pc;
    }

    let mut chars = note_name.chars();
    let Some(base) = chars
        .next()
        .and_then(|c| letter_semitone(c.to_ascii_uppercase()))
    else {
        return 0;
    };

    let offset: i32 = chars
        .map(|c| match c {
            '#' => 1,
            'b' => -1,
            _ => 0,
        })
        .sum();

    (base as i32 + offset).rem_euclid(12) as PitchClass
}

/// Strict variant of [`pitch_class_of`]: the name must be a letter A-G
/// followed only by `#`/`b` characters.
pub fn try_pitch_class_of(note_name: &str) -> Result<PitchClass> {
    let trimmed = note_name.trim();
    let mut chars = trimmed.chars();
    let valid_letter = chars
        .next()
        .is_some_and(|c| letter_semitone(c.to_ascii_uppercase()).is_some());

    if !valid_letter || !chars.all(|c| c == '#' || c == 'b') {
        return Err(TheoryError::InvalidNoteName(note_name.to_string()));
    }

    Ok(pitch_class_of(trimmed))
}

fn table_lookup(note_name: &str) -> Option<PitchClass> {
    SHARP_NAMES
        .iter()
        .position(|&n| n == note_name)
        .or_else(|| FLAT_NAMES.iter().position(|&n| n == note_name))
        .map(|i| i as PitchClass)
}

/// Table spelling of a pitch class (taken mod 12)
pub fn note_name(pitch_class: PitchClass, use_flats: bool) -> &'static str {
    let pc = (pitch_class % 12) as usize;
    if use_flats {
        FLAT_NAMES[pc]
    } else {
        SHARP_NAMES[pc]
    }
}

/// Whether a root is conventionally spelled with flats
pub fn prefer_flats(root: &str) -> bool {
    FLAT_KEYS.contains(&root) || root.chars().skip(1).any(|c| c == 'b')
}

/// True for the five pitch classes whose sharp and flat spellings differ
pub fn is_enharmonically_ambiguous(pitch_class: PitchClass) -> bool {
    let pc = (pitch_class % 12) as usize;
    SHARP_NAMES[pc] != FLAT_NAMES[pc]
}

/// True if the pitch class is the tonic of one of the conventional flat keys
pub fn is_flat_key(pitch_class: PitchClass) -> bool {
    FLAT_KEYS
        .iter()
        .any(|key| pitch_class_of(key) == pitch_class % 12)
}

/// Spell `pitch_class` using the given degree letter plus accidentals.
///
/// Offsets of one or two semitones become `#`/`##` or `b`/`bb`. Anything
/// further away falls back to the plain table spelling, flat when the
/// letter sits above the target.
pub fn spell_for_degree_letter(pitch_class: PitchClass, letter: char) -> String {
    let pc = pitch_class % 12;
    let Some(natural) = letter_semitone(letter.to_ascii_uppercase()) else {
        return note_name(pc, false).to_string();
    };
    let letter = letter.to_ascii_uppercase();

    let diff = (pc as i32 - natural as i32).rem_euclid(12);
    match diff {
        0 => letter.to_string(),
        1 => format!("{letter}#"),
        2 => format!("{letter}##"),
        11 => format!("{letter}b"),
        10 => format!("{letter}bb"),
        _ => note_name(pc, diff > 6).to_string(),
    }
}

/// Numeral part of an interval label (`"b3"` -> 3, `"#11"` -> 11)
pub fn degree_number(interval_label: &str) -> Option<u8> {
    let digits: String = interval_label
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_parsing() {
        assert_eq!(pitch_class_of("C"), 0);
        assert_eq!(pitch_class_of("C#"), 1);
        assert_eq!(pitch_class_of("Db"), 1);
        assert_eq!(pitch_class_of("Bb"), 10);
        assert_eq!(pitch_class_of("B"), 11);
    }

    #[test]
    fn test_stacked_accidentals() {
        assert_eq!(pitch_class_of("F##"), 7);
        assert_eq!(pitch_class_of("Bbb"), 9);
        assert_eq!(pitch_class_of("Cb"), 11);
        assert_eq!(pitch_class_of("B#"), 0);
        assert_eq!(pitch_class_of("E#"), 5);
        assert_eq!(pitch_class_of("Cbbb"), 9);
    }

    #[test]
    fn test_malformed_name_falls_back_to_zero() {
        assert_eq!(pitch_class_of("H"), 0);
        assert_eq!(pitch_class_of(""), 0);
        assert_eq!(pitch_class_of("#"), 0);
    }

    #[test]
    fn test_strict_parsing() {
        assert_eq!(try_pitch_class_of("F##").unwrap(), 7);
        assert_eq!(try_pitch_class_of(" Eb ").unwrap(), 3);
        assert!(matches!(
            try_pitch_class_of("H"),
            Err(TheoryError::InvalidNoteName(_))
        ));
        assert!(try_pitch_class_of("C4").is_err());
        assert!(try_pitch_class_of("").is_err());
    }

    #[test]
    fn test_note_name_tables() {
        assert_eq!(note_name(1, false), "C#");
        assert_eq!(note_name(1, true), "Db");
        assert_eq!(note_name(13, true), "Db");
        assert_eq!(note_name(4, true), "E");
    }

    #[test]
    fn test_naturals_agree_across_tables() {
        let naturals = (0..12).filter(|&pc| !is_enharmonically_ambiguous(pc));
        assert_eq!(naturals.count(), 7);
        for pc in [1, 3, 6, 8, 10] {
            assert!(is_enharmonically_ambiguous(pc));
        }
    }

    #[test]
    fn test_prefer_flats() {
        for key in FLAT_KEYS {
            assert!(prefer_flats(key), "{key} should prefer flats");
        }
        assert!(prefer_flats("Cb"));
        assert!(!prefer_flats("B"));
        assert!(!prefer_flats("G"));
        assert!(!prefer_flats("F#"));
    }

    #[test]
    fn test_flat_key_pitch_classes() {
        let flat: Vec<PitchClass> = (0..12).filter(|&pc| is_flat_key(pc)).collect();
        assert_eq!(flat, vec![1, 3, 5, 6, 8, 10]);
    }

    #[test]
    fn test_spell_for_degree_letter() {
        assert_eq!(spell_for_degree_letter(8, 'A'), "Ab");
        assert_eq!(spell_for_degree_letter(8, 'G'), "G#");
        assert_eq!(spell_for_degree_letter(7, 'F'), "F##");
        assert_eq!(spell_for_degree_letter(9, 'B'), "Bbb");
        assert_eq!(spell_for_degree_letter(5, 'E'), "E#");
        assert_eq!(spell_for_degree_letter(0, 'C'), "C");
        // Too far from the letter: plain table spelling
        assert_eq!(spell_for_degree_letter(6, 'C'), "F#");
        assert_eq!(spell_for_degree_letter(10, 'D'), "Bb");
    }

    #[test]
    fn test_spelling_round_trip() {
        for pc in 0..12 {
            for letter in LETTERS {
                let spelled = spell_for_degree_letter(pc, letter);
                assert_eq!(pitch_class_of(&spelled), pc, "{spelled} for pc {pc}");
            }
        }
    }

    #[test]
    fn test_degree_number() {
        assert_eq!(degree_number("1"), Some(1));
        assert_eq!(degree_number("b3"), Some(3));
        assert_eq!(degree_number("bb7"), Some(7));
        assert_eq!(degree_number("#11"), Some(11));
        assert_eq!(degree_number("b"), None);
    }

    #[test]
    fn test_letter_walk() {
        assert_eq!(letter_after('C', 2), 'E');
        assert_eq!(letter_after('A', 2), 'C');
        assert_eq!(letter_after('B', 8), 'C');
        assert_eq!(letter_of("eb"), Some('E'));
        assert_eq!(letter_of("X"), None);
    }
}
