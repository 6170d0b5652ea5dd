// fretwise-core/src/types/mod.rs

pub mod caged;
pub mod chord;
pub mod formula;
pub mod fretboard;
pub mod interval;
pub mod lookup;
pub mod note;
pub mod roman_numeral;
pub mod scale;

pub use caged::{caged_positions, caged_positions_with_max_fret, caged_shape, CagedShape};
pub use chord::{build_chord, Chord};
pub use formula::{ChordFormula, Mode, ScaleFormula, CHORDS, MODES, SCALES};
pub use fretboard::{octave_at, pitch_class_at, positions_on_fretboard, FretPosition};
pub use interval::Interval;
pub use lookup::{find_chords_containing, find_scales_containing, identify_chords};
pub use note::{
    degree_number, is_enharmonically_ambiguous, note_name, pitch_class_of, prefer_flats,
    spell_for_degree_letter, try_pitch_class_of, PitchClass,
};
pub use roman_numeral::{build_scale_chords, DiatonicChord};
pub use scale::{build_mode, build_scale, mode_root, relative_scale, RelatedScale, Scale};
