//! # Fretwise Core
//!
//! WASM-compatible music-theory core for the Fretwise fretboard trainer.
//! Builds scales and chords from formula tables, maps them onto a
//! standard-tuned guitar, voices CAGED shapes, and orders practice
//! questions by past performance. No I/O happens here; persistence and
//! presentation belong to the front ends.
//!
//! ## Features
//!
//! - **serde**: Enable JSON serialization (stats persistence, web interop)
//! - **wasm**: Enable WASM bindings via wasm-bindgen
//!
//! ## Example
//!
//! ```
//! use fretwise_core::types::{build_scale, caged_shape};
//!
//! let scale = build_scale("A", "minor_pentatonic")?;
//! assert_eq!(scale.notes, ["A", "C", "D", "E", "G"]);
//!
//! let voicing = caged_shape("C", "A", "major")?;
//! assert!(voicing.iter().all(|p| p.fret >= 3));
//! # Ok::<(), fretwise_core::TheoryError>(())
//! ```

pub mod error;
pub mod training;
pub mod types;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Result, TheoryError};

// Re-export commonly used types
pub use training::{StatsData, StatsEntry, TrainingSession};
pub use types::{CagedShape, Chord, FretPosition, Interval, Scale};
