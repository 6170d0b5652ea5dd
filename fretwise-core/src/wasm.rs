//! WASM bindings for fretwise-core
//!
//! Every export returns a plain JS object. Fallible calls wrap their value
//! in `{ success, value, error }` so the page never sees a thrown exception.

use crate::error::TheoryError;
use crate::training::selection::{build_weighted_queue, Drillable};
use crate::training::stats::{ModeStats, StatsData};
use crate::types::{self as theory, CagedShape, Chord, Scale};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::collections::BTreeSet;
use wasm_bindgen::prelude::*;

/// Serialize maps as plain objects rather than JS `Map`s
fn to_js<T: Serialize>(value: &T) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

#[derive(Serialize)]
struct TheoryResult<T: Serialize> {
    success: bool,
    value: Option<T>,
    error: Option<String>,
}

fn result_to_js<T: Serialize>(result: Result<T, TheoryError>) -> JsValue {
    match result {
        Ok(value) => to_js(&TheoryResult {
            success: true,
            value: Some(value),
            error: None,
        }),
        Err(e) => to_js(&TheoryResult::<T> {
            success: false,
            value: None,
            error: Some(e.to_string()),
        }),
    }
}

fn pitch_class_set(pitch_classes: &[u8]) -> BTreeSet<u8> {
    pitch_classes.iter().map(|pc| pc % 12).collect()
}

#[wasm_bindgen]
pub fn build_scale(root: &str, scale_key: &str) -> JsValue {
    result_to_js(Scale::build(root, scale_key))
}

#[wasm_bindgen]
pub fn build_chord(root: &str, chord_key: &str) -> JsValue {
    result_to_js(Chord::build(root, chord_key))
}

#[wasm_bindgen]
pub fn scale_chords(root: &str, scale_key: &str, use_sevenths: bool) -> JsValue {
    result_to_js(theory::build_scale_chords(root, scale_key, use_sevenths))
}

#[wasm_bindgen]
pub fn caged_positions(root: &str, shape: &str, chord_key: &str, max_fret: u8) -> JsValue {
    let positions = shape
        .parse::<CagedShape>()
        .and_then(|shape| theory::caged_positions_with_max_fret(root, shape, chord_key, max_fret));
    result_to_js(positions)
}

#[wasm_bindgen]
pub fn positions_for_scale(root: &str, scale_key: &str, fret_count: u8) -> JsValue {
    let positions = Scale::build(root, scale_key).map(|scale| {
        theory::positions_on_fretboard(
            &scale.labels(),
            fret_count,
            Some(theory::pitch_class_of(root)),
        )
    });
    result_to_js(positions)
}

#[wasm_bindgen]
pub fn positions_for_chord(root: &str, chord_key: &str, fret_count: u8) -> JsValue {
    let positions = Chord::build(root, chord_key).map(|chord| {
        theory::positions_on_fretboard(
            &chord.labels(),
            fret_count,
            Some(theory::pitch_class_of(root)),
        )
    });
    result_to_js(positions)
}

#[wasm_bindgen]
pub fn find_chords(pitch_classes: &[u8]) -> JsValue {
    to_js(&theory::find_chords_containing(&pitch_class_set(pitch_classes)))
}

#[wasm_bindgen]
pub fn find_scales(pitch_classes: &[u8]) -> JsValue {
    to_js(&theory::find_scales_containing(&pitch_class_set(pitch_classes)))
}

/// A drill item as the page describes it
#[derive(Debug, Clone, PartialEq, serde::Deserialize, Serialize)]
pub struct QueueItemJS {
    pub row: String,
    pub column: String,
}

impl Drillable for QueueItemJS {
    fn row_key(&self) -> &str {
        &self.row
    }
}

/// Weighted ordering of `items` for `mode`.
///
/// `stats` is the full persisted stats object; `last_drawn` may be null.
/// Returns null if the arguments do not deserialize.
#[wasm_bindgen]
pub fn weighted_queue(
    items: JsValue,
    stats: JsValue,
    mode: &str,
    last_drawn: JsValue,
    seed: u32,
) -> JsValue {
    let Ok(items) = serde_wasm_bindgen::from_value::<Vec<QueueItemJS>>(items) else {
        return JsValue::NULL;
    };
    let stats: StatsData = serde_wasm_bindgen::from_value(stats).unwrap_or_default();
    let last_drawn: Option<QueueItemJS> =
        serde_wasm_bindgen::from_value(last_drawn).unwrap_or(None);

    let empty = ModeStats::new();
    let mode_stats = stats.mode(mode).unwrap_or(&empty);
    let mut rng = StdRng::seed_from_u64(seed as u64);

    let queue = build_weighted_queue(
        &items,
        mode_stats,
        |item| item.column.clone(),
        last_drawn.as_ref(),
        |a, b| a == b,
        &mut rng,
    );
    to_js(&queue)
}
