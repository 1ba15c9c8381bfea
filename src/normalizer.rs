//! # Ingredient Normalizer
//!
//! This module turns raw ingredient records into the normalized form the
//! curve synthesizer and axis planner consume.
//!
//! ## Features
//!
//! - Peak-time labels parsed into minutes (with the 60-minute fallback)
//! - Carbohydrate amount derived as the midpoint of the low/high estimate
//! - Zero-carbohydrate ingredients dropped (they have no absorption curve)
//! - Display-color indices assigned from the *pre-filter* list position, so
//!   dropping a zero-carb ingredient never shifts the colors of later ones

use log::debug;

use crate::chart_scale::PALETTE_SIZE;
use crate::ingredient_model::{IngredientRecord, NormalizedIngredient};
use crate::peak_time::parse_peak_time;

/// Normalize an ordered list of ingredient records
///
/// Relative order is preserved. Ingredients with a zero carbohydrate range
/// (`carb_low + carb_high == 0`) are excluded; they still count toward
/// weight/volume aggregates, which read the raw records directly.
pub fn normalize_ingredients(records: &[IngredientRecord]) -> Vec<NormalizedIngredient> {
    let normalized: Vec<NormalizedIngredient> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.has_carbs())
        .map(|(index, record)| NormalizedIngredient {
            name: record.name.clone(),
            peak_minutes: parse_peak_time(&record.peak_time_label),
            carb_amount: record.carb_midpoint(),
            glycemic_index: record.glycemic_index,
            color_index: index % PALETTE_SIZE,
        })
        .collect();

    debug!(
        "Normalized {} of {} ingredient records",
        normalized.len(),
        records.len()
    );

    normalized
}
