//! # Meal Analysis Pipeline
//!
//! This module wires the normalizer, curve synthesizer, aggregate
//! summarizer, and scale planner into the one-way flow the rendering layer
//! consumes: raw ingredient records in, drawable curve geometry plus axis
//! metadata and display strings out.
//!
//! The pipeline is a pure function of its input: no ambient state, no
//! caching, and repeated calls on the same records produce identical output.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::chart_scale::{plan_scale, ChartScale, PALETTE};
use crate::curve_model::{synthesize_curve, AbsorptionCurve};
use crate::ingredient_model::IngredientRecord;
use crate::meal_summary::{aggregate_peak_minutes, AggregateTotals};
use crate::normalizer::normalize_ingredients;

/// One drawable ingredient curve with its display attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientCurve {
    /// Ingredient name, for the chart legend
    pub name: String,
    /// Glycemic index carried through for legend annotations
    pub glycemic_index: f64,
    /// Palette slot assigned by the normalizer
    pub color_index: usize,
    /// Hex color drawn from the fixed palette
    pub color: String,
    /// The sampled absorption curve
    pub curve: AbsorptionCurve,
}

/// Full analysis result for one ingredient list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealAnalysis {
    /// One curve per carbohydrate-contributing ingredient, in input order
    pub curves: Vec<IngredientCurve>,
    /// Shared axis plan; `None` when there is nothing to draw
    pub scale: Option<ChartScale>,
    /// Weight/volume/carbohydrate totals over all records
    pub totals: AggregateTotals,
    /// Aggregate blood-glucose peak time in minutes
    pub peak_minutes: u32,
}

/// Run the full analysis over an ordered ingredient list
///
/// `supplied_peak` is the upstream service's pre-aggregated peak time when it
/// provides one; otherwise the carbohydrate-weighted average of the
/// per-ingredient peak times is used.
///
/// An empty list yields no curves, no scale, and zero totals.
pub fn analyze_meal(records: &[IngredientRecord], supplied_peak: Option<u32>) -> MealAnalysis {
    let normalized = normalize_ingredients(records);
    let scale = plan_scale(&normalized);

    let curves = match &scale {
        Some(scale) => normalized
            .iter()
            .filter_map(|ingredient| {
                synthesize_curve(ingredient, scale.domain.time_range_minutes).map(|curve| {
                    IngredientCurve {
                        name: ingredient.name.clone(),
                        glycemic_index: ingredient.glycemic_index,
                        color_index: ingredient.color_index,
                        color: PALETTE[ingredient.color_index].to_string(),
                        curve,
                    }
                })
            })
            .collect(),
        None => Vec::new(),
    };

    debug!(
        "Analyzed {} records into {} curves",
        records.len(),
        curves.len()
    );

    MealAnalysis {
        curves,
        scale,
        totals: AggregateTotals::summarize(records),
        peak_minutes: aggregate_peak_minutes(&normalized, supplied_peak),
    }
}
