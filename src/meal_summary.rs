//! # Meal Aggregate Summarizer
//!
//! This module computes meal-level totals over the raw ingredient records:
//! solid weight, liquid volume, the summed carbohydrate range, and the
//! aggregate blood-glucose peak time, plus their short display strings.
//!
//! Unlike curve synthesis, the aggregates include zero-carbohydrate
//! ingredients: oil and water still weigh something.

use serde::{Deserialize, Serialize};

use crate::ingredient_model::{IngredientRecord, NormalizedIngredient};

/// Meal-level totals summed over all ingredient records
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregateTotals {
    /// Sum of solid amounts in grams
    pub total_weight_grams: f64,
    /// Sum of liquid amounts in millilitres
    pub total_volume_ml: f64,
    /// Sum of lower carbohydrate estimates in grams
    pub total_carb_low: f64,
    /// Sum of upper carbohydrate estimates in grams
    pub total_carb_high: f64,
}

impl AggregateTotals {
    /// Sum totals over an ordered list of ingredient records
    pub fn summarize(records: &[IngredientRecord]) -> Self {
        let mut totals = Self::default();
        for record in records {
            if record.is_liquid {
                totals.total_volume_ml += record.amount;
            } else {
                totals.total_weight_grams += record.amount;
            }
            totals.total_carb_low += record.carb_low;
            totals.total_carb_high += record.carb_high;
        }
        totals
    }

    /// Short amount string: "200g", "250ml", or "200g + 250ml" when the meal
    /// mixes solids and liquids
    pub fn amount_summary(&self) -> String {
        match (
            self.total_weight_grams != 0.0,
            self.total_volume_ml != 0.0,
        ) {
            (true, true) => format!(
                "{}g + {}ml",
                format_number(self.total_weight_grams),
                format_number(self.total_volume_ml)
            ),
            (false, true) => format!("{}ml", format_number(self.total_volume_ml)),
            _ => format!("{}g", format_number(self.total_weight_grams)),
        }
    }

    /// Short carbohydrate string; the range collapses to a single value when
    /// the low and high totals agree
    pub fn carb_summary(&self) -> String {
        if self.total_carb_low == self.total_carb_high {
            format!("{}g", format_number(self.total_carb_low))
        } else {
            format!(
                "{}-{}g",
                format_number(self.total_carb_low),
                format_number(self.total_carb_high)
            )
        }
    }
}

/// Aggregate blood-glucose peak time for a meal, in whole minutes
///
/// Two interchangeable strategies behind one call: an externally supplied
/// value wins when present; otherwise the peak is the carbohydrate-weighted
/// average of the per-ingredient peak times, rounded to the nearest minute.
/// A meal with no carbohydrate peaks at 0.
pub fn aggregate_peak_minutes(
    ingredients: &[NormalizedIngredient],
    supplied: Option<u32>,
) -> u32 {
    if let Some(minutes) = supplied {
        return minutes;
    }
    weighted_peak_minutes(ingredients)
}

/// Carbohydrate-weighted average of per-ingredient peak times
pub fn weighted_peak_minutes(ingredients: &[NormalizedIngredient]) -> u32 {
    let total_carbs: f64 = ingredients.iter().map(|i| i.carb_amount).sum();
    if total_carbs == 0.0 {
        return 0;
    }
    let weighted: f64 = ingredients
        .iter()
        .map(|i| i.peak_minutes * i.carb_amount)
        .sum();
    (weighted / total_carbs).round() as u32
}

/// Trim the trailing ".0" from whole numbers for display
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
