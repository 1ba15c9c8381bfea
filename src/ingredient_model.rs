//! # Ingredient Data Model
//!
//! This module defines data structures for representing detected food items
//! and their normalized form used by the absorption-curve pipeline.
//!
//! ## Core Concepts
//!
//! - **IngredientRecord**: A food item as delivered by the meal-analysis
//!   service, with a carbohydrate range, glycemic index, and a free-text
//!   peak-time label
//! - **NormalizedIngredient**: The derived form consumed by the curve
//!   synthesizer: a single carbohydrate amount, a parsed peak time in
//!   minutes, and a stable display-color index
//!
//! ## Usage
//!
//! ```rust
//! use carbcurve::ingredient_model::IngredientRecord;
//!
//! let potato = IngredientRecord::new("Potato")
//!     .with_amount(200.0, false)
//!     .with_carb_range(30.0, 40.0)
//!     .with_glycemic_index(70.0)
//!     .with_peak_time_label("90min");
//!
//! assert_eq!(potato.carb_midpoint(), 35.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A detected food item as reported by the upstream meal-analysis service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    /// Free-text label of the food item (e.g., "Potato", "Orange juice")
    pub name: String,

    /// Whether the amount is a volume in millilitres (true) or a mass in grams (false)
    pub is_liquid: bool,

    /// Non-negative measured quantity, in the unit implied by `is_liquid`
    pub amount: f64,

    /// Lower carbohydrate estimate in grams
    pub carb_low: f64,

    /// Upper carbohydrate estimate in grams, expected `>= carb_low`
    pub carb_high: f64,

    /// Glycemic index in [0, 100]; 0 is valid (no measurable glycemic effect)
    pub glycemic_index: f64,

    /// Free-text expected blood-glucose peak time (e.g., "90min", "1.5h")
    pub peak_time_label: String,
}

/// An ingredient prepared for curve synthesis and axis planning
///
/// Recomputed in full on every analysis run; nothing persists between
/// invocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedIngredient {
    /// Name carried over from the source record
    pub name: String,

    /// Parsed expected peak time in minutes
    pub peak_minutes: f64,

    /// Representative carbohydrate amount in grams (midpoint of the low/high estimate)
    pub carb_amount: f64,

    /// Glycemic index carried over from the source record
    pub glycemic_index: f64,

    /// Stable palette index assigned from the pre-filter list position
    pub color_index: usize,
}

impl IngredientRecord {
    /// Create a new record with just a name
    ///
    /// The remaining fields default to a zero-amount solid with no
    /// carbohydrate and an empty peak-time label (which falls back to
    /// 60 minutes during normalization).
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_liquid: false,
            amount: 0.0,
            carb_low: 0.0,
            carb_high: 0.0,
            glycemic_index: 0.0,
            peak_time_label: String::new(),
        }
    }

    /// Set the measured quantity and whether it is a liquid volume
    pub fn with_amount(mut self, amount: f64, is_liquid: bool) -> Self {
        self.amount = amount;
        self.is_liquid = is_liquid;
        self
    }

    /// Set the low/high carbohydrate estimate in grams
    pub fn with_carb_range(mut self, low: f64, high: f64) -> Self {
        self.carb_low = low;
        self.carb_high = high;
        self
    }

    /// Set the glycemic index, clamped to [0, 100]
    pub fn with_glycemic_index(mut self, gi: f64) -> Self {
        self.glycemic_index = gi.clamp(0.0, 100.0);
        self
    }

    /// Set the free-text peak-time label
    pub fn with_peak_time_label(mut self, label: &str) -> Self {
        self.peak_time_label = label.to_string();
        self
    }

    /// Midpoint of the low/high carbohydrate estimate
    ///
    /// Not validated against `carb_low <= carb_high`; a reversed range still
    /// yields its arithmetic mean. Data quality is the caller's concern.
    pub fn carb_midpoint(&self) -> f64 {
        (self.carb_low + self.carb_high) / 2.0
    }

    /// Whether this ingredient contributes any carbohydrate at all
    ///
    /// Zero-carb ingredients have no absorption curve but still count toward
    /// weight/volume aggregates.
    pub fn has_carbs(&self) -> bool {
        self.carb_low + self.carb_high != 0.0
    }
}

impl fmt::Display for IngredientRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.is_liquid { "ml" } else { "g" };
        write!(f, "{} ({}{}", self.name, self.amount, unit)?;
        if self.has_carbs() {
            if (self.carb_low - self.carb_high).abs() < f64::EPSILON {
                write!(f, ", {}g carbs", self.carb_low)?;
            } else {
                write!(f, ", {}-{}g carbs", self.carb_low, self.carb_high)?;
            }
            write!(f, ", GI {}", self.glycemic_index)?;
        }
        write!(f, ")")
    }
}
