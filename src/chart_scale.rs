//! # Chart Scale Planner
//!
//! Derives the shared time/carbohydrate axis extents and tick labels used to
//! plot every ingredient's absorption curve on one comparable chart, plus the
//! fixed display-color palette the normalizer indexes into.

use serde::{Deserialize, Serialize};

use crate::ingredient_model::NormalizedIngredient;

/// Number of entries in the display palette
pub const PALETTE_SIZE: usize = 10;

/// Fixed display palette; `NormalizedIngredient::color_index` cycles through it
pub const PALETTE: [&str; PALETTE_SIZE] = [
    "#e6194b", "#3cb44b", "#ffb300", "#4363d8", "#f58231", "#911eb4", "#00acc1", "#f032e6",
    "#7cb342", "#795548",
];

/// Spacing between time-axis ticks, in minutes
pub const TIME_TICK_STEP_MINUTES: u32 = 30;

/// Shared axis extents for the curve chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainScale {
    /// Time-axis extent: 2.5x the largest peak time
    pub time_range_minutes: f64,
    /// Carbohydrate-axis extent: 1.2x the largest per-ingredient amount
    pub carb_range_grams: f64,
}

/// One labeled tick on the time axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeTick {
    pub minutes: u32,
    /// "Nh" on hour boundaries, "H:MM" otherwise
    pub label: String,
}

/// Complete axis plan for one ingredient set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartScale {
    pub domain: DomainScale,
    pub time_ticks: Vec<TimeTick>,
    /// Carbohydrate tick positions in grams, from 0 upward
    pub carb_ticks: Vec<f64>,
}

/// Format a minute offset as a time-axis tick label
pub fn format_time_tick(minutes: u32) -> String {
    if minutes % 60 == 0 {
        format!("{}h", minutes / 60)
    } else {
        format!("{}:{:02}", minutes / 60, minutes % 60)
    }
}

/// Plan the shared chart scale for a normalized ingredient set
///
/// Returns `None` for an empty set: the caller renders nothing rather than a
/// zero-sized chart.
pub fn plan_scale(ingredients: &[NormalizedIngredient]) -> Option<ChartScale> {
    if ingredients.is_empty() {
        return None;
    }

    let max_peak = ingredients
        .iter()
        .map(|i| i.peak_minutes)
        .fold(0.0_f64, f64::max);
    let max_carb = ingredients
        .iter()
        .map(|i| i.carb_amount)
        .fold(0.0_f64, f64::max);

    let domain = DomainScale {
        time_range_minutes: 2.5 * max_peak,
        carb_range_grams: 1.2 * max_carb,
    };

    let mut time_ticks = Vec::new();
    let mut minutes = 0;
    while f64::from(minutes) <= domain.time_range_minutes {
        time_ticks.push(TimeTick {
            minutes,
            label: format_time_tick(minutes),
        });
        minutes += TIME_TICK_STEP_MINUTES;
    }

    // Rounds the ~4-gridline target up to the nearest multiple of 5 grams
    let carb_step = (domain.carb_range_grams / 4.0 / 5.0).ceil() * 5.0;
    let mut carb_ticks = Vec::new();
    if carb_step > 0.0 {
        let mut tick = 0.0;
        while tick <= domain.carb_range_grams {
            carb_ticks.push(tick);
            tick += carb_step;
        }
    }

    Some(ChartScale {
        domain,
        time_ticks,
        carb_ticks,
    })
}
