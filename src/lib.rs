//! # Carbcurve
//!
//! Core library for the nutrition-assistant's meal charts: given a list of
//! detected ingredients with carbohydrate ranges, glycemic indices, and
//! expected peak times, it synthesizes per-ingredient blood-glucose
//! absorption curves, plans the shared chart axes, and computes the meal's
//! aggregate totals.

pub mod analysis;
pub mod chart_scale;
pub mod curve_model;
pub mod ingredient_model;
pub mod meal_summary;
pub mod normalizer;
pub mod peak_time;
