//! # Absorption Curve Synthesizer
//!
//! This module builds the per-ingredient blood-glucose-impact curve: a
//! skewed, glycemic-index-dependent unimodal response shaped like a gamma
//! distribution, normalized so its peak equals the ingredient's estimated
//! carbohydrate contribution.
//!
//! ## Model
//!
//! The glycemic index drives the kernel's shape: a higher GI raises both the
//! skewness and the gamma shape parameter, producing a sharper, more
//! front-loaded rise with a longer decaying tail (fast absorption, e.g.
//! glucose) versus the flatter, more symmetric response of fat- or
//! protein-buffered carbohydrate.
//!
//! The kernel's peak height depends on all three shape parameters and on the
//! time-to-x mapping, so instead of solving for it analytically the
//! synthesizer measures it empirically over a dense calibration grid and
//! rescales. The grid is dense enough that the measured maximum is within
//! negligible error of the true maximum for the shape range in use.

use serde::{Deserialize, Serialize};

use crate::ingredient_model::NormalizedIngredient;

/// Number of sampling intervals per curve; curves carry `NUM_SAMPLES + 1` points
pub const NUM_SAMPLES: usize = 100;

/// Number of intervals in the dense calibration grid
const CALIBRATION_SAMPLES: usize = 200;

/// One sampled point of an absorption curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Minutes after consumption
    pub time_minutes: f64,
    /// Modeled blood-glucose impact in grams of carbohydrate, `>= 0`
    pub impact: f64,
}

/// A synthesized blood-glucose-impact curve for one ingredient
///
/// Ephemeral: rebuilt from scratch on every analysis run. Consumers draw the
/// points as a smooth line; only the sampled points are guaranteed, not
/// inter-sample behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbsorptionCurve {
    /// Ordered `(time, impact)` samples spanning the shared time domain
    pub points: Vec<CurvePoint>,
}

impl AbsorptionCurve {
    /// The sample with the highest impact value
    pub fn peak(&self) -> Option<&CurvePoint> {
        self.points
            .iter()
            .max_by(|a, b| a.impact.total_cmp(&b.impact))
    }
}

/// Gamma-density kernel with GI-derived shape parameters
struct GammaKernel {
    alpha: f64,
    beta: f64,
    mode: f64,
    peak_minutes: f64,
}

impl GammaKernel {
    fn new(glycemic_index: f64, peak_minutes: f64) -> Self {
        let gi = glycemic_index / 100.0;
        let skewness = 1.5 + gi * 1.5;
        let alpha = 2.0 + gi * 2.0;
        let beta = 1.0 / skewness;
        Self {
            alpha,
            beta,
            mode: (alpha - 1.0) / beta,
            peak_minutes,
        }
    }

    /// Unnormalized kernel value at time `t` minutes; zero at `t <= 0`
    ///
    /// Time is mapped onto the gamma domain so the distribution mode lands
    /// at `peak_minutes`.
    fn value_at(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let x = (t / self.peak_minutes) * self.mode;
        x.powf(self.alpha - 1.0) * (-x * self.beta).exp() * self.beta.powf(self.alpha)
    }
}

/// Tail-dampening multiplier applied past three times the peak time
///
/// Returns 1 for `t <= 3 * peak_minutes`, and decays exponentially beyond,
/// so the multiplier is monotone non-increasing in `t`.
pub fn tail_dampening_multiplier(t: f64, peak_minutes: f64) -> f64 {
    let tail_start = peak_minutes * 3.0;
    if t <= tail_start {
        1.0
    } else {
        (-((t - tail_start) / (peak_minutes * 2.0))).exp()
    }
}

/// Synthesize the absorption curve for one normalized ingredient
///
/// Returns `None` when the ingredient contributes no carbohydrate (no curve
/// to draw). Otherwise the curve spans `[0, time_range_minutes]` inclusive in
/// `NUM_SAMPLES` equal steps, normalized so its pre-dampening maximum equals
/// `carb_amount`.
///
/// A degenerate calibration (zero or non-finite maximum, e.g. a zero peak
/// time) yields an all-zero curve rather than propagating NaN.
pub fn synthesize_curve(
    ingredient: &NormalizedIngredient,
    time_range_minutes: f64,
) -> Option<AbsorptionCurve> {
    if ingredient.carb_amount == 0.0 {
        return None;
    }

    let kernel = GammaKernel::new(ingredient.glycemic_index, ingredient.peak_minutes);

    // Calibration pass: measure the kernel's empirical maximum over a dense
    // grid so the sampled curve can be rescaled to the carb amount.
    let mut max_height = 0.0_f64;
    for i in 0..=CALIBRATION_SAMPLES {
        let t = (i as f64 / CALIBRATION_SAMPLES as f64) * time_range_minutes;
        let value = kernel.value_at(t);
        if value.is_finite() && value > max_height {
            max_height = value;
        }
    }

    if max_height <= 0.0 || !max_height.is_finite() {
        let points = (0..=NUM_SAMPLES)
            .map(|i| CurvePoint {
                time_minutes: (i as f64 / NUM_SAMPLES as f64) * time_range_minutes,
                impact: 0.0,
            })
            .collect();
        return Some(AbsorptionCurve { points });
    }

    let normalization = ingredient.carb_amount / max_height;

    let points = (0..=NUM_SAMPLES)
        .map(|i| {
            let t = (i as f64 / NUM_SAMPLES as f64) * time_range_minutes;
            let mut impact = kernel.value_at(t) * normalization;
            impact *= tail_dampening_multiplier(t, ingredient.peak_minutes);
            impact = impact.min(ingredient.carb_amount);
            CurvePoint {
                time_minutes: t,
                impact,
            }
        })
        .collect();

    Some(AbsorptionCurve { points })
}
