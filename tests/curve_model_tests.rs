#[cfg(test)]
mod tests {
    use carbcurve::curve_model::{
        synthesize_curve, tail_dampening_multiplier, AbsorptionCurve, NUM_SAMPLES,
    };
    use carbcurve::ingredient_model::NormalizedIngredient;

    fn ingredient(carb: f64, gi: f64, peak: f64) -> NormalizedIngredient {
        NormalizedIngredient {
            name: "test".to_string(),
            peak_minutes: peak,
            carb_amount: carb,
            glycemic_index: gi,
            color_index: 0,
        }
    }

    fn impact_near(curve: &AbsorptionCurve, t: f64) -> f64 {
        curve
            .points
            .iter()
            .min_by(|a, b| {
                (a.time_minutes - t)
                    .abs()
                    .total_cmp(&(b.time_minutes - t).abs())
            })
            .unwrap()
            .impact
    }

    #[test]
    fn test_peak_normalization_invariant() {
        // Peak times chosen so the kernel mode lands on both sampling grids
        for (carb, gi, peak, range) in [
            (35.0, 70.0, 90.0, 225.0),
            (20.0, 0.0, 60.0, 150.0),
            (12.5, 100.0, 120.0, 300.0),
        ] {
            let curve = synthesize_curve(&ingredient(carb, gi, peak), range).unwrap();
            let max = curve.peak().unwrap();
            assert!(
                (max.impact - carb).abs() / carb < 1e-6,
                "peak {} for carb {}",
                max.impact,
                carb
            );
        }
    }

    #[test]
    fn test_curve_spans_full_time_domain() {
        let curve = synthesize_curve(&ingredient(35.0, 70.0, 90.0), 225.0).unwrap();
        assert_eq!(curve.points.len(), NUM_SAMPLES + 1);
        assert_eq!(curve.points.first().unwrap().time_minutes, 0.0);
        assert_eq!(curve.points.last().unwrap().time_minutes, 225.0);
    }

    #[test]
    fn test_all_impacts_non_negative_and_clamped() {
        let curve = synthesize_curve(&ingredient(35.0, 70.0, 30.0), 400.0).unwrap();
        for point in &curve.points {
            assert!(point.impact >= 0.0);
            assert!(point.impact <= 35.0 + 1e-9);
        }
    }

    #[test]
    fn test_tail_dampened_below_undampened_kernel() {
        // With a short peak time the domain extends well past 3x peak, so
        // the tail region must decay toward zero.
        let curve = synthesize_curve(&ingredient(20.0, 50.0, 30.0), 600.0).unwrap();
        let near_tail_start = impact_near(&curve, 96.0);
        let deep_tail = impact_near(&curve, 480.0);
        assert!(deep_tail < near_tail_start);
        assert!(deep_tail < 1.0);
    }

    #[test]
    fn test_tail_multiplier_monotone() {
        let peak = 45.0;
        let times: Vec<f64> = (0..100).map(|i| 140.0 + i as f64 * 7.0).collect();
        for pair in times.windows(2) {
            let earlier = tail_dampening_multiplier(pair[0], peak);
            let later = tail_dampening_multiplier(pair[1], peak);
            assert!(later <= earlier, "t1={} t2={}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_degenerate_peak_time_gives_zero_curve() {
        let curve = synthesize_curve(&ingredient(35.0, 70.0, 0.0), 225.0).unwrap();
        assert!(curve.points.iter().all(|p| p.impact == 0.0));
    }

    #[test]
    fn test_zero_carb_signals_empty() {
        assert!(synthesize_curve(&ingredient(0.0, 70.0, 90.0), 225.0).is_none());
    }

    #[test]
    fn test_gi_zero_still_produces_a_curve() {
        // GI 0 is valid input (pure protein/fat): alpha = 2, not degenerate
        let curve = synthesize_curve(&ingredient(10.0, 0.0, 60.0), 150.0).unwrap();
        let max = curve.peak().unwrap();
        assert!((max.impact - 10.0).abs() < 1e-6);
    }
}
