#[cfg(test)]
mod tests {
    use carbcurve::analysis::analyze_meal;
    use carbcurve::ingredient_model::IngredientRecord;

    fn potato() -> IngredientRecord {
        IngredientRecord::new("Potato")
            .with_amount(200.0, false)
            .with_carb_range(30.0, 40.0)
            .with_glycemic_index(70.0)
            .with_peak_time_label("90min")
    }

    #[test]
    fn test_potato_end_to_end_scenario() {
        let analysis = analyze_meal(&[potato()], None);

        // Normalized carb amount is the 30-40 midpoint
        let scale = analysis.scale.as_ref().unwrap();
        assert_eq!(scale.domain.time_range_minutes, 225.0);
        assert_eq!(scale.domain.carb_range_grams, 42.0);

        // Curve peaks at ~35g near t = 90
        assert_eq!(analysis.curves.len(), 1);
        let peak = analysis.curves[0].curve.peak().unwrap();
        assert!((peak.impact - 35.0).abs() < 1e-6);
        assert!((peak.time_minutes - 90.0).abs() < 1.2); // within one sample step

        assert_eq!(analysis.totals.total_weight_grams, 200.0);
        assert_eq!(analysis.totals.carb_summary(), "30-40g");
        assert_eq!(analysis.peak_minutes, 90);
    }

    #[test]
    fn test_mixed_meal_end_to_end() {
        let records = vec![
            potato(),
            IngredientRecord::new("Orange juice")
                .with_amount(50.0, true)
                .with_carb_range(10.0, 10.0)
                .with_glycemic_index(50.0)
                .with_peak_time_label("30min"),
            IngredientRecord::new("Olive oil").with_amount(10.0, true),
        ];

        let analysis = analyze_meal(&records, None);

        // Oil has no curve; potato and juice do
        assert_eq!(analysis.curves.len(), 2);
        assert_eq!(analysis.curves[0].name, "Potato");
        assert_eq!(analysis.curves[1].name, "Orange juice");

        // Time domain follows the potato, carb domain its 35g midpoint
        let scale = analysis.scale.as_ref().unwrap();
        assert_eq!(scale.domain.time_range_minutes, 225.0);
        assert_eq!(scale.domain.carb_range_grams, 42.0);

        // Totals include the zero-carb oil
        assert_eq!(analysis.totals.total_weight_grams, 200.0);
        assert_eq!(analysis.totals.total_volume_ml, 60.0);
        assert_eq!(analysis.totals.amount_summary(), "200g + 60ml");
        assert_eq!(analysis.totals.carb_summary(), "40-50g");

        // Weighted peak: (90*35 + 30*10) / 45 = 76.67 -> 77
        assert_eq!(analysis.peak_minutes, 77);
    }

    #[test]
    fn test_empty_input_end_to_end() {
        let analysis = analyze_meal(&[], None);

        assert!(analysis.curves.is_empty());
        assert!(analysis.scale.is_none());
        assert_eq!(analysis.totals.total_weight_grams, 0.0);
        assert_eq!(analysis.totals.total_volume_ml, 0.0);
        assert_eq!(analysis.totals.total_carb_low, 0.0);
        assert_eq!(analysis.totals.total_carb_high, 0.0);
        assert_eq!(analysis.peak_minutes, 0);
    }

    #[test]
    fn test_json_records_flow_through_pipeline() {
        let json = r#"[
            {
                "name": "Potato",
                "is_liquid": false,
                "amount": 200.0,
                "carb_low": 30.0,
                "carb_high": 40.0,
                "glycemic_index": 70.0,
                "peak_time_label": "90min"
            },
            {
                "name": "Milk",
                "is_liquid": true,
                "amount": 200.0,
                "carb_low": 9.0,
                "carb_high": 11.0,
                "glycemic_index": 30.0,
                "peak_time_label": "2h"
            }
        ]"#;

        let records: Vec<IngredientRecord> = serde_json::from_str(json).unwrap();
        let analysis = analyze_meal(&records, None);

        assert_eq!(analysis.curves.len(), 2);
        // Milk's 2h peak dominates the time domain: 2.5 * 120 = 300
        let scale = analysis.scale.as_ref().unwrap();
        assert_eq!(scale.domain.time_range_minutes, 300.0);
    }

    #[test]
    fn test_unparseable_peak_label_defaults_to_one_hour() {
        let records = vec![potato().with_peak_time_label("after lunch")];
        let analysis = analyze_meal(&records, None);

        let scale = analysis.scale.as_ref().unwrap();
        assert_eq!(scale.domain.time_range_minutes, 150.0);
        assert_eq!(analysis.peak_minutes, 60);
    }

    #[test]
    fn test_repeated_analysis_identical() {
        let records = vec![potato()];
        let first = analyze_meal(&records, None);
        let second = analyze_meal(&records, None);
        assert_eq!(first, second);
    }
}
