use std::env;
use std::fs;
use std::io::Read;

use anyhow::{Context, Result};
use log::info;

use carbcurve::analysis::analyze_meal;
use carbcurve::ingredient_model::IngredientRecord;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Read the ingredient list as JSON from a file argument or stdin
    let input = match env::args().nth(1) {
        Some(path) => {
            fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path))?
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    let records: Vec<IngredientRecord> =
        serde_json::from_str(&input).context("Input must be a JSON array of ingredient records")?;

    info!("Analyzing {} ingredient records", records.len());

    let analysis = analyze_meal(&records, None);

    println!("Meal: {}", analysis.totals.amount_summary());
    println!("Carbs: {}", analysis.totals.carb_summary());
    println!("Peak BG time: {} min", analysis.peak_minutes);

    match &analysis.scale {
        Some(scale) => {
            println!(
                "Chart: {} min x {} g",
                scale.domain.time_range_minutes, scale.domain.carb_range_grams
            );
            let labels: Vec<&str> = scale.time_ticks.iter().map(|t| t.label.as_str()).collect();
            println!("Time ticks: {}", labels.join(" "));
        }
        None => println!("Nothing to chart"),
    }

    for curve in &analysis.curves {
        if let Some(peak) = curve.curve.peak() {
            println!(
                "  {} (GI {}, {}): peaks at {:.0} min with {:.1}g impact",
                curve.name, curve.glycemic_index, curve.color, peak.time_minutes, peak.impact
            );
        }
    }

    Ok(())
}
