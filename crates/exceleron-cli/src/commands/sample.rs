//! Sample command - insights for the built-in demo dataset.

use colored::Colorize;
use exceleron::sample::sample_dataset;
use exceleron::{InsightEngine, KeyRecommendations};

use super::{print_insights, print_recommendations};
use crate::cli::ChartArgs;

pub fn run(chart: ChartArgs, json_output: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = sample_dataset();
    let insights = InsightEngine::new().generate(&dataset, Some(chart.mode()))?;

    if json_output {
        let output = serde_json::json!({
            "dataset": dataset,
            "insights": insights,
            "recommendations": KeyRecommendations::from_insights(&insights),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Sample dataset".cyan().bold(),
        dataset.metadata.source_file_name.white()
    );
    for (label, value) in dataset.points() {
        println!("  {}  {}", label, value);
    }
    println!();

    print_insights(&insights, verbose);
    print_recommendations(&KeyRecommendations::from_insights(&insights));

    Ok(())
}
