//! Insights command - extract two columns and generate insight cards.

use std::path::PathBuf;

use colored::Colorize;

use super::{build_exceleron, print_insights, print_recommendations, selection};
use crate::cli::{ChartArgs, ColumnArgs, ParseArgs};

pub fn run(
    file: PathBuf,
    columns: ColumnArgs,
    parse: ParseArgs,
    chart: ChartArgs,
    fail_on_degenerate: bool,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let exceleron = build_exceleron(&parse, fail_on_degenerate)?;
    let result = exceleron.analyze(&file, &selection(&columns)?, chart.mode())?;

    if json_output {
        println!("{}", result.to_json()?);
        return Ok(());
    }

    let summary = &result.summary;
    println!(
        "{} {} ({} vs {}, {})",
        "Insights for".cyan().bold(),
        result.source.file.white(),
        result.dataset.metadata.x_axis_name,
        result.dataset.metadata.y_axis_name,
        result.mode
    );
    println!(
        "{} points from {} rows  |  max {}  min {}  avg {}  |  {}",
        summary.valid_rows.to_string().white().bold(),
        summary.total_rows,
        summary.stats.max,
        summary.stats.min,
        summary.stats.average,
        summary.data_type.label().magenta()
    );
    println!();

    print_insights(&result.insights, verbose);

    let counts = &summary.insights_by_impact;
    println!(
        "Generated {} insights ({} high, {} medium, {} low)",
        result.insights.len().to_string().white().bold(),
        counts.high.to_string().red(),
        counts.medium.to_string().yellow(),
        counts.low.to_string().green()
    );
    println!();
    print_recommendations(&result.recommendations);

    Ok(())
}
