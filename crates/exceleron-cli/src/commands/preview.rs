//! Preview command - show the points a chart renderer would draw.

use std::path::PathBuf;

use colored::Colorize;
use exceleron::{ChartDimension, DisplaySeries, SummaryStats};

use super::{build_exceleron, selection};
use crate::cli::{ChartArgs, ColumnArgs, ParseArgs};

pub fn run(
    file: PathBuf,
    columns: ColumnArgs,
    parse: ParseArgs,
    chart: ChartArgs,
    json_output: bool,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let exceleron = build_exceleron(&parse, false)?;
    let (dataset, _) = exceleron.extract(&file, &selection(&columns)?)?;
    let series = DisplaySeries::from_dataset(&dataset, chart.mode());

    if json_output {
        let preview = serde_json::json!({
            "series": series,
            "summary": SummaryStats::from_values(&dataset.values),
        });
        println!("{}", serde_json::to_string_pretty(&preview)?);
        return Ok(());
    }

    println!(
        "{} {} as {} {}",
        "Preview of".cyan().bold(),
        dataset.metadata.source_file_name.white(),
        series.mode.dimension,
        series.mode.style.label()
    );
    if series.sampled {
        println!(
            "{}",
            format!(
                "Large dataset: showing {} of {} points",
                series.len(),
                series.source_points
            )
            .yellow()
        );
    }
    println!();

    let width = series.points.iter().map(|p| p.label.chars().count()).max().unwrap_or(0);
    for point in &series.points {
        match (series.mode.dimension, point.height) {
            (ChartDimension::ThreeD, Some(height)) => println!(
                "  {:width$}  {:>12}  height {:.2}",
                point.label,
                point.value,
                height,
                width = width
            ),
            _ => println!("  {:width$}  {:>12}", point.label, point.value, width = width),
        }
    }

    let stats = SummaryStats::from_values(&dataset.values);
    println!();
    println!(
        "Max {}  Min {}  Average {}",
        stats.max.to_string().green(),
        stats.min.to_string().red(),
        stats.average.to_string().white().bold()
    );

    Ok(())
}
