//! Extract command - turn two columns into chart data.

use std::path::PathBuf;

use colored::Colorize;

use super::{build_exceleron, selection};
use crate::cli::{ColumnArgs, ParseArgs};

pub fn run(
    file: PathBuf,
    columns: ColumnArgs,
    parse: ParseArgs,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let exceleron = build_exceleron(&parse, false)?;
    let (dataset, source) = exceleron.extract(&file, &selection(&columns)?)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&dataset)?);
        return Ok(());
    }

    let meta = &dataset.metadata;
    println!(
        "{} {} ({} vs {})",
        "Extracted".cyan().bold(),
        meta.source_file_name.white(),
        meta.x_axis_name,
        meta.y_axis_name
    );

    if verbose {
        println!("  Format: {}  Size: {} bytes  Hash: {}", source.format, source.size_bytes, source.hash);
    }

    let dropped = meta.total_row_count - meta.valid_row_count;
    println!(
        "Kept {} of {} rows{}",
        meta.valid_row_count.to_string().white().bold(),
        meta.total_row_count,
        if dropped > 0 {
            format!(" ({} dropped for missing cells)", dropped).yellow().to_string()
        } else {
            String::new()
        }
    );
    println!("Data type: {}", meta.inferred_data_type.label().magenta());
    println!();

    let width = dataset.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0).min(30);
    for (label, value) in dataset.points() {
        println!("  {:width$}  {}", label, value, width = width);
    }

    Ok(())
}
