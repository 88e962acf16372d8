//! History command - process files in one session and list the uploads.

use std::path::PathBuf;

use colored::Colorize;
use exceleron::extract::ExtractionConfig;
use exceleron::history::{HistoryQuery, HistorySort, HistoryStatus};
use exceleron::input::Parser;
use exceleron::Session;

use super::selection;
use crate::cli::{ColumnArgs, ParseArgs};

#[allow(clippy::too_many_arguments)]
pub fn run(
    files: Vec<PathBuf>,
    columns: ColumnArgs,
    parse: ParseArgs,
    search: Option<String>,
    status: Option<HistoryStatus>,
    sort: HistorySort,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let parser = Parser::with_config(parse.parser_config()?);
    let selection = selection(&columns)?;
    let mut session = Session::new().with_extraction(ExtractionConfig {
        strict: parse.strict,
    });

    let mut failures = 0;
    for file in &files {
        let outcome = parser
            .parse_file(file)
            .and_then(|(table, source)| session.process(&table, &selection, &source.file).map(|_| ()));

        match outcome {
            Ok(()) => {
                if verbose && !json_output {
                    println!("{} {}", "Processed".green(), file.display());
                }
            }
            Err(e) => {
                failures += 1;
                eprintln!("{} {}: {}", "Skipped".yellow().bold(), file.display(), e);
            }
        }
    }

    tracing::info!(files = files.len(), failures, "session finished");

    let mut query = HistoryQuery::new().with_sort(sort);
    if let Some(term) = search {
        query = query.with_search(term);
    }
    if let Some(status) = status {
        query = query.with_status(status);
    }
    let entries = session.history(&query);

    if json_output {
        let output = serde_json::json!({
            "stats": session.stats(),
            "entries": entries.iter().map(|e| serde_json::json!({
                "id": e.id,
                "file_name": e.file_name,
                "uploaded_at": e.uploaded_at,
                "data_points": e.data_points,
                "chart_type": e.chart_type.label(),
                "status": e.status,
            })).collect::<Vec<_>>(),
            "current": session.current().map(|v| &v.dataset.metadata.source_file_name),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Upload history".cyan().bold());
    if entries.is_empty() {
        println!("  {}", "No matching uploads.".dimmed());
    }
    for entry in &entries {
        println!(
            "  {:>3}  {:30}  {:>6} points  {:10}  {}  {}",
            entry.id,
            entry.file_name.white(),
            entry.data_points,
            entry.chart_type.label(),
            entry.status.label().green(),
            entry.uploaded_at.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
        );
    }
    println!();

    let stats = session.stats();
    println!(
        "Files uploaded: {}  Charts created: {}  Failed: {}",
        stats.files_uploaded.to_string().white().bold(),
        stats.charts_created.to_string().white().bold(),
        if failures > 0 {
            failures.to_string().red()
        } else {
            failures.to_string().normal()
        }
    );

    if let Some(view) = session.current() {
        println!(
            "Showing {} with {} insights",
            view.dataset.metadata.source_file_name.white(),
            view.insights.len()
        );
    }

    if failures == files.len() {
        return Err("No file could be processed".into());
    }

    Ok(())
}
