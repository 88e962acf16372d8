//! CLI command implementations.

pub mod extract;
pub mod headers;
pub mod history;
pub mod insights;
pub mod preview;
pub mod sample;

use colored::Colorize;
use exceleron::extract::ExtractionConfig;
use exceleron::insight::{DegeneratePolicy, InsightConfig};
use exceleron::{ColumnSelection, Exceleron, ExceleronConfig, Impact, Insight, KeyRecommendations};

use crate::cli::{ColumnArgs, ParseArgs};

/// Build the library facade from command-line options.
fn build_exceleron(
    parse: &ParseArgs,
    fail_on_degenerate: bool,
) -> Result<Exceleron, Box<dyn std::error::Error>> {
    let config = ExceleronConfig {
        parser: parse.parser_config()?,
        extraction: ExtractionConfig {
            strict: parse.strict,
        },
        insight: InsightConfig {
            degenerate: if fail_on_degenerate {
                DegeneratePolicy::Fail
            } else {
                DegeneratePolicy::Skip
            },
        },
    };
    Ok(Exceleron::with_config(config))
}

fn selection(columns: &ColumnArgs) -> Result<ColumnSelection, Box<dyn std::error::Error>> {
    Ok(ColumnSelection::new(&columns.x, &columns.y)?)
}

fn impact_badge(impact: Impact) -> colored::ColoredString {
    match impact {
        Impact::High => impact.label().red().bold(),
        Impact::Medium => impact.label().yellow().bold(),
        Impact::Low => impact.label().green().bold(),
    }
}

/// Print insight cards in order.
fn print_insights(insights: &[Insight], verbose: bool) {
    if insights.is_empty() {
        println!("{}", "No insights for this dataset.".yellow());
        return;
    }

    for insight in insights {
        println!(
            "{} {} [{}] {}% confidence",
            format!("{}.", insight.id).dimmed(),
            insight.title.white().bold(),
            impact_badge(insight.impact),
            insight.confidence
        );
        println!("   {}", insight.description);
        println!("   {} {}", "→".cyan(), insight.recommendation);

        if verbose {
            let details = &insight.details;
            println!(
                "   {}: {} ({}, {})",
                details.metric.dimmed(),
                details.value.white(),
                details.period,
                details.comparison
            );
            if let Some(hint) = &details.chart_hint {
                println!("   {} {}", "Chart:".dimmed(), hint);
            }
            for item in &details.action_items {
                println!("     - {}", item);
            }
        }
        println!();
    }
}

fn print_recommendations(recommendations: &KeyRecommendations) {
    if recommendations.is_empty() {
        return;
    }

    if !recommendations.immediate_actions.is_empty() {
        println!("{}", "Immediate actions:".red().bold());
        for rec in &recommendations.immediate_actions {
            println!("  {} {}", format!("{}:", rec.title).white(), rec.text);
        }
    }
    if !recommendations.strategic_opportunities.is_empty() {
        println!("{}", "Strategic opportunities:".yellow().bold());
        for rec in &recommendations.strategic_opportunities {
            println!("  {} {}", format!("{}:", rec.title).white(), rec.text);
        }
    }
}
