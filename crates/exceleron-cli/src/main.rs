//! Exceleron CLI - spreadsheet charts and descriptive insights.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, &cli.log_level);

    let result = match cli.command {
        Commands::Headers { file, json } => commands::headers::run(file, json, cli.verbose),

        Commands::Extract {
            file,
            columns,
            parse,
            json,
        } => commands::extract::run(file, columns, parse, json, cli.verbose),

        Commands::Insights {
            file,
            columns,
            parse,
            chart,
            fail_on_degenerate,
            json,
        } => commands::insights::run(file, columns, parse, chart, fail_on_degenerate, json, cli.verbose),

        Commands::Preview {
            file,
            columns,
            parse,
            chart,
            json,
        } => commands::preview::run(file, columns, parse, chart, json, cli.verbose),

        Commands::History {
            files,
            columns,
            parse,
            search,
            status,
            sort,
            json,
        } => commands::history::run(files, columns, parse, search, status, sort, json, cli.verbose),

        Commands::Sample { chart, json } => commands::sample::run(chart, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install the tracing subscriber. `RUST_LOG` wins over the command line.
fn init_logging(verbose: bool, log_level: &str) {
    let level = if verbose { "debug" } else { log_level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
