//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use exceleron::history::{HistorySort, HistoryStatus};
use exceleron::input::ParserConfig;
use exceleron::{ChartDimension, ChartMode, ChartStyle};

/// Exceleron: spreadsheet charts with descriptive insights
#[derive(Parser)]
#[command(name = "exceleron")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (implies --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the column names of a spreadsheet
    Headers {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Extract chart data from two columns
    Extract {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        columns: ColumnArgs,

        #[command(flatten)]
        parse: ParseArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate insights for two columns
    Insights {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        columns: ColumnArgs,

        #[command(flatten)]
        parse: ParseArgs,

        #[command(flatten)]
        chart: ChartArgs,

        /// Fail when a statistic has a zero baseline instead of skipping it
        #[arg(long)]
        fail_on_degenerate: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the points a chart would draw after display sampling
    Preview {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        columns: ColumnArgs,

        #[command(flatten)]
        parse: ParseArgs,

        #[command(flatten)]
        chart: ChartArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Process several files in one session and list the upload history
    History {
        /// Paths to the data files, processed in order
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        columns: ColumnArgs,

        #[command(flatten)]
        parse: ParseArgs,

        /// Only list files whose name contains this text
        #[arg(long)]
        search: Option<String>,

        /// Only list entries with this status (completed, processing, failed)
        #[arg(long)]
        status: Option<HistoryStatus>,

        /// Sort order (date, name, size)
        #[arg(long, default_value = "date")]
        sort: HistorySort,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show insights for the built-in quarterly sales dataset
    Sample {
        #[command(flatten)]
        chart: ChartArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// The two columns to chart.
#[derive(Args, Clone, Debug)]
pub struct ColumnArgs {
    /// Column for category labels (X axis)
    #[arg(short = 'x', long = "x", value_name = "COLUMN")]
    pub x: String,

    /// Column for values (Y axis)
    #[arg(short = 'y', long = "y", value_name = "COLUMN")]
    pub y: String,
}

/// File reading and value parsing options.
#[derive(Args, Clone, Debug, Default)]
pub struct ParseArgs {
    /// Field delimiter (auto-detected when omitted)
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// Maximum data rows to read
    #[arg(long)]
    pub max_rows: Option<usize>,

    /// Keep every cell as text instead of recognising numbers
    #[arg(long)]
    pub no_infer: bool,

    /// Fail on unreadable values instead of treating them as 0
    #[arg(long)]
    pub strict: bool,
}

impl ParseArgs {
    /// Build the parser configuration.
    pub fn parser_config(&self) -> Result<ParserConfig, String> {
        let delimiter = match self.delimiter {
            Some(c) if c.is_ascii() => Some(c as u8),
            Some(c) => return Err(format!("Delimiter must be an ASCII character, got '{}'", c)),
            None => None,
        };

        Ok(ParserConfig {
            delimiter,
            max_rows: self.max_rows,
            infer_numbers: !self.no_infer,
            ..Default::default()
        })
    }
}

/// Chart render mode.
#[derive(Args, Clone, Debug)]
pub struct ChartArgs {
    /// Chart dimension (2d or 3d)
    #[arg(long, default_value = "2d")]
    pub dimension: ChartDimension,

    /// Chart style (bar, line, or pie)
    #[arg(long, default_value = "bar")]
    pub style: ChartStyle,
}

impl ChartArgs {
    pub fn mode(&self) -> ChartMode {
        ChartMode::new(self.dimension, self.style)
    }
}
