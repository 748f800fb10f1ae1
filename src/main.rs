//! motor-search - fuzzy search over outboard motor inventory
//!
//! Loads inventory records from JSON and ranks them against a query.
//!
//! CHANGELOG:
//! - 10/19/2026 - RUST_LOG used as-is when set, WARN only as the fallback
//! - 10/18/2026 - Initial CLI with search, distance and inventory commands

use clap::{Parser, Subcommand};
use motor_search::commands;
use motor_search::output::{self, OutputControls};
use motor_search::PartialSearchOptions;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Fuzzy search over outboard motor inventory.
#[derive(Parser, Debug)]
#[command(name = "motor-search")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Compact JSON output (no whitespace)
    #[arg(long, global = true)]
    compact: bool,

    /// Comma-separated field allowlist
    #[arg(long, global = true)]
    fields: Option<String>,

    /// Truncate text fields to this length
    #[arg(long, global = true)]
    max_text_chars: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank inventory records against a query
    Search {
        /// Search query (words are matched independently)
        #[arg(required = true)]
        query: Vec<String>,

        /// Inventory JSON file (defaults to $MOTOR_SEARCH_INVENTORY)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Comma-separated fields to search (defaults to all text fields)
        #[arg(short, long)]
        keys: Option<String>,

        /// Minimum score to include a result (0-1)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Max results to return
        #[arg(short = 'n', long, conflicts_with = "unlimited")]
        max_results: Option<usize>,

        /// Return every result above the threshold
        #[arg(long)]
        unlimited: bool,

        /// Score for an exact field match
        #[arg(long)]
        boost_exact: Option<f64>,

        /// Score for a prefix match
        #[arg(long)]
        boost_starts_with: Option<f64>,

        /// Score for a substring match
        #[arg(long)]
        boost_contains: Option<f64>,

        /// JSON options file (defaults to $MOTOR_SEARCH_OPTIONS)
        #[arg(long)]
        options: Option<PathBuf>,
    },

    /// Show edit distance and similarity between two strings
    Distance {
        /// Field value
        a: String,

        /// Query token
        b: String,
    },

    /// Show record count and searchable fields of an inventory file
    Inventory {
        /// Inventory JSON file (defaults to $MOTOR_SEARCH_INVENTORY)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// RUST_LOG directives as given (a bare `debug` applies to every target), else WARN.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    let rust_log = std::env::var("RUST_LOG").ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let output_controls = OutputControls {
        json: cli.json,
        compact: cli.compact,
        fields: cli.fields.clone(),
        max_text_chars: cli.max_text_chars,
    };

    let result = match cli.command {
        Command::Search {
            query,
            file,
            keys,
            threshold,
            max_results,
            unlimited,
            boost_exact,
            boost_starts_with,
            boost_contains,
            options,
        } => {
            let query = query.join(" ");
            let flags = PartialSearchOptions {
                threshold,
                max_results: if unlimited { Some(None) } else { max_results.map(Some) },
                boost_exact,
                boost_starts_with,
                boost_contains,
            };
            let args = commands::search::SearchArgs {
                query: &query,
                file: file.as_deref(),
                keys: keys.as_deref(),
                options_file: options.as_deref(),
                flags,
            };
            commands::search::search(&args, &output_controls)
        }
        Command::Distance { a, b } => commands::search::distance(&a, &b, &output_controls),
        Command::Inventory { file } => commands::inventory::show(file.as_deref(), &output_controls),
    };

    match result {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            if cli.json {
                println!("{}", output::format_error(&format!("{:#}", e)));
            } else {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::from(1)
        }
    }
}
