//! Command-line arguments and the top-level export run

use crate::error::Result;
use crate::export::{export_collection, ExportReport};
use crate::filters::FilterOptions;
use crate::io::{load_card_database, read_collection};
use crate::models::{Color, Format};
use crate::output::{output_path, write_records};
use clap::Parser;
use std::path::PathBuf;

/// Turn your goldfish format collection into a detailed JSON file for AI parsing.
#[derive(Parser, Debug, Clone)]
#[command(name = "collection_export")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Format to filter by
    #[arg(long, value_enum)]
    pub format: Option<Format>,

    /// Only include cards that include one or more specified colors (B=black, U=blue, N=colorless)
    #[arg(long, value_enum, num_args = 1.., ignore_case = true)]
    pub colors: Vec<Color>,

    /// Exclude cards that include certain colors (B=black, U=blue, N=colorless)
    #[arg(long = "no-colors", value_enum, num_args = 1.., ignore_case = true)]
    pub no_colors: Vec<Color>,

    /// Exclusive color matching. Use with --colors to automatically exclude any not listed
    #[arg(short = 'e', default_value_t = false)]
    pub exclusive: bool,

    /// Output information to the terminal as the export runs
    #[arg(short = 'v', default_value_t = false)]
    pub verbose: bool,

    /// Path to the Scryfall "Oracle Cards" bulk export
    #[arg(long, default_value = "oracle-cards.json")]
    pub database: PathBuf,

    /// Path to the goldfish collection CSV
    #[arg(long, default_value = "collection.csv")]
    pub collection: PathBuf,

    /// Directory the output file is written to
    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,
}

impl Args {
    /// Default log filter: per-row diagnostics are only shown with `-v`
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "info"
        } else {
            "warn"
        }
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::resolve(
            self.format,
            self.colors.clone(),
            self.no_colors.clone(),
            self.exclusive,
        )
    }
}

/// Result of a completed run
#[derive(Debug)]
pub struct RunOutcome {
    pub output_path: PathBuf,
    pub report: ExportReport,
}

/// Load both inputs, export the collection and write the output file
pub fn run(args: &Args) -> Result<RunOutcome> {
    let options = args.filter_options();

    let cards = load_card_database(&args.database)?;
    let entries = read_collection(&args.collection)?;

    let report = export_collection(&entries, &cards, &options);

    let output_path = output_path(&args.output_dir, &options);
    write_records(&output_path, &report.records)?;

    Ok(RunOutcome {
        output_path,
        report,
    })
}
