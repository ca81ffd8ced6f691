//! navlens CLI binary.
//!
//! Reference caller for the metrics and scoring engines: reads NAV files,
//! runs the pipeline, prints or writes the results.

mod cmd;
mod input;

use clap::{Parser, Subcommand};
use std::process;

#[derive(Parser)]
#[command(name = "navlens")]
#[command(about = "NAV metrics and category-aware fund scoring", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the metrics record for one fund's NAV history
    Metrics {
        /// JSON file containing an array of {date, nav} rows
        file: String,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Compute metrics and the category-weighted score for one fund
    Score {
        /// JSON file containing an array of {date, nav} rows
        file: String,

        /// Fund category (Equity, Debt, Hybrid, Income, Solution Oriented)
        #[arg(short, long, default_value = "Other")]
        category: String,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Score every fund in a combined NAV file
    Batch {
        /// JSON file mapping fund name to {category, nav: [...]}
        file: String,

        /// Where to write the scored output
        #[arg(short, long)]
        out: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Metrics { file, format } => cmd::metrics::run(&file, &format),
        Commands::Score {
            file,
            category,
            format,
        } => cmd::score::run(&file, &category, &format),
        Commands::Batch { file, out } => cmd::batch::run(&file, &out),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
