use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for citysuggest
#[derive(Debug, Parser)]
#[command(
    name = "citysuggest",
    version,
    about = "Suggest cities from a partial name, optionally near a position"
)]
pub struct CliArgs {
    /// Path to the gazetteer TSV (or .tsv.gz); defaults to the bundled sample
    #[arg(short = 'i', long = "input", env = "CITYSUGGEST_DATA", global = true)]
    pub input: Option<PathBuf>,

    /// Treat the first row of the input as column titles
    #[arg(long = "header", global = true)]
    pub header: bool,

    /// Do not read or write the binary record cache next to the input
    #[arg(long = "no-cache", global = true)]
    pub no_cache: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the loaded gazetteer
    Stats,

    /// Print ranked suggestions for a name fragment as JSON
    Suggest {
        /// Name fragment to look for (case-insensitive)
        q: String,

        /// Latitude to rank nearby cities higher (decimal degrees)
        #[arg(long, allow_hyphen_values = true)]
        latitude: Option<String>,

        /// Longitude to rank nearby cities higher (decimal degrees)
        #[arg(long, allow_hyphen_values = true)]
        longitude: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}
