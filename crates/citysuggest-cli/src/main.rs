//! citysuggest — Command-line interface for citysuggest-core
//!
//! Loads a gazetteer and answers "which city did you mean?" for a partial
//! name, optionally weighted by a position.
//!
//! Usage examples
//! --------------
//!
//! - Suggest cities for a fragment
//!   $ citysuggest suggest québec
//!
//! - Prefer cities near a position
//!   $ citysuggest suggest london --latitude 37.1 --longitude -84.1
//!
//! - Show overall stats of a custom dump with a header row
//!   $ citysuggest --input ./data/cities_canada-usa.tsv --header stats
//!
//! Data source
//! -----------
//!
//! By default the CLI loads the sample gazetteer bundled with
//! `citysuggest-core`. Use `--input <path>` (or `CITYSUGGEST_DATA`) to point
//! to a GeoNames-style TSV dump. A binary copy of the parsed records is
//! cached next to the input for fast subsequent runs unless `--no-cache` is
//! given.
//!
//! Logging goes to stderr; set `CITYSUGGEST_LOG` (e.g. `debug`) to override
//! `-v` / `-q`.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use citysuggest_cli::handler::{write_stats, write_suggestions};
use citysuggest_core::{CityRepository, LoadOptions};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("CITYSUGGEST_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn load_repository(args: &CliArgs) -> anyhow::Result<CityRepository> {
    match &args.input {
        Some(path) => {
            let options = LoadOptions::default()
                .with_header(args.header)
                .with_cache(!args.no_cache);
            CityRepository::load_from_path(path, &options)
                .with_context(|| format!("loading gazetteer from {}", path.display()))
        }
        None => {
            let path = CityRepository::default_data_dir()
                .join(CityRepository::default_dataset_filename());
            let options = CityRepository::default_load_options().with_cache(!args.no_cache);
            CityRepository::load_from_path(&path, &options)
                .with_context(|| format!("loading bundled gazetteer from {}", path.display()))
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose, args.quiet);

    let repository = load_repository(&args)?;
    tracing::info!(records = repository.len(), "gazetteer loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Commands::Stats => {
            write_stats(&repository.stats(), &mut out)?;
        }

        Commands::Suggest {
            q,
            latitude,
            longitude,
            pretty,
        } => {
            let found = write_suggestions(
                &repository,
                &q,
                latitude.as_deref(),
                longitude.as_deref(),
                pretty,
                &mut out,
            )?;
            if found.is_empty() {
                tracing::info!("no cities found matching: {q}");
            }
        }
    }

    Ok(())
}
