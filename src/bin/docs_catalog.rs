//! Command-line access to the published documentation catalogs.
//!
//! Prints catalogs, single entries and release diffs as JSON on stdout so the
//! site build (or a human) can consume them. Logs go to stderr and follow
//! `RUST_LOG`.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use docs_catalog::{
    CatalogDiff, Config, EntryId, Version, catalog_by_category_json, catalog_schema,
    load_catalog_from_path, published,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "docs-catalog", version, about = "Inspect versioned documentation catalogs")]
struct Cli {
    /// Alternate base catalog document (defaults to the embedded one).
    #[arg(long, global = true)]
    base: Option<PathBuf>,
    /// Alternate catalog schema (defaults to the embedded one).
    #[arg(long, global = true)]
    schema: Option<PathBuf>,
    /// Print single-line JSON instead of pretty output.
    #[arg(long, global = true)]
    compact: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every published version, oldest first.
    Versions,
    /// Print the catalog of one version, keyed by entry id.
    Export {
        version: Version,
        /// Group entries by category in navigation order.
        #[arg(long)]
        by_category: bool,
    },
    /// Print one entry of a version.
    Show { version: Version, id: String },
    /// Print the ids removed, added and changed between two versions.
    Diff { from: Version, to: Version },
    /// Validate a catalog document against the schema and catalog invariants.
    Validate { file: PathBuf },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()
        .with_overrides(cli.base.clone(), cli.schema.clone())
        .check()?;

    match &cli.command {
        Command::Versions => {
            let repository = published(&config)?;
            for version in repository.versions() {
                println!("{version}");
            }
        }
        Command::Export {
            version,
            by_category,
        } => {
            let repository = published(&config)?;
            let catalog = repository.require(version)?;
            info!(version = %version, entries = catalog.len(), "exporting catalog");
            if *by_category {
                print_json(&catalog_by_category_json(catalog)?, cli.compact)?;
            } else {
                print_json(catalog, cli.compact)?;
            }
        }
        Command::Show { version, id } => {
            let repository = published(&config)?;
            let Some(entry) = repository.find_entry(version, &EntryId::from(id.as_str())) else {
                bail!("entry '{id}' not found in catalog {version}");
            };
            print_json(entry, cli.compact)?;
        }
        Command::Diff { from, to } => {
            let repository = published(&config)?;
            let diff = CatalogDiff::between(repository.require(from)?, repository.require(to)?);
            print_json(&diff, cli.compact)?;
        }
        Command::Validate { file } => {
            let schema = catalog_schema(&config)?;
            let loaded = load_catalog_from_path(file, &schema)?;
            println!(
                "{}: catalog {} with {} entries is valid",
                file.display(),
                loaded.version,
                loaded.catalog.len()
            );
        }
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T, compact: bool) -> Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .context("serializing output")?;
    println!("{rendered}");
    Ok(())
}
