//! Command-line interface for taytay.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **abbreviate**: Print the short form of one or more titles
//! - **search**: Look up titles by short form or short forms by title
//! - **catalog**: List, show, or export songs from a dataset
//! - **serve**: Start the web interface
//!
//! ## Usage
//!
//! ```text
//! # Abbreviate a title
//! taytay abbreviate "All Too Well (10 Minute Version) (From The Vault)"
//!
//! # Find the title behind a short form
//! taytay search "C(TV)" --direction short --dataset taylor.csv
//!
//! # JSON output for scripting
//! taytay --format json search "love story"
//!
//! # Start web UI
//! taytay serve --port 8080 --open
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod abbreviate;
pub mod catalog;
pub mod search;

/// Dataset read when no `--dataset` is given
pub const DEFAULT_DATASET: &str = "taylor.csv";

/// Placeholder shown in place of a blank query
pub const EMPTY_QUERY_MARKER: &str = "(empty)";

#[derive(Parser)]
#[command(name = "taytay")]
#[command(version)]
#[command(about = "Map song titles to short forms and back")]
#[command(
    long_about = "taytay abbreviates song titles into fan-style short forms and searches a song dataset in either direction.\n\nSearches first look for titles or short forms containing the query and fall back to similarity ranking when nothing contains it."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the short form of song titles
    Abbreviate(abbreviate::AbbreviateArgs),

    /// Search a dataset by title or short form
    Search(search::SearchArgs),

    /// Inspect the songs in a dataset
    Catalog(catalog::CatalogArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,

    /// Song dataset (CSV, TSV, or exported catalog JSON)
    #[arg(long, default_value = DEFAULT_DATASET)]
    pub dataset: PathBuf,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
