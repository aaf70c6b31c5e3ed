use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::SongCatalog;
use crate::cli::{OutputFormat, DEFAULT_DATASET, EMPTY_QUERY_MARKER};
use crate::core::types::Direction;
use crate::matching::engine::{
    MatchResult, MatchingConfig, MatchingEngine, DEFAULT_MAX_FUZZY_RESULTS,
    DEFAULT_SIMILARITY_THRESHOLD,
};

#[derive(Args)]
pub struct SearchArgs {
    /// Title fragment or short form to look up
    #[arg(required = true, allow_hyphen_values = true)]
    pub query: String,

    /// What the query is: a title (`long`) or a short form (`short`)
    #[arg(short, long, value_enum, default_value = "long-to-short")]
    pub direction: Direction,

    /// Song dataset (CSV, TSV, or exported catalog JSON)
    #[arg(long, default_value = DEFAULT_DATASET)]
    pub dataset: PathBuf,

    /// Minimum similarity (0-1) for fuzzy matches
    #[arg(short, long, default_value_t = DEFAULT_SIMILARITY_THRESHOLD)]
    pub threshold: f64,

    /// Maximum number of fuzzy matches
    #[arg(long, default_value_t = DEFAULT_MAX_FUZZY_RESULTS)]
    pub max_fuzzy: usize,

    /// Show at most this many results
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Execute search subcommand
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded.
pub fn run(args: &SearchArgs, format: OutputFormat) -> anyhow::Result<()> {
    let query = args.query.trim();

    // A blank query never reaches the engine
    if query.is_empty() {
        print_results(EMPTY_QUERY_MARKER, args.direction, &[], format)?;
        return Ok(());
    }

    let catalog = SongCatalog::load_from_file(&args.dataset)?;
    if catalog.is_empty() {
        tracing::warn!("Dataset {} has no songs", args.dataset.display());
    }

    let config = MatchingConfig {
        similarity_threshold: args.threshold,
        max_fuzzy_results: args.max_fuzzy,
    };
    let engine = MatchingEngine::with_config(&catalog, config);

    let mut matches = engine.search(query, args.direction);
    if let Some(limit) = args.limit {
        matches.truncate(limit);
    }

    print_results(query, args.direction, &matches, format)
}

fn print_results(
    query: &str,
    direction: Direction,
    matches: &[MatchResult],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print_text_results(query, direction, matches),
        OutputFormat::Json => print_json_results(query, direction, matches)?,
        OutputFormat::Tsv => print_tsv_results(matches),
    }
    Ok(())
}

fn print_text_results(query: &str, direction: Direction, matches: &[MatchResult]) {
    println!("Query: {query} ({direction})");

    if matches.is_empty() {
        println!("No matches found.");
        return;
    }

    let (primary_label, secondary_label) = match direction {
        Direction::LongToShort => ("Title", "Short form"),
        Direction::ShortToLong => ("Short form", "Title"),
    };

    println!(
        "Found {} match{}:\n",
        matches.len(),
        if matches.len() == 1 { "" } else { "es" }
    );
    for (i, m) in matches.iter().enumerate() {
        println!("#{} [{}]", i + 1, m.kind);
        println!("   {primary_label}: {}", m.primary);
        println!("   {secondary_label}: {}", m.secondary);
        println!("   Play: {}", m.link);
    }
}

fn print_json_results(
    query: &str,
    direction: Direction,
    matches: &[MatchResult],
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "query": query,
        "choice": direction.as_choice(),
        "results": matches,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(matches: &[MatchResult]) {
    println!("primary\tsecondary\tkind\tlink");
    for m in matches {
        println!("{}\t{}\t{}\t{}", m.primary, m.secondary, m.kind, m.link);
    }
}
