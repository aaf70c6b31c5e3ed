use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::catalog::store::SongCatalog;
use crate::cli::{OutputFormat, DEFAULT_DATASET};
use crate::core::types::TrackId;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all songs with their short forms
    List {
        /// Song dataset (CSV, TSV, or exported catalog JSON)
        #[arg(long, default_value = DEFAULT_DATASET)]
        dataset: PathBuf,

        /// Only list songs whose title contains this text (case-insensitive)
        #[arg(long)]
        filter: Option<String>,
    },

    /// Show a single song by track ID
    Show {
        /// Track ID
        #[arg(required = true)]
        id: String,

        /// Song dataset (CSV, TSV, or exported catalog JSON)
        #[arg(long, default_value = DEFAULT_DATASET)]
        dataset: PathBuf,
    },

    /// Export the catalog, with generated short forms, to a JSON file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Song dataset (CSV, TSV, or exported catalog JSON)
        #[arg(long, default_value = DEFAULT_DATASET)]
        dataset: PathBuf,
    },
}

/// Execute catalog subcommand
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded, the song is not found,
/// or the export cannot be written.
pub fn run(args: CatalogArgs, format: OutputFormat) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List { dataset, filter } => run_list(dataset, filter.as_deref(), format),
        CatalogCommands::Show { id, dataset } => run_show(&id, dataset, format),
        CatalogCommands::Export { output, dataset } => run_export(output, dataset),
    }
}

#[allow(clippy::needless_pass_by_value)]
fn run_list(dataset: PathBuf, filter: Option<&str>, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = SongCatalog::load_from_file(&dataset)?;

    let filter = filter.map(str::to_lowercase);
    let filtered: Vec<_> = catalog
        .records()
        .iter()
        .filter(|r| {
            filter
                .as_deref()
                .map_or(true, |f| r.title().to_lowercase().contains(f))
        })
        .collect();

    match format {
        OutputFormat::Text => {
            println!("{:<16} {:<50} ID", "Short form", "Title");
            println!("{}", "-".repeat(90));
            for record in &filtered {
                println!(
                    "{:<16} {:<50} {}",
                    truncate(record.short_form(), 16),
                    truncate(record.title(), 50),
                    record.id()
                );
            }
            println!("\nTotal: {} songs", filtered.len());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&filtered)?);
        }
        OutputFormat::Tsv => {
            println!("short_form\ttitle\tid");
            for record in &filtered {
                println!("{}\t{}\t{}", record.short_form(), record.title(), record.id());
            }
        }
    }

    Ok(())
}

#[allow(clippy::needless_pass_by_value)]
fn run_show(id: &str, dataset: PathBuf, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = SongCatalog::load_from_file(&dataset)?;

    let record = catalog
        .get(&TrackId::new(id))
        .ok_or_else(|| anyhow::anyhow!("Song '{}' not found", id))?;

    match format {
        OutputFormat::Text => {
            println!("Title:      {}", record.title());
            println!("Short form: {}", record.short_form());
            println!("ID:         {}", record.id());
            println!("Play:       {}", record.playback_url());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        OutputFormat::Tsv => {
            println!("short_form\ttitle\tid\tlink");
            println!(
                "{}\t{}\t{}\t{}",
                record.short_form(),
                record.title(),
                record.id(),
                record.playback_url()
            );
        }
    }

    Ok(())
}

#[allow(clippy::needless_pass_by_value)]
fn run_export(output: PathBuf, dataset: PathBuf) -> anyhow::Result<()> {
    let catalog = SongCatalog::load_from_file(&dataset)?;

    let json = catalog.to_json()?;
    std::fs::write(&output, json)?;

    println!("Exported {} songs to {}", catalog.len(), output.display());

    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Mine", 10), "Mine");
        assert_eq!(truncate("Love Story (Taylor's Version)", 10), "Love St...");
        assert_eq!(truncate("Café au lait", 7), "Café...");
    }
}
