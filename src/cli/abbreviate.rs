use clap::Args;

use crate::abbreviation::abbreviate;
use crate::cli::OutputFormat;

#[derive(Args)]
pub struct AbbreviateArgs {
    /// Song titles to abbreviate
    #[arg(required = true)]
    pub titles: Vec<String>,
}

/// Execute abbreviate subcommand
pub fn run(args: &AbbreviateArgs, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            for title in &args.titles {
                println!("{}", abbreviate(title));
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = args
                .titles
                .iter()
                .map(|title| {
                    serde_json::json!({
                        "title": title,
                        "short_form": abbreviate(title),
                    })
                })
                .collect();
            println!("{}", serde_json::Value::Array(output));
        }
        OutputFormat::Tsv => {
            println!("title\tshort_form");
            for title in &args.titles {
                println!("{}\t{}", title, abbreviate(title));
            }
        }
    }
}
