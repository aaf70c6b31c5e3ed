use clap::Parser;
use tracing_subscriber::EnvFilter;

use taytay::{cli, web};

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("taytay=debug,info")
    } else {
        EnvFilter::new("taytay=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Abbreviate(args) => {
            cli::abbreviate::run(&args, cli.format);
        }
        cli::Commands::Search(args) => {
            cli::search::run(&args, cli.format)?;
        }
        cli::Commands::Catalog(args) => {
            cli::catalog::run(args, cli.format)?;
        }
        cli::Commands::Serve(args) => {
            web::server::run(args)?;
        }
    }

    Ok(())
}
