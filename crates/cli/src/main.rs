use crate::{env::EnvManager, error::CliError};
use clap::Parser;
use connectors::postgres::{
    adapter::PgAdapter, sink::PgProcessedSink, source::PgBookSource,
};
use engine::{runner::EtlRunner, settings::EtlSettings};
use std::{path::Path, sync::Arc};
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod config;
mod env;
mod error;
mod output;

const ENV_FILE: &str = ".env";

#[derive(Parser)]
#[command(name = "bookflow", version = "0.1.0", about = "Incremental books ETL")]
struct Cli {
    /// Inclusive lower bound on `last_updated`, in YYYY-MM-DD form
    cutoff_date: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Wrong arity is a usage error: usage message on stdout, exit code 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if matches!(
                err.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) =>
        {
            let _ = err.print();
            std::process::exit(0);
        }
        Err(_) => {
            println!("Usage: bookflow YYYY-MM-DD");
            println!("Example: bookflow 2025-01-01");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(cli).await {
        eprintln!("ETL failed: {err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let cutoff = config::parse_cutoff(&cli.cutoff_date)?;

    let mut env = EnvManager::new();
    if Path::new(ENV_FILE).exists() {
        env.load_from_file(ENV_FILE)?;
    } else {
        warn!("No .env file found in the working directory, relying on the process environment");
    }
    let settings = config::pg_settings(&env)?;

    let adapter = PgAdapter::connect(&settings).await?;
    let etl_settings = EtlSettings::default();
    let extractor = Arc::new(PgBookSource::new(adapter.clone()));
    let loader = Arc::new(PgProcessedSink::new(adapter, etl_settings.batch_size));

    let runner = EtlRunner::new(extractor, loader, &etl_settings);
    let summary = runner.run(cutoff).await?;
    output::print_summary(&summary);

    Ok(())
}
