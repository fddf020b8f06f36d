//! `etl` — run the job posting extraction pipeline from the command line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use fieldline::{
    run_extract, run_load, run_pipeline, run_transform, CsvIngestor, JobStore, PipelineConfig,
    SourceConfig, SqliteStore,
};

mod config;
use config::Config;

#[derive(Parser)]
#[command(name = "etl", about = "Keyword-driven job posting ETL", version)]
struct Cli {
    /// Override the source CSV path from the environment
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the schema, then extract, transform, and load in order
    Run,
    /// Stage posting bodies out of the source CSV
    Extract,
    /// Apply keyword extraction to staged postings
    Transform,
    /// Insert transformed postings into the database
    Load,
    /// Create the relational schema and exit
    InitDb,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let source_path = cli.source.unwrap_or_else(|| config.jobs_csv_path.clone());
    let pipeline = PipelineConfig::new(SourceConfig::new(source_path), &config.staging_dir)
        .with_keywords(config.keyword_dict()?);

    match cli.command {
        Command::Run => {
            let store = SqliteStore::new(&config.database_url).await?;
            let report = run_pipeline(&CsvIngestor::new(), &store, &pipeline).await?;
            if !report.is_success() {
                warn!(
                    "Pipeline finished with failures: extract {:?}, transform {:?}, load {:?}",
                    report.extract.failed, report.transform.failed, report.load.failed
                );
                anyhow::bail!("pipeline finished with failures");
            }
        }
        Command::Extract => {
            run_extract(&CsvIngestor::new(), &pipeline).await?;
        }
        Command::Transform => {
            run_transform(&pipeline).await?;
        }
        Command::Load => {
            let store = SqliteStore::new(&config.database_url).await?;
            store.init_schema().await?;
            run_load(&store, &pipeline).await?;
        }
        Command::InitDb => {
            let store = SqliteStore::new(&config.database_url).await?;
            store.init_schema().await?;
        }
    }

    Ok(())
}
