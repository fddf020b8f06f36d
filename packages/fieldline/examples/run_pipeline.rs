//! Run the full pipeline against canned postings and a memory store.
//!
//! ```sh
//! cargo run --example run_pipeline
//! ```

use fieldline::testing::MockIngestorBuilder;
use fieldline::{run_pipeline, JobStore, MemoryStore, PipelineConfig, SourceConfig};

#[tokio::main]
async fn main() -> fieldline::Result<()> {
    tracing_subscriber::fmt().init();

    let ingestor = MockIngestorBuilder::new()
        .posting("job title: Data Engineer\nindustry: Tech\ncompany name: Acme\ncurrency: USD")
        .posting("job title: Analyst\nseniority level: Junior")
        .build();

    let staging = tempfile::tempdir().expect("temp staging dir");
    let store = MemoryStore::new();
    let config = PipelineConfig::new(SourceConfig::new("canned"), staging.path());

    let report = run_pipeline(&ingestor, &store, &config).await?;
    println!(
        "loaded {} of {} postings",
        report.load.postings_loaded, report.extract.postings_found
    );

    for job_id in 1..=store.count_jobs().await? as i64 {
        if let Some(posting) = store.get_posting(job_id).await? {
            println!("job {}: {:?} ({})", job_id, posting.job.title, posting.job.industry);
        }
    }

    Ok(())
}
