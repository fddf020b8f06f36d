//! Pipeline stages: extract → transform → load.
//!
//! Each stage reads from where the previous one staged its output, so the
//! stages can also be run individually (and re-run) from the CLI. Per-item
//! failures are logged and counted in the stage report; they never abort the
//! stage.

mod extract;
mod load;
mod transform;

pub use extract::{run_extract, ExtractReport};
pub use load::{run_load, LoadReport};
pub use transform::{run_transform, TransformReport};

use std::path::PathBuf;
use tracing::info;

use crate::error::Result;
use crate::schema::KeywordDict;
use crate::traits::ingestor::{Ingestor, SourceConfig};
use crate::traits::store::JobStore;

/// Configuration shared by all pipeline stages.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Posting source for the extract stage
    pub source: SourceConfig,

    /// Root of the staging area
    pub staging_dir: PathBuf,

    /// Keyword dictionary driving the transform stage
    pub keywords: KeywordDict,
}

impl PipelineConfig {
    /// Create a config with the default keyword dictionary.
    pub fn new(source: SourceConfig, staging_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            staging_dir: staging_dir.into(),
            keywords: KeywordDict::default(),
        }
    }

    /// Replace the keyword dictionary.
    pub fn with_keywords(mut self, keywords: KeywordDict) -> Self {
        self.keywords = keywords;
        self
    }
}

/// Aggregate report of a full pipeline run.
#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    pub extract: ExtractReport,
    pub transform: TransformReport,
    pub load: LoadReport,
}

impl PipelineReport {
    /// Check if every stage finished without per-item failures.
    pub fn is_success(&self) -> bool {
        self.extract.is_success() && self.transform.is_success() && self.load.is_success()
    }
}

/// Run the full pipeline: init schema, then extract → transform → load.
pub async fn run_pipeline<I, S>(
    ingestor: &I,
    store: &S,
    config: &PipelineConfig,
) -> Result<PipelineReport>
where
    I: Ingestor,
    S: JobStore,
{
    store.init_schema().await?;

    let extract = run_extract(ingestor, config).await?;
    let transform = run_transform(config).await?;
    let load = run_load(store, config).await?;

    info!(
        "Pipeline complete: {} postings found, {} transformed, {} loaded",
        extract.postings_found, transform.files_transformed, load.postings_loaded
    );

    Ok(PipelineReport {
        extract,
        transform,
        load,
    })
}
