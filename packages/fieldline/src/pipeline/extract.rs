//! Extract stage — pull posting bodies from the source into staging.

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::pipeline::PipelineConfig;
use crate::staging;
use crate::traits::ingestor::Ingestor;

/// Result of an extract stage run.
#[derive(Debug, Clone, Default)]
pub struct ExtractReport {
    /// Number of postings the source yielded
    pub postings_found: usize,

    /// Number of posting bodies staged to disk
    pub files_staged: usize,

    /// Staging stems that failed to write
    pub failed: Vec<String>,
}

impl ExtractReport {
    /// Check if the stage finished without failures.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Fetch postings from the source and stage each body as a text file.
///
/// An empty source is a successful run that stages nothing, not an error.
pub async fn run_extract<I: Ingestor>(
    ingestor: &I,
    config: &PipelineConfig,
) -> Result<ExtractReport> {
    info!(
        "Fetching postings from {} via {} ingestor",
        config.source.path.display(),
        ingestor.name()
    );

    let postings = ingestor.fetch(&config.source).await?;
    let mut report = ExtractReport {
        postings_found: postings.len(),
        ..Default::default()
    };

    if postings.is_empty() {
        warn!(
            "No postings found in {}; nothing staged",
            config.source.path.display()
        );
        return Ok(report);
    }

    for posting in &postings {
        match staging::write_extracted(&config.staging_dir, posting).await {
            Ok(path) => {
                debug!("Staged posting {} to {}", posting.ordinal, path.display());
                report.files_staged += 1;
            }
            Err(e) => {
                warn!("Failed to stage posting {}: {}", posting.ordinal, e);
                report.failed.push(posting.staging_stem());
            }
        }
    }

    info!(
        "Extract complete: {} postings found, {} staged, {} failed",
        report.postings_found,
        report.files_staged,
        report.failed.len()
    );
    Ok(report)
}
