//! Transform stage — keyword extraction over staged posting bodies.

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::fields::FieldExtractor;
use crate::pipeline::PipelineConfig;
use crate::staging;

/// Result of a transform stage run.
#[derive(Debug, Clone, Default)]
pub struct TransformReport {
    /// Number of staged bodies found
    pub files_found: usize,

    /// Number of postings transformed and staged as JSON
    pub files_transformed: usize,

    /// Staging stems that failed to read or write
    pub failed: Vec<String>,
}

impl TransformReport {
    /// Check if the stage finished without failures.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Run the field extractor over every staged body and stage the results.
///
/// An unreadable staged file is logged, counted as failed, and skipped; the
/// rest of the stage continues.
pub async fn run_transform(config: &PipelineConfig) -> Result<TransformReport> {
    let extractor = FieldExtractor::new(&config.keywords);
    let paths = staging::list_extracted(&config.staging_dir).await?;

    let mut report = TransformReport {
        files_found: paths.len(),
        ..Default::default()
    };
    info!("Transforming {} staged postings", paths.len());

    for path in paths {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let body = match staging::read_extracted(&path).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                report.failed.push(stem);
                continue;
            }
        };

        let posting = extractor.extract_posting(&body);
        if posting.is_empty() {
            debug!("No keywords matched in {}", path.display());
        }

        match staging::write_transformed(&config.staging_dir, &stem, &posting).await {
            Ok(out) => {
                debug!("Transformed {} to {}", path.display(), out.display());
                report.files_transformed += 1;
            }
            Err(e) => {
                warn!("Failed to write transformed {}: {}", stem, e);
                report.failed.push(stem);
            }
        }
    }

    info!(
        "Transform complete: {} found, {} transformed, {} failed",
        report.files_found,
        report.files_transformed,
        report.failed.len()
    );
    Ok(report)
}
