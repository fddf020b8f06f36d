//! Load stage — insert transformed postings into the store.

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::pipeline::PipelineConfig;
use crate::staging;
use crate::traits::store::JobStore;

/// Result of a load stage run.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Number of transformed files found
    pub files_found: usize,

    /// Number of postings inserted
    pub postings_loaded: usize,

    /// Staging stems that failed to parse or insert
    pub failed: Vec<String>,
}

impl LoadReport {
    /// Check if the stage finished without failures.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Insert every transformed posting into the store.
///
/// Each posting is one insert call (job row plus its five child rows);
/// failures are logged and counted, and the rest of the stage continues.
pub async fn run_load<S: JobStore>(store: &S, config: &PipelineConfig) -> Result<LoadReport> {
    let paths = staging::list_transformed(&config.staging_dir).await?;

    let mut report = LoadReport {
        files_found: paths.len(),
        ..Default::default()
    };
    info!("Loading {} transformed postings", paths.len());

    for path in paths {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let posting = match staging::read_transformed(&path).await {
            Ok(posting) => posting,
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                report.failed.push(stem);
                continue;
            }
        };

        match store.insert_posting(&posting).await {
            Ok(job_id) => {
                debug!("Loaded {} as job {}", stem, job_id);
                report.postings_loaded += 1;
            }
            Err(e) => {
                warn!("Failed to insert {}: {}", stem, e);
                report.failed.push(stem);
            }
        }
    }

    info!(
        "Load complete: {} found, {} loaded, {} failed",
        report.files_found,
        report.postings_loaded,
        report.failed.len()
    );
    Ok(report)
}
