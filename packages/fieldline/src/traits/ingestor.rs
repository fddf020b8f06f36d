//! Ingestor trait for pluggable posting sources.
//!
//! An Ingestor pulls raw posting bodies out of a source — a CSV export, a
//! feed, a directory of files — into the pipeline. The extract stage stages
//! whatever the ingestor returns; everything downstream is source-agnostic.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::error::IngestResult;
use crate::types::posting::RawPosting;

/// Configuration for a posting source.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Path or identifier of the source
    pub path: PathBuf,

    /// Column (or field) holding the posting body
    pub column: String,

    /// Maximum number of postings to ingest (None = all)
    pub limit: Option<usize>,
}

impl SourceConfig {
    /// Create a config for a source path with the default `context` column.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            column: "context".to_string(),
            limit: None,
        }
    }

    /// Set the column holding posting bodies.
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    /// Cap the number of postings ingested.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The source path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Ingestor trait for pluggable posting sources.
///
/// Implementations:
/// - [`CsvIngestor`](crate::ingestors::CsvIngestor) — posting bodies from a
///   CSV column
/// - [`MockIngestor`](crate::ingestors::MockIngestor) — canned postings for
///   tests
#[async_trait]
pub trait Ingestor: Send + Sync {
    /// Fetch raw postings from the source.
    ///
    /// Blank bodies are dropped; an empty result is not an error (the source
    /// may legitimately hold nothing yet).
    async fn fetch(&self, config: &SourceConfig) -> IngestResult<Vec<RawPosting>>;

    /// Get the ingestor name (for logging/debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}
