//! Typed errors for the extraction pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.
//!
//! Note that the field extractor itself has no error path: a keyword that
//! never appears yields an empty string, which callers treat as "unknown",
//! not as failure.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while running pipeline stages.
#[derive(Debug, Error)]
pub enum EtlError {
    /// Ingesting postings from a source failed
    #[error("ingest failed: {0}")]
    Ingest(#[from] IngestError),

    /// Storage operation failed
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Reading or writing a staging file failed
    #[error("staging error at {path}: {source}")]
    Staging {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Filesystem error outside a specific staging file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A transformed staging file did not parse
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Errors that can occur while ingesting postings.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source file does not exist
    #[error("source not found: {path}")]
    MissingSource { path: PathBuf },

    /// Configured column is absent from the source header
    #[error("column not found in source: {column}")]
    MissingColumn { column: String },

    /// CSV parsing failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Reading the source failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, EtlError>;

/// Result type alias for ingest operations.
pub type IngestResult<T> = std::result::Result<T, IngestError>;
