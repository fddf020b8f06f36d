//! Keyword-Driven Job Posting Extraction
//!
//! Pulls semi-structured job posting text out of a source (a CSV column),
//! locates labeled fields with keyword patterns, and loads the results into
//! a six-table relational schema (job, company, education, experience,
//! salary, location).
//!
//! # Design Philosophy
//!
//! - Absence is a value: a keyword that never appears yields an empty
//!   string, never an error
//! - The extractor is a pure function of `(text, keyword)`; everything
//!   around it is staging and bookkeeping
//! - The keyword dictionary is static configuration, built once
//! - Sources and stores are trait seams, so tests run against mocks and
//!   memory
//!
//! # Usage
//!
//! ```rust,ignore
//! use fieldline::{run_pipeline, CsvIngestor, PipelineConfig, SourceConfig, SqliteStore};
//!
//! let ingestor = CsvIngestor::new();
//! let store = SqliteStore::new("sqlite:jobs.db?mode=rwc").await?;
//! let config = PipelineConfig::new(SourceConfig::new("data/jobs.csv"), "staging");
//!
//! let report = run_pipeline(&ingestor, &store, &config).await?;
//! assert!(report.is_success());
//! ```
//!
//! # Modules
//!
//! - [`fields`] - The keyword-pattern field extractor
//! - [`schema`] - Record kinds and the keyword dictionary
//! - [`types`] - Raw postings and transformed records
//! - [`traits`] - Core trait abstractions (Ingestor, JobStore)
//! - [`ingestors`] - Posting sources (CSV, mock)
//! - [`staging`] - On-disk handoff between stages
//! - [`pipeline`] - Extract, transform, and load stages
//! - [`stores`] - Storage implementations (MemoryStore, SqliteStore)
//! - [`testing`] - Fixtures for tests

pub mod error;
pub mod fields;
pub mod ingestors;
pub mod pipeline;
pub mod schema;
pub mod staging;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{EtlError, IngestError, IngestResult, Result};
pub use fields::{FieldExtractor, FieldPattern};
pub use schema::{KeywordDict, RecordKind};
pub use traits::{
    ingestor::{Ingestor, SourceConfig},
    store::JobStore,
};
pub use types::{
    posting::RawPosting,
    record::{
        CompanyFields, EducationFields, ExperienceFields, JobFields, JobPosting, LocationFields,
        SalaryFields,
    },
};

// Re-export pipeline stages
pub use pipeline::{
    run_extract, run_load, run_pipeline, run_transform, ExtractReport, LoadReport, PipelineConfig,
    PipelineReport, TransformReport,
};

// Re-export ingestors
pub use ingestors::{CsvIngestor, MockIngestor};

// Re-export stores
pub use stores::MemoryStore;

#[cfg(feature = "sqlite")]
pub use stores::SqliteStore;
