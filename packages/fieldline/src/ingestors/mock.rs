//! Mock ingestor for testing.
//!
//! Provides a configurable mock implementation of the Ingestor trait.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::error::IngestResult;
use crate::traits::ingestor::{Ingestor, SourceConfig};
use crate::types::posting::RawPosting;

/// Mock ingestor for testing.
///
/// Returns canned postings and records the sources it was asked for.
///
/// # Example
///
/// ```rust
/// use fieldline::ingestors::MockIngestorBuilder;
///
/// let mock = MockIngestorBuilder::new()
///     .posting("job title: Engineer")
///     .posting("job title: Analyst")
///     .build();
/// ```
#[derive(Default)]
pub struct MockIngestor {
    /// Canned postings returned by fetch
    postings: Arc<RwLock<Vec<RawPosting>>>,
    /// Sources requested, for verification
    fetch_calls: Arc<RwLock<Vec<String>>>,
}

impl MockIngestor {
    /// Create a new empty mock ingestor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a posting that will be returned by fetch.
    pub fn add_posting(&self, posting: RawPosting) {
        self.postings.write().unwrap().push(posting);
    }

    /// Add a posting body; source and ordinal are filled in.
    pub fn add_body(&self, body: impl Into<String>) {
        let ordinal = self.postings.read().unwrap().len() + 1;
        self.add_posting(RawPosting::new("mock", ordinal, body));
    }

    /// Get the number of times fetch was called.
    pub fn fetch_call_count(&self) -> usize {
        self.fetch_calls.read().unwrap().len()
    }

    /// Get the sources that were requested.
    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.read().unwrap().clone()
    }

    /// Clear all postings and recorded calls.
    pub fn reset(&self) {
        self.postings.write().unwrap().clear();
        self.fetch_calls.write().unwrap().clear();
    }
}

impl Clone for MockIngestor {
    fn clone(&self) -> Self {
        Self {
            postings: Arc::clone(&self.postings),
            fetch_calls: Arc::clone(&self.fetch_calls),
        }
    }
}

#[async_trait]
impl Ingestor for MockIngestor {
    async fn fetch(&self, config: &SourceConfig) -> IngestResult<Vec<RawPosting>> {
        self.fetch_calls
            .write()
            .unwrap()
            .push(config.path.display().to_string());

        let postings = self.postings.read().unwrap();
        let limit = config.limit.unwrap_or(usize::MAX);
        Ok(postings.iter().take(limit).cloned().collect())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Builder for creating test scenarios with the mock ingestor.
pub struct MockIngestorBuilder {
    mock: MockIngestor,
}

impl MockIngestorBuilder {
    /// Start building a mock ingestor.
    pub fn new() -> Self {
        Self {
            mock: MockIngestor::new(),
        }
    }

    /// Add a posting with just a body.
    pub fn posting(self, body: &str) -> Self {
        self.mock.add_body(body);
        self
    }

    /// Build the mock ingestor.
    pub fn build(self) -> MockIngestor {
        self.mock
    }
}

impl Default for MockIngestorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
