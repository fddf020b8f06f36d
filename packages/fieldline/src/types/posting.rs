//! Raw posting bodies before transformation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One unprocessed posting body as pulled from a source.
///
/// This is the output of Ingestors — free text that hasn't been through
/// keyword extraction yet. It is staged to disk and then processed by the
/// transform stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPosting {
    /// Identifier of the source the posting came from (file path, feed URL)
    pub source: String,

    /// 1-based position of the posting within its source
    pub ordinal: usize,

    /// Free-form posting text
    pub body: String,

    /// When the posting was read from the source
    pub fetched_at: DateTime<Utc>,

    /// Source-specific metadata
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl RawPosting {
    /// Create a new raw posting with minimal fields.
    pub fn new(source: impl Into<String>, ordinal: usize, body: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ordinal,
            body: body.into(),
            fetched_at: Utc::now(),
            metadata: HashMap::new(),
        }
    }

    /// Set the fetched timestamp.
    pub fn with_fetched_at(mut self, fetched_at: DateTime<Utc>) -> Self {
        self.fetched_at = fetched_at;
        self
    }

    /// Add a metadata key-value pair.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Check if this posting has any text.
    pub fn has_body(&self) -> bool {
        !self.body.trim().is_empty()
    }

    /// File stem used for this posting's staging files (`context_<ordinal>`).
    pub fn staging_stem(&self) -> String {
        format!("context_{}", self.ordinal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posting_builder() {
        let posting = RawPosting::new("jobs.csv", 3, "job title: X")
            .with_metadata("column", "context");

        assert_eq!(posting.source, "jobs.csv");
        assert_eq!(posting.ordinal, 3);
        assert_eq!(posting.staging_stem(), "context_3");
        assert_eq!(posting.metadata.get("column"), Some(&"context".to_string()));
        assert!(posting.has_body());
    }

    #[test]
    fn test_blank_body_detection() {
        assert!(!RawPosting::new("jobs.csv", 1, "   \n ").has_body());
        assert!(RawPosting::new("jobs.csv", 1, "text").has_body());
    }
}
