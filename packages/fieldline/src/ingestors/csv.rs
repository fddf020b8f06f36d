//! CSV ingestor: posting bodies from one column of a CSV export.

use async_trait::async_trait;

use crate::error::{IngestError, IngestResult};
use crate::traits::ingestor::{Ingestor, SourceConfig};
use crate::types::posting::RawPosting;

/// Reads posting bodies from the configured column of a CSV file.
///
/// The file must carry a header row naming the column. Quoted multi-line
/// cells are supported, so posting bodies may span many lines. Rows with a
/// blank body are dropped, matching "absence is unknown, not an error".
#[derive(Debug, Clone, Default)]
pub struct CsvIngestor;

impl CsvIngestor {
    /// Create a new CSV ingestor.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Ingestor for CsvIngestor {
    async fn fetch(&self, config: &SourceConfig) -> IngestResult<Vec<RawPosting>> {
        if !config.path.exists() {
            return Err(IngestError::MissingSource {
                path: config.path.clone(),
            });
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&config.path)?;

        let column_index = reader
            .headers()?
            .iter()
            .position(|header| header == config.column)
            .ok_or_else(|| IngestError::MissingColumn {
                column: config.column.clone(),
            })?;

        let source = config.path.display().to_string();
        let mut postings = Vec::new();

        for record in reader.records() {
            let record = record?;
            // Short rows simply have no body in this column.
            let body = record.get(column_index).unwrap_or("");
            if body.trim().is_empty() {
                continue;
            }

            postings.push(
                RawPosting::new(&source, postings.len() + 1, body)
                    .with_metadata("column", &config.column),
            );

            if config.limit.is_some_and(|limit| postings.len() >= limit) {
                break;
            }
        }

        Ok(postings)
    }

    fn name(&self) -> &str {
        "csv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn test_reads_context_column() {
        let file = write_csv("id,context\n1,job title: A\n2,job title: B\n");
        let config = SourceConfig::new(file.path());

        let postings = CsvIngestor::new().fetch(&config).await.unwrap();

        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0].body, "job title: A");
        assert_eq!(postings[0].ordinal, 1);
        assert_eq!(postings[1].ordinal, 2);
    }

    #[tokio::test]
    async fn test_multi_line_quoted_bodies() {
        let file = write_csv("id,context\n1,\"job title: A\nindustry: Tech\"\n");
        let config = SourceConfig::new(file.path());

        let postings = CsvIngestor::new().fetch(&config).await.unwrap();

        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].body, "job title: A\nindustry: Tech");
    }

    #[tokio::test]
    async fn test_blank_rows_dropped_and_ordinals_stay_dense() {
        let file = write_csv("id,context\n1,first\n2,\n3,   \n4,fourth\n");
        let config = SourceConfig::new(file.path());

        let postings = CsvIngestor::new().fetch(&config).await.unwrap();

        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0].body, "first");
        assert_eq!(postings[1].body, "fourth");
        assert_eq!(postings[1].ordinal, 2);
    }

    #[tokio::test]
    async fn test_header_only_source_is_empty_not_error() {
        let file = write_csv("id,context\n");
        let config = SourceConfig::new(file.path());

        let postings = CsvIngestor::new().fetch(&config).await.unwrap();
        assert!(postings.is_empty());
    }

    #[tokio::test]
    async fn test_missing_column() {
        let file = write_csv("id,body\n1,text\n");
        let config = SourceConfig::new(file.path());

        let err = CsvIngestor::new().fetch(&config).await.unwrap_err();
        assert!(matches!(err, IngestError::MissingColumn { column } if column == "context"));
    }

    #[tokio::test]
    async fn test_missing_source() {
        let config = SourceConfig::new("/nonexistent/jobs.csv");

        let err = CsvIngestor::new().fetch(&config).await.unwrap_err();
        assert!(matches!(err, IngestError::MissingSource { .. }));
    }

    #[tokio::test]
    async fn test_limit_respected() {
        let file = write_csv("id,context\n1,a\n2,b\n3,c\n");
        let config = SourceConfig::new(file.path()).with_limit(2);

        let postings = CsvIngestor::new().fetch(&config).await.unwrap();
        assert_eq!(postings.len(), 2);
    }
}
