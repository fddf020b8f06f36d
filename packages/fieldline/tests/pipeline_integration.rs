//! Integration tests for the full extract → transform → load pipeline.

use fieldline::{
    run_pipeline, run_transform, staging, CsvIngestor, JobStore, KeywordDict, MemoryStore,
    PipelineConfig, RecordKind, SourceConfig,
};
use fieldline::testing::{full_posting_body, MockIngestorBuilder};
use std::io::Write;
use std::path::Path;

/// Helper to write a CSV source into a temp directory.
fn write_jobs_csv(dir: &Path, rows: &[&str]) -> std::path::PathBuf {
    let path = dir.join("jobs.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "id,context").unwrap();
    for (i, row) in rows.iter().enumerate() {
        // Quote the cell so bodies can span lines.
        writeln!(file, "{},\"{}\"", i + 1, row.replace('"', "\"\"")).unwrap();
    }
    path
}

fn pipeline_config(dir: &Path, csv: &Path) -> PipelineConfig {
    PipelineConfig::new(SourceConfig::new(csv), dir.join("staging"))
}

#[tokio::test]
async fn test_csv_to_memory_store_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_jobs_csv(
        dir.path(),
        &[
            full_posting_body(),
            "job title: Junior Analyst\nindustry: Finance",
        ],
    );

    let store = MemoryStore::new();
    let config = pipeline_config(dir.path(), &csv);
    let report = run_pipeline(&CsvIngestor::new(), &store, &config)
        .await
        .unwrap();

    assert!(report.is_success());
    assert_eq!(report.extract.postings_found, 2);
    assert_eq!(report.transform.files_transformed, 2);
    assert_eq!(report.load.postings_loaded, 2);
    assert_eq!(store.count_jobs().await.unwrap(), 2);

    let first = store.get_posting(1).await.unwrap().unwrap();
    assert_eq!(first.job.title, "Data Engineer");
    assert_eq!(first.company.name, "Acme Analytics");
    assert_eq!(first.salary.min_value, "52000");
    assert_eq!(first.location.postal_code, "10115");

    let second = store.get_posting(2).await.unwrap().unwrap();
    assert_eq!(second.job.title, "Junior Analyst");
    assert_eq!(second.job.industry, "Finance");
    // Fields the posting never labeled stay unknown.
    assert_eq!(second.company.name, "");
    assert_eq!(second.salary.currency, "");
}

#[tokio::test]
async fn test_empty_source_runs_clean() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_jobs_csv(dir.path(), &[]);

    let store = MemoryStore::new();
    let config = pipeline_config(dir.path(), &csv);
    let report = run_pipeline(&CsvIngestor::new(), &store, &config)
        .await
        .unwrap();

    assert!(report.is_success());
    assert_eq!(report.extract.postings_found, 0);
    assert_eq!(report.load.postings_loaded, 0);
    assert_eq!(store.count_jobs().await.unwrap(), 0);
}

#[tokio::test]
async fn test_missing_column_fails_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jobs.csv");
    std::fs::write(&path, "id,body\n1,text\n").unwrap();

    let store = MemoryStore::new();
    let config = pipeline_config(dir.path(), &path);

    let err = run_pipeline(&CsvIngestor::new(), &store, &config)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("context"));
}

#[tokio::test]
async fn test_stages_run_individually() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockIngestorBuilder::new()
        .posting("job title: Backend Engineer\ncurrency: EUR")
        .build();

    let config = PipelineConfig::new(SourceConfig::new("unused"), dir.path().join("staging"));

    let extract = fieldline::run_extract(&mock, &config).await.unwrap();
    assert_eq!(extract.files_staged, 1);

    let transform = run_transform(&config).await.unwrap();
    assert_eq!(transform.files_transformed, 1);

    let store = MemoryStore::new();
    let load = fieldline::run_load(&store, &config).await.unwrap();
    assert_eq!(load.postings_loaded, 1);

    let posting = store.get_posting(1).await.unwrap().unwrap();
    assert_eq!(posting.job.title, "Backend Engineer");
    assert_eq!(posting.salary.currency, "EUR");
}

#[tokio::test]
async fn test_staged_artifacts_match_original_layout() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_jobs_csv(dir.path(), &["job title: X"]);

    let store = MemoryStore::new();
    let config = pipeline_config(dir.path(), &csv);
    run_pipeline(&CsvIngestor::new(), &store, &config)
        .await
        .unwrap();

    let staging_root = dir.path().join("staging");
    assert!(staging_root.join("extracted/context_1.txt").exists());
    assert!(staging_root.join("transformed/context_1.json").exists());

    let staged = staging::list_transformed(&staging_root).await.unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&staged[0]).unwrap()).unwrap();
    assert_eq!(json["job"]["title"], "X");
}

#[tokio::test]
async fn test_custom_dictionary_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockIngestorBuilder::new()
        .posting("position: Platform Engineer\nemployer: Initech")
        .build();

    let keywords = KeywordDict::empty()
        .with_keyword(RecordKind::Job, "title", "position")
        .with_keyword(RecordKind::Company, "name", "employer");
    let config = PipelineConfig::new(SourceConfig::new("unused"), dir.path().join("staging"))
        .with_keywords(keywords);

    let store = MemoryStore::new();
    run_pipeline(&mock, &store, &config).await.unwrap();

    let posting = store.get_posting(1).await.unwrap().unwrap();
    assert_eq!(posting.job.title, "Platform Engineer");
    assert_eq!(posting.company.name, "Initech");
}

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::*;
    use fieldline::SqliteStore;

    #[tokio::test]
    async fn test_csv_to_sqlite_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let csv = write_jobs_csv(dir.path(), &[full_posting_body()]);

        let store = SqliteStore::in_memory().await.unwrap();
        let config = pipeline_config(dir.path(), &csv);
        let report = run_pipeline(&CsvIngestor::new(), &store, &config)
            .await
            .unwrap();

        assert!(report.is_success());
        assert_eq!(store.count_jobs().await.unwrap(), 1);

        let posting = store.get_posting(1).await.unwrap().unwrap();
        assert_eq!(posting.job.title, "Data Engineer");
        assert_eq!(posting.experience.months_of_experience, "24");
        assert_eq!(posting.location.latitude, "52.53");
    }

    #[tokio::test]
    async fn test_rerunning_load_appends_rows() {
        let dir = tempfile::tempdir().unwrap();
        let csv = write_jobs_csv(dir.path(), &["job title: X"]);

        let store = SqliteStore::in_memory().await.unwrap();
        let config = pipeline_config(dir.path(), &csv);

        run_pipeline(&CsvIngestor::new(), &store, &config)
            .await
            .unwrap();
        fieldline::run_load(&store, &config).await.unwrap();

        // Load is append-only, matching autoincrement ids.
        assert_eq!(store.count_jobs().await.unwrap(), 2);
    }
}
