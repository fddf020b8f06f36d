//! Staging files handed between pipeline stages.
//!
//! The extract stage writes each posting body to
//! `<staging>/extracted/context_<n>.txt`; the transform stage writes each
//! [`JobPosting`] to `<staging>/transformed/context_<n>.json`. Directories
//! are created on demand, and a missing directory lists as empty — the prior
//! stage may legitimately have had nothing to stage.

use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::{EtlError, Result};
use crate::types::posting::RawPosting;
use crate::types::record::JobPosting;

const EXTRACTED_DIR: &str = "extracted";
const TRANSFORMED_DIR: &str = "transformed";

/// Directory holding staged posting bodies.
pub fn extracted_dir(root: &Path) -> PathBuf {
    root.join(EXTRACTED_DIR)
}

/// Directory holding transformed postings.
pub fn transformed_dir(root: &Path) -> PathBuf {
    root.join(TRANSFORMED_DIR)
}

fn staging_error(path: &Path, source: std::io::Error) -> EtlError {
    EtlError::Staging {
        path: path.to_path_buf(),
        source,
    }
}

/// Write one posting body to the extracted stage.
pub async fn write_extracted(root: &Path, posting: &RawPosting) -> Result<PathBuf> {
    let dir = extracted_dir(root);
    fs::create_dir_all(&dir)
        .await
        .map_err(|e| staging_error(&dir, e))?;

    let path = dir.join(format!("{}.txt", posting.staging_stem()));
    fs::write(&path, &posting.body)
        .await
        .map_err(|e| staging_error(&path, e))?;
    Ok(path)
}

/// Write one transformed posting next to its source stem.
pub async fn write_transformed(root: &Path, stem: &str, posting: &JobPosting) -> Result<PathBuf> {
    let dir = transformed_dir(root);
    fs::create_dir_all(&dir)
        .await
        .map_err(|e| staging_error(&dir, e))?;

    let json = serde_json::to_string_pretty(posting)?;
    let path = dir.join(format!("{stem}.json"));
    fs::write(&path, json)
        .await
        .map_err(|e| staging_error(&path, e))?;
    Ok(path)
}

/// List staged posting bodies, in ordinal order.
pub async fn list_extracted(root: &Path) -> Result<Vec<PathBuf>> {
    list_with_extension(&extracted_dir(root), "txt").await
}

/// List transformed postings, in ordinal order.
pub async fn list_transformed(root: &Path) -> Result<Vec<PathBuf>> {
    list_with_extension(&transformed_dir(root), "json").await
}

/// Read one staged posting body.
pub async fn read_extracted(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| staging_error(path, e))
}

/// Read one transformed posting.
pub async fn read_transformed(path: &Path) -> Result<JobPosting> {
    let json = fs::read_to_string(path)
        .await
        .map_err(|e| staging_error(path, e))?;
    Ok(serde_json::from_str(&json)?)
}

async fn list_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut entries = fs::read_dir(dir).await.map_err(|e| staging_error(dir, e))?;
    let mut paths = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| staging_error(dir, e))?
    {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) == Some(extension) {
            paths.push(path);
        }
    }

    // Shorter names first so context_2 sorts before context_10.
    paths.sort_by(|a, b| {
        let (a, b) = (a.as_os_str(), b.as_os_str());
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    });
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_extracted_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let posting = RawPosting::new("jobs.csv", 1, "job title: X");

        let path = write_extracted(dir.path(), &posting).await.unwrap();
        assert!(path.ends_with("extracted/context_1.txt"));

        let listed = list_extracted(dir.path()).await.unwrap();
        assert_eq!(listed, vec![path.clone()]);
        assert_eq!(read_extracted(&path).await.unwrap(), "job title: X");
    }

    #[tokio::test]
    async fn test_transformed_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut posting = JobPosting::default();
        posting.job.title = "Engineer".to_string();

        let path = write_transformed(dir.path(), "context_1", &posting)
            .await
            .unwrap();
        assert!(path.ends_with("transformed/context_1.json"));

        let read_back = read_transformed(&path).await.unwrap();
        assert_eq!(read_back, posting);
    }

    #[tokio::test]
    async fn test_missing_directory_lists_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_extracted(dir.path()).await.unwrap().is_empty());
        assert!(list_transformed(dir.path()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_listing_is_in_ordinal_order() {
        let dir = tempfile::tempdir().unwrap();
        for ordinal in [10, 2, 1] {
            let posting = RawPosting::new("jobs.csv", ordinal, "text");
            write_extracted(dir.path(), &posting).await.unwrap();
        }

        let names: Vec<String> = list_extracted(dir.path())
            .await
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["context_1.txt", "context_2.txt", "context_10.txt"]);
    }

    #[tokio::test]
    async fn test_listing_skips_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let posting = RawPosting::new("jobs.csv", 1, "text");
        write_extracted(dir.path(), &posting).await.unwrap();

        let stray = extracted_dir(dir.path()).join("notes.json");
        fs::write(&stray, "{}").await.unwrap();

        assert_eq!(list_extracted(dir.path()).await.unwrap().len(), 1);
    }
}
