use anyhow::{Context, Result};
use dotenvy::dotenv;
use fieldline::KeywordDict;
use std::env;
use std::path::PathBuf;

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub jobs_csv_path: PathBuf,
    pub staging_dir: PathBuf,
    pub database_url: String,
    pub keywords_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            jobs_csv_path: env::var("JOBS_CSV_PATH")
                .unwrap_or_else(|_| "data/jobs.csv".to_string())
                .into(),
            staging_dir: env::var("STAGING_DIR")
                .unwrap_or_else(|_| "staging".to_string())
                .into(),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:jobs.db?mode=rwc".to_string()),
            keywords_path: env::var("KEYWORDS_PATH").ok().map(PathBuf::from),
        })
    }

    /// The keyword dictionary: a JSON file if configured, stock otherwise.
    pub fn keyword_dict(&self) -> Result<KeywordDict> {
        match &self.keywords_path {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read keywords from {}", path.display()))?;
                serde_json::from_str(&json)
                    .with_context(|| format!("invalid keyword dictionary in {}", path.display()))
            }
            None => Ok(KeywordDict::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldline::RecordKind;
    use std::io::Write;

    #[test]
    fn test_keyword_dict_defaults_to_stock() {
        let config = Config {
            jobs_csv_path: "jobs.csv".into(),
            staging_dir: "staging".into(),
            database_url: "sqlite::memory:".into(),
            keywords_path: None,
        };

        let dict = config.keyword_dict().unwrap();
        assert_eq!(dict.keyword(RecordKind::Job, "title"), Some("job title"));
    }

    #[test]
    fn test_keyword_dict_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"job": {{"title": "position"}}}}"#).unwrap();
        file.flush().unwrap();

        let config = Config {
            jobs_csv_path: "jobs.csv".into(),
            staging_dir: "staging".into(),
            database_url: "sqlite::memory:".into(),
            keywords_path: Some(file.path().to_path_buf()),
        };

        let dict = config.keyword_dict().unwrap();
        assert_eq!(dict.keyword(RecordKind::Job, "title"), Some("position"));
    }
}
