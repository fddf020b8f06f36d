//! SQLite storage implementation.
//!
//! A file-based storage backend using SQLite. Good for:
//! - Local development
//! - Single-server deployments
//! - Testing with persistent data
//!
//! The schema is the six-table relational layout: a `job` table with an
//! autoincrement primary key, and five child tables keyed to it by `job_id`.

use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;

use crate::error::{EtlError, Result};
use crate::traits::store::JobStore;
use crate::types::record::{
    CompanyFields, EducationFields, ExperienceFields, JobFields, JobPosting, LocationFields,
    SalaryFields,
};

/// SQLite-based posting store.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Create a new SQLite store with the given connection URL.
    ///
    /// # Example URLs
    /// - `sqlite::memory:` - In-memory database (ephemeral)
    /// - `sqlite:./jobs.db?mode=rwc` - File database, created if absent
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .map_err(|e| EtlError::Storage(e.to_string().into()))?;

        Ok(Self { pool })
    }

    /// Create an in-memory SQLite store (for testing).
    ///
    /// A single connection, since every `sqlite::memory:` connection is its
    /// own database.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| EtlError::Storage(e.to_string().into()))?;

        Ok(Self { pool })
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

// Row types for sqlx queries. Numeric-affinity columns are CAST to TEXT on
// the way out: unknown values are stored as empty strings, which SQLite
// keeps as TEXT even in NUMERIC columns.
#[derive(Debug, FromRow)]
struct JobRow {
    title: String,
    industry: String,
    description: String,
    employment_type: String,
    date_posted: String,
}

#[derive(Debug, FromRow)]
struct CompanyRow {
    name: String,
    link: String,
}

#[derive(Debug, FromRow)]
struct EducationRow {
    required_credential: String,
}

#[derive(Debug, FromRow)]
struct ExperienceRow {
    months_of_experience: String,
    seniority_level: String,
}

#[derive(Debug, FromRow)]
struct SalaryRow {
    currency: String,
    min_value: String,
    max_value: String,
    unit: String,
}

#[derive(Debug, FromRow)]
struct LocationRow {
    country: String,
    locality: String,
    region: String,
    postal_code: String,
    street_address: String,
    latitude: String,
    longitude: String,
}

#[async_trait]
impl JobStore for SqliteStore {
    async fn init_schema(&self) -> Result<()> {
        let tables = [
            r#"
            CREATE TABLE IF NOT EXISTS job (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title VARCHAR(225),
                industry VARCHAR(225),
                description TEXT,
                employment_type VARCHAR(125),
                date_posted DATE
            );
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS company (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                job_id INTEGER,
                name VARCHAR(225),
                link TEXT,
                FOREIGN KEY (job_id) REFERENCES job(id)
            );
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS education (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                job_id INTEGER,
                required_credential VARCHAR(225),
                FOREIGN KEY (job_id) REFERENCES job(id)
            );
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS experience (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                job_id INTEGER,
                months_of_experience INTEGER,
                seniority_level VARCHAR(25),
                FOREIGN KEY (job_id) REFERENCES job(id)
            );
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS salary (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                job_id INTEGER,
                currency VARCHAR(3),
                min_value NUMERIC,
                max_value NUMERIC,
                unit VARCHAR(12),
                FOREIGN KEY (job_id) REFERENCES job(id)
            );
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS location (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                job_id INTEGER,
                country VARCHAR(60),
                locality VARCHAR(60),
                region VARCHAR(60),
                postal_code VARCHAR(25),
                street_address VARCHAR(225),
                latitude NUMERIC,
                longitude NUMERIC,
                FOREIGN KEY (job_id) REFERENCES job(id)
            );
            "#,
        ];

        for table in tables {
            sqlx::query(table)
                .execute(&self.pool)
                .await
                .map_err(|e| EtlError::Storage(e.to_string().into()))?;
        }

        Ok(())
    }

    async fn insert_posting(&self, posting: &JobPosting) -> Result<i64> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| EtlError::Storage(e.to_string().into()))?;

        let job_id = sqlx::query(
            r#"
            INSERT INTO job (title, industry, description, employment_type, date_posted)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&posting.job.title)
        .bind(&posting.job.industry)
        .bind(&posting.job.description)
        .bind(&posting.job.employment_type)
        .bind(&posting.job.date_posted)
        .execute(&mut *tx)
        .await
        .map_err(|e| EtlError::Storage(e.to_string().into()))?
        .last_insert_rowid();

        sqlx::query("INSERT INTO company (job_id, name, link) VALUES (?, ?, ?)")
            .bind(job_id)
            .bind(&posting.company.name)
            .bind(&posting.company.link)
            .execute(&mut *tx)
            .await
            .map_err(|e| EtlError::Storage(e.to_string().into()))?;

        sqlx::query("INSERT INTO education (job_id, required_credential) VALUES (?, ?)")
            .bind(job_id)
            .bind(&posting.education.required_credential)
            .execute(&mut *tx)
            .await
            .map_err(|e| EtlError::Storage(e.to_string().into()))?;

        sqlx::query(
            r#"
            INSERT INTO experience (job_id, months_of_experience, seniority_level)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(job_id)
        .bind(&posting.experience.months_of_experience)
        .bind(&posting.experience.seniority_level)
        .execute(&mut *tx)
        .await
        .map_err(|e| EtlError::Storage(e.to_string().into()))?;

        sqlx::query(
            r#"
            INSERT INTO salary (job_id, currency, min_value, max_value, unit)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(job_id)
        .bind(&posting.salary.currency)
        .bind(&posting.salary.min_value)
        .bind(&posting.salary.max_value)
        .bind(&posting.salary.unit)
        .execute(&mut *tx)
        .await
        .map_err(|e| EtlError::Storage(e.to_string().into()))?;

        sqlx::query(
            r#"
            INSERT INTO location
                (job_id, country, locality, region, postal_code, street_address, latitude, longitude)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(job_id)
        .bind(&posting.location.country)
        .bind(&posting.location.locality)
        .bind(&posting.location.region)
        .bind(&posting.location.postal_code)
        .bind(&posting.location.street_address)
        .bind(&posting.location.latitude)
        .bind(&posting.location.longitude)
        .execute(&mut *tx)
        .await
        .map_err(|e| EtlError::Storage(e.to_string().into()))?;

        tx.commit()
            .await
            .map_err(|e| EtlError::Storage(e.to_string().into()))?;

        Ok(job_id)
    }

    async fn get_posting(&self, job_id: i64) -> Result<Option<JobPosting>> {
        let job = sqlx::query_as::<_, JobRow>(
            r#"
            SELECT title, industry, description, employment_type,
                   CAST(date_posted AS TEXT) AS date_posted
            FROM job WHERE id = ?
            "#,
        )
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| EtlError::Storage(e.to_string().into()))?;

        let Some(job) = job else {
            return Ok(None);
        };

        let company = sqlx::query_as::<_, CompanyRow>(
            "SELECT name, link FROM company WHERE job_id = ?",
        )
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| EtlError::Storage(e.to_string().into()))?;

        let education = sqlx::query_as::<_, EducationRow>(
            "SELECT required_credential FROM education WHERE job_id = ?",
        )
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| EtlError::Storage(e.to_string().into()))?;

        let experience = sqlx::query_as::<_, ExperienceRow>(
            r#"
            SELECT CAST(months_of_experience AS TEXT) AS months_of_experience,
                   seniority_level
            FROM experience WHERE job_id = ?
            "#,
        )
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| EtlError::Storage(e.to_string().into()))?;

        let salary = sqlx::query_as::<_, SalaryRow>(
            r#"
            SELECT currency,
                   CAST(min_value AS TEXT) AS min_value,
                   CAST(max_value AS TEXT) AS max_value,
                   unit
            FROM salary WHERE job_id = ?
            "#,
        )
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| EtlError::Storage(e.to_string().into()))?;

        let location = sqlx::query_as::<_, LocationRow>(
            r#"
            SELECT country, locality, region, postal_code, street_address,
                   CAST(latitude AS TEXT) AS latitude,
                   CAST(longitude AS TEXT) AS longitude
            FROM location WHERE job_id = ?
            "#,
        )
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| EtlError::Storage(e.to_string().into()))?;

        Ok(Some(JobPosting {
            job: JobFields {
                title: job.title,
                industry: job.industry,
                description: job.description,
                employment_type: job.employment_type,
                date_posted: job.date_posted,
            },
            company: company
                .map(|c| CompanyFields {
                    name: c.name,
                    link: c.link,
                })
                .unwrap_or_default(),
            education: education
                .map(|e| EducationFields {
                    required_credential: e.required_credential,
                })
                .unwrap_or_default(),
            experience: experience
                .map(|e| ExperienceFields {
                    months_of_experience: e.months_of_experience,
                    seniority_level: e.seniority_level,
                })
                .unwrap_or_default(),
            salary: salary
                .map(|s| SalaryFields {
                    currency: s.currency,
                    min_value: s.min_value,
                    max_value: s.max_value,
                    unit: s.unit,
                })
                .unwrap_or_default(),
            location: location
                .map(|l| LocationFields {
                    country: l.country,
                    locality: l.locality,
                    region: l.region,
                    postal_code: l.postal_code,
                    street_address: l.street_address,
                    latitude: l.latitude,
                    longitude: l.longitude,
                })
                .unwrap_or_default(),
        }))
    }

    async fn count_jobs(&self) -> Result<usize> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM job")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| EtlError::Storage(e.to_string().into()))?;
        Ok(count as usize)
    }
}
