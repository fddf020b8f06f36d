//! Storage trait for transformed postings.
//!
//! One job row owns zero-or-one row in each of the five child tables;
//! [`JobStore::insert_posting`] writes the whole bundle and returns the new
//! job id, so the foreign-key bookkeeping never leaks out of the store.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::record::JobPosting;

/// Store for transformed postings.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Create the relational schema if it does not exist.
    ///
    /// Idempotent; safe to call before every load.
    async fn init_schema(&self) -> Result<()>;

    /// Insert a posting: the job row plus its five child rows.
    ///
    /// Returns the id of the new job row.
    async fn insert_posting(&self, posting: &JobPosting) -> Result<i64>;

    /// Fetch a posting back by job id.
    async fn get_posting(&self, job_id: i64) -> Result<Option<JobPosting>>;

    /// Count stored job rows.
    async fn count_jobs(&self) -> Result<usize>;
}
