//! In-memory storage implementation for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use crate::error::Result;
use crate::traits::store::JobStore;
use crate::types::record::JobPosting;

/// In-memory posting store.
///
/// Useful for testing and development. Not suitable for production as data
/// is lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    postings: RwLock<HashMap<i64, JobPosting>>,
    next_id: AtomicI64,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored postings without going through the trait.
    pub fn job_count(&self) -> usize {
        self.postings.read().unwrap().len()
    }

    /// Clear all stored data.
    pub fn clear(&self) {
        self.postings.write().unwrap().clear();
    }
}

#[async_trait]
impl JobStore for MemoryStore {
    async fn init_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn insert_posting(&self, posting: &JobPosting) -> Result<i64> {
        let job_id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.postings
            .write()
            .unwrap()
            .insert(job_id, posting.clone());
        Ok(job_id)
    }

    async fn get_posting(&self, job_id: i64) -> Result<Option<JobPosting>> {
        Ok(self.postings.read().unwrap().get(&job_id).cloned())
    }

    async fn count_jobs(&self) -> Result<usize> {
        Ok(self.postings.read().unwrap().len())
    }
}
