use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::record::CommandSubmissionRecord;
use crate::traits::CommandStore;

/// In-memory reference backend.
///
/// Insertion order doubles as submission order; ids are monotonic starting
/// at 1. Suitable for the server's default configuration and for tests;
/// nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    submissions: RwLock<Vec<CommandSubmissionRecord>>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            submissions: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(0),
        }
    }
}

#[async_trait]
impl CommandStore for MemoryStore {
    async fn insert_submission(
        &self,
        flight_id: &str,
        command_string: &str,
        parsed: serde_json::Value,
        summary: &str,
        valid: bool,
        submitted_at: &str,
    ) -> Result<CommandSubmissionRecord, StoreError> {
        let record = CommandSubmissionRecord {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            flight_id: flight_id.to_owned(),
            command_string: command_string.to_owned(),
            parsed,
            summary: summary.to_owned(),
            valid,
            submitted_at: submitted_at.to_owned(),
        };
        self.submissions.write().await.push(record.clone());
        Ok(record)
    }

    async fn get_submission(&self, id: i64) -> Result<CommandSubmissionRecord, StoreError> {
        self.submissions
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(StoreError::SubmissionNotFound { id })
    }

    async fn list_submissions(
        &self,
        flight_id: &str,
        limit: usize,
    ) -> Result<Vec<CommandSubmissionRecord>, StoreError> {
        let submissions = self.submissions.read().await;
        let mut matching: Vec<CommandSubmissionRecord> = submissions
            .iter()
            .filter(|r| r.flight_id == flight_id)
            .cloned()
            .collect();
        matching.reverse(); // newest first
        if limit > 0 {
            matching.truncate(limit);
        }
        Ok(matching)
    }
}
