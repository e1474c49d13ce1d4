use async_trait::async_trait;

use crate::error::StoreError;
use crate::record::CommandSubmissionRecord;

/// The storage trait for command submission audit backends.
///
/// A `CommandStore` implementation provides durable storage for command
/// submission records. Implementations must be `Send + Sync + 'static` to
/// be used in axum application state and across async task boundaries.
///
/// Invalid submissions are stored too: whether a bad parse blocks the
/// write is the caller's policy, not the store's.
#[async_trait]
pub trait CommandStore: Send + Sync + 'static {
    /// Persist a submission, assigning its id. Returns the stored record.
    async fn insert_submission(
        &self,
        flight_id: &str,
        command_string: &str,
        parsed: serde_json::Value,
        summary: &str,
        valid: bool,
        submitted_at: &str,
    ) -> Result<CommandSubmissionRecord, StoreError>;

    /// Read one submission by id.
    ///
    /// Returns `Err(StoreError::SubmissionNotFound)` if no record exists.
    async fn get_submission(&self, id: i64) -> Result<CommandSubmissionRecord, StoreError>;

    /// List submissions for a flight, newest first.
    ///
    /// - `limit`: maximum number of results (0 = no limit)
    async fn list_submissions(
        &self,
        flight_id: &str,
        limit: usize,
    ) -> Result<Vec<CommandSubmissionRecord>, StoreError>;
}
