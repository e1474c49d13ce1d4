/// All errors that can be returned by a CommandStore implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No submission with the given id.
    #[error("submission not found: {id}")]
    SubmissionNotFound { id: i64 },

    /// The referenced flight is not known to the backend.
    #[error("flight not found: {flight_id}")]
    FlightNotFound { flight_id: String },

    /// A backend-specific storage error (DB connection, serialization, etc.).
    #[error("storage backend error: {0}")]
    Backend(String),
}
