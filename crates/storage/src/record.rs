use serde::{Deserialize, Serialize};

/// An audit record of one command submission against a flight.
///
/// Submissions are stored whether or not the parse was valid; the record
/// keeps the raw string verbatim plus the full parse snapshot so a bad
/// submission can be diagnosed later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandSubmissionRecord {
    pub id: i64,
    pub flight_id: String,
    /// The raw pipe-delimited command string, verbatim.
    pub command_string: String,
    /// JSON snapshot of the parsed result (fields, error list, validity).
    pub parsed: serde_json::Value,
    /// Human-readable summary of the stored fields.
    pub summary: String,
    pub valid: bool,
    /// ISO 8601 / RFC 3339 timestamp string.
    pub submitted_at: String,
}

/// One entry of the flight roster the server preloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightRecord {
    pub flight_id: String,
    pub flight_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aircraft_registration: Option<String>,
}
