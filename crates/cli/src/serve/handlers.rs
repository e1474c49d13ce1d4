//! HTTP route handlers: health, flights, command validation and submission.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use turnaround_core::{parse, render};

use super::state::AppState;
use super::{json_error, MAX_COMMAND_SIZE};

/// Construct an envelope success response.
fn json_ok(message: &str, data: serde_json::Value) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "message": message,
            "data": data,
        })),
    )
}

/// Current time as an RFC 3339 string.
fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}

/// Extract and validate the `command_string` field of a request body.
fn extract_command(body: &serde_json::Value) -> Result<&str, Response> {
    let command = match body.get("command_string").and_then(|v| v.as_str()) {
        Some(c) => c,
        None => {
            return Err(
                json_error(StatusCode::BAD_REQUEST, "missing 'command_string' field")
                    .into_response(),
            )
        }
    };
    if command.len() > MAX_COMMAND_SIZE {
        return Err(json_error(
            StatusCode::BAD_REQUEST,
            "command string exceeds maximum size",
        )
        .into_response());
    }
    Ok(command)
}

/// Fallback handler for unmatched routes.
pub(crate) async fn handle_not_found() -> impl IntoResponse {
    json_error(StatusCode::NOT_FOUND, "not found")
}

/// GET /health
pub(crate) async fn handle_health() -> impl IntoResponse {
    json_ok(
        "ok",
        serde_json::json!({
            "status": "ok",
            "version": turnaround_core::TURNAROUND_VERSION,
        }),
    )
}

/// GET /flights
pub(crate) async fn handle_list_flights(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let flights = state.flights.read().await;
    let mut roster: Vec<&turnaround_storage::FlightRecord> = flights.values().collect();
    roster.sort_by(|a, b| a.flight_id.cmp(&b.flight_id));
    json_ok(
        "Flights retrieved successfully",
        serde_json::json!({ "flights": roster }),
    )
}

/// POST /commands/validate
///
/// Parse and render without persisting anything. An invalid command string
/// is still a 200: parse problems are payload data, not HTTP errors.
pub(crate) async fn handle_validate(Json(body): Json<serde_json::Value>) -> Response {
    let command = match extract_command(&body) {
        Ok(c) => c,
        Err(response) => return response,
    };

    let parsed = parse(command);
    let summary = render(&parsed);
    json_ok(
        "Command validated successfully",
        serde_json::json!({
            "command_string": command,
            "valid": parsed.is_valid(),
            "parsed": parsed,
            "summary": summary,
        }),
    )
    .into_response()
}

/// POST /flights/{flight_id}/commands
///
/// Parse the command string and persist an audit record against the flight.
/// Invalid parses are persisted too, for diagnostics; the response reports
/// validity and the full error list.
pub(crate) async fn handle_submit(
    State(state): State<Arc<AppState>>,
    Path(flight_id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let command = match extract_command(&body) {
        Ok(c) => c,
        Err(response) => return response,
    };

    let flight_number = {
        let flights = state.flights.read().await;
        match flights.get(&flight_id) {
            Some(flight) => flight.flight_number.clone(),
            None => {
                return json_error(StatusCode::NOT_FOUND, "Flight not found").into_response()
            }
        }
    };

    let parsed = parse(command);
    let summary = render(&parsed);
    let snapshot = match serde_json::to_value(&parsed) {
        Ok(v) => v,
        Err(e) => {
            return json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("failed to serialize parse result: {}", e),
            )
            .into_response()
        }
    };

    let record = match state
        .store
        .insert_submission(
            &flight_id,
            command,
            snapshot,
            &summary,
            parsed.is_valid(),
            &now_rfc3339(),
        )
        .await
    {
        Ok(r) => r,
        Err(e) => {
            return json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("failed to store submission: {}", e),
            )
            .into_response()
        }
    };

    json_ok(
        "Work order command submitted successfully",
        serde_json::json!({
            "submission_id": record.id,
            "flight_id": flight_id,
            "flight_number": flight_number,
            "command_string": command,
            "valid": parsed.is_valid(),
            "parsed": parsed,
            "summary": summary,
            "submitted_at": record.submitted_at,
        }),
    )
    .into_response()
}

#[derive(Deserialize)]
pub(crate) struct HistoryParams {
    limit: Option<usize>,
}

/// GET /flights/{flight_id}/commands
pub(crate) async fn handle_history(
    State(state): State<Arc<AppState>>,
    Path(flight_id): Path<String>,
    Query(params): Query<HistoryParams>,
) -> Response {
    {
        let flights = state.flights.read().await;
        if !flights.contains_key(&flight_id) {
            return json_error(StatusCode::NOT_FOUND, "Flight not found").into_response();
        }
    }

    let submissions = match state
        .store
        .list_submissions(&flight_id, params.limit.unwrap_or(0))
        .await
    {
        Ok(s) => s,
        Err(e) => {
            return json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("failed to list submissions: {}", e),
            )
            .into_response()
        }
    };

    json_ok(
        "Command history retrieved successfully",
        serde_json::json!({
            "flight_id": flight_id,
            "submissions": submissions,
        }),
    )
    .into_response()
}
