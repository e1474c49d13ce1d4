//! `turnaround serve` -- HTTP JSON API for the command parser.
//!
//! Exposes the parser as an async HTTP service using `axum` + `tokio`.
//! Supports concurrent request handling; the parser itself is pure and
//! stateless, so no synchronization is needed around it.
//!
//! Security features:
//! - Input validation on command endpoints (size, required fields)
//! - CORS headers on all responses (permissive for local dev)
//! - Per-IP rate limiting (default: 60 req/min, configurable)
//! - Optional bearer-token authentication via TURNAROUND_API_KEY env var
//!
//! Endpoints:
//! - GET  /health                         - Server status (exempt from auth)
//! - GET  /flights                        - Pre-loaded flight roster
//! - POST /commands/validate              - Parse + render, nothing persisted
//! - POST /flights/{flight_id}/commands   - Parse, persist audit record
//! - GET  /flights/{flight_id}/commands   - Submission history for a flight
//!
//! All responses use Content-Type: application/json with the envelope
//! `{"success": bool, "message": string, "data": ...}`.

mod handlers;
mod middleware;
mod state;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{middleware as axum_middleware, Json, Router};
use tower_http::cors::{Any, CorsLayer};

use turnaround_storage::{FlightRecord, MemoryStore};

use self::handlers::{
    handle_health, handle_history, handle_list_flights, handle_not_found, handle_submit,
    handle_validate,
};
use self::middleware::{auth_middleware, rate_limit_middleware};
use self::state::{AppState, RateLimiter};

/// Maximum request body size: 1 MB.
const MAX_BODY_SIZE: usize = 1024 * 1024;

/// Maximum command string length accepted by the parse endpoints: 64 KB.
const MAX_COMMAND_SIZE: usize = 64 * 1024;

/// Default rate limit: 60 requests per minute per IP.
const DEFAULT_RATE_LIMIT: u64 = 60;

/// Rate limit window duration in seconds (1 minute).
const RATE_LIMIT_WINDOW_SECS: u64 = 60;

/// Construct an envelope error response with the given status and message.
fn json_error(status: StatusCode, message: &str) -> impl IntoResponse {
    (
        status,
        Json(serde_json::json!({
            "success": false,
            "message": message,
            "data": null,
        })),
    )
}

/// Start the HTTP server on the given port, optionally pre-loading flight
/// rosters. Each roster file is a JSON array of flight records.
pub async fn start_server(
    port: u16,
    roster_paths: Vec<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut flights = HashMap::new();

    // Pre-load rosters
    for path in &roster_paths {
        match load_roster(path) {
            Ok(records) => {
                eprintln!("Loaded {} flight(s) from {}", records.len(), path.display());
                for record in records {
                    flights.insert(record.flight_id.clone(), record);
                }
            }
            Err(e) => {
                eprintln!("Warning: failed to load {}: {}", path.display(), e);
            }
        }
    }

    // Rate limit: from TURNAROUND_RATE_LIMIT env var, or default
    let rate_limit = std::env::var("TURNAROUND_RATE_LIMIT")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_RATE_LIMIT);

    // API key: from TURNAROUND_API_KEY env var (None = no auth)
    let api_key = std::env::var("TURNAROUND_API_KEY")
        .ok()
        .filter(|k| !k.is_empty());

    if api_key.is_some() {
        eprintln!("API key authentication enabled");
    }
    eprintln!("Rate limit: {} requests per minute per IP", rate_limit);

    let state = Arc::new(AppState {
        flights: tokio::sync::RwLock::new(flights),
        store: Box::new(MemoryStore::new()),
        rate_limiter: RateLimiter::new(rate_limit),
        api_key,
    });

    // CORS: permissive for local dev
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(handle_health))
        .route("/flights", get(handle_list_flights))
        .route("/commands/validate", post(handle_validate))
        .route(
            "/flights/{flight_id}/commands",
            get(handle_history).post(handle_submit),
        )
        .fallback(handle_not_found)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .layer(cors)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .with_state(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    eprintln!("Turnaround API listening on http://0.0.0.0:{}", port);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    eprintln!("\nServer shut down.");
    Ok(())
}

/// Read and parse one flight roster file.
fn load_roster(path: &Path) -> Result<Vec<FlightRecord>, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    let records: Vec<FlightRecord> = serde_json::from_str(&raw)?;
    Ok(records)
}

/// Wait for a shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    eprintln!("\nReceived shutdown signal...");
}
