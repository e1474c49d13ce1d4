//! turnaround-core: ground-handling command parser core library.
//!
//! Parses compact pipe-delimited turnaround instruction strings such as
//! `CHK15|BAG25|CLEAN10|PBB90` into typed, validated results, and renders
//! them back to human-readable text.
//!
//! # Public API
//!
//! Key types are re-exported at the crate root for convenience:
//!
//! - [`parse()`] -- parse one command string (total, never panics)
//! - [`render()`] -- summarize a parsed result as display text
//! - [`ParsedCommand`] -- the structured, immutable parse result
//! - [`ParseIssue`] -- one entry of a result's validation error list
//! - [`CommandKind`] -- the closed set of recognized command kinds
//!
//! The parser is purely functional and stateless: no I/O, no shared
//! mutable state, safe to call concurrently without synchronization.

/// Crate version reported by the CLI and the HTTP health endpoint.
pub const TURNAROUND_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod command;
pub mod issue;
pub mod parse;
pub mod render;

pub use command::{CommandKind, JET_BRIDGE_ANGLES};
pub use issue::ParseIssue;
pub use parse::{parse, ParsedCommand};
pub use render::{render, NO_COMMANDS};
