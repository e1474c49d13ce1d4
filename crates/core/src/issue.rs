use serde::{Serialize, Serializer};

use crate::command::CommandKind;

/// A validation problem found while parsing one command string.
///
/// Issues are collected, never thrown: `parse` is total over its input and
/// reports every problem it finds in discovery order. On the wire an issue
/// is its display string, matching the message list the audit records and
/// API responses carry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseIssue {
    /// The whole command string was empty or all-whitespace.
    #[error("Command string cannot be empty")]
    EmptyInput,

    /// A kind that already holds a stored value appeared again.
    #[error("{} command specified multiple times", .kind.label())]
    Duplicate { kind: CommandKind },

    /// A PBB value outside the fixed orientation set.
    #[error("Invalid jet-bridge angle: {angle}. Must be 0, 90, 180, or 270.")]
    InvalidAngle { angle: i64 },

    /// A bare command keyword with no digits after it.
    #[error("{} command missing {} value.", .kind.label(), .kind.unit())]
    MissingValue { kind: CommandKind },

    /// A token matching no recognized command shape.
    #[error("Unknown command: {token}")]
    UnknownCommand { token: String },

    /// Keyword and digits matched but the value does not fit in an i64.
    #[error("Invalid command format: '{token}'")]
    MalformedNumber { token: String },
}

impl Serialize for ParseIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
