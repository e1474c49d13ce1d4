use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::command::{CommandKind, JET_BRIDGE_ANGLES, KEYWORDS};
use crate::issue::ParseIssue;

/// The structured result of parsing one ground-handling command string.
///
/// Built in a single left-to-right scan over the pipe-delimited tokens and
/// immutable once returned. Each kind holds at most one value: the first
/// successfully stored occurrence wins, later ones are reported as
/// duplicates. Validity is derived: the result is valid iff no issues were
/// recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    original: String,
    check_in_minutes: Option<i64>,
    baggage_minutes: Option<i64>,
    cleaning_minutes: Option<i64>,
    jet_bridge_angle: Option<i64>,
    issues: Vec<ParseIssue>,
}

impl ParsedCommand {
    fn new(original: &str) -> Self {
        ParsedCommand {
            original: original.to_owned(),
            check_in_minutes: None,
            baggage_minutes: None,
            cleaning_minutes: None,
            jet_bridge_angle: None,
            issues: Vec::new(),
        }
    }

    /// The raw command string, retained verbatim for audit and display.
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn check_in_minutes(&self) -> Option<i64> {
        self.check_in_minutes
    }

    pub fn baggage_minutes(&self) -> Option<i64> {
        self.baggage_minutes
    }

    pub fn cleaning_minutes(&self) -> Option<i64> {
        self.cleaning_minutes
    }

    pub fn jet_bridge_angle(&self) -> Option<i64> {
        self.jet_bridge_angle
    }

    /// The stored value for a kind, if one was captured.
    pub fn value(&self, kind: CommandKind) -> Option<i64> {
        *self.slot(kind)
    }

    /// Validation problems in discovery order.
    pub fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// True iff no validation problems were recorded.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    fn slot(&self, kind: CommandKind) -> &Option<i64> {
        match kind {
            CommandKind::CheckIn => &self.check_in_minutes,
            CommandKind::Baggage => &self.baggage_minutes,
            CommandKind::Cleaning => &self.cleaning_minutes,
            CommandKind::JetBridge => &self.jet_bridge_angle,
        }
    }

    fn slot_mut(&mut self, kind: CommandKind) -> &mut Option<i64> {
        match kind {
            CommandKind::CheckIn => &mut self.check_in_minutes,
            CommandKind::Baggage => &mut self.baggage_minutes,
            CommandKind::Cleaning => &mut self.cleaning_minutes,
            CommandKind::JetBridge => &mut self.jet_bridge_angle,
        }
    }
}

impl Serialize for ParsedCommand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ParsedCommand", 7)?;
        s.serialize_field("original", &self.original)?;
        s.serialize_field("check_in_minutes", &self.check_in_minutes)?;
        s.serialize_field("baggage_minutes", &self.baggage_minutes)?;
        s.serialize_field("cleaning_minutes", &self.cleaning_minutes)?;
        s.serialize_field("jet_bridge_angle", &self.jet_bridge_angle)?;
        s.serialize_field("validation_errors", &self.issues)?;
        s.serialize_field("valid", &self.is_valid())?;
        s.end()
    }
}

/// Split a raw command string into non-empty, trimmed tokens.
///
/// `|` is the separator; tokens that are empty after trimming are dropped
/// (so `CHK10||BAG5` yields two tokens). Order is preserved.
fn tokenize(raw: &str) -> impl Iterator<Item = &str> {
    raw.split('|').map(str::trim).filter(|t| !t.is_empty())
}

/// The shape a single token classified into.
enum TokenShape {
    /// Recognized keyword with a digit suffix that fit in an i64.
    Command(CommandKind, i64),
    /// Recognized keyword with no digits after it.
    Bare(CommandKind),
    /// Recognized keyword whose digit suffix overflowed.
    Overflow,
    /// Anything else.
    Unknown,
}

/// Classify one trimmed, non-empty token.
///
/// The entire token must be an ASCII-alphabetic keyword followed by zero or
/// more ASCII digits. No sign, no decimal point, no trailing characters;
/// keyword matching is case-insensitive. Anything deviating from that shape
/// is `Unknown`.
fn classify(token: &str) -> TokenShape {
    let split = token
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(token.len());
    let (word, digits) = token.split_at(split);

    if digits.bytes().any(|b| !b.is_ascii_digit()) {
        return TokenShape::Unknown;
    }

    let kind = KEYWORDS
        .iter()
        .find(|(kw, _)| word.eq_ignore_ascii_case(kw))
        .map(|(_, kind)| *kind);

    match kind {
        None => TokenShape::Unknown,
        Some(kind) if digits.is_empty() => TokenShape::Bare(kind),
        Some(kind) => match digits.parse::<i64>() {
            Ok(value) => TokenShape::Command(kind, value),
            Err(_) => TokenShape::Overflow,
        },
    }
}

/// Parse a pipe-delimited ground-handling command string.
///
/// Total over all inputs: never panics, all problems are reported through
/// the result's issue list. Every token is evaluated even after an error,
/// so the issue list reflects the complete scan, not just the first
/// failure.
pub fn parse(raw: &str) -> ParsedCommand {
    let mut result = ParsedCommand::new(raw);

    if raw.trim().is_empty() {
        result.issues.push(ParseIssue::EmptyInput);
        return result;
    }

    for token in tokenize(raw) {
        match classify(token) {
            TokenShape::Command(kind, value) => {
                if result.slot(kind).is_some() {
                    // First stored value wins; a failed first attempt
                    // (e.g. a bad PBB angle) does not count as stored.
                    result.issues.push(ParseIssue::Duplicate { kind });
                } else if kind == CommandKind::JetBridge
                    && !JET_BRIDGE_ANGLES.contains(&value)
                {
                    result.issues.push(ParseIssue::InvalidAngle { angle: value });
                } else {
                    *result.slot_mut(kind) = Some(value);
                }
            }
            TokenShape::Bare(kind) => {
                result.issues.push(ParseIssue::MissingValue { kind });
            }
            TokenShape::Overflow => {
                result.issues.push(ParseIssue::MalformedNumber {
                    token: token.to_owned(),
                });
            }
            TokenShape::Unknown => {
                result.issues.push(ParseIssue::UnknownCommand {
                    token: token.to_owned(),
                });
            }
        }
    }

    result
}
