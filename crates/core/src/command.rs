use serde::{Deserialize, Serialize};

/// The closed set of recognized ground-handling command kinds.
///
/// Each kind is addressed on the wire by a fixed keyword (`CHK`, `BAG`,
/// `CLEAN`, `PBB`) followed by an unsigned integer value. Kinds carry no
/// state of their own; parsed values live on [`crate::ParsedCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandKind {
    CheckIn,
    Baggage,
    Cleaning,
    JetBridge,
}

/// Keyword-to-kind lookup table, in classification order.
pub const KEYWORDS: [(&str, CommandKind); 4] = [
    ("CHK", CommandKind::CheckIn),
    ("BAG", CommandKind::Baggage),
    ("CLEAN", CommandKind::Cleaning),
    ("PBB", CommandKind::JetBridge),
];

/// The only jet-bridge orientations a passenger boarding bridge supports.
pub const JET_BRIDGE_ANGLES: [i64; 4] = [0, 90, 180, 270];

impl CommandKind {
    /// The wire keyword that introduces this command (`CHK15`, `PBB90`, ...).
    pub fn keyword(&self) -> &'static str {
        match self {
            CommandKind::CheckIn => "CHK",
            CommandKind::Baggage => "BAG",
            CommandKind::Cleaning => "CLEAN",
            CommandKind::JetBridge => "PBB",
        }
    }

    /// Human-readable label used in summaries and error messages.
    pub fn label(&self) -> &'static str {
        match self {
            CommandKind::CheckIn => "Check-in",
            CommandKind::Baggage => "Baggage",
            CommandKind::Cleaning => "Cleaning",
            CommandKind::JetBridge => "Jet-bridge",
        }
    }

    /// What the integer value of this command measures.
    pub fn unit(&self) -> &'static str {
        match self {
            CommandKind::JetBridge => "angle",
            _ => "minutes",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_table_matches_accessors() {
        for (kw, kind) in KEYWORDS {
            assert_eq!(kind.keyword(), kw);
        }
    }

    #[test]
    fn labels_are_distinct() {
        let labels: std::collections::BTreeSet<&str> =
            KEYWORDS.iter().map(|(_, k)| k.label()).collect();
        assert_eq!(labels.len(), 4);
    }
}
