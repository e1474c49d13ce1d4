use crate::parse::ParsedCommand;

/// Fixed summary for a result with no stored fields, so callers never have
/// to special-case an empty string.
pub const NO_COMMANDS: &str = "No commands specified.";

/// Render a parsed command's stored values as a human-readable summary.
///
/// One line per field that is present, in declaration order (check-in,
/// baggage, cleaning, jet-bridge) regardless of token order in the input.
/// Issues are ignored: the summary describes only what was captured. Pure
/// function of the stored fields; never fails.
pub fn render(parsed: &ParsedCommand) -> String {
    let mut lines = Vec::new();

    if let Some(minutes) = parsed.check_in_minutes() {
        lines.push(format!("Check-in: {} minutes", minutes));
    }
    if let Some(minutes) = parsed.baggage_minutes() {
        lines.push(format!("Baggage: {} minutes", minutes));
    }
    if let Some(minutes) = parsed.cleaning_minutes() {
        lines.push(format!("Cleaning: {} minutes", minutes));
    }
    if let Some(angle) = parsed.jet_bridge_angle() {
        lines.push(format!("Jet-bridge angle: {} degrees", angle));
    }

    if lines.is_empty() {
        NO_COMMANDS.to_string()
    } else {
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    #[test]
    fn lines_are_in_declaration_order_not_token_order() {
        let r = parse("PBB90|CLEAN10|BAG25|CHK15");
        assert_eq!(
            render(&r),
            "Check-in: 15 minutes\nBaggage: 25 minutes\nCleaning: 10 minutes\nJet-bridge angle: 90 degrees"
        );
    }

    #[test]
    fn only_present_fields_are_rendered() {
        let r = parse("BAG5");
        assert_eq!(render(&r), "Baggage: 5 minutes");
    }

    #[test]
    fn all_absent_renders_fixed_literal() {
        assert_eq!(render(&parse("")), NO_COMMANDS);
        assert_eq!(render(&parse("INVALID")), NO_COMMANDS);
    }

    #[test]
    fn issues_do_not_affect_the_summary() {
        // Same stored fields, different error lists; identical summaries.
        let clean = parse("CHK15");
        let noisy = parse("CHK15|CHK20|JUNK");
        assert_eq!(render(&clean), render(&noisy));
    }

    #[test]
    fn rendering_is_idempotent() {
        let r = parse("CHK15|PBB180");
        assert_eq!(render(&r), render(&r));
    }
}
