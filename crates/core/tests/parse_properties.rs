//! Black-box tests of the parse/render contract: totality over arbitrary
//! input, the complete-report guarantee, and stability of the summary.

use turnaround_core::{parse, render, CommandKind, NO_COMMANDS};

#[test]
fn parse_is_total_over_adversarial_inputs() {
    let inputs = [
        "",
        "|",
        "|||||||",
        "\u{0}\u{1}\u{2}",
        "CHK\u{0}5",
        "ᚠᚢᚦᚨᚱᚲ|PBB90",
        "CHK15|BAG25|CLEAN10|PBB90|CHK15|BAG25|CLEAN10|PBB90",
        "chkchkchk",
        "PBB-90",
        "CHK018446744073709551616",
        "𝕮𝕳𝕶15",
    ];
    for raw in inputs {
        // Must not panic; stored values and issue list always coherent.
        let r = parse(raw);
        assert_eq!(r.is_valid(), r.issues().is_empty(), "input {:?}", raw);
        let _ = render(&r);
    }
}

#[test]
fn very_long_token_lists_are_linear_and_safe() {
    let raw = vec!["CHK5"; 10_000].join("|");
    let r = parse(&raw);
    assert_eq!(r.check_in_minutes(), Some(5));
    // One stored value, 9,999 duplicate reports.
    assert_eq!(r.issues().len(), 9_999);
    assert!(!r.is_valid());
}

#[test]
fn every_token_contributes_a_value_or_an_error_never_both() {
    let r = parse("CHK1|JUNK|BAG2|PBB33|CLEAN3|CHK9");
    // CHK1, BAG2, CLEAN3 stored; JUNK, PBB33, CHK9 each produce one error.
    let stored = [
        r.value(CommandKind::CheckIn),
        r.value(CommandKind::Baggage),
        r.value(CommandKind::Cleaning),
        r.value(CommandKind::JetBridge),
    ]
    .iter()
    .filter(|v| v.is_some())
    .count();
    assert_eq!(stored, 3);
    assert_eq!(r.issues().len(), 3);
}

#[test]
fn scan_reports_all_problems_in_one_pass() {
    let r = parse("NOPE|PBB13|CHK|CHK5|CHK6");
    let texts: Vec<String> = r.issues().iter().map(|i| i.to_string()).collect();
    assert_eq!(
        texts,
        vec![
            "Unknown command: NOPE",
            "Invalid jet-bridge angle: 13. Must be 0, 90, 180, or 270.",
            "Check-in command missing minutes value.",
            "Check-in command specified multiple times",
        ]
    );
    // CHK5 was stored despite earlier errors.
    assert_eq!(r.check_in_minutes(), Some(5));
}

#[test]
fn render_of_all_absent_result_is_the_fixed_literal() {
    assert_eq!(render(&parse("   ")), NO_COMMANDS);
    assert_eq!(NO_COMMANDS, "No commands specified.");
}

#[test]
fn round_trip_through_json_preserves_the_error_list() {
    let r = parse("PBB45|CHK10");
    let json = serde_json::to_value(&r).unwrap();
    let errors = json["validation_errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(json["check_in_minutes"], 10);
    assert_eq!(json["original"], "PBB45|CHK10");
    assert_eq!(json["valid"], false);
}
