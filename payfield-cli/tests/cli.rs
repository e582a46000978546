use std::process::{Command, Output};

use serde_json::Value;

fn run_payfield(args: &[&str]) -> Output {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("payfield"));
    cmd.args(args);
    cmd.output().expect("failed to run payfield")
}

fn stdout_text(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout should be UTF-8")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_str(stdout_text(output).trim()).expect("stdout should be JSON")
}

#[test]
fn validate_accepts_valid_vpa() {
    let output = run_payfield(&["validate", "vpa", "merchant@paytm"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_text(&output).contains("valid"));
}

#[test]
fn validate_rejects_bad_vpa_with_exit_code_one() {
    let output = run_payfield(&["validate", "vpa", "a@xy"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_text(&output).contains("at least 2 characters"));
}

#[test]
fn validate_json_emits_validation_result() {
    let output = run_payfield(&["--json", "validate", "amount", "12.345"]);
    assert_eq!(output.status.code(), Some(1));
    let parsed = stdout_json(&output);
    assert_eq!(parsed["isValid"], false);
    assert!(parsed["errorMessage"].is_string());
}

#[test]
fn validate_reference_reports_classification() {
    let output = run_payfield(&["--json", "validate", "reference", "123456789012"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_json(&output)["referenceType"], "upi");
}

#[test]
fn validate_note_is_optional_unless_required() {
    let output = run_payfield(&["validate", "note", ""]);
    assert_eq!(output.status.code(), Some(0));

    let output = run_payfield(&["validate", "note", "", "--required"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn validate_name_international_flag_widens_grammar() {
    let output = run_payfield(&["validate", "name", "Jos\u{e9} Moreno"]);
    assert_eq!(output.status.code(), Some(1));

    let output = run_payfield(&["validate", "name", "Jos\u{e9} Moreno", "--international"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn format_prints_canonical_vpa() {
    let output = run_payfield(&["format", "vpa", " User@PayTM "]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_text(&output), "user@paytm\n");
}

#[test]
fn format_rejects_field_without_canonical_form() {
    let output = run_payfield(&["format", "app-id", "com.example.app"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn generate_id_round_trips() {
    let output = run_payfield(&["--json", "generate", "id"]);
    assert_eq!(output.status.code(), Some(0));
    let parsed = stdout_json(&output);
    let value = parsed["value"].as_str().expect("value should be a string");
    assert_eq!(value.len(), 35);
    assert!(value.starts_with("MBTID"));
    assert_eq!(parsed["check"]["isValid"], true);
}

#[test]
fn generate_reference_honors_format() {
    let output = run_payfield(&["generate", "reference", "--format", "numeric12"]);
    assert_eq!(output.status.code(), Some(0));
    let value = stdout_text(&output);
    let value = value.trim();
    assert_eq!(value.len(), 12);
    assert!(value.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn generate_id_with_oversized_prefix_is_usage_error() {
    let output = run_payfield(&["generate", "id", "--length", "4", "--prefix", "MBTID"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn currencies_listing_contains_popular_codes() {
    let output = run_payfield(&["currencies"]);
    assert_eq!(output.status.code(), Some(0));
    let text = stdout_text(&output);
    assert!(text.contains("USD"));
    assert!(text.contains("INR"));
}

#[test]
fn currencies_single_code_lookup() {
    let output = run_payfield(&["currencies", "--code", "JPY"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_text(&output).contains("Japanese Yen"));
}

#[test]
fn inspect_mcc_category() {
    let output = run_payfield(&["inspect", "mcc-category", "5411"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_text(&output).contains("Grocery Stores/Supermarkets"));
}

#[test]
fn inspect_classify_describes_reference() {
    let output = run_payfield(&["inspect", "classify", "ABCD123456"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_text(&output).contains("NEFT"));
}

#[test]
fn inspect_char_info_note() {
    let output = run_payfield(&["--json", "inspect", "char-info", "note", "hello world"]);
    assert_eq!(output.status.code(), Some(0));
    let parsed = stdout_json(&output);
    assert_eq!(parsed["characterCount"], 11);
    assert_eq!(parsed["wordCount"], 2);
}
