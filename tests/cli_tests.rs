//! CLI integration tests.
//!
//! Runs the json-echo binary as a subprocess with input on stdin.

use std::io::Write;
use std::process::{Command, Stdio};

use pretty_assertions::assert_eq;

fn run(args: &[&str], input: &[u8]) -> (i32, String, String) {
    let binary = env!("CARGO_BIN_EXE_json-echo");
    let mut child = Command::new(binary)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("Failed to spawn {}: {}", binary, e));

    {
        let stdin = child.stdin.as_mut().unwrap();
        stdin.write_all(input).unwrap();
    }

    let output = child.wait_with_output().unwrap();
    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

// ============================================================================
// Echo
// ============================================================================

#[test]
fn cli_echo_default_command() {
    let (code, stdout, _stderr) = run(&[], br#"{"url":"/","body":"World"}"#);
    assert_eq!(code, 0);
    assert_eq!(
        stdout.trim_end(),
        r#"{"data":"Hello World!","status":200,"base64":false,"headers":{"X-Generated-By":"wasm-workers-server"},"kv":{}}"#
    );
}

#[test]
fn cli_echo_custom_header() {
    let (code, stdout, _stderr) = run(
        &["echo", "--generated-by", "cli-test"],
        br#"{"body":"there"}"#,
    );
    assert_eq!(code, 0);
    assert!(stdout.contains(r#""data":"Hello there!""#), "stdout: {}", stdout);
    assert!(stdout.contains(r#""X-Generated-By":"cli-test""#), "stdout: {}", stdout);
}

#[test]
fn cli_echo_malformed_request() {
    let (code, stdout, _stderr) = run(&["echo"], b"{\"body\":");
    assert_eq!(code, 0, "malformed requests are answered, not crashed on");
    assert!(stdout.contains(r#""status":400"#), "stdout: {}", stdout);
}

#[test]
fn cli_echo_missing_body() {
    let (code, stdout, _stderr) = run(&["echo"], br#"{"url":"/"}"#);
    assert_eq!(code, 0);
    assert!(stdout.contains("wrong type: expected string, found null"), "stdout: {}", stdout);
    assert!(stdout.contains(r#""status":400"#));
}

#[test]
fn cli_echo_strict_rejects_trailing_input() {
    let input = br#"{"body":"x"} 1"#;
    let (_, lenient, _) = run(&["echo"], input);
    assert!(lenient.contains(r#""status":200"#), "stdout: {}", lenient);

    let (_, strict, _) = run(&["echo", "--strict"], input);
    assert!(strict.contains(r#""status":400"#), "stdout: {}", strict);
}

#[test]
fn cli_invalid_utf8_fails() {
    let (code, stdout, stderr) = run(&["echo"], &[b'"', 0xFF, b'"']);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("UTF-8"), "stderr: {}", stderr);
}

// ============================================================================
// Format
// ============================================================================

#[test]
fn cli_format_reserializes() {
    let (code, stdout, _stderr) = run(&["format"], b"{ \"a\" : [1,2.5,null], \"p\": \"/x\" }");
    assert_eq!(code, 0);
    assert_eq!(stdout.trim_end(), r#"{"a":[1, 2.5, null],"p":"\/x"}"#);
}

#[test]
fn cli_format_reports_errors() {
    let (code, stdout, stderr) = run(&["format"], b"[1.2.3]");
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("error[300]"), "stderr: {}", stderr);
}

#[test]
fn cli_format_max_depth() {
    let (code, _stdout, stderr) = run(&["format", "--max-depth", "1"], b"[[1]]");
    assert_eq!(code, 1);
    assert!(stderr.contains("nesting too deep"), "stderr: {}", stderr);
}

// ============================================================================
// Tokens
// ============================================================================

#[test]
fn cli_tokens_lists_stream() {
    let (code, stdout, _stderr) = run(&["tokens"], br#"{"k": -1.5}"#);
    assert_eq!(code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec!["LEFT_BRACE {", "STRING k", "COLON :", "FLOAT -1.5", "RIGHT_BRACE }"]
    );
}

#[test]
fn cli_tokens_reports_lex_error() {
    let (code, _stdout, stderr) = run(&["tokens"], b"[nope]");
    assert_eq!(code, 1);
    assert!(stderr.contains("invalid literal: nope"), "stderr: {}", stderr);
}
