//! Runs the compiled Stop hook with the event piped to stdin.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use serde_json::{json, Value};
use tempfile::TempDir;

const PROMPT: &str = r#"{"type":"user","message":{"role":"user","content":"Add retries"}}"#;
const HEDGE: &str =
    r#"{"type":"assistant","message":{"content":[{"type":"text","text":"A basic implementation for now."}]}}"#;
const CLEAN: &str =
    r#"{"type":"assistant","message":{"content":[{"type":"text","text":"Retries are covered by tests."}]}}"#;

fn invoke(stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mediocrity-detector"))
        .env_remove("PERSONAL_HOOKS_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stop_event(transcript: &Path, stop_hook_active: bool) -> String {
    json!({
        "session_id": "s",
        "transcript_path": transcript,
        "hook_event_name": "Stop",
        "stop_hook_active": stop_hook_active,
    })
    .to_string()
}

fn transcript(dir: &TempDir, lines: &[&str]) -> std::path::PathBuf {
    let path = dir.path().join("transcript.jsonl");
    fs::write(&path, lines.join("\n")).unwrap();
    path
}

fn assert_quiet(output: &Output) {
    assert!(output.status.success(), "status {:?}", output.status);
    assert!(output.stdout.is_empty(), "stdout: {}", String::from_utf8_lossy(&output.stdout));
}

#[test]
fn hedging_prints_one_block_directive() {
    let dir = TempDir::new().unwrap();
    let path = transcript(&dir, &[PROMPT, HEDGE]);

    let output = invoke(&stop_event(&path, false));
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    let directive: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(directive["decision"], "block");
    let reason = directive["reason"].as_str().unwrap();
    assert!(reason.contains("\"for now\""));
    assert!(reason.contains("\"basic implementation\""));
}

#[test]
fn clean_turn_prints_nothing() {
    let dir = TempDir::new().unwrap();
    let path = transcript(&dir, &[PROMPT, HEDGE, PROMPT, CLEAN]);
    assert_quiet(&invoke(&stop_event(&path, false)));
}

#[test]
fn active_stop_hook_prints_nothing() {
    let dir = TempDir::new().unwrap();
    let path = transcript(&dir, &[PROMPT, HEDGE]);
    assert_quiet(&invoke(&stop_event(&path, true)));
}

#[test]
fn bad_input_is_a_quiet_no_op() {
    let dir = TempDir::new().unwrap();
    assert_quiet(&invoke("not json"));
    assert_quiet(&invoke(""));
    assert_quiet(&invoke(r#"{"session_id":"s"}"#));
    assert_quiet(&invoke(&stop_event(&dir.path().join("gone.jsonl"), false)));
    assert_quiet(&invoke(&stop_event(dir.path(), false)));
}
