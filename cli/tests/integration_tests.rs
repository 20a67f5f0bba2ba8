use std::process::{Command, Output};

fn argtree(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_argtree"))
        .args(args)
        .output()
        .expect("failed to run argtree")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_matched_command_prints_summary_and_executes() {
    let output = argtree(&["animal", "dog", "--name", "Rex", "--alive"]);

    assert!(output.status.success());
    // The JSON summary comes first, then the command's own output.
    let text = stdout(&output);
    assert!(text.contains("\"command\": \"animal\""));
    assert!(text.contains("\"command\": \"dog\""));
    assert!(text.contains("\"Rex\""));
    assert!(text.contains("Rex barks"));
}

#[test]
fn test_help_flag_prints_usage() {
    let output = argtree(&["animal", "dog", "--help"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Usage:"));
    assert!(text.contains("animal"));
}

#[test]
fn test_unknown_option_fails_with_caret_diagnostic() {
    let output = argtree(&["animal", "dog", "--color"]);

    assert!(!output.status.success());
    let text = stderr(&output);
    assert!(text.contains("unknown option '--color'"));
    assert!(text.contains("animal dog --color"));
    assert!(text.contains("^^^^^^^"));
}

#[test]
fn test_default_command_echoes_remaining_arguments() {
    let output = argtree(&["hello", "--", "--not-an-option", "-5"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("hello"));
    assert!(text.contains("--not-an-option"));
    assert!(text.contains("-5"));
}

#[test]
fn test_validation_failure_exits_non_zero() {
    let output = argtree(&["animal", "dog", "--age"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("--age requires --name"));
}
