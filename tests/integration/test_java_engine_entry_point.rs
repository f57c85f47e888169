// java-engineエントリーポイントのテスト
#[path = "../fixtures/mod.rs"]
mod fixtures;

use fixtures::{BOOLEAN_VARIABLE_JSON, CONSOLE_OPTIONS_JSON};
use std::path::PathBuf;
use std::process::Command;

fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_java-engine"))
}

#[test]
fn test_prints_constant_message() {
    let output = Command::new(get_binary_path())
        .arg("MyClass.java")
        .arg(BOOLEAN_VARIABLE_JSON)
        .arg(CONSOLE_OPTIONS_JSON)
        .output()
        .expect("Failed to execute java-engine");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "Refactoring Java code\n");
}

#[test]
fn test_output_ignores_argument_content() {
    let cases = [
        ("missing/File.java", "{}", "{}"),
        (
            "dir with spaces/Main.java",
            r#"{"key":"json-var","value":{"key":"value"},"type":"JSON"}"#,
            r#"{"output":"file","aliases":{}}"#,
        ),
        ("x", r#"{"key":"num-var","value":7}"#, r#"{"aliases":["A","B"]}"#),
    ];

    for (filename, variable, options) in cases {
        let output = Command::new(get_binary_path())
            .args([filename, variable, options])
            .output()
            .expect("Failed to execute java-engine");

        assert!(output.status.success(), "failed for {variable}");
        assert_eq!(
            String::from_utf8(output.stdout).unwrap(),
            "Refactoring Java code\n"
        );
    }
}

#[test]
fn test_hyphen_filename_and_extra_arguments() {
    let output = Command::new(get_binary_path())
        .args([
            "-dash.java",
            BOOLEAN_VARIABLE_JSON,
            CONSOLE_OPTIONS_JSON,
            "extra",
            "--unused",
        ])
        .output()
        .expect("Failed to execute java-engine");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Refactoring Java code\n"
    );
}

#[test]
fn test_malformed_json_fails() {
    let output = Command::new(get_binary_path())
        .args(["MyClass.java", "{not-json", CONSOLE_OPTIONS_JSON])
        .output()
        .expect("Failed to execute java-engine");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("variable"));
}

#[test]
fn test_missing_arguments_fail() {
    let output = Command::new(get_binary_path())
        .arg("MyClass.java")
        .output()
        .expect("Failed to execute java-engine");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_help() {
    let output = Command::new(get_binary_path())
        .arg("--help")
        .output()
        .expect("Failed to execute java-engine");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("java-engine"));
}
