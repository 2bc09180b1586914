//! Integration tests for the command-line entry point.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn bin() -> Command {
    Command::cargo_bin("arith-report").unwrap()
}

#[test]
fn default_paths_in_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("input.json"),
        r#"{"a": {"operator":"add","value1":2,"value2":3}, "b": {"operator":"sqrt","value1":16}}"#,
    )
    .unwrap();

    bin()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Results written to output.txt"));

    assert_eq!(
        fs::read_to_string(dir.path().join("output.txt")).unwrap(),
        "a: 5.00\nb: 4.00\n"
    );
}

#[test]
fn explicit_paths() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("ops.json");
    let output = dir.path().join("report.txt");
    fs::write(
        &input,
        r#"{
            "third": {"operator": "mul", "value1": 3, "value2": 3},
            "first": {"operator": "sub", "value1": 0, "value2": 2.5},
            "second": {"operator": "sqrt", "value1": 2}
        }"#,
    )
    .unwrap();

    bin()
        .arg("--input")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "first: -2.50\nsecond: 1.41\nthird: 9.00\n"
    );
}

#[test]
fn negative_sqrt_reports_value_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("input.json"),
        r#"{"x": {"operator":"sqrt","value1":-4}}"#,
    )
    .unwrap();

    bin()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("-4"));

    assert!(!dir.path().join("output.txt").exists());
}

#[test]
fn empty_object_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("input.json"), "{}").unwrap();

    bin()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("The JSON object is empty."));

    assert!(!dir.path().join("output.txt").exists());
}

#[test]
fn missing_input_is_reported() {
    let dir = TempDir::new().unwrap();

    bin()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error: File not found: input.json"));
}

#[test]
fn same_input_and_output_is_refused() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("both.json");
    fs::write(&path, r#"{"a": {"operator":"add","value1":1,"value2":1}}"#).unwrap();

    bin()
        .arg("-i")
        .arg(&path)
        .arg("-o")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("input and output must be different files"));
}
