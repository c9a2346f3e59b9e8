//! CLI integration tests
//!
//! Runs the `excel-remap` binary with assert_cmd. Model calls are avoided by
//! passing a saved mapping with `--mapping`.

#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use excel_remap::excel::read_table;

use common::*;

const MODEL_ENV: [&str; 4] = [
    "AZURE_OPENAI_KEY",
    "AZURE_OPENAI_ENDPOINT",
    "AZURE_OPENAI_API_VERSION",
    "AZURE_OPENAI_DEPLOYMENT_NAME",
];

/// Command rooted in `dir` with no model credentials in its environment
fn remap_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("excel-remap").unwrap();
    cmd.current_dir(dir.path());
    for name in MODEL_ENV {
        cmd.env_remove(name);
    }
    cmd
}

fn write_questionnaire(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("questionnaire.xlsx");
    std::fs::write(&path, questionnaire_xlsx()).unwrap();
    path
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    remap_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("excel-remap"))
        .stdout(predicate::str::contains("COMMANDS"));
}

#[test]
fn test_cli_version() {
    let dir = TempDir::new().unwrap();
    remap_cmd(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_remap_help() {
    let dir = TempDir::new().unwrap();
    remap_cmd(&dir)
        .args(["remap", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--columns"))
        .stdout(predicate::str::contains("--mapping"));
}

// ═══════════════════════════════════════════════════════════════════════════
// HEADERS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_headers_lists_columns() {
    let dir = TempDir::new().unwrap();
    let input = write_questionnaire(&dir);

    remap_cmd(&dir)
        .arg("headers")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Question Number"))
        .stdout(predicate::str::contains("Reference Links"));
}

#[test]
fn test_headers_missing_file() {
    let dir = TempDir::new().unwrap();
    remap_cmd(&dir)
        .args(["headers", "does-not-exist.xlsx"])
        .assert()
        .failure();
}

// ═══════════════════════════════════════════════════════════════════════════
// REMAP
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_remap_with_saved_mapping() {
    let dir = TempDir::new().unwrap();
    let input = write_questionnaire(&dir);
    let output = dir.path().join("standard.xlsx");
    let mapping = dir.path().join("mapping.json");
    std::fs::write(&mapping, QUESTIONNAIRE_MAPPING).unwrap();

    remap_cmd(&dir)
        .arg("remap")
        .arg(&input)
        .arg(&output)
        .args(["--columns", "Number, Section, Question, Response, Notes, Reference"])
        .arg("--mapping")
        .arg(&mapping)
        .assert()
        .success()
        .stdout(predicate::str::contains("Remap Complete"));

    let table = read_table(&std::fs::read(&output).unwrap()).unwrap();
    assert_eq!(table.headers, strings(&STANDARD_HEADERS));
    assert_eq!(table.rows, questionnaire().rows);
}

#[test]
fn test_remap_missing_target_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = write_questionnaire(&dir);
    let output = dir.path().join("standard.xlsx");
    let mapping = dir.path().join("mapping.json");
    std::fs::write(&mapping, r#"{"Answer": "Response"}"#).unwrap();

    remap_cmd(&dir)
        .arg("remap")
        .arg(&input)
        .arg(&output)
        .args(["-c", "Response,Notes"])
        .arg("-m")
        .arg(&mapping)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Notes"));

    assert!(!output.exists());
}

#[test]
fn test_remap_without_model_credentials_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_questionnaire(&dir);
    let output = dir.path().join("standard.xlsx");

    remap_cmd(&dir)
        .arg("remap")
        .arg(&input)
        .arg(&output)
        .args(["--columns", "Number"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("AZURE_OPENAI_KEY"));

    assert!(!output.exists());
}

#[test]
fn test_remap_requires_columns() {
    let dir = TempDir::new().unwrap();
    let input = write_questionnaire(&dir);

    remap_cmd(&dir)
        .arg("remap")
        .arg(&input)
        .arg("out.xlsx")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--columns"));
}
