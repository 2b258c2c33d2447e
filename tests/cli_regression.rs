// Regression tests for the ccg-reader binary: output shapes and miette
// diagnostics on failure.

mod common;

use std::fs;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

use common::{AUTO, CANDC, PTB};

fn ccg_reader() -> Command {
    Command::cargo_bin("ccg-reader").unwrap()
}

#[test]
fn show_prints_indented_trees() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trees.ptb");
    fs::write(&path, PTB).unwrap();

    ccg_reader()
        .arg("show")
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("# ID=0 (1 tokens)").and(contains("    N I @0")));
}

#[test]
fn json_prints_one_line_per_derivation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("candc.xml");
    fs::write(&path, CANDC).unwrap();

    let output = ccg_reader().arg("json").arg(&path).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["name"], "sentence=1_id=1");
}

#[test]
fn format_flag_overrides_suffix() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trees.txt");
    fs::write(&path, PTB).unwrap();

    ccg_reader()
        .args(["json", "--format", "ptb"])
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("\"ID=1\""));
}

#[test]
fn check_walks_directories() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.auto"), AUTO).unwrap();
    fs::write(dir.path().join("b.ptb"), PTB).unwrap();
    fs::write(dir.path().join("README"), "not a treebank").unwrap();

    ccg_reader()
        .arg("check")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("checked 2 file(s), 4 derivation(s), 0 failure(s)"));
}

#[test]
fn check_reports_failures_with_diagnostics() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("good.ptb"), PTB).unwrap();
    fs::write(dir.path().join("bad.ptb"), "(ROOT (S (N a) (N b) (N c)))\n").unwrap();

    ccg_reader()
        .arg("check")
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(contains("FAILED").and(contains("1 failure(s)")))
        .stderr(contains("ccg::parse::structure").and(contains("ID=0")));
}

#[test]
fn cli_reports_miette_diagnostics_on_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.ptb");
    fs::write(&path, "(ROOT (NP/ (N dog)))\n").unwrap();

    ccg_reader()
        .arg("show")
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("ccg::category::malformed").or(contains("help:")));
}

#[test]
fn unknown_format_is_rejected() {
    ccg_reader()
        .args(["show", "--format", "conll", "x"])
        .assert()
        .failure()
        .stderr(contains("unknown format"));
}
