//! CLI exit-code contract: 0 even with failing models, 2 for bad config,
//! 3 when the reporter fails.

#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn gallery(names: &[&str]) -> tempfile::TempDir {
    let tmp = tempfile::tempdir().unwrap();
    for name in names {
        let dir = tmp.path().join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{name}.ell.zip")), b"stub").unwrap();
    }
    tmp
}

fn modelsweep() -> Command {
    Command::cargo_bin("modelsweep").unwrap()
}

#[test]
fn exits_zero_when_all_models_pass() {
    let tmp = gallery(&["A", "B"]);
    let ok = script(tmp.path(), "ok.sh", "exit 0");

    modelsweep()
        .args(["--path"])
        .arg(tmp.path())
        .args(["--tester"])
        .arg(&ok)
        .args(["--reporter"])
        .arg(&ok)
        .assert()
        .success();
}

#[test]
fn exits_zero_even_when_every_model_fails() {
    let tmp = gallery(&["A", "B"]);
    let ok = script(tmp.path(), "ok.sh", "exit 0");
    let bad = script(tmp.path(), "bad.sh", "echo broken model >&2; exit 1");
    let summary = tmp.path().join("summary.json");

    modelsweep()
        .args(["--path"])
        .arg(tmp.path())
        .args(["--tester"])
        .arg(&bad)
        .args(["--reporter"])
        .arg(&ok)
        .args(["--summary-json"])
        .arg(&summary)
        .assert()
        .success();

    let v: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&summary).unwrap()).unwrap();
    assert_eq!(v["total"], 2);
    assert_eq!(v["passed"], 0);
    assert_eq!(v["failed"], 2);
}

#[test]
fn exits_config_error_for_missing_path() {
    let tmp = tempfile::tempdir().unwrap();
    let ok = script(tmp.path(), "ok.sh", "exit 0");

    modelsweep()
        .args(["--path", "/does/not/exist"])
        .args(["--tester"])
        .arg(&ok)
        .args(["--reporter"])
        .arg(&ok)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn exits_report_error_when_reporter_fails() {
    let tmp = gallery(&["A"]);
    let ok = script(tmp.path(), "ok.sh", "exit 0");
    let bad = script(tmp.path(), "bad.sh", "echo no plot >&2; exit 1");

    modelsweep()
        .args(["--path"])
        .arg(tmp.path())
        .args(["--tester"])
        .arg(&ok)
        .args(["--reporter"])
        .arg(&bad)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("report generation failed"));
}

#[test]
fn sequential_mode_runs_every_model() {
    let tmp = gallery(&["A", "B", "C"]);
    let marker_dir = tmp.path().join("markers");
    fs::create_dir_all(&marker_dir).unwrap();
    // Record one marker file per derived test_dir name.
    let rec = script(
        tmp.path(),
        "rec.sh",
        &format!("touch {}/\"$4\"", marker_dir.display()),
    );
    let ok = script(tmp.path(), "ok.sh", "exit 0");

    modelsweep()
        .args(["--path"])
        .arg(tmp.path())
        .args(["--mode", "sequential"])
        .args(["--tester"])
        .arg(&rec)
        .args(["--reporter"])
        .arg(&ok)
        .assert()
        .success();

    let mut markers: Vec<String> = fs::read_dir(&marker_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    markers.sort();
    assert_eq!(markers, vec!["A_pitest", "B_pitest", "C_pitest"]);
}
