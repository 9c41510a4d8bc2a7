//! End-to-end tests for the `inspect-step` binary.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::{fs, path::PathBuf, process::Command};
use tempfile::{TempDir, tempdir};

const APP_EXPORT: &str = include_str!("fixtures/app_export.json");

fn write_export(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("app.json");
    fs::write(&path, contents).unwrap();
    path
}

fn inspect_step() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("inspect-step"))
}

#[test]
fn prints_report_and_diagram() {
    let dir = tempdir().unwrap();
    let path = write_export(&dir, APP_EXPORT);

    inspect_step()
        .arg(&path)
        .arg("s_pack")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Loaded 4 step(s).\n"))
        .stdout(predicate::str::contains("=== On step enter (1) ==="))
        .stdout(predicate::str::contains(
            "================ Mermaid (step + trigger logic) ================\nflowchart LR\n",
        ))
        .stdout(predicate::str::contains(
            "trig_t__open_a1[\"Load record :Shift from agg:ShiftID Day\"]",
        ));
}

#[test]
fn diagram_only_skips_report() {
    let dir = tempdir().unwrap();
    let path = write_export(&dir, APP_EXPORT);

    inspect_step()
        .args(["--diagram-only"])
        .arg(&path)
        .arg("s_pack")
        .assert()
        .success()
        .stdout(predicate::str::contains("Step summary").not())
        .stdout(predicate::str::contains("flowchart LR"));
}

#[test]
fn report_only_skips_diagram() {
    let dir = tempdir().unwrap();
    let path = write_export(&dir, APP_EXPORT);

    inspect_step()
        .arg(&path)
        .arg("s_pack")
        .arg("--report-only")
        .assert()
        .success()
        .stdout(predicate::str::contains("Step summary"))
        .stdout(predicate::str::contains("Mermaid").not());
}

#[test]
fn step_without_wiring_prints_placeholder() {
    let dir = tempdir().unwrap();
    let path = write_export(&dir, APP_EXPORT);

    inspect_step()
        .arg(&path)
        .arg("s_empty")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("  (no triggers or widgets on this step)\n"));
}

#[test]
fn wrong_argument_count_is_a_usage_error() {
    inspect_step().assert().failure().stderr(predicate::str::contains("Usage"));

    inspect_step()
        .args(["a.json", "s1", "extra"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_triggers_collection_fails() {
    let dir = tempdir().unwrap();
    let path = write_export(&dir, r#"{"steps": [{"_id": "s1"}]}"#);

    inspect_step()
        .arg(&path)
        .arg("s1")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("[Parse:P002]"));
}

#[test]
fn unreadable_file_fails_with_context() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.json");

    inspect_step()
        .arg(&missing)
        .arg("s1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn unknown_step_lists_known_ids() {
    let dir = tempdir().unwrap();
    let path = write_export(&dir, APP_EXPORT);

    inspect_step()
        .arg(&path)
        .arg("s_inspect_typo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("[Select:S003]"))
        .stderr(predicate::str::contains("  - s_pack\n  - s_inspect\n"))
        .stderr(predicate::str::contains(
            "Did not even find the ID string inside any step objects.",
        ));
}

#[test]
fn interactive_selection_by_number() {
    let dir = tempdir().unwrap();
    let path = write_export(&dir, APP_EXPORT);

    // Sorted: Empty, inspect, Pack, Review
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("inspect-step"))
        .arg(&path)
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "  1. Empty  [id=s_empty]\n  2. inspect  [id=s_inspect]\n  3. Pack  [id=s_pack] (process=proc1, group=grp1)\n  4. Review  [id=s_review]\n",
        ))
        .stdout(predicate::str::contains("Selected step #3: Pack [id=s_pack]"))
        .stdout(predicate::str::contains("Step ID: s_pack"));
}

#[test]
fn interactive_empty_answer_exits_cleanly() {
    let dir = tempdir().unwrap();
    let path = write_export(&dir, APP_EXPORT);

    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("inspect-step"))
        .arg(&path)
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No selection made; exiting."));
}

#[test]
fn interactive_bad_answer_fails() {
    let dir = tempdir().unwrap();
    let path = write_export(&dir, APP_EXPORT);

    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("inspect-step"))
        .arg(&path)
        .write_stdin("seven\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("[Select:S001]"));

    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("inspect-step"))
        .arg(&path)
        .write_stdin("99\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("[Select:S002]"));
}
