//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fysika() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("fysika").unwrap()
}

const TEST_BANK: &str = r#"
[question_bank]
id = "test-bank"
name = "Test Bank"
description = "Bank used by CLI tests"

[[questions]]
id = "power-1"
topic = "power"
difficulty = 2
prompt = "A kettle converts 2000 J in 2 s. What is its power?"
answer_type = "numeric"
correct_answer = 1000
unit_options = ["W", "kW"]
correct_unit = "W"

[questions.tolerance]
absolute = 1.0

[[questions]]
id = "ohm-1"
topic = "circuits"
difficulty = 1
prompt = "Name the unit of electrical resistance."
answer_type = "text"
correct_answer = "ohm"
"#;

fn write_bank(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("bank.toml");
    std::fs::write(&path, TEST_BANK).unwrap();
    path
}

#[test]
fn validate_valid_bank() {
    let dir = TempDir::new().unwrap();
    let bank = write_bank(&dir);

    fysika()
        .arg("validate")
        .arg("--bank")
        .arg(&bank)
        .assert()
        .success()
        .stdout(predicate::str::contains("Test Bank (2 questions)"))
        .stdout(predicate::str::contains("All question banks valid"));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dupes.toml");
    std::fs::write(
        &path,
        r#"
[question_bank]
id = "dupes"
name = "Dupes"

[[questions]]
id = "same"
topic = "power"
prompt = "First?"
answer_type = "text"
correct_answer = "a"

[[questions]]
id = "same"
topic = "power"
prompt = "Second?"
answer_type = "text"
correct_answer = "b"
"#,
    )
    .unwrap();

    fysika()
        .arg("validate")
        .arg("--bank")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("duplicate question id"))
        .stdout(predicate::str::contains("warning(s) found"));
}

#[test]
fn validate_nonexistent_file() {
    fysika()
        .arg("validate")
        .arg("--bank")
        .arg("definitely-missing.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn grade_correct_answer() {
    let dir = TempDir::new().unwrap();
    let bank = write_bank(&dir);

    fysika()
        .args(["grade", "--question", "ohm-1", "--answer", "Ohm"])
        .arg("--bank")
        .arg(&bank)
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct!"));
}

#[test]
fn grade_converts_units() {
    let dir = TempDir::new().unwrap();
    let bank = write_bank(&dir);

    fysika()
        .args(["grade", "--question", "power-1", "--answer", "1", "--unit", "kW"])
        .arg("--bank")
        .arg(&bank)
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct!"));
}

#[test]
fn grade_incorrect_answer_exits_2() {
    let dir = TempDir::new().unwrap();
    let bank = write_bank(&dir);

    fysika()
        .args(["grade", "--question", "power-1", "--answer", "900", "--unit", "W"])
        .arg("--bank")
        .arg(&bank)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Incorrect"));
}

#[test]
fn grade_dutch_feedback() {
    let dir = TempDir::new().unwrap();
    let bank = write_bank(&dir);

    fysika()
        .args(["grade", "--question", "ohm-1", "--answer", "ohm", "--language", "nl"])
        .arg("--bank")
        .arg(&bank)
        .assert()
        .success()
        .stdout(predicate::str::contains("Goed!"));
}

#[test]
fn grade_json_output() {
    let dir = TempDir::new().unwrap();
    let bank = write_bank(&dir);

    fysika()
        .args(["grade", "--question", "ohm-1", "--answer", "ohm", "--json"])
        .arg("--bank")
        .arg(&bank)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"correct\": true"));
}

#[test]
fn grade_unknown_question() {
    let dir = TempDir::new().unwrap();
    let bank = write_bank(&dir);

    fysika()
        .args(["grade", "--question", "nope", "--answer", "1"])
        .arg("--bank")
        .arg(&bank)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn topics_listing() {
    fysika()
        .arg("topics")
        .assert()
        .success()
        .stdout(predicate::str::contains("forces-newton"))
        .stdout(predicate::str::contains("Kinematics 2D"));
}

#[test]
fn topics_level_filter() {
    fysika()
        .args(["topics", "--level", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Power"))
        .stdout(predicate::str::contains("Kinematics 2D").not());
}

#[test]
fn init_creates_starter_bank() {
    let dir = TempDir::new().unwrap();

    fysika()
        .arg("init")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created questions.toml"));

    // The starter bank it writes must validate cleanly.
    fysika()
        .arg("validate")
        .arg("--bank")
        .arg(dir.path().join("questions.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("All question banks valid"));

    // Running init again leaves the existing file alone.
    fysika()
        .arg("init")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn stats_without_progress() {
    let dir = TempDir::new().unwrap();

    fysika()
        .arg("stats")
        .arg("--progress")
        .arg(dir.path().join("missing.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No practice recorded yet"));
}

#[test]
fn practice_round_with_piped_answers() {
    let dir = TempDir::new().unwrap();
    let bank = write_bank(&dir);
    let progress = dir.path().join("progress.json");

    fysika()
        .args(["practice", "--topic", "circuits", "--count", "1"])
        .arg("--bank")
        .arg(&bank)
        .arg("--progress")
        .arg(&progress)
        .write_stdin("ohm\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct!"));

    assert!(progress.exists());
    let saved = std::fs::read_to_string(&progress).unwrap();
    assert!(saved.contains("\"ohm-1\""));
}

#[test]
fn practice_serves_hints_for_question_marks() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hints.toml");
    std::fs::write(
        &path,
        r#"
[question_bank]
id = "hints"
name = "Hints"

[[questions]]
id = "q1"
topic = "circuits"
prompt = "Name the unit of electrical resistance."
answer_type = "text"
correct_answer = "ohm"
hints = ["It is named after a German physicist."]
"#,
    )
    .unwrap();
    let progress = dir.path().join("progress.json");

    fysika()
        .args(["practice", "--topic", "circuits", "--count", "1"])
        .arg("--bank")
        .arg(&path)
        .arg("--progress")
        .arg(&progress)
        .write_stdin("?\nohm\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hint 1: It is named after"))
        .stdout(predicate::str::contains("Correct!"));
}
