//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mquest() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("mquest").unwrap()
}

fn stdout_of(args: &[&str]) -> String {
    let output = mquest().args(args).output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn ordered_multiplication_to_stdout() {
    mquest()
        .args(["--mode", "m", "--operands", "3"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Questions:\n----------\n 1 x 3 = \n 2 x 3 = \n",
        ))
        .stdout(predicate::str::contains("12 x 3 = \n\n"));
}

#[test]
fn short_flags() {
    mquest()
        .args(["-m", "d", "-o", "5", "-d", "0"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Monday:\n-------\n"))
        .stdout(predicate::str::contains(" 60 ÷ 5 = "));
}

#[test]
fn start_day_produces_a_week() {
    let out = stdout_of(&["--mode", "m", "--operands", "7", "--start-day", "2"]);
    let days = [
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
        "Monday",
        "Tuesday",
    ];
    let sections: Vec<&str> = out.split("\n\n").filter(|s| !s.trim().is_empty()).collect();
    assert_eq!(sections.len(), 7);
    for (section, day) in sections.iter().zip(days) {
        let mut lines = section.lines();
        assert_eq!(lines.next().unwrap(), format!("{day}:"));
        assert_eq!(lines.next().unwrap(), "-".repeat(day.len() + 1));
    }
    assert!(!out.contains("Questions:"));
}

#[test]
fn mixed_multiplication_uses_given_multipliers() {
    let out = stdout_of(&["--mode", "mm", "--operands", "2", "10"]);
    let questions: Vec<&str> = out.lines().skip(2).filter(|l| !l.is_empty()).collect();
    assert_eq!(questions.len(), 12);
    for q in questions {
        let multiplier = q.split_whitespace().nth(2).unwrap();
        assert!(multiplier == "2" || multiplier == "10", "unexpected question {q:?}");
    }
}

#[test]
fn seed_makes_output_reproducible() {
    let args = ["--mode", "m", "--operands", "6", "--shuffle", "--start-day", "6", "--seed", "99"];
    assert_eq!(stdout_of(&args), stdout_of(&args));
}

#[test]
fn write_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("divide_by_3.txt");

    mquest()
        .args(["--mode", "d", "--operands", "3", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("Questions:\n----------\n"));
    assert!(text.contains(" 36 ÷ 3 = "));
    assert!(text.ends_with("\n\n"));
}

#[test]
fn file_is_overwritten() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");
    std::fs::write(&path, "stale contents").unwrap();

    mquest()
        .args(["-m", "m", "-o", "4", "-f"])
        .arg(&path)
        .assert()
        .success();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(!text.contains("stale"));
    assert!(text.starts_with("Questions:"));
}

#[test]
fn unwritable_file_fails() {
    mquest()
        .args(["-m", "m", "-o", "4", "-f", "/nonexistent-dir/out.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn missing_mode_rejected() {
    mquest().args(["--operands", "3"]).assert().failure();
}

#[test]
fn missing_operands_rejected() {
    mquest().args(["--mode", "m"]).assert().failure();
}

#[test]
fn unknown_mode_rejected() {
    mquest()
        .args(["--mode", "x", "--operands", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn start_day_out_of_range_rejected() {
    mquest()
        .args(["--mode", "m", "--operands", "3", "--start-day", "7"])
        .assert()
        .failure();
}

#[test]
fn division_with_several_operands_rejected() {
    mquest()
        .args(["--mode", "d", "--operands", "2", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly one operand"));
}

#[test]
fn oversized_divisor_rejected() {
    mquest()
        .args(["--mode", "d", "--operands", "4611686018427387904"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn largest_divisor_accepted() {
    // i64::MAX / 12
    mquest()
        .args(["--mode", "d", "--operands", "768614336404564650"])
        .assert()
        .success()
        .stdout(predicate::str::contains("9223372036854775800 ÷ 768614336404564650 = "));
}

#[test]
fn shuffle_ignored_for_division() {
    mquest()
        .args(["--mode", "d", "--operands", "2", "--shuffle"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" 24 ÷ 2 = "));
}

#[test]
fn help_output() {
    mquest()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mathematics question generator"));
}

#[test]
fn version_output() {
    mquest()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mquest"));
}
