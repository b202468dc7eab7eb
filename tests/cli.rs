use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn studytimer(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("studytimer").unwrap();
    cmd.env("STUDYTIMER_HOME", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    studytimer(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("start"))
        .stdout(predicate::str::contains("history"))
        .stdout(predicate::str::contains("dashboard"));
}

#[test]
fn test_today_on_empty_history() {
    let dir = TempDir::new().unwrap();
    studytimer(&dir)
        .args(["today", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalMinutes\": 0"))
        .stdout(predicate::str::contains("\"sessionCount\": 0"));
}

#[test]
fn test_history_on_empty_history() {
    let dir = TempDir::new().unwrap();
    studytimer(&dir)
        .args(["history", "--days", "30", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"days\": 30"))
        .stdout(predicate::str::contains("\"count\": 0"));

    studytimer(&dir)
        .args(["--data-dir"])
        .arg(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No completed sessions"));
}

#[test]
fn test_stats_suggests_short_break_first() {
    let dir = TempDir::new().unwrap();
    studytimer(&dir)
        .args(["stats", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"suggestedBreak\": \"short\""));
}

#[test]
fn test_config_init_and_show() {
    let dir = TempDir::new().unwrap();
    studytimer(&dir)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(dir.path().join("config.yaml").exists());

    studytimer(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    studytimer(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("focus_duration: 25"));
}

#[test]
fn test_config_sets_default_output() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.yaml"),
        "general:\n  default_output: json\n",
    )
    .unwrap();

    studytimer(&dir)
        .arg("today")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"averageQuality\""));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.yaml"), "timer: [not, a, map]\n").unwrap();

    studytimer(&dir)
        .arg("today")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config"));
}

#[test]
fn test_rate_unknown_session_fails() {
    let dir = TempDir::new().unwrap();
    studytimer(&dir)
        .args(["rate", "12345", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_rate_rejects_out_of_range() {
    let dir = TempDir::new().unwrap();
    studytimer(&dir)
        .args(["rate", "12345", "9"])
        .assert()
        .failure();
}

#[test]
fn test_clear_requires_force() {
    let dir = TempDir::new().unwrap();
    studytimer(&dir)
        .arg("clear")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    studytimer(&dir)
        .args(["clear", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 0 sessions"));
}

#[test]
fn test_completions_bash() {
    let dir = TempDir::new().unwrap();
    studytimer(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("studytimer"));
}

#[test]
fn test_start_rejects_bad_duration() {
    let dir = TempDir::new().unwrap();
    studytimer(&dir)
        .args(["start", "--duration", "later"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid duration"));
}
