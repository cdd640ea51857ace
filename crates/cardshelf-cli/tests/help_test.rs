use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn cardshelf() -> Command {
    let mut cmd = Command::cargo_bin("cardshelf").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_main_help() {
    cardshelf()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: cardshelf"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--log-level"));
}

#[test]
fn test_list_help_describes_filters() {
    cardshelf()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--band"))
        .stdout(predicate::str::contains("1-3, 4-5, 6-10, 11-25, 26-50, 50+"))
        .stdout(predicate::str::contains("--status"))
        .stdout(predicate::str::contains("--query"));
}

#[test]
fn test_window_help_describes_geometry() {
    cardshelf()
        .args(["window", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--scroll"))
        .stdout(predicate::str::contains("--item-width"));
}

#[test]
fn test_version() {
    cardshelf()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("cardshelf "));
}

#[test]
fn test_unknown_command_fails() {
    cardshelf()
        .arg("sell")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
