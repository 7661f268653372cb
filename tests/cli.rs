use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn fails_on_missing_root() {
    let mut cmd = Command::cargo_bin("gitsweep").unwrap();
    cmd.arg("/definitely/not/a/real/path")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid root"));
}

#[test]
fn fails_when_root_is_a_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("plain.txt");
    fs::write(&file, "not a directory").unwrap();

    let mut cmd = Command::cargo_bin("gitsweep").unwrap();
    cmd.arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid root"));
}

#[test]
fn fails_on_unreadable_exclusion_list() {
    let dir = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("gitsweep").unwrap();
    cmd.arg(dir.path())
        .arg("--exclude-from")
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot open"));
}

#[test]
fn prints_search_banner() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();

    let mut cmd = Command::cargo_bin("gitsweep").unwrap();
    cmd.arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Searching temporary files"));
}

#[test]
fn reports_gitignore_with_nothing_to_remove() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".gitignore"), "# nothing here\n\n!negated\n").unwrap();

    let mut cmd = Command::cargo_bin("gitsweep").unwrap();
    cmd.arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found .gitignore file"))
        .stdout(predicate::str::contains(
            "No regular files or directories found to remove",
        ));
}

// With exclusions present the proceed gate is shown first; without a
// terminal to answer it, the run ends cleanly before any scanning.
#[test]
fn proceed_gate_declines_without_a_terminal() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".gitignore"), "junk.txt\n").unwrap();
    fs::write(dir.path().join("junk.txt"), "x").unwrap();
    let list = dir.path().join("excludes.txt");
    fs::write(&list, "vendor\n").unwrap();

    let mut cmd = Command::cargo_bin("gitsweep").unwrap();
    cmd.arg(dir.path())
        .arg("--exclude-from")
        .arg(&list)
        .assert()
        .success()
        .stdout(predicate::str::contains("The following paths will be ignored"))
        .stdout(predicate::str::contains("Found .gitignore file").not());

    assert!(dir.path().join("junk.txt").exists());
}

// Without a controlling terminal the per-candidate prompt cannot answer,
// which maps to a skip: the run still succeeds and deletes nothing.
#[test]
fn candidates_survive_when_no_terminal_answers() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".gitignore"), "junk.txt\n").unwrap();
    fs::write(dir.path().join("junk.txt"), "x").unwrap();

    let mut cmd = Command::cargo_bin("gitsweep").unwrap();
    cmd.arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found .gitignore file"));

    assert!(dir.path().join("junk.txt").exists());
}
