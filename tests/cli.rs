//! Tests for the non-interactive `--check` and `--print` modes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SCENARIO: &str = "title,type,author,year,genre,rating,description\n\
                        A,game,X,2020,RPG,4.5,d1\n\
                        B,game,Y,2019,RPG,4.8,d2\n";

fn catalog(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.csv");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

fn catview() -> Command {
    Command::cargo_bin("catview").unwrap()
}

#[test]
fn check_reports_item_count() {
    let (_dir, path) = catalog(SCENARIO);
    catview()
        .arg(&path)
        .arg("--check")
        .assert()
        .success()
        .stdout("OK: 2 items\n");
}

#[test]
fn check_rejects_bad_header() {
    let (_dir, path) = catalog(&SCENARIO.replacen("title", "Title", 1));
    catview()
        .arg(&path)
        .arg("--check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid header."))
        .stderr(predicate::str::contains("Found:    Title,type"));
}

#[test]
fn check_reports_bad_row_line() {
    let (_dir, path) = catalog(&format!("{}C,game,Z,2018,RPG,4.1\n", SCENARIO));
    catview()
        .arg(&path)
        .arg("--check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid number of fields on line 4"));
}

#[test]
fn print_applies_sort_and_query() {
    let (_dir, path) = catalog(SCENARIO);
    catview()
        .arg(&path)
        .args(["--print", "--sort", "year-asc"])
        .assert()
        .success()
        .stdout(
            "title,type,author,year,genre,rating,description\n\
             B,game,Y,2019,RPG,4.8,d2\n\
             A,game,X,2020,RPG,4.5,d1\n",
        );

    catview()
        .arg(&path)
        .args(["--print", "--query", "y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("B,game,Y").and(predicate::str::contains("A,game,X").not()));
}

#[test]
fn print_filters_by_category_and_genre() {
    catview()
        .args(["--demo", "--print", "--genre", "roguelike"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hades,game,Supergiant Games"))
        .stdout(predicate::str::contains("Elden Ring").not());
}

#[test]
fn unknown_sort_key_is_a_usage_error() {
    let (_dir, path) = catalog(SCENARIO);
    catview()
        .arg(&path)
        .args(["--print", "--sort", "newest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown sort key"));
}

#[test]
fn missing_path_fails() {
    catview()
        .args(["/definitely/not/here.csv", "--check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path not found"));
}

#[test]
fn check_without_input_fails() {
    catview().arg("--check").assert().failure();
}
