//! Integration tests for the Libris CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command wired to a temporary data directory
fn libris(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("libris-cli").unwrap();
    cmd.env("LIBRIS_DATA_DIR", data_dir.path());
    cmd
}

fn add_book(data_dir: &TempDir, id: &str, title: &str, author: &str) {
    libris(data_dir)
        .args(["add", id, "--title", title, "--author", author])
        .assert()
        .success();
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("libris-cli").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("issue"))
        .stdout(predicate::str::contains("return"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("search"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("libris-cli").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("libris"));
}

#[test]
fn test_add_help() {
    let mut cmd = Command::cargo_bin("libris-cli").unwrap();
    cmd.args(["add", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Register a new book"))
        .stdout(predicate::str::contains("--title"))
        .stdout(predicate::str::contains("--author"))
        .stdout(predicate::str::contains("--image"));
}

#[test]
fn test_add_missing_title() {
    let temp_dir = TempDir::new().unwrap();
    libris(&temp_dir)
        .args(["add", "B1", "--author", "Frank Herbert"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_add_creates_table_files() {
    let temp_dir = TempDir::new().unwrap();

    libris(&temp_dir)
        .args(["add", "B1", "--title", "Dune", "--author", "Frank Herbert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added B1"));

    let books = fs::read_to_string(temp_dir.path().join("books.csv")).unwrap();
    assert!(books.starts_with("BookID,Title,Author,Status,ImagePath"));
    assert!(books.contains("B1,Dune,Frank Herbert,Available,"));
}

#[test]
fn test_add_duplicate_id_fails() {
    let temp_dir = TempDir::new().unwrap();
    add_book(&temp_dir, "B1", "Dune", "Frank Herbert");

    libris(&temp_dir)
        .args(["add", "B1", "--title", "Emma", "--author", "Jane Austen"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_list_empty() {
    let temp_dir = TempDir::new().unwrap();
    libris(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No local books added yet."));
}

#[test]
fn test_list_shows_books_in_insertion_order() {
    let temp_dir = TempDir::new().unwrap();
    add_book(&temp_dir, "Z9", "Dune", "Frank Herbert");
    add_book(&temp_dir, "A1", "Emma", "Jane Austen");

    let output = libris(&temp_dir).arg("list").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    let dune = stdout.find("Dune").unwrap();
    let emma = stdout.find("Emma").unwrap();
    assert!(dune < emma, "Books should print in table order");
}

#[test]
fn test_list_json_output() {
    let temp_dir = TempDir::new().unwrap();
    add_book(&temp_dir, "B1", "Dune", "Frank Herbert");

    let output = libris(&temp_dir)
        .args(["list", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("Output should be valid JSON");
    assert_eq!(json[0]["id"], "B1");
    assert_eq!(json[0]["status"], "Available");
}

#[test]
fn test_delete_unknown_book_fails() {
    let temp_dir = TempDir::new().unwrap();
    libris(&temp_dir)
        .args(["delete", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No book with ID"));
}

#[test]
fn test_issue_and_return_flow() {
    let temp_dir = TempDir::new().unwrap();
    add_book(&temp_dir, "B1", "Dune", "Frank Herbert");

    libris(&temp_dir)
        .args(["issue", "B1", "--to", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Issued B1: Dune to Alice"));

    libris(&temp_dir)
        .args(["list", "--loans"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"));

    // Issuing again fails while the loan is open
    libris(&temp_dir)
        .args(["issue", "B1", "--to", "Bob"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already issued"));

    libris(&temp_dir)
        .args(["return", "B1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Returned B1"));

    libris(&temp_dir)
        .args(["list", "--loans"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No books currently issued."));
}

#[test]
fn test_return_without_loan_fails() {
    let temp_dir = TempDir::new().unwrap();
    add_book(&temp_dir, "B1", "Dune", "Frank Herbert");

    libris(&temp_dir)
        .args(["return", "B1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not issued"));
}

#[test]
fn test_add_with_image_and_delete_cleans_up() {
    let temp_dir = TempDir::new().unwrap();
    let image = temp_dir.path().join("dune.png");
    fs::write(&image, b"png-bytes").unwrap();

    libris(&temp_dir)
        .args([
            "add",
            "B1",
            "--title",
            "Dune",
            "--author",
            "Frank Herbert",
            "--image",
            image.to_str().unwrap(),
        ])
        .assert()
        .success();

    let stored = temp_dir.path().join("book_images").join("B1.png");
    assert!(stored.exists(), "Cover should be stored under book_images");

    libris(&temp_dir)
        .args(["delete", "B1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted B1"));

    assert!(!stored.exists(), "Cover should be removed with the book");
}

#[test]
fn test_data_dir_flag_overrides_env() {
    let env_dir = TempDir::new().unwrap();
    let flag_dir = TempDir::new().unwrap();

    libris(&env_dir)
        .args([
            "--data-dir",
            flag_dir.path().to_str().unwrap(),
            "add",
            "B1",
            "--title",
            "Dune",
            "--author",
            "Frank Herbert",
        ])
        .assert()
        .success();

    assert!(flag_dir.path().join("books.csv").exists());
    assert!(!env_dir.path().join("books.csv").exists());
}

#[test]
fn test_verbose_flag() {
    let temp_dir = TempDir::new().unwrap();
    libris(&temp_dir)
        .args(["--verbose", "list"])
        .assert()
        .success();
}
