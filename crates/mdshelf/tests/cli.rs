#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn mdshelf_cmd(data: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("mdshelf"));
    cmd.env("MDSHELF_DATA", data.path().as_os_str())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_fresh_shelf_lists_seed_documents() {
    let data = TempDir::new().unwrap();

    mdshelf_cmd(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("JavaScript 高级技巧"))
        .stdout(predicate::str::contains("CSS Grid"));
}

#[test]
fn test_add_then_list_and_view() {
    let data = TempDir::new().unwrap();

    mdshelf_cmd(&data)
        .args([
            "add",
            "--title",
            "Shell notes",
            "--category",
            "ops",
            "--tags",
            "bash, cli",
            "--content",
            "# Pipes\n\nUse `|` to chain.",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Document created: Shell notes"));

    assert!(data.path().join("documents.json").exists());

    mdshelf_cmd(&data)
        .args(["list", "--category", "ops"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Shell notes"))
        .stdout(predicate::str::contains("#bash #cli"))
        .stdout(predicate::str::contains("JavaScript").not());

    mdshelf_cmd(&data)
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use `|` to chain."));
}

#[test]
fn test_add_reads_content_from_stdin() {
    let data = TempDir::new().unwrap();

    mdshelf_cmd(&data)
        .args(["add", "--title", "Piped"])
        .write_stdin("from a pipe")
        .assert()
        .success();

    mdshelf_cmd(&data)
        .args(["list", "--search", "FROM A PIPE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Piped"));
}

#[test]
fn test_add_without_content_fails() {
    let data = TempDir::new().unwrap();

    mdshelf_cmd(&data)
        .args(["add", "--title", "Empty"])
        .write_stdin("   ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("content"));
}

#[test]
fn test_edit_unknown_document_fails() {
    let data = TempDir::new().unwrap();

    mdshelf_cmd(&data)
        .args(["edit", "no-such-doc", "--title", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("not found"));

    assert!(!data.path().join("documents.json").exists());
}

#[test]
fn test_edit_by_position() {
    let data = TempDir::new().unwrap();

    mdshelf_cmd(&data)
        .args(["edit", "#2", "--category", "archive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Document updated: React Hooks"));

    mdshelf_cmd(&data)
        .args(["list", "-c", "archive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2. React Hooks"));
}

#[test]
fn test_import_files() {
    let data = TempDir::new().unwrap();
    let files = TempDir::new().unwrap();
    let note = files.path().join("guide.md");
    let photo = files.path().join("photo.png");
    fs::write(&note, "# Guide\n\n![map](./img/map.png)").unwrap();
    fs::write(&photo, [0u8, 1, 2]).unwrap();

    mdshelf_cmd(&data)
        .arg("import")
        .arg(&note)
        .arg(&photo)
        .args(["--tags", "docs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 document(s)"))
        .stdout(predicate::str::contains("assets/images/"))
        .stdout(predicate::str::contains("photo.png"));

    mdshelf_cmd(&data)
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("![map](assets/images/map.png)"))
        .stdout(predicate::str::contains("imported"));
}

#[test]
fn test_render_outputs_html() {
    let data = TempDir::new().unwrap();

    mdshelf_cmd(&data)
        .args(["render", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>"))
        .stdout(predicate::str::contains("<pre><code class=\"language-css\">"));
}

#[test]
fn test_categories_and_tags() {
    let data = TempDir::new().unwrap();

    mdshelf_cmd(&data)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("技术笔记"))
        .stdout(predicate::str::contains("学习心得"));

    mdshelf_cmd(&data)
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("前端框架"));
}

#[test]
fn test_theme_toggle_persists() {
    let data = TempDir::new().unwrap();

    mdshelf_cmd(&data)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light"));

    mdshelf_cmd(&data)
        .args(["theme", "--toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: dark"))
        .stdout(predicate::str::contains("github-dark"));

    mdshelf_cmd(&data)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: dark"));
}

#[test]
fn test_data_flag_overrides_env() {
    let env_dir = TempDir::new().unwrap();
    let flag_dir = TempDir::new().unwrap();

    mdshelf_cmd(&env_dir)
        .args(["add", "--title", "Flagged", "--content", "x", "--data"])
        .arg(flag_dir.path())
        .assert()
        .success();

    assert!(flag_dir.path().join("documents.json").exists());
    assert!(!env_dir.path().join("documents.json").exists());
}
