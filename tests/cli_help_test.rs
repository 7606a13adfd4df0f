//! CLI integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

/// 環境変数の影響を受けないコマンド
fn catalog(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("catalog").unwrap();
    cmd.env("CATALOG_HOME", home.path())
        .env_remove("CATALOG_FILE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_root_help() {
    let home = TempDir::new().unwrap();
    catalog(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Browse and search the example catalog"));
}

#[test]
fn test_prefs_help() {
    let home = TempDir::new().unwrap();
    catalog(&home)
        .args(["prefs", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reset"));
}

#[test]
fn test_list_simple_uses_builtin_catalog() {
    let home = TempDir::new().unwrap();
    catalog(&home)
        .args(["list", "--simple"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FragmentExample"));
}

#[test]
fn test_search_json() {
    let home = TempDir::new().unwrap();
    catalog(&home)
        .args(["search", "--json", "jetpack compose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Jetpack Compose\""))
        .stdout(predicate::str::contains("ComposeExampleApp"));
}

#[test]
fn test_search_settings() {
    let home = TempDir::new().unwrap();
    catalog(&home)
        .args(["search", "--settings", "--json", "grayscale"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"grayscale\""));
}

#[test]
fn test_info_unknown_example_is_usage_error() {
    let home = TempDir::new().unwrap();
    catalog(&home)
        .args(["info", "NoSuchExample"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Example not found: NoSuchExample"));
}

#[test]
fn test_info_json() {
    let home = TempDir::new().unwrap();
    catalog(&home)
        .args(["info", "fragmentexample", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"FragmentExample\""));
}

#[test]
fn test_custom_catalog_file() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("mine.yaml");
    std::fs::write(
        &file,
        "sections:\n  - name: Demo\n    examples:\n      - name: HelloExample\n        title: Hello\n",
    )
    .unwrap();

    catalog(&home)
        .arg("--catalog")
        .arg(&file)
        .args(["list", "--simple"])
        .assert()
        .success()
        .stdout(predicate::str::diff("HelloExample\n"));
}

#[test]
fn test_unsupported_catalog_format() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("mine.json");
    std::fs::write(&file, "{}").unwrap();

    catalog(&home)
        .env("CATALOG_FILE", &file)
        .args(["list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported catalog format"));
}

#[test]
fn test_prefs_set_then_get() {
    let home = TempDir::new().unwrap();
    catalog(&home)
        .args(["prefs", "set", "page_scroll_direction", "vertical"])
        .assert()
        .success();

    catalog(&home)
        .args(["prefs", "get", "page_scroll_direction"])
        .assert()
        .success()
        .stdout(predicate::str::diff("VERTICAL\n"));

    assert!(home.path().join("settings.toml").exists());
}

#[test]
fn test_prefs_invalid_value() {
    let home = TempDir::new().unwrap();
    catalog(&home)
        .args(["prefs", "set", "start_page", "first"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected an integer"));
}
