//! Smoke tests for argument handling that never reaches the database

use assert_cmd::Command;
use predicates::prelude::*;

fn lightbnb(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lightbnb").unwrap();
    // Keep any developer .env / DATABASE_URL out of the picture
    cmd.current_dir(dir.path()).env_remove("DATABASE_URL");
    cmd
}

// === Help ===

#[test]
fn test_help_lists_subcommands() {
    let dir = tempfile::tempdir().unwrap();
    lightbnb(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("reservations"))
        .stdout(predicate::str::contains("user"));
}

#[test]
fn test_search_help() {
    let dir = tempfile::tempdir().unwrap();
    lightbnb(&dir)
        .args(["search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Minimum price per night"));
}

// === Search explain ===

#[test]
fn test_search_explain_city() {
    let dir = tempfile::tempdir().unwrap();
    lightbnb(&dir)
        .args(["search", "--city", "Van", "--limit", "5", "--explain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("%Van%"))
        .stdout(predicate::str::contains("properties.city LIKE $1"))
        .stdout(predicate::str::contains("LIMIT $2"));
}

#[test]
fn test_search_explain_no_filters() {
    let dir = tempfile::tempdir().unwrap();
    lightbnb(&dir)
        .args(["search", "--explain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WHERE").not())
        .stdout(predicate::str::contains("LIMIT $1"));
}

// === Validation before connecting ===

#[test]
fn test_zero_limit_rejected() {
    let dir = tempfile::tempdir().unwrap();
    lightbnb(&dir)
        .args(["search", "--limit", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("limit"));
}

#[test]
fn test_inverted_price_range_rejected() {
    let dir = tempfile::tempdir().unwrap();
    lightbnb(&dir)
        .args(["search", "--min-price", "300", "--max-price", "100", "--explain"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be greater than"));
}

#[test]
fn test_user_add_rejects_bad_email() {
    let dir = tempfile::tempdir().unwrap();
    lightbnb(&dir)
        .args(["user", "add", "--name", "Eva", "--email", "nope", "--password", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("email"));
}

#[test]
fn test_missing_database_url() {
    let dir = tempfile::tempdir().unwrap();
    lightbnb(&dir)
        .args(["user", "id", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL"));
}

#[test]
fn test_property_add_rejects_invalid_file_before_connecting() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("listing.json");
    std::fs::write(
        &path,
        r#"{"owner_id": 0, "title": "x", "cost_per_night": 1,
            "country": "c", "street": "s", "city": "c", "province": "p", "post_code": "1"}"#,
    )
    .unwrap();

    lightbnb(&dir)
        .args(["property", "add"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("owner_id"))
        .stderr(predicate::str::contains("DATABASE_URL").not());
}
