//! Integration tests for the muster CLI commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn muster() -> Command {
    Command::cargo_bin("muster").unwrap()
}

/// Write the standard catalog to a temp file and return its directory.
fn standard_catalog() -> TempDir {
    let dir = TempDir::new().unwrap();
    let out = muster().args(["tracks", "--json"]).output().unwrap();
    assert!(out.status.success());
    fs::write(dir.path().join("catalog.json"), out.stdout).unwrap();
    dir
}

// ---------------------------------------------------------------------------
// generate
// ---------------------------------------------------------------------------

#[test]
fn generate_scripted_runs_a_career() {
    muster()
        .args(["generate", "--scripted", "--name", "Jamison"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jamison"))
        .stdout(predicate::str::contains("Initiated new career path"))
        .stdout(predicate::str::contains("Drifter"))
        .stdout(predicate::str::contains("Mustering out"));
}

#[test]
fn generate_is_deterministic_per_seed() {
    let run = || {
        muster()
            .env("NO_COLOR", "1")
            .args(["generate", "--scripted", "--seed", "7"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn generate_random_finishes() {
    muster()
        .args(["generate", "--random", "--seed", "3", "--max-careers", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Life"));
}

#[test]
fn generate_limits_offered_careers() {
    // Scout either qualifies or the first fallback option, Drifter, is taken.
    muster()
        .args(["generate", "--scripted", "--careers", "scout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scout"));
}

#[test]
fn generate_rejects_unknown_career() {
    muster()
        .args(["generate", "--scripted", "--careers", "Pirate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Pirate"));
}

#[test]
fn generate_sets_the_starting_age() {
    muster()
        .env("NO_COLOR", "1")
        .args(["generate", "--scripted", "--age", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Drifter term 1 started, age 30"));
}

#[test]
fn scripted_and_random_conflict() {
    muster()
        .args(["generate", "--scripted", "--random"])
        .assert()
        .failure();
}

#[test]
fn generate_reads_answers_from_stdin() {
    // Empty input: every question takes its first option.
    muster()
        .args(["generate", "--seed", "11"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initiated new career path"));
}

// ---------------------------------------------------------------------------
// save / show
// ---------------------------------------------------------------------------

#[test]
fn saved_path_can_be_shown() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("jamison.json");

    muster()
        .args(["generate", "--scripted", "--name", "Jamison", "--save"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved"));

    let json = fs::read_to_string(&file).unwrap();
    assert!(json.contains("\"careers\""));

    muster()
        .arg("show")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Jamison"))
        .stdout(predicate::str::contains("Drifter"));
}

#[test]
fn show_missing_file_fails() {
    muster()
        .args(["show", "/nonexistent/path.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn show_rejects_garbage() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("bad.json");
    fs::write(&file, "{\"character\": 3}").unwrap();
    muster()
        .arg("show")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// tracks
// ---------------------------------------------------------------------------

#[test]
fn tracks_lists_standard_catalog() {
    muster()
        .arg("tracks")
        .assert()
        .success()
        .stdout(predicate::str::contains("Drifter"))
        .stdout(predicate::str::contains("Marines"))
        .stdout(predicate::str::contains("military"))
        .stdout(predicate::str::contains("automatic"))
        .stdout(predicate::str::contains("6 tracks"));
}

#[test]
fn tracks_json_is_a_catalog() {
    muster()
        .args(["tracks", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"draft\""));
}

#[test]
fn tracks_accepts_a_catalog_file() {
    let dir = standard_catalog();
    muster()
        .arg("tracks")
        .arg("--catalog")
        .arg(dir.path().join("catalog.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Navy"));
}

// ---------------------------------------------------------------------------
// check-catalog
// ---------------------------------------------------------------------------

#[test]
fn check_catalog_accepts_the_standard_set() {
    let dir = standard_catalog();
    muster()
        .arg("check-catalog")
        .arg(dir.path().join("catalog.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("6 tracks"));
}

#[test]
fn check_catalog_rejects_missing_fallback() {
    let dir = standard_catalog();
    let path = dir.path().join("catalog.json");
    let json = fs::read_to_string(&path).unwrap();
    fs::write(&path, json.replace("\"fallback\": true", "\"fallback\": false")).unwrap();
    muster()
        .arg("check-catalog")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("fallback"));
}

#[test]
fn check_catalog_rejects_unknown_skills() {
    let dir = standard_catalog();
    let path = dir.path().join("catalog.json");
    let json = fs::read_to_string(&path).unwrap();
    fs::write(&path, json.replace("\"Gun Combat\"", "\"Gun Combt\"")).unwrap();
    muster()
        .arg("check-catalog")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown skill: Gun Combt"));
}

#[test]
fn check_catalog_rejects_bad_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, "not json").unwrap();
    muster()
        .arg("check-catalog")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn generate_uses_a_catalog_file() {
    let dir = standard_catalog();
    muster()
        .args(["generate", "--scripted", "--catalog"])
        .arg(dir.path().join("catalog.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Drifter"));
}
