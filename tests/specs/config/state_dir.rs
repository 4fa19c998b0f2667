//! State directory, settings file, and log file

use crate::prelude::*;

#[test]
fn env_var_selects_state_dir() {
    let farm = Farm::empty();
    Cli::bare()
        .env("KEBUN_STATE_DIR", farm.path())
        .args(&["location", "add", "Bench A"])
        .passes();

    assert!(farm.path().join("wal/farm.wal").is_file());
    farm.kb()
        .args(&["location", "list"])
        .passes()
        .stdout_has("Bench A");
}

#[test]
fn state_survives_between_invocations() {
    let farm = Farm::empty();
    farm.crop("Spinach", &[]);
    farm.crop("Basil", &[]);

    let list = farm.kb().args(&["--output", "json", "crop", "list"]).passes().json();
    let names: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Basil", "Spinach"]);
}

#[test]
fn settings_file_sets_default_output() {
    let farm = Farm::empty();
    farm.file("config.toml", "output = \"json\"\n");

    let out = farm.kb().args(&["crop", "list"]).passes();
    assert_eq!(out.json(), Value::Array(vec![]));

    farm.kb()
        .args(&["--output", "text", "crop", "list"])
        .passes()
        .stdout_eq("No crops\n");
}

#[test]
fn bad_settings_file_is_reported() {
    let farm = Farm::empty();
    farm.file("config.toml", "output = 3\n");
    farm.kb()
        .args(&["crop", "list"])
        .fails()
        .stderr_has("invalid settings");
}

#[test]
fn commands_log_to_file_not_stdout() {
    let farm = Farm::empty();
    farm.kb()
        .args(&["location", "add", "Bench A"])
        .passes()
        .stdout_lacks("INFO");

    let log = std::fs::read_to_string(farm.path().join("kebun.log")).unwrap();
    assert!(log.contains("location added"), "log was:\n{log}");
}
