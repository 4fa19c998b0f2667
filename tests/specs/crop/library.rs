//! Crop library specs

use crate::prelude::*;

#[test]
fn empty_library() {
    let farm = Farm::empty();
    farm.kb()
        .args(&["crop", "list"])
        .passes()
        .stdout_eq("No crops\n");
}

#[test]
fn new_crop_gets_library_defaults() {
    let farm = Farm::empty();
    let out = farm
        .kb()
        .args(&["--output", "json", "crop", "add", "Spinach"])
        .passes()
        .json();

    assert_eq!(out["name"], "Spinach");
    assert_eq!(out["sowing_days"], 0.02);
    assert_eq!(out["seedling_days"], 3.0);
    assert_eq!(out["germination_days"], 7.0);
    assert_eq!(out["vegetative_days"], 21.0);
    assert_eq!(out["harvest_days"], 2.0);
    assert_eq!(out["packaging_days"], 1.0);
}

#[test]
fn add_accepts_duration_overrides() {
    let farm = Farm::empty();
    let out = farm
        .kb()
        .args(&[
            "--output",
            "json",
            "crop",
            "add",
            "Basil",
            "--seedling",
            "4.5",
            "--vegetative",
            "0",
        ])
        .passes()
        .json();
    assert_eq!(out["seedling_days"], 4.5);
    assert_eq!(out["vegetative_days"], 0.0);
}

#[test]
fn blank_name_is_rejected() {
    let farm = Farm::empty();
    farm.kb()
        .args(&["crop", "add", "  "])
        .fails()
        .stderr_has("name must not be empty");
}

#[test]
fn set_duration_by_field_name() {
    let farm = Farm::empty();
    let id = farm.crop("Kale", &[]);

    let out = farm
        .kb()
        .args(&["--output", "json", "crop", "set", &id, "germination_days", "10"])
        .passes()
        .json();
    assert_eq!(out["germination_days"], 10.0);
}

#[test]
fn set_duration_by_id_prefix_and_bare_stage() {
    let farm = Farm::empty();
    let id = farm.crop("Kale", &[]);

    farm.kb()
        .args(&["crop", "set", &id[..8], "harvest", "3"])
        .passes()
        .stdout_has("Kale");
}

#[test]
fn non_numeric_duration_is_rejected() {
    let farm = Farm::empty();
    let id = farm.crop("Kale", &[]);

    farm.kb()
        .args(&["crop", "set", &id, "seedling_days", "soon"])
        .fails()
        .stderr_has("invalid duration for seedling: soon");
}

#[test]
fn negative_duration_is_rejected() {
    let farm = Farm::empty();
    let id = farm.crop("Kale", &[]);

    farm.kb()
        .args(&["crop", "set", &id, "sowing_days", "--", "-1"])
        .fails()
        .stderr_has("invalid duration for sowing");
}

#[test]
fn unknown_field_is_rejected() {
    let farm = Farm::empty();
    let id = farm.crop("Kale", &[]);

    farm.kb()
        .args(&["crop", "set", &id, "quantity", "3"])
        .fails();
}

#[test]
fn crop_in_use_cannot_be_removed() {
    let farm = Farm::empty();
    let crop = farm.crop("Kale", &[]);
    let bench = farm.location("Bench A");
    let batch = farm.batch(&crop, &bench, "2024-03-01T08:00:00Z");

    farm.kb()
        .args(&["crop", "rm", &crop])
        .fails()
        .stderr_has("is used by 1 batch");

    farm.kb().args(&["batch", "rm", &batch]).passes();
    farm.kb()
        .args(&["crop", "rm", &crop])
        .passes()
        .stdout_eq("Removed crop Kale\n");
    farm.kb()
        .args(&["crop", "list"])
        .passes()
        .stdout_eq("No crops\n");
}

#[test]
fn unknown_crop_id() {
    let farm = Farm::empty();
    farm.kb()
        .args(&["crop", "rm", "nope"])
        .fails()
        .stderr_has("no crop matches 'nope'");
}
