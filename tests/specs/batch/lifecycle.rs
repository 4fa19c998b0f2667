//! Batch lifecycle specs

use crate::prelude::*;

fn seeded() -> (Farm, String, String) {
    let farm = Farm::empty();
    let crop = farm.crop("Spinach", &[]);
    let bench = farm.location("Bench A");
    (farm, crop, bench)
}

#[test]
fn new_batch_starts_at_sowing() {
    let (farm, crop, bench) = seeded();
    let out = farm
        .kb()
        .args(&[
            "--output", "json", "batch", "start", &crop, &bench, "--at", "2024-03-01T08:00:00Z",
        ])
        .passes()
        .json();

    assert_eq!(out["stage"], "sowing");
    assert_eq!(out["quantity"], 1);
    assert_eq!(out["started_at"], "2024-03-01T08:00:00Z");
    assert_eq!(out["crop_name"], "Spinach");
}

#[test]
fn start_requires_known_location() {
    let (farm, crop, _) = seeded();
    farm.kb()
        .args(&["batch", "start", &crop, "nowhere"])
        .fails()
        .stderr_has("no location matches 'nowhere'");
}

#[test]
fn start_rejects_malformed_time() {
    let (farm, crop, bench) = seeded();
    farm.kb()
        .args(&["batch", "start", &crop, &bench, "--at", "yesterday"])
        .fails();
}

#[test]
fn five_advances_reach_packaging_then_no_op() {
    let (farm, crop, bench) = seeded();
    let batch = farm.batch(&crop, &bench, "2024-03-01T08:00:00Z");

    farm.kb()
        .args(&["batch", "advance", &batch])
        .passes()
        .stdout_eq(&format!("Advanced {batch}: sowing -> seedling\n"));

    for _ in 0..4 {
        farm.kb().args(&["batch", "advance", &batch]).passes();
    }
    farm.kb()
        .args(&["batch", "list"])
        .passes()
        .stdout_has("packaging");

    let sixth = farm
        .kb()
        .args(&["--output", "json", "batch", "advance", &batch])
        .passes()
        .json();
    assert_eq!(sixth["advanced"], false);
    assert_eq!(sixth["stage"], "packaging");
}

#[test]
fn list_shows_batches_in_start_order() {
    let (farm, crop, bench) = seeded();
    let first = farm.batch(&crop, &bench, "2024-03-02T08:00:00Z");
    let second = farm.batch(&crop, &bench, "2024-03-01T08:00:00Z");

    let list = farm
        .kb()
        .args(&["--output", "json", "batch", "list"])
        .passes()
        .json();
    let ids: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![first.as_str(), second.as_str()]);
}

#[test]
fn removed_batch_is_gone() {
    let (farm, crop, bench) = seeded();
    let batch = farm.batch(&crop, &bench, "2024-03-01T08:00:00Z");

    farm.kb().args(&["batch", "rm", &batch]).passes();
    farm.kb()
        .args(&["batch", "list"])
        .passes()
        .stdout_eq("No batches\n");
    farm.kb()
        .args(&["batch", "advance", &batch])
        .fails()
        .stderr_has("no batch matches");
}
