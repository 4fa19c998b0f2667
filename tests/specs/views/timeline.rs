//! Timeline view specs

use crate::prelude::*;

#[test]
fn empty_farm_has_no_timeline() {
    let farm = Farm::empty();
    farm.kb()
        .args(&["timeline"])
        .passes()
        .stdout_eq("No batches\n");
}

#[test]
fn standard_profile_projects_four_chained_stages() {
    let farm = Farm::empty();
    let crop = farm.crop("Spinach", &[]);
    let bench = farm.location("Bench A");
    farm.batch(&crop, &bench, "2024-03-01T08:00:00Z");

    let report = farm
        .kb()
        .args(&["--output", "json", "timeline"])
        .passes()
        .json();
    let events = report["timelines"][0]["events"].as_array().unwrap();

    assert_eq!(events.len(), 4);
    assert_eq!(events[0]["label"], "[SOWING] Spinach");
    assert_eq!(events[0]["starts_at"], "2024-03-01T08:00:00Z");
    assert_eq!(events[0]["ends_at"], "2024-03-01T08:28:48Z");
    assert_eq!(events[1]["ends_at"], "2024-03-04T08:28:48Z");
    assert_eq!(events[2]["ends_at"], "2024-03-11T08:28:48Z");
    assert_eq!(events[3]["ends_at"], "2024-03-22T08:28:48Z");
    for pair in events.windows(2) {
        assert_eq!(pair[0]["ends_at"], pair[1]["starts_at"]);
    }
}

#[test]
fn advancing_does_not_move_the_projection() {
    let farm = Farm::empty();
    let crop = farm.crop("Spinach", &[]);
    let bench = farm.location("Bench A");
    let batch = farm.batch(&crop, &bench, "2024-03-01T08:00:00Z");

    let before = farm.kb().args(&["timeline"]).passes().stdout().to_string();
    farm.kb().args(&["batch", "advance", &batch]).passes();
    farm.kb().args(&["timeline"]).passes().stdout_eq(&before);
}

#[test]
fn duration_change_reprojects() {
    let farm = Farm::empty();
    let crop = farm.crop("Spinach", &[]);
    let bench = farm.location("Bench A");
    farm.batch(&crop, &bench, "2024-03-01T08:00:00Z");

    farm.kb()
        .args(&["crop", "set", &crop, "vegetative_days", "14"])
        .passes();
    farm.kb()
        .args(&["timeline"])
        .passes()
        .stdout_has("2024-03-11 08:28 -> 2024-03-25 08:28")
        .stdout_lacks("2024-03-22");
}

#[test]
fn zero_duration_uses_the_stage_default() {
    let farm = Farm::empty();
    let crop = farm.crop("Spinach", &["--vegetative", "0"]);
    let bench = farm.location("Bench A");
    farm.batch(&crop, &bench, "2024-03-01T08:00:00Z");

    let report = farm
        .kb()
        .args(&["--output", "json", "timeline"])
        .passes()
        .json();
    assert_eq!(
        report["timelines"][0]["events"][3]["ends_at"],
        "2024-03-22T08:28:48Z"
    );
}
