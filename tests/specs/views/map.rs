//! Farm map specs

use crate::prelude::*;

#[test]
fn no_locations() {
    let farm = Farm::empty();
    farm.kb()
        .args(&["map"])
        .passes()
        .stdout_eq("No locations\n");
}

#[test]
fn occupied_and_empty_stations() {
    let farm = Farm::empty();
    let crop = farm.crop("Spinach", &[]);
    let bench_a = farm.location("Bench A");
    farm.location("Bench B");
    farm.batch(&crop, &bench_a, "2024-03-01T08:00:00Z");

    let map = farm.kb().args(&["--output", "json", "map"]).passes().json();
    let tiles = map["tiles"].as_array().unwrap();

    assert_eq!(tiles.len(), 2);
    assert_eq!(tiles[0]["location"]["name"], "Bench A");
    assert_eq!(tiles[0]["occupant"]["crop"]["name"], "Spinach");
    assert_eq!(tiles[0]["color"], "#8e44ad");
    assert_eq!(tiles[1]["location"]["name"], "Bench B");
    assert!(tiles[1]["occupant"].is_null());
    assert_eq!(tiles[1]["color"], "#ddd");
}

#[test]
fn station_color_follows_stage() {
    let farm = Farm::empty();
    let crop = farm.crop("Spinach", &[]);
    let bench = farm.location("Bench A");
    let batch = farm.batch(&crop, &bench, "2024-03-01T08:00:00Z");
    farm.kb().args(&["batch", "advance", &batch]).passes();

    farm.kb()
        .args(&["map"])
        .passes()
        .stdout_has("Spinach")
        .stdout_has("seedling")
        .stdout_has("#3498db");
}
