// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[test]
fn new_crop_uses_library_defaults() {
    let crop = Crop::new("crop-1", "Spinach");
    assert_eq!(crop.sowing_days, Some(0.02));
    assert_eq!(crop.seedling_days, Some(3.0));
    assert_eq!(crop.germination_days, Some(7.0));
    assert_eq!(crop.vegetative_days, Some(21.0));
    assert_eq!(crop.harvest_days, Some(2.0));
    assert_eq!(crop.packaging_days, Some(1.0));
}

#[test]
fn profile_covers_only_first_four_stages() {
    let crop = Crop::new("crop-1", "Spinach");
    let profile = crop.profile();
    assert_eq!(profile.days(Stage::Vegetative), Some(21.0));
    assert_eq!(profile.days(Stage::Harvest), None);
    assert_eq!(profile.days(Stage::Packaging), None);
}

#[test]
fn resolved_days_substitutes_defaults() {
    let profile = StageDurationProfile {
        sowing_days: Some(0.5),
        ..Default::default()
    };
    assert_eq!(profile.resolved_days(Stage::Sowing), Some(0.5));
    assert_eq!(profile.resolved_days(Stage::Seedling), Some(3.0));
    assert_eq!(profile.resolved_days(Stage::Germination), Some(7.0));
    assert_eq!(profile.resolved_days(Stage::Vegetative), Some(21.0));
}

#[test]
fn zero_falls_back_to_default() {
    let profile = StageDurationProfile {
        sowing_days: Some(0.0),
        seedling_days: Some(-0.0),
        ..Default::default()
    };
    assert_eq!(profile.resolved_days(Stage::Sowing), Some(0.02));
    assert_eq!(profile.resolved_days(Stage::Seedling), Some(3.0));
    assert_eq!(profile.days(Stage::Sowing), Some(0.0));
}

#[parameterized(
    negative = { -1.0 },
    nan = { f64::NAN },
    infinite = { f64::INFINITY },
)]
fn check_days_rejects(days: f64) {
    let err = check_days(Stage::Seedling, days).unwrap_err();
    assert_eq!(err.stage, Stage::Seedling);
}

#[parameterized(
    integer = { "3", 3.0 },
    fraction = { "0.02", 0.02 },
    padded = { " 7 ", 7.0 },
    zero = { "0", 0.0 },
)]
fn parse_days_accepts(raw: &str, expected: f64) {
    assert_eq!(parse_days(Stage::Germination, raw), Ok(expected));
}

#[test]
fn parse_days_rejects_non_numeric() {
    let err = parse_days(Stage::Vegetative, "three weeks").unwrap_err();
    assert_eq!(err.value, "three weeks");
    assert_eq!(
        err.to_string(),
        "invalid duration for vegetative: three weeks"
    );
}

#[test]
fn validate_reports_first_bad_stage() {
    let profile = StageDurationProfile {
        sowing_days: Some(0.02),
        germination_days: Some(-2.0),
        ..Default::default()
    };
    assert_eq!(profile.validate().unwrap_err().stage, Stage::Germination);
}

#[parameterized(
    column = { "seedling_days", Stage::Seedling },
    bare = { "harvest", Stage::Harvest },
    shouting = { "PACKAGING_DAYS", Stage::Packaging },
)]
fn duration_field_parses(raw: &str, stage: Stage) {
    assert_eq!(raw.parse::<DurationField>(), Ok(DurationField(stage)));
}

#[test]
fn duration_field_rejects_unknown_columns() {
    assert!("quantity".parse::<DurationField>().is_err());
}

#[test]
fn set_days_updates_the_matching_column() {
    let mut crop = Crop::unconfigured("crop-1", "Basil");
    crop.set_days(DurationField(Stage::Harvest), Some(4.0));
    assert_eq!(crop.harvest_days, Some(4.0));
    assert_eq!(crop.days(DurationField(Stage::Harvest)), Some(4.0));
    assert_eq!(DurationField(Stage::Harvest).column(), "harvest_days");
}

#[test]
fn crop_json_tolerates_missing_durations() {
    let crop: Crop = serde_json::from_str(r#"{"id":"c1","name":"Kale"}"#).unwrap();
    assert_eq!(crop.profile(), StageDurationProfile::default());
}
