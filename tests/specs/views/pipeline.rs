//! Staging pipeline specs

use crate::prelude::*;

#[test]
fn empty_pipeline_still_shows_every_stage() {
    let farm = Farm::empty();
    let out = farm.kb().args(&["pipeline"]).passes();
    out.stdout_has("SOWING [#8e44ad] (0)")
        .stdout_has("SEEDLING [#3498db] (0)")
        .stdout_has("GERMINATION [#f1c40f] (0)")
        .stdout_has("VEGETATIVE [#27ae60] (0)")
        .stdout_has("HARVEST [#e67e22] (0)")
        .stdout_has("PACKAGING [#2c3e50] (0)")
        .stdout_lacks("UNRECOGNIZED");
}

#[test]
fn batches_move_between_columns() {
    let farm = Farm::empty();
    let crop = farm.crop("Spinach", &[]);
    let bench = farm.location("Bench A");
    let first = farm.batch(&crop, &bench, "2024-03-01T08:00:00Z");
    farm.batch(&crop, &bench, "2024-03-02T08:00:00Z");
    farm.kb().args(&["batch", "advance", &first]).passes();

    let view = farm
        .kb()
        .args(&["--output", "json", "pipeline"])
        .passes()
        .json();
    let columns = view["columns"].as_array().unwrap();
    assert_eq!(columns.len(), 6);
    assert_eq!(columns[0]["stage"], "sowing");
    assert_eq!(columns[0]["batches"].as_array().unwrap().len(), 1);
    assert_eq!(columns[1]["stage"], "seedling");
    assert_eq!(columns[1]["batches"][0]["batch"]["id"], first.as_str());
}
