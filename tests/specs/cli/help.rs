//! Help and argument errors

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    let farm = Farm::empty();
    farm.kb()
        .args(&["--help"])
        .passes()
        .stdout_has("crop")
        .stdout_has("location")
        .stdout_has("batch")
        .stdout_has("timeline")
        .stdout_has("pipeline")
        .stdout_has("map");
}

#[test]
fn unknown_subcommand_fails() {
    let farm = Farm::empty();
    farm.kb().args(&["harvest-all"]).fails();
}

#[test]
fn unknown_output_format_fails() {
    let farm = Farm::empty();
    farm.kb()
        .args(&["--output", "yaml", "crop", "list"])
        .fails()
        .stderr_has("yaml");
}
