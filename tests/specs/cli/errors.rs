//! CLI argument error specs

use crate::prelude::*;

#[test]
fn unknown_flag_is_rejected() {
    let temp = Project::empty();

    temp.vend()
        .args(&["--bogus"])
        .fails()
        .stderr_has("unexpected argument");
}

#[test]
fn test_mode_conflicts_with_random_flags() {
    let temp = Project::empty();

    temp.vend()
        .args(&["--test", "--seed", "1"])
        .fails()
        .stderr_has("cannot be used with");
}

#[test]
fn fleet_file_conflicts_with_machine_count() {
    let temp = Project::empty();
    temp.file("fleet.toml", "[[machine]]\nid = \"001\"\nstock = 10\n");

    temp.vend()
        .args(&["--fleet", "fleet.toml", "--machines", "4"])
        .fails()
        .stderr_has("cannot be used with");
}

#[test]
fn zero_machines_is_rejected() {
    let temp = Project::empty();

    temp.vend()
        .args(&["--machines", "0"])
        .fails()
        .stderr_has("invalid value");
}
