//! Random simulation specs

use similar_asserts::assert_eq;

use crate::prelude::*;

#[test]
fn default_run_prints_seed_and_final_stocks() {
    let temp = Project::empty();

    temp.vend()
        .args(&[])
        .passes()
        .stdout_has("seed: ")
        .stdout_has("final stock:")
        .stdout_has("machine 001: ")
        .stdout_has("machine 002: ")
        .stdout_has("machine 003: ");
}

#[test]
fn seed_is_echoed_for_reproducibility() {
    let temp = Project::empty();

    temp.vend()
        .args(&["--seed", "123"])
        .passes()
        .stdout_has("seed: 123");
}

#[test]
fn same_seed_reproduces_the_run() {
    let temp = Project::empty();

    let first = temp.vend().args(&["--seed", "7"]).passes().stdout();
    let second = temp.vend().args(&["--seed", "7"]).passes().stdout();

    assert_eq!(first, second);
}

#[test]
fn machine_count_controls_the_fleet() {
    let temp = Project::empty();

    // Zero events leaves every machine at its starting stock
    temp.vend()
        .args(&["--machines", "5", "--events", "0", "--seed", "1"])
        .passes()
        .stdout_has("machine 001: 10")
        .stdout_has("machine 004: 10")
        .stdout_has("machine 005: 10");
}
