//! CLI help and version specs

use crate::prelude::*;

#[test]
fn help_shows_about_and_flags() {
    let temp = Project::empty();

    temp.vend()
        .args(&["--help"])
        .passes()
        .stdout_has("Vending machine stock simulator")
        .stdout_has("--test")
        .stdout_has("--events")
        .stdout_has("--seed")
        .stdout_has("--fleet");
}

#[test]
fn version_prints_the_package_version() {
    let temp = Project::empty();

    temp.vend()
        .args(&["--version"])
        .passes()
        .stdout_has("vend ");
}
