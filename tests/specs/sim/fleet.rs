//! Fleet file specs

use crate::prelude::*;

const FLEET: &str = r#"
[[machine]]
id = "101"
stock = 4

[[machine]]
id = "202"
stock = 9
"#;

#[test]
fn fleet_file_defines_the_machines() {
    let temp = Project::empty();
    temp.file("fleet.toml", FLEET);

    temp.vend()
        .args(&["--fleet", "fleet.toml", "--events", "0", "--seed", "1"])
        .passes()
        .stdout_has("machine 101: 4")
        .stdout_has("machine 202: 9");
}

#[test]
fn fleet_path_may_be_absolute() {
    let temp = Project::empty();
    temp.file("fleet.toml", FLEET);
    let path = temp.path().join("fleet.toml");

    temp.vend()
        .args(&["--fleet", &path.to_string_lossy(), "--events", "0"])
        .passes()
        .stdout_has("machine 101: 4");
}

#[test]
fn duplicate_machine_ids_are_rejected() {
    let temp = Project::empty();
    temp.file(
        "fleet.toml",
        r#"
[[machine]]
id = "101"
stock = 4

[[machine]]
id = "101"
stock = 9
"#,
    );

    temp.vend()
        .args(&["--fleet", "fleet.toml"])
        .fails()
        .stderr_has("duplicate machine id");
}

#[test]
fn negative_stock_is_rejected() {
    let temp = Project::empty();
    temp.file(
        "fleet.toml",
        r#"
[[machine]]
id = "101"
stock = -2
"#,
    );

    temp.vend()
        .args(&["--fleet", "fleet.toml"])
        .fails()
        .stderr_has("must not be negative");
}

#[test]
fn empty_fleet_file_is_rejected() {
    let temp = Project::empty();
    temp.file("fleet.toml", "");

    temp.vend()
        .args(&["--fleet", "fleet.toml"])
        .fails()
        .stderr_has("fleet defines no machines");
}

#[test]
fn missing_fleet_file_is_an_error() {
    let temp = Project::empty();

    temp.vend()
        .args(&["--fleet", "missing.toml"])
        .fails()
        .stderr_has("failed to read fleet file");
}
