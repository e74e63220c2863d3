// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Integration tests for the railnet binary, driven through stdin

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const EXTRACT: &str = "\
source_id,source_name,target_id,distance
1,Aarschot,2,10.5
2,Brussel,3,7.25
3,Leuven,2,7.3
455,GENT-ST-P,2,54.0
";

/// Write the extract into a fresh temp directory
fn setup_data() -> TempDir {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(data_dir.path().join("extract.csv"), EXTRACT).unwrap();
    data_dir
}

/// Build a railnet command reading the given extract
fn railnet(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("railnet").unwrap();
    cmd.current_dir(data_dir)
        .args(["--data", "extract.csv", "--no-color"]);
    cmd
}

/// Helper to get stdout as string
fn stdout_str(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_banner_and_quit() {
    let data_dir = setup_data();

    railnet(data_dir.path())
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("There are 4 stations in the database,"))
        .stdout(predicate::str::contains("and 4 direct routes between them."))
        .stdout(predicate::str::contains("where 1 is Aarschot and 455 is GENT-ST-P"))
        .stdout(predicate::str::contains("1 : identify a station by its ID number - between 1 and 455"))
        .stdout(predicate::str::ends_with("Thanks. Happy travels.\n"))
        .stdout(predicate::str::contains("Which station?").not());
}

#[test]
fn test_list_connections_then_stop() {
    let data_dir = setup_data();

    let output = railnet(data_dir.path())
        .write_stdin("2\n1\nno\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = stdout_str(&output);
    assert!(stdout.contains("From Aarschot there are direct tracks (not necessarily trains) to:"));
    assert!(stdout.contains("Brussel (2) - 10.5 km"));
    assert!(stdout.contains("Do you want to continue? yes / no"));
    assert!(stdout.trim_end().ends_with("Thanks. Happy travels."));
}

#[test]
fn test_adjacency_both_directions() {
    let data_dir = setup_data();

    let output = railnet(data_dir.path())
        .write_stdin("3\n2\n3\nyes\n3\n1\n2\nY\n3\n2\n1\nn\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = stdout_str(&output);
    assert!(stdout.contains("Brussel (2) and Leuven (3) are adjacent stations (7.25 km)"));
    assert!(stdout.contains("slightly different in the other direction: 7.3 km"));
    assert!(stdout.contains("Aarschot (1) and Brussel (2) are adjacent stations (10.5 km)"));
    assert!(stdout.contains("Brussel (2) and Aarschot (1) are not adjacent stations."));
}

#[test]
fn test_malformed_id_returns_to_menu() {
    let data_dir = setup_data();

    let output = railnet(data_dir.path())
        .write_stdin("1\nfoo\n1\n455\nno\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = stdout_str(&output);
    assert!(stdout.contains("\"foo\" is not a valid station ID"));
    assert_eq!(stdout.matches("What you can ask for:").count(), 2);
    assert!(stdout.contains("GENT-ST-P\n"));
}

#[test]
fn test_unknown_station_and_invalid_choice() {
    let data_dir = setup_data();

    let output = railnet(data_dir.path())
        .write_stdin("7\n1\n999\n4\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = stdout_str(&output);
    assert!(stdout.contains("Sorry, that's not in the menu."));
    assert!(stdout.contains("there's no station with ID 999"));
    assert_eq!(stdout.matches("What you can ask for:").count(), 3);
}

#[test]
fn test_end_of_input_is_not_a_crash() {
    let data_dir = setup_data();

    railnet(data_dir.path())
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Which station?"));
}

#[test]
fn test_missing_data_file_fails() {
    let data_dir = TempDir::new().unwrap();

    railnet(data_dir.path())
        .write_stdin("4\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open extract.csv"));
}

#[test]
fn test_data_path_from_config_file() {
    let data_dir = setup_data();
    std::fs::write(
        data_dir.path().join("railnet.toml"),
        "data_path = \"extract.csv\"\nnetwork_name = \"Test Railway\"\n",
    )
    .unwrap();

    Command::cargo_bin("railnet")
        .unwrap()
        .current_dir(data_dir.path())
        .args(["--config", "railnet.toml", "--no-color"])
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the Test Railway!"));
}
