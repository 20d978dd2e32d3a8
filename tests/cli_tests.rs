//! Integration tests for the hoproute CLI
//!
//! These tests run the hoproute binary against edge-list files.

mod common;

use common::{hoproute, write_graph, DETOUR, DISCONNECTED};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Help and exit code tests
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    hoproute(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: hoproute"))
        .stdout(predicate::str::contains("--data_file_path"));
}

#[test]
fn test_short_help_flag_skips_run() {
    let dir = tempdir().unwrap();
    hoproute(dir.path())
        .args(["missing.txt", "-h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Specify the data inputs path"))
        .stdout(predicate::str::contains("First hop").not());
}

#[test]
fn test_no_data_file_exit_code_1() {
    let dir = tempdir().unwrap();
    hoproute(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no data file given"))
        .stderr(predicate::str::contains("Usage: hoproute"));
}

#[test]
fn test_flag_missing_value_exit_code_1() {
    let dir = tempdir().unwrap();
    hoproute(dir.path()).arg("-d").assert().code(1);
    hoproute(dir.path()).arg("--data_file_path").assert().code(1);
}

#[test]
fn test_unknown_flag_exit_code_1() {
    let dir = tempdir().unwrap();
    hoproute(dir.path()).arg("--bogus").assert().code(1);
}

// ============================================================================
// Routing output
// ============================================================================

#[test]
fn test_positional_path_with_prompted_source() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "detour.txt", DETOUR);

    hoproute(dir.path())
        .arg(&path)
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Enter integer identifier of single source node: ",
        ))
        .stdout(predicate::str::contains("Adjacency Matrix:"))
        .stdout(predicate::str::contains("v0    -    5    1"))
        .stdout(predicate::str::contains("Edge Table:"))
        .stdout(predicate::str::contains("0:  0->1   0->2   "))
        .stdout(predicate::str::contains("First hop router list:"))
        .stdout(predicate::str::contains("               0               0         0"))
        .stdout(predicate::str::contains("               1               2         2"))
        .stdout(predicate::str::contains("               2               2         1"));
}

#[test]
fn test_data_file_flag_overrides_positional() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "detour.txt", DETOUR);

    hoproute(dir.path())
        .arg(dir.path().join("does-not-exist.txt"))
        .arg("-d")
        .arg(&path)
        .arg("--source")
        .arg("0")
        .assert()
        .success()
        .stdout(predicate::str::contains("First hop router list:"));
}

#[test]
fn test_source_flag_skips_prompt() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "chain.txt", "3 2\n0 1 1\n1 2 1\n");

    hoproute(dir.path())
        .arg(&path)
        .args(["--source", "0", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter integer").not())
        .stdout(predicate::str::contains("Adjacency Matrix").not())
        .stdout(predicate::str::contains("               2               1         2"));
}

#[test]
fn test_unreachable_destination_is_marked() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "split.txt", DISCONNECTED);

    hoproute(dir.path())
        .arg(&path)
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("               1               1         1"))
        .stdout(predicate::str::contains("               2     unreachable         -"));
}

#[test]
fn test_json_output() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "split.txt", DISCONNECTED);

    let output = hoproute(dir.path())
        .arg(&path)
        .args(["--format", "json"])
        .write_stdin("0\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["source"], 0);
    assert_eq!(value["vertex_count"], 3);
    assert_eq!(value["edge_count"], 1);
    assert_eq!(value["routes"][0]["first_hop"], 0);
    assert_eq!(value["routes"][1]["first_hop"], 1);
    assert_eq!(value["routes"][1]["path"], serde_json::json!([0, 1]));
    assert!(value["routes"][2]["first_hop"].is_null());
    assert_eq!(value["stats"]["finalized"], 2);

    // prompt goes to stderr so stdout stays parseable
    assert!(String::from_utf8_lossy(&output.stderr).contains("Enter integer identifier"));
}

#[test]
fn test_repeated_runs_are_identical() {
    let dir = tempdir().unwrap();
    let path = write_graph(
        dir.path(),
        "ties.txt",
        "4 4\n0 1 1\n0 2 1\n1 3 1\n2 3 1\n",
    );

    let run = || {
        hoproute(dir.path())
            .arg(&path)
            .args(["--source", "0", "--format", "json"])
            .output()
            .unwrap()
            .stdout
    };
    let first = run();
    assert_eq!(first, run());

    let value: serde_json::Value = serde_json::from_slice(&first).unwrap();
    assert_eq!(value["routes"][3]["first_hop"], 1);
}

// ============================================================================
// Input errors
// ============================================================================

#[test]
fn test_missing_file_exit_code_2() {
    let dir = tempdir().unwrap();
    hoproute(dir.path())
        .arg(dir.path().join("nope.txt"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_short_file_exit_code_2() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "short.txt", "3 2\n0 1 1.0\n");

    hoproute(dir.path())
        .arg(&path)
        .write_stdin("0\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("malformed edge list"));
}

#[test]
fn test_out_of_range_vertex_exit_code_2() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "range.txt", "2 1\n0 3 1.0\n");

    hoproute(dir.path())
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("outside [0, 2)"));
}

#[test]
fn test_negative_weight_exit_code_2() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "neg.txt", "2 1\n0 1 -2.0\n");

    hoproute(dir.path())
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("negative weight"));
}

#[test]
fn test_oversized_vertex_count_exit_code_2() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "huge.txt", "18446744073709551615 0\n");

    hoproute(dir.path())
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("exceeds the supported maximum"));
}

#[test]
fn test_large_graph_skips_matrix_dump() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "wide.txt", "300 1\n0 299 1\n");

    hoproute(dir.path())
        .arg(&path)
        .args(["--source", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Adjacency Matrix: skipped (300 vertices, limit 256)",
        ))
        .stdout(predicate::str::contains("Edge Table:"))
        .stdout(predicate::str::contains("299             299         1"));
}

#[test]
fn test_bad_source_reply_exit_code_2() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "detour.txt", DETOUR);

    hoproute(dir.path())
        .arg(&path)
        .write_stdin("7\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid source vertex"));
}

#[test]
fn test_json_error_envelope() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "short.txt", "3 2\n");

    hoproute(dir.path())
        .arg(&path)
        .args(["--format", "json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"malformed_input\""));
}

// ============================================================================
// Config and logging
// ============================================================================

#[test]
fn test_config_file_overrides_display() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "split.txt", DISCONNECTED);
    let config = dir.path().join("custom.toml");
    fs::write(
        &config,
        "[output]\nshow_matrix = false\n\n[display]\nunreachable = \"none\"\n",
    )
    .unwrap();

    hoproute(dir.path())
        .arg(&path)
        .arg("--config")
        .arg(&config)
        .args(["--source", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Adjacency Matrix").not())
        .stdout(predicate::str::contains("Edge Table:"))
        .stdout(predicate::str::contains("none"))
        .stdout(predicate::str::contains("unreachable").not());
}

#[test]
fn test_default_config_dir_is_used() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "split.txt", DISCONNECTED);
    fs::write(
        dir.path().join("config.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let output = hoproute(dir.path())
        .arg(&path)
        .args(["--source", "0"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["vertex_count"], 3);
}

#[test]
fn test_bad_config_exit_code_1() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "split.txt", DISCONNECTED);
    fs::write(dir.path().join("config.toml"), "[output]\nformat = \"xml\"\n").unwrap();

    hoproute(dir.path())
        .arg(&path)
        .args(["--source", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "detour.txt", DETOUR);

    hoproute(dir.path())
        .arg(&path)
        .args(["--source", "0", "--log-level", "debug"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("routes computed"));
}

#[test]
fn test_default_log_level_hides_debug_messages() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "detour.txt", DETOUR);

    hoproute(dir.path())
        .arg(&path)
        .args(["--source", "0"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_log_json() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "detour.txt", DETOUR);

    hoproute(dir.path())
        .arg(&path)
        .args(["--source", "0", "--verbose", "--log-json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"message\":\"parse_args\""));
}
