// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

const CHAIN: &str = "n = 3\n0 4 10\ninf 0 3\ninf inf 0\n";

fn warshall() -> Command {
    let mut cmd = Command::cargo_bin("warshall").expect("binary builds");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn solve_from_stdin_prints_rounds_matrix_and_paths() {
    warshall()
        .args(["--no-config", "solve"])
        .write_stdin(CHAIN)
        .assert()
        .success()
        .stdout(predicate::str::contains("Iteration 3"))
        .stdout(predicate::str::contains("Final Shortest Path Matrix:"))
        .stdout(predicate::str::contains(
            "Shortest path from 1 to 3: 1 -> 2 -> 3, Distance: 7",
        ));
}

#[test]
fn solve_from_file_with_zero_based_labels() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("graph.txt");
    std::fs::write(&input, CHAIN).expect("write input");

    warshall()
        .args(["--no-config", "solve", "--labels", "zero", "--no-iterations"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Iteration").not())
        .stdout(predicate::str::contains(
            "Shortest path from 0 to 2: 0 -> 1 -> 2, Distance: 7",
        ));
}

#[test]
fn json_output_is_machine_readable() {
    let output = warshall()
        .args(["--no-config", "solve", "--format", "json", "--workers", "2"])
        .write_stdin(CHAIN)
        .output()
        .expect("run");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["distances"][0][2], serde_json::json!(7.0));
    assert_eq!(json["distances"][2][0], serde_json::json!("inf"));
    assert_eq!(json["snapshots"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["paths"][1]["path"], serde_json::json!([0, 1, 2]));
}

#[test]
fn lenient_parsing_warns_and_strict_parsing_fails() {
    let junk = "0 x\n1 0\n";

    warshall()
        .args(["--no-config", "solve"])
        .write_stdin(junk)
        .assert()
        .success()
        .stderr(predicate::str::contains("malformed weight"))
        .stdout(predicate::str::contains("Shortest path from 2 to 1"));

    warshall()
        .args(["--no-config", "solve", "--strict"])
        .write_stdin(junk)
        .assert()
        .failure()
        .stderr(predicate::str::contains("MALFORMED_WEIGHT"));
}

#[test]
fn construction_errors_fail_the_run() {
    warshall()
        .args(["--no-config", "solve", "--max-vertices", "2"])
        .write_stdin(CHAIN)
        .assert()
        .failure()
        .stderr(predicate::str::contains("VERTEX_LIMIT_EXCEEDED"));

    warshall()
        .args(["--no-config", "solve"])
        .write_stdin("n = 0\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("INVALID_VERTEX_COUNT"));

    warshall()
        .args(["--no-config", "solve"])
        .write_stdin("0 1\n1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DIMENSION_MISMATCH"));
}

#[test]
fn saved_preferences_apply_to_later_runs() {
    let dir = tempfile::tempdir().expect("tempdir");

    warshall()
        .arg("--config-dir")
        .arg(dir.path())
        .args(["config", "save", "--labels", "zero", "--no-iterations"])
        .assert()
        .success();
    assert!(dir.path().join("warshall-cli.json").exists());

    warshall()
        .arg("--config-dir")
        .arg(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"labels\": \"zero\""))
        .stdout(predicate::str::contains("\"show_iterations\": false"));

    warshall()
        .arg("--config-dir")
        .arg(dir.path())
        .arg("solve")
        .write_stdin(CHAIN)
        .assert()
        .success()
        .stdout(predicate::str::contains("Iteration").not())
        .stdout(predicate::str::contains("Shortest path from 0 to 2"));
}

#[test]
fn saving_without_a_store_is_refused() {
    warshall()
        .args(["--no-config", "config", "save"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no preference store"));
}
