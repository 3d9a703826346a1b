//! Integration tests for the shortpath CLI
//!
//! These tests run the shortpath binary against graph documents in
//! `tests/fixtures` and temporary files.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

/// Get a Command for shortpath
fn shortpath() -> Command {
    let mut cmd = cargo_bin_cmd!("shortpath");
    cmd.env_remove("SHORTPATH_GRAPH")
        .env_remove("SHORTPATH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

// ============================================================================
// Help, version and banner
// ============================================================================

#[test]
fn test_help_flag() {
    shortpath()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: shortpath"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("distances"))
        .stdout(predicate::str::contains("dump"))
        .stdout(predicate::str::contains("demo"));
}

#[test]
fn test_version_flag() {
    shortpath()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("shortpath"));
}

#[test]
fn test_no_subcommand_prints_banner() {
    shortpath()
        .assert()
        .success()
        .stdout(predicate::str::contains("Run `shortpath --help`"));
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    shortpath().args(["--format", "xml", "demo"]).assert().code(2);
}

#[test]
fn test_negative_max_cost_exit_code_2() {
    shortpath()
        .arg("path")
        .arg("--graph")
        .arg(fixture("classic.toml"))
        .args(["A", "F", "--max-cost", "-1"])
        .assert()
        .code(2);
}

#[test]
fn test_missing_graph_file_exit_code_3() {
    let dir = tempdir().unwrap();
    shortpath()
        .arg("dump")
        .arg("--graph")
        .arg(dir.path().join("nope.toml"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid graph file"));
}

#[test]
fn test_negative_weight_exit_code_3() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[[edges]]\nfrom = \"A\"\nto = \"B\"\nweight = -4\n").unwrap();

    shortpath()
        .arg("dump")
        .arg("--graph")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid weight -4"));
}

#[test]
fn test_invalid_max_cost_in_document_exit_code_3() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bounded.toml");
    fs::write(
        &path,
        "[solver]\nmax_cost = -5.0\n\n[[edges]]\nfrom = \"A\"\nto = \"B\"\nweight = 1\n",
    )
    .unwrap();

    shortpath()
        .arg("path")
        .arg("--graph")
        .arg(&path)
        .args(["A", "B"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid graph file"))
        .stderr(predicate::str::contains("bounded.toml"));
}

#[test]
fn test_negative_zero_weight_dumped_as_zero() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("zero.json");
    fs::write(&path, r#"{"edges": [{"from": "A", "to": "B", "weight": -0.0}]}"#).unwrap();

    shortpath()
        .arg("dump")
        .arg("--graph")
        .arg(&path)
        .assert()
        .success()
        .stdout("A->B, weight: 0\n");
}

// ============================================================================
// path
// ============================================================================

#[test]
fn test_path_classic_human() {
    shortpath()
        .arg("path")
        .arg("--graph")
        .arg(fixture("classic.toml"))
        .args(["A", "F"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B -> D -> F"))
        .stdout(predicate::str::contains("cost: 11 (3 hops)"));
}

#[test]
fn test_path_classic_json() {
    let output = shortpath()
        .args(["--format", "json", "path", "--graph"])
        .arg(fixture("classic.toml"))
        .args(["A", "F"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["found"], true);
    assert_eq!(json["cost"], 11.0);
    assert_eq!(json["path_length"], 3);
    assert_eq!(json["vertices"], serde_json::json!(["A", "B", "D", "F"]));
    assert_eq!(json["links"][2]["from"], "D");
    assert_eq!(json["links"][2]["to"], "F");
    assert_eq!(json["links"][2]["weight"], 2.0);
}

#[test]
fn test_path_classic_records() {
    shortpath()
        .args(["--format", "records", "path", "--graph"])
        .arg(fixture("classic.toml"))
        .args(["A", "F"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H shortpath=1 records=1 mode=path from=A to=F found=true length=3 cost=11\n",
        ))
        .stdout(predicate::str::contains("E B D 5"));
}

#[test]
fn test_path_reverse_direction() {
    shortpath()
        .arg("path")
        .arg("--graph")
        .arg(fixture("classic.toml"))
        .args(["F", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("F -> D -> E -> A"))
        .stdout(predicate::str::contains("cost: 11 (3 hops)"));
}

#[test]
fn test_path_start_equals_end() {
    shortpath()
        .arg("path")
        .arg("--graph")
        .arg(fixture("classic.toml"))
        .args(["G", "G"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cost: 0 (0 hops)"));
}

#[test]
fn test_path_disconnected_human() {
    shortpath()
        .arg("path")
        .arg("--graph")
        .arg(fixture("islands.json"))
        .args(["A", "Y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path found from A to Y"));
}

#[test]
fn test_path_disconnected_json() {
    let output = shortpath()
        .args(["--format", "json", "path", "--graph"])
        .arg(fixture("islands.json"))
        .args(["C", "X"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["found"], false);
    assert_eq!(json["vertices"], serde_json::json!([]));
    assert!(json.get("cost").is_none());
}

#[test]
fn test_path_unknown_vertex() {
    shortpath()
        .arg("path")
        .arg("--graph")
        .arg(fixture("classic.toml"))
        .args(["A", "Q"])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error: unknown vertex: Q"));
}

#[test]
fn test_path_unknown_vertex_json_envelope() {
    let output = shortpath()
        .args(["--format", "json", "path", "--graph"])
        .arg(fixture("classic.toml"))
        .args(["Q", "A"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "unknown_vertex");
    assert_eq!(json["error"]["code"], 3);
}

#[test]
fn test_path_bound_from_document() {
    shortpath()
        .arg("path")
        .arg("--graph")
        .arg(fixture("bounded.yaml"))
        .args(["A", "D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path found from A to D"));
}

#[test]
fn test_path_max_cost_flag_overrides_document() {
    shortpath()
        .arg("path")
        .arg("--graph")
        .arg(fixture("bounded.yaml"))
        .args(["A", "D", "--max-cost", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B -> C -> D"))
        .stdout(predicate::str::contains("cost: 12"));
}

#[test]
fn test_graph_from_env() {
    shortpath()
        .env("SHORTPATH_GRAPH", fixture("classic.toml"))
        .args(["path", "A", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> C"));
}

// ============================================================================
// distances
// ============================================================================

#[test]
fn test_distances_human() {
    shortpath()
        .arg("distances")
        .arg("--graph")
        .arg(fixture("classic.toml"))
        .arg("A")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("A: 0\nC: 3 (via A)\nB: 4 (via A)\n"))
        .stdout(predicate::str::contains("D: 9 (via B)"))
        .stdout(predicate::str::contains("G: 12 (via E)"));
}

#[test]
fn test_distances_json_only_reachable() {
    let output = shortpath()
        .args(["--format", "json", "distances", "--graph"])
        .arg(fixture("islands.json"))
        .arg("X")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["from"], "X");
    let vertices: Vec<&str> = json["distances"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["vertex"].as_str().unwrap())
        .collect();
    assert_eq!(vertices, vec!["X", "Y"]);
}

// ============================================================================
// dump and demo
// ============================================================================

#[test]
fn test_dump_human_edge_list() {
    shortpath()
        .arg("dump")
        .arg("--graph")
        .arg(fixture("classic.toml"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("A->B, weight: 4\nA->C, weight: 3\n"))
        .stdout(predicate::str::contains("G->F, weight: 3"));
}

#[test]
fn test_dump_json_round_trips() {
    let output = shortpath()
        .args(["--format", "json", "dump", "--graph"])
        .arg(fixture("classic.toml"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let dir = tempdir().unwrap();
    let path = dir.path().join("exported.json");
    fs::write(&path, &output.stdout).unwrap();

    shortpath()
        .arg("path")
        .arg("--graph")
        .arg(&path)
        .args(["A", "F"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B -> D -> F"));
}

#[test]
fn test_dump_records() {
    shortpath()
        .args(["--format", "records", "dump", "--graph"])
        .arg(fixture("islands.json"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H shortpath=1 records=1 mode=dump vertices=5 edges=3\nE A B 1\n",
        ));
}

#[test]
fn test_demo_human() {
    shortpath()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("E->D, weight: 2"))
        .stdout(predicate::str::contains("A -> B -> D -> F"));
}

#[test]
fn test_demo_json() {
    let output = shortpath().args(["--format", "json", "demo"]).output().unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["graph"]["edges"].as_array().unwrap().len(), 12);
    assert_eq!(json["path"]["cost"], 11.0);
}
