//! CLI behaviour tests
//!
//! Every command runs inside a temporary directory that also serves as HOME,
//! so neither renderings nor the user configuration leak between tests.

use assert_cmd::Command;
use mtree::MerkleTree;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn mtree(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mtree").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_build_writes_rendering_and_reports_root() {
    let temp_dir = TempDir::new().unwrap();
    let expected = MerkleTree::from_items(["a", "b", "c"])
        .unwrap()
        .root_hash()
        .unwrap();

    let output = mtree(&temp_dir)
        .args(["build", "a, b, c", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["root"], expected.to_hex());
    assert_eq!(report["leaves"], 3);
    assert_eq!(report["layers"], 3);

    let rendering = fs::read_to_string(temp_dir.path().join("merkle.tree")).unwrap();
    assert!(rendering.contains("| - Data: a"));
    assert!(rendering.contains(&format!("| Hash: {}", expected.to_hex())));
}

#[test]
fn test_build_rejects_empty_list() {
    let temp_dir = TempDir::new().unwrap();

    mtree(&temp_dir)
        .args(["build", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("zero leaves"));
    assert!(!temp_dir.path().join("merkle.tree").exists());
}

#[test]
fn test_consistency_answers_yes_for_embedded_snapshot() {
    let temp_dir = TempDir::new().unwrap();
    let new_root = MerkleTree::from_items(["a", "b", "c", "d"])
        .unwrap()
        .root_hash()
        .unwrap();

    mtree(&temp_dir)
        .args(["consistency", "a, b", "a, b, c, d"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("yes ["))
        .stdout(predicate::str::contains(format!("{}]", new_root.to_hex())));

    let trees = fs::read_to_string(temp_dir.path().join("merkle.trees")).unwrap();
    assert!(trees.starts_with("Merkle Tree #1"));
    assert!(trees.contains("Merkle Tree #2"));
}

#[test]
fn test_consistency_answers_no_for_unbalanced_snapshot() {
    let temp_dir = TempDir::new().unwrap();

    mtree(&temp_dir)
        .args(["consistency", "a, b, c", "a, b, c, d"])
        .assert()
        .failure()
        .stdout(predicate::str::diff("no\n"));
}

#[test]
fn test_prove_and_verify_through_files() {
    let temp_dir = TempDir::new().unwrap();

    mtree(&temp_dir)
        .args(["build", "alpha; beta; gamma; delta; epsilon", "-d", "; "])
        .assert()
        .success();

    mtree(&temp_dir)
        .args(["prove", "gamma", "--tree", "merkle.tree", "-o", "gamma.json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("yes ["));

    mtree(&temp_dir)
        .args(["verify", "gamma.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Proof verified successfully!"));

    let wrong_root = "00".repeat(32);
    mtree(&temp_dir)
        .args(["verify", "gamma.json", "--root", &wrong_root])
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗ Proof verification failed"));
}

#[test]
fn test_prove_missing_value_answers_no() {
    let temp_dir = TempDir::new().unwrap();

    mtree(&temp_dir)
        .args(["prove", "zeta", "--items", "a, b, c", "-o", "zeta.json"])
        .assert()
        .failure()
        .stdout(predicate::str::diff("no\n"));
    assert!(!temp_dir.path().join("zeta.json").exists());
}

#[test]
fn test_prove_subtree_from_numbered_section() {
    let temp_dir = TempDir::new().unwrap();
    let old_root = MerkleTree::from_items(["a", "b"])
        .unwrap()
        .root_hash()
        .unwrap();

    mtree(&temp_dir)
        .args(["consistency", "a, b", "a, b, c, d, e"])
        .assert()
        .success();

    mtree(&temp_dir)
        .args([
            "prove-subtree",
            &old_root.to_hex(),
            "--tree",
            "merkle.trees",
            "--section",
            "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("yes ["));
}

#[test]
fn test_section_only_applies_to_rendering_files() {
    let temp_dir = TempDir::new().unwrap();

    mtree(&temp_dir)
        .args(["root", "--items", "a, b", "--section", "1"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--section"));
}

#[test]
fn test_root_matches_library() {
    let temp_dir = TempDir::new().unwrap();
    let expected = MerkleTree::from_items(["x", "y"]).unwrap().root_hash().unwrap();

    mtree(&temp_dir)
        .args(["root", "--items", "x, y"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.to_hex()));
}

#[test]
fn test_config_roundtrip_changes_defaults() {
    let temp_dir = TempDir::new().unwrap();

    mtree(&temp_dir)
        .args(["config", "input.delimiter", "|"])
        .assert()
        .success();

    mtree(&temp_dir)
        .args(["config", "input.delimiter"])
        .assert()
        .success()
        .stdout(predicate::str::diff("|\n"));

    let expected = MerkleTree::from_items(["a", "b"]).unwrap().root_hash().unwrap();
    mtree(&temp_dir)
        .args(["root", "--items", "a|b"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.to_hex()));

    assert!(temp_dir.path().join(".mtree").join("config.toml").exists());
}

#[test]
fn test_config_rejects_unknown_key() {
    let temp_dir = TempDir::new().unwrap();

    mtree(&temp_dir)
        .args(["config", "user.name", "someone"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration key"));
}
