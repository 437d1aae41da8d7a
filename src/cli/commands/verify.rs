//! Verify command implementation

use crate::cli::commands::parse_hash;
use crate::config::GlobalConfig;
use crate::proofs::{Proof, ProofTarget};
use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::json;
use std::path::PathBuf;

/// Execute the verify command, returning whether the proof holds
pub fn execute(proof: PathBuf, root: Option<String>, json: bool) -> Result<bool> {
    let config = GlobalConfig::load_or_default();
    let json = json || config.json();

    let content = std::fs::read_to_string(&proof)
        .with_context(|| format!("Failed to read proof {}", proof.display()))?;
    let proof = Proof::from_json(&content)?;

    let expected_root = root.as_deref().map(parse_hash).transpose()?;
    let computed = proof.computed_root();
    let valid = match &expected_root {
        Some(expected) => proof.verify_against(expected),
        None => proof.verify(),
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "valid": valid,
                "root": proof.root,
                "computed_root": computed,
                "expected_root": expected_root,
            }))?
        );
        return Ok(valid);
    }

    let target = match &proof.target {
        ProofTarget::Value { value } => format!("value {:?}", value),
        ProofTarget::Subtree { hash } => format!("subtree {}", hash.to_hex()),
    };
    if valid {
        println!("{}", "✓ Proof verified successfully!".green().bold());
    } else {
        println!("{}", "✗ Proof verification failed".red().bold());
    }
    println!("  {}: {}", "Target".bold(), target);
    println!("  {}: {}", "Root".bold(), proof.root.to_hex().cyan());
    println!("  {}: {}", "Computed".bold(), computed.to_hex());
    println!("  {}: {}", "Siblings".bold(), proof.proof_path.len());
    if let Some(expected) = expected_root {
        println!("  {}: {}", "Expected".bold(), expected.to_hex());
    }

    Ok(valid)
}
