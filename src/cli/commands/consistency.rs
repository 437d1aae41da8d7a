//! Consistency command implementation
//!
//! Builds the earlier and the later snapshot, writes both renderings to one
//! numbered file and answers whether the earlier root is a subtree of the
//! later tree.

use crate::cli::commands::{format_hashes, tree_from_items};
use crate::config::GlobalConfig;
use crate::proofs::prove_consistency;
use crate::render::render_numbered;
use anyhow::{Context, Result};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

/// Execute the consistency command, returning whether the proof was found
pub fn execute(
    old_items: String,
    new_items: String,
    delimiter: Option<String>,
    output: Option<PathBuf>,
    json: bool,
) -> Result<bool> {
    let config = GlobalConfig::load_or_default();
    let delimiter = delimiter.unwrap_or_else(|| config.delimiter().to_string());
    let output = output.unwrap_or_else(|| config.trees_file());
    let json = json || config.json();

    let old = tree_from_items(&old_items, &delimiter)?;
    let new = tree_from_items(&new_items, &delimiter)?;

    std::fs::write(&output, render_numbered(&[&old, &new])?)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!(path = %output.display(), "wrote both tree renderings");

    let old_root = old.root_hash()?;
    let proof = prove_consistency(&new, &old_root)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "consistent": proof.is_some(),
                "old_root": old_root,
                "new_root": new.root_hash()?,
                "proof": proof,
            }))?
        );
    } else {
        match &proof {
            Some(proof) => println!("yes {}", format_hashes(&proof.hashes())),
            None => println!("no"),
        }
    }

    Ok(proof.is_some())
}
