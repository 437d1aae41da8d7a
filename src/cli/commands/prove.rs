//! Prove command implementation

use crate::cli::commands::{format_hashes, load_tree};
use crate::cli::TreeSource;
use crate::config::GlobalConfig;
use crate::proofs::{prove_inclusion, Proof};
use anyhow::{Context, Result};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::info;

/// Execute the prove command, returning whether the value was found
pub fn execute(
    value: String,
    source: TreeSource,
    output: Option<PathBuf>,
    json: bool,
) -> Result<bool> {
    let config = GlobalConfig::load_or_default();
    let json = json || config.json();

    let tree = load_tree(&source, &config)?;
    let proof = prove_inclusion(&tree, &value)?;
    report(proof.as_ref(), output.as_deref(), json)?;
    Ok(proof.is_some())
}

/// Print a yes/no answer for `proof` and optionally save it
pub(crate) fn report(proof: Option<&Proof>, output: Option<&Path>, json: bool) -> Result<()> {
    if let (Some(proof), Some(path)) = (proof, output) {
        std::fs::write(path, proof.to_json()?)
            .with_context(|| format!("Failed to write proof {}", path.display()))?;
        info!(path = %path.display(), "wrote proof");
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "found": proof.is_some(),
                "proof": proof,
            }))?
        );
    } else {
        match proof {
            Some(proof) => println!("yes {}", format_hashes(&proof.hashes())),
            None => println!("no"),
        }
    }
    Ok(())
}
