//! Prove-subtree command implementation

use crate::cli::commands::{load_tree, parse_hash, prove::report};
use crate::cli::TreeSource;
use crate::config::GlobalConfig;
use crate::proofs::prove_consistency;
use anyhow::Result;
use std::path::PathBuf;

/// Execute the prove-subtree command, returning whether the hash was found
pub fn execute(
    hash: String,
    source: TreeSource,
    output: Option<PathBuf>,
    json: bool,
) -> Result<bool> {
    let config = GlobalConfig::load_or_default();
    let json = json || config.json();

    let subtree_root = parse_hash(&hash)?;
    let tree = load_tree(&source, &config)?;
    let proof = prove_consistency(&tree, &subtree_root)?;
    report(proof.as_ref(), output.as_deref(), json)?;
    Ok(proof.is_some())
}
