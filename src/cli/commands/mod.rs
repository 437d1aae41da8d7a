//! CLI command implementations

pub mod build;
pub mod completion;
pub mod config;
pub mod consistency;
pub mod prove;
pub mod prove_subtree;
pub mod root;
pub mod verify;

// Common utilities for commands
use crate::cli::TreeSource;
use crate::config::GlobalConfig;
use crate::core::{error::MtreeError, types::Hash};
use crate::render;
use crate::tree::MerkleTree;
use anyhow::{Context, Result};
use tracing::info;

/// Split a single item-list argument on `delimiter`. An empty argument holds
/// no items.
pub fn split_items<'a>(raw: &'a str, delimiter: &str) -> Vec<&'a str> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(delimiter).collect()
}

/// Build a tree from a delimited item list
pub fn tree_from_items(raw: &str, delimiter: &str) -> Result<MerkleTree> {
    let items = split_items(raw, delimiter);
    info!(items = items.len(), "building tree from item list");
    Ok(MerkleTree::from_items(items)?)
}

/// Build the tree a command operates on
pub fn load_tree(source: &TreeSource, config: &GlobalConfig) -> Result<MerkleTree> {
    if let Some(items) = &source.items {
        let delimiter = source.delimiter.as_deref().unwrap_or(config.delimiter());
        return tree_from_items(items, delimiter);
    }

    let path = source
        .tree
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("either --items or --tree is required"))?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read tree rendering {}", path.display()))?;

    let tree = match source.section {
        Some(number) => MerkleTree::from_rendering(render::find_section(&text, number)?.body)?,
        None => MerkleTree::from_rendering(&text)?,
    };
    info!(
        path = %path.display(),
        leaves = tree.leaf_count(),
        "rebuilt tree from rendering"
    );
    Ok(tree)
}

/// Format a hash list the way the yes/no answers print it
pub fn format_hashes(hashes: &[Hash]) -> String {
    let hex: Vec<String> = hashes.iter().map(Hash::to_hex).collect();
    format!("[{}]", hex.join(", "))
}

/// Parse a hex hash argument
pub fn parse_hash(raw: &str) -> Result<Hash> {
    Hash::from_hex(raw)
        .map_err(MtreeError::from)
        .with_context(|| format!("Invalid hash: {}", raw))
}
