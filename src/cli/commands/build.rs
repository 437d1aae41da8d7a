//! Build command implementation

use crate::cli::commands::tree_from_items;
use crate::config::GlobalConfig;
use crate::render::render_tree;
use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

/// Execute the build command
pub fn execute(
    items: String,
    delimiter: Option<String>,
    output: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let config = GlobalConfig::load_or_default();
    let delimiter = delimiter.unwrap_or_else(|| config.delimiter().to_string());
    let output = output.unwrap_or_else(|| config.tree_file());
    let json = json || config.json();

    let tree = tree_from_items(&items, &delimiter)?;
    let root = tree.root_hash()?;

    std::fs::write(&output, render_tree(&tree)?)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!(path = %output.display(), "wrote tree rendering");

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "root": root,
                "leaves": tree.leaf_count(),
                "nodes": tree.len(),
                "layers": tree.num_layers(),
                "output": output.display().to_string(),
            }))?
        );
    } else {
        println!("{}", "✓ Merkle tree built".green().bold());
        println!("  {}: {}", "Root".bold(), root.to_hex().cyan());
        println!("  {}: {}", "Leaves".bold(), tree.leaf_count());
        println!("  {}: {}", "Layers".bold(), tree.num_layers());
        println!("  {}: {}", "Rendering".bold(), output.display().to_string().dimmed());
    }

    Ok(())
}
