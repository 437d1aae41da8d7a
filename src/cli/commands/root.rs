use crate::cli::commands::load_tree;
use crate::cli::TreeSource;
use crate::config::GlobalConfig;
use anyhow::Result;
use colored::Colorize;
use serde_json::json;

/// Execute the root command
pub fn execute(source: TreeSource, json: bool) -> Result<()> {
    let config = GlobalConfig::load_or_default();
    let json = json || config.json();

    let tree = load_tree(&source, &config)?;
    let root = tree.root_hash()?;

    if json {
        println!(
            "{}",
            json!({
                "root": root,
                "leaves": tree.leaf_count(),
                "layers": tree.num_layers(),
            })
        );
    } else {
        println!("{}: {}", "Root Hash".bold(), root.to_hex().cyan());
        println!("{}: {}", "Leaves".bold(), tree.leaf_count());
        println!("{}: {}", "Layers".bold(), tree.num_layers());
    }

    Ok(())
}
