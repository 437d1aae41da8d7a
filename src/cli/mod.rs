//! Command-line interface for mtree

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

pub mod commands;

/// mtree - append-only merkle tree with audit and consistency proofs
#[derive(Parser)]
#[command(
    name = "mtree",
    version,
    about = "Build merkle trees over item lists and prove inclusion or consistency",
    long_about = "mtree commits an ordered list of text items to a SHA-256 merkle tree, writes a readable rendering of it, and answers audit (is this value in the tree?) and consistency (is this earlier root embedded in the tree?) queries."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where a command gets its tree from
#[derive(Args, Debug, Clone)]
pub struct TreeSource {
    /// Delimited list of items to build the tree from
    #[arg(long, conflicts_with = "tree", required_unless_present = "tree")]
    pub items: Option<String>,

    /// Rendering file to rebuild the tree from
    #[arg(long)]
    pub tree: Option<PathBuf>,

    /// Tree number inside a numbered rendering file
    #[arg(long, requires = "tree", conflicts_with = "items")]
    pub section: Option<usize>,

    /// Item delimiter (default from config, else ", ")
    #[arg(short, long)]
    pub delimiter: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a tree and write its rendering
    Build {
        /// Delimited list of items, in order
        items: String,

        /// Item delimiter (default from config, else ", ")
        #[arg(short, long)]
        delimiter: Option<String>,

        /// Rendering file (default from config, else merkle.tree)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that the tree of an earlier item list is embedded in a later one
    Consistency {
        /// Delimited items of the earlier snapshot
        old_items: String,

        /// Delimited items of the later snapshot
        new_items: String,

        /// Item delimiter (default from config, else ", ")
        #[arg(short, long)]
        delimiter: Option<String>,

        /// Rendering file for both trees (default from config, else merkle.trees)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Prove that a value is stored in the tree
    Prove {
        /// Value to look for
        value: String,

        #[command(flatten)]
        source: TreeSource,

        /// Write the proof as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Prove that a hash is the root of a complete subtree
    ProveSubtree {
        /// Hex-encoded subtree root
        hash: String,

        #[command(flatten)]
        source: TreeSource,

        /// Write the proof as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Verify a JSON proof
    Verify {
        /// Proof file
        proof: PathBuf,

        /// Root hash the proof must lead to
        #[arg(long)]
        root: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the root hash of a tree
    Root {
        #[command(flatten)]
        source: TreeSource,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get and set configuration options
    Config {
        /// Configuration key to get/set
        key: Option<String>,

        /// Configuration value to set
        value: Option<String>,

        /// List all configuration values
        #[arg(short, long)]
        list: bool,

        /// Unset a configuration value
        #[arg(long)]
        unset: bool,

        /// Show configuration file location
        #[arg(long)]
        show_origin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
