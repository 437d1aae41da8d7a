//! Text rendering of trees and reconstruction from that rendering
//!
//! The rendering is descriptive only: nothing in the core depends on it. A
//! tree can be reloaded from it because every leaf value is written after a
//! fixed label.

pub mod parse;
pub mod pretty;

pub use parse::{extract_leaf_values, find_section, split_numbered, TreeSection};
pub use pretty::{render_numbered, render_tree};

/// Header preceding each tree in a numbered rendering
pub const TREE_HEADER: &str = "Merkle Tree #";

/// Line labels used inside a node block
pub mod labels {
    pub const HASH: &str = "| Hash: ";
    pub const DATA: &str = "| - Data: ";
    pub const LEFT_CHILD: &str = "| - Left Child: ";
    pub const RIGHT_CHILD: &str = "| - Right Child: ";
    pub const LEVEL: &str = "| - Level: ";
}
