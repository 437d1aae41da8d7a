//! Human-readable rendering of a built tree

use crate::core::error::*;
use crate::render::{labels, TREE_HEADER};
use crate::tree::{MerkleTree, Node};
use std::fmt::Write;

/// Indentation added per level above the leaves
const INDENT: &str = "\t\t\t\t\t";

/// Render every node in sequence order as a framed block, indented by level.
pub fn render_tree(tree: &MerkleTree) -> Result<String> {
    tree.ensure_built()?;

    let mut output = String::new();
    for (pos, node) in tree.nodes().iter().enumerate() {
        let level = tree.level(pos);
        render_node(&mut output, tree, node, level);
    }
    Ok(output)
}

fn render_node(output: &mut String, tree: &MerkleTree, node: &Node, level: u32) {
    let tabs = INDENT.repeat(level.saturating_sub(1) as usize);
    let hex_of = |pos: usize| {
        tree.node(pos)
            .and_then(Node::hash)
            .map(|hash| hash.to_hex())
            .unwrap_or_default()
    };

    let mut lines = Vec::with_capacity(4);
    lines.push(format!(
        "{}{}",
        labels::HASH,
        node.hash().map(|hash| hash.to_hex()).unwrap_or_default()
    ));
    match node {
        Node::Leaf { value, .. } => lines.push(format!("{}{}", labels::DATA, value)),
        Node::Internal { children, .. } => {
            let (left, right) = children
                .map(|(left, right)| (hex_of(left), hex_of(right)))
                .unwrap_or_default();
            lines.push(format!("{}{}", labels::LEFT_CHILD, left));
            lines.push(format!("{}{}", labels::RIGHT_CHILD, right));
        }
    }
    lines.push(format!("{}{}", labels::LEVEL, level));

    let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    let rule = "-".repeat(width);

    // Writing into a String cannot fail.
    let _ = writeln!(output, "{tabs}{rule}");
    for line in &lines {
        let _ = writeln!(output, "{tabs}{line}");
    }
    let _ = writeln!(output, "{tabs}{rule}\n");
}

/// Render several trees one after another under numbered headers
pub fn render_numbered(trees: &[&MerkleTree]) -> Result<String> {
    let mut output = String::new();
    for (i, tree) in trees.iter().enumerate() {
        if i > 0 {
            output.push_str("\n\n\n");
        }
        let _ = writeln!(output, "{}{}\n", TREE_HEADER, i + 1);
        output.push_str(&render_tree(tree)?);
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hash::hash_leaf;

    #[test]
    fn test_leaf_block_layout() {
        let tree = MerkleTree::from_items(["a"]).unwrap();
        let text = render_tree(&tree).unwrap();
        let hash_line = format!("| Hash: {}", hash_leaf("a").to_hex());
        let rule = "-".repeat(hash_line.len());
        let expected = format!("{rule}\n{hash_line}\n| - Data: a\n| - Level: 1\n{rule}\n\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_internal_nodes_are_indented_by_level() {
        let tree = MerkleTree::from_items(["a", "b", "c"]).unwrap();
        let text = render_tree(&tree).unwrap();
        let blocks: Vec<&str> = text.split("\n\n").filter(|b| !b.is_empty()).collect();
        assert_eq!(blocks.len(), 5);

        // Root at level 3 is indented twice.
        let root = blocks[3];
        assert!(root.starts_with(&format!("{INDENT}{INDENT}-")));
        assert!(root.contains("| - Left Child: "));
        assert!(root.contains("| - Level: 3"));

        // Leaf "c" hangs directly under the root, at level 2.
        assert!(blocks[4].contains("| - Data: c"));
        assert!(blocks[4].contains("| - Level: 2"));
    }

    #[test]
    fn test_numbered_headers() {
        let first = MerkleTree::from_items(["a"]).unwrap();
        let second = MerkleTree::from_items(["a", "b"]).unwrap();
        let text = render_numbered(&[&first, &second]).unwrap();
        assert!(text.starts_with("Merkle Tree #1\n\n"));
        assert!(text.contains("\n\n\nMerkle Tree #2\n\n"));
    }

    #[test]
    fn test_unbuilt_tree_is_rejected() {
        let mut tree = MerkleTree::new();
        tree.append("a");
        assert!(matches!(
            render_tree(&tree),
            Err(MtreeError::TreeNotBuilt { .. })
        ));
    }
}
