//! Merkle proof system for mtree
//!
//! Two depth-first searches share one traversal: an audit proof looks for a
//! leaf holding a value, a consistency proof looks for any node whose hash is
//! an earlier snapshot's root. Both search the left child first and collect
//! the sibling hash at every step back up, so the first match in left-biased
//! order wins when several nodes qualify.

pub mod consistency;
pub mod inclusion;
pub mod proof;

// Re-export commonly used items
pub use consistency::prove_consistency;
pub use inclusion::prove_inclusion;
pub use proof::{Proof, ProofElement, ProofGenerator, ProofMetadata, ProofPosition, ProofTarget};

use crate::tree::{index, MerkleTree, Node, Window};

/// What a search does at one node
pub(crate) enum Visit {
    /// This node is the target
    Found,
    /// Look inside this node's children
    Descend,
    /// Give up on this branch
    Miss,
}

/// Depth-first search over the subtree covering `window`, returning the
/// sibling path from the first matching node up to the window's root.
pub(crate) fn search<F>(tree: &MerkleTree, window: Window, visit: &F) -> Option<Vec<ProofElement>>
where
    F: Fn(&Node) -> Visit,
{
    let len = tree.len();
    let pos = window.root();
    let node = tree.node(pos)?;

    match visit(node) {
        Visit::Found => return Some(Vec::new()),
        Visit::Miss => return None,
        Visit::Descend => {}
    }
    if node.is_leaf() {
        return None;
    }

    let left = index::left_child(len, pos, window);
    let right = index::right_child(len, pos, window);

    if let Some(mut path) = search(tree, window.left_of(pos), visit) {
        path.push(sibling(tree, right, ProofPosition::Right)?);
        return Some(path);
    }
    if let Some(mut path) = search(tree, window.right_of(pos), visit) {
        path.push(sibling(tree, left, ProofPosition::Left)?);
        return Some(path);
    }
    None
}

fn sibling(tree: &MerkleTree, pos: usize, position: ProofPosition) -> Option<ProofElement> {
    let hash = *tree.node(pos)?.hash()?;
    Some(ProofElement { hash, position })
}
