//! Consistency proofs for earlier snapshot roots

use crate::core::{error::Result, types::Hash};
use crate::proofs::{proof::*, search, Visit};
use crate::tree::{MerkleTree, Node, Window};
use tracing::debug;

/// Prove that `subtree_root` is the hash of a complete subtree of `tree`.
///
/// Returns `Ok(None)` when no node carries that hash. Leaves are compared but
/// never descended into. Proving the current root yields an empty sibling
/// path, i.e. the one-element hash list holding just the root.
pub fn prove_consistency(tree: &MerkleTree, subtree_root: &Hash) -> Result<Option<Proof>> {
    tree.ensure_built()?;

    let visit = |node: &Node| {
        if node.hash() == Some(subtree_root) {
            Visit::Found
        } else if node.is_leaf() {
            Visit::Miss
        } else {
            Visit::Descend
        }
    };
    let Some(path) = search(tree, Window::full(tree.len()), &visit) else {
        debug!(subtree = %subtree_root.short(), "subtree root not in tree");
        return Ok(None);
    };

    debug!(
        subtree = %subtree_root.short(),
        siblings = path.len(),
        "built consistency path"
    );
    let target = ProofTarget::Subtree {
        hash: *subtree_root,
    };
    Proof::new(tree, target, path).map(Some)
}
