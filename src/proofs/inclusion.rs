//! Audit proofs for leaf values

use crate::core::error::Result;
use crate::proofs::{proof::*, search, Visit};
use crate::tree::{MerkleTree, Node, Window};
use tracing::debug;

/// Prove that `value` is stored in a leaf of `tree`.
///
/// Returns `Ok(None)` when no leaf holds the value. With duplicate values the
/// leftmost leaf is proved.
pub fn prove_inclusion(tree: &MerkleTree, value: &str) -> Result<Option<Proof>> {
    tree.ensure_built()?;

    let visit = |node: &Node| match node {
        Node::Leaf { value: stored, .. } if stored == value => Visit::Found,
        Node::Leaf { .. } => Visit::Miss,
        Node::Internal { .. } => Visit::Descend,
    };
    let Some(path) = search(tree, Window::full(tree.len()), &visit) else {
        debug!(value, "value not in tree");
        return Ok(None);
    };

    debug!(value, siblings = path.len(), "built audit path");
    let target = ProofTarget::Value {
        value: value.to_string(),
    };
    Proof::new(tree, target, path).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{error::MtreeError, hash::*};

    #[test]
    fn test_three_leaf_paths() {
        let tree = MerkleTree::from_items(["a", "b", "c"]).unwrap();
        let ab = hash_pair(&hash_leaf("a"), &hash_leaf("b"));
        let root = tree.root_hash().unwrap();

        let proof = prove_inclusion(&tree, "a").unwrap().unwrap();
        assert_eq!(proof.hashes(), vec![hash_leaf("b"), hash_leaf("c"), root]);
        assert_eq!(proof.proof_path[0].position, ProofPosition::Right);
        assert!(proof.verify());

        let proof = prove_inclusion(&tree, "c").unwrap().unwrap();
        assert_eq!(proof.hashes(), vec![ab, root]);
        assert_eq!(proof.proof_path[0].position, ProofPosition::Left);
        assert!(proof.verify());
    }

    #[test]
    fn test_single_leaf_has_only_root() {
        let tree = MerkleTree::from_items(["solo"]).unwrap();
        let proof = prove_inclusion(&tree, "solo").unwrap().unwrap();
        assert!(proof.proof_path.is_empty());
        assert_eq!(proof.hashes(), vec![hash_leaf("solo")]);
        assert!(proof.verify());
    }

    #[test]
    fn test_absent_value() {
        let tree = MerkleTree::from_items(["a", "b", "c"]).unwrap();
        assert!(prove_inclusion(&tree, "d").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_value_proves_leftmost() {
        let tree = MerkleTree::from_items(["x", "y", "x"]).unwrap();
        let proof = prove_inclusion(&tree, "x").unwrap().unwrap();
        // The leftmost "x" sits under the left pair, so two siblings are needed.
        assert_eq!(proof.proof_path.len(), 2);
        assert_eq!(proof.proof_path[0].hash, hash_leaf("y"));
        assert!(proof.verify());
    }

    #[test]
    fn test_unbuilt_tree_rejected() {
        let mut tree = MerkleTree::from_items(["a"]).unwrap();
        tree.append("b");
        assert!(matches!(
            prove_inclusion(&tree, "a"),
            Err(MtreeError::TreeNotBuilt { .. })
        ));
    }
}
