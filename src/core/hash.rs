//! Hash rule for leaves and internal nodes
//!
//! Leaves hash the UTF-8 bytes of their value. Internal nodes hash the
//! concatenation of their children's hashes, where a child that has not been
//! built yet contributes no bytes at all.

use crate::core::types::Hash;
use sha2::{Digest, Sha256};

/// Compute SHA-256 hash of data
pub fn sha256(data: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(data);
    Hash::from_bytes(hasher.finalize().into())
}

/// Hash of a leaf holding `value`
pub fn hash_leaf(value: &str) -> Hash {
    sha256(value.as_bytes())
}

/// Compute SHA-256 hash of two hashes (for merkle tree construction)
pub fn hash_pair(left: &Hash, right: &Hash) -> Hash {
    hash_children(Some(left), Some(right))
}

/// Hash of an internal node whose children may still be unset
pub fn hash_children(left: Option<&Hash>, right: Option<&Hash>) -> Hash {
    let mut hasher = Sha256::new();
    if let Some(left) = left {
        hasher.update(left.as_bytes());
    }
    if let Some(right) = right {
        hasher.update(right.as_bytes());
    }
    Hash::from_bytes(hasher.finalize().into())
}
