//! Core types and utilities for mtree
//!
//! This module contains the hash type, the hash rule and error handling
//! shared by the tree, proofs and rendering layers.

pub mod error;
pub mod hash;
pub mod types;

// Re-export commonly used items
pub use error::{MtreeError, Result};
pub use hash::{hash_children, hash_leaf, hash_pair, sha256};
pub use types::{Hash, Position, RootHash};
