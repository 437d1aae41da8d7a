//! mtree - an append-only merkle tree with audit and consistency proofs
//!
//! Items are appended to a flat node sequence whose shape is derived purely
//! from its length: every span of leaves splits at the largest power of two
//! below its size. A build pass hashes the whole tree with SHA-256, after
//! which two questions can be answered:
//!
//! - **Audit proofs**: is this value stored in a leaf, and what sibling
//!   hashes lead from it to the root?
//! - **Consistency proofs**: is this hash, the root of an earlier snapshot,
//!   the root of a complete subtree of the current tree?
//!
//! # Example Usage
//!
//! ```rust
//! use mtree::{prove_consistency, prove_inclusion, MerkleTree};
//!
//! let old = MerkleTree::from_items(["a", "b"])?;
//! let new = MerkleTree::from_items(["a", "b", "c", "d"])?;
//!
//! let audit = prove_inclusion(&new, "c")?.expect("c was appended");
//! assert!(audit.verify());
//!
//! let consistency = prove_consistency(&new, &old.root_hash()?)?.expect("old root is embedded");
//! assert_eq!(consistency.root, new.root_hash()?);
//! # Ok::<(), mtree::MtreeError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod proofs;
pub mod render;
pub mod tree;

// Re-export commonly used types
pub use crate::core::{
    error::{MtreeError, Result},
    types::{Hash, Position, RootHash},
};

pub use tree::{MerkleTree, Node};

pub use proofs::{
    prove_consistency, prove_inclusion,
    proof::{Proof, ProofElement, ProofGenerator, ProofPosition, ProofTarget},
};

/// Current version of mtree
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
