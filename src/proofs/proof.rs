//! Proof representation and verification

use crate::core::{error::*, hash::*, types::*};
use crate::proofs::{consistency, inclusion};
use crate::tree::MerkleTree;
use serde::{Deserialize, Serialize};

/// Version of the JSON proof format
pub const PROOF_VERSION: &str = "1.0";

/// What a proof is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProofTarget {
    /// Prove a value is stored in a leaf
    Value { value: String },
    /// Prove a hash is the root of a complete embedded subtree
    Subtree { hash: Hash },
}

impl ProofTarget {
    /// Hash the fold starts from
    pub fn start_hash(&self) -> Hash {
        match self {
            ProofTarget::Value { value } => hash_leaf(value),
            ProofTarget::Subtree { hash } => *hash,
        }
    }
}

/// A single element in a merkle proof path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofElement {
    /// Hash of the sibling node
    pub hash: Hash,
    /// Whether the sibling is on the left or right
    pub position: ProofPosition,
}

/// Position of a sibling in a merkle proof
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProofPosition {
    Left,
    Right,
}

/// Metadata included with proofs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofMetadata {
    /// Timestamp when proof was generated
    pub timestamp: i64,
    /// Number of leaves in the tree the proof was taken from
    pub leaf_count: usize,
}

/// Complete merkle proof
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    /// Version of the proof format
    pub version: String,
    /// Target being proved
    pub target: ProofTarget,
    /// Root hash to verify against
    pub root: RootHash,
    /// Sibling hashes from the target up to the root
    pub proof_path: Vec<ProofElement>,
    /// Additional metadata
    pub metadata: ProofMetadata,
}

impl Proof {
    pub(crate) fn new(
        tree: &MerkleTree,
        target: ProofTarget,
        proof_path: Vec<ProofElement>,
    ) -> Result<Self> {
        Ok(Proof {
            version: PROOF_VERSION.to_string(),
            target,
            root: tree.root_hash()?,
            proof_path,
            metadata: ProofMetadata {
                timestamp: chrono::Utc::now().timestamp(),
                leaf_count: tree.leaf_count(),
            },
        })
    }

    /// Sibling hashes in ascending order, terminated by the root hash
    pub fn hashes(&self) -> Vec<Hash> {
        self.proof_path
            .iter()
            .map(|element| element.hash)
            .chain(std::iter::once(self.root))
            .collect()
    }

    /// Fold the target hash against every sibling in recorded order
    pub fn computed_root(&self) -> Hash {
        self.proof_path
            .iter()
            .fold(self.target.start_hash(), |current, sibling| {
                match sibling.position {
                    ProofPosition::Left => hash_pair(&sibling.hash, &current),
                    ProofPosition::Right => hash_pair(&current, &sibling.hash),
                }
            })
    }

    /// Verify this proof
    pub fn verify(&self) -> bool {
        self.computed_root() == self.root
    }

    /// Verify this proof against an externally trusted root
    pub fn verify_against(&self, root: &RootHash) -> bool {
        self.root == *root && self.verify()
    }

    /// Serialize proof to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(MtreeError::JsonSerialization)
    }

    /// Deserialize proof from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let proof: Proof = serde_json::from_str(json)?;
        if proof.version != PROOF_VERSION {
            return Err(MtreeError::invalid_proof_format(format!(
                "unsupported version {}, expected {}",
                proof.version, PROOF_VERSION
            )));
        }
        Ok(proof)
    }
}

/// Proof generator for creating proofs from a built tree.
///
/// Unlike the free functions in [`inclusion`] and [`consistency`], absence is
/// reported as an error here.
pub struct ProofGenerator<'a> {
    tree: &'a MerkleTree,
}

impl<'a> ProofGenerator<'a> {
    /// Create a new proof generator
    pub fn new(tree: &'a MerkleTree) -> Self {
        Self { tree }
    }

    /// Generate an audit proof for a value
    pub fn prove_value(&self, value: &str) -> Result<Proof> {
        inclusion::prove_inclusion(self.tree, value)?
            .ok_or_else(|| MtreeError::value_not_found(value))
    }

    /// Generate a consistency proof for an earlier root
    pub fn prove_subtree(&self, hash: &Hash) -> Result<Proof> {
        consistency::prove_consistency(self.tree, hash)?
            .ok_or_else(|| MtreeError::subtree_not_found(*hash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MerkleTree {
        MerkleTree::from_items(["a", "b", "c", "d", "e"]).unwrap()
    }

    #[test]
    fn test_hashes_end_with_root() {
        let tree = sample();
        let proof = ProofGenerator::new(&tree).prove_value("c").unwrap();
        let hashes = proof.hashes();
        assert_eq!(hashes.len(), proof.proof_path.len() + 1);
        assert_eq!(hashes.last(), Some(&tree.root_hash().unwrap()));
    }

    #[test]
    fn test_tampered_proof_fails() {
        let tree = sample();
        let mut proof = ProofGenerator::new(&tree).prove_value("b").unwrap();
        assert!(proof.verify());

        proof.target = ProofTarget::Value {
            value: "z".to_string(),
        };
        assert!(!proof.verify());

        let mut proof = ProofGenerator::new(&tree).prove_value("b").unwrap();
        proof.proof_path[0].position = match proof.proof_path[0].position {
            ProofPosition::Left => ProofPosition::Right,
            ProofPosition::Right => ProofPosition::Left,
        };
        assert!(!proof.verify());
    }

    #[test]
    fn test_verify_against_other_root() {
        let tree = sample();
        let proof = ProofGenerator::new(&tree).prove_value("a").unwrap();
        assert!(proof.verify_against(&tree.root_hash().unwrap()));
        assert!(!proof.verify_against(&hash_leaf("a")));
    }

    #[test]
    fn test_json_roundtrip() {
        let tree = sample();
        let proof = ProofGenerator::new(&tree).prove_value("e").unwrap();
        let json = proof.to_json().unwrap();
        assert!(json.contains("\"type\": \"value\""));
        let back = Proof::from_json(&json).unwrap();
        assert_eq!(back, proof);
        assert!(back.verify());
    }

    #[test]
    fn test_json_rejects_unknown_version() {
        let tree = sample();
        let mut proof = ProofGenerator::new(&tree).prove_value("e").unwrap();
        proof.version = "9.9".to_string();
        let json = serde_json::to_string(&proof).unwrap();
        assert!(matches!(
            Proof::from_json(&json),
            Err(MtreeError::InvalidProofFormat { .. })
        ));
    }

    #[test]
    fn test_generator_reports_absence_as_error() {
        let tree = sample();
        let generator = ProofGenerator::new(&tree);
        let err = generator.prove_value("missing").unwrap_err();
        assert!(err.is_not_found());
        let err = generator.prove_subtree(&hash_leaf("missing")).unwrap_err();
        assert!(matches!(err, MtreeError::SubtreeNotFound { .. }));
    }
}
