//! Error types for mtree

use crate::core::types::Hash;
use thiserror::Error;

/// Main error type for mtree operations
#[derive(Error, Debug)]
pub enum MtreeError {
    /// Tree construction errors
    #[error("Cannot build a merkle tree from zero leaves")]
    EmptyInput,

    #[error("Tree has {leaves} leaves appended since the last build")]
    TreeNotBuilt { leaves: usize },

    /// Lookup errors
    #[error("Value not found in tree: {value}")]
    ValueNotFound { value: String },

    #[error("Subtree root not found in tree: {hash}")]
    SubtreeNotFound { hash: Hash },

    /// Persisted rendering errors
    #[error("Malformed tree rendering: {reason}")]
    MalformedPersistedTree { reason: String },

    /// Proof-related errors
    #[error("Invalid proof format: {reason}")]
    InvalidProofFormat { reason: String },

    /// Configuration errors
    #[error("Configuration error: {reason}")]
    ConfigurationError { reason: String },

    #[error("Home directory not found")]
    HomeDirectoryNotFound,

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// Hex encoding/decoding errors
    #[error("Hex encoding error: {0}")]
    HexError(#[from] hex::FromHexError),
}

impl MtreeError {
    /// Create a new value not found error
    pub fn value_not_found(value: impl Into<String>) -> Self {
        Self::ValueNotFound {
            value: value.into(),
        }
    }

    /// Create a new subtree not found error
    pub fn subtree_not_found(hash: Hash) -> Self {
        Self::SubtreeNotFound { hash }
    }

    /// Create a new malformed rendering error
    pub fn malformed_tree(reason: impl Into<String>) -> Self {
        Self::MalformedPersistedTree {
            reason: reason.into(),
        }
    }

    /// Create a new invalid proof format error
    pub fn invalid_proof_format(reason: impl Into<String>) -> Self {
        Self::InvalidProofFormat {
            reason: reason.into(),
        }
    }

    /// Create a new configuration error
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::ConfigurationError {
            reason: reason.into(),
        }
    }

    /// Whether this error only reports that a queried item is absent
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ValueNotFound { .. } | Self::SubtreeNotFound { .. }
        )
    }
}

/// Result type alias for mtree operations
pub type Result<T> = std::result::Result<T, MtreeError>;
