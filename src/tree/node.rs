//! Nodes stored in the flat sequence

use crate::core::{hash::hash_leaf, types::*};
use serde::{Deserialize, Serialize};

/// A single slot of the node sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// A data item and the hash of its bytes
    Leaf { value: String, hash: Hash },
    /// A placeholder filled in by each build pass
    Internal {
        children: Option<(Position, Position)>,
        hash: Option<Hash>,
    },
}

impl Node {
    /// Create a leaf holding `value`
    pub fn leaf(value: impl Into<String>) -> Self {
        let value = value.into();
        let hash = hash_leaf(&value);
        Node::Leaf { value, hash }
    }

    /// Create an internal node with nothing assigned yet
    pub fn placeholder() -> Self {
        Node::Internal {
            children: None,
            hash: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Stored hash, `None` for an internal node that has not been built
    pub fn hash(&self) -> Option<&Hash> {
        match self {
            Node::Leaf { hash, .. } => Some(hash),
            Node::Internal { hash, .. } => hash.as_ref(),
        }
    }

    /// Leaf value, `None` for internal nodes
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Leaf { value, .. } => Some(value),
            Node::Internal { .. } => None,
        }
    }

    /// Assigned children, `None` for leaves and unbuilt internal nodes
    pub fn children(&self) -> Option<(Position, Position)> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { children, .. } => *children,
        }
    }
}
