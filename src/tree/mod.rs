//! Append-only merkle tree over a flat node sequence
//!
//! Items are appended one at a time. Each append after the first pushes an
//! internal placeholder followed by the new leaf, so `k` appends leave `2k - 1`
//! nodes. Topology is not stored incrementally: [`MerkleTree::build`] derives
//! the whole shape from the current length and rehashes every internal node.

pub mod index;
pub mod node;

pub use index::Window;
pub use node::Node;

use crate::core::{error::*, hash::hash_children, types::*};
use tracing::debug;

/// Merkle tree for generating proofs
#[derive(Debug, Clone, Default)]
pub struct MerkleTree {
    nodes: Vec<Node>,
    built: bool,
}

impl MerkleTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every item in order, then build
    pub fn from_items<I, S>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tree = Self::new();
        for item in items {
            tree.append(item);
        }
        if tree.is_empty() {
            return Err(MtreeError::EmptyInput);
        }
        tree.build()?;
        Ok(tree)
    }

    /// Append a leaf holding `value`, returning its position.
    ///
    /// Earlier leaves keep their positions. The tree must be rebuilt before
    /// any proof is produced.
    pub fn append(&mut self, value: impl Into<String>) -> Position {
        if !self.nodes.is_empty() {
            self.nodes.push(Node::placeholder());
        }
        self.nodes.push(Node::leaf(value));
        self.built = false;

        let position = self.nodes.len() - 1;
        debug!(position, leaves = self.leaf_count(), "appended leaf");
        position
    }

    /// Recompute every internal node's children and hash for the current
    /// length, returning the root hash
    pub fn build(&mut self) -> Result<Hash> {
        if self.nodes.is_empty() {
            return Err(MtreeError::EmptyInput);
        }

        let root = self.build_subtree(Window::full(self.nodes.len()));
        self.built = true;
        debug!(
            leaves = self.leaf_count(),
            layers = self.num_layers(),
            root = %root.short(),
            "built merkle tree"
        );
        Ok(root)
    }

    /// Post-order pass over the subtree covering `window`
    fn build_subtree(&mut self, window: Window) -> Hash {
        let len = self.nodes.len();
        let pos = window.root();
        if let Node::Leaf { hash, .. } = &self.nodes[pos] {
            return *hash;
        }

        let left = index::left_child(len, pos, window);
        let right = index::right_child(len, pos, window);
        self.build_subtree(window.left_of(pos));
        self.build_subtree(window.right_of(pos));

        let hash = hash_children(self.nodes[left].hash(), self.nodes[right].hash());
        self.nodes[pos] = Node::Internal {
            children: Some((left, right)),
            hash: Some(hash),
        };
        hash
    }

    /// Root hash of the current snapshot
    pub fn root_hash(&self) -> Result<RootHash> {
        self.ensure_built()?;
        let root = &self.nodes[self.root_position()];
        root.hash().copied().ok_or(MtreeError::TreeNotBuilt {
            leaves: self.leaf_count(),
        })
    }

    /// Fail unless the tree is non-empty and built for its current length
    pub fn ensure_built(&self) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(MtreeError::EmptyInput);
        }
        if !self.built {
            return Err(MtreeError::TreeNotBuilt {
                leaves: self.leaf_count(),
            });
        }
        Ok(())
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes in the sequence
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of appended items
    pub fn leaf_count(&self) -> usize {
        (self.nodes.len() + 1) / 2
    }

    /// The node sequence in position order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, pos: Position) -> Option<&Node> {
        self.nodes.get(pos)
    }

    /// Leaf values in append order
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().filter_map(Node::value)
    }

    /// Position of the root. Panics on an empty tree.
    pub fn root_position(&self) -> Position {
        index::root_pos(self.nodes.len())
    }

    /// Number of layers. Panics on an empty tree.
    pub fn num_layers(&self) -> u32 {
        index::num_layers(self.nodes.len())
    }

    /// Level of the node at `pos`, the root being at [`Self::num_layers`]
    pub fn level(&self, pos: Position) -> u32 {
        index::level(self.nodes.len(), pos)
    }
}
