//! Structural indexing over the flat node sequence
//!
//! Leaves sit at even positions and internal nodes at odd positions, so the
//! sequence is an in-order layout of the tree. Topology is never stored: every
//! function here derives it from the sequence length `len` and a position,
//! which means results are only valid for the length they were computed with.
//!
//! A span of `m` leaves splits into a left subtree holding the largest power
//! of two strictly below `m` and a right subtree holding the rest. The left
//! subtree of the overall root is therefore perfect and can be navigated with
//! plain offset arithmetic, while the right remainder is walked through
//! explicit [`Window`]s.

use crate::core::types::Position;

/// Number of layers of a tree stored in `len` nodes.
///
/// `len` must be non-zero.
pub fn num_layers(len: usize) -> u32 {
    debug_assert!(len > 0, "layer count of an empty sequence is undefined");
    len.ilog2() + 1
}

/// Position of the root of a tree stored in `len` nodes.
pub fn root_pos(len: usize) -> Position {
    (1usize << (num_layers(len) - 1)) - 1
}

/// Offset between a node at `level` and either of its children inside a
/// perfect subtree.
fn child_offset(level: u32) -> usize {
    debug_assert!(level >= 2, "leaves have no children");
    1usize << (level - 2)
}

/// Inclusive span of positions covered by one subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: Position,
    pub end: Position,
}

impl Window {
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Window spanning a whole sequence of `len` nodes
    pub fn full(len: usize) -> Self {
        Self::new(0, len - 1)
    }

    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn is_leaf(&self) -> bool {
        self.start == self.end
    }

    /// Root of the subtree this window covers
    pub fn root(&self) -> Position {
        self.start + root_pos(self.len())
    }

    /// Window of the left subtree under `root`
    pub fn left_of(&self, root: Position) -> Self {
        debug_assert!(self.start < root && root < self.end);
        Self::new(self.start, root - 1)
    }

    /// Window of the right subtree under `root`
    pub fn right_of(&self, root: Position) -> Self {
        debug_assert!(self.start < root && root < self.end);
        Self::new(root + 1, self.end)
    }
}

/// Level of the node at `pos`. The root sits at `num_layers(len)` and each
/// step down lowers the level by one, so leaves in the unbalanced remainder
/// may sit above level 1.
pub fn level(len: usize, pos: Position) -> u32 {
    debug_assert!(pos < len, "position {pos} outside sequence of {len}");
    let root = root_pos(len);
    let top = num_layers(len);

    if pos == root {
        return top;
    }
    if pos < root {
        if pos % 2 == 0 {
            return 1;
        }
        return walk_perfect(root, top, pos);
    }

    // Follow the right spine of the remainder until reaching or passing pos.
    let mut depth = 0;
    let mut spine = root;
    let mut spine_window = Window::full(len);
    while spine < pos {
        spine_window = Window::new(spine + 1, len - 1);
        spine = spine_window.root();
        depth += 1;
    }
    if spine == pos {
        return top - depth;
    }

    // pos lies in the perfect left subtree of this spine node. Walk it using
    // the spine node's own height, then translate back to tree levels.
    let height = num_layers(spine_window.len());
    let local = walk_perfect(spine, height, pos);
    top - depth - (height - local)
}

/// Walk down a perfect subtree from `root` at `level` until reaching `pos`,
/// returning the level at which `pos` is found.
fn walk_perfect(root: Position, mut level: u32, pos: Position) -> u32 {
    let mut candidate = root;
    while candidate != pos {
        let step = child_offset(level);
        if candidate > pos {
            candidate -= step;
        } else {
            candidate += step;
        }
        level -= 1;
    }
    level
}

/// Distance from the root to the node at `pos`
pub fn depth(len: usize, pos: Position) -> u32 {
    num_layers(len) - level(len, pos)
}

/// Left child of the internal node at `pos`, whose subtree covers `window`.
///
/// The window is only consulted right of the overall root.
pub fn left_child(len: usize, pos: Position, window: Window) -> Position {
    debug_assert!(pos % 2 == 1, "left_child called on leaf position {pos}");
    if pos <= root_pos(len) {
        pos - child_offset(level(len, pos))
    } else {
        debug_assert_eq!(window.root(), pos);
        window.start + root_pos(pos - window.start)
    }
}

/// Right child of the internal node at `pos`, whose subtree covers `window`.
///
/// The window is consulted at and right of the overall root.
pub fn right_child(len: usize, pos: Position, window: Window) -> Position {
    debug_assert!(pos % 2 == 1, "right_child called on leaf position {pos}");
    if pos < root_pos(len) {
        pos + child_offset(level(len, pos))
    } else {
        debug_assert_eq!(window.root(), pos);
        pos + 1 + root_pos(window.end - pos)
    }
}

/// Window covered by the subtree rooted at `pos`
pub fn window_of(len: usize, pos: Position) -> Window {
    debug_assert!(pos < len, "position {pos} outside sequence of {len}");
    let mut window = Window::full(len);
    loop {
        let root = window.root();
        if root == pos {
            return window;
        }
        window = if pos < root {
            window.left_of(root)
        } else {
            window.right_of(root)
        };
    }
}

/// Both children of the internal node at `pos`
pub fn children(len: usize, pos: Position) -> (Position, Position) {
    let window = window_of(len, pos);
    (left_child(len, pos, window), right_child(len, pos, window))
}

/// Parent of the node at `pos`, or `None` for the root
pub fn parent(len: usize, pos: Position) -> Option<Position> {
    debug_assert!(pos < len, "position {pos} outside sequence of {len}");
    let mut window = Window::full(len);
    let mut parent = None;
    loop {
        let root = window.root();
        if root == pos {
            return parent;
        }
        parent = Some(root);
        window = if pos < root {
            window.left_of(root)
        } else {
            window.right_of(root)
        };
    }
}
