//! Sample trees and sources shared by tests.

use notemap_types::{Source, TreeNode};

/// `Geography` with a single `France` child.
pub fn geography_tree() -> TreeNode {
    TreeNode::new("Geography")
        .with_child(TreeNode::new("France").with_description("European country"))
}

/// The one-source notebook that produces `geography_tree`.
pub fn geography_sources() -> Vec<Source> {
    vec![Source::new(
        "a",
        "Doc A",
        "Paris is the capital of France.",
    )]
}

/// Two sources whose combined text is `"X\n\nY"`.
pub fn two_sources() -> Vec<Source> {
    vec![Source::new("x", "X.txt", "X"), Source::new("y", "Y.txt", "Y")]
}

/// Small mixed-arity tree:
///
/// ```text
/// root ─┬─ a ─┬─ a1
///       │     └─ a2
///       └─ b
/// ```
pub fn sample_tree() -> TreeNode {
    TreeNode::new("root")
        .with_child(
            TreeNode::new("a")
                .with_child(TreeNode::new("a1"))
                .with_child(TreeNode::new("a2")),
        )
        .with_child(TreeNode::new("b"))
}

/// A realistic generator answer with descriptions on most nodes.
pub fn notebook_tree() -> TreeNode {
    TreeNode::new("Photosynthesis")
        .with_description("How plants turn light into chemical energy")
        .with_child(
            TreeNode::new("Light reactions")
                .with_description("Happen in the thylakoid membranes")
                .with_child(TreeNode::new("Photosystem II"))
                .with_child(TreeNode::new("Electron transport chain"))
                .with_child(TreeNode::new("Photosystem I")),
        )
        .with_child(
            TreeNode::new("Calvin cycle")
                .with_description("Carbon fixation in the stroma")
                .with_child(TreeNode::new("RuBisCO").with_description("Fixes CO2")),
        )
        .with_child(TreeNode::new("Outputs").with_description("Glucose and oxygen"))
}

/// Root with `width` leaf children.
pub fn wide_tree(width: usize) -> TreeNode {
    TreeNode::new("wide").with_children((0..width).map(|i| TreeNode::new(format!("leaf {}", i))))
}

/// A single chain `depth` nodes long.
pub fn chain_tree(depth: usize) -> TreeNode {
    let mut node = TreeNode::new(format!("level {}", depth.saturating_sub(1)));
    for level in (0..depth.saturating_sub(1)).rev() {
        node = TreeNode::new(format!("level {}", level)).with_child(node);
    }
    node
}

/// Deterministic pseudo-random tree for property-style tests.
///
/// Arity at each node is derived from `seed` and the node's position so the
/// same seed always yields the same shape.
pub fn generated_tree(seed: u64, max_depth: usize, max_arity: usize) -> TreeNode {
    fn build(state: &mut u64, depth: usize, max_depth: usize, max_arity: usize) -> TreeNode {
        // xorshift64
        *state ^= *state << 13;
        *state ^= *state >> 7;
        *state ^= *state << 17;
        let arity = if depth + 1 >= max_depth {
            0
        } else {
            (*state % (max_arity as u64 + 1)) as usize
        };
        let label = format!("n{}", *state % 1000);
        TreeNode::new(label).with_children(
            (0..arity).map(|_| build(state, depth + 1, max_depth, max_arity)),
        )
    }

    let mut state = seed.max(1);
    build(&mut state, 0, max_depth, max_arity)
}
