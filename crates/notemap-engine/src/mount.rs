//! Mounted node tree (NodeView state)
//!
//! A `MountedNode` exists for every node whose ancestors are all expanded.
//! Each one owns its own ephemeral state:
//! - `expanded` (default true): whether the children are mounted at all
//! - popup open/closed (default closed): represented by holding a
//!   `ListenerGuard`, so an open popup always has exactly one listener
//!
//! Collapsing a node drops its children, which discards every descendant's
//! state; expanding again mounts them fresh with defaults.

use std::fmt;
use std::sync::Arc;

use notemap_types::TreeNode;

use crate::pointer::{ListenerGuard, PointerHub};

/// Stable identity of a node: child indices from the root
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.0.split_last()?;
        Some(Self(rest.to_vec()))
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "/");
        }
        for index in &self.0 {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}

/// Presentational depth bucket (root, first level, everything deeper)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepthClass {
    Root,
    Primary,
    Nested,
}

impl DepthClass {
    pub fn from_depth(depth: usize) -> Self {
        match depth {
            0 => DepthClass::Root,
            1 => DepthClass::Primary,
            _ => DepthClass::Nested,
        }
    }
}

/// Render state of one mounted node
#[derive(Debug)]
pub struct MountedNode {
    path: NodePath,
    expandable: bool,
    expanded: bool,
    popup: Option<ListenerGuard>,
    children: Vec<MountedNode>,
}

impl MountedNode {
    fn mount(model: &TreeNode, path: NodePath) -> Self {
        let children = mount_children(model, &path);
        Self {
            path,
            expandable: model.has_children(),
            expanded: true,
            popup: None,
            children,
        }
    }

    pub fn path(&self) -> &NodePath {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.path.depth()
    }

    pub fn depth_class(&self) -> DepthClass {
        DepthClass::from_depth(self.depth())
    }

    pub fn is_root(&self) -> bool {
        self.path.is_root()
    }

    /// Whether the expand/collapse control is offered for this node
    pub fn is_expandable(&self) -> bool {
        self.expandable
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_popup_open(&self) -> bool {
        self.popup.is_some()
    }

    /// Mounted children; empty when collapsed or a leaf
    pub fn children(&self) -> &[MountedNode] {
        &self.children
    }

    /// Number of mounted nodes in this subtree, including `self`
    pub fn mounted_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(MountedNode::mounted_count)
            .sum::<usize>()
    }

    fn toggle_expanded(&mut self, model: &TreeNode) -> bool {
        if !self.expandable {
            return false;
        }
        if self.expanded {
            self.children.clear();
            self.expanded = false;
        } else {
            self.children = mount_children(model, &self.path);
            self.expanded = true;
        }
        true
    }

    fn collect_paths(&self, out: &mut Vec<NodePath>) {
        out.push(self.path.clone());
        for child in &self.children {
            child.collect_paths(out);
        }
    }
}

fn mount_children(model: &TreeNode, path: &NodePath) -> Vec<MountedNode> {
    model
        .children
        .iter()
        .enumerate()
        .map(|(index, child)| MountedNode::mount(child, path.child(index)))
        .collect()
}

fn find<'a>(root: &'a MountedNode, path: &NodePath) -> Option<&'a MountedNode> {
    let mut node = root;
    for &index in path.indices() {
        node = node.children.get(index)?;
    }
    Some(node)
}

fn find_mut<'a>(root: &'a mut MountedNode, path: &NodePath) -> Option<&'a mut MountedNode> {
    let mut node = root;
    for &index in path.indices() {
        node = node.children.get_mut(index)?;
    }
    Some(node)
}

/// A tree mounted for rendering, together with its listener registry.
///
/// Dropping the `MountTree` (regeneration, shutdown) drops every node and
/// therefore every outstanding popup listener.
#[derive(Debug)]
pub struct MountTree {
    model: Arc<TreeNode>,
    root: MountedNode,
    hub: PointerHub,
}

impl MountTree {
    /// Mount `model` with every node in its default state.
    pub fn mount(model: Arc<TreeNode>) -> Self {
        let root = MountedNode::mount(&model, NodePath::root());
        Self {
            model,
            root,
            hub: PointerHub::new(),
        }
    }

    pub fn model(&self) -> &TreeNode {
        &self.model
    }

    pub fn root(&self) -> &MountedNode {
        &self.root
    }

    pub fn hub(&self) -> &PointerHub {
        &self.hub
    }

    /// Mounted node at `path`, if every ancestor is expanded
    pub fn node(&self, path: &NodePath) -> Option<&MountedNode> {
        find(&self.root, path)
    }

    /// Model node at `path`, whether mounted or not
    pub fn model_at(&self, path: &NodePath) -> Option<&TreeNode> {
        self.model.at_path(path.indices())
    }

    pub fn mounted_count(&self) -> usize {
        self.root.mounted_count()
    }

    /// Paths of all mounted nodes in pre-order (render order)
    pub fn visible_paths(&self) -> Vec<NodePath> {
        let mut paths = Vec::new();
        self.root.collect_paths(&mut paths);
        paths
    }

    /// Flip expand/collapse on a mounted node.
    ///
    /// Returns `false` (and changes nothing) when the node is not mounted or
    /// has no children.
    pub fn toggle_expanded(&mut self, path: &NodePath) -> bool {
        let Some(model) = self.model.at_path(path.indices()) else {
            return false;
        };
        match find_mut(&mut self.root, path) {
            Some(node) => node.toggle_expanded(model),
            None => false,
        }
    }

    /// Flip the detail popup on a mounted node; returns the new open state.
    pub fn toggle_popup(&mut self, path: &NodePath) -> Option<bool> {
        let node = find_mut(&mut self.root, path)?;
        if node.popup.take().is_none() {
            node.popup = Some(self.hub.register(path.clone()));
        }
        Some(node.is_popup_open())
    }

    /// Close the popup on `path`; returns whether one was open.
    pub fn close_popup(&mut self, path: &NodePath) -> bool {
        find_mut(&mut self.root, path)
            .and_then(|node| node.popup.take())
            .is_some()
    }

    /// Route a pointer press. `hit` is the node whose card or popup received
    /// the press; every other open popup is closed. Returns the closed paths.
    pub fn pointer_pressed(&mut self, hit: Option<&NodePath>) -> Vec<NodePath> {
        let outside = self.hub.outside_of(hit);
        for path in &outside {
            self.close_popup(path);
        }
        outside
    }

    /// Paths of nodes with an open popup
    pub fn open_popups(&self) -> Vec<NodePath> {
        self.hub.active_paths()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Arc<TreeNode> {
        Arc::new(
            TreeNode::new("root")
                .with_child(
                    TreeNode::new("a")
                        .with_child(TreeNode::new("a1"))
                        .with_child(TreeNode::new("a2")),
                )
                .with_child(TreeNode::new("b")),
        )
    }

    #[test]
    fn test_mount_defaults() {
        let mounted = MountTree::mount(tree());
        assert_eq!(mounted.mounted_count(), 5);
        let root = mounted.root();
        assert!(root.is_root());
        assert!(root.is_expanded());
        assert!(!root.is_popup_open());
        assert_eq!(root.depth_class(), DepthClass::Root);
        assert_eq!(
            mounted.node(&NodePath::from(vec![0, 1])).map(|n| n.depth_class()),
            Some(DepthClass::Nested)
        );
    }

    #[test]
    fn test_collapse_root_leaves_one() {
        let mut mounted = MountTree::mount(tree());
        assert!(mounted.toggle_expanded(&NodePath::root()));
        assert_eq!(mounted.mounted_count(), 1);
        assert!(!mounted.root().is_expanded());

        assert!(mounted.toggle_expanded(&NodePath::root()));
        assert_eq!(mounted.mounted_count(), 5);
    }

    #[test]
    fn test_leaf_cannot_toggle() {
        let mut mounted = MountTree::mount(tree());
        let leaf = NodePath::from(vec![1]);
        assert!(!mounted.node(&leaf).unwrap().is_expandable());
        assert!(!mounted.toggle_expanded(&leaf));
        assert!(mounted.node(&leaf).unwrap().is_expanded());
    }

    #[test]
    fn test_descendant_state_resets_on_remount() {
        let mut mounted = MountTree::mount(tree());
        let a = NodePath::from(vec![0]);
        let a1 = NodePath::from(vec![0, 0]);

        mounted.toggle_popup(&a1);
        assert_eq!(mounted.hub().active_count(), 1);

        mounted.toggle_expanded(&a);
        assert!(mounted.node(&a1).is_none());
        assert_eq!(mounted.hub().active_count(), 0);

        mounted.toggle_expanded(&a);
        assert!(!mounted.node(&a1).unwrap().is_popup_open());
    }

    #[test]
    fn test_unmounted_paths_are_ignored() {
        let mut mounted = MountTree::mount(tree());
        let missing = NodePath::from(vec![5]);
        assert!(!mounted.toggle_expanded(&missing));
        assert_eq!(mounted.toggle_popup(&missing), None);
        assert!(!mounted.close_popup(&missing));
    }

    #[test]
    fn test_node_path_display() {
        assert_eq!(NodePath::root().to_string(), "/");
        assert_eq!(NodePath::from(vec![0, 2]).to_string(), "/0/2");
        assert_eq!(
            NodePath::from(vec![0, 2]).parent(),
            Some(NodePath::from(vec![0]))
        );
        assert_eq!(NodePath::root().parent(), None);
    }
}
