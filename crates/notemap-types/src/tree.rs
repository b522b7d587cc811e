use serde::{Deserialize, Serialize};

/// Text shown in a detail popup when a node carries no description.
pub const DESCRIPTION_PLACEHOLDER: &str = "No description available.";

/// One labeled unit of a mind map.
///
/// Produced externally (by a tree generator) and read-only to the renderer.
/// Children are owned, so a node can never be shared between parents or
/// appear inside its own subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Short display text
    pub label: String,

    /// Optional long-form explanation shown in the detail popup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Child subtrees in rendering order (top to bottom)
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
            children: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = TreeNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }

    /// Number of levels in this subtree. A single node has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(TreeNode::depth).max().unwrap_or(0)
    }

    /// Resolve a descendant by its child-index path. An empty path is `self`.
    pub fn at_path(&self, path: &[usize]) -> Option<&TreeNode> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get(index))
    }

    /// Popup text: the description, or the fixed placeholder when absent.
    pub fn description_or_placeholder(&self) -> &str {
        match self.description.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => DESCRIPTION_PLACEHOLDER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeNode {
        TreeNode::new("root")
            .with_child(
                TreeNode::new("a")
                    .with_child(TreeNode::new("a1"))
                    .with_child(TreeNode::new("a2").with_child(TreeNode::new("a2x"))),
            )
            .with_child(TreeNode::new("b"))
    }

    #[test]
    fn test_node_count_and_depth() {
        let tree = sample();
        assert_eq!(tree.node_count(), 6);
        assert_eq!(tree.depth(), 4);
        assert_eq!(TreeNode::new("solo").depth(), 1);
    }

    #[test]
    fn test_at_path() {
        let tree = sample();
        assert_eq!(tree.at_path(&[]).map(|n| n.label.as_str()), Some("root"));
        assert_eq!(
            tree.at_path(&[0, 1, 0]).map(|n| n.label.as_str()),
            Some("a2x")
        );
        assert!(tree.at_path(&[2]).is_none());
        assert!(tree.at_path(&[1, 0]).is_none());
    }

    #[test]
    fn test_description_placeholder() {
        assert_eq!(
            TreeNode::new("x").description_or_placeholder(),
            DESCRIPTION_PLACEHOLDER
        );
        assert_eq!(
            TreeNode::new("x")
                .with_description("   ")
                .description_or_placeholder(),
            DESCRIPTION_PLACEHOLDER
        );
        assert_eq!(
            TreeNode::new("x")
                .with_description("European country")
                .description_or_placeholder(),
            "European country"
        );
    }

    #[test]
    fn test_deserialize_defaults() {
        let node: TreeNode = serde_json::from_str(r#"{"label":"Geography"}"#).unwrap();
        assert_eq!(node, TreeNode::new("Geography"));
    }

    #[test]
    fn test_serialize_omits_missing_description() {
        let json = serde_json::to_string(&TreeNode::new("France")).unwrap();
        assert_eq!(json, r#"{"label":"France","children":[]}"#);
    }
}
