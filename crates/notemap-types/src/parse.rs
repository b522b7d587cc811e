use serde::Deserialize;

use crate::{Error, Result, TreeNode};

/// Envelope some model prompts ask for: `{"mindmap": {...}}`
#[derive(Deserialize)]
struct Envelope {
    mindmap: TreeNode,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TreeDocument {
    Wrapped(Envelope),
    Bare(TreeNode),
}

/// Deepest bare tree `parse_tree_output` accepts, counting the root as level 1.
///
/// serde_json caps nesting at 127 frames and every level below the root costs
/// two (the `children` array and the node object). The `mindmap` envelope
/// costs one more frame, so enveloped trees stop at `MAX_TREE_DEPTH - 1`.
pub const MAX_TREE_DEPTH: usize = 64;

/// Interpret raw generator output as a tree.
///
/// Language models like to wrap JSON in a Markdown fence, so a surrounding
/// ```` ``` ```` / ```` ```json ```` block is stripped before parsing.
/// Trees nested deeper than [`MAX_TREE_DEPTH`] fail with [`Error::Json`].
pub fn parse_tree_output(raw: &str) -> Result<TreeNode> {
    let body = strip_code_fence(raw.trim());
    if body.is_empty() {
        return Err(Error::Parse("generator returned no output".to_string()));
    }

    let document: TreeDocument = serde_json::from_str(body)?;
    Ok(match document {
        TreeDocument::Wrapped(envelope) => envelope.mindmap,
        TreeDocument::Bare(node) => node,
    })
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let Some(body) = rest.trim_end().strip_suffix("```") else {
        return text;
    };
    // Drop the info string (e.g. "json") on the opening fence line
    match body.find('\n') {
        Some(newline) => body[newline + 1..].trim(),
        None => body.trim(),
    }
}
