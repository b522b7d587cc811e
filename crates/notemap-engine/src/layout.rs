//! Left-to-right text layout of a mounted tree
//!
//! Each node is drawn as a one-line card on the row of its first child; a
//! node spans `max(1, rows of its visible children)` rows. Children are
//! joined to the parent through a spine column whose glyph per row comes from
//! the child's connector role:
//!
//! ```text
//! [-] root ──┬── [-] a ──┬── a1
//!            │           └── a2
//!            └── b
//! ```
//!
//! The layout is a list of positioned fragments per row, so it can be painted
//! into a ratatui buffer or flattened into plain strings.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::connector::{ConnectorRole, connectors};
use crate::mount::{DepthClass, MountTree, MountedNode, NodePath};

/// Card prefix width for the expand/collapse control ("[-] ")
pub const TOGGLE_WIDTH: usize = 4;

const MIN_LABEL_WIDTH: usize = 4;
const UNTITLED: &str = "(untitled)";

/// Spacing parameters derived from the viewport zoom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Maximum display width of a label before truncation
    pub label_width: usize,
    /// Length of each horizontal run on either side of the spine
    pub stem: usize,
}

impl LayoutOptions {
    pub const DEFAULT_LABEL_WIDTH: usize = 24;

    /// Scale the base label width and stem length by `zoom`.
    pub fn for_zoom(zoom: f64, base_label_width: usize) -> Self {
        let scaled = (base_label_width as f64 * zoom).round() as usize;
        let stem = (2.0 * zoom).round() as usize;
        Self {
            label_width: scaled.max(MIN_LABEL_WIDTH),
            stem: stem.max(1),
        }
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::for_zoom(1.0, Self::DEFAULT_LABEL_WIDTH)
    }
}

/// Positioned piece of a layout row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Line-drawing glyphs (stem, spine, branch)
    Connector {
        col: usize,
        role: Option<ConnectorRole>,
        text: String,
    },
    /// A node card
    Card {
        col: usize,
        width: usize,
        path: NodePath,
        depth_class: DepthClass,
        text: String,
        expandable: bool,
        expanded: bool,
        popup_open: bool,
    },
}

impl Fragment {
    pub fn col(&self) -> usize {
        match self {
            Fragment::Connector { col, .. } | Fragment::Card { col, .. } => *col,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Fragment::Connector { text, .. } | Fragment::Card { text, .. } => text,
        }
    }

    pub fn width(&self) -> usize {
        self.text().width()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRow {
    pub fragments: Vec<Fragment>,
}

/// Which control of a card a pointer landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Toggle,
    Label,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub path: NodePath,
    pub target: HitTarget,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeLayout {
    pub rows: Vec<LayoutRow>,
    /// Display width of the widest row
    pub width: usize,
}

impl TreeLayout {
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Card located at a cell, if any
    pub fn hit(&self, col: usize, row: usize) -> Option<Hit> {
        self.rows.get(row)?.fragments.iter().find_map(|fragment| {
            let Fragment::Card {
                col: start,
                width,
                path,
                expandable,
                ..
            } = fragment
            else {
                return None;
            };
            if col < *start || col >= start + width {
                return None;
            }
            let target = if *expandable && col < start + TOGGLE_WIDTH {
                HitTarget::Toggle
            } else {
                HitTarget::Label
            };
            Some(Hit {
                path: path.clone(),
                target,
            })
        })
    }

    /// Row and column of the card for `path`
    pub fn position_of(&self, path: &NodePath) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(row, layout_row)| {
            layout_row.fragments.iter().find_map(|fragment| match fragment {
                Fragment::Card { col, path: p, .. } if p == path => Some((row, *col)),
                _ => None,
            })
        })
    }

    /// Flatten into plain strings (no trailing whitespace)
    pub fn to_plain_lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| {
                let mut fragments: Vec<&Fragment> = row.fragments.iter().collect();
                fragments.sort_by_key(|f| f.col());

                let mut line = String::new();
                let mut cursor = 0;
                for fragment in fragments {
                    if fragment.col() > cursor {
                        line.push_str(&" ".repeat(fragment.col() - cursor));
                        cursor = fragment.col();
                    }
                    line.push_str(fragment.text());
                    cursor += fragment.width();
                }
                line
            })
            .collect()
    }
}

/// Lay out every mounted node of `tree`.
pub fn layout(tree: &MountTree, options: &LayoutOptions) -> TreeLayout {
    let mut rows = Vec::new();
    place(tree, tree.root(), 0, 0, options, &mut rows);

    let width = rows
        .iter()
        .flat_map(|row: &LayoutRow| row.fragments.iter())
        .map(|f| f.col() + f.width())
        .max()
        .unwrap_or(0);

    TreeLayout { rows, width }
}

fn push(rows: &mut Vec<LayoutRow>, row: usize, fragment: Fragment) {
    if rows.len() <= row {
        rows.resize_with(row + 1, LayoutRow::default);
    }
    rows[row].fragments.push(fragment);
}

/// Place `node` with its card at (`row`, `col`); returns the rows used.
fn place(
    tree: &MountTree,
    node: &MountedNode,
    col: usize,
    row: usize,
    options: &LayoutOptions,
    rows: &mut Vec<LayoutRow>,
) -> usize {
    let label = tree
        .model_at(node.path())
        .map(|model| model.label.as_str())
        .unwrap_or_default();
    let text = card_text(node, label, options.label_width);
    let card_width = text.width();

    push(
        rows,
        row,
        Fragment::Card {
            col,
            width: card_width,
            path: node.path().clone(),
            depth_class: node.depth_class(),
            text,
            expandable: node.is_expandable(),
            expanded: node.is_expanded(),
            popup_open: node.is_popup_open(),
        },
    );

    let children = node.children();
    if children.is_empty() {
        return 1;
    }

    let stem_col = col + card_width;
    push(
        rows,
        row,
        Fragment::Connector {
            col: stem_col,
            role: None,
            text: format!(" {}", "─".repeat(options.stem)),
        },
    );

    let spine_col = stem_col + 1 + options.stem;
    let child_col = spine_col + 1 + options.stem + 1;
    let mut child_row = row;

    for (child, connector) in children.iter().zip(connectors(children.len())) {
        push(
            rows,
            child_row,
            Fragment::Connector {
                col: spine_col,
                role: Some(connector.role),
                text: format!("{}{} ", glyph(connector.role), "─".repeat(options.stem)),
            },
        );

        let used = place(tree, child, child_col, child_row, options, rows);

        if connector.has_spine_down() {
            for filler_row in child_row + 1..child_row + used {
                push(
                    rows,
                    filler_row,
                    Fragment::Connector {
                        col: spine_col,
                        role: None,
                        text: "│".to_string(),
                    },
                );
            }
        }

        child_row += used;
    }

    child_row - row
}

/// Glyph drawn in the spine column on a child's row
pub fn glyph(role: ConnectorRole) -> char {
    match role {
        ConnectorRole::Only => '─',
        ConnectorRole::First => '┬',
        ConnectorRole::Middle => '├',
        ConnectorRole::Last => '└',
    }
}

fn card_text(node: &MountedNode, label: &str, label_width: usize) -> String {
    // Cards are one row tall
    let label: String = label
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let label = if label.trim().is_empty() {
        UNTITLED
    } else {
        label.as_str()
    };

    let mut text = String::new();
    if node.is_expandable() {
        text.push_str(if node.is_expanded() { "[-] " } else { "[+] " });
    }
    text.push_str(&truncate_to_width(label, label_width));
    if node.is_popup_open() {
        text.push_str(" *");
    }
    text
}

/// Truncate to at most `max` display columns, ending in `…` when cut.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }

    let budget = max.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use notemap_types::TreeNode;
    use std::sync::Arc;

    #[test]
    fn test_for_zoom_bounds() {
        assert_eq!(
            LayoutOptions::for_zoom(1.0, 24),
            LayoutOptions {
                label_width: 24,
                stem: 2
            }
        );
        assert_eq!(
            LayoutOptions::for_zoom(0.5, 6),
            LayoutOptions {
                label_width: 4,
                stem: 1
            }
        );
        assert_eq!(LayoutOptions::for_zoom(2.0, 24).label_width, 48);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("France", 10), "France");
        assert_eq!(truncate_to_width("Mediterranean", 8), "Mediter…");
        // Wide characters count two columns each
        assert_eq!(truncate_to_width("日本語の地図", 5), "日本…");
    }

    #[test]
    fn test_single_node_layout() {
        let mounted = MountTree::mount(Arc::new(TreeNode::new("Solo")));
        let result = layout(&mounted, &LayoutOptions::default());
        assert_eq!(result.to_plain_lines(), vec!["Solo".to_string()]);
        assert_eq!(result.width, 4);
    }

    #[test]
    fn test_hit_distinguishes_toggle_and_label() {
        let mounted = MountTree::mount(Arc::new(
            TreeNode::new("root").with_child(TreeNode::new("leaf")),
        ));
        let result = layout(&mounted, &LayoutOptions::default());

        assert_eq!(
            result.hit(1, 0),
            Some(Hit {
                path: NodePath::root(),
                target: HitTarget::Toggle
            })
        );
        assert_eq!(result.hit(5, 0).map(|h| h.target), Some(HitTarget::Label));
        // The connector run between the cards is not a hit
        assert_eq!(result.hit(9, 0), None);
        assert_eq!(result.hit(0, 3), None);
    }

    #[test]
    fn test_control_characters_stay_on_one_row() {
        let mounted = MountTree::mount(Arc::new(
            TreeNode::new("Line one\nLine two").with_child(TreeNode::new("tab\there")),
        ));
        let options = LayoutOptions {
            label_width: 40,
            stem: 2,
        };
        let lines = layout(&mounted, &options).to_plain_lines();

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Line one Line two"));
        assert!(lines[0].contains("tab here"));
    }

    #[test]
    fn test_control_only_label_is_untitled() {
        let mounted = MountTree::mount(Arc::new(TreeNode::new("\r\n\t")));
        let result = layout(&mounted, &LayoutOptions::default());
        assert_eq!(result.to_plain_lines(), vec![UNTITLED.to_string()]);
    }
}
