//! Interactive viewer state
//!
//! `MindMapApp` is the bridge between terminal input and the runtime: it owns
//! the `Viewport` controller, the mounted tree for the current `Ready` result
//! and the UI-only state (focus, scroll, last painted geometry).
//!
//! ## Design:
//! - No terminal I/O here; the renderer feeds key/mouse events in and paints
//!   the state out, so the whole interaction model is testable
//! - A new generation drops the mounted tree immediately, which releases every
//!   popup listener before the next result can arrive
//! - Mouse presses go through `MountTree::pointer_pressed` first, so popups
//!   outside the pressed card close before the press is acted on

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use notemap_engine::{HitTarget, LayoutOptions, MountTree, NodePath, TreeLayout, layout};
use notemap_runtime::{GenerationRequest, Result as RuntimeResult, SourceSet, Viewport};
use notemap_types::TreeNode;
use ratatui::layout::{Position, Rect};

/// Screen area of an open popup box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupBox {
    pub path: NodePath,
    pub area: Rect,
}

impl PopupBox {
    /// Cell of the "[x]" close control on the top border
    pub fn close_area(&self) -> Rect {
        let width = 3.min(self.area.width);
        Rect::new(
            self.area.right().saturating_sub(width + 1),
            self.area.y,
            width,
            1,
        )
    }
}

/// What was painted last frame, for mouse hit-testing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenGeometry {
    pub tree_area: Rect,
    pub popups: Vec<PopupBox>,
}

pub struct MindMapApp {
    sources: SourceSet,
    viewport: Viewport,
    mounted: Option<MountTree>,
    base_label_width: usize,
    focus: Option<NodePath>,
    scroll_row: usize,
    scroll_col: usize,
    follow_focus: bool,
    geometry: ScreenGeometry,
    should_quit: bool,
}

impl MindMapApp {
    pub fn new(sources: SourceSet, viewport: Viewport, base_label_width: usize) -> Self {
        Self {
            sources,
            viewport,
            mounted: None,
            base_label_width,
            focus: None,
            scroll_row: 0,
            scroll_col: 0,
            follow_focus: true,
            geometry: ScreenGeometry::default(),
            should_quit: false,
        }
    }

    pub fn sources(&self) -> &SourceSet {
        &self.sources
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn mounted(&self) -> Option<&MountTree> {
        self.mounted.as_ref()
    }

    pub fn focus(&self) -> Option<&NodePath> {
        self.focus.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn scroll(&self) -> (usize, usize) {
        (self.scroll_row, self.scroll_col)
    }

    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions::for_zoom(self.viewport.zoom(), self.base_label_width)
    }

    /// Layout of the mounted tree at the current zoom
    pub fn tree_layout(&self) -> Option<TreeLayout> {
        self.mounted
            .as_ref()
            .map(|mounted| layout(mounted, &self.layout_options()))
    }

    /// Start a generation; `None` while one is already running or when the
    /// selection has nothing to analyze.
    pub fn request_generate(&mut self) -> Option<GenerationRequest> {
        if self.viewport.is_loading() {
            return None;
        }
        let request = self.viewport.begin_generate(self.sources.sources())?;

        self.mounted = None;
        self.focus = None;
        self.scroll_row = 0;
        self.scroll_col = 0;
        self.geometry.popups.clear();
        Some(request)
    }

    /// Feed a generator answer back in. Returns whether it was applied.
    pub fn apply_generation(&mut self, seq: u64, result: RuntimeResult<TreeNode>) -> bool {
        if !self.viewport.complete(seq, result) {
            return false;
        }

        self.mounted = self.viewport.tree().cloned().map(MountTree::mount);
        self.focus = self.mounted.as_ref().map(|_| NodePath::root());
        self.follow_focus = true;
        true
    }

    /// Tear the viewport down and stop the event loop.
    pub fn quit(&mut self) {
        self.viewport.teardown();
        self.mounted = None;
        self.should_quit = true;
    }

    pub fn cycle_source(&mut self) {
        let keys = self.sources.selection_keys();
        let current = self.viewport.selected_source_key();
        let next = match keys.iter().position(|key| key == current) {
            Some(index) => keys[(index + 1) % keys.len()].clone(),
            None => keys[0].clone(),
        };
        self.viewport.select_source(next);
    }

    /// Returns a generation request when the key started one.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<GenerationRequest> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('g') => return self.request_generate(),
            KeyCode::Char('s') => self.cycle_source(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.viewport.zoom_in(),
            KeyCode::Char('-') => self.viewport.zoom_out(),
            KeyCode::Char('0') => self.viewport.reset_zoom(),
            KeyCode::Up | KeyCode::Char('k') => self.move_focus(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_focus(1),
            KeyCode::Left | KeyCode::Char('h') => self.focus_parent(),
            KeyCode::Right | KeyCode::Char('l') => self.focus_first_child(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_focused_expanded(),
            KeyCode::Char('d') => self.toggle_focused_popup(),
            KeyCode::Esc => self.close_popups(),
            KeyCode::PageUp => self.scroll_by(-10),
            KeyCode::PageDown => self.scroll_by(10),
            _ => {}
        }
        None
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.press(mouse.column, mouse.row),
            MouseEventKind::ScrollUp => self.scroll_by(-1),
            MouseEventKind::ScrollDown => self.scroll_by(1),
            _ => {}
        }
    }

    fn press(&mut self, column: u16, row: u16) {
        let position = Position::new(column, row);

        if let Some(popup) = self
            .geometry
            .popups
            .iter()
            .find(|popup| popup.area.contains(position))
            .cloned()
        {
            let Some(mounted) = self.mounted.as_mut() else {
                return;
            };
            mounted.pointer_pressed(Some(&popup.path));
            if popup.close_area().contains(position) {
                mounted.close_popup(&popup.path);
            }
            return;
        }

        let hit = if self.geometry.tree_area.contains(position) {
            let col = (column - self.geometry.tree_area.x) as usize + self.scroll_col;
            let row = (row - self.geometry.tree_area.y) as usize + self.scroll_row;
            self.tree_layout().and_then(|tree_layout| tree_layout.hit(col, row))
        } else {
            None
        };

        let Some(mounted) = self.mounted.as_mut() else {
            return;
        };
        let closed = mounted.pointer_pressed(hit.as_ref().map(|hit| &hit.path));
        if !closed.is_empty() {
            tracing::debug!(count = closed.len(), "outside press closed popups");
        }

        let Some(hit) = hit else {
            return;
        };
        match hit.target {
            HitTarget::Toggle => {
                mounted.toggle_expanded(&hit.path);
            }
            HitTarget::Label => {
                mounted.toggle_popup(&hit.path);
            }
        }
        self.focus = Some(hit.path);
        self.repair_focus();
    }

    fn move_focus(&mut self, delta: isize) {
        let Some(mounted) = &self.mounted else {
            return;
        };
        let paths = mounted.visible_paths();
        let current = self
            .focus
            .as_ref()
            .and_then(|focus| paths.iter().position(|path| path == focus))
            .unwrap_or(0);
        let next = current
            .saturating_add_signed(delta)
            .min(paths.len().saturating_sub(1));
        self.focus = paths.get(next).cloned();
        self.follow_focus = true;
    }

    fn focus_parent(&mut self) {
        if let Some(parent) = self.focus.as_ref().and_then(NodePath::parent) {
            self.focus = Some(parent);
            self.follow_focus = true;
        }
    }

    fn focus_first_child(&mut self) {
        let Some(focus) = &self.focus else {
            return;
        };
        let child = focus.child(0);
        if self.mounted.as_ref().and_then(|m| m.node(&child)).is_some() {
            self.focus = Some(child);
            self.follow_focus = true;
        }
    }

    fn toggle_focused_expanded(&mut self) {
        if let (Some(mounted), Some(focus)) = (self.mounted.as_mut(), self.focus.as_ref()) {
            mounted.toggle_expanded(focus);
        }
    }

    fn toggle_focused_popup(&mut self) {
        if let (Some(mounted), Some(focus)) = (self.mounted.as_mut(), self.focus.as_ref()) {
            mounted.toggle_popup(focus);
        }
    }

    /// Close the focused node's popup, or every popup when it has none.
    fn close_popups(&mut self) {
        let Some(mounted) = self.mounted.as_mut() else {
            return;
        };
        if let Some(focus) = &self.focus
            && mounted.close_popup(focus)
        {
            return;
        }
        for path in mounted.open_popups() {
            mounted.close_popup(&path);
        }
    }

    fn scroll_by(&mut self, delta: isize) {
        self.scroll_row = self.scroll_row.saturating_add_signed(delta);
        self.follow_focus = false;
    }

    /// Keep focus on a mounted node after a collapse hid it.
    fn repair_focus(&mut self) {
        let Some(mounted) = &self.mounted else {
            self.focus = None;
            return;
        };
        while let Some(focus) = &self.focus {
            if mounted.node(focus).is_some() {
                break;
            }
            self.focus = focus.parent();
        }
    }

    /// Clamp scrolling to the layout and, after focus moved, bring the
    /// focused card into view. Called by the renderer before painting.
    pub fn fit_scroll(&mut self, tree_layout: &TreeLayout, width: usize, height: usize) {
        if self.follow_focus
            && let Some(focus) = &self.focus
            && let Some((row, col)) = tree_layout.position_of(focus)
        {
            if row < self.scroll_row {
                self.scroll_row = row;
            } else if height > 0 && row >= self.scroll_row + height {
                self.scroll_row = row + 1 - height;
            }

            let card_width = card_width_at(tree_layout, row, col).unwrap_or(1);
            if col < self.scroll_col {
                self.scroll_col = col;
            } else if width > 0 && col + card_width > self.scroll_col + width {
                self.scroll_col = (col + card_width).saturating_sub(width).min(col);
            }
            self.follow_focus = false;
        }

        self.scroll_row = self
            .scroll_row
            .min(tree_layout.height().saturating_sub(height.max(1)));
        self.scroll_col = self
            .scroll_col
            .min(tree_layout.width.saturating_sub(width.max(1)));
    }

    pub fn set_geometry(&mut self, geometry: ScreenGeometry) {
        self.geometry = geometry;
    }
}

fn card_width_at(tree_layout: &TreeLayout, row: usize, col: usize) -> Option<usize> {
    tree_layout.rows.get(row)?.fragments.iter().find_map(|fragment| match fragment {
        notemap_engine::Fragment::Card { col: c, width, .. } if *c == col => Some(*width),
        _ => None,
    })
}
