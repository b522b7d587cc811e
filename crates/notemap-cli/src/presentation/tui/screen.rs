//! Full-screen composition: source bar, mind map body, status bar.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use notemap_engine::TreeLayout;

use super::app::{MindMapApp, PopupBox, ScreenGeometry};
use super::popup::{PopupView, popup_area};
use super::source_bar::SourceBarView;
use super::status_bar::StatusBarView;
use super::status_level_to_color;
use super::tree_view::TreeView;
use crate::presentation::presenters::{present_popup, present_source_bar, present_status_bar};

pub fn draw(app: &mut MindMapApp, frame: &mut Frame) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    let source_bar = present_source_bar(app.viewport(), app.sources());
    frame.render_widget(SourceBarView::new(&source_bar), header);

    let status = present_status_bar(app.viewport(), app.sources(), app.mounted());

    let block = Block::default().borders(Borders::ALL).title(" Mind map ");
    let inner = block.inner(body);
    frame.render_widget(block, body);

    let mut geometry = ScreenGeometry {
        tree_area: inner,
        popups: Vec::new(),
    };

    match app.tree_layout() {
        Some(tree_layout) => {
            app.fit_scroll(&tree_layout, inner.width as usize, inner.height as usize);
            frame.render_widget(TreeView::new(&tree_layout, app.focus(), app.scroll()), inner);
            geometry.popups = draw_popups(app, &tree_layout, inner, frame);
        }
        None => {
            let placeholder = Paragraph::new(status.status_message.as_str())
                .style(Style::default().fg(status_level_to_color(status.status_level)))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            let middle = Rect::new(
                inner.x,
                inner.y + inner.height / 2,
                inner.width,
                inner.height.min(1),
            );
            frame.render_widget(placeholder, middle);
        }
    }

    frame.render_widget(StatusBarView::new(&status), footer);
    app.set_geometry(geometry);
}

fn draw_popups(
    app: &MindMapApp,
    tree_layout: &TreeLayout,
    inner: Rect,
    frame: &mut Frame,
) -> Vec<PopupBox> {
    let Some(mounted) = app.mounted() else {
        return Vec::new();
    };
    let (scroll_row, scroll_col) = app.scroll();
    let mut boxes = Vec::new();

    for path in mounted.open_popups() {
        let Some((row, col)) = tree_layout.position_of(&path) else {
            continue;
        };
        if row < scroll_row || row >= scroll_row + inner.height as usize {
            continue;
        }
        let Some(model) = present_popup(mounted, &path) else {
            continue;
        };

        let anchor = (
            inner.x + col.saturating_sub(scroll_col).min(inner.width as usize) as u16,
            inner.y + (row - scroll_row) as u16,
        );
        let Some(area) = popup_area(anchor, inner, &model) else {
            continue;
        };

        frame.render_widget(Clear, area);
        frame.render_widget(PopupView::new(&model), area);
        boxes.push(PopupBox { path, area });
    }

    boxes
}
