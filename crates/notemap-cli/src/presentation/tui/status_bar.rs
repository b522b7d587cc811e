//! Status Bar View Component
//!
//! Renders the bottom status bar with generation status, node count, zoom
//! and keyboard help.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

use super::status_level_to_color;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        use ratatui::layout::{Constraint, Layout};

        let color = status_level_to_color(self.model.status_level);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(inner);

        let mut spans = vec![Span::styled(
            self.model.status_message.as_str(),
            Style::default().fg(color),
        )];
        if let Some(count) = self.model.node_count {
            spans.push(Span::raw(format!(" | Nodes: {}", count)));
        }
        spans.push(Span::raw(format!(" | Zoom: {}%", self.model.zoom_percent)));
        if self.model.open_popups > 0 {
            spans.push(Span::raw(format!(" | Popups: {}", self.model.open_popups)));
        }
        if let Some(at) = &self.model.generated_at {
            spans.push(Span::raw(format!(" | {}", at)));
        }
        Paragraph::new(Line::from(spans)).render(chunks[0], buf);

        let key = Style::default().fg(Color::Yellow);
        let help_line = Line::from(vec![
            Span::styled("[g]", key),
            Span::raw("enerate "),
            Span::styled("[s]", key),
            Span::raw("ource "),
            Span::styled("[d]", key),
            Span::raw("etails "),
            Span::styled("[+/-/0]", key),
            Span::raw("zoom "),
            Span::styled("[q]", key),
            Span::raw("uit"),
        ]);
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}
