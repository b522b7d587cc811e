//! Source picker line shown above the mind map

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::view_models::SourceBarViewModel;

pub struct SourceBarView<'a> {
    model: &'a SourceBarViewModel,
}

impl<'a> SourceBarView<'a> {
    pub fn new(model: &'a SourceBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for SourceBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(
            " Source: ",
            Style::default().add_modifier(Modifier::BOLD),
        )];

        for (i, tab) in self.model.tabs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }
            let style = if tab.selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            spans.push(Span::styled(tab.title.as_str(), style));
        }

        if let Some(key) = &self.model.unknown_selection {
            let label = if key.is_empty() {
                "  (no source selected)".to_string()
            } else {
                format!("  (unknown source \"{}\")", key)
            };
            spans.push(Span::styled(label, Style::default().fg(Color::Red)));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
