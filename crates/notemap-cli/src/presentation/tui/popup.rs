//! Description popup anchored under a card

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::presentation::view_models::PopupViewModel;

const MIN_WIDTH: u16 = 24;
const MAX_WIDTH: u16 = 48;

pub struct PopupView<'a> {
    model: &'a PopupViewModel,
}

impl<'a> PopupView<'a> {
    pub fn new(model: &'a PopupViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for PopupView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(Line::styled(
                format!(" {} ", self.model.title),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .title(Line::from("[x]").right_aligned());

        Paragraph::new(self.model.body.as_str())
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// Where to put the popup for a card whose top-left cell is `anchor`.
///
/// Prefers the rows under the card and flips above it when there is no room.
/// Returns `None` when `bounds` cannot fit even a bordered single line.
pub fn popup_area(anchor: (u16, u16), bounds: Rect, model: &PopupViewModel) -> Option<Rect> {
    if bounds.width < 4 || bounds.height < 3 {
        return None;
    }

    let wanted = (model.title.width().max(model.body.width()) + 4) as u16;
    let width = wanted.clamp(MIN_WIDTH, MAX_WIDTH).min(bounds.width);
    let text_width = width.saturating_sub(2).max(1) as usize;
    let lines = model.body.width().div_ceil(text_width).max(1) as u16;
    let height = (lines + 2).min(bounds.height);

    let (anchor_x, anchor_y) = anchor;
    let x = anchor_x.min(bounds.right().saturating_sub(width)).max(bounds.x);
    let below = anchor_y + 1;
    let y = if below + height <= bounds.bottom() {
        below
    } else if anchor_y >= bounds.y + height {
        anchor_y - height
    } else {
        bounds.bottom().saturating_sub(height).max(bounds.y)
    };

    Some(Rect::new(x, y, width, height))
}
