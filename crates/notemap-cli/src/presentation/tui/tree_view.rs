//! Tree View Component
//!
//! Paints a `TreeLayout` into the body area, clipped to the scroll window.
//! Cards are colored by depth class; the focused card is reversed and cards
//! with an open popup are underlined.

use notemap_engine::{DepthClass, Fragment, NodePath, TreeLayout};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthChar;

pub struct TreeView<'a> {
    layout: &'a TreeLayout,
    focus: Option<&'a NodePath>,
    scroll: (usize, usize),
}

impl<'a> TreeView<'a> {
    pub fn new(layout: &'a TreeLayout, focus: Option<&'a NodePath>, scroll: (usize, usize)) -> Self {
        Self {
            layout,
            focus,
            scroll,
        }
    }

    fn style_for(&self, fragment: &Fragment) -> Style {
        match fragment {
            Fragment::Connector { .. } => Style::default().fg(Color::DarkGray),
            Fragment::Card {
                path,
                depth_class,
                popup_open,
                ..
            } => {
                let mut style = match depth_class {
                    DepthClass::Root => Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                    DepthClass::Primary => Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                    DepthClass::Nested => Style::default(),
                };
                if *popup_open {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                if self.focus == Some(path) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                style
            }
        }
    }
}

impl<'a> Widget for TreeView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (scroll_row, scroll_col) = self.scroll;
        let visible_rows = self
            .layout
            .rows
            .iter()
            .skip(scroll_row)
            .take(area.height as usize);

        for (offset, row) in visible_rows.enumerate() {
            let y = area.y + offset as u16;
            for fragment in &row.fragments {
                let style = self.style_for(fragment);
                paint_clipped(buf, area, y, fragment.col(), scroll_col, fragment.text(), style);
            }
        }
    }
}

/// Write `text` starting at layout column `col`, dropping every character
/// that falls outside `[scroll_col, scroll_col + area.width)`.
fn paint_clipped(
    buf: &mut Buffer,
    area: Rect,
    y: u16,
    col: usize,
    scroll_col: usize,
    text: &str,
    style: Style,
) {
    let right = scroll_col + area.width as usize;
    let mut x = col;
    let mut scratch = [0u8; 4];

    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if x >= right {
            break;
        }
        if x >= scroll_col && x + w <= right {
            let screen_x = area.x + (x - scroll_col) as u16;
            buf.set_string(screen_x, y, ch.encode_utf8(&mut scratch), style);
        }
        x += w;
    }
}
