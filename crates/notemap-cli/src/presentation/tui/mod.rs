//! Interactive mind-map viewer (ratatui + crossterm)

mod app;
mod popup;
mod renderer;
mod screen;
mod source_bar;
mod status_bar;
mod tree_view;

pub use app::{MindMapApp, PopupBox, ScreenGeometry};
pub use popup::{PopupView, popup_area};
pub use renderer::{GenerationEvent, TuiRenderer};
pub use screen::draw;
pub use source_bar::SourceBarView;
pub use status_bar::StatusBarView;
pub use tree_view::TreeView;

use ratatui::style::Color;

use super::view_models::StatusLevel;

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Info => Color::Gray,
        StatusLevel::Busy => Color::Yellow,
        StatusLevel::Success => Color::Green,
        StatusLevel::Error => Color::Red,
    }
}
