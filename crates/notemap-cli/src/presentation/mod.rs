//! Presentation layer
//!
//! ## Design:
//! - Presenters turn runtime/engine state into plain ViewModels
//! - `console` prints ViewModels and layouts for one-shot commands
//! - `tui` paints the same ViewModels with ratatui widgets

pub mod console;
pub mod presenters;
pub mod tui;
pub mod view_models;
