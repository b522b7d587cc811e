use std::fmt::Write as _;

use anyhow::Result;
use is_terminal::IsTerminal;
use notemap_engine::{DepthClass, Fragment, TreeLayout, truncate_to_width};
use owo_colors::{OwoColorize, Style};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::view_models::SourceListViewModel;

/// Prints layouts and listings for the one-shot commands.
pub struct ConsoleRenderer {
    styled: bool,
    max_width: Option<usize>,
}

impl ConsoleRenderer {
    pub fn new(styled: bool, max_width: Option<usize>) -> Self {
        Self { styled, max_width }
    }

    /// Colors and terminal width when stdout is a terminal, plain text otherwise.
    /// `NO_COLOR` disables colors.
    pub fn for_stdout() -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let styled = is_tty && std::env::var_os("NO_COLOR").is_none();
        let max_width = if is_tty {
            terminal_size::terminal_size().map(|(terminal_size::Width(w), _)| w as usize)
        } else {
            None
        };
        Self::new(styled, max_width)
    }

    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// One line per layout row, clipped to the terminal width.
    pub fn render_tree(&self, layout: &TreeLayout) -> String {
        let mut out = String::new();

        for row in &layout.rows {
            let mut fragments: Vec<&Fragment> = row.fragments.iter().collect();
            fragments.sort_by_key(|f| f.col());

            let mut cursor = 0;
            for fragment in fragments {
                let col = fragment.col();
                if self.max_width.is_some_and(|max| col >= max) {
                    break;
                }
                if col > cursor {
                    out.push_str(&" ".repeat(col - cursor));
                    cursor = col;
                }

                let text = match self.max_width {
                    Some(max) => truncate_to_width(fragment.text(), max - col),
                    None => fragment.text().to_string(),
                };
                cursor += text.width();
                self.push_fragment(&mut out, fragment, &text);
            }
            out.push('\n');
        }

        out
    }

    fn push_fragment(&self, out: &mut String, fragment: &Fragment, text: &str) {
        if !self.styled {
            out.push_str(text);
            return;
        }
        let _ = write!(out, "{}", text.style(fragment_style(fragment)));
    }

    pub fn render_source_list(&self, model: &SourceListViewModel) -> String {
        let key_width = model
            .sources
            .iter()
            .map(|s| s.key.width())
            .max()
            .unwrap_or(0)
            .max("KEY".len());
        let title_width = model
            .sources
            .iter()
            .map(|s| s.title.width())
            .max()
            .unwrap_or(0)
            .max("TITLE".len());

        let mut out = String::new();
        let header = format!(
            "{}  {}  CHARS",
            pad("KEY", key_width),
            pad("TITLE", title_width)
        );
        if self.styled {
            let _ = writeln!(out, "{}", header.bold());
        } else {
            let _ = writeln!(out, "{}", header);
        }

        for entry in &model.sources {
            let _ = writeln!(
                out,
                "{}  {}  {}",
                pad(&entry.key, key_width),
                pad(&entry.title, title_width),
                entry.chars
            );
        }
        out
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn fragment_style(fragment: &Fragment) -> Style {
    match fragment {
        Fragment::Connector { .. } => Style::new().bright_black(),
        Fragment::Card {
            depth_class,
            popup_open,
            ..
        } => {
            let style = match depth_class {
                DepthClass::Root => Style::new().magenta().bold(),
                DepthClass::Primary => Style::new().cyan().bold(),
                DepthClass::Nested => Style::new(),
            };
            if *popup_open { style.underline() } else { style }
        }
    }
}
