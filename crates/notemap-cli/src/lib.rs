// NOTE: notemap Architecture Rationale
//
// Why a separate pure engine crate?
// - Connector geometry, expand/popup state and layout have no I/O and no failure modes
// - Keeping them free of terminal and async code makes them testable with plain asserts and snapshots
// - The TUI and the `render` command paint the same `TreeLayout`, so they cannot drift apart
//
// Why an external generator command instead of a built-in model client?
// - Prompting and provider APIs change far more often than the viewer
// - Any script that reads text on stdin and prints tree JSON can be plugged in
// - Pre-generated trees (`--tree`) make the viewer usable offline and in tests

mod args;
mod commands;
mod context;
mod handlers;
pub mod logging;
pub mod presentation;
mod types;

pub use args::{Cli, Commands, ConfigCommand, LogLevel, OutputFormat, SourceArgs};
pub use commands::run;
