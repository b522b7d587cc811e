// NOTE: Command Organization Rationale
//
// Why namespaced subcommands?
// - `view` and `render` share the same source/generator arguments through `SourceArgs`
// - `config show` vs `config init` groups related operations under one noun
// - Global flags (--config, --log-level, --log-file) apply to every subcommand

mod commands;
mod common;

pub use crate::types::{LogLevel, OutputFormat};
pub use commands::*;
pub use common::*;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "notemap")]
#[command(about = "Turn notebook sources into navigable mind maps", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Config file (default: $NOTEMAP_CONFIG or the platform config dir)"
    )]
    pub config: Option<String>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(
        long,
        global = true,
        help = "Log file for the interactive viewer (default: <data dir>/notemap.log)"
    )]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
