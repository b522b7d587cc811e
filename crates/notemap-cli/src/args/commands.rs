use super::common::SourceArgs;
use crate::types::OutputFormat;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive mind-map viewer")]
    View {
        #[command(flatten)]
        sources: SourceArgs,

        #[arg(long, help = "Wait for [g] instead of generating on startup")]
        manual: bool,
    },

    #[command(about = "Generate once and print the mind map")]
    Render {
        #[command(flatten)]
        sources: SourceArgs,

        #[arg(
            long,
            default_value_t = 1.0,
            help = "Zoom factor, clamped to 0.5..=2.0"
        )]
        zoom: f64,

        #[arg(
            long,
            value_name = "DEPTH",
            help = "Collapse every expandable node at this depth (root is 0)"
        )]
        collapse_depth: Option<usize>,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    #[command(about = "List loaded sources and their selection keys")]
    Sources {
        #[arg(long = "source", value_name = "PATH")]
        paths: Vec<PathBuf>,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    #[command(about = "Show or initialize the configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write a default config file")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}
