use clap::Args;
use std::path::PathBuf;

/// Where analysis text comes from and how the tree is produced
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    #[arg(
        long = "source",
        value_name = "PATH",
        help = "Source file or directory of .txt/.md files (repeatable)"
    )]
    pub paths: Vec<PathBuf>,

    #[arg(
        long,
        value_name = "KEY",
        help = "Source key to analyze, or \"all\" (default: [view] default_source)"
    )]
    pub select: Option<String>,

    #[arg(
        long,
        value_name = "FILE",
        help = "Replay a pre-generated tree JSON file instead of running the generator command"
    )]
    pub tree: Option<PathBuf>,
}

impl SourceArgs {
    /// Explicit selection, falling back to the configured default
    pub fn selection(&self, default_source: &str) -> String {
        self.select
            .clone()
            .unwrap_or_else(|| default_source.to_string())
    }
}
