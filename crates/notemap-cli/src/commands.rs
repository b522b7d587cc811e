use super::args::{Cli, Commands, ConfigCommand};
use super::context::ExecutionContext;
use super::handlers;
use crate::logging::{self, LogTarget};
use anyhow::Result;
use notemap_runtime::{resolve_config_path, resolve_data_dir};

pub fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    let target = match &command {
        Commands::View { .. } => {
            let path = match cli.log_file {
                Some(path) => path,
                None => resolve_data_dir()?.join("notemap.log"),
            };
            LogTarget::File(path)
        }
        _ => LogTarget::Stderr,
    };
    logging::init(cli.log_level, target)?;

    let config_path = resolve_config_path(cli.config.as_deref())?;

    match command {
        Commands::View { sources, manual } => {
            let ctx = ExecutionContext::load(config_path)?;
            handlers::view::handle(&ctx, &sources, !manual)
        }

        Commands::Render {
            sources,
            zoom,
            collapse_depth,
            format,
        } => {
            let ctx = ExecutionContext::load(config_path)?;
            handlers::render::handle(&ctx, &sources, zoom, collapse_depth, format)
        }

        Commands::Sources { paths, format } => {
            let ctx = ExecutionContext::load(config_path)?;
            handlers::sources::handle(&ctx, &paths, format)
        }

        Commands::Config { command } => match command {
            ConfigCommand::Show => {
                let ctx = ExecutionContext::load(config_path)?;
                handlers::config::show(&ctx)
            }
            ConfigCommand::Init { force } => handlers::config::init(&config_path, force),
        },
    }
}

fn show_guidance() {
    println!("notemap: turn notebook sources into navigable mind maps");
    println!();
    println!("Get started:");
    println!("  notemap config init                           Write a default config file");
    println!("  notemap view --source notes/                  Open the interactive viewer");
    println!("  notemap render --source notes.md --tree t.json  Print a pre-generated tree");
    println!();
    println!("Set [generator] command in the config to a program that reads text on");
    println!("stdin and prints the mind map as JSON. Run `notemap --help` for details.");
}
