use crate::context::ExecutionContext;
use anyhow::{Result, bail};
use notemap_runtime::Config;
use std::path::Path;

pub fn show(ctx: &ExecutionContext) -> Result<()> {
    let status = if ctx.config_path().exists() {
        ""
    } else {
        " (not found, showing defaults)"
    };
    println!("# {}{}", ctx.config_path().display(), status);
    print!("{}", ctx.config().to_toml()?);
    Ok(())
}

pub fn init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    Config::default().save_to(config_path)?;
    tracing::info!(path = %config_path.display(), "wrote default config");
    println!("Wrote default config to {}", config_path.display());
    println!("Set [generator] command to the program that turns text into a mind map.");
    Ok(())
}
