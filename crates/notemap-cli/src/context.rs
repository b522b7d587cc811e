use anyhow::{Context, Result};
use notemap_runtime::{Config, SourceSet, TreeGenerator, generator_from_config};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Per-invocation state shared by the handlers
pub struct ExecutionContext {
    config_path: PathBuf,
    config: Config,
}

impl ExecutionContext {
    pub fn load(config_path: PathBuf) -> Result<Self> {
        let config = Config::load_from(&config_path)
            .with_context(|| format!("failed to load config from {}", config_path.display()))?;
        Ok(Self {
            config_path,
            config,
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn load_sources(&self, paths: &[PathBuf]) -> Result<SourceSet> {
        Ok(SourceSet::load(paths)?)
    }

    pub fn generator(&self, tree_file: Option<&Path>) -> Result<Arc<dyn TreeGenerator>> {
        Ok(generator_from_config(&self.config, tree_file)?)
    }
}
