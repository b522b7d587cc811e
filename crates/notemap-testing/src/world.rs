//! TestWorld pattern for declarative CLI test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated temp directory with its own config and data dir
//! - Writing source files and pre-generated tree files
//! - Executing the `notemap` binary with that context

use anyhow::Result;
use assert_cmd::Command;
use notemap_types::TreeNode;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use notemap_testing::TestWorld;
/// use notemap_testing::fixtures::geography_tree;
///
/// let world = TestWorld::new()
///     .with_source("doc-a.txt", "Paris is the capital of France.")
///     .with_tree("tree.json", &geography_tree());
///
/// let output = world.command().args(["render", "--tree"]).arg(world.path("tree.json")).output().unwrap();
/// assert!(output.status.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    data_dir: PathBuf,
    sources: Vec<PathBuf>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config").join("config.toml");
        let data_dir = temp_dir.path().join("data");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            config_path,
            data_dir,
            sources: Vec::new(),
        }
    }

    /// Absolute path of a file inside the world
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.temp_dir.path().join(relative)
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Source files written so far, in order
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Write a source file under `sources/` and register it.
    pub fn with_source(mut self, name: &str, content: &str) -> Self {
        let path = self.temp_dir.path().join("sources").join(name);
        write_file(&path, content).expect("Failed to write source");
        self.sources.push(path);
        self
    }

    /// Write a tree as JSON.
    pub fn with_tree(self, name: &str, tree: &TreeNode) -> Self {
        let json = serde_json::to_string_pretty(tree).expect("Failed to serialize tree");
        self.with_file(name, &json)
    }

    /// Write an arbitrary file.
    pub fn with_file(self, name: &str, content: &str) -> Self {
        write_file(&self.path(name), content).expect("Failed to write file");
        self
    }

    /// Write the config file.
    pub fn with_config(self, toml: &str) -> Self {
        write_file(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// `notemap` command bound to this world's config and data dir.
    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("notemap").expect("Failed to find notemap binary");
        cmd.arg("--config").arg(&self.config_path);
        cmd.env("NOTEMAP_PATH", &self.data_dir);
        cmd.env_remove("NOTEMAP_CONFIG");
        cmd.env_remove("NOTEMAP_LOG");
        cmd
    }

    /// `command()` with every registered source passed as `--source`.
    pub fn command_with_sources(&self, subcommand: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg(subcommand);
        for source in &self.sources {
            cmd.arg("--source").arg(source);
        }
        cmd
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}
