//! Tree generators
//!
//! A generator turns analysis text into a `TreeNode`, asynchronously, and may
//! fail for any reason. The viewport treats it as an opaque call: one call
//! per `generate()`, no retry, no timeout, no cancellation.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;

use futures::future::BoxFuture;
use notemap_types::{TreeNode, parse_tree_output};
use tokio::io::AsyncWriteExt;

use crate::config::Config;
use crate::{Error, Result};

pub trait TreeGenerator: Send + Sync {
    fn generate(&self, text: String) -> BoxFuture<'static, Result<TreeNode>>;
}

/// Runs an external command: analysis text on stdin, tree JSON on stdout.
///
/// This is where an LLM wrapper script plugs in; prompt construction and
/// model access live entirely in that command.
#[derive(Debug, Clone)]
pub struct CommandGenerator {
    program: String,
    args: Vec<String>,
}

impl CommandGenerator {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build from a program-then-arguments list
    pub fn from_argv(argv: &[String]) -> Result<Self> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| Error::Config("generator command is empty".to_string()))?;
        Ok(Self::new(program.clone(), args.to_vec()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl TreeGenerator for CommandGenerator {
    fn generate(&self, text: String) -> BoxFuture<'static, Result<TreeNode>> {
        let program = self.program.clone();
        let args = self.args.clone();

        Box::pin(async move {
            let mut child = tokio::process::Command::new(&program)
                .args(&args)
                .stdin(Stdio::piped())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .kill_on_drop(true)
                .spawn()
                .map_err(|err| Error::Generator(format!("failed to start `{}`: {}", program, err)))?;

            let mut stdin = child
                .stdin
                .take()
                .ok_or_else(|| Error::Generator("generator stdin unavailable".to_string()))?;

            // Feed stdin while collecting output so a chatty child cannot deadlock
            let write = async move {
                let result = stdin.write_all(text.as_bytes()).await;
                drop(stdin);
                match result {
                    Err(err) if err.kind() != ErrorKind::BrokenPipe => Err(err),
                    _ => Ok(()),
                }
            };
            let (written, output) = tokio::join!(write, child.wait_with_output());
            let output = output?;
            written?;

            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                return Err(Error::Generator(format!(
                    "`{}` exited with {}: {}",
                    program,
                    output.status,
                    stderr.trim()
                )));
            }

            let stdout = String::from_utf8_lossy(&output.stdout);
            Ok(parse_tree_output(&stdout)?)
        })
    }
}

/// Replays a pre-generated tree from a JSON file, ignoring the input text.
#[derive(Debug, Clone)]
pub struct FileGenerator {
    path: PathBuf,
}

impl FileGenerator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TreeGenerator for FileGenerator {
    fn generate(&self, _text: String) -> BoxFuture<'static, Result<TreeNode>> {
        let path = self.path.clone();
        Box::pin(async move {
            let raw = tokio::fs::read_to_string(&path).await.map_err(|err| {
                Error::Generator(format!("failed to read {}: {}", path.display(), err))
            })?;
            Ok(parse_tree_output(&raw)?)
        })
    }
}

/// Pick the generator for this run: an explicit tree file beats the
/// configured command.
pub fn generator_from_config(
    config: &Config,
    tree_file: Option<&Path>,
) -> Result<Arc<dyn TreeGenerator>> {
    if let Some(path) = tree_file {
        return Ok(Arc::new(FileGenerator::new(path)));
    }

    if config.generator.command.is_empty() {
        return Err(Error::Config(
            "no generator configured: set [generator] command in the config file or pass --tree"
                .to_string(),
        ));
    }

    Ok(Arc::new(CommandGenerator::from_argv(
        &config.generator.command,
    )?))
}
