//! Notebook sources: loading plain-text files and resolving the text that a
//! selection key refers to.

use std::collections::HashSet;
use std::path::Path;

use notemap_types::{ALL_SOURCES_KEY, Source};
use walkdir::WalkDir;

use crate::{Error, Result};

const SOURCE_EXTENSIONS: &[&str] = &["txt", "md", "markdown"];

/// Text to analyze for `key`, or `None` when nothing usable is selected.
///
/// - `""`: no selection
/// - `"all"`: every source's content joined by a blank line, in list order
/// - anything else: the content of the one source with that key
///
/// Empty or whitespace-only results are reported as `None` as well.
pub fn resolve_analysis_text(sources: &[Source], key: &str) -> Option<String> {
    if key.is_empty() {
        return None;
    }

    let text = if key == ALL_SOURCES_KEY {
        sources
            .iter()
            .map(|source| source.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    } else {
        sources
            .iter()
            .find(|source| source.key == key)?
            .content
            .clone()
    };

    if text.trim().is_empty() {
        return None;
    }
    Some(text)
}

/// Ordered list of sources with unique keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceSet {
    sources: Vec<Source>,
}

impl SourceSet {
    pub fn new(sources: Vec<Source>) -> Self {
        Self { sources }
    }

    /// Load every path in order. Directories are walked (sorted by file
    /// name) for `.txt`, `.md` and `.markdown` files.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut set = Self::default();
        let mut used_keys = HashSet::new();

        for path in paths {
            let path = path.as_ref();
            if path.is_dir() {
                let entries = WalkDir::new(path)
                    .sort_by_file_name()
                    .into_iter()
                    .filter_map(|entry| entry.ok())
                    .filter(|entry| entry.file_type().is_file())
                    .filter(|entry| has_source_extension(entry.path()));
                for entry in entries {
                    set.push_file(entry.path(), &mut used_keys)?;
                }
            } else if path.is_file() {
                set.push_file(path, &mut used_keys)?;
            } else {
                return Err(Error::Source(format!(
                    "source not found: {}",
                    path.display()
                )));
            }
        }

        tracing::debug!(count = set.len(), "loaded sources");
        Ok(set)
    }

    fn push_file(&mut self, path: &Path, used_keys: &mut HashSet<String>) -> Result<()> {
        let content = std::fs::read_to_string(path).map_err(|err| {
            Error::Source(format!("failed to read {}: {}", path.display(), err))
        })?;

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let key = unique_key(&stem, used_keys);
        let title = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| key.clone());

        tracing::trace!(key = %key, path = %path.display(), "source registered");
        self.sources.push(Source::new(key, title, content));
        Ok(())
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn get(&self, key: &str) -> Option<&Source> {
        self.sources.iter().find(|source| source.key == key)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Selection keys in picker order: `"all"` first, then each source.
    pub fn selection_keys(&self) -> Vec<String> {
        std::iter::once(ALL_SOURCES_KEY.to_string())
            .chain(self.sources.iter().map(|source| source.key.clone()))
            .collect()
    }

    /// Display label for a selection key
    pub fn title_for(&self, key: &str) -> Option<&str> {
        if key == ALL_SOURCES_KEY {
            return Some("All sources");
        }
        self.get(key).map(|source| source.title.as_str())
    }
}

fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SOURCE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Lower-cased, dash-separated key that is unique within the set and never
/// equal to the `"all"` sentinel.
fn unique_key(stem: &str, used_keys: &mut HashSet<String>) -> String {
    let base: String = stem
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    let base = if base.is_empty() {
        "source".to_string()
    } else {
        base
    };

    let mut key = base.clone();
    let mut suffix = 2;
    while key == ALL_SOURCES_KEY || used_keys.contains(&key) {
        key = format!("{}-{}", base, suffix);
        suffix += 1;
    }
    used_keys.insert(key.clone());
    key
}
