use serde::{Deserialize, Serialize};

/// Reserved selection key meaning "combine every source".
pub const ALL_SOURCES_KEY: &str = "all";

/// A notebook source supplied to the mind-map view.
///
/// `content` feeds the generator; `title` is only used as a display label in
/// the source picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub key: String,
    pub title: String,
    pub content: String,
}

impl Source {
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}
