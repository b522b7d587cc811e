pub mod error;
mod parse;
pub mod source;
pub mod tree;

pub use error::{Error, Result};
pub use parse::{MAX_TREE_DEPTH, parse_tree_output};
pub use source::{ALL_SOURCES_KEY, Source};
pub use tree::{DESCRIPTION_PLACEHOLDER, TreeNode};
