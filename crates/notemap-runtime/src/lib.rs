//! Runtime layer for notemap.
//!
//! Owns everything with a lifecycle or I/O around the pure rendering core:
//! the viewport controller (source selection, generation, zoom), source
//! loading, tree generators and configuration.

pub mod config;
pub mod error;
pub mod generator;
pub mod source;
pub mod viewport;

pub use config::{Config, GeneratorConfig, ViewConfig, resolve_config_path, resolve_data_dir};
pub use error::{Error, Result};
pub use generator::{CommandGenerator, FileGenerator, TreeGenerator, generator_from_config};
pub use source::{SourceSet, resolve_analysis_text};
pub use viewport::{
    DEFAULT_ZOOM, GENERATION_FAILED_MESSAGE, GenerationRequest, GenerationStatus, MAX_ZOOM,
    MIN_ZOOM, Viewport, ZOOM_STEP,
};
