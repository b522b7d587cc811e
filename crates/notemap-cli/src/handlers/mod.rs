pub mod config;
pub mod render;
pub mod sources;
pub mod view;
