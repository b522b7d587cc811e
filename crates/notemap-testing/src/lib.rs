//! Testing infrastructure for notemap tests.
//!
//! This crate provides utilities for writing tests across the workspace:
//! - `fixtures`: sample trees and source lists
//! - `generators`: scripted `TreeGenerator` implementations
//! - `TestWorld`: isolated environment for running the `notemap` binary

pub mod fixtures;
pub mod generators;
pub mod world;

pub use world::TestWorld;
