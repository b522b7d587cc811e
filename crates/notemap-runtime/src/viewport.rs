//! Viewport Controller
//!
//! Owns the generation lifecycle, the selected source and the zoom factor of
//! one mind-map view.
//!
//! ## Generation protocol
//! `begin_generate` validates the request and switches to `Loading`;
//! `complete` applies the generator's answer. Every request carries a
//! monotonically increasing sequence number and only the answer for the
//! latest one is applied, so a result arriving after `teardown` (or after a
//! newer request) is discarded instead of landing on stale state.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use notemap_types::{Source, TreeNode};

use crate::Result;
use crate::generator::TreeGenerator;
use crate::source::resolve_analysis_text;

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 2.0;
pub const DEFAULT_ZOOM: f64 = 1.0;
pub const ZOOM_STEP: f64 = 0.1;

/// The only failure text ever shown to the user; causes go to the log.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate the mind map. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum GenerationStatus {
    Idle,
    Loading,
    Ready(Arc<TreeNode>),
    Failed(String),
}

/// A validated generation request to hand to a generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub seq: u64,
    pub text: String,
}

#[derive(Debug)]
pub struct Viewport {
    selected_source_key: String,
    status: GenerationStatus,
    zoom: f64,
    seq: u64,
    torn_down: bool,
    generated_at: Option<DateTime<Utc>>,
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            selected_source_key: String::new(),
            status: GenerationStatus::Idle,
            zoom: DEFAULT_ZOOM,
            seq: 0,
            torn_down: false,
            generated_at: None,
        }
    }

    pub fn with_source(mut self, key: impl Into<String>) -> Self {
        self.selected_source_key = key.into();
        self
    }

    pub fn select_source(&mut self, key: impl Into<String>) {
        self.selected_source_key = key.into();
    }

    pub fn selected_source_key(&self) -> &str {
        &self.selected_source_key
    }

    pub fn status(&self) -> &GenerationStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, GenerationStatus::Loading)
    }

    /// The generated tree, when `Ready`
    pub fn tree(&self) -> Option<&Arc<TreeNode>> {
        match &self.status {
            GenerationStatus::Ready(tree) => Some(tree),
            _ => None,
        }
    }

    pub fn generated_at(&self) -> Option<DateTime<Utc>> {
        self.generated_at
    }

    /// Whether `generate` would currently be accepted for `sources`
    pub fn can_generate(&self, sources: &[Source]) -> bool {
        !self.torn_down
            && !self.is_loading()
            && resolve_analysis_text(sources, &self.selected_source_key).is_some()
    }

    /// Validate and start a generation.
    ///
    /// Returns `None` without touching any state when no source is
    /// selected, a generation is already in flight, the view was torn down,
    /// or the resolved text is empty.
    pub fn begin_generate(&mut self, sources: &[Source]) -> Option<GenerationRequest> {
        if self.torn_down || self.is_loading() {
            tracing::debug!("generate rejected: view torn down or already loading");
            return None;
        }
        let text = resolve_analysis_text(sources, &self.selected_source_key)?;

        self.status = GenerationStatus::Loading;
        self.zoom = DEFAULT_ZOOM;
        self.generated_at = None;
        self.seq += 1;

        tracing::info!(
            seq = self.seq,
            source = %self.selected_source_key,
            chars = text.chars().count(),
            "mind map generation started"
        );

        Some(GenerationRequest {
            seq: self.seq,
            text,
        })
    }

    /// Apply a generator result. Returns `false` when the result was
    /// discarded as superseded.
    pub fn complete(&mut self, seq: u64, result: Result<TreeNode>) -> bool {
        if self.torn_down || seq != self.seq || !self.is_loading() {
            tracing::debug!(seq, latest = self.seq, "discarding superseded generation result");
            return false;
        }

        match result {
            Ok(tree) => {
                tracing::info!(seq, nodes = tree.node_count(), "mind map generated");
                self.status = GenerationStatus::Ready(Arc::new(tree));
                self.generated_at = Some(Utc::now());
            }
            Err(err) => {
                tracing::warn!(seq, error = %err, "mind map generation failed");
                self.status = GenerationStatus::Failed(GENERATION_FAILED_MESSAGE.to_string());
            }
        }
        true
    }

    /// Begin, call the generator exactly once, and apply its answer.
    ///
    /// Returns whether a result was applied.
    pub async fn generate(&mut self, sources: &[Source], generator: &dyn TreeGenerator) -> bool {
        let Some(request) = self.begin_generate(sources) else {
            return false;
        };
        let result = generator.generate(request.text).await;
        self.complete(request.seq, result)
    }

    /// Stop accepting results; anything still in flight is discarded.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.seq += 1;
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Adjust zoom by `delta`, clamped to `[MIN_ZOOM, MAX_ZOOM]`.
    ///
    /// A non-finite delta leaves the zoom unchanged.
    pub fn set_zoom(&mut self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        self.zoom = (self.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.step_zoom(ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.step_zoom(-ZOOM_STEP);
    }

    // Steps land on hundredths so ten of them reach the bounds exactly
    fn step_zoom(&mut self, step: f64) {
        let next = ((self.zoom + step) * 100.0).round() / 100.0;
        self.zoom = next.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = DEFAULT_ZOOM;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}
