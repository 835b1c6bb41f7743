use std::sync::Arc;

use crate::engine::bridge::text::GlyphMetricsProvider;
use crate::engine::renderer_model::draw_command::{DrawCommand, RenderDefaults, generate_draw_commands};

use super::error::LayoutError;
use super::layout::TextLayout;
use super::types::{GlyphHeightMeasurement, LayoutConfig};

/// Why the current layout is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirtyReason {
    Text,
    Wrap,
    GlyphMetrics,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutState {
    Clean,
    Dirty(DirtyReason),
}

/// Rich-text layout engine for one string.
///
/// Setters only mark the engine dirty. `run()` rebuilds the whole layout
/// and swaps it in; queries always read the last completed layout.
pub struct TextLayoutEngine {
    text: String,
    wrap_width: Option<f32>,
    metrics: Arc<dyn GlyphMetricsProvider>,
    config: LayoutConfig,
    state: LayoutState,
    layout: TextLayout,
}

impl TextLayoutEngine {
    pub fn new(metrics: Arc<dyn GlyphMetricsProvider>) -> Self {
        Self::with_config(metrics, LayoutConfig::default())
    }

    pub fn with_config(metrics: Arc<dyn GlyphMetricsProvider>, config: LayoutConfig) -> Self {
        Self {
            text: String::new(),
            wrap_width: None,
            layout: TextLayout::empty(metrics.clone()),
            metrics,
            config,
            state: LayoutState::Dirty(DirtyReason::Text),
        }
    }

    fn mark_dirty(&mut self, reason: DirtyReason) {
        // 最初の理由を残す
        if self.state == LayoutState::Clean {
            log::debug!(target: "TextLayoutEngine::Dirty", "{:?}", reason);
            self.state = LayoutState::Dirty(reason);
        }
    }

    pub fn initialize_layout(&mut self, text: &str, height_mode: GlyphHeightMeasurement) {
        if self.text == text && self.config.height_mode == height_mode {
            return;
        }

        if self.config.height_mode != height_mode {
            self.config.height_mode = height_mode;
            self.mark_dirty(DirtyReason::Config);
        }
        if self.text != text {
            self.text = text.to_string();
            self.mark_dirty(DirtyReason::Text);
        }
    }

    pub fn set_wrap(&mut self, wrap_width: Option<f32>) {
        if self.wrap_width == wrap_width {
            return;
        }
        self.wrap_width = wrap_width;
        self.mark_dirty(DirtyReason::Wrap);
    }

    pub fn set_glyph_metrics(&mut self, metrics: Arc<dyn GlyphMetricsProvider>) {
        if Arc::ptr_eq(&self.metrics, &metrics) {
            return;
        }
        self.metrics = metrics;
        self.mark_dirty(DirtyReason::GlyphMetrics);
    }

    pub fn set_resolve_tags(&mut self, resolve_tags: bool) {
        if self.config.resolve_tags == resolve_tags {
            return;
        }
        self.config.resolve_tags = resolve_tags;
        self.mark_dirty(DirtyReason::Config);
    }

    /// Whether laying out these inputs would produce a different layout.
    pub fn needs_rerun(
        &self,
        text: &str,
        wrap_width: Option<f32>,
        metrics: &Arc<dyn GlyphMetricsProvider>,
    ) -> bool {
        self.wrap_width != wrap_width || self.text != text || !Arc::ptr_eq(&self.metrics, metrics)
    }

    pub fn state(&self) -> LayoutState {
        self.state
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn wrap_width(&self) -> Option<f32> {
        self.wrap_width
    }

    /// Recompute the layout if dirty.
    ///
    /// On `BlockLimitExceeded` the (partially wrapped) layout is still
    /// installed and the engine is clean.
    pub fn run(&mut self) -> Result<(), LayoutError> {
        let LayoutState::Dirty(reason) = self.state else {
            return Ok(());
        };
        log::debug!(target: "TextLayoutEngine::Run", "Relayout ({:?}): {:?}", reason, self.text);

        let (layout, error) =
            TextLayout::build(&self.text, self.wrap_width, self.metrics.clone(), &self.config);
        self.layout = layout;
        self.state = LayoutState::Clean;

        match error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// The last completed layout.
    pub fn layout(&self) -> &TextLayout {
        &self.layout
    }

    pub fn text_size(&self) -> (f32, f32) {
        self.layout.text_size()
    }

    /// Draw commands for the current layout, including the height-mode
    /// render offset.
    pub fn render(&self, origin: (f32, f32), defaults: &RenderDefaults) -> Vec<DrawCommand> {
        let origin = (origin.0, origin.1 + self.layout.render_offset_y());
        self.render_no_layout_offset(origin, defaults)
    }

    pub fn render_no_layout_offset(
        &self,
        origin: (f32, f32),
        defaults: &RenderDefaults,
    ) -> Vec<DrawCommand> {
        generate_draw_commands(&self.layout, origin, defaults)
    }
}
