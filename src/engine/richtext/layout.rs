use std::fmt;
use std::sync::Arc;

use crate::engine::bridge::text::GlyphMetricsProvider;

use super::error::LayoutError;
use super::measure::{TextMeasurement, measure_blocks, measure_str_width};
use super::tag::apply_tags;
use super::tokenizer::{scan_tags, split_newlines};
use super::types::{LayoutConfig, SpecialLayout, TagDefinition, TextBlock};
use super::wrap::{WrapOptions, wrap_blocks};

/// The immutable result of one layout pass.
///
/// Owns a copy of the source text and the metrics it was built with, so
/// every query answers against exactly the state that produced the blocks.
#[derive(Clone)]
pub struct TextLayout {
    pub(crate) text: String,
    pub(crate) blocks: Vec<TextBlock>,
    pub(crate) tags: Vec<TagDefinition>,
    pub(crate) measurement: TextMeasurement,
    pub(crate) metrics: Arc<dyn GlyphMetricsProvider>,
}

impl fmt::Debug for TextLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextLayout")
            .field("text", &self.text)
            .field("blocks", &self.blocks)
            .field("tags", &self.tags)
            .field("measurement", &self.measurement)
            .finish()
    }
}

impl TextLayout {
    /// Layout with no blocks, as seen before the first run.
    pub fn empty(metrics: Arc<dyn GlyphMetricsProvider>) -> Self {
        Self {
            text: String::new(),
            blocks: Vec::new(),
            tags: Vec::new(),
            measurement: TextMeasurement::default(),
            metrics,
        }
    }

    /// Run the whole pipeline: scan → split newlines → wrap → tags → measure.
    ///
    /// A wrapping failure is returned next to the layout, which is still
    /// complete for the blocks produced before the failure.
    pub fn build(
        text: &str,
        wrap_width: Option<f32>,
        metrics: Arc<dyn GlyphMetricsProvider>,
        config: &LayoutConfig,
    ) -> (Self, Option<LayoutError>) {
        let (mut blocks, tags) = if config.resolve_tags {
            let out = scan_tags(text);
            (out.blocks, out.tags)
        } else {
            (vec![TextBlock::new(0, text.len())], Vec::new())
        };

        split_newlines(text, &mut blocks);

        let mut error = None;
        if let Some(wrap_width) = wrap_width {
            let options = WrapOptions {
                wrap_width,
                trim_break_space: config.resolve_tags,
                max_blocks: config.max_blocks,
            };
            if let Err(e) = wrap_blocks(text, &mut blocks, metrics.as_ref(), &options) {
                error = Some(e);
            }
        }

        apply_tags(&tags, &mut blocks, text.len());

        let measurement = measure_blocks(text, &blocks, metrics.as_ref(), config.height_mode);
        log::debug!(target: "TextLayoutEngine::Run", "Laid out {} blocks, {} tags, size={:?}", blocks.len(), tags.len(), measurement.size);

        (
            Self {
                text: text.to_string(),
                blocks,
                tags,
                measurement,
                metrics,
            },
            error,
        )
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn blocks(&self) -> &[TextBlock] {
        &self.blocks
    }

    pub fn tags(&self) -> &[TagDefinition] {
        &self.tags
    }

    pub fn text_size(&self) -> (f32, f32) {
        self.measurement.size
    }

    /// Height as if measured with `FullHeight`, the area glyphs may touch.
    pub fn text_render_height(&self) -> f32 {
        self.measurement.render_height
    }

    pub fn render_offset_y(&self) -> f32 {
        self.measurement.render_offset_y
    }

    pub fn line_height(&self) -> f32 {
        self.metrics.line_height()
    }

    pub fn block_str(&self, block: &TextBlock) -> &str {
        block.block_str(&self.text)
    }

    /// Number of visual lines.
    pub fn line_count(&self) -> usize {
        1 + self.blocks.iter().filter(|b| b.newline).count()
    }

    /// Combined width of the aligned run starting at `block_idx`, or `None`
    /// if that block does not start a run.
    ///
    /// The run continues over blocks flagged with the matching continuation
    /// until a block that starts a new line.
    pub fn aligned_run_width(&self, block_idx: usize) -> Option<f32> {
        let first = self.blocks.get(block_idx)?;
        let continuation = first.special_layout.continuation()?;

        let metrics = self.metrics.as_ref();
        let mut width = measure_str_width(self.block_str(first), metrics);
        for block in &self.blocks[block_idx + 1..] {
            if block.skip {
                continue;
            }
            if block.special_layout != continuation || block.newline {
                break;
            }
            width += measure_str_width(self.block_str(block), metrics);
        }
        Some(width)
    }

    /// Pen x at which the run starting at `block_idx` begins.
    pub(crate) fn aligned_run_x(&self, block_idx: usize) -> Option<f32> {
        let run_width = self.aligned_run_width(block_idx)?;
        let text_width = self.measurement.size.0;
        match self.blocks[block_idx].special_layout {
            SpecialLayout::CenterStart => Some(text_width / 2.0 - run_width / 2.0),
            SpecialLayout::RightStart => Some(text_width - run_width),
            _ => None,
        }
    }
}
