use crate::engine::bridge::text::GlyphMetricsProvider;

use super::types::{GlyphHeightMeasurement, TextBlock};

/// Measured extents of a laid out text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMeasurement {
    /// (width, height) according to the active height mode
    pub size: (f32, f32),
    /// Height as if measured with `FullHeight`
    pub render_height: f32,
    /// Vertical offset to apply when rendering so glyphs stay centred in `size`
    pub render_offset_y: f32,
}

/// Width of `text` with trailing whitespace ignored.
pub fn measure_str_width(text: &str, metrics: &dyn GlyphMetricsProvider) -> f32 {
    text.trim_end().chars().map(|ch| metrics.advance(ch)).sum()
}

/// Measure the final block list.
pub fn measure_blocks(
    text: &str,
    blocks: &[TextBlock],
    metrics: &dyn GlyphMetricsProvider,
    height_mode: GlyphHeightMeasurement,
) -> TextMeasurement {
    let line_height = metrics.line_height();

    let mut largest_line: f32 = 0.0;
    let mut line_width: f32 = 0.0;
    let mut y: f32 = 0.0;

    // CharacterHeight 用
    let mut tallest_on_line: f32 = 0.0;
    let mut character_height_total: f32 = 0.0;

    for block in blocks {
        if block.newline {
            largest_line = largest_line.max(line_width);
            line_width = 0.0;
            y += line_height;

            character_height_total += tallest_on_line;
            tallest_on_line = 0.0;
        }

        if block.skip {
            continue;
        }

        for ch in block.block_str(text).chars() {
            let Some(glyph) = metrics.glyph(ch) else {
                continue;
            };
            line_width += glyph.advance;
            tallest_on_line = tallest_on_line.max(glyph.height);
        }
    }
    largest_line = largest_line.max(line_width);

    let render_height = y + line_height;
    match height_mode {
        GlyphHeightMeasurement::FullHeight => TextMeasurement {
            size: (largest_line, render_height),
            render_height,
            render_offset_y: 0.0,
        },
        GlyphHeightMeasurement::CharacterHeight => {
            let height = character_height_total + tallest_on_line;
            TextMeasurement {
                size: (largest_line, height),
                render_height,
                render_offset_y: (height - render_height) / 2.0,
            }
        }
    }
}
