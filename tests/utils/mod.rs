#![allow(dead_code)]

use colored::Colorize;
use orinium_text::engine::bridge::text::{GlyphMetrics, GlyphMetricsProvider};
use orinium_text::engine::richtext::{GlyphHeightMeasurement, TextLayout, TextLayoutEngine};
use std::sync::Arc;

pub const ADVANCE: f32 = 10.0;
pub const LINE_HEIGHT: f32 = 20.0;
pub const GLYPH_HEIGHT: f32 = 14.0;

/// Every printable char is 10px wide, lines are 20px tall.
pub struct MockGlyphMetrics;

impl GlyphMetricsProvider for MockGlyphMetrics {
    fn glyph(&self, ch: char) -> Option<GlyphMetrics> {
        if ch.is_control() {
            return None;
        }
        Some(GlyphMetrics {
            advance: ADVANCE,
            bearing_x: 0.0,
            height: if ch == ' ' { 0.0 } else { GLYPH_HEIGHT },
        })
    }

    fn line_height(&self) -> f32 {
        LINE_HEIGHT
    }
}

pub fn mock_metrics() -> Arc<dyn GlyphMetricsProvider> {
    Arc::new(MockGlyphMetrics)
}

/// Engine laid out over `text` with mock metrics.
pub fn run_engine(text: &str, wrap: Option<f32>) -> TextLayoutEngine {
    let mut engine = TextLayoutEngine::new(mock_metrics());
    engine.initialize_layout(text, GlyphHeightMeasurement::FullHeight);
    engine.set_wrap(wrap);
    engine.run().expect("layout should succeed");
    eprintln!("{}", dump_blocks(engine.layout()));
    engine
}

/// Visible lines: non-skip block text joined per line.
pub fn lines(layout: &TextLayout) -> Vec<String> {
    let mut lines = vec![String::new()];
    for block in layout.blocks() {
        if block.newline {
            lines.push(String::new());
        }
        if !block.skip {
            if let Some(last) = lines.last_mut() {
                last.push_str(layout.block_str(block));
            }
        }
    }
    lines
}

/// Human readable block list for test failure output.
pub fn dump_blocks(layout: &TextLayout) -> String {
    let mut out = String::new();
    for (i, block) in layout.blocks().iter().enumerate() {
        let text = format!("{:?}", layout.block_str(block));
        let text = text.as_str();
        let text = if block.skip {
            text.dimmed()
        } else if block.use_default_color {
            text.normal()
        } else {
            text.red()
        };
        out.push_str(&format!(
            "{:>3} [{:>3}..{:>3}] {} {}\n",
            i,
            block.start_index,
            block.end_index(),
            if block.newline { "↵".cyan() } else { " ".normal() },
            text
        ));
    }
    out
}
