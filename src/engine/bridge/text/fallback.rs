use super::{GlyphMetrics, GlyphMetricsProvider};

/// Fallback glyph metrics.
///
/// This implementation does not rely on any font engine.
/// Every printable character gets the same advance derived from the font size.
/// Intended for testing, bring-up, and environments without font support.
#[derive(Debug, Clone)]
pub struct FallbackGlyphMetrics {
    pub font_size: f32,
    pub avg_char_width_ratio: f32,
}

impl FallbackGlyphMetrics {
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size: font_size.max(1.0),
            ..Default::default()
        }
    }
}

impl Default for FallbackGlyphMetrics {
    fn default() -> Self {
        Self {
            font_size: 20.0,
            avg_char_width_ratio: 0.5,
        }
    }
}

impl GlyphMetricsProvider for FallbackGlyphMetrics {
    fn glyph(&self, ch: char) -> Option<GlyphMetrics> {
        // 制御文字にはグリフがない
        if ch.is_control() {
            return None;
        }

        Some(GlyphMetrics {
            advance: self.font_size * self.avg_char_width_ratio,
            bearing_x: 0.0,
            height: if ch == ' ' { 0.0 } else { self.font_size },
        })
    }

    fn line_height(&self) -> f32 {
        self.font_size * 1.2
    }
}
