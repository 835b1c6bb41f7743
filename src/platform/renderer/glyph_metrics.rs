use crate::engine::bridge::text::{GlyphMetrics, GlyphMetricsError, GlyphMetricsProvider};
use fontdue::Font as FontDue;
use std::env;

/// Environment variable naming a font file to use instead of system fonts.
pub const FONT_ENV_VAR: &str = "ORINIUM_FONT";

/// グリフメトリクスのプラットフォーム側実装
pub struct PlatformGlyphMetrics {
    font: FontDue,
    size_px: f32,
    line_height: f32,
}

impl PlatformGlyphMetrics {
    /// `ORINIUM_FONT` またはシステムフォントから初期化を試みる
    pub fn new(size_px: f32) -> anyhow::Result<Self> {
        // もし環境変数あるならそっちのフォントを優先
        if let Ok(p) = env::var(FONT_ENV_VAR)
            && let Ok(bytes) = std::fs::read(&p)
        {
            log::info!(target: "PlatformGlyphMetrics", "Using font from {}: {}", FONT_ENV_VAR, p);
            return Ok(Self::from_bytes(&bytes, size_px)?);
        }

        for p in crate::platform::font::system_font_candidates()? {
            if let Ok(bytes) = std::fs::read(&p) {
                log::info!(target: "PlatformGlyphMetrics", "Using system font: {}", p.display());
                return Ok(Self::from_bytes(&bytes, size_px)?);
            }
        }

        Err(GlyphMetricsError::FontUnavailable.into())
    }

    /// バイト列からフォントを読み込んで初期化
    pub fn from_bytes(bytes: &[u8], size_px: f32) -> Result<Self, GlyphMetricsError> {
        let font = FontDue::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| GlyphMetricsError::FontLoad(e.to_string()))?;
        let size_px = size_px.max(1.0);

        let line_height = font
            .horizontal_line_metrics(size_px)
            .map(|m| m.new_line_size.round())
            .unwrap_or(size_px * 1.2);

        Ok(Self {
            font,
            size_px,
            line_height,
        })
    }

    pub fn size_px(&self) -> f32 {
        self.size_px
    }
}

impl GlyphMetricsProvider for PlatformGlyphMetrics {
    fn glyph(&self, ch: char) -> Option<GlyphMetrics> {
        // glyph index 0 は .notdef
        if self.font.lookup_glyph_index(ch) == 0 {
            return None;
        }

        let m = self.font.metrics(ch, self.size_px);
        Some(GlyphMetrics {
            advance: m.advance_width,
            bearing_x: m.xmin as f32,
            height: m.height as f32,
        })
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}
