pub mod glyph_metrics;

pub use glyph_metrics::PlatformGlyphMetrics;
