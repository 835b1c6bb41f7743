//! Glyph metrics abstraction for rich-text layout.
//!
//! # Overview
//!
//! This module defines the interface between the layout engine and
//! platform-specific font implementations.
//!
//! It does **not** rasterize glyphs or own any atlas.
//! The layout engine only needs horizontal advances, bearings and a
//! constant line height for the active font and size.
//!
//! # Responsibilities
//!
//! - Provide per-character glyph metrics
//! - Provide the line height of the active font/size
//! - Provide a backend-agnostic metrics abstraction
//!
//! # Non-Responsibilities
//!
//! - Tag parsing or block building
//! - Rendering or draw command generation
//!
//! # Data Flow
//!
//! ```text
//! Font → GlyphMetricsProvider → Wrapper / Measurer / Selection → DrawCommand
//! ```

use std::fmt;

/* ============================
 * Glyph Metrics
 * ============================ */

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlyphMetrics {
    /// Horizontal pen advance
    pub advance: f32,

    /// Horizontal offset from the pen to the glyph's left edge
    pub bearing_x: f32,

    /// Visible glyph height (used by `CharacterHeight` measurement)
    pub height: f32,
}

/* ============================
 * Errors
 * ============================ */

#[derive(Debug)]
pub enum GlyphMetricsError {
    FontUnavailable,
    FontLoad(String),
}

impl fmt::Display for GlyphMetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FontUnavailable => write!(f, "Font unavailable"),
            Self::FontLoad(s) => write!(f, "Font load error: {s}"),
        }
    }
}

impl std::error::Error for GlyphMetricsError {}

/* ============================
 * Trait
 * ============================ */

pub trait GlyphMetricsProvider: Send + Sync {
    /// Metrics for `ch`, or `None` when the font has no glyph for it.
    fn glyph(&self, ch: char) -> Option<GlyphMetrics>;

    /// Distance between two baselines.
    fn line_height(&self) -> f32;

    /// Advance of `ch`, zero for missing glyphs.
    fn advance(&self, ch: char) -> f32 {
        self.glyph(ch).map(|g| g.advance).unwrap_or(0.0)
    }
}

/* ============================
 * Fallback
 * ============================ */

pub mod fallback;
pub use fallback::FallbackGlyphMetrics;
