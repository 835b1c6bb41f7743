//! Rich-text layout.
//!
//! # Overview
//!
//! Turns a string with inline markup into immutable text blocks,
//! wraps them against a maximum width, measures them, and maps between
//! string offsets, selection indices and screen rectangles.
//!
//! # Markup
//!
//! ```text
//! <color 255 0 0>red</>  <color #00ff0080>green</>
//! <outline #000000 size=2>outlined</>
//! <center>centered</>  <right>right aligned</>
//! ```
//!
//! Tags close with `</>` matched by position. Unknown tags, tags with
//! bad arguments and an unterminated `<` are plain text.
//!
//! # Data Flow
//!
//! ```text
//! text → scan tags → split newlines → wrap → apply tags → measure
//!                                                       ↘ selection / draw commands
//! ```

pub mod color;
pub mod engine;
pub mod error;
pub mod layout;
pub mod measure;
pub mod selection;
pub mod tag;
pub mod tokenizer;
pub mod types;
pub mod wrap;

pub use color::Color;
pub use engine::{DirtyReason, LayoutState, TextLayoutEngine};
pub use error::LayoutError;
pub use layout::TextLayout;
pub use selection::{SelectionHit, SelectionSlot, Visit};
pub use tag::TagKind;
pub use types::{
    GlyphHeightMeasurement, LayoutConfig, Rect, SpecialLayout, TagDefinition, TextBlock,
    TextEffect,
};
