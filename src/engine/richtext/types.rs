use super::color::Color;
use super::tag::TagKind;

// =========================
//        Text Block
// =========================

/// Horizontal layout role of a block inside an aligned run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecialLayout {
    #[default]
    None,
    CenterStart,
    CenterContinue,
    RightStart,
    RightContinue,
}

impl SpecialLayout {
    /// Continuation flag matching this run start.
    pub fn continuation(&self) -> Option<SpecialLayout> {
        match self {
            Self::CenterStart => Some(Self::CenterContinue),
            Self::RightStart => Some(Self::RightContinue),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEffect {
    #[default]
    None,
    Outline,
}

/// A contiguous span of renderable source characters sharing one
/// resolved color/effect/line state.
///
/// `start_index` and `length` are byte offsets into the source string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBlock {
    pub start_index: usize,
    pub length: usize,

    /// Excluded from rendering and selection counting
    pub skip: bool,
    /// Begins a new visual line
    pub newline: bool,

    pub color: Color,
    pub use_default_color: bool,

    pub text_effect: TextEffect,
    pub effect_color: Color,
    pub effect_param: f32,

    pub special_layout: SpecialLayout,
}

impl TextBlock {
    pub fn new(start_index: usize, length: usize) -> Self {
        Self {
            start_index,
            length,
            skip: false,
            newline: false,
            color: Color::WHITE,
            use_default_color: true,
            text_effect: TextEffect::None,
            effect_color: Color::WHITE,
            effect_param: 0.0,
            special_layout: SpecialLayout::None,
        }
    }

    pub fn end_index(&self) -> usize {
        self.start_index + self.length
    }

    pub fn block_str<'a>(&self, text: &'a str) -> &'a str {
        text.get(self.start_index..self.end_index()).unwrap_or("")
    }
}

// =========================
//      Tag Definition
// =========================

/// A raw `<...>` span. The name excludes the brackets.
#[derive(Debug, Clone, PartialEq)]
pub struct TagDefinition {
    pub name_start: usize,
    pub name_length: usize,
    pub kind: TagKind,
}

impl TagDefinition {
    pub fn name<'a>(&self, text: &'a str) -> &'a str {
        text.get(self.name_start..self.name_start + self.name_length)
            .unwrap_or("")
    }

    /// Byte offset of the `<` opening this tag.
    pub fn open_bracket_index(&self) -> usize {
        self.name_start.saturating_sub(1)
    }

    /// Byte offset right after the closing `>`, where the tag's scope begins.
    pub fn content_start_index(&self) -> usize {
        self.name_start + self.name_length + 1
    }
}

// =========================
//        Geometry
// =========================

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Edges are inclusive so a zero-width caret slot can still be hit.
    pub fn contains(&self, (x, y): (f32, f32)) -> bool {
        x >= self.x && y >= self.y && x <= self.right() && y <= self.bottom()
    }

    /// Rectangle spanning two corner points given in any order.
    pub fn from_corners((x1, y1): (f32, f32), (x2, y2): (f32, f32)) -> Self {
        let x = x1.min(x2);
        let y = y1.min(y2);
        Self {
            x,
            y,
            width: x1.max(x2) - x,
            height: y1.max(y2) - y,
        }
    }
}

// =========================
//          Config
// =========================

/// Which vertical extents the measured size reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphHeightMeasurement {
    /// Every line is one full line height
    #[default]
    FullHeight,
    /// Every line is as tall as its tallest glyph
    CharacterHeight,
}

pub const DEFAULT_MAX_BLOCKS: usize = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Interpret `<...>` tags. When off the string is laid out verbatim.
    pub resolve_tags: bool,
    pub height_mode: GlyphHeightMeasurement,
    /// Block ceiling guarding the wrapper against runaway splitting
    pub max_blocks: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            resolve_tags: true,
            height_mode: GlyphHeightMeasurement::FullHeight,
            max_blocks: DEFAULT_MAX_BLOCKS,
        }
    }
}
