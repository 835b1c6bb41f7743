use crate::engine::richtext::{Color, Rect, TextEffect, TextLayout};

/// Outline/effect state resolved for one glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlyphEffect {
    None,
    Outline { color: Color, size: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    DrawGlyph {
        x: f32,
        y: f32,
        ch: char,
        color: Color,
        effect: GlyphEffect,
    },
    DrawRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
}

/// Caller-supplied values used by blocks without their own override.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderDefaults {
    pub base_color: Color,
    pub effect: TextEffect,
    pub effect_amount: f32,
    /// White when `None`
    pub effect_color: Option<Color>,
}

impl Default for RenderDefaults {
    fn default() -> Self {
        Self {
            base_color: Color::WHITE,
            effect: TextEffect::None,
            effect_amount: 0.0,
            effect_color: None,
        }
    }
}

impl RenderDefaults {
    fn glyph_effect(&self) -> GlyphEffect {
        match self.effect {
            TextEffect::None => GlyphEffect::None,
            TextEffect::Outline => GlyphEffect::Outline {
                color: self.effect_color.unwrap_or(Color::WHITE),
                size: self.effect_amount,
            },
        }
    }
}

/// TextLayout → DrawCommand
///
/// Glyphs are placed at `origin + pen + bearing`. Whitespace advances the
/// pen but emits nothing.
pub fn generate_draw_commands(
    layout: &TextLayout,
    origin: (f32, f32),
    defaults: &RenderDefaults,
) -> Vec<DrawCommand> {
    let mut commands = Vec::new();

    let metrics = layout.metrics.as_ref();
    let line_height = metrics.line_height();
    let (mut pen_x, mut pen_y) = (0.0f32, 0.0f32);

    for (i, block) in layout.blocks().iter().enumerate() {
        if block.newline {
            pen_x = 0.0;
            pen_y += line_height;
        }
        if block.skip {
            continue;
        }

        let color = if block.use_default_color {
            defaults.base_color
        } else {
            block.color.with_alpha_scaled(defaults.base_color.3)
        };
        let effect = match block.text_effect {
            TextEffect::Outline => GlyphEffect::Outline {
                color: block.effect_color,
                size: block.effect_param,
            },
            TextEffect::None => defaults.glyph_effect(),
        };

        // center / right の先頭ブロックで run 全体の位置に合わせる
        if let Some(run_x) = layout.aligned_run_x(i) {
            pen_x = run_x;
        }

        for ch in layout.block_str(block).chars() {
            let Some(glyph) = metrics.glyph(ch) else {
                continue;
            };
            if !ch.is_whitespace() {
                commands.push(DrawCommand::DrawGlyph {
                    x: origin.0 + pen_x + glyph.bearing_x,
                    y: origin.1 + pen_y,
                    ch,
                    color,
                    effect,
                });
            }
            pen_x += glyph.advance;
        }
    }

    log::debug!(target: "DrawCommand::Text", "Generated {} glyph commands", commands.len());
    commands
}

/// Highlight rectangles for the selection between two selection indices.
pub fn selection_highlight_commands(
    layout: &TextLayout,
    origin: (f32, f32),
    a: usize,
    b: usize,
    color: Color,
) -> Vec<DrawCommand> {
    if a == b {
        return Vec::new();
    }

    layout
        .for_each_line_between_selection_indices(a, b)
        .into_iter()
        .map(|Rect { x, y, width, height }| DrawCommand::DrawRect {
            x: origin.0 + x,
            y: origin.1 + y,
            width,
            height,
            color,
        })
        .collect()
}
