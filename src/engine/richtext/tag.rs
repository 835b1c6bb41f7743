//! Tag parsing and tag scope resolution.

use super::color::Color;
use super::types::{SpecialLayout, TagDefinition, TextBlock, TextEffect};

/// Parsed meaning of a tag name.
#[derive(Debug, Clone, PartialEq)]
pub enum TagKind {
    /// `</>`
    Closing,
    /// `<color r g b [a]>` / `<color #RRGGBB[AA]>`
    Color(Color),
    /// `<outline r g b [a] size=N>` / `<outline #RRGGBB size=N>`
    Outline { color: Color, size: f32 },
    Center,
    Right,
    /// Unknown names and tags with unparseable arguments. The scanner
    /// leaves these in the text, so they never take part in scoping.
    Unknown,
}

impl TagKind {
    pub fn parse(name: &str) -> TagKind {
        if name == "/" {
            return TagKind::Closing;
        }

        let mut parts = name.split(' ').filter(|s| !s.is_empty());
        let keyword = parts.next().unwrap_or("");
        let args: Vec<&str> = parts.collect();

        match keyword {
            "color" => parse_color_args(&args).map_or(TagKind::Unknown, TagKind::Color),
            "outline" => parse_outline_args(&args).unwrap_or(TagKind::Unknown),
            "center" if args.is_empty() => TagKind::Center,
            "right" if args.is_empty() => TagKind::Right,
            _ => TagKind::Unknown,
        }
    }

    pub fn is_closing(&self) -> bool {
        matches!(self, TagKind::Closing)
    }
}

/// `#hex` or `r g b [a]`. Alpha that fails to parse falls back to opaque.
fn parse_color_args(args: &[&str]) -> Option<Color> {
    let first = args.first()?;
    if first.starts_with('#') {
        return Color::from_hex(first);
    }

    if args.len() < 3 {
        return None;
    }
    let r = args[0].parse::<u8>().ok()?;
    let g = args[1].parse::<u8>().ok()?;
    let b = args[2].parse::<u8>().ok()?;
    let a = args
        .get(3)
        .and_then(|a| a.parse::<u8>().ok())
        .unwrap_or(255);
    Some(Color(r, g, b, a))
}

fn parse_outline_args(args: &[&str]) -> Option<TagKind> {
    const SIZE_ARG: &str = "size=";

    let color = parse_color_args(args)?;
    let size_arg = args.iter().find_map(|a| a.strip_prefix(SIZE_ARG))?;
    let size = match size_arg.parse::<i32>() {
        Ok(n) => n as f32,
        Err(_) => 1.0,
    };
    Some(TagKind::Outline { color, size })
}

/// Byte range `[start, end)` a tag applies to.
///
/// The scope ends at the nearest following closing tag that is not
/// consumed by a tag opened in between, or at the end of the text.
pub fn tag_scope(tags: &[TagDefinition], tag_idx: usize, text_len: usize) -> (usize, usize) {
    let tag = &tags[tag_idx];
    let start = tag.content_start_index();

    let mut depth = 0usize;
    for next in &tags[tag_idx + 1..] {
        if next.kind.is_closing() {
            if depth == 0 {
                return (start, next.open_bracket_index());
            }
            depth -= 1;
        } else {
            depth += 1;
        }
    }
    (start, text_len)
}

/// Apply every tag to the blocks fully inside its scope.
pub fn apply_tags(tags: &[TagDefinition], blocks: &mut [TextBlock], text_len: usize) {
    for (i, tag) in tags.iter().enumerate() {
        if matches!(tag.kind, TagKind::Closing | TagKind::Unknown) {
            continue;
        }

        let (start, end) = tag_scope(tags, i, text_len);
        for block in blocks.iter_mut() {
            if block.skip {
                continue;
            }
            if start <= block.start_index && block.end_index() <= end {
                apply_tag(tag, start, block);
            }
        }
    }
}

fn apply_tag(tag: &TagDefinition, scope_start: usize, block: &mut TextBlock) {
    let first = scope_start == block.start_index;
    match tag.kind {
        TagKind::Color(color) => {
            block.color = color;
            block.use_default_color = false;
        }
        TagKind::Outline { color, size } => {
            block.text_effect = TextEffect::Outline;
            block.effect_color = color;
            block.effect_param = size;
        }
        TagKind::Center => {
            block.special_layout = if first {
                SpecialLayout::CenterStart
            } else {
                SpecialLayout::CenterContinue
            };
        }
        TagKind::Right => {
            block.special_layout = if first {
                SpecialLayout::RightStart
            } else {
                SpecialLayout::RightContinue
            };
        }
        TagKind::Closing | TagKind::Unknown => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::richtext::tokenizer::scan_tags;

    #[test]
    fn parse_tag_kinds() {
        assert_eq!(TagKind::parse("/"), TagKind::Closing);
        assert_eq!(TagKind::parse("color 255 0 0"), TagKind::Color(Color(255, 0, 0, 255)));
        assert_eq!(TagKind::parse("color 1 2 3 4"), TagKind::Color(Color(1, 2, 3, 4)));
        assert_eq!(TagKind::parse("color #00ff00"), TagKind::Color(Color(0, 255, 0, 255)));
        assert_eq!(TagKind::parse("center"), TagKind::Center);
        assert_eq!(TagKind::parse("right"), TagKind::Right);
        assert_eq!(TagKind::parse("bold"), TagKind::Unknown);
        assert_eq!(TagKind::parse(""), TagKind::Unknown);
    }

    #[test]
    fn parse_bad_color_args_is_unknown() {
        assert_eq!(TagKind::parse("color"), TagKind::Unknown);
        assert_eq!(TagKind::parse("color 1 2"), TagKind::Unknown);
        assert_eq!(TagKind::parse("color red green blue"), TagKind::Unknown);
        assert_eq!(TagKind::parse("color #12"), TagKind::Unknown);
        assert_eq!(TagKind::parse("colorful"), TagKind::Unknown);
    }

    #[test]
    fn parse_outline() {
        assert_eq!(
            TagKind::parse("outline 255 0 0 size=3"),
            TagKind::Outline { color: Color(255, 0, 0, 255), size: 3.0 }
        );
        assert_eq!(
            TagKind::parse("outline #000000 size=abc"),
            TagKind::Outline { color: Color::BLACK, size: 1.0 }
        );
        // size= は必須
        assert_eq!(TagKind::parse("outline #000000"), TagKind::Unknown);
    }

    #[test]
    fn scope_skips_nested_closers() {
        let text = "<color #fff>a<center>b</>c</>d";
        let out = scan_tags(text);
        let (start, end) = tag_scope(&out.tags, 0, text.len());
        assert_eq!(&text[start..end], "a<center>b</>c");
        let (start, end) = tag_scope(&out.tags, 1, text.len());
        assert_eq!(&text[start..end], "b");
    }

    #[test]
    fn unclosed_scope_runs_to_end() {
        let text = "x<color #fff>yz";
        let out = scan_tags(text);
        let (start, end) = tag_scope(&out.tags, 0, text.len());
        assert_eq!(&text[start..end], "yz");
    }

    #[test]
    fn apply_marks_run_start_and_continuation() {
        let text = "<center>ab\ncd</>";
        let mut out = scan_tags(text);
        crate::engine::richtext::tokenizer::split_newlines(text, &mut out.blocks);
        apply_tags(&out.tags, &mut out.blocks, text.len());
        let layouts: Vec<SpecialLayout> = out
            .blocks
            .iter()
            .filter(|b| b.length > 0)
            .map(|b| b.special_layout)
            .collect();
        assert_eq!(
            layouts,
            vec![SpecialLayout::CenterStart, SpecialLayout::CenterContinue]
        );
    }
}
