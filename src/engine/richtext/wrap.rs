//! Greedy word wrapping over text blocks.
//!
//! Blocks that overflow the current line are split into a fitting prefix
//! and a `newline` remainder, which is evaluated again on the next pass of
//! the loop. Tiers, in order:
//!
//! 1. the block fits as-is
//! 2. split at the last word break that still fits
//! 3. move the whole block to a new line
//! 4. split between characters, keeping at least one character

use crate::engine::bridge::text::GlyphMetricsProvider;

use super::error::LayoutError;
use super::measure::measure_str_width;
use super::types::TextBlock;

const WORD_BREAK_CHARS: [char; 3] = [' ', '\n', '-'];

pub struct WrapOptions {
    pub wrap_width: f32,
    /// Drop the space a line was broken at from the block before it
    pub trim_break_space: bool,
    pub max_blocks: usize,
}

pub fn wrap_blocks(
    text: &str,
    blocks: &mut Vec<TextBlock>,
    metrics: &dyn GlyphMetricsProvider,
    options: &WrapOptions,
) -> Result<(), LayoutError> {
    let wrap_width = options.wrap_width;
    let mut size_on_line: f32 = 0.0;

    let mut i = 0;
    while i < blocks.len() {
        let mut block = blocks[i];
        if block.newline {
            size_on_line = 0.0;
        }

        let block_str = block.block_str(text);
        let width = measure_str_width(block_str, metrics);

        // 1. そのまま収まる
        if size_on_line + width < wrap_width {
            size_on_line += width;
            i += 1;
            continue;
        }

        // 2. 単語区切りで分割できるか
        let mut split_at = last_fitting_word_break(block_str, size_on_line, metrics, wrap_width);

        if split_at == 0 {
            // 3. ブロックごと次の行へ
            if width < wrap_width {
                block.newline = true;
                blocks[i] = block;
                size_on_line = width;
                i += 1;
                continue;
            }

            if block_str.is_empty() {
                i += 1;
                continue;
            }

            // 4. 文字単位で分割
            split_at = last_fitting_char_end(block_str, size_on_line, width, metrics, wrap_width);
        }

        let length_to_end = block.length - split_at;
        block.length = split_at;
        block.skip = split_at == 1 && block_str.starts_with(' ');
        if options.trim_break_space && text[..block.end_index()].ends_with(' ') {
            block.length -= 1;
        }
        blocks[i] = block;

        if length_to_end > 0 {
            let mut tail = TextBlock::new(block.start_index + split_at, length_to_end);
            tail.newline = true;
            blocks.insert(i + 1, tail);
        }
        size_on_line += width;

        if blocks.len() > options.max_blocks {
            log::error!(target: "TextLayoutEngine::Wrap", "Block limit {} exceeded, wrapping aborted: {:?}", options.max_blocks, text);
            return Err(LayoutError::BlockLimitExceeded {
                limit: options.max_blocks,
                text_len: text.len(),
            });
        }
        i += 1;
    }

    Ok(())
}

/// Byte offset just past the last break character whose prefix fits,
/// or 0 if none does.
fn last_fitting_word_break(
    block_str: &str,
    size_on_line: f32,
    metrics: &dyn GlyphMetricsProvider,
    wrap_width: f32,
) -> usize {
    let mut next_break = 0;
    let mut last_fit = 0;
    let mut section_width: f32 = 0.0;

    while size_on_line + section_width < wrap_width {
        last_fit = next_break;
        let Some(found) = block_str[next_break..].find(WORD_BREAK_CHARS) else {
            break;
        };
        next_break += found + 1;
        section_width = measure_str_width(&block_str[..next_break], metrics);
    }
    last_fit
}

/// Byte end of the longest character prefix that fits, at least one character.
fn last_fitting_char_end(
    block_str: &str,
    size_on_line: f32,
    block_width: f32,
    metrics: &dyn GlyphMetricsProvider,
    wrap_width: f32,
) -> usize {
    let char_ends: Vec<usize> = block_str
        .char_indices()
        .map(|(idx, ch)| idx + ch.len_utf8())
        .collect();

    let mut chars_fit = char_ends.len();
    let mut section_width = block_width;
    while size_on_line + section_width > wrap_width {
        chars_fit -= 1;
        if chars_fit == 0 {
            break;
        }
        section_width = measure_str_width(&block_str[..char_ends[chars_fit - 1]], metrics);
    }

    // 1 文字も入らない場合でも最低 1 文字は残す
    char_ends[chars_fit.max(1) - 1]
}
