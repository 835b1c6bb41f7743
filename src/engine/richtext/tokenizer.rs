//! Tag scanning and newline splitting.
//!
//! The scanner walks the source once and produces the flat list of
//! `<...>` tag definitions together with the plain-text blocks between
//! them. Bytes of recognised tags never end up inside a block.

use super::tag::TagKind;
use super::types::{TagDefinition, TextBlock};

/// Result of one scan over the source string.
#[derive(Debug, Default)]
pub struct ScanOutput {
    pub blocks: Vec<TextBlock>,
    pub tags: Vec<TagDefinition>,
}

/// Split `text` into text blocks and tag definitions.
///
/// Unterminated tags (`<` without `>`) and tags that do not parse to a
/// known kind are not emitted; their bytes stay in the open block as
/// literal text.
pub fn scan_tags(text: &str) -> ScanOutput {
    let mut out = ScanOutput::default();

    // `<` の位置（タグ名の追跡中のみ Some）
    let mut tag_open: Option<usize> = None;
    let mut block_start = 0;

    for (idx, byte) in text.bytes().enumerate() {
        match byte {
            b'<' => {
                // 二つ目の `<` は追跡をやり直す
                tag_open = Some(idx);
            }
            b'>' => {
                let Some(open) = tag_open else {
                    continue;
                };

                let name_start = open + 1;
                let name_length = idx - name_start;
                let kind = TagKind::parse(&text[name_start..idx]);
                log::debug!(target: "TagScanner::Tag", "Tag <{}> at {}: {:?}", &text[name_start..idx], open, kind);

                // 不正なタグは文字として残す。`<` の追跡は続ける
                if kind == TagKind::Unknown {
                    continue;
                }

                out.blocks
                    .push(TextBlock::new(block_start, open - block_start));
                out.tags.push(TagDefinition {
                    name_start,
                    name_length,
                    kind,
                });
                tag_open = None;
                block_start = idx + 1;
            }
            _ => {}
        }
    }

    if let Some(open) = tag_open {
        log::debug!(target: "TagScanner::Unterminated", "Unterminated tag at {}, kept as text", open);
    }

    // 最後のブロックは長さ 0 でも閉じる
    out.blocks
        .push(TextBlock::new(block_start, text.len() - block_start));
    out
}

/// Split blocks on embedded `\n`. The block following each `\n` begins a
/// new line; the `\n` itself belongs to no block.
pub fn split_newlines(text: &str, blocks: &mut Vec<TextBlock>) {
    let mut i = 0;
    while i < blocks.len() {
        let block = blocks[i];
        if let Some(lf) = block.block_str(text).find('\n') {
            let mut head = block;
            head.length = lf;
            blocks[i] = head;

            let mut tail = TextBlock::new(block.start_index + lf + 1, block.length - lf - 1);
            tail.newline = true;
            blocks.insert(i + 1, tail);
        }
        i += 1;
    }
}
