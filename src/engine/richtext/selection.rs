//! Selection index mapping.
//!
//! A selection index addresses caret positions: one per rendered
//! character plus one trailing slot at the end of every line. Tag bytes and
//! `skip` blocks are never counted.
//!
//! Every query here is a single pass of [`TextLayout::for_each_slot`], so
//! they all share one counting rule.

use super::layout::TextLayout;
use super::types::Rect;

/// One caret-addressable position visited by the traversal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionSlot {
    pub block_idx: usize,
    /// Byte offset into the source; the block end for a trailing slot
    pub string_index: usize,
    pub index: usize,
    pub line: usize,
    pub column: usize,
    /// The virtual end-of-line position
    pub line_end: bool,
    /// Unaligned glyph box of the slot
    pub rect: Rect,
}

/// What the traversal does after visiting a slot.
pub enum Visit<T> {
    Continue,
    /// Remember `T` as the result and keep going
    Store(T),
    /// Stop and return `T`
    Break(T),
    /// Stop and return the last stored value
    BreakWithStored,
}

/// Result of hit-testing a point against the slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionHit {
    /// Slot containing the point, else the closest one, else 0
    pub index: usize,
    /// Slot whose box contains the point
    pub inside: Option<usize>,
    /// Horizontal distance from the point to the closest slot's center
    pub distance: f32,
}

impl TextLayout {
    /// Visit every selection slot in order until the visitor stops.
    pub fn for_each_slot<T, F>(&self, mut visitor: F) -> Option<T>
    where
        F: FnMut(&SelectionSlot) -> Visit<T>,
    {
        let metrics = self.metrics.as_ref();
        let line_height = metrics.line_height();
        let line_end_advance = metrics.advance(' ');

        let mut stored = None;
        let mut index = 0;
        let mut line = 0;
        let mut column = 0;
        let (mut pen_x, mut pen_y) = (0.0f32, 0.0f32);

        for (block_idx, block) in self.blocks.iter().enumerate() {
            if block.newline {
                line += 1;
                column = 0;
                pen_x = 0.0;
                pen_y += line_height;
            }

            let last_on_line = self
                .blocks
                .get(block_idx + 1)
                .is_none_or(|next| next.newline);

            let chars = if block.skip { "" } else { block.block_str(&self.text) };
            let char_slots = chars
                .char_indices()
                .map(|(offset, ch)| (block.start_index + offset, metrics.advance(ch), false));
            let trailing = last_on_line.then_some((block.end_index(), line_end_advance, true));

            for (string_index, advance, line_end) in char_slots.chain(trailing) {
                let slot = SelectionSlot {
                    block_idx,
                    string_index,
                    index,
                    line,
                    column,
                    line_end,
                    rect: Rect::new(pen_x, pen_y, advance, line_height),
                };

                match visitor(&slot) {
                    Visit::Continue => {}
                    Visit::Store(v) => stored = Some(v),
                    Visit::Break(v) => return Some(v),
                    Visit::BreakWithStored => return stored,
                }

                pen_x += advance;
                index += 1;
                column += 1;
            }
        }

        stored
    }

    pub fn selection_index_max(&self) -> usize {
        self.for_each_slot(|slot| Visit::Store(slot.index))
            .unwrap_or(0)
    }

    fn clamp_selection_index(&self, index: usize) -> usize {
        index.min(self.selection_index_max())
    }

    /// Selection index of the first slot at or after `string_index`.
    ///
    /// Offsets inside tags resolve to the next visible character.
    /// Offsets past the last slot resolve to the maximum index.
    pub fn selection_index_from_string_index(&self, string_index: usize) -> usize {
        self.for_each_slot(|slot| {
            if slot.string_index >= string_index {
                Visit::Break(slot.index)
            } else {
                Visit::Store(slot.index)
            }
        })
        .unwrap_or(0)
    }

    pub fn string_index_from_selection_index(&self, index: usize) -> usize {
        let index = self.clamp_selection_index(index);
        let string_index = self
            .for_each_slot(|slot| {
                if slot.index == index {
                    Visit::Break(slot.string_index)
                } else {
                    Visit::Continue
                }
            })
            .unwrap_or(0);

        if string_index > self.text.len() { 0 } else { string_index }
    }

    /// `(line, column)` of a selection index.
    pub fn line_of_selected_index(&self, index: usize) -> (usize, usize) {
        let index = self.clamp_selection_index(index);
        self.for_each_slot(|slot| {
            if slot.index == index {
                Visit::Break((slot.line, slot.column))
            } else {
                Visit::Continue
            }
        })
        .unwrap_or((0, 0))
    }

    /// Index on the line above (`line_delta < 0`) or below, keeping the
    /// column when possible and falling back to the end of a shorter line.
    /// Returns the clamped `index` if there is no such line.
    pub fn selection_index_on_other_line(&self, index: usize, line_delta: isize) -> usize {
        let index = self.clamp_selection_index(index);
        let (line, column) = self.line_of_selected_index(index);
        let other_line = line.saturating_add_signed(line_delta);

        self.for_each_slot(|slot| {
            if slot.line != other_line {
                return if slot.line > other_line {
                    Visit::BreakWithStored
                } else {
                    Visit::Continue
                };
            }
            if slot.column == column {
                Visit::Break(slot.index)
            } else {
                Visit::Store(slot.index)
            }
        })
        .unwrap_or(index)
    }

    pub fn bound_of_selection_index(&self, index: usize) -> Rect {
        let index = self.clamp_selection_index(index);
        self.for_each_slot(|slot| {
            if slot.index == index {
                Visit::Break(slot.rect)
            } else {
                Visit::Continue
            }
        })
        .unwrap_or_default()
    }

    /// Nearest selection index to a point in layout space.
    pub fn selection_index_from_position(&self, point: (f32, f32)) -> SelectionHit {
        let mut inside = None;
        let mut closest = None;
        let mut closest_dx = f32::MAX;
        let mut closest_dy = f32::MAX;

        self.for_each_slot(|slot| {
            if slot.rect.contains(point) {
                inside = Some(slot.index);
            }

            let (cx, cy) = slot.rect.center();
            let dx = (point.0 - cx).abs();
            let dy = (point.1 - cy).abs();
            if dy < closest_dy || (dy == closest_dy && dx < closest_dx) {
                closest = Some(slot.index);
                closest_dx = dx;
                closest_dy = dy;
            }
            Visit::<()>::Continue
        });

        SelectionHit {
            index: inside.or(closest).unwrap_or(0),
            inside,
            distance: if closest.is_some() { closest_dx } else { 0.0 },
        }
    }

    fn first_selection_index_on_line(&self, line: usize) -> Option<usize> {
        self.for_each_slot(|slot| {
            if slot.line == line {
                Visit::Break(slot.index)
            } else {
                Visit::Continue
            }
        })
    }

    fn last_selection_index_on_line(&self, line: usize) -> Option<usize> {
        self.for_each_slot(|slot| {
            if slot.line == line {
                Visit::Store(slot.index)
            } else if slot.line > line {
                Visit::BreakWithStored
            } else {
                Visit::Continue
            }
        })
    }

    /// One rectangle per line covered by the selection between `a` and `b`.
    pub fn for_each_line_between_selection_indices(&self, a: usize, b: usize) -> Vec<Rect> {
        let start = self.clamp_selection_index(a.min(b));
        let end = self.clamp_selection_index(a.max(b));

        let (line_start, _) = self.line_of_selected_index(start);
        let (line_end, _) = self.line_of_selected_index(end);

        let mut rects = Vec::with_capacity(line_end - line_start + 1);
        for line in line_start..=line_end {
            let first = self
                .first_selection_index_on_line(line)
                .unwrap_or(start)
                .max(start);
            let last = self
                .last_selection_index_on_line(line)
                .unwrap_or(end)
                .min(end);

            let first_rect = self.bound_of_selection_index(first);
            let last_rect = self.bound_of_selection_index(last);
            rects.push(Rect::from_corners(
                (first_rect.x, first_rect.y),
                (last_rect.right(), last_rect.bottom()),
            ));
        }
        rects
    }
}
