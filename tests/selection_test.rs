mod utils;

use orinium_text::engine::richtext::{Rect, Visit};
use utils::{ADVANCE, LINE_HEIGHT, run_engine};

#[test]
fn selection_max_counts_line_end_slots() {
    let engine = run_engine("ab\ncd", None);
    let layout = engine.layout();

    // a b ⏎ c d ⏎
    assert_eq!(layout.selection_index_max(), 5);
}

#[test]
fn selection_round_trip() {
    for text in [
        "ab\ncd",
        "a<color #fff>b</>c",
        "x<center>y\n\nz</>",
        "The quick brown fox jumped",
        "abcd<color #fff> efgh</>",
        "",
    ] {
        for wrap in [None, Some(150.0)] {
            let engine = run_engine(text, wrap);
            let layout = engine.layout();
            for i in 0..=layout.selection_index_max() {
                let s = layout.string_index_from_selection_index(i);
                assert_eq!(
                    layout.selection_index_from_string_index(s),
                    i,
                    "text {text:?} wrap {wrap:?} index {i} -> string {s}"
                );
            }
        }
    }
}

#[test]
fn string_indices_skip_tag_bytes() {
    let text = "a<color #fff>b</>c";
    let engine = run_engine(text, None);
    let layout = engine.layout();

    assert_eq!(layout.string_index_from_selection_index(0), 0);
    assert_eq!(layout.string_index_from_selection_index(1), text.find('b').expect("b"));
    assert_eq!(layout.string_index_from_selection_index(2), text.find('c').expect("c"));
    assert_eq!(layout.string_index_from_selection_index(3), text.len());

    // タグ内のオフセットは次の表示文字に寄せる
    assert_eq!(layout.selection_index_from_string_index(3), 1);
    assert_eq!(layout.selection_index_from_string_index(999), 3);
}

#[test]
fn out_of_range_indices_clamp() {
    let engine = run_engine("ab\ncd", None);
    let layout = engine.layout();

    assert_eq!(layout.line_of_selected_index(100), (1, 2));
    assert_eq!(layout.bound_of_selection_index(100), layout.bound_of_selection_index(5));
    assert_eq!(layout.string_index_from_selection_index(100), 5);
}

#[test]
fn out_of_range_index_clamps_when_moving_lines() {
    let engine = run_engine("ab\ncd", None);
    let layout = engine.layout();

    assert_eq!(layout.selection_index_max(), 5);
    // 次の行が無いので末尾に丸められる
    assert_eq!(layout.selection_index_on_other_line(999, 1), 5);
    assert_eq!(layout.selection_index_on_other_line(999, -1), 2);
}

#[test]
fn line_and_column() {
    let engine = run_engine("ab\ncd", None);
    let layout = engine.layout();

    assert_eq!(layout.line_of_selected_index(0), (0, 0));
    assert_eq!(layout.line_of_selected_index(2), (0, 2));
    assert_eq!(layout.line_of_selected_index(4), (1, 1));
}

#[test]
fn move_between_lines() {
    let engine = run_engine("ab\ncd", None);
    let layout = engine.layout();

    assert_eq!(layout.selection_index_on_other_line(4, -1), 1);
    assert_eq!(layout.selection_index_on_other_line(1, 1), 4);
    // 上に行がなければ最初の行のまま
    assert_eq!(layout.selection_index_on_other_line(1, -1), 1);
    // 下に行がなければそのまま
    assert_eq!(layout.selection_index_on_other_line(4, 1), 4);
}

#[test]
fn move_to_shorter_line_lands_on_line_end() {
    let engine = run_engine("abcd\nx\nabcd", None);
    let layout = engine.layout();

    // d (3) -> 2 行目の末尾スロット (6)
    assert_eq!(layout.selection_index_on_other_line(3, 1), 6);
    assert_eq!(layout.selection_index_on_other_line(6, 1), 8);
}

#[test]
fn bounds_follow_pen() {
    let engine = run_engine("ab\ncd", None);
    let layout = engine.layout();

    assert_eq!(
        layout.bound_of_selection_index(1),
        Rect::new(ADVANCE, 0.0, ADVANCE, LINE_HEIGHT)
    );
    assert_eq!(
        layout.bound_of_selection_index(4),
        Rect::new(ADVANCE, LINE_HEIGHT, ADVANCE, LINE_HEIGHT)
    );
    // 行末スロットは空白 1 文字分
    assert_eq!(
        layout.bound_of_selection_index(2),
        Rect::new(2.0 * ADVANCE, 0.0, ADVANCE, LINE_HEIGHT)
    );
}

#[test]
fn hit_test_inside_and_nearest() {
    let engine = run_engine("ab\ncd", None);
    let layout = engine.layout();

    let hit = layout.selection_index_from_position((15.0, 5.0));
    assert_eq!(hit.index, 1);
    assert_eq!(hit.inside, Some(1));

    let hit = layout.selection_index_from_position((500.0, 30.0));
    assert_eq!(hit.index, 5);
    assert_eq!(hit.inside, None);
    assert_eq!(hit.distance, 500.0 - 25.0);

    let hit = layout.selection_index_from_position((-50.0, -50.0));
    assert_eq!(hit.index, 0);
    assert_eq!(hit.inside, None);
}

#[test]
fn hit_test_empty_text() {
    let engine = run_engine("", None);
    let hit = engine.layout().selection_index_from_position((100.0, 100.0));
    assert_eq!(hit.index, 0);
}

#[test]
fn selection_rects_per_line() {
    let engine = run_engine("ab\ncd", None);
    let layout = engine.layout();

    assert_eq!(
        layout.for_each_line_between_selection_indices(0, 1),
        vec![Rect::new(0.0, 0.0, 2.0 * ADVANCE, LINE_HEIGHT)]
    );

    // 逆順で渡しても同じ
    assert_eq!(
        layout.for_each_line_between_selection_indices(4, 1),
        vec![
            Rect::new(ADVANCE, 0.0, 2.0 * ADVANCE, LINE_HEIGHT),
            Rect::new(0.0, LINE_HEIGHT, 2.0 * ADVANCE, LINE_HEIGHT),
        ]
    );
}

#[test]
fn selection_rects_span_middle_lines_fully() {
    let engine = run_engine("ab\ncdef\ngh", None);
    let layout = engine.layout();

    let rects = layout.for_each_line_between_selection_indices(1, 9);
    assert_eq!(rects.len(), 3);
    // 中間の行は行末スロットまで含む
    assert_eq!(rects[1], Rect::new(0.0, LINE_HEIGHT, 5.0 * ADVANCE, LINE_HEIGHT));
}

#[test]
fn traversal_visits_each_slot_once() {
    let engine = run_engine("a<color #fff>bc</>\nd", None);
    let layout = engine.layout();

    let mut seen = Vec::new();
    layout.for_each_slot(|slot| {
        seen.push((slot.index, slot.line, slot.column, slot.line_end));
        Visit::<()>::Continue
    });
    assert_eq!(
        seen,
        vec![
            (0, 0, 0, false),
            (1, 0, 1, false),
            (2, 0, 2, false),
            (3, 0, 3, true),
            (4, 1, 0, false),
            (5, 1, 1, true),
        ]
    );
}
