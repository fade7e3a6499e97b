//! Tests for the viewport cursor state machine.
//!
//! All tests use 9 rows unless stated otherwise.

#![cfg(test)]

use super::Viewport;
use crate::model::{NavInput, NavOutcome};

const ROWS: usize = 9;

/// Build a viewport at an explicit position (must already be valid).
fn at(cursor: usize, scroll_offset: usize) -> Viewport {
    Viewport {
        cursor,
        scroll_offset,
        rows: ROWS,
    }
}

fn assert_invariants(v: &Viewport, total: usize) {
    assert!(
        v.scroll_offset() <= total.saturating_sub(v.rows()),
        "scroll_offset {} out of range for total {}",
        v.scroll_offset(),
        total
    );
    if total > 0 {
        assert!(
            v.cursor() < v.rows().min(total),
            "cursor {} out of range for total {}",
            v.cursor(),
            total
        );
        assert!(v.absolute_index() < total);
    }
}

// ===== Opening / move_to_end =====

#[test]
fn open_with_fewer_lines_than_rows_selects_last_line() {
    let v = Viewport::opened(ROWS, 3);
    assert_eq!(v.cursor(), 2);
    assert_eq!(v.scroll_offset(), 0);

    let lines = ["a", "b", "c"];
    assert_eq!(v.visible_slice(&lines), &lines[..]);
}

#[test]
fn open_with_more_lines_than_rows_shows_tail() {
    let v = Viewport::opened(ROWS, 20);
    assert_eq!(v.scroll_offset(), 11);
    assert_eq!(v.cursor(), 8);

    let lines: Vec<usize> = (0..20).collect();
    assert_eq!(v.visible_slice(&lines), &lines[11..20]);
}

#[test]
fn open_with_exactly_rows_lines() {
    let v = Viewport::opened(ROWS, ROWS);
    assert_eq!(v.cursor(), 8);
    assert_eq!(v.scroll_offset(), 0);
}

#[test]
fn open_empty_list() {
    let v = Viewport::opened(ROWS, 0);
    assert_eq!(v.cursor(), 0);
    assert_eq!(v.scroll_offset(), 0);
    let empty: [&str; 0] = [];
    assert!(v.visible_slice(&empty).is_empty());
}

#[test]
fn move_to_end_is_idempotent() {
    let mut v = at(0, 0);
    v.move_to_end(42);
    let first = v;
    v.move_to_end(42);
    assert_eq!(v, first);
}

#[test]
fn zero_rows_is_treated_as_one() {
    let v = Viewport::opened(0, 5);
    assert_eq!(v.rows(), 1);
    assert_eq!(v.cursor(), 0);
    assert_eq!(v.scroll_offset(), 4);
}

// ===== UP =====

#[test]
fn up_moves_cursor_within_window() {
    let mut v = at(4, 10);
    assert_eq!(v.navigate(NavInput::Up, 30), NavOutcome::Moved);
    assert_eq!(v, at(3, 10));
}

#[test]
fn up_at_top_row_scrolls() {
    let mut v = at(0, 10);
    assert_eq!(v.navigate(NavInput::Up, 30), NavOutcome::Moved);
    assert_eq!(v, at(0, 9));
}

#[test]
fn up_at_first_line_is_unhandled() {
    let mut v = at(0, 0);
    assert_eq!(v.navigate(NavInput::Up, 30), NavOutcome::Unhandled);
    assert_eq!(v, at(0, 0));
}

// ===== DOWN =====

#[test]
fn down_moves_cursor_within_window() {
    let mut v = at(3, 0);
    assert_eq!(v.navigate(NavInput::Down, 30), NavOutcome::Moved);
    assert_eq!(v, at(4, 0));
}

#[test]
fn down_at_bottom_row_scrolls() {
    let mut v = at(8, 5);
    assert_eq!(v.navigate(NavInput::Down, 30), NavOutcome::Moved);
    assert_eq!(v, at(8, 6));
}

#[test]
fn down_at_last_line_is_unhandled() {
    let mut v = Viewport::opened(ROWS, 30);
    let before = v;
    assert_eq!(v.navigate(NavInput::Down, 30), NavOutcome::Unhandled);
    assert_eq!(v, before);
}

#[test]
fn down_in_short_list_stops_at_last_line() {
    let mut v = at(1, 0);
    assert_eq!(v.navigate(NavInput::Down, 3), NavOutcome::Moved);
    assert_eq!(v.navigate(NavInput::Down, 3), NavOutcome::Unhandled);
    assert_eq!(v, at(2, 0));
}

// ===== LEFT (page back) =====

#[test]
fn left_pages_back_by_rows_minus_one() {
    let mut v = at(5, 20);
    assert_eq!(v.navigate(NavInput::Left, 40), NavOutcome::Moved);
    assert_eq!(v, at(0, 12));
}

#[test]
fn left_near_top_jumps_to_first_line() {
    let mut v = at(5, 3);
    assert_eq!(v.navigate(NavInput::Left, 40), NavOutcome::Moved);
    assert_eq!(v, at(0, 0));
}

#[test]
fn left_with_scroll_exactly_one_page_lands_on_zero() {
    let mut v = at(2, 8);
    v.navigate(NavInput::Left, 40);
    assert_eq!(v, at(0, 0));
}

#[test]
fn left_at_first_line_is_unhandled() {
    let mut v = at(0, 0);
    assert_eq!(v.navigate(NavInput::Left, 40), NavOutcome::Unhandled);
}

// ===== RIGHT (page forward) =====

#[test]
fn right_from_top_pages_forward() {
    let mut v = at(0, 0);
    // 0 + 9 + 8 = 17 < 30
    assert_eq!(v.navigate(NavInput::Right, 30), NavOutcome::Moved);
    assert_eq!(v, at(8, 8));
}

#[test]
fn right_near_end_jumps_to_last_page() {
    let mut v = at(0, 15);
    // 15 + 17 = 32 >= 30
    assert_eq!(v.navigate(NavInput::Right, 30), NavOutcome::Moved);
    assert_eq!(v, at(8, 21));
}

#[test]
fn right_at_end_is_unhandled() {
    let mut v = Viewport::opened(ROWS, 30);
    assert_eq!(v.navigate(NavInput::Right, 30), NavOutcome::Unhandled);
}

#[test]
fn right_in_short_list_selects_last_line() {
    let mut v = at(0, 0);
    assert_eq!(v.navigate(NavInput::Right, 4), NavOutcome::Moved);
    assert_eq!(v, at(3, 0));
    assert_invariants(&v, 4);
}

// ===== CANCEL and empty list =====

#[test]
fn cancel_closes_without_moving() {
    let mut v = at(3, 7);
    assert_eq!(v.navigate(NavInput::Cancel, 30), NavOutcome::Closed);
    assert_eq!(v, at(3, 7));
}

#[test]
fn cancel_closes_even_when_empty() {
    let mut v = Viewport::opened(ROWS, 0);
    assert_eq!(v.navigate(NavInput::Cancel, 0), NavOutcome::Closed);
}

#[test]
fn directions_on_empty_list_are_unhandled() {
    for input in [NavInput::Up, NavInput::Down, NavInput::Left, NavInput::Right] {
        let mut v = Viewport::opened(ROWS, 0);
        assert_eq!(v.navigate(input, 0), NavOutcome::Unhandled, "{input:?}");
        assert_eq!(v, at(0, 0));
    }
}

// ===== Round trips and clamping =====

#[test]
fn walk_from_end_to_start_and_back() {
    let total = 25;
    let mut v = Viewport::opened(ROWS, total);

    for _ in 0..total - 1 {
        assert_eq!(v.navigate(NavInput::Up, total), NavOutcome::Moved);
        assert_invariants(&v, total);
    }
    assert_eq!(v.absolute_index(), 0);
    assert_eq!(v.navigate(NavInput::Up, total), NavOutcome::Unhandled);

    for _ in 0..total - 1 {
        assert_eq!(v.navigate(NavInput::Down, total), NavOutcome::Moved);
        assert_invariants(&v, total);
    }
    assert_eq!(v.absolute_index(), total - 1);
}

#[test]
fn clamp_pulls_position_into_shrunken_list() {
    let mut v = at(8, 40);
    v.clamp(12);
    assert_eq!(v, at(8, 3));
    v.clamp(4);
    assert_eq!(v, at(3, 0));
    v.clamp(0);
    assert_eq!(v, at(0, 0));
}

#[test]
fn visible_range_never_exceeds_rows() {
    let v = at(0, 5);
    assert_eq!(v.visible_range(100), 5..14);
    assert_eq!(v.visible_range(8), 5..8);
}
