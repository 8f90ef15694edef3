//! Assertion helpers for geometry produced by the pager.

use frameme_foundation::{PageIndex, ParallaxView};
use frameme_ui_graphics::Rect;

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert the horizontal span of a displayed page's parallax region.
pub fn assert_effect_span(view: &ParallaxView, row: usize, x: f32, width: f32) {
    let cell = view
        .displayed_page(PageIndex::row(row))
        .unwrap_or_else(|| panic!("page {} is not displayed", row));
    let frame = cell.parallax_effect_frame();
    assert_approx_eq(frame.x, x, 0.001, &format!("page {} effect x", row));
    assert_approx_eq(frame.width, width, 0.001, &format!("page {} effect width", row));
}

/// Assert that the view caches exactly `rows` (section 0).
pub fn assert_cached_rows(view: &ParallaxView, rows: &[usize]) {
    let cached: Vec<usize> = view.cache().indices().iter().map(|index| index.row).collect();
    assert_eq!(cached, rows, "cached rows");
}
