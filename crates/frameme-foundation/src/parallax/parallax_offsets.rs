//! Scroll offset to parallax region math.
//!
//! The scrolling surface is the host view widened by one separator, so a
//! page slot is `surface_width` wide. While swiping, the page that is being
//! uncovered (the left page) has its parallax region pushed right by exactly
//! the distance scrolled, which keeps it visually pinned, and narrowed by the
//! same amount. The incoming right page grows from its leading edge.

/// Horizontal placement of the two parallax regions for one scroll offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxOffsets {
    /// Page whose parallax region gets `left_margin` / `left_width`.
    pub current_index: usize,
    pub left_margin: f32,
    pub left_width: f32,
    pub right_margin: f32,
    pub right_width: f32,
}

impl ParallaxOffsets {
    /// Computes the placement for `content_offset_x`.
    ///
    /// `surface_width` is the width of the scrolling surface (host view width
    /// plus separator). A non-positive or non-finite stride yields the zero
    /// placement rather than a division by zero.
    pub fn compute(content_offset_x: f32, surface_width: f32, separator_width: f32) -> Self {
        let stride = surface_width + separator_width;
        if !(stride > 0.0) || !stride.is_finite() || !content_offset_x.is_finite() {
            log::warn!(
                "ParallaxOffsets: degenerate stride {} (surface {}, separator {}) at offset {}",
                stride,
                surface_width,
                separator_width,
                content_offset_x
            );
            return Self::default();
        }

        let current_index = floor_index(content_offset_x / stride);
        let moved_margin = (content_offset_x + surface_width + separator_width) % stride;
        let width_margin = (content_offset_x + separator_width).abs() % stride;

        let left_margin = if content_offset_x > 0.0 {
            moved_margin
        } else {
            0.0
        };
        let left_width = surface_width + separator_width - width_margin;

        Self {
            current_index,
            left_margin,
            left_width,
            right_margin: 0.0,
            right_width: left_margin - separator_width,
        }
    }
}

/// Page a pager at rest on `content_offset_x` shows.
///
/// Unlike [`ParallaxOffsets::compute`], `viewport_width` here is the host view
/// width, so the stride equals one page slot.
pub fn settled_index(content_offset_x: f32, viewport_width: f32, separator_width: f32) -> usize {
    let stride = viewport_width + separator_width;
    if !(stride > 0.0) || !stride.is_finite() {
        log::warn!(
            "settled_index: degenerate stride {} (viewport {}, separator {})",
            stride,
            viewport_width,
            separator_width
        );
        return 0;
    }
    floor_index(content_offset_x / stride)
}

/// Relative slack for offsets that are an exact multiple of the stride but
/// land a rounding error short of it in `f32`.
const INDEX_EPSILON: f32 = 1e-5;

/// Floors to a page index; negative (overscroll) and NaN clamp to 0.
fn floor_index(position: f32) -> usize {
    let floored = (position + position.abs() * INDEX_EPSILON).floor();
    if floored > 0.0 {
        floored as usize
    } else {
        0
    }
}
