//! Horizontal paging layout.
//!
//! Every page owns a slot exactly one viewport wide. The page itself is the
//! viewport width minus the separator and sits flush with the trailing edge of
//! its slot, so the separator shows up as a gap on the leading side of every
//! page instead of being inserted as extra content.

use std::ops::Range;

use frameme_ui_graphics::{Point, Rect, Size};

use crate::PageIndex;

/// Size and position of one page slot, as produced by [`PagingLayout`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageLayoutAttributes {
    pub index: PageIndex,
    pub size: Size,
    pub center: Point,
}

impl PageLayoutAttributes {
    pub fn frame(&self) -> Rect {
        Rect::from_center_size(self.center, self.size)
    }
}

/// Lays pages out left to right in a single horizontal strip.
///
/// The layout is prepared against the bounds of the scrolling surface. It has
/// to be prepared again on every bounds change, not only the first one,
/// because the strip re-flows on rotation and resize.
#[derive(Clone, Debug, Default)]
pub struct PagingLayout {
    separator_width: f32,
    viewport_size: Size,
    item_size: Size,
}

impl PagingLayout {
    pub fn new(separator_width: f32) -> Self {
        Self {
            separator_width: sanitize_separator(separator_width),
            ..Self::default()
        }
    }

    pub fn separator_width(&self) -> f32 {
        self.separator_width
    }

    /// Bounds the layout was last prepared against.
    pub fn viewport_size(&self) -> Size {
        self.viewport_size
    }

    /// Size shared by every page, derived from the prepared bounds.
    pub fn item_size(&self) -> Size {
        self.item_size
    }

    /// Recomputes the item size for `viewport_size`.
    pub fn prepare(&mut self, viewport_size: Size, separator_width: f32) {
        self.separator_width = sanitize_separator(separator_width);
        self.viewport_size = viewport_size;
        self.item_size = item_size_for(viewport_size, self.separator_width);
        if self.item_size.is_empty() {
            log::warn!(
                "PagingLayout: degenerate viewport {:?} with separator {}, pages collapse to zero size",
                viewport_size,
                self.separator_width
            );
        }
    }

    /// Any bounds change re-flows the strip.
    pub fn should_invalidate_for_bounds_change(&self, _new_bounds: Rect) -> bool {
        true
    }

    /// Total scrollable size for `page_count` pages.
    pub fn content_extent(page_count: usize, viewport_size: Size) -> Size {
        let width = viewport_size.width * page_count as f32;
        if !width.is_finite() || width <= 0.0 {
            return Size::new(0.0, viewport_size.height.max(0.0));
        }
        Size::new(width, viewport_size.height)
    }

    /// Frame of page `index` in content coordinates.
    pub fn frame_for_page(index: usize, viewport_size: Size, separator_width: f32) -> Rect {
        let separator_width = sanitize_separator(separator_width);
        let size = item_size_for(viewport_size, separator_width);
        if size.is_empty() {
            return Rect::ZERO;
        }
        Rect::from_center_size(page_center(index, viewport_size, separator_width), size)
    }

    /// Attributes for `index` using the prepared item size.
    pub fn attributes_for_page(&self, index: PageIndex) -> PageLayoutAttributes {
        let (size, center) = if self.item_size.is_empty() {
            (Size::ZERO, Point::ZERO)
        } else {
            (
                self.item_size,
                page_center(index.row, self.viewport_size, self.separator_width),
            )
        };
        PageLayoutAttributes {
            index,
            size,
            center,
        }
    }

    /// Content size for `page_count` pages in the prepared bounds.
    pub fn content_size(&self, page_count: usize) -> Size {
        Self::content_extent(page_count, self.viewport_size)
    }

    /// Attributes for every page of the strip.
    ///
    /// `rect` is accepted for parity with the host's query but does not cull:
    /// one entry comes back per page.
    pub fn attributes_in_rect(&self, _rect: Rect, page_count: usize) -> Vec<PageLayoutAttributes> {
        (0..page_count)
            .map(|row| self.attributes_for_page(PageIndex::row(row)))
            .collect()
    }

    /// One `(index, frame)` pair per page, in page order.
    pub fn frames_for_visible_range(&self, rect: Rect, page_count: usize) -> Vec<(PageIndex, Rect)> {
        self.attributes_in_rect(rect, page_count)
            .into_iter()
            .map(|attributes| (attributes.index, attributes.frame()))
            .collect()
    }

    /// Rows whose frame actually overlaps `rect`.
    ///
    /// Page `i` spans `[i * w + separator, (i + 1) * w)` where `w` is the
    /// prepared viewport width, which lets the range be computed directly.
    pub fn visible_pages(&self, rect: Rect, page_count: usize) -> Range<usize> {
        let slot = self.viewport_size.width;
        if self.item_size.is_empty() || rect.is_empty() || !(slot > 0.0) || page_count == 0 {
            return 0..0;
        }
        let first = (rect.x / slot).floor().max(0.0);
        let end = ((rect.max_x() - self.separator_width) / slot).ceil().max(0.0);
        let first = (first as usize).min(page_count);
        let end = (end as usize).min(page_count);
        if first >= end {
            return 0..0;
        }
        first..end
    }
}

fn sanitize_separator(separator_width: f32) -> f32 {
    if separator_width.is_finite() {
        separator_width.max(0.0)
    } else {
        0.0
    }
}

fn item_size_for(viewport_size: Size, separator_width: f32) -> Size {
    let width = viewport_size.width - separator_width;
    if !(width > 0.0) || !width.is_finite() || !(viewport_size.height > 0.0) {
        return Size::ZERO;
    }
    Size::new(width, viewport_size.height)
}

fn page_center(index: usize, viewport_size: Size, separator_width: f32) -> Point {
    let width = viewport_size.width;
    Point::new(
        (index as f32 + 1.0) * width - (width - separator_width) / 2.0,
        viewport_size.height / 2.0,
    )
}

#[cfg(test)]
#[path = "tests/paging_layout_tests.rs"]
mod tests;
