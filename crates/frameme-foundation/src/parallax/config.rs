use super::NeighborPrefetch;

/// Default gap between pages, in points.
pub const DEFAULT_PAGE_SEPARATOR_WIDTH: f32 = 1.0;

/// Configuration for a [`super::ParallaxView`].
#[derive(Clone, Debug)]
pub struct ParallaxConfig {
    /// Width of the gap shown between adjacent pages.
    pub page_separator_width: f32,

    /// Which neighbors are materialized whenever a page is displayed.
    pub prefetch: NeighborPrefetch,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            page_separator_width: DEFAULT_PAGE_SEPARATOR_WIDTH,
            prefetch: NeighborPrefetch::default(),
        }
    }
}

impl ParallaxConfig {
    pub fn with_page_separator_width(mut self, width: f32) -> Self {
        self.page_separator_width = width;
        self
    }

    pub fn with_prefetch(mut self, prefetch: NeighborPrefetch) -> Self {
        self.prefetch = prefetch;
        self
    }
}
