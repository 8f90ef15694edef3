//! Foundation elements for FrameMe: the parallax pager and its page cache

pub mod parallax;

pub use frameme_ui_graphics::{Point, Rect, Size};
pub use frameme_ui_layout::{PageIndex, PageLayoutAttributes, PagingLayout};
pub use parallax::*;

pub mod prelude {
    pub use crate::parallax::{
        share_page, EmptyPage, NeighborPrefetch, PageCache, PageCell, PageContent, ParallaxConfig,
        ParallaxDataSource, ParallaxDelegate, ParallaxOffsets, ParallaxView, ScrollPhase,
        SharedPage,
    };
    pub use frameme_ui_graphics::prelude::*;
    pub use frameme_ui_layout::prelude::*;
}
