//! Horizontally paging parallax view.
//!
//! A headless take on a "swipe between articles" pager: every page slides
//! under its neighbor while the page being swiped away keeps its parallax
//! region pinned, so the outgoing image appears to stay put while it is
//! uncovered.
//!
//! # Architecture
//!
//! - [`ParallaxDataSource`] / [`ParallaxDelegate`] - host capabilities, held weakly
//! - [`PageContent`] - page content with an optional parallax sub-region
//! - [`PageCache`] - first-write-wins page memoization, no eviction
//! - [`NeighborPrefetch`] - which neighbors get materialized on display
//! - [`ParallaxOffsets`] - scroll offset to sub-region frames
//! - [`ParallaxView`] - the engine tying the above to a [`frameme_ui_layout::PagingLayout`]
//!
//! # Example
//!
//! ```rust,ignore
//! let source = Rc::new(ArticleSource::new(articles));
//! let mut view = ParallaxView::new(Rect::new(0.0, 0.0, 320.0, 480.0));
//! view.set_data_source(&source);
//! view.scroll_to_offset(160.0);
//! view.on_scroll_ended(321.0, 320.0);
//! ```

mod config;
mod data_source;
mod page_cache;
mod page_content;
mod parallax_offsets;
mod parallax_view;
mod prefetch;

pub use config::*;
pub use data_source::*;
pub use page_cache::*;
pub use page_content::*;
pub use parallax_offsets::*;
pub use parallax_view::*;
pub use prefetch::*;
