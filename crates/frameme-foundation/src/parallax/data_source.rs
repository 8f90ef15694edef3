//! Capabilities a host provides to the parallax view.

use frameme_ui_layout::PageIndex;

use super::SharedPage;

/// Feeds pages to a [`super::ParallaxView`].
///
/// `content_for_page` acts as a factory: the view may ask for the same index
/// more than once and does not expect the source to memoize.
pub trait ParallaxDataSource {
    /// Number of pages in the pager.
    fn page_count(&self) -> usize;

    fn content_for_page(&self, index: PageIndex) -> SharedPage;
}

/// Observes a [`super::ParallaxView`].
///
/// Callbacks run while the view is mutably borrowed; they must not call back
/// into the view.
pub trait ParallaxDelegate {
    /// The pager came to rest on `index`.
    fn on_settled(&self, index: usize);
}
