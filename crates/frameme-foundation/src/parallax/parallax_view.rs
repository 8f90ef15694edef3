//! The parallax paging engine.

use std::rc::{Rc, Weak};

use frameme_ui_graphics::{Rect, Size};
use frameme_ui_layout::{PageIndex, PageLayoutAttributes, PagingLayout};
use rustc_hash::FxHashMap;

use super::{
    settled_index, share_page, EmptyPage, PageCache, PageCell, ParallaxConfig, ParallaxDataSource,
    ParallaxDelegate, ParallaxOffsets, SharedPage,
};

/// Scroll state of a [`ParallaxView`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollPhase {
    #[default]
    Idle,
    Scrolling,
}

/// Horizontally paging view that applies the parallax effect to the two
/// pages around the current scroll position.
///
/// The view is headless: the host reports bounds changes, page display
/// events and scroll offsets, and the view keeps page frames, the page cache
/// and the parallax regions of displayed pages up to date. Data source and
/// delegate are held weakly; the host owns them.
///
/// Either drive it with the low level callbacks ([`Self::content_for_page`],
/// [`Self::will_display_page`], [`Self::on_scroll`], [`Self::on_scroll_ended`])
/// when a scroll container already tracks visibility, or with
/// [`Self::scroll_to_offset`] which does the visibility bookkeeping itself.
pub struct ParallaxView {
    frame: Rect,
    config: ParallaxConfig,
    layout: PagingLayout,
    data_source: Option<Weak<dyn ParallaxDataSource>>,
    delegate: Option<Weak<dyn ParallaxDelegate>>,
    cache: PageCache<SharedPage>,
    displayed: FxHashMap<PageIndex, PageCell>,
    current_index: usize,
    phase: ScrollPhase,
    last_offset_x: f32,
}

impl ParallaxView {
    pub fn new(frame: Rect) -> Self {
        Self::with_config(frame, ParallaxConfig::default())
    }

    pub fn with_config(frame: Rect, config: ParallaxConfig) -> Self {
        let layout = PagingLayout::new(config.page_separator_width);
        let mut view = Self {
            frame,
            config,
            layout,
            data_source: None,
            delegate: None,
            cache: PageCache::new(),
            displayed: FxHashMap::default(),
            current_index: 0,
            phase: ScrollPhase::Idle,
            last_offset_x: 0.0,
        };
        view.prepare_layout();
        view
    }

    // ── Collaborators ────────────────────────────────────────────────────

    pub fn set_data_source<D: ParallaxDataSource + 'static>(&mut self, data_source: &Rc<D>) {
        let weak: Weak<D> = Rc::downgrade(data_source);
        self.data_source = Some(weak);
    }

    pub fn clear_data_source(&mut self) {
        self.data_source = None;
    }

    pub fn set_delegate<D: ParallaxDelegate + 'static>(&mut self, delegate: &Rc<D>) {
        let weak: Weak<D> = Rc::downgrade(delegate);
        self.delegate = Some(weak);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    fn data_source(&self) -> Option<Rc<dyn ParallaxDataSource>> {
        self.data_source.as_ref().and_then(Weak::upgrade)
    }

    fn delegate(&self) -> Option<Rc<dyn ParallaxDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    // ── Geometry ─────────────────────────────────────────────────────────

    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Updates the host frame and re-flows the page strip.
    ///
    /// The next scroll report is applied even if the offset did not change,
    /// since the placement for that offset depends on the old width.
    pub fn set_frame(&mut self, frame: Rect) {
        let surface = Rect::from_size(surface_size(frame.size(), self.separator_width()));
        self.frame = frame;
        if self.layout.should_invalidate_for_bounds_change(surface) {
            self.prepare_layout();
            self.last_offset_x = f32::NAN;
        }
    }

    pub fn page_separator_width(&self) -> f32 {
        self.layout.separator_width()
    }

    pub fn set_page_separator_width(&mut self, width: f32) {
        self.config.page_separator_width = width;
        self.prepare_layout();
        self.last_offset_x = f32::NAN;
    }

    /// Size of the scrolling surface: the frame widened by one separator.
    pub fn surface_size(&self) -> Size {
        surface_size(self.frame.size(), self.separator_width())
    }

    pub fn layout(&self) -> &PagingLayout {
        &self.layout
    }

    pub fn content_size(&self) -> Size {
        self.layout.content_size(self.page_count())
    }

    pub fn layout_attributes_in_rect(&self, rect: Rect) -> Vec<PageLayoutAttributes> {
        self.layout.attributes_in_rect(rect, self.page_count())
    }

    fn separator_width(&self) -> f32 {
        self.layout.separator_width()
    }

    fn prepare_layout(&mut self) {
        let surface = surface_size(self.frame.size(), self.config.page_separator_width);
        self.layout.prepare(surface, self.config.page_separator_width);
        for cell in self.displayed.values_mut() {
            cell.set_frame(self.layout.attributes_for_page(cell.index()).frame());
        }
    }

    // ── Pages ────────────────────────────────────────────────────────────

    /// Number of pages, 0 without a data source.
    pub fn page_count(&self) -> usize {
        self.data_source().map_or(0, |data_source| data_source.page_count())
    }

    /// Content for page `index`.
    ///
    /// A cached page is returned as is and the data source is not consulted.
    /// On a miss the data source produces the content, which is returned
    /// without being cached; caching happens when the page is displayed.
    pub fn content_for_page(&self, index: PageIndex) -> SharedPage {
        let Some(data_source) = self.data_source() else {
            log::debug!("ParallaxView: no data source, page {} gets a placeholder", index);
            return share_page(EmptyPage::new(Rect::from_size(self.layout.item_size())));
        };
        if let Some(cached) = self.cache.get(&index) {
            log::trace!("ParallaxView: page {} found in cache", index);
            return Rc::clone(cached);
        }
        log::trace!("ParallaxView: page {} not cached", index);
        data_source.content_for_page(index)
    }

    /// Records `content` as displayed at `index` and caches it together with
    /// its neighbors.
    pub fn will_display_page(&mut self, content: SharedPage, index: PageIndex) {
        let frame = self.layout.attributes_for_page(index).frame();
        self.displayed
            .insert(index, PageCell::new(index, frame, Rc::clone(&content)));
        self.cache_pages_around(content, index);
    }

    /// Forgets a page that scrolled off screen. Its cache entry stays.
    pub fn did_end_displaying_page(&mut self, index: PageIndex) {
        self.displayed.remove(&index);
    }

    /// Neighbors that are already cached are skipped, so their factory is not
    /// called again.
    fn cache_pages_around(&mut self, content: SharedPage, index: PageIndex) {
        self.cache.put(index, content);

        let Some(data_source) = self.data_source() else {
            return;
        };
        let page_count = data_source.page_count();
        for neighbor in self.config.prefetch.neighbors(index, page_count) {
            if self.cache.contains(&neighbor) {
                continue;
            }
            log::trace!("ParallaxView: prefetching page {} around {}", neighbor, index);
            self.cache.put(neighbor, data_source.content_for_page(neighbor));
        }
    }

    /// Drops the cached content for `index`. Nothing else ever evicts.
    pub fn evict_page(&mut self, index: PageIndex) -> Option<SharedPage> {
        self.cache.remove(&index)
    }

    pub fn cached_page(&self, index: PageIndex) -> Option<SharedPage> {
        self.cache.get(&index).cloned()
    }

    pub fn cache(&self) -> &PageCache<SharedPage> {
        &self.cache
    }

    pub fn displayed_page(&self, index: PageIndex) -> Option<&PageCell> {
        self.displayed.get(&index)
    }

    /// Displayed pages in ascending order.
    pub fn displayed_pages(&self) -> Vec<PageIndex> {
        let mut indices: Vec<PageIndex> = self.displayed.keys().copied().collect();
        indices.sort_unstable();
        indices
    }

    // ── Scrolling ────────────────────────────────────────────────────────

    /// Last page whose leading edge passed the viewport origin.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn scroll_phase(&self) -> ScrollPhase {
        self.phase
    }

    /// Applies the parallax effect for `content_offset_x`.
    ///
    /// `viewport_width` is the host view width. Call on every offset update.
    /// An idle view ignores reports of the offset it already rests on;
    /// anything else starts a scroll. Returns the placement that was applied.
    pub fn on_scroll(
        &mut self,
        content_offset_x: f32,
        viewport_width: f32,
    ) -> Option<ParallaxOffsets> {
        let moved = content_offset_x != self.last_offset_x;
        self.last_offset_x = content_offset_x;
        if self.phase == ScrollPhase::Idle {
            if !moved {
                return None;
            }
            self.phase = ScrollPhase::Scrolling;
        }

        let separator_width = self.separator_width();
        let offsets = ParallaxOffsets::compute(
            content_offset_x,
            viewport_width + separator_width,
            separator_width,
        );
        self.current_index = offsets.current_index;

        let page_count = self.page_count();
        if offsets.current_index < page_count {
            if let Some(left) = self.displayed.get(&PageIndex::row(offsets.current_index)) {
                left.place_parallax_effect(offsets.left_margin, offsets.left_width);
            }
        }
        if offsets.current_index + 1 < page_count {
            if let Some(right) = self.displayed.get(&PageIndex::row(offsets.current_index + 1)) {
                right.place_parallax_effect(offsets.right_margin, offsets.right_width);
            }
        }
        Some(offsets)
    }

    /// Ends a scroll at `content_offset_x` and reports the settled page.
    ///
    /// Returns the index the delegate was notified with, if any.
    pub fn on_scroll_ended(&mut self, content_offset_x: f32, viewport_width: f32) -> Option<usize> {
        self.phase = ScrollPhase::Idle;
        self.last_offset_x = content_offset_x;
        self.current_index =
            settled_index(content_offset_x, viewport_width, self.separator_width());

        let delegate = self.delegate()?;
        if self.current_index >= self.page_count() {
            return None;
        }
        log::debug!("ParallaxView: settled on page {}", self.current_index);
        delegate.on_settled(self.current_index);
        Some(self.current_index)
    }

    /// Scrolls the surface to `content_offset_x`, displaying pages that came
    /// into view and dropping those that left it, then applies the effect.
    pub fn scroll_to_offset(&mut self, content_offset_x: f32) -> Option<ParallaxOffsets> {
        let surface = self.surface_size();
        let viewport = Rect::new(content_offset_x, 0.0, surface.width, surface.height);
        let visible = self.layout.visible_pages(viewport, self.page_count());

        let gone: Vec<PageIndex> = self
            .displayed
            .keys()
            .filter(|index| index.section != 0 || !visible.contains(&index.row))
            .copied()
            .collect();
        for index in gone {
            self.did_end_displaying_page(index);
        }

        for row in visible {
            let index = PageIndex::row(row);
            if self.displayed.contains_key(&index) {
                continue;
            }
            let content = self.content_for_page(index);
            self.will_display_page(content, index);
        }

        self.on_scroll(content_offset_x, self.frame.width)
    }

    /// Pages to `row` (clamped to the last page) and settles there.
    ///
    /// Returns the index reported to the delegate, if any.
    pub fn scroll_to_page(&mut self, row: usize) -> Option<usize> {
        let page_count = self.page_count();
        if page_count == 0 {
            return None;
        }
        let row = row.min(page_count - 1);
        let offset = row as f32 * self.surface_size().width;
        self.scroll_to_offset(offset);
        self.on_scroll_ended(offset, self.frame.width)
    }
}

impl std::fmt::Debug for ParallaxView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParallaxView")
            .field("frame", &self.frame)
            .field("current_index", &self.current_index)
            .field("phase", &self.phase)
            .field("cache", &self.cache)
            .field("displayed", &self.displayed_pages())
            .finish_non_exhaustive()
    }
}

fn surface_size(frame_size: Size, separator_width: f32) -> Size {
    Size::new(frame_size.width + separator_width.max(0.0), frame_size.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct Pages {
        count: usize,
        produced: RefCell<Vec<PageIndex>>,
    }

    impl Pages {
        fn new(count: usize) -> Rc<Self> {
            Rc::new(Self {
                count,
                produced: RefCell::new(Vec::new()),
            })
        }
    }

    impl ParallaxDataSource for Pages {
        fn page_count(&self) -> usize {
            self.count
        }

        fn content_for_page(&self, index: PageIndex) -> SharedPage {
            self.produced.borrow_mut().push(index);
            share_page(EmptyPage::new(Rect::new(0.0, 0.0, 320.0, 480.0)))
        }
    }

    #[derive(Default)]
    struct Settled {
        last: Cell<Option<usize>>,
        calls: Cell<usize>,
    }

    impl ParallaxDelegate for Settled {
        fn on_settled(&self, index: usize) {
            self.last.set(Some(index));
            self.calls.set(self.calls.get() + 1);
        }
    }

    fn view() -> ParallaxView {
        ParallaxView::new(Rect::new(0.0, 0.0, 320.0, 480.0))
    }

    #[test]
    fn surface_is_frame_plus_separator() {
        let view = view();
        assert_eq!(view.surface_size(), Size::new(321.0, 480.0));
        assert_eq!(view.layout().item_size(), Size::new(320.0, 480.0));
    }

    #[test]
    fn dropped_data_source_counts_as_unset() {
        let mut view = view();
        let pages = Pages::new(4);
        view.set_data_source(&pages);
        assert_eq!(view.page_count(), 4);
        drop(pages);
        assert_eq!(view.page_count(), 0);
    }

    #[test]
    fn scroll_phase_follows_offset_changes() {
        let mut view = view();
        let pages = Pages::new(3);
        view.set_data_source(&pages);

        assert_eq!(view.on_scroll(0.0, 320.0), None);
        assert_eq!(view.scroll_phase(), ScrollPhase::Idle);

        assert!(view.on_scroll(10.0, 320.0).is_some());
        assert_eq!(view.scroll_phase(), ScrollPhase::Scrolling);
        assert!(view.on_scroll(10.0, 320.0).is_some());

        view.on_scroll_ended(321.0, 320.0);
        assert_eq!(view.scroll_phase(), ScrollPhase::Idle);
        assert_eq!(view.on_scroll(321.0, 320.0), None);
    }

    #[test]
    fn scroll_ended_without_delegate_still_updates_index() {
        let mut view = view();
        let pages = Pages::new(3);
        view.set_data_source(&pages);
        assert_eq!(view.on_scroll_ended(642.0, 320.0), None);
        assert_eq!(view.current_index(), 2);
    }

    #[test]
    fn scroll_ended_past_last_page_is_not_reported() {
        let mut view = view();
        let pages = Pages::new(2);
        let delegate = Rc::new(Settled::default());
        view.set_data_source(&pages);
        view.set_delegate(&delegate);

        assert_eq!(view.on_scroll_ended(642.0, 320.0), None);
        assert_eq!(delegate.calls.get(), 0);
    }

    #[test]
    fn continuous_scroll_never_notifies() {
        let mut view = view();
        let pages = Pages::new(5);
        let delegate = Rc::new(Settled::default());
        view.set_data_source(&pages);
        view.set_delegate(&delegate);

        for step in 1..=32 {
            view.scroll_to_offset(step as f32 * 10.0);
        }
        assert_eq!(delegate.calls.get(), 0);

        view.on_scroll_ended(321.0, 320.0);
        assert_eq!(delegate.last.get(), Some(1));
        assert_eq!(delegate.calls.get(), 1);
    }

    #[test]
    fn resize_reframes_displayed_pages() {
        let mut view = view();
        let pages = Pages::new(3);
        view.set_data_source(&pages);
        view.scroll_to_offset(0.0);
        assert_eq!(
            view.displayed_page(PageIndex::row(0)).map(PageCell::frame),
            Some(Rect::new(1.0, 0.0, 320.0, 480.0))
        );

        view.set_frame(Rect::new(0.0, 0.0, 480.0, 320.0));
        assert_eq!(
            view.displayed_page(PageIndex::row(0)).map(PageCell::frame),
            Some(Rect::new(1.0, 0.0, 480.0, 320.0))
        );
        assert_eq!(view.content_size(), Size::new(481.0 * 3.0, 320.0));
    }

    #[test]
    fn rotation_on_first_page_replaces_the_parallax_region() {
        let mut view = view();
        let pages = Pages::new(3);
        view.set_data_source(&pages);
        view.scroll_to_offset(160.0);
        view.scroll_to_page(0);
        assert_eq!(
            view.displayed_page(PageIndex::row(0)).map(PageCell::parallax_effect_frame),
            Some(Rect::new(0.0, 0.0, 321.0, 480.0))
        );

        view.set_frame(Rect::new(0.0, 0.0, 568.0, 320.0));
        assert!(view.on_scroll(0.0, 568.0).is_some());
        assert_eq!(
            view.displayed_page(PageIndex::row(0)).map(PageCell::parallax_effect_frame),
            Some(Rect::new(0.0, 0.0, 569.0, 480.0))
        );
    }

    #[test]
    fn separator_change_reframes_displayed_pages() {
        let mut view = view();
        let pages = Pages::new(3);
        view.set_data_source(&pages);
        view.scroll_to_offset(0.0);

        view.set_page_separator_width(4.0);
        assert_eq!(view.page_separator_width(), 4.0);
        assert_eq!(view.surface_size(), Size::new(324.0, 480.0));
        assert_eq!(
            view.displayed_page(PageIndex::row(0)).map(PageCell::frame),
            Some(Rect::new(4.0, 0.0, 320.0, 480.0))
        );
    }

    #[test]
    fn cleared_collaborators_go_quiet() {
        let mut view = view();
        let pages = Pages::new(3);
        let delegate = Rc::new(Settled::default());
        view.set_data_source(&pages);
        view.set_delegate(&delegate);

        assert_eq!(view.scroll_to_page(1), Some(1));
        view.clear_delegate();
        assert_eq!(view.scroll_to_page(2), None);
        assert_eq!(view.current_index(), 2);
        assert_eq!(delegate.calls.get(), 1);

        view.clear_data_source();
        assert_eq!(view.page_count(), 0);
    }

    #[test]
    fn layout_attributes_cover_every_page() {
        let mut view = view();
        let pages = Pages::new(4);
        view.set_data_source(&pages);

        let attributes = view.layout_attributes_in_rect(Rect::new(0.0, 0.0, 321.0, 480.0));
        let rows: Vec<usize> = attributes.iter().map(|attributes| attributes.index.row).collect();
        assert_eq!(rows, vec![0, 1, 2, 3]);
        assert_eq!(attributes[2].frame(), Rect::new(643.0, 0.0, 320.0, 480.0));
    }

    #[test]
    fn scroll_to_page_settles_on_target_with_fractional_width() {
        let mut view = ParallaxView::new(Rect::new(0.0, 0.0, 300.1, 480.0));
        let pages = Pages::new(60);
        let delegate = Rc::new(Settled::default());
        view.set_data_source(&pages);
        view.set_delegate(&delegate);

        assert_eq!(view.scroll_to_page(7), Some(7));
        for row in 1..60 {
            assert_eq!(view.scroll_to_page(row), Some(row), "row {row}");
        }
    }

    #[test]
    fn scroll_to_page_clamps_to_last_page() {
        let mut view = view();
        let pages = Pages::new(3);
        let delegate = Rc::new(Settled::default());
        view.set_data_source(&pages);
        view.set_delegate(&delegate);

        assert_eq!(view.scroll_to_page(10), Some(2));
        assert_eq!(view.current_index(), 2);
        assert_eq!(view.displayed_pages(), vec![PageIndex::row(2)]);
    }

    #[test]
    fn scroll_to_page_without_pages_is_a_no_op() {
        let mut view = view();
        assert_eq!(view.scroll_to_page(1), None);
        assert!(view.displayed_pages().is_empty());
    }

    #[test]
    fn zero_width_frame_does_not_panic() {
        let mut view = ParallaxView::with_config(
            Rect::new(0.0, 0.0, 0.0, 480.0),
            ParallaxConfig::default().with_page_separator_width(0.0),
        );
        let pages = Pages::new(3);
        view.set_data_source(&pages);

        assert_eq!(view.layout().item_size(), Size::ZERO);
        assert_eq!(view.content_size().width, 0.0);
        assert_eq!(view.scroll_to_offset(40.0), Some(ParallaxOffsets::default()));
        assert_eq!(view.current_index(), 0);
        assert!(view.displayed_pages().is_empty());
    }
}
