//! Data sources, delegates and pages for exercising a [`ParallaxView`].
//!
//! [`ParallaxView`]: frameme_foundation::ParallaxView

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use frameme_foundation::{PageContent, PageIndex, ParallaxDataSource, ParallaxDelegate, SharedPage};
use frameme_ui_graphics::Rect;

/// Page with an optional parallax band, tagged with the row it was made for.
#[derive(Clone, Debug, PartialEq)]
pub struct TestPage {
    pub row: usize,
    pub frame: Rect,
    pub band: Option<Rect>,
}

impl TestPage {
    /// Page without a band: the whole frame is the parallax region.
    pub fn plain(row: usize, frame: Rect) -> Self {
        Self {
            row,
            frame,
            band: None,
        }
    }

    /// Page whose parallax region is `band`.
    pub fn with_band(row: usize, frame: Rect, band: Rect) -> Self {
        Self {
            row,
            frame,
            band: Some(band),
        }
    }
}

impl PageContent for TestPage {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn parallax_effect_frame(&self) -> Rect {
        self.band.unwrap_or(self.frame)
    }

    fn set_parallax_effect_frame(&mut self, frame: Rect) {
        match self.band.as_mut() {
            Some(band) => *band = frame,
            None => self.frame = frame,
        }
    }
}

/// Data source that builds [`TestPage`]s and records every factory call.
pub struct CountingDataSource {
    page_count: Cell<usize>,
    page_frame: Rect,
    band_height: Option<f32>,
    produced: RefCell<Vec<PageIndex>>,
    pages: RefCell<Vec<(PageIndex, Rc<RefCell<TestPage>>)>>,
}

impl CountingDataSource {
    /// `page_count` plain pages of `page_frame`.
    pub fn new(page_count: usize, page_frame: Rect) -> Rc<Self> {
        Rc::new(Self::build(page_count, page_frame, None))
    }

    /// Pages with a parallax band `band_height` tall at their top.
    pub fn with_bands(page_count: usize, page_frame: Rect, band_height: f32) -> Rc<Self> {
        Rc::new(Self::build(page_count, page_frame, Some(band_height)))
    }

    fn build(page_count: usize, page_frame: Rect, band_height: Option<f32>) -> Self {
        Self {
            page_count: Cell::new(page_count),
            page_frame,
            band_height,
            produced: RefCell::new(Vec::new()),
            pages: RefCell::new(Vec::new()),
        }
    }

    pub fn set_page_count(&self, page_count: usize) {
        self.page_count.set(page_count);
    }

    /// Every index the factory was called for, in call order.
    pub fn produced(&self) -> Vec<PageIndex> {
        self.produced.borrow().clone()
    }

    pub fn calls_for(&self, row: usize) -> usize {
        self.produced
            .borrow()
            .iter()
            .filter(|index| index.row == row)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.produced.borrow().len()
    }

    /// The most recent page produced for `row`.
    pub fn last_page(&self, row: usize) -> Option<Rc<RefCell<TestPage>>> {
        self.pages
            .borrow()
            .iter()
            .rev()
            .find(|(index, _)| index.row == row)
            .map(|(_, page)| Rc::clone(page))
    }
}

impl ParallaxDataSource for CountingDataSource {
    fn page_count(&self) -> usize {
        self.page_count.get()
    }

    fn content_for_page(&self, index: PageIndex) -> SharedPage {
        self.produced.borrow_mut().push(index);
        let page = match self.band_height {
            Some(height) => TestPage::with_band(
                index.row,
                self.page_frame,
                Rect::new(0.0, 0.0, self.page_frame.width, height),
            ),
            None => TestPage::plain(index.row, self.page_frame),
        };
        let page = Rc::new(RefCell::new(page));
        self.pages.borrow_mut().push((index, Rc::clone(&page)));
        page
    }
}

/// Delegate that records every settled index.
#[derive(Default)]
pub struct RecordingDelegate {
    settled: RefCell<Vec<usize>>,
}

impl RecordingDelegate {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn settled(&self) -> Vec<usize> {
        self.settled.borrow().clone()
    }
}

impl ParallaxDelegate for RecordingDelegate {
    fn on_settled(&self, index: usize) {
        self.settled.borrow_mut().push(index);
    }
}
