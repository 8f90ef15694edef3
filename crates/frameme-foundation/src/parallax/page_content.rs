//! Page content and the optional parallax sub-region capability.

use std::cell::RefCell;
use std::rc::Rc;

use frameme_ui_graphics::Rect;
use frameme_ui_layout::PageIndex;

/// Visual content of one page.
///
/// Content that only wants part of itself to move (an image band at the top
/// of an article, say) overrides the `parallax_effect_*` pair. Content that
/// does not gets the whole frame treated as its parallax region.
pub trait PageContent {
    /// Frame in the coordinate space of the owning page cell.
    fn frame(&self) -> Rect;

    fn set_frame(&mut self, frame: Rect);

    fn parallax_effect_frame(&self) -> Rect {
        self.frame()
    }

    fn set_parallax_effect_frame(&mut self, frame: Rect) {
        self.set_frame(frame);
    }
}

/// Handle to page content shared between the cache and displayed cells.
pub type SharedPage = Rc<RefCell<dyn PageContent>>;

pub fn share_page<P: PageContent + 'static>(page: P) -> SharedPage {
    Rc::new(RefCell::new(page))
}

/// Placeholder used when no data source is attached.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EmptyPage {
    frame: Rect,
}

impl EmptyPage {
    pub fn new(frame: Rect) -> Self {
        Self { frame }
    }
}

impl PageContent for EmptyPage {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }
}

/// A page currently on screen: its slot in the strip plus its content.
#[derive(Clone)]
pub struct PageCell {
    index: PageIndex,
    frame: Rect,
    content: SharedPage,
}

impl PageCell {
    pub fn new(index: PageIndex, frame: Rect, content: SharedPage) -> Self {
        Self {
            index,
            frame,
            content,
        }
    }

    pub fn index(&self) -> PageIndex {
        self.index
    }

    /// Frame of the cell in content coordinates.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub fn content(&self) -> &SharedPage {
        &self.content
    }

    pub fn parallax_effect_frame(&self) -> Rect {
        self.content.borrow().parallax_effect_frame()
    }

    /// Moves the parallax region horizontally, leaving `y` and `height` alone.
    pub(crate) fn place_parallax_effect(&self, x: f32, width: f32) {
        let mut content = self.content.borrow_mut();
        let frame = content.parallax_effect_frame().with_horizontal(x, width);
        content.set_parallax_effect_frame(frame);
    }
}

impl std::fmt::Debug for PageCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageCell")
            .field("index", &self.index)
            .field("frame", &self.frame)
            .finish_non_exhaustive()
    }
}
