//! Scripted swipes against a [`ParallaxView`].

use std::cell::RefCell;

use frameme_foundation::{ParallaxDelegate, ParallaxView, Rect};

/// Delegate that remembers where the pager settled.
#[derive(Debug, Default)]
pub struct SettleLog {
    indices: RefCell<Vec<usize>>,
}

impl SettleLog {
    pub fn indices(&self) -> Vec<usize> {
        self.indices.borrow().clone()
    }
}

impl ParallaxDelegate for SettleLog {
    fn on_settled(&self, index: usize) {
        log::info!("settled on article {}", index);
        self.indices.borrow_mut().push(index);
    }
}

/// Drives a view through swipes, one scroll update per simulated frame.
pub struct SwipeSession<'a> {
    view: &'a mut ParallaxView,
    frames_per_swipe: usize,
    page: usize,
}

impl<'a> SwipeSession<'a> {
    pub fn new(view: &'a mut ParallaxView, frames_per_swipe: usize) -> Self {
        let page = view.current_index();
        Self {
            view,
            frames_per_swipe: frames_per_swipe.max(1),
            page,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Swipes from the current page to `target` and lets the pager settle.
    pub fn swipe_to(&mut self, target: usize) -> Option<usize> {
        let slot = self.view.surface_size().width;
        let start = self.page as f32 * slot;
        let end = target as f32 * slot;

        for frame in 1..=self.frames_per_swipe {
            let progress = frame as f32 / self.frames_per_swipe as f32;
            let offset = start + (end - start) * progress;
            if let Some(offsets) = self.view.scroll_to_offset(offset) {
                log::debug!(
                    "offset {:>7.1}: page {} band at {:.1}+{:.1}, next at {:.1}+{:.1}",
                    offset,
                    offsets.current_index,
                    offsets.left_margin,
                    offsets.left_width,
                    offsets.right_margin,
                    offsets.right_width
                );
            }
        }

        let settled = self.view.on_scroll_ended(end, self.view.frame().width);
        self.page = self.view.current_index();
        settled
    }

    /// Resizes the view (a rotation) and re-settles on the same page.
    pub fn rotate(&mut self, frame: Rect) -> Option<usize> {
        log::info!("rotating to {}x{}", frame.width, frame.height);
        self.view.set_frame(frame);
        let settled = self.view.scroll_to_page(self.page);
        self.page = self.view.current_index();
        settled
    }
}
