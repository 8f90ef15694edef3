//! Neighbor prefetch for the parallax view.
//!
//! Whenever a page is displayed, the pages around it are materialized and
//! cached so the next swipe in either direction finds its content ready.

use frameme_ui_layout::PageIndex;
use smallvec::SmallVec;

/// Neighbor indices produced for one displayed page.
pub type NeighborWindow = SmallVec<[PageIndex; 4]>;

/// How far around a displayed page content gets prefetched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborPrefetch {
    /// Pages to prefetch on each side of the displayed page.
    /// Default is 1: one page behind and one ahead.
    pub reach: usize,

    /// Whether prefetching is enabled.
    pub enabled: bool,
}

impl Default for NeighborPrefetch {
    fn default() -> Self {
        Self {
            reach: 1,
            enabled: true,
        }
    }
}

impl NeighborPrefetch {
    pub fn new(reach: usize) -> Self {
        Self {
            reach,
            enabled: true,
        }
    }

    pub fn disabled() -> Self {
        Self {
            reach: 0,
            enabled: false,
        }
    }

    /// Neighbors of `index` that exist in a pager of `page_count` pages.
    ///
    /// Nearest pages come first, the previous page before the next one at
    /// each distance.
    pub fn neighbors(&self, index: PageIndex, page_count: usize) -> NeighborWindow {
        let mut window = NeighborWindow::new();
        if !self.enabled || index.row >= page_count {
            return window;
        }
        let mut behind = index.previous();
        let mut ahead = index.next(page_count);
        for _ in 0..self.reach {
            if let Some(page) = behind {
                window.push(page);
                behind = page.previous();
            }
            if let Some(page) = ahead {
                window.push(page);
                ahead = page.next(page_count);
            }
            if behind.is_none() && ahead.is_none() {
                break;
            }
        }
        window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(window: NeighborWindow) -> Vec<usize> {
        window.into_iter().map(|index| index.row).collect()
    }

    #[test]
    fn default_window_is_previous_then_next() {
        let prefetch = NeighborPrefetch::default();
        assert_eq!(rows(prefetch.neighbors(PageIndex::row(3), 10)), vec![2, 4]);
    }

    #[test]
    fn first_page_has_no_previous() {
        let prefetch = NeighborPrefetch::default();
        assert_eq!(rows(prefetch.neighbors(PageIndex::row(0), 10)), vec![1]);
    }

    #[test]
    fn last_page_has_no_next() {
        let prefetch = NeighborPrefetch::default();
        assert_eq!(rows(prefetch.neighbors(PageIndex::row(9), 10)), vec![8]);
    }

    #[test]
    fn single_page_has_no_neighbors() {
        let prefetch = NeighborPrefetch::default();
        assert!(prefetch.neighbors(PageIndex::row(0), 1).is_empty());
    }

    #[test]
    fn wider_reach_orders_by_distance() {
        let prefetch = NeighborPrefetch::new(2);
        assert_eq!(rows(prefetch.neighbors(PageIndex::row(1), 10)), vec![0, 2, 3]);
    }

    #[test]
    fn reach_is_cut_at_both_ends() {
        let prefetch = NeighborPrefetch::new(3);
        assert_eq!(rows(prefetch.neighbors(PageIndex::row(1), 3)), vec![0, 2]);
    }

    #[test]
    fn section_is_carried_over() {
        let prefetch = NeighborPrefetch::default();
        assert_eq!(
            prefetch.neighbors(PageIndex::new(2, 4), 10).into_vec(),
            vec![PageIndex::new(2, 3), PageIndex::new(2, 5)]
        );
    }

    #[test]
    fn disabled_prefetches_nothing() {
        let prefetch = NeighborPrefetch::disabled();
        assert!(prefetch.neighbors(PageIndex::row(4), 10).is_empty());
    }
}
