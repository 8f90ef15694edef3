//! Page memoization for the parallax view.

use std::fmt;

use frameme_ui_layout::PageIndex;
use rustc_hash::FxHashMap;

/// Maps pages to their content.
///
/// Inserts never overwrite: the first value stored for a page wins until it
/// is explicitly removed. There is no capacity bound and nothing is evicted
/// on its own, so a long session keeps every page it has displayed or
/// prefetched.
pub struct PageCache<V> {
    entries: FxHashMap<PageIndex, V>,
}

impl<V> Default for PageCache<V> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }
}

impl<V> PageCache<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` for `index` unless the page is already cached.
    ///
    /// Returns whether the value was stored.
    pub fn put(&mut self, index: PageIndex, value: V) -> bool {
        if self.entries.contains_key(&index) {
            log::trace!("PageCache: page {} already cached, keeping first value", index);
            return false;
        }
        self.entries.insert(index, value);
        true
    }

    pub fn get(&self, index: &PageIndex) -> Option<&V> {
        self.entries.get(index)
    }

    pub fn remove(&mut self, index: &PageIndex) -> Option<V> {
        self.entries.remove(index)
    }

    pub fn contains(&self, index: &PageIndex) -> bool {
        self.entries.contains_key(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached pages in ascending order.
    pub fn indices(&self) -> Vec<PageIndex> {
        let mut indices: Vec<PageIndex> = self.entries.keys().copied().collect();
        indices.sort_unstable();
        indices
    }
}

impl<V> fmt::Display for PageCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PageCache({} pages)", self.entries.len())
    }
}

impl<V> fmt::Debug for PageCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageCache")
            .field("indices", &self.indices())
            .finish()
    }
}
