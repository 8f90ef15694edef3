use std::fmt;

/// Identifies one page of a pager: a `(section, row)` pair.
///
/// Pagers only ever use section 0, but the pair is kept so hosts that
/// address pages by index path can pass them through unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageIndex {
    pub section: usize,
    pub row: usize,
}

impl PageIndex {
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }

    /// Page `row` in section 0.
    pub const fn row(row: usize) -> Self {
        Self { section: 0, row }
    }

    /// The page before this one in the same section.
    pub fn previous(&self) -> Option<Self> {
        self.row.checked_sub(1).map(|row| Self { row, ..*self })
    }

    /// The page after this one in the same section, if it is below `page_count`.
    pub fn next(&self, page_count: usize) -> Option<Self> {
        let row = self.row.checked_add(1)?;
        (row < page_count).then_some(Self { row, ..*self })
    }
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.section, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_section_dash_row() {
        assert_eq!(PageIndex::new(0, 12).to_string(), "0-12");
    }

    #[test]
    fn neighbors_stay_in_range() {
        assert_eq!(PageIndex::row(0).previous(), None);
        assert_eq!(PageIndex::row(3).previous(), Some(PageIndex::row(2)));
        assert_eq!(PageIndex::row(3).next(5), Some(PageIndex::row(4)));
        assert_eq!(PageIndex::row(4).next(5), None);
    }
}
