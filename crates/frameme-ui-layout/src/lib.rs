//! Layout contracts for the FrameMe parallax pager

mod page_index;
mod paging_layout;

pub use page_index::*;
pub use paging_layout::*;

pub mod prelude {
    pub use crate::page_index::PageIndex;
    pub use crate::paging_layout::{PageLayoutAttributes, PagingLayout};
}
