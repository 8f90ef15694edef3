//! Pure math/data for FrameMe
//!
//! Geometry primitives shared by the paging layout and the parallax engine.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
}
