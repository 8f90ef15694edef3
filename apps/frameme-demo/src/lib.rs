//! Headless FrameMe demo.
//!
//! Feeds a handful of articles into a [`frameme_foundation::ParallaxView`]
//! and swipes through them frame by frame the way a finger would.

pub mod articles;
pub mod session;

pub use articles::{Article, ArticlePage, ArticleSource};
pub use session::{SettleLog, SwipeSession};
