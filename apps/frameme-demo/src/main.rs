use std::rc::Rc;

use frameme_demo::{ArticleSource, SettleLog, SwipeSession};
use frameme_foundation::{ParallaxView, Rect};

const FRAMES_PER_SWIPE: usize = 12;

fn main() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== FrameMe parallax pager ===");
    println!("Swiping through the bundled articles, {FRAMES_PER_SWIPE} frames per swipe.");
    println!();

    let source = Rc::new(ArticleSource::bundled());
    let settled = Rc::new(SettleLog::default());
    let mut view = ParallaxView::new(Rect::new(0.0, 0.0, 320.0, 568.0));
    view.set_data_source(&source);
    view.set_delegate(&settled);

    let mut session = SwipeSession::new(&mut view, FRAMES_PER_SWIPE);
    let pages = source.len();
    for target in 1..pages {
        session.swipe_to(target);
    }
    session.rotate(Rect::new(0.0, 0.0, 568.0, 320.0));
    for target in (0..pages.saturating_sub(1)).rev() {
        session.swipe_to(target);
    }

    println!();
    println!("Settled on: {:?}", settled.indices());
    println!("{}", view.cache());
}
