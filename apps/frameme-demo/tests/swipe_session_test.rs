use std::rc::Rc;

use frameme_demo::{ArticlePage, ArticleSource, SettleLog, SwipeSession};
use frameme_foundation::{PageContent, PageIndex, ParallaxView, Rect};
use frameme_testing::assert_rect_approx_eq;

fn portrait_view(source: &Rc<ArticleSource>, settled: &Rc<SettleLog>) -> ParallaxView {
    let mut view = ParallaxView::new(Rect::new(0.0, 0.0, 320.0, 568.0));
    view.set_data_source(source);
    view.set_delegate(settled);
    view
}

#[test]
fn swiping_forward_settles_on_every_article() {
    let source = Rc::new(ArticleSource::bundled());
    let settled = Rc::new(SettleLog::default());
    let mut view = portrait_view(&source, &settled);

    let mut session = SwipeSession::new(&mut view, 8);
    for target in 1..source.len() {
        assert_eq!(session.swipe_to(target), Some(target));
    }

    assert_eq!(settled.indices(), vec![1, 2, 3, 4]);
    assert_eq!(view.cache().len(), source.len());
}

#[test]
fn rotation_keeps_the_current_article() {
    let source = Rc::new(ArticleSource::bundled());
    let settled = Rc::new(SettleLog::default());
    let mut view = portrait_view(&source, &settled);

    let mut session = SwipeSession::new(&mut view, 4);
    session.swipe_to(2);
    assert_eq!(session.rotate(Rect::new(0.0, 0.0, 568.0, 320.0)), Some(2));
    assert_eq!(session.page(), 2);

    assert_eq!(view.displayed_pages(), vec![PageIndex::row(2)]);
    assert_eq!(
        view.displayed_page(PageIndex::row(2)).map(|cell| cell.frame()),
        Some(Rect::new(2.0 * 569.0 + 1.0, 0.0, 568.0, 320.0))
    );
}

#[test]
fn rotation_on_first_article_widens_its_band() {
    let source = Rc::new(ArticleSource::bundled());
    let settled = Rc::new(SettleLog::default());
    let mut view = portrait_view(&source, &settled);

    let mut session = SwipeSession::new(&mut view, 4);
    session.swipe_to(1);
    session.swipe_to(0);
    assert_eq!(session.rotate(Rect::new(0.0, 0.0, 568.0, 320.0)), Some(0));

    let cell = view.displayed_page(PageIndex::row(0)).expect("first article shown");
    assert_rect_approx_eq(
        cell.parallax_effect_frame(),
        Rect::new(0.0, 0.0, 569.0, 568.0 * 0.4),
        0.01,
        "band after rotation",
    );
}

#[test]
fn image_band_slides_horizontally_only() {
    let source = Rc::new(ArticleSource::bundled());
    let settled = Rc::new(SettleLog::default());
    let mut view = portrait_view(&source, &settled);

    view.scroll_to_offset(160.0);

    let cell = view.displayed_page(PageIndex::row(0)).expect("first article shown");
    assert_rect_approx_eq(
        cell.parallax_effect_frame(),
        Rect::new(160.0, 0.0, 161.0, 568.0 * 0.4),
        0.01,
        "leading image band",
    );
    assert_eq!(cell.content().borrow().frame(), Rect::new(0.0, 0.0, 320.0, 568.0));
}

#[test]
fn article_page_reports_its_band() {
    let page = ArticlePage::new(
        frameme_demo::Article::new("t", "u"),
        frameme_foundation::Size::new(100.0, 200.0),
    );
    assert_eq!(page.image_frame(), Rect::new(0.0, 0.0, 100.0, 80.0));
    assert_eq!(page.parallax_effect_frame(), page.image_frame());
}
