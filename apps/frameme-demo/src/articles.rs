//! In-memory article feed used as the pager's data source.

use std::cell::RefCell;
use std::rc::Rc;

use frameme_foundation::{PageContent, PageIndex, ParallaxDataSource, Rect, SharedPage, Size};

/// Share of the page height taken by the header image.
const IMAGE_BAND_RATIO: f32 = 0.4;

#[derive(Clone, Debug, PartialEq)]
pub struct Article {
    pub title: String,
    pub image_url: String,
}

impl Article {
    pub fn new(title: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image_url: image_url.into(),
        }
    }
}

/// One article laid out as a page: a header image band over the body.
#[derive(Clone, Debug)]
pub struct ArticlePage {
    pub article: Article,
    frame: Rect,
    image_frame: Rect,
}

impl ArticlePage {
    pub fn new(article: Article, size: Size) -> Self {
        let frame = Rect::from_size(size);
        Self {
            article,
            frame,
            image_frame: Rect::new(0.0, 0.0, size.width, size.height * IMAGE_BAND_RATIO),
        }
    }

    pub fn image_frame(&self) -> Rect {
        self.image_frame
    }
}

impl PageContent for ArticlePage {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn parallax_effect_frame(&self) -> Rect {
        self.image_frame
    }

    fn set_parallax_effect_frame(&mut self, frame: Rect) {
        self.image_frame = frame;
    }
}

/// Serves [`ArticlePage`]s for a fixed list of articles.
pub struct ArticleSource {
    articles: Vec<Article>,
    page_size: Size,
}

impl ArticleSource {
    pub fn new(articles: Vec<Article>, page_size: Size) -> Self {
        Self {
            articles,
            page_size,
        }
    }

    /// A small built-in feed sized for a 320x568 screen.
    pub fn bundled() -> Self {
        let articles = [
            ("Harbour lights return after a decade", "harbour.jpg"),
            ("The quiet comeback of the night train", "night-train.jpg"),
            ("Inside a seed vault under the ice", "seed-vault.jpg"),
            ("Why city bees are thriving", "bees.jpg"),
            ("A museum for lost luggage", "luggage.jpg"),
        ]
        .into_iter()
        .map(|(title, image)| Article::new(title, format!("https://images.example.com/{image}")))
        .collect();
        Self::new(articles, Size::new(320.0, 568.0))
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

impl ParallaxDataSource for ArticleSource {
    fn page_count(&self) -> usize {
        self.articles.len()
    }

    fn content_for_page(&self, index: PageIndex) -> SharedPage {
        let article = self.articles.get(index.row).cloned().unwrap_or_else(|| {
            log::warn!("ArticleSource: no article for page {}", index);
            Article::new("", "")
        });
        Rc::new(RefCell::new(ArticlePage::new(article, self.page_size)))
    }
}
