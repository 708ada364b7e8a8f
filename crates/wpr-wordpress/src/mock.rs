//! Mock content source for testing.
//!
//! Provides [`MockSource`] for unit testing without a `WordPress` instance.

use std::sync::Mutex;

use crate::client::ContentSource;
use crate::error::WpError;
use crate::types::{Page, Post, SliderItem};

/// In-memory content source for tests.
///
/// Builder methods load it with canned content. Every fetch is recorded
/// and can be inspected through [`MockSource::calls`], and the whole
/// source can be switched to fail with a fixed status code.
///
/// # Example
///
/// ```ignore
/// use wpr_wordpress::{ContentSource, MockSource};
///
/// let source = MockSource::new().failing(502);
/// assert!(source.nav_pages().is_err());
/// ```
#[derive(Debug, Default)]
pub struct MockSource {
    pages: Vec<Page>,
    posts: Vec<Post>,
    slider_items: Vec<SliderItem>,
    fail_status: Option<u16>,
    calls: Mutex<Vec<String>>,
}

impl MockSource {
    /// Create a new empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page, served by both `nav_pages` and `page_by_slug`.
    #[must_use]
    pub fn with_page(mut self, page: Page) -> Self {
        self.pages.push(page);
        self
    }

    /// Add a post, served by both `posts` and `post`.
    #[must_use]
    pub fn with_post(mut self, post: Post) -> Self {
        self.posts.push(post);
        self
    }

    /// Add a slider entry.
    #[must_use]
    pub fn with_slider_item(mut self, item: SliderItem) -> Self {
        self.slider_items.push(item);
        self
    }

    /// Make every fetch fail with this status code.
    #[must_use]
    pub fn failing(mut self, status: u16) -> Self {
        self.fail_status = Some(status);
        self
    }

    /// The fetches issued so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_failure(&self) -> Result<(), WpError> {
        match self.fail_status {
            Some(status) => Err(WpError::Status { status }),
            None => Ok(()),
        }
    }
}

impl ContentSource for MockSource {
    fn nav_pages(&self) -> Result<Vec<Page>, WpError> {
        self.record("nav_pages".to_owned());
        self.check_failure()?;
        Ok(self.pages.clone())
    }

    fn posts(&self, category: Option<u32>) -> Result<Vec<Post>, WpError> {
        self.record(format!("posts category={category:?}"));
        self.check_failure()?;
        Ok(self.posts.clone())
    }

    fn post(&self, id: &str) -> Result<Post, WpError> {
        self.record(format!("post id={id}"));
        self.check_failure()?;
        self.posts
            .iter()
            .find(|post| post.id.to_string() == id)
            .cloned()
            .ok_or(WpError::Status { status: 404 })
    }

    fn page_by_slug(&self, slug: &str) -> Result<Vec<Page>, WpError> {
        self.record(format!("page slug={slug}"));
        self.check_failure()?;
        Ok(self
            .pages
            .iter()
            .filter(|page| page.slug == slug)
            .cloned()
            .collect())
    }

    fn slider_items(&self) -> Result<Vec<SliderItem>, WpError> {
        self.record("slider_items".to_owned());
        self.check_failure()?;
        Ok(self.slider_items.clone())
    }
}
