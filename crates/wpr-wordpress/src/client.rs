//! `WordPress` REST API client.
//!
//! Sync HTTP client over `ureq`. Status codes are inspected explicitly so a
//! non-success response becomes [`WpError::Status`] rather than a transport
//! error.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;
use ureq::Agent;

use crate::error::WpError;
use crate::types::{Page, Post, SliderItem};

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Page size for collection endpoints.
const PER_PAGE: u32 = 20;

/// Read access to `WordPress` content.
///
/// The widget layer depends on this trait instead of [`WpClient`] directly,
/// so tests can substitute canned responses for the remote site.
pub trait ContentSource: Send + Sync {
    /// Pages for the navigation bar (id, slug, title and link only).
    fn nav_pages(&self) -> Result<Vec<Page>, WpError>;

    /// Published posts with embedded media, optionally filtered by category.
    fn posts(&self, category: Option<u32>) -> Result<Vec<Post>, WpError>;

    /// One post by identifier, with embedded media.
    ///
    /// The identifier comes from a URL query parameter and is passed through
    /// verbatim; a value the server rejects surfaces as an error.
    fn post(&self, id: &str) -> Result<Post, WpError>;

    /// Pages matching a slug (zero or one element in practice).
    fn page_by_slug(&self, slug: &str) -> Result<Vec<Page>, WpError>;

    /// Slider entries, with embedded media.
    fn slider_items(&self) -> Result<Vec<SliderItem>, WpError>;
}

/// `WordPress` REST API client.
pub struct WpClient {
    agent: Agent,
    base_url: String,
}

impl WpClient {
    /// Create a client for the given API root, e.g.
    /// `https://example.com/wp-json/wp/v2`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Issue a GET request and deserialize the JSON response body.
    ///
    /// `path_and_query` must begin with `/` and is appended to the API root
    /// verbatim.
    fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T, WpError> {
        let url = format!("{}{}", self.base_url, path_and_query);
        debug!("GET {url}");

        let response = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .call()?;

        let status = response.status().as_u16();
        let mut body = response.into_body();

        if !(200..300).contains(&status) {
            let detail = body
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            debug!(status, detail = %detail, "WordPress returned non-success status");
            return Err(WpError::Status { status });
        }

        Ok(body.read_json()?)
    }
}

impl ContentSource for WpClient {
    fn nav_pages(&self) -> Result<Vec<Page>, WpError> {
        self.get_json(&format!(
            "/pages?per_page={PER_PAGE}&_fields=id,slug,title,link"
        ))
    }

    fn posts(&self, category: Option<u32>) -> Result<Vec<Post>, WpError> {
        self.get_json(&posts_path(category))
    }

    fn post(&self, id: &str) -> Result<Post, WpError> {
        self.get_json(&format!("/posts/{id}?_embed"))
    }

    fn page_by_slug(&self, slug: &str) -> Result<Vec<Page>, WpError> {
        self.get_json(&format!("/pages?slug={slug}&_fields=title,content"))
    }

    fn slider_items(&self) -> Result<Vec<SliderItem>, WpError> {
        self.get_json(&format!("/slider_item?per_page={PER_PAGE}&_embed"))
    }
}

/// Build the posts collection path, filtered by category when given.
fn posts_path(category: Option<u32>) -> String {
    match category {
        Some(id) => format!("/posts?categories={id}&_embed"),
        None => "/posts?_embed".to_owned(),
    }
}
