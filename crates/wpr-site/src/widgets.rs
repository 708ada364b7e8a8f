//! Content widgets.
//!
//! Each widget checks for its mount, fetches what it needs and splices
//! markup into the shell. A fetch failure surfaces as an inline message
//! in the page rather than failing the whole response.

use wpr_render::{NavEntry, humanize_slug, nav_list, post_cards, slides};
use wpr_wordpress::{ContentSource, WpError};

use crate::carousel::Carousel;
use crate::mounts;
use crate::shell::Shell;

/// What a widget did with the shell.
#[derive(Debug)]
pub enum WidgetOutcome {
    /// The widget spliced its markup in.
    Rendered,
    /// The widget did not apply to this shell or request.
    Skipped { reason: &'static str },
    /// The fetch failed; an inline message was spliced in instead.
    Failed { error: WpError },
}

/// The widget set for one site, wired to a content source and carousel.
pub struct Widgets<'a> {
    source: &'a dyn ContentSource,
    carousel: &'a dyn Carousel,
    site_name: &'a str,
    products_category: Option<u32>,
}

impl<'a> Widgets<'a> {
    pub fn new(
        source: &'a dyn ContentSource,
        carousel: &'a dyn Carousel,
        site_name: &'a str,
        products_category: Option<u32>,
    ) -> Self {
        Self {
            source,
            carousel,
            site_name,
            products_category,
        }
    }

    /// Builds the navigation list from fetched pages, with a fixed Home
    /// entry first. On failure the list still gets a usable Home link.
    pub fn nav(&self, shell: &mut Shell) -> WidgetOutcome {
        if !shell.has_element(mounts::NAV_LIST) {
            return WidgetOutcome::Skipped {
                reason: "no nav mount",
            };
        }
        match self.source.nav_pages() {
            Ok(pages) => {
                let mut entries = vec![NavEntry::home()];
                entries.extend(pages.iter().map(NavEntry::from));
                shell.set_inner_html(mounts::NAV_LIST, &nav_list(&entries));
                WidgetOutcome::Rendered
            }
            Err(error) => {
                shell.set_inner_html(
                    mounts::NAV_LIST,
                    r#"<li><a href="index.html">Home</a></li><li>Error loading pages</li>"#,
                );
                WidgetOutcome::Failed { error }
            }
        }
    }

    /// Fills the blog listing with post cards.
    pub fn blog_list(&self, shell: &mut Shell) -> WidgetOutcome {
        self.listing(shell, mounts::BLOG_LIST, None)
    }

    /// Fills the products listing, filtered to the configured category
    /// when one is set.
    pub fn product_list(&self, shell: &mut Shell) -> WidgetOutcome {
        self.listing(shell, mounts::PRODUCT_LIST, self.products_category)
    }

    // A `Loading…` placeholder goes in first so a failed fetch never
    // leaves stale shell content behind.
    fn listing(&self, shell: &mut Shell, mount_id: &str, category: Option<u32>) -> WidgetOutcome {
        if !shell.has_element(mount_id) {
            return WidgetOutcome::Skipped {
                reason: "no listing mount",
            };
        }
        shell.set_inner_html(mount_id, "<p>Loading…</p>");
        match self.source.posts(category) {
            Ok(posts) => {
                shell.set_inner_html(mount_id, &post_cards(&posts));
                WidgetOutcome::Rendered
            }
            Err(error) => {
                shell.set_inner_html(mount_id, &format!("<p>Error: {error}</p>"));
                WidgetOutcome::Failed { error }
            }
        }
    }

    /// Renders one post: document title, heading and body.
    ///
    /// Both post mounts must be present. On failure the title and
    /// heading stay as the shell had them and the body becomes a
    /// not-found note.
    pub fn single_post(&self, shell: &mut Shell, id: Option<&str>) -> WidgetOutcome {
        let Some(id) = id.filter(|id| !id.is_empty()) else {
            return WidgetOutcome::Skipped {
                reason: "no post id",
            };
        };
        if !shell.has_element(mounts::POST_CONTENT) || !shell.has_element(mounts::POST_TITLE) {
            return WidgetOutcome::Skipped {
                reason: "no post mounts",
            };
        }
        match self.source.post(id) {
            Ok(post) => {
                shell.set_title(&format!("{} – {}", post.title.rendered, self.site_name));
                shell.set_text(mounts::POST_TITLE, &post.title.rendered);
                shell.set_inner_html(mounts::POST_CONTENT, &post.content.rendered);
                WidgetOutcome::Rendered
            }
            Err(error) => {
                shell.set_inner_html(mounts::POST_CONTENT, "<p>Post not found.</p>");
                WidgetOutcome::Failed { error }
            }
        }
    }

    /// Renders a static page fetched by slug.
    ///
    /// The heading mount must be present; the body mount is optional.
    /// When the slug matches nothing, or the fetch fails, the heading
    /// falls back to a humanized form of the slug.
    pub fn static_page(&self, shell: &mut Shell, slug: Option<&str>) -> WidgetOutcome {
        let Some(slug) = slug else {
            return WidgetOutcome::Skipped {
                reason: "no page slug",
            };
        };
        if !shell.has_element(mounts::PAGE_TITLE) {
            return WidgetOutcome::Skipped {
                reason: "no page mounts",
            };
        }
        match self.source.page_by_slug(slug) {
            Ok(pages) => match pages.first() {
                Some(page) => {
                    shell.set_title(&format!("{} – {}", page.title.rendered, self.site_name));
                    shell.set_text(mounts::PAGE_TITLE, &page.title.rendered);
                    if let Some(content) = &page.content {
                        shell.set_inner_html(mounts::PAGE_CONTENT, &content.rendered);
                    }
                    WidgetOutcome::Rendered
                }
                None => {
                    self.fallback_heading(shell, slug);
                    WidgetOutcome::Rendered
                }
            },
            Err(error) => {
                self.fallback_heading(shell, slug);
                WidgetOutcome::Failed { error }
            }
        }
    }

    fn fallback_heading(&self, shell: &mut Shell, slug: &str) {
        shell.set_text(
            mounts::PAGE_TITLE,
            &format!("{} – {}", humanize_slug(slug), self.site_name),
        );
    }

    /// Renders the hero slider and hands the shell to the carousel.
    ///
    /// Zero slides and fetch failures both put an inline note in the
    /// mount and leave the carousel uninitialized.
    pub fn slider(&self, shell: &mut Shell) -> WidgetOutcome {
        if !shell.has_element(mounts::SLIDER) {
            return WidgetOutcome::Skipped {
                reason: "no slider mount",
            };
        }
        match self.source.slider_items() {
            Ok(items) if items.is_empty() => {
                shell.set_inner_html(
                    mounts::SLIDER,
                    r#"<p class="text-center text-white">No slides yet.</p>"#,
                );
                WidgetOutcome::Rendered
            }
            Ok(items) => {
                shell.set_inner_html(mounts::SLIDER, &slides(&items));
                self.carousel.initialize(shell, mounts::SLIDER);
                WidgetOutcome::Rendered
            }
            Err(error) => {
                shell.set_inner_html(
                    mounts::SLIDER,
                    r#"<p class="text-center text-white">Failed to load slides.</p>"#,
                );
                WidgetOutcome::Failed { error }
            }
        }
    }
}
