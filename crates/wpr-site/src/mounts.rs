//! Element ids the widgets look for inside a page shell.
//!
//! A shell opts into a widget by carrying the matching id; widgets skip
//! shells that lack theirs.

/// Navigation list, present on every shell.
pub const NAV_LIST: &str = "nav-list";

/// Card grid on the blog listing shell.
pub const BLOG_LIST: &str = "blog-list";

/// Card grid on the products listing shell.
pub const PRODUCT_LIST: &str = "product-list";

/// Heading on the single-post shell.
pub const POST_TITLE: &str = "post-title";

/// Body container on the single-post shell.
pub const POST_CONTENT: &str = "post-content";

/// Heading on static page shells.
pub const PAGE_TITLE: &str = "page-title";

/// Optional body container on static page shells.
pub const PAGE_CONTENT: &str = "page-content";

/// Hero slider container.
pub const SLIDER: &str = "koolbox-slider";
