//! Per-request widget dispatch.
//!
//! Which widgets run is decided from the request path alone; the same
//! rules drive live hydration and the offline shell check.

use tracing::debug;

use crate::mounts;
use crate::request::PageRequest;
use crate::shell::Shell;
use crate::widgets::{WidgetOutcome, Widgets};

/// The widgets a request can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Nav,
    BlogList,
    ProductList,
    SinglePost,
    StaticPage,
    Slider,
}

impl WidgetKind {
    /// Name used in logs and check reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Nav => "nav",
            Self::BlogList => "blog list",
            Self::ProductList => "product list",
            Self::SinglePost => "single post",
            Self::StaticPage => "static page",
            Self::Slider => "slider",
        }
    }

    /// Mount ids this widget needs in a shell.
    pub fn mounts(self) -> &'static [&'static str] {
        match self {
            Self::Nav => &[mounts::NAV_LIST],
            Self::BlogList => &[mounts::BLOG_LIST],
            Self::ProductList => &[mounts::PRODUCT_LIST],
            Self::SinglePost => &[mounts::POST_TITLE, mounts::POST_CONTENT],
            Self::StaticPage => &[mounts::PAGE_TITLE],
            Self::Slider => &[mounts::SLIDER],
        }
    }
}

/// Result of running one widget during hydration.
#[derive(Debug)]
pub struct WidgetRun {
    pub widget: WidgetKind,
    pub outcome: WidgetOutcome,
}

/// Widgets that apply to a request path, in execution order.
///
/// The nav and slider run everywhere. The listing and post widgets key
/// off the requested file name. The static-page widget runs for any
/// page-like path and relies on its mount check to stand down on
/// shells that are not static pages.
pub fn plan(path: &str) -> Vec<WidgetKind> {
    let mut kinds = vec![WidgetKind::Nav];
    if path.ends_with("blog.html") {
        kinds.push(WidgetKind::BlogList);
    }
    if path.ends_with("products.html") {
        kinds.push(WidgetKind::ProductList);
    }
    if path.ends_with("post.html") {
        kinds.push(WidgetKind::SinglePost);
    }
    if path.contains("about") || path.contains("contact") || path.ends_with(".html") {
        kinds.push(WidgetKind::StaticPage);
    }
    kinds.push(WidgetKind::Slider);
    kinds
}

/// Runs every widget the request calls for and reports what each did.
pub fn hydrate(widgets: &Widgets<'_>, shell: &mut Shell, request: &PageRequest) -> Vec<WidgetRun> {
    plan(request.path())
        .into_iter()
        .map(|kind| {
            let outcome = match kind {
                WidgetKind::Nav => widgets.nav(shell),
                WidgetKind::BlogList => widgets.blog_list(shell),
                WidgetKind::ProductList => widgets.product_list(shell),
                WidgetKind::SinglePost => {
                    widgets.single_post(shell, request.post_id().as_deref())
                }
                WidgetKind::StaticPage => widgets.static_page(shell, request.page_slug()),
                WidgetKind::Slider => widgets.slider(shell),
            };
            debug!(widget = kind.label(), outcome = ?outcome, "widget finished");
            WidgetRun {
                widget: kind,
                outcome,
            }
        })
        .collect()
}
