//! HTML fragment rendering for wpr.
//!
//! Pure string builders: content items in, markup out, no I/O. Rendered
//! titles, bodies and excerpts are trusted `WordPress` HTML and pass through
//! unescaped (see the trust invariant on `wpr_wordpress`'s types); plain-text
//! contexts go through [`escape_html`] or [`strip_tags`].

mod fragments;
mod highlight;
pub mod svg;
mod text;

pub use fragments::{NavEntry, nav_list, post_cards, slides};
pub use highlight::highlight_title;
pub use text::{escape_html, humanize_slug, strip_tags};
