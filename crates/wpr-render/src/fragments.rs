//! Markup fragments built from fetched content.
//!
//! Every builder returns an HTML string ready to be spliced into a page
//! shell. `rendered` fields coming from the CMS are trusted markup from
//! site editors and are interpolated without escaping; only values that
//! land inside attribute positions of our own tags get sanitized.

use std::fmt::Write;

use wpr_wordpress::{Page, Post, SliderItem};

use crate::highlight::highlight_title;
use crate::svg;
use crate::text::strip_tags;

const NO_IMAGE: &str = r#"<div class="no-image" style="height:200px;background:#eee;display:flex;align-items:center;justify-content:center;color:#999;">No image</div>"#;

/// One entry in the site navigation.
#[derive(Debug, Clone)]
pub struct NavEntry {
    pub label: String,
    pub href: String,
}

impl NavEntry {
    /// The synthetic first entry pointing at the site root.
    pub fn home() -> Self {
        Self {
            label: "Home".to_owned(),
            href: "index.html".to_owned(),
        }
    }
}

impl From<&Page> for NavEntry {
    fn from(page: &Page) -> Self {
        let href = if page.slug.is_empty() {
            page.link.clone().unwrap_or_default()
        } else {
            format!("{}.html", page.slug)
        };
        Self {
            label: page.title.rendered.clone(),
            href,
        }
    }
}

/// Builds the `<li>` items for the navigation list.
pub fn nav_list(entries: &[NavEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        write!(
            out,
            r#"<li><a href="{}">{}</a></li>"#,
            entry.href, entry.label
        )
        .unwrap();
    }
    out
}

/// Builds one `<article class="card">` per post for a listing page.
///
/// Posts without a featured image get a fixed placeholder block instead
/// of an `<img>` tag. A missing excerpt leaves the excerpt container
/// empty rather than dropping it.
pub fn post_cards(posts: &[Post]) -> String {
    let mut out = String::new();
    for post in posts {
        out.push_str(r#"<article class="card">"#);
        match post.featured_image_url() {
            Some(url) => {
                write!(out, r#"<img src="{url}" alt="{}">"#, post.title.rendered).unwrap();
            }
            None => out.push_str(NO_IMAGE),
        }
        let excerpt = post.excerpt.as_ref().map_or("", |e| e.rendered.as_str());
        write!(
            out,
            r#"<div class="body"><h3>{}</h3><div class="excerpt">{excerpt}</div><a href="post.html?id={}" class="btn">Read more</a></div></article>"#,
            post.title.rendered, post.id
        )
        .unwrap();
    }
    out
}

/// Builds the hero slides.
///
/// Each slide is a two-column grid: title, body and call-to-action on
/// the left, the featured image on the right. The image tag is always
/// emitted; a slide without media gets an empty `src`.
pub fn slides(items: &[SliderItem]) -> String {
    let mut out = String::new();
    for item in items {
        let title = highlight_title(
            &item.title.rendered,
            item.highlight_word().unwrap_or_default(),
        );
        out.push_str(r#"<div class="slide"><div class="container grid md:grid-cols-2 gap-12 items-center py-16 md:py-24">"#);
        write!(
            out,
            r#"<div><h1 class="text-4xl md:text-5xl lg:text-6xl font-bold leading-tight mb-6">{title}</h1><div class="prose prose-lg mb-8 max-w-none">{}</div><a href="{}" class="btn-primary inline-flex items-center gap-3 text-lg">{} {}</a></div>"#,
            item.content.rendered,
            item.button_url(),
            item.button_text(),
            svg::ARROW
        )
        .unwrap();
        write!(
            out,
            r#"<div class="flex justify-center"><img src="{}" alt="{}" class="rounded-xl shadow-2xl max-w-full h-auto" style="max-height:520px;"></div>"#,
            item.image_url().unwrap_or_default(),
            strip_tags(&item.title.rendered)
        )
        .unwrap();
        out.push_str("</div></div>");
    }
    out
}
