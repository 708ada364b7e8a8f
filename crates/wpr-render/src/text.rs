//! Small text transforms shared by the fragment builders.

use std::sync::LazyLock;

use regex::Regex;

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("invalid tag regex"));

/// Removes HTML tags from rendered text, leaving the inner text as-is.
///
/// Used where markup from the CMS must land inside an attribute value,
/// e.g. the `alt` text of a slide image.
pub fn strip_tags(html: &str) -> String {
    TAG_PATTERN.replace_all(html, "").into_owned()
}

/// Turns a page slug into a display heading: the first letter is
/// uppercased and the first hyphen becomes a space. Later hyphens stay,
/// so `"multi-part-slug"` becomes `"Multi part-slug"`.
pub fn humanize_slug(slug: &str) -> String {
    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => {
            let mut out = first.to_uppercase().collect::<String>();
            out.push_str(&chars.as_str().replacen('-', " ", 1));
            out
        }
        None => String::new(),
    }
}

/// Escapes text for safe interpolation into HTML.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
