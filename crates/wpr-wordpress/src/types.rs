//! `WordPress` content types.
//!
//! The REST payloads are loosely shaped: embedded media, custom fields and
//! excerpts come and go per item, and which fields a page carries depends on
//! the `_fields` filter the request used. Optional structure is modelled as
//! such and read through accessors with explicit defaults.
//!
//! Invariant: `rendered` values are trusted, pre-sanitized HTML produced by
//! `WordPress` itself and are injected into pages without escaping. Only
//! plain-text contexts (document titles, headings, image alt text) escape or
//! strip them.

use serde::Deserialize;

/// Wrapper for `WordPress` "rendered" fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Rendered {
    /// Pre-rendered HTML fragment.
    #[serde(default)]
    pub rendered: String,
}

/// A `WordPress` page.
///
/// Navigation fetches `id,slug,title,link`; slug lookups fetch
/// `title,content`. Every field is therefore optional at the wire level.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Page {
    /// Page ID.
    pub id: u64,
    /// URL slug.
    pub slug: String,
    /// Page title.
    pub title: Rendered,
    /// Canonical link.
    pub link: Option<String>,
    /// Page body.
    pub content: Option<Rendered>,
}

/// A `WordPress` post.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    /// Post ID.
    pub id: u64,
    /// Post title.
    pub title: Rendered,
    /// Post excerpt. Absent when the post has none.
    #[serde(default)]
    pub excerpt: Option<Rendered>,
    /// Post body.
    pub content: Rendered,
    /// Embedded related objects (requested via `_embed`).
    #[serde(rename = "_embedded", default)]
    pub embedded: Embedded,
}

impl Post {
    /// URL of the first embedded featured image, if any.
    #[must_use]
    pub fn featured_image_url(&self) -> Option<&str> {
        self.embedded.featured_image_url()
    }
}

/// A slider entry (custom `slider_item` post type).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SliderItem {
    /// Slide title.
    pub title: Rendered,
    /// Slide body.
    pub content: Rendered,
    /// Embedded related objects (requested via `_embed`).
    #[serde(rename = "_embedded")]
    pub embedded: Embedded,
    /// ACF custom fields. `None` when the plugin is inactive (`WordPress` then
    /// sends `false` instead of an object).
    #[serde(deserialize_with = "acf_or_none")]
    pub acf: Option<Acf>,
}

impl SliderItem {
    /// Button label, `Learn More` when unset.
    #[must_use]
    pub fn button_text(&self) -> &str {
        self.acf
            .as_ref()
            .and_then(|acf| acf.button_text.as_deref())
            .filter(|text| !text.is_empty())
            .unwrap_or("Learn More")
    }

    /// Button destination, `#` when unset.
    #[must_use]
    pub fn button_url(&self) -> &str {
        self.acf
            .as_ref()
            .and_then(|acf| acf.button_url.as_deref())
            .filter(|url| !url.is_empty())
            .unwrap_or("#")
    }

    /// Phrase to decorate inside the title, if configured.
    #[must_use]
    pub fn highlight_word(&self) -> Option<&str> {
        self.acf
            .as_ref()
            .and_then(|acf| acf.highlight_word.as_deref())
            .filter(|word| !word.is_empty())
    }

    /// URL of the first embedded featured image, if any.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.embedded.featured_image_url()
    }
}

/// `_embedded` envelope attached by the `_embed` query flag.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Embedded {
    /// Featured media objects.
    #[serde(rename = "wp:featuredmedia", default)]
    pub featured_media: Vec<Media>,
}

impl Embedded {
    /// First media URL, skipping entries without one (`WordPress` embeds an
    /// error object in place of inaccessible media).
    fn featured_image_url(&self) -> Option<&str> {
        self.featured_media
            .first()
            .map(|media| media.source_url.as_str())
            .filter(|url| !url.is_empty())
    }
}

/// An embedded media object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Media {
    /// Direct URL of the media file.
    #[serde(default)]
    pub source_url: String,
}

/// Advanced Custom Fields payload on slider items.
///
/// Field values arrive untyped; anything that is not a string is treated as
/// unset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Acf {
    /// Call-to-action label.
    #[serde(deserialize_with = "string_or_none")]
    pub button_text: Option<String>,
    /// Call-to-action destination.
    #[serde(deserialize_with = "string_or_none")]
    pub button_url: Option<String>,
    /// Phrase to underline inside the slide title.
    #[serde(deserialize_with = "string_or_none")]
    pub highlight_word: Option<String>,
}

/// Accept any JSON value, keeping only strings.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Accept the `acf` field as either an object or any other value.
fn acf_or_none<'de, D>(deserializer: D) -> Result<Option<Acf>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
