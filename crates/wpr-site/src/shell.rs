//! HTML page shells.
//!
//! A shell is a static HTML document with id-addressed mount points.
//! Widgets splice fetched markup into those mounts without building a
//! DOM: the shell locates an element by its `id` attribute, finds the
//! matching close tag (counting nested same-name tags) and replaces
//! the text in between. Matching is ASCII case-sensitive; shells are
//! expected to use lowercase markup.

use std::fs;
use std::io;
use std::path::Path;

use wpr_render::escape_html;

/// An HTML document being prepared for one response.
#[derive(Debug, Clone)]
pub struct Shell {
    html: String,
}

impl Shell {
    /// Wraps an HTML document.
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// Reads a shell from disk.
    pub fn load(path: &Path) -> io::Result<Self> {
        Ok(Self::new(fs::read_to_string(path)?))
    }

    /// Whether the document contains an element with this id.
    pub fn has_element(&self, id: &str) -> bool {
        element_bounds(&self.html, id).is_some()
    }

    /// Replaces the inner HTML of the element with this id.
    ///
    /// Returns `false` without touching the document when no such
    /// element exists.
    pub fn set_inner_html(&mut self, id: &str, html: &str) -> bool {
        match element_bounds(&self.html, id) {
            Some((start, end)) => {
                self.html.replace_range(start..end, html);
                true
            }
            None => false,
        }
    }

    /// Replaces the inner content of the element with this id with
    /// escaped text.
    pub fn set_text(&mut self, id: &str, text: &str) -> bool {
        self.set_inner_html(id, &escape_html(text))
    }

    /// Replaces the document title. Returns `false` when the document
    /// has no `<title>` element.
    pub fn set_title(&mut self, title: &str) -> bool {
        match tag_inner_bounds(&self.html, "title") {
            Some((start, end)) => {
                self.html.replace_range(start..end, &escape_html(title));
                true
            }
            None => false,
        }
    }

    /// Appends markup at the end of the body, or at the end of the
    /// document when no `</body>` is present.
    pub fn append_body(&mut self, html: &str) {
        match self.html.rfind("</body>") {
            Some(pos) => self.html.insert_str(pos, html),
            None => self.html.push_str(html),
        }
    }

    /// The document as it currently stands.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Finishes editing and returns the document.
    pub fn into_html(self) -> String {
        self.html
    }
}

/// Inner bounds of the element carrying this id: the byte range between
/// the end of its open tag and the start of its matching close tag.
fn element_bounds(html: &str, id: &str) -> Option<(usize, usize)> {
    let attr = find_id_attr(html, id)?;
    let tag_start = html[..attr].rfind('<')?;
    let tag = tag_name(&html[tag_start + 1..])?;
    let open_end = html[attr..].find('>').map(|i| attr + i + 1)?;
    if html.as_bytes()[open_end - 2] == b'/' {
        // Self-closing tags have no inner content to edit.
        return None;
    }
    let close = find_close(html, tag, open_end)?;
    Some((open_end, close))
}

fn find_id_attr(html: &str, id: &str) -> Option<usize> {
    for quote in ['"', '\''] {
        let needle = format!("id={quote}{id}{quote}");
        let mut cursor = 0;
        while let Some(pos) = html[cursor..].find(&needle) {
            let pos = cursor + pos;
            if html[..pos].ends_with(|c: char| c.is_ascii_whitespace()) {
                return Some(pos);
            }
            cursor = pos + needle.len();
        }
    }
    None
}

fn tag_name(rest: &str) -> Option<&str> {
    let end = rest.find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')?;
    let name = &rest[..end];
    (!name.is_empty()).then_some(name)
}

/// Position of the close tag matching an open tag that ends at `from`,
/// skipping nested elements with the same tag name.
fn find_close(html: &str, tag: &str, from: usize) -> Option<usize> {
    let open = format!("<{tag}");
    let close = format!("</{tag}");
    let mut depth = 1_usize;
    let mut cursor = from;
    loop {
        let next_close = find_tag_token(html, &close, cursor)?;
        match find_tag_token(html, &open, cursor) {
            Some(next_open) if next_open < next_close => {
                depth += 1;
                cursor = next_open + open.len();
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    return Some(next_close);
                }
                cursor = next_close + close.len();
            }
        }
    }
}

/// Finds `token` at a position where it is followed by a tag-name
/// delimiter, so `<ul` does not match inside `<ulx`.
fn find_tag_token(html: &str, token: &str, from: usize) -> Option<usize> {
    let mut cursor = from;
    while let Some(pos) = html[cursor..].find(token) {
        let pos = cursor + pos;
        match html[pos + token.len()..].chars().next() {
            None | Some('>' | '/') => return Some(pos),
            Some(c) if c.is_ascii_whitespace() => return Some(pos),
            Some(_) => cursor = pos + token.len(),
        }
    }
    None
}

fn tag_inner_bounds(html: &str, tag: &str) -> Option<(usize, usize)> {
    let start = find_tag_token(html, &format!("<{tag}"), 0)?;
    let open_end = html[start..].find('>').map(|i| start + i + 1)?;
    let close = find_tag_token(html, &format!("</{tag}"), open_end)?;
    Some((open_end, close))
}
