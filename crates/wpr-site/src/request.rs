//! Incoming page requests.

use percent_encoding::percent_decode_str;

/// A request for one shell: the shell path plus the raw query string.
#[derive(Debug, Clone)]
pub struct PageRequest {
    path: String,
    query: Option<String>,
}

impl PageRequest {
    /// Wraps a normalized shell path (e.g. `blog.html`) and the query
    /// string the client sent, without its leading `?`.
    pub fn new(path: &str, query: Option<&str>) -> Self {
        Self {
            path: path.to_owned(),
            query: query.map(str::to_owned),
        }
    }

    /// Shell path relative to the shell directory.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The `id` query parameter. An empty value counts as absent.
    pub fn post_id(&self) -> Option<String> {
        self.query
            .as_deref()
            .and_then(|query| query_param(query, "id"))
            .filter(|id| !id.is_empty())
    }

    /// Slug for the static-page widget: the final path segment with its
    /// `.html` suffix removed. `None` for the home page.
    pub fn page_slug(&self) -> Option<&str> {
        let segment = self.path.rsplit('/').next().unwrap_or(&self.path);
        let slug = segment.strip_suffix(".html").unwrap_or(segment);
        (!slug.is_empty() && slug != "index").then_some(slug)
    }
}

/// Shell file name for a request path.
///
/// The root maps to `index.html`; extensionless paths get `.html`
/// appended, so `/about` and `/about.html` resolve to the same shell.
pub fn shell_name(path: &str) -> String {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        "index.html".to_owned()
    } else if path.ends_with(".html") {
        path.to_owned()
    } else {
        format!("{path}.html")
    }
}

/// First value for `key` in a URL query string, form-decoded.
pub fn query_param(query: &str, key: &str) -> Option<String> {
    for pair in query.split('&') {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        if decode_component(name) == key {
            return Some(decode_component(value));
        }
    }
    None
}

fn decode_component(component: &str) -> String {
    let spaced = component.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_post_id_from_query() {
        let request = PageRequest::new("post.html", Some("id=42"));
        assert_eq!(request.post_id(), Some("42".to_owned()));
    }

    #[test]
    fn test_post_id_missing() {
        assert_eq!(PageRequest::new("post.html", None).post_id(), None);
        assert_eq!(
            PageRequest::new("post.html", Some("page=2")).post_id(),
            None
        );
    }

    #[test]
    fn test_empty_post_id_counts_as_absent() {
        assert_eq!(PageRequest::new("post.html", Some("id=")).post_id(), None);
        assert_eq!(PageRequest::new("post.html", Some("id")).post_id(), None);
    }

    #[test]
    fn test_query_param_decodes_values() {
        assert_eq!(
            query_param("q=kool+box&id=a%2Fb", "id"),
            Some("a/b".to_owned())
        );
        assert_eq!(query_param("q=kool+box", "q"), Some("kool box".to_owned()));
    }

    #[test]
    fn test_query_param_takes_first_value() {
        assert_eq!(query_param("id=1&id=2", "id"), Some("1".to_owned()));
    }

    #[test]
    fn test_page_slug_strips_html_suffix() {
        assert_eq!(
            PageRequest::new("about.html", None).page_slug(),
            Some("about")
        );
    }

    #[test]
    fn test_page_slug_keeps_inner_hyphens() {
        assert_eq!(
            PageRequest::new("our-farm-story.html", None).page_slug(),
            Some("our-farm-story")
        );
    }

    #[test]
    fn test_index_has_no_page_slug() {
        assert_eq!(PageRequest::new("index.html", None).page_slug(), None);
        assert_eq!(PageRequest::new("", None).page_slug(), None);
    }

    #[test]
    fn test_page_slug_uses_final_segment() {
        assert_eq!(
            PageRequest::new("pages/contact.html", None).page_slug(),
            Some("contact")
        );
    }

    #[test]
    fn test_shell_name_root_is_index() {
        assert_eq!(shell_name(""), "index.html");
        assert_eq!(shell_name("/"), "index.html");
    }

    #[test]
    fn test_shell_name_appends_html() {
        assert_eq!(shell_name("about"), "about.html");
        assert_eq!(shell_name("/about"), "about.html");
    }

    #[test]
    fn test_shell_name_keeps_html_paths() {
        assert_eq!(shell_name("blog.html"), "blog.html");
        assert_eq!(shell_name("pages/post.html"), "pages/post.html");
    }
}
