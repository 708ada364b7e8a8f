//! Page hydration endpoint.
//!
//! Resolves request paths to page shells, hydrates their mount points
//! with `WordPress` content, and returns the assembled document.

use std::sync::Arc;

use axum::extract::State;
use axum::http::Uri;
use axum::response::{Html, IntoResponse, Response};
use wpr_site::{PageRequest, Shell, WidgetOutcome, Widgets, hydrate, shell_name};

use crate::error::ServerError;
use crate::handlers::validate_path;
use crate::state::AppState;
use crate::static_files;

/// What a request path resolves to.
#[derive(Debug, PartialEq, Eq)]
enum Target {
    /// A page shell to hydrate (path relative to the shell directory).
    Shell(String),
    /// A static asset served verbatim.
    Asset(String),
}

/// Map a request path (leading slash stripped) to a shell or an asset.
///
/// The root serves `index.html`. Extensionless paths serve the shell of
/// the same name, so `/about` and `/about.html` hydrate the same page.
fn classify(path: &str) -> Target {
    if !path.is_empty() && !path.ends_with(".html") {
        let file_name = path.rsplit('/').next().unwrap_or(path);
        if file_name.contains('.') {
            return Target::Asset(path.to_owned());
        }
    }
    Target::Shell(shell_name(path))
}

/// Handle any request: hydrate a page shell or serve a static asset.
pub(crate) async fn serve_page(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<Response, ServerError> {
    let path = uri.path().trim_start_matches('/').to_owned();

    match classify(&path) {
        Target::Asset(asset) => static_files::serve_asset(&state.shell_dir, &asset),
        Target::Shell(shell) => {
            if !validate_path(&shell) {
                return Err(ServerError::ShellNotFound(state.shell_dir.join(shell)));
            }
            let query = uri.query().map(str::to_owned);
            let html = hydrate_shell(state, shell, path, query).await?;
            Ok(Html(html).into_response())
        }
    }
}

/// Load a shell and run every widget its path calls for.
///
/// The `WordPress` client is blocking, so the whole pass runs on the
/// blocking thread pool.
async fn hydrate_shell(
    state: Arc<AppState>,
    shell: String,
    path: String,
    query: Option<String>,
) -> Result<String, ServerError> {
    tokio::task::spawn_blocking(move || {
        let shell_path = state.shell_dir.join(&shell);
        let mut page = match Shell::load(&shell_path) {
            Ok(page) => page,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ServerError::ShellNotFound(shell_path));
            }
            Err(e) => return Err(ServerError::Io(e)),
        };

        // Dispatch on the shell name, not the raw path, so extensionless
        // requests hydrate exactly like their .html form.
        let request = PageRequest::new(&shell, query.as_deref());
        let widgets = Widgets::new(
            state.source.as_ref(),
            state.carousel.as_ref(),
            &state.site_name,
            state.products_category,
        );
        let runs = hydrate(&widgets, &mut page, &request);

        // Log widget failures in verbose mode
        if state.verbose {
            for run in &runs {
                if let WidgetOutcome::Failed { error } = &run.outcome {
                    tracing::warn!(
                        path = %path,
                        widget = run.widget.label(),
                        error = %error,
                        "Widget failed"
                    );
                }
            }
        }

        Ok(page.into_html())
    })
    .await?
}

#[cfg(test)]
mod tests {
    use axum::http::{StatusCode, header};
    use pretty_assertions::assert_eq;
    use wpr_site::SlickCarousel;
    use wpr_wordpress::{Embedded, MockSource, Post, Rendered};

    use super::*;

    #[test]
    fn test_classify_root() {
        assert_eq!(classify(""), Target::Shell("index.html".to_owned()));
    }

    #[test]
    fn test_classify_shell() {
        assert_eq!(classify("blog.html"), Target::Shell("blog.html".to_owned()));
    }

    #[test]
    fn test_classify_extensionless_path() {
        assert_eq!(classify("about"), Target::Shell("about.html".to_owned()));
    }

    #[test]
    fn test_classify_nested_shell() {
        assert_eq!(
            classify("pages/post.html"),
            Target::Shell("pages/post.html".to_owned())
        );
    }

    #[test]
    fn test_classify_asset() {
        assert_eq!(classify("style.css"), Target::Asset("style.css".to_owned()));
    }

    #[test]
    fn test_classify_nested_asset() {
        assert_eq!(
            classify("img/logo.svg"),
            Target::Asset("img/logo.svg".to_owned())
        );
    }

    #[test]
    fn test_classify_dotted_directory_with_plain_file() {
        assert_eq!(
            classify("v1.2/about"),
            Target::Shell("v1.2/about.html".to_owned())
        );
    }

    const BLOG_SHELL: &str = r#"<html>
<head><title>Kool Box</title></head>
<body>
<ul id="nav-list"></ul>
<div id="blog-list"></div>
</body>
</html>"#;

    const POST_SHELL: &str = r#"<html>
<head><title>Kool Box</title></head>
<body>
<h1 id="post-title">placeholder</h1>
<div id="post-content"></div>
</body>
</html>"#;

    fn post(id: u64, title: &str) -> Post {
        Post {
            id,
            title: Rendered {
                rendered: title.to_owned(),
            },
            excerpt: Some(Rendered {
                rendered: "<p>teaser</p>".to_owned(),
            }),
            content: Rendered {
                rendered: "<p>full body</p>".to_owned(),
            },
            embedded: Embedded::default(),
        }
    }

    fn test_state(dir: &tempfile::TempDir, source: MockSource) -> Arc<AppState> {
        Arc::new(AppState {
            source: Arc::new(source),
            carousel: Arc::new(SlickCarousel),
            shell_dir: dir.path().to_path_buf(),
            site_name: "Kool Box".to_owned(),
            products_category: None,
            verbose: false,
        })
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_serve_page_hydrates_listing_shell() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("blog.html"), BLOG_SHELL).unwrap();
        let state = test_state(&dir, MockSource::new().with_post(post(9, "Server Story")));

        let response = serve_page(State(state), Uri::from_static("/blog.html"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("<h3>Server Story</h3>"));
        assert!(html.contains("post.html?id=9"));
        assert!(html.contains(r#"<a href="index.html">Home</a>"#));
    }

    #[tokio::test]
    async fn test_serve_page_extensionless_path_hydrates_like_shell() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("blog.html"), BLOG_SHELL).unwrap();
        let state = test_state(&dir, MockSource::new().with_post(post(9, "Server Story")));

        let response = serve_page(State(state), Uri::from_static("/blog"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("<h3>Server Story</h3>"));
    }

    #[tokio::test]
    async fn test_serve_page_passes_query_to_post_widget() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("post.html"), POST_SHELL).unwrap();
        let state = test_state(&dir, MockSource::new().with_post(post(9, "Server Story")));

        let response = serve_page(State(state), Uri::from_static("/post.html?id=9"))
            .await
            .unwrap();

        let html = body_text(response).await;
        assert!(html.contains("<title>Server Story – Kool Box</title>"));
        assert!(html.contains("<p>full body</p>"));
    }

    #[tokio::test]
    async fn test_serve_page_missing_shell() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir, MockSource::new());

        let err = serve_page(State(state), Uri::from_static("/missing.html"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServerError::ShellNotFound(_)));
    }

    #[tokio::test]
    async fn test_serve_page_rejects_shell_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir, MockSource::new());

        let err = serve_page(State(state), Uri::from_static("/../secret.html"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServerError::ShellNotFound(_)));
    }

    #[tokio::test]
    async fn test_serve_page_serves_asset() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("style.css"), "body { margin: 0; }").unwrap();
        let state = test_state(&dir, MockSource::new());

        let response = serve_page(State(state), Uri::from_static("/style.css"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/css"
        );
    }
}
