//! Static file serving.
//!
//! Serves stylesheets, scripts, and images from the shell directory.

use std::path::Path;

use axum::body::Body;
use axum::http::{StatusCode, header};
use axum::response::Response;

use crate::error::ServerError;
use crate::handlers::validate_path;

/// Serve a static file from the shell directory.
pub(crate) fn serve_asset(shell_dir: &Path, asset: &str) -> Result<Response, ServerError> {
    if !validate_path(asset) {
        return Err(ServerError::FileNotFound(asset.to_owned()));
    }

    let file_path = shell_dir.join(asset);
    let content = match std::fs::read(&file_path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ServerError::FileNotFound(asset.to_owned()));
        }
        Err(e) => return Err(ServerError::Io(e)),
    };

    let mime = mime_guess::from_path(&file_path).first_or_octet_stream();
    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref())
        .body(Body::from(content))
        .unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_asset_sets_content_type() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("style.css"), "body { margin: 0; }").unwrap();

        let response = serve_asset(dir.path(), "style.css").unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/css"
        );
    }

    #[test]
    fn test_serve_asset_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let err = serve_asset(dir.path(), "missing.css").unwrap_err();

        assert!(matches!(err, ServerError::FileNotFound(_)));
    }

    #[test]
    fn test_serve_asset_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();

        let err = serve_asset(dir.path(), "../etc/passwd").unwrap_err();

        assert!(matches!(err, ServerError::FileNotFound(_)));
    }
}
