//! HTTP request handlers.

pub(crate) mod pages;

use std::path::Path;

/// Validate that a request path doesn't escape the shell directory.
///
/// Rejects paths containing parent directory components (`..`) to prevent
/// path traversal attacks (e.g., `../../../etc/passwd`). Leading slashes
/// are already stripped by the caller.
pub(crate) fn validate_path(path: &str) -> bool {
    !Path::new(path)
        .components()
        .any(|c| matches!(c, std::path::Component::ParentDir))
}
