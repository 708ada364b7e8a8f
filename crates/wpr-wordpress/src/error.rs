//! Error types for the `WordPress` client.

/// Error from `WordPress` API operations.
#[derive(Debug, thiserror::Error)]
pub enum WpError {
    /// HTTP request failed (network error, timeout, or undecodable body).
    #[error("HTTP request failed: {0}")]
    Http(#[from] ureq::Error),

    /// Server returned a non-success status.
    ///
    /// Listing widgets surface this display string verbatim inside their
    /// inline error paragraph, so the format must stay `WP error {status}`.
    #[error("WP error {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = WpError::Status { status: 404 };

        assert_eq!(err.to_string(), "WP error 404");
    }
}
