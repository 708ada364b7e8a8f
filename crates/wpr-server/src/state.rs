//! Application state.
//!
//! Shared state for all request handlers.

use std::path::PathBuf;
use std::sync::Arc;

use wpr_site::Carousel;
use wpr_wordpress::ContentSource;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Content source backing every widget run.
    pub(crate) source: Arc<dyn ContentSource>,
    /// Carousel installed on hydrated slider mounts.
    pub(crate) carousel: Arc<dyn Carousel>,
    /// Directory containing page shells and static assets.
    pub(crate) shell_dir: PathBuf,
    /// Site name appended to document titles.
    pub(crate) site_name: String,
    /// Category id that scopes the products listing.
    pub(crate) products_category: Option<u32>,
    /// Enable verbose output (log widget failures).
    pub(crate) verbose: bool,
}
