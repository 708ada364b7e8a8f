//! `WordPress` REST API client.
//!
//! Provides a sync HTTP client for the `WordPress` REST API (`wp/v2` plus the
//! custom `slider_item` post type) and the typed content model the rest of
//! wpr renders from. The [`ContentSource`] trait is the seam between the
//! widget layer and the network: production code uses [`WpClient`], tests
//! substitute [`MockSource`] (behind the `mock` feature flag).

mod client;
mod error;
#[cfg(feature = "mock")]
mod mock;
mod types;

pub use client::{ContentSource, WpClient};
pub use error::WpError;
#[cfg(feature = "mock")]
pub use mock::MockSource;
pub use types::{Acf, Embedded, Media, Page, Post, Rendered, SliderItem};
