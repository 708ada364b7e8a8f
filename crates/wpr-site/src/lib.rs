//! Page shells and server-side hydration for wpr.
//!
//! This crate provides:
//! - [`Shell`]: an HTML page shell with id-addressed mount points
//! - [`Widgets`]: the content widgets that fill those mount points
//! - [`hydrate`]/[`plan`]: per-request widget dispatch
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use wpr_site::{PageRequest, Shell, SlickCarousel, Widgets, hydrate};
//! use wpr_wordpress::WpClient;
//!
//! let client = WpClient::new("https://example.com/wp-json/wp/v2");
//! let widgets = Widgets::new(&client, &SlickCarousel, "Kool Box", None);
//!
//! let mut shell = Shell::load("site/blog.html".as_ref())?;
//! let request = PageRequest::new("blog.html", None);
//! hydrate(&widgets, &mut shell, &request);
//!
//! let html = shell.into_html();
//! # Ok(())
//! # }
//! ```

mod carousel;
mod dispatch;
pub mod mounts;
mod request;
mod shell;
mod widgets;

pub use carousel::{Carousel, SlickCarousel};
pub use dispatch::{WidgetKind, WidgetRun, hydrate, plan};
pub use request::{PageRequest, shell_name};
pub use shell::Shell;
pub use widgets::{WidgetOutcome, Widgets};
