//! Carousel bootstrap.
//!
//! The slider widget hands the filled shell to a [`Carousel`] instead of
//! emitting script tags itself, so the client-side wiring stays
//! swappable and tests can observe initialization without one.

use wpr_render::svg;

use crate::shell::Shell;

/// Client-side carousel wiring applied after slides are spliced in.
pub trait Carousel: Send + Sync {
    /// Injects whatever the page needs to turn the mount into a live
    /// carousel.
    fn initialize(&self, shell: &mut Shell, mount_id: &str);
}

/// Slick carousel bootstrap.
///
/// The shells load `jQuery` and slick themselves; this appends only the
/// per-page init call with the site's fixed settings.
pub struct SlickCarousel;

impl Carousel for SlickCarousel {
    fn initialize(&self, shell: &mut Shell, mount_id: &str) {
        shell.append_body(&init_script(mount_id));
    }
}

fn init_script(mount_id: &str) -> String {
    format!(
        r#"<script>
$('#{mount_id}').slick({{
  autoplay: true,
  autoplaySpeed: 6000,
  fade: true,
  cssEase: 'cubic-bezier(0.77,0,0.175,1)',
  speed: 800,
  dots: false,
  arrows: true,
  appendArrows: $('.hero-slider'),
  prevArrow: '<button type="button" class="slick-prev">{prev}</button>',
  nextArrow: '<button type="button" class="slick-next">{next}</button>',
  customPaging: () => '<button class="slick-dot"></button>'
}});
</script>"#,
        prev = svg::CHEVRON_LEFT,
        next = svg::CHEVRON_RIGHT,
    )
}
