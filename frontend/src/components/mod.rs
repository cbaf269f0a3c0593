// Reusable components live here.

pub mod card;
pub mod error_banner;
pub mod icons;
pub mod image_with_fallback;
pub mod nav_bar;
pub mod project_carousel;
pub mod reveal;
