//! Data model and DOM-free logic shared by the portfolio frontend and CLI.
//!
//! Nothing in here touches `web_sys`, so everything can be unit tested on the
//! host target.

pub mod carousel;
pub mod content;
pub mod image;
pub mod reveal;
pub mod sections;

pub use carousel::{advance, target_offset, ClampedStrip, Direction, ScrollSurface};
pub use content::{
    About, Connect, ContactKind, ContactLink, ContentError, Experience, Owner, Portfolio, Project,
    SkillGroup, SkillIcon,
};
pub use image::{fallback_avatar_url, FallbackAction, ImageFallback};
pub use reveal::{should_reveal, ViewportRect, REVEAL_THRESHOLD};
pub use sections::{section_scroll_top, Section, NAV_OFFSET_PX};
