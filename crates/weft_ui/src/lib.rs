//! Weft Component Library
//!
//! Themed components built on the `weft_style` composition pipeline and
//! the `weft_theme` token system.
//!
//! # Example
//!
//! ```rust,ignore
//! use weft_theme::ThemeState;
//! use weft_ui::prelude::*;
//!
//! ThemeState::init_default();
//!
//! let rendered = banner("Something needs attention")
//!     .intent(BannerIntent::Warning)
//!     .dismissible(|| println!("dismissed"))
//!     .render();
//! ```

pub mod components;
pub mod element;
pub mod icon;

pub use components::banner::{
    banner, presentation_for, BannerBuilder, BannerIntent, IntentIcon, IntentPresentation,
    RenderedBanner,
};
pub use components::icon_button::{icon_button, IconButtonBuilder};
pub use element::{Accessibility, ClickCallback, Element, ElementHandle, ElementKind, LiveRegion};
pub use icon::IconGlyph;

/// Common imports for building component trees.
pub mod prelude {
    pub use crate::components::banner::{banner, BannerIntent};
    pub use crate::components::icon_button::icon_button;
    pub use crate::element::{container, text, visually_hidden, Element, ElementKind};
    pub use crate::icon::IconGlyph;
    pub use weft_style::{StyleFragment, StyleProps};
}
