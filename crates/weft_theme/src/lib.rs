//! Weft Theme System
//!
//! Palette, semantic colors, and design tokens for the Weft component
//! library.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Palette**: the base table of concrete color values, one entry per
//!   family + shade (`red500`, `charcoal300`, ...)
//! - **Semantic colors**: a nine-role record per intent family
//!   (danger, neutral, primary, secondary)
//! - **Design tokens**: spacing, typography, and radius scales
//! - **Theme state**: a process-wide theme initialized once at startup
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use weft_theme::{IntentFamily, SemanticRole, ThemeState};
//!
//! // Initialize the theme at app startup
//! ThemeState::init_default();
//!
//! // Access theme values in components
//! let theme = ThemeState::get();
//! let danger = theme.semantic(IntentFamily::Danger);
//! let main = theme.resolve(danger.get(SemanticRole::Main));
//! ```
//!
//! # Immutability
//!
//! The theme is constructed once and never mutated afterwards. Every
//! lookup is a pure read, so concurrent renders need no coordination.

pub mod color;
pub mod config;
pub mod error;
pub mod palette;
pub mod radius;
pub mod semantic;
pub mod spacing;
pub mod state;
pub mod theme;
pub mod typography;

// Re-export commonly used types
pub use color::Color;
pub use config::{CustomTheme, ThemeConfig};
pub use error::ThemeError;
pub use palette::{Palette, PaletteToken};
pub use radius::{RadiusToken, RadiusTokens};
pub use semantic::{IntentFamily, SemanticColorSet, SemanticColors, SemanticRole};
pub use spacing::{SpacingToken, SpacingTokens};
pub use state::ThemeState;
pub use theme::{Theme, WeftTheme};
pub use typography::{FontSizeToken, TypographyTokens};
