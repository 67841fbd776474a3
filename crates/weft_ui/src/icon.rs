//! Icon glyphs used by the component set

use weft_style::StyleFragment;
use weft_theme::{PaletteToken, SpacingToken, ThemeState};

use crate::element::{icon_element, Element};

/// Default icon size in logical pixels.
pub const ICON_SIZE: f32 = 20.0;

/// Icon size used by dismiss controls.
pub const DISMISS_ICON_SIZE: f32 = 16.0;

/// The glyphs the component set ships.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum IconGlyph {
    Warning,
    CircleInfo,
    Close,
}

impl IconGlyph {
    /// Inline SVG source for this glyph.
    pub fn svg(self) -> &'static str {
        match self {
            IconGlyph::Warning => {
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z"/><line x1="12" x2="12" y1="9" y2="13"/><line x1="12" x2="12.01" y1="17" y2="17"/></svg>"#
            }
            IconGlyph::CircleInfo => {
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/></svg>"#
            }
            IconGlyph::Close => {
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><line x1="18" x2="6" y1="6" y2="18"/><line x1="6" x2="18" y1="6" y2="18"/></svg>"#
            }
        }
    }

    /// Glyph name for debugging and test assertions.
    pub const fn name(self) -> &'static str {
        match self {
            IconGlyph::Warning => "warning",
            IconGlyph::CircleInfo => "circle-info",
            IconGlyph::Close => "close",
        }
    }
}

/// Build a tinted icon element at the fixed default size.
///
/// The icon keeps a fixed right margin and is pinned in flex layouts
/// (`flex-basis` equal to its size, shrinking disabled) so surrounding
/// flexible content can never distort it. Icons are decorative: they are
/// hidden from assistive technology and a textual equivalent is exposed
/// separately.
pub fn icon(glyph: IconGlyph, tint: PaletteToken) -> Element {
    let theme = ThemeState::get();
    icon_element(glyph.svg())
        .styled(
            StyleFragment::new()
                .width(ICON_SIZE)
                .set("height", ICON_SIZE)
                .set("margin-right", theme.spacing_value(SpacingToken::Small))
                .fixed_flex(ICON_SIZE)
                .color(tint),
        )
        .aria_hidden()
}
