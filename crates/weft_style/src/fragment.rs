//! Style fragments: ordered declarations with last-wins merge
//!
//! A fragment is the unit of style data flowing through the pipeline.
//! Declarations keep insertion order for stable CSS emission, while
//! setting an already-present property overwrites it in place - the
//! explicit replacement for relying on object-spread ordering.

use std::borrow::Cow;

use rustc_hash::FxHashMap;
use weft_theme::{Color, PaletteToken, Theme};

/// A single declaration value.
///
/// Palette entries stay symbolic until emission so a fragment can be
/// built without a theme in hand and re-skinned by swapping themes.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    Color(Color),
    Palette(PaletteToken),
    Px(f32),
    Raw(String),
}

impl StyleValue {
    /// Resolve to the string form used in CSS emission.
    pub fn resolve(&self, theme: &dyn Theme) -> String {
        match self {
            Self::Color(color) => color.to_css(),
            Self::Palette(token) => theme.resolve(*token).to_css(),
            Self::Px(value) => format!("{value}px"),
            Self::Raw(text) => text.clone(),
        }
    }
}

impl From<Color> for StyleValue {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<PaletteToken> for StyleValue {
    fn from(token: PaletteToken) -> Self {
        Self::Palette(token)
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        Self::Px(value)
    }
}

impl From<&str> for StyleValue {
    fn from(text: &str) -> Self {
        Self::Raw(text.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(text: String) -> Self {
        Self::Raw(text)
    }
}

type PropertyName = Cow<'static, str>;

/// An ordered set of `property: value` declarations.
#[derive(Clone, Debug, Default)]
pub struct StyleFragment {
    decls: Vec<(PropertyName, StyleValue)>,
    index: FxHashMap<PropertyName, usize>,
}

impl StyleFragment {
    /// Create a new empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a declaration. Overwrites in place when the property is
    /// already present (last write wins), appends otherwise.
    pub fn set(
        mut self,
        property: impl Into<PropertyName>,
        value: impl Into<StyleValue>,
    ) -> Self {
        self.insert(property.into(), value.into());
        self
    }

    fn insert(&mut self, property: PropertyName, value: StyleValue) {
        if let Some(&slot) = self.index.get(&property) {
            self.decls[slot].1 = value;
        } else {
            self.index.insert(property.clone(), self.decls.len());
            self.decls.push((property, value));
        }
    }

    /// Fold another fragment in. The other fragment's declarations win on
    /// conflict, mirroring later-spread-wins in the prop order.
    pub fn merge(mut self, other: StyleFragment) -> Self {
        for (property, value) in other.decls {
            self.insert(property, value);
        }
        self
    }

    /// Look up a declaration by property name.
    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.index.get(property).map(|&slot| &self.decls[slot].1)
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    /// Iterate declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> + '_ {
        self.decls.iter().map(|(prop, value)| (prop.as_ref(), value))
    }

    /// Render `property: value;` declarations in order.
    pub fn to_css(&self, theme: &dyn Theme) -> String {
        let mut css = String::new();
        for (property, value) in &self.decls {
            css.push_str(property);
            css.push_str(": ");
            css.push_str(&value.resolve(theme));
            css.push(';');
            css.push(' ');
        }
        css.trim_end().to_string()
    }

    // =========================================================================
    // Builder helpers
    // =========================================================================

    /// Set the background.
    pub fn bg(self, value: impl Into<StyleValue>) -> Self {
        self.set("background", value)
    }

    /// Set the foreground (text) color.
    pub fn color(self, value: impl Into<StyleValue>) -> Self {
        self.set("color", value)
    }

    /// Set a shorthand border declaration.
    pub fn border(self, value: impl Into<StyleValue>) -> Self {
        self.set("border", value)
    }

    /// Set a uniform corner radius.
    pub fn rounded(self, radius: f32) -> Self {
        self.set("border-radius", radius)
    }

    /// Set the font size.
    pub fn font_size(self, value: impl Into<StyleValue>) -> Self {
        self.set("font-size", value)
    }

    /// Set the font weight.
    pub fn font_weight(self, weight: u16) -> Self {
        self.set("font-weight", weight.to_string())
    }

    /// Set horizontal padding.
    pub fn padding_x(self, value: f32) -> Self {
        self.set("padding-left", value).set("padding-right", value)
    }

    /// Set vertical padding.
    pub fn padding_y(self, value: f32) -> Self {
        self.set("padding-top", value).set("padding-bottom", value)
    }

    /// Set the width.
    pub fn width(self, value: impl Into<StyleValue>) -> Self {
        self.set("width", value)
    }

    /// Pin the flex basis and disable shrinking, for children that must
    /// hold their size inside flexible rows.
    pub fn fixed_flex(self, basis: f32) -> Self {
        self.set("flex-basis", basis).set("flex-shrink", "0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_theme::WeftTheme;

    #[test]
    fn later_sets_win_without_duplicating() {
        let fragment = StyleFragment::new()
            .bg(PaletteToken::Blue100)
            .color(Color::BLACK)
            .bg(PaletteToken::Red100);

        assert_eq!(fragment.len(), 2);
        assert_eq!(
            fragment.get("background"),
            Some(&StyleValue::Palette(PaletteToken::Red100))
        );
    }

    #[test]
    fn merge_prefers_the_later_fragment() {
        let base = StyleFragment::new().bg(PaletteToken::Blue100).rounded(4.0);
        let overrides = StyleFragment::new().bg(PaletteToken::Red100);

        let merged = base.merge(overrides);
        assert_eq!(
            merged.get("background"),
            Some(&StyleValue::Palette(PaletteToken::Red100))
        );
        assert_eq!(merged.get("border-radius"), Some(&StyleValue::Px(4.0)));
    }

    #[test]
    fn emission_preserves_insertion_order() {
        let theme = WeftTheme::new();
        let css = StyleFragment::new()
            .set("display", "flex")
            .set("align-items", "center")
            .width("100%")
            .to_css(&theme);
        assert_eq!(css, "display: flex; align-items: center; width: 100%;");
    }

    #[test]
    fn palette_values_resolve_through_the_theme() {
        let theme = WeftTheme::new();
        let css = StyleFragment::new().bg(PaletteToken::Red100).to_css(&theme);
        assert_eq!(
            css,
            format!("background: {};", PaletteToken::Red100.base().to_css())
        );
    }
}
