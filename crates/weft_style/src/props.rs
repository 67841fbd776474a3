//! Pass-through style props
//!
//! The portion of a component's prop bag that is forwarded to the style
//! pipeline rather than consumed by component logic: spacing and
//! typography scale keys, layout sizing, and explicit color overrides.
//! A bag is created per render call and discarded with it.

use weft_theme::{FontSizeToken, SpacingToken, Theme};

use crate::fragment::{StyleFragment, StyleValue};
use crate::pseudo::PseudoProps;

/// A margin value: a spacing-scale step or `auto`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Margin {
    Space(SpacingToken),
    Auto,
}

impl From<SpacingToken> for Margin {
    fn from(token: SpacingToken) -> Self {
        Self::Space(token)
    }
}

/// The pass-through style props accepted by every styled component.
#[derive(Clone, Debug, Default)]
pub struct StyleProps {
    pub width: Option<StyleValue>,
    pub px: Option<SpacingToken>,
    pub py: Option<SpacingToken>,
    pub ml: Option<Margin>,
    pub mr: Option<Margin>,
    pub mt: Option<Margin>,
    pub mb: Option<Margin>,
    pub font_size: Option<FontSizeToken>,
    pub font_weight: Option<u16>,
    pub background: Option<StyleValue>,
    pub color: Option<StyleValue>,
    pub pseudo: PseudoProps,
}

impl StyleProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, value: impl Into<StyleValue>) -> Self {
        self.width = Some(value.into());
        self
    }

    /// Horizontal padding from the spacing scale.
    pub fn px(mut self, token: SpacingToken) -> Self {
        self.px = Some(token);
        self
    }

    /// Vertical padding from the spacing scale.
    pub fn py(mut self, token: SpacingToken) -> Self {
        self.py = Some(token);
        self
    }

    pub fn ml(mut self, margin: impl Into<Margin>) -> Self {
        self.ml = Some(margin.into());
        self
    }

    pub fn mr(mut self, margin: impl Into<Margin>) -> Self {
        self.mr = Some(margin.into());
        self
    }

    pub fn mt(mut self, margin: impl Into<Margin>) -> Self {
        self.mt = Some(margin.into());
        self
    }

    pub fn mb(mut self, margin: impl Into<Margin>) -> Self {
        self.mb = Some(margin.into());
        self
    }

    pub fn font_size(mut self, token: FontSizeToken) -> Self {
        self.font_size = Some(token);
        self
    }

    pub fn font_weight(mut self, weight: u16) -> Self {
        self.font_weight = Some(weight);
        self
    }

    /// Explicit background override. Beats any intent-derived background.
    pub fn background(mut self, value: impl Into<StyleValue>) -> Self {
        self.background = Some(value.into());
        self
    }

    /// Explicit text color override.
    pub fn color(mut self, value: impl Into<StyleValue>) -> Self {
        self.color = Some(value.into());
        self
    }

    pub fn hover_style(mut self, style: StyleFragment) -> Self {
        self.pseudo = self.pseudo.hover(style);
        self
    }

    pub fn focus_style(mut self, style: StyleFragment) -> Self {
        self.pseudo = self.pseudo.focus(style);
        self
    }

    pub fn active_style(mut self, style: StyleFragment) -> Self {
        self.pseudo = self.pseudo.active(style);
        self
    }

    /// Lower the bag to a flat fragment, resolving scale keys through the
    /// theme. Pseudo props are not included here - they compose into
    /// scoped blocks, not flat declarations.
    pub fn to_fragment(&self, theme: &dyn Theme) -> StyleFragment {
        let mut fragment = StyleFragment::new();

        if let Some(width) = &self.width {
            fragment = fragment.width(width.clone());
        }
        if let Some(px) = self.px {
            fragment = fragment.padding_x(theme.spacing().get(px));
        }
        if let Some(py) = self.py {
            fragment = fragment.padding_y(theme.spacing().get(py));
        }
        for (property, margin) in [
            ("margin-left", self.ml),
            ("margin-right", self.mr),
            ("margin-top", self.mt),
            ("margin-bottom", self.mb),
        ] {
            if let Some(margin) = margin {
                let value = match margin {
                    Margin::Space(token) => StyleValue::Px(theme.spacing().get(token)),
                    Margin::Auto => StyleValue::Raw("auto".to_string()),
                };
                fragment = fragment.set(property, value);
            }
        }
        if let Some(font_size) = self.font_size {
            fragment = fragment.font_size(theme.typography().get(font_size));
        }
        if let Some(weight) = self.font_weight {
            fragment = fragment.font_weight(weight);
        }
        if let Some(color) = &self.color {
            fragment = fragment.color(color.clone());
        }
        if let Some(background) = &self.background {
            fragment = fragment.bg(background.clone());
        }

        fragment
    }
}
