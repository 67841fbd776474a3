//! The composed style pipeline
//!
//! The final merge every styled component renders through. Sources are an
//! explicit ordered list, low to high precedence:
//!
//! 1. `base` - the component's layout defaults
//! 2. `intent` - styling derived from the component's intent
//! 3. `passthrough` - explicitly passed style props
//!
//! Explicit beats implicit: a caller can always override derived intent
//! styling (e.g. the background) by supplying the prop directly. Pseudo
//! blocks apply under their own selectors and cannot conflict with flat
//! properties, so they are appended rather than merged.

use weft_theme::Theme;

use crate::fragment::{StyleFragment, StyleValue};
use crate::pseudo::PseudoBlock;

/// The output of the style pipeline: a flat declaration set plus
/// selector-scoped pseudo blocks.
#[derive(Clone, Debug, Default)]
pub struct ComposedStyle {
    pub flat: StyleFragment,
    pub pseudo: Vec<PseudoBlock>,
}

impl ComposedStyle {
    /// An empty composed style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the three flat sources in precedence order.
    pub fn compose(
        base: StyleFragment,
        intent: StyleFragment,
        passthrough: StyleFragment,
    ) -> Self {
        Self {
            flat: base.merge(intent).merge(passthrough),
            pseudo: Vec::new(),
        }
    }

    /// Append pseudo blocks to the composed output.
    pub fn with_pseudo(mut self, blocks: Vec<PseudoBlock>) -> Self {
        self.pseudo.extend(blocks);
        self
    }

    /// Look up a flat declaration by property name.
    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.flat.get(property)
    }

    /// Render the flat declarations followed by each pseudo block.
    pub fn to_css(&self, theme: &dyn Theme) -> String {
        let mut css = self.flat.to_css(theme);
        for block in &self.pseudo {
            if !css.is_empty() {
                css.push(' ');
            }
            css.push_str(&block.to_css(theme));
        }
        css
    }
}
