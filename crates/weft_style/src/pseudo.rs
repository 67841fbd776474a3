//! Pseudo-state style scoping
//!
//! Components accept optional hover/focus/active fragments and the
//! composer turns each present one into a block scoped under the matching
//! interaction-state selector. The three states are mutually exclusive
//! while a user interacts, so blocks are concatenated rather than merged;
//! the hover -> focus -> active emission order is source cosmetics only.

use weft_theme::Theme;

use crate::fragment::StyleFragment;

/// Interaction pseudo states that can carry conditional styling.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum PseudoState {
    Hover,
    Focus,
    Active,
}

impl PseudoState {
    /// The CSS selector for this state.
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Hover => ":hover",
            Self::Focus => ":focus",
            Self::Active => ":active",
        }
    }

    /// All states in emission order.
    pub fn all() -> &'static [PseudoState] {
        const STATES: [PseudoState; 3] =
            [PseudoState::Hover, PseudoState::Focus, PseudoState::Active];
        &STATES
    }
}

/// A style fragment scoped under a pseudo-state selector.
#[derive(Clone, Debug)]
pub struct PseudoBlock {
    pub state: PseudoState,
    pub style: StyleFragment,
}

impl PseudoBlock {
    /// Render the scoped block, e.g. `:hover { border: 1px solid black; }`.
    pub fn to_css(&self, theme: &dyn Theme) -> String {
        format!("{} {{ {} }}", self.state.selector(), self.style.to_css(theme))
    }
}

/// Optional per-state style props.
///
/// Absent fields are valid absence, not errors - they simply contribute
/// nothing to the composed output.
#[derive(Clone, Debug, Default)]
pub struct PseudoProps {
    pub hover_style: Option<StyleFragment>,
    pub focus_style: Option<StyleFragment>,
    pub active_style: Option<StyleFragment>,
}

impl PseudoProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Styling for the `:hover` pseudo state.
    pub fn hover(mut self, style: StyleFragment) -> Self {
        self.hover_style = Some(style);
        self
    }

    /// Styling for the `:focus` pseudo state.
    pub fn focus(mut self, style: StyleFragment) -> Self {
        self.focus_style = Some(style);
        self
    }

    /// Styling for the `:active` pseudo state.
    pub fn active(mut self, style: StyleFragment) -> Self {
        self.active_style = Some(style);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.hover_style.is_none() && self.focus_style.is_none() && self.active_style.is_none()
    }

    /// Produce one scoped block per present, non-empty fragment, in
    /// hover -> focus -> active order. Never emits an empty selector
    /// block.
    pub fn compose(&self) -> Vec<PseudoBlock> {
        let sources = [
            (PseudoState::Hover, &self.hover_style),
            (PseudoState::Focus, &self.focus_style),
            (PseudoState::Active, &self.active_style),
        ];
        sources
            .into_iter()
            .filter_map(|(state, style)| match style {
                Some(style) if !style.is_empty() => Some(PseudoBlock {
                    state,
                    style: style.clone(),
                }),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::StyleValue;

    #[test]
    fn empty_props_compose_to_nothing() {
        assert!(PseudoProps::new().compose().is_empty());
    }

    #[test]
    fn hover_only_emits_exactly_one_scoped_block() {
        let props =
            PseudoProps::new().hover(StyleFragment::new().border("1px solid black"));

        let blocks = props.compose();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].state, PseudoState::Hover);
        assert_eq!(blocks[0].style.len(), 1);
        assert_eq!(
            blocks[0].style.get("border"),
            Some(&StyleValue::Raw("1px solid black".to_string()))
        );
    }

    #[test]
    fn blocks_keep_hover_focus_active_order() {
        let props = PseudoProps::new()
            .active(StyleFragment::new().set("opacity", "0.8"))
            .hover(StyleFragment::new().set("opacity", "0.9"))
            .focus(StyleFragment::new().set("outline", "2px solid"));

        let order: Vec<PseudoState> = props.compose().iter().map(|b| b.state).collect();
        assert_eq!(
            order,
            vec![PseudoState::Hover, PseudoState::Focus, PseudoState::Active]
        );
    }

    #[test]
    fn present_but_empty_fragments_emit_no_block() {
        let props = PseudoProps::new().focus(StyleFragment::new());
        assert!(props.compose().is_empty());
    }

    #[test]
    fn scoped_css_wraps_the_fragment() {
        let theme = weft_theme::WeftTheme::new();
        let block = PseudoProps::new()
            .hover(StyleFragment::new().border("1px solid black"))
            .compose()
            .remove(0);
        assert_eq!(block.to_css(&theme), ":hover { border: 1px solid black; }");
    }
}
