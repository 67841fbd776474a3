//! Icon-only button component

use weft_style::{ComposedStyle, PseudoProps, StyleFragment};

use crate::element::{button, icon_element, Element};
use crate::icon::{IconGlyph, DISMISS_ICON_SIZE};

/// Builder for icon-only buttons.
///
/// The accessible label is mandatory content for assistive technology;
/// the glyph itself is always decorative.
pub struct IconButtonBuilder {
    glyph: IconGlyph,
    label: Option<String>,
    size: f32,
    hover_style: Option<StyleFragment>,
    on_click: Option<Box<dyn Fn() + Send + Sync>>,
    id: Option<String>,
    decorative: bool,
}

impl IconButtonBuilder {
    pub fn new(glyph: IconGlyph) -> Self {
        Self {
            glyph,
            label: None,
            size: DISMISS_ICON_SIZE,
            hover_style: None,
            on_click: None,
            id: None,
            decorative: false,
        }
    }

    /// Accessible label for the control.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Icon size in logical pixels.
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Styling applied under the `:hover` pseudo state.
    pub fn hover_style(mut self, style: StyleFragment) -> Self {
        self.hover_style = Some(style);
        self
    }

    /// Click callback, invoked with no arguments.
    pub fn on_click(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Mark the whole control decorative to assistive technology. Used
    /// when a sibling already announces the same information.
    pub fn decorative(mut self) -> Self {
        self.decorative = true;
        self
    }

    /// Build the button element.
    pub fn build(self) -> Element {
        let mut pseudo = PseudoProps::new();
        if let Some(hover) = self.hover_style {
            pseudo = pseudo.hover(hover);
        }

        let style = ComposedStyle::compose(
            StyleFragment::new()
                .set("display", "inline-flex")
                .set("align-items", "center")
                .bg("none")
                .border("none")
                .set("cursor", "pointer"),
            StyleFragment::new(),
            StyleFragment::new(),
        )
        .with_pseudo(pseudo.compose());

        let glyph = icon_element(self.glyph.svg())
            .styled(
                StyleFragment::new()
                    .width(self.size)
                    .set("height", self.size)
                    .fixed_flex(self.size),
            )
            .aria_hidden();

        let mut element = button().style(style).child(glyph);
        if let Some(label) = self.label {
            element = element.label(label);
        }
        if let Some(id) = self.id {
            element = element.id(id);
        }
        if self.decorative {
            element = element.aria_hidden();
        }
        if let Some(callback) = self.on_click {
            element = element.on_click(callback);
        }
        element
    }
}

/// Create an icon button.
pub fn icon_button(glyph: IconGlyph) -> IconButtonBuilder {
    IconButtonBuilder::new(glyph)
}
