//! Banner component for inline status messages
//!
//! A themed banner that announces its message politely to assistive
//! technology and derives its presentation from an intent.
//!
//! # Example
//!
//! ```ignore
//! use weft_ui::prelude::*;
//!
//! // Default info banner
//! banner("Sync in progress").render();
//!
//! // Error banner with a dismiss control
//! banner("Upload failed")
//!     .intent(BannerIntent::Error)
//!     .dismissible(|| println!("dismissed"))
//!     .render();
//!
//! // Explicit props always beat intent-derived styling
//! banner("Custom")
//!     .intent(BannerIntent::Warning)
//!     .background(PaletteToken::Purple000)
//!     .render();
//! ```

use weft_style::{ComposedStyle, StyleFragment, StyleProps, StyleValue};
use weft_theme::{FontSizeToken, PaletteToken, RadiusToken, SpacingToken, ThemeState};

use crate::element::{container, text, visually_hidden, ClickCallback, Element, ElementHandle};
use crate::icon::{icon, IconGlyph};

use super::icon_button::icon_button;

/// Banner intents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BannerIntent {
    Warning,
    #[default]
    Info,
    Error,
    Confirmation,
}

impl BannerIntent {
    /// Stable lowercase intent name, used in dismiss labels.
    pub const fn id(self) -> &'static str {
        match self {
            BannerIntent::Warning => "warning",
            BannerIntent::Info => "info",
            BannerIntent::Error => "error",
            BannerIntent::Confirmation => "confirmation",
        }
    }

    /// Parse an intent name. Returns `None` for anything outside the
    /// enumeration - callers degrade to no styling rather than failing.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "warning" => Some(BannerIntent::Warning),
            "info" => Some(BannerIntent::Info),
            "error" => Some(BannerIntent::Error),
            "confirmation" => Some(BannerIntent::Confirmation),
            _ => None,
        }
    }
}

/// An icon selection for an intent: glyph plus tint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntentIcon {
    pub glyph: IconGlyph,
    pub tint: PaletteToken,
}

/// Presentation derived from an intent: background, icon, and the label
/// announced to assistive technology.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntentPresentation {
    pub background: Option<PaletteToken>,
    pub icon: Option<IntentIcon>,
    pub accessibility_label: Option<&'static str>,
}

impl IntentPresentation {
    pub fn is_empty(&self) -> bool {
        self.background.is_none() && self.icon.is_none() && self.accessibility_label.is_none()
    }
}

/// Map an intent to its presentation.
///
/// `None` stands for a value outside the enumeration (e.g. an unparsed
/// intent name) and yields the empty presentation: no background, no
/// icon, no label. Degrading silently instead of failing keeps rendering
/// robust when callers feed through unchecked strings.
pub fn presentation_for(intent: Option<BannerIntent>) -> IntentPresentation {
    match intent {
        Some(BannerIntent::Warning) => IntentPresentation {
            background: Some(PaletteToken::Yellow100),
            icon: Some(IntentIcon {
                glyph: IconGlyph::Warning,
                tint: PaletteToken::Yellow500,
            }),
            accessibility_label: Some("Warning"),
        },
        Some(BannerIntent::Info) => IntentPresentation {
            background: Some(PaletteToken::Blue100),
            icon: Some(IntentIcon {
                glyph: IconGlyph::CircleInfo,
                tint: PaletteToken::Blue400,
            }),
            accessibility_label: Some("Info"),
        },
        Some(BannerIntent::Error) => IntentPresentation {
            background: Some(PaletteToken::Red100),
            icon: Some(IntentIcon {
                glyph: IconGlyph::Warning,
                tint: PaletteToken::Red600,
            }),
            accessibility_label: Some("Error"),
        },
        Some(BannerIntent::Confirmation) => IntentPresentation {
            background: Some(PaletteToken::Green100),
            icon: None,
            accessibility_label: None,
        },
        None => {
            tracing::trace!("banner intent outside the enumeration, rendering unstyled");
            IntentPresentation::default()
        }
    }
}

/// A rendered banner: the element tree plus the handle the caller may use
/// for imperative focus/measure requests.
pub struct RenderedBanner {
    pub root: Element,
    pub handle: ElementHandle,
}

/// Builder for creating banners.
pub struct BannerBuilder {
    message: String,
    intent: Option<BannerIntent>,
    raw_intent: Option<String>,
    can_dismiss: bool,
    on_dismiss: Option<ClickCallback>,
    props: StyleProps,
    id: Option<String>,
}

impl BannerBuilder {
    /// Create a new banner builder with a message. The intent defaults to
    /// [`BannerIntent::Info`].
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            intent: Some(BannerIntent::default()),
            raw_intent: None,
            can_dismiss: false,
            on_dismiss: None,
            props: StyleProps::new(),
            id: None,
        }
    }

    /// Set the intent.
    pub fn intent(mut self, intent: BannerIntent) -> Self {
        self.intent = Some(intent);
        self.raw_intent = None;
        self
    }

    /// Set the intent from an unchecked name. A name outside the
    /// enumeration renders the banner unstyled; it never fails.
    pub fn intent_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into().to_lowercase();
        self.intent = BannerIntent::parse(&name);
        self.raw_intent = Some(name);
        self
    }

    /// Allow dismissal and supply the callback invoked when the dismiss
    /// control is activated. The banner holds no dismissed/visible state
    /// of its own - hiding it is the caller's job.
    pub fn dismissible(mut self, on_dismiss: impl Fn() + Send + Sync + 'static) -> Self {
        self.can_dismiss = true;
        self.on_dismiss = Some(std::sync::Arc::new(on_dismiss));
        self
    }

    /// Replace the whole pass-through props bag.
    pub fn props(mut self, props: StyleProps) -> Self {
        self.props = props;
        self
    }

    /// Explicit background override; beats the intent-derived background.
    pub fn background(mut self, value: impl Into<StyleValue>) -> Self {
        self.props = self.props.background(value);
        self
    }

    /// Font size override from the typography scale.
    pub fn font_size(mut self, token: FontSizeToken) -> Self {
        self.props = self.props.font_size(token);
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    fn dismiss_intent_id(&self) -> String {
        match (self.intent, &self.raw_intent) {
            (Some(intent), _) => intent.id().to_string(),
            (None, Some(raw)) => raw.clone(),
            (None, None) => BannerIntent::default().id().to_string(),
        }
    }

    /// Render the banner to an element tree.
    pub fn render(self) -> RenderedBanner {
        let theme = ThemeState::get();
        let dismiss_intent = self.dismiss_intent_id();

        let message = self.message;
        let intent = self.intent;
        let can_dismiss = self.can_dismiss;
        let on_dismiss = self.on_dismiss;
        let props = self.props;
        let id = self.id;

        let presentation = presentation_for(intent);

        // Layout defaults, lowest precedence.
        let base = StyleFragment::new()
            .set("display", "flex")
            .set("align-items", "center")
            .rounded(theme.theme().radii().get(RadiusToken::Medium))
            .width("100%")
            .padding_x(theme.spacing_value(SpacingToken::Small))
            .padding_y(theme.spacing_value(SpacingToken::XxSmall))
            .font_size(theme.font_size(FontSizeToken::Small));

        // Intent-derived styling.
        let mut intent_style = StyleFragment::new();
        if let Some(background) = presentation.background {
            intent_style = intent_style.bg(background);
        }

        // Explicit props, highest precedence, then pseudo blocks.
        let style = ComposedStyle::compose(base, intent_style, props.to_fragment(theme.theme()))
            .with_pseudo(props.pseudo.compose());

        let mut root = container()
            .style(style)
            .role("status")
            .live_polite();
        if let Some(id) = &id {
            root = root.id(id.clone());
        }

        root = root
            .child_if(
                presentation
                    .icon
                    .map(|intent_icon| icon(intent_icon.glyph, intent_icon.tint)),
            )
            .child_if(presentation.accessibility_label.map(visually_hidden))
            .child(text(message).styled(StyleFragment::new().set("flex", "auto")));

        if can_dismiss {
            let dismiss_label = format!("Dismiss {dismiss_intent}");
            let callback = on_dismiss;
            let mut dismiss = icon_button(IconGlyph::Close)
                .label(dismiss_label)
                .hover_style(StyleFragment::new().bg("none").border("none"))
                .decorative()
                .on_click(move || {
                    if let Some(callback) = &callback {
                        callback();
                    }
                });
            if let Some(id) = &id {
                dismiss = dismiss.id(format!("{id}-dismiss"));
            }
            let dismiss = dismiss
                .build()
                .merge_styled(StyleFragment::new().set("margin-left", "auto"));
            root = root.child(dismiss);
        }

        RenderedBanner {
            root,
            handle: ElementHandle::next(),
        }
    }
}

/// Create a banner with a message.
pub fn banner(message: impl Into<String>) -> BannerBuilder {
    BannerBuilder::new(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_intent_has_a_background() {
        for intent in [
            BannerIntent::Warning,
            BannerIntent::Info,
            BannerIntent::Error,
            BannerIntent::Confirmation,
        ] {
            let presentation = presentation_for(Some(intent));
            assert!(
                presentation.background.is_some(),
                "{:?} should set a background",
                intent
            );
        }
    }

    #[test]
    fn accessibility_labels_match_the_contract() {
        assert_eq!(
            presentation_for(Some(BannerIntent::Warning)).accessibility_label,
            Some("Warning")
        );
        assert_eq!(
            presentation_for(Some(BannerIntent::Info)).accessibility_label,
            Some("Info")
        );
        assert_eq!(
            presentation_for(Some(BannerIntent::Error)).accessibility_label,
            Some("Error")
        );
        assert_eq!(
            presentation_for(Some(BannerIntent::Confirmation)).accessibility_label,
            None
        );
    }

    #[test]
    fn error_reuses_the_warning_glyph_with_a_darker_tint() {
        let error = presentation_for(Some(BannerIntent::Error)).icon.unwrap();
        assert_eq!(error.glyph, IconGlyph::Warning);
        assert_eq!(error.tint, PaletteToken::Red600);
    }

    #[test]
    fn unknown_intents_degrade_to_the_empty_presentation() {
        assert!(presentation_for(None).is_empty());
        assert!(presentation_for(BannerIntent::parse("fatal")).is_empty());
    }

    #[test]
    fn intent_parsing_is_case_insensitive_through_the_builder() {
        let builder = banner("msg").intent_name("ERROR");
        assert_eq!(builder.intent, Some(BannerIntent::Error));
    }

    #[test]
    fn default_intent_is_info() {
        assert_eq!(BannerBuilder::new("msg").intent, Some(BannerIntent::Info));
    }
}
