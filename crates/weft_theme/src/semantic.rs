//! Semantic color records: intent family -> nine-role palette selection

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ThemeError;
use crate::palette::{Palette, PaletteToken};

/// The closed set of intent families every theme must supply.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentFamily {
    Danger,
    Neutral,
    Primary,
    Secondary,
}

impl IntentFamily {
    /// Stable family id for configs and CSS variable names.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Neutral => "neutral",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }

    /// Inverse of [`IntentFamily::id`].
    pub fn parse(name: &str) -> Result<Self, ThemeError> {
        Self::all()
            .iter()
            .copied()
            .find(|family| family.id() == name)
            .ok_or_else(|| ThemeError::UnknownIntentFamily(name.to_string()))
    }

    /// Full family list.
    pub fn all() -> &'static [IntentFamily] {
        const FAMILIES: [IntentFamily; 4] = [
            IntentFamily::Danger,
            IntentFamily::Neutral,
            IntentFamily::Primary,
            IntentFamily::Secondary,
        ];
        &FAMILIES
    }
}

/// Roles within a semantic color record.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SemanticRole {
    Main,
    Dark,
    Darker,
    Light,
    Lighter,
    AltText,
    BorderColor,
    LinkColor,
    Text,
}

impl SemanticRole {
    /// Stable kebab-case role name (`"alt-text"`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Dark => "dark",
            Self::Darker => "darker",
            Self::Light => "light",
            Self::Lighter => "lighter",
            Self::AltText => "alt-text",
            Self::BorderColor => "border-color",
            Self::LinkColor => "link-color",
            Self::Text => "text",
        }
    }

    /// Full role list.
    pub fn all() -> &'static [SemanticRole] {
        const ROLES: [SemanticRole; 9] = [
            SemanticRole::Main,
            SemanticRole::Dark,
            SemanticRole::Darker,
            SemanticRole::Light,
            SemanticRole::Lighter,
            SemanticRole::AltText,
            SemanticRole::BorderColor,
            SemanticRole::LinkColor,
            SemanticRole::Text,
        ];
        &ROLES
    }
}

/// One semantic color record: every role filled with a palette entry.
///
/// The struct shape guarantees totality - a record cannot exist with a
/// role left undefined.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SemanticColors {
    pub main: PaletteToken,
    pub dark: PaletteToken,
    pub darker: PaletteToken,
    pub light: PaletteToken,
    pub lighter: PaletteToken,
    pub alt_text: PaletteToken,
    pub border_color: PaletteToken,
    pub link_color: PaletteToken,
    pub text: PaletteToken,
}

impl SemanticColors {
    /// Get the palette entry filling a role.
    pub fn get(&self, role: SemanticRole) -> PaletteToken {
        match role {
            SemanticRole::Main => self.main,
            SemanticRole::Dark => self.dark,
            SemanticRole::Darker => self.darker,
            SemanticRole::Light => self.light,
            SemanticRole::Lighter => self.lighter,
            SemanticRole::AltText => self.alt_text,
            SemanticRole::BorderColor => self.border_color,
            SemanticRole::LinkColor => self.link_color,
            SemanticRole::Text => self.text,
        }
    }

    /// Resolve a role to its concrete color through a palette.
    pub fn color(&self, role: SemanticRole, palette: &Palette) -> Color {
        palette.get(self.get(role))
    }
}

/// The semantic records for all four intent families.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SemanticColorSet {
    pub danger: SemanticColors,
    pub neutral: SemanticColors,
    pub primary: SemanticColors,
    pub secondary: SemanticColors,
}

impl SemanticColorSet {
    /// Resolve a family to its record. Deterministic and referentially
    /// stable: the set is built once and never mutated.
    pub fn resolve(&self, family: IntentFamily) -> &SemanticColors {
        match family {
            IntentFamily::Danger => &self.danger,
            IntentFamily::Neutral => &self.neutral,
            IntentFamily::Primary => &self.primary,
            IntentFamily::Secondary => &self.secondary,
        }
    }
}

impl Default for SemanticColorSet {
    fn default() -> Self {
        use PaletteToken::*;

        Self {
            danger: SemanticColors {
                main: Red500,
                dark: Red600,
                darker: Red700,
                light: Red100,
                lighter: Red000,
                alt_text: Red400,
                border_color: Charcoal300,
                link_color: Blue500,
                text: White,
            },
            neutral: SemanticColors {
                main: Charcoal400,
                dark: Charcoal500,
                darker: Charcoal600,
                light: Charcoal100,
                lighter: Charcoal000,
                alt_text: Charcoal600,
                border_color: Charcoal300,
                link_color: Blue500,
                text: White,
            },
            primary: SemanticColors {
                main: Primary500,
                dark: Primary600,
                darker: Primary700,
                light: Purple100,
                lighter: Purple000,
                alt_text: Purple400,
                border_color: Charcoal300,
                link_color: Blue500,
                text: White,
            },
            // Secondary currently mirrors primary; kept as a separate
            // record so a theme can diverge them without an API change.
            secondary: SemanticColors {
                main: Primary500,
                dark: Primary600,
                darker: Primary700,
                light: Purple100,
                lighter: Purple000,
                alt_text: Purple400,
                border_color: Charcoal300,
                link_color: Blue500,
                text: White,
            },
        }
    }
}
