//! Theme config documents
//!
//! A TOML document can re-skin the palette while keeping the semantic
//! table shape intact:
//!
//! ```toml
//! name = "Midnight"
//!
//! [palette]
//! red500 = "#ff3355"
//! primary500 = "#3366ee"
//! ```
//!
//! Entry names are the closed palette enumeration; unknown names are
//! rejected rather than silently ignored so a typo cannot ship an
//! unthemed color.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::color::Color;
use crate::error::ThemeError;
use crate::palette::{Palette, PaletteToken};
use crate::radius::RadiusTokens;
use crate::semantic::SemanticColorSet;
use crate::spacing::SpacingTokens;
use crate::theme::Theme;
use crate::typography::TypographyTokens;

/// A deserialized theme config document.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Display name for the resulting theme.
    pub name: Option<String>,
    /// Palette entry overrides: entry name -> color literal.
    #[serde(default)]
    pub palette: BTreeMap<String, String>,
}

impl ThemeConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(source)?)
    }

    /// Validate the document and build a theme from it.
    pub fn into_theme(self) -> Result<CustomTheme, ThemeError> {
        let mut palette = Palette::new();
        for (name, literal) in &self.palette {
            let token = PaletteToken::parse(name)?;
            palette.set_override(token, Color::parse(literal)?);
        }
        Ok(CustomTheme {
            name: self.name.unwrap_or_else(|| "Custom".to_string()),
            palette,
            semantics: SemanticColorSet::default(),
            spacing: SpacingTokens::default(),
            typography: TypographyTokens::default(),
            radii: RadiusTokens::default(),
        })
    }
}

/// A theme built from a [`ThemeConfig`]: the default semantic table
/// resolving through a re-skinned palette.
#[derive(Clone, Debug)]
pub struct CustomTheme {
    name: String,
    palette: Palette,
    semantics: SemanticColorSet,
    spacing: SpacingTokens,
    typography: TypographyTokens,
    radii: RadiusTokens,
}

impl Theme for CustomTheme {
    fn name(&self) -> &str {
        &self.name
    }

    fn palette(&self) -> &Palette {
        &self.palette
    }

    fn semantics(&self) -> &SemanticColorSet {
        &self.semantics
    }

    fn spacing(&self) -> &SpacingTokens {
        &self.spacing
    }

    fn typography(&self) -> &TypographyTokens {
        &self.typography
    }

    fn radii(&self) -> &RadiusTokens {
        &self.radii
    }
}
