//! Theme trait and the built-in default theme

use crate::color::Color;
use crate::palette::{Palette, PaletteToken};
use crate::radius::RadiusTokens;
use crate::semantic::{IntentFamily, SemanticColorSet, SemanticColors};
use crate::spacing::SpacingTokens;
use crate::typography::TypographyTokens;

/// The contract every visual component consumes.
///
/// A replacement theme must supply the same four intent families with the
/// same nine-role record shape to remain a drop-in substitute; the types
/// make any other shape unrepresentable.
pub trait Theme: Send + Sync {
    fn name(&self) -> &str;

    fn palette(&self) -> &Palette;

    fn semantics(&self) -> &SemanticColorSet;

    fn spacing(&self) -> &SpacingTokens;

    fn typography(&self) -> &TypographyTokens;

    fn radii(&self) -> &RadiusTokens;

    /// Semantic record for an intent family.
    fn semantic(&self, family: IntentFamily) -> &SemanticColors {
        self.semantics().resolve(family)
    }

    /// Resolve a palette entry to its concrete color.
    fn resolve(&self, token: PaletteToken) -> Color {
        self.palette().get(token)
    }
}

/// The built-in Weft theme backed by the default palette and token tables.
#[derive(Clone, Debug, Default)]
pub struct WeftTheme {
    palette: Palette,
    semantics: SemanticColorSet,
    spacing: SpacingTokens,
    typography: TypographyTokens,
    radii: RadiusTokens,
}

impl WeftTheme {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Theme for WeftTheme {
    fn name(&self) -> &str {
        "Weft"
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
