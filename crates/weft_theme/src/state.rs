//! Global theme state singleton
//!
//! The theme is installed once at application startup and is read-only
//! afterwards. Every accessor is a plain read on immutable data, so
//! concurrent renders never contend.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::color::Color;
use crate::error::ThemeError;
use crate::palette::PaletteToken;
use crate::semantic::{IntentFamily, SemanticColors, SemanticRole};
use crate::spacing::SpacingToken;
use crate::theme::{Theme, WeftTheme};
use crate::typography::FontSizeToken;

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Global theme state - accessed directly by components during render.
pub struct ThemeState {
    theme: Box<dyn Theme>,
}

impl ThemeState {
    /// Install the global theme (call once at app startup).
    pub fn init(theme: impl Theme + 'static) -> Result<(), ThemeError> {
        tracing::debug!("ThemeState::init - installing theme `{}`", theme.name());
        THEME_STATE
            .set(ThemeState {
                theme: Box::new(theme),
            })
            .map_err(|_| ThemeError::AlreadyInitialized)
    }

    /// Install the built-in default theme. A no-op when a theme is already
    /// installed, so test suites and demos can call it unconditionally.
    pub fn init_default() {
        if Self::init(WeftTheme::new()).is_err() {
            tracing::debug!("ThemeState::init_default - theme already installed");
        }
    }

    /// Get the global theme state instance.
    pub fn get() -> &'static ThemeState {
        THEME_STATE
            .get()
            .expect("ThemeState not initialized. Call ThemeState::init() at app startup.")
    }

    /// Try to get the global theme state (returns None if not initialized).
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    /// The installed theme.
    pub fn theme(&self) -> &dyn Theme {
        self.theme.as_ref()
    }

    // ========== Convenience Accessors ==========

    /// Resolve a palette entry through the installed theme.
    pub fn color(&self, token: PaletteToken) -> Color {
        self.theme.resolve(token)
    }

    /// Semantic record for an intent family.
    pub fn semantic(&self, family: IntentFamily) -> &SemanticColors {
        self.theme.semantic(family)
    }

    /// Get a spacing value by token key.
    pub fn spacing_value(&self, token: SpacingToken) -> f32 {
        self.theme.spacing().get(token)
    }

    /// Get a font size by token key.
    pub fn font_size(&self, token: FontSizeToken) -> f32 {
        self.theme.typography().get(token)
    }

    // ========== CSS Variable Generation ==========

    /// Generate a CSS variable map covering every semantic color.
    ///
    /// Keys are `<family>-<role>` (without the `--` prefix), values are
    /// CSS color strings:
    ///
    /// ```ignore
    /// let vars = ThemeState::get().css_variables();
    /// // vars["danger-main"] == "#e32d43"
    /// ```
    pub fn css_variables(&self) -> HashMap<String, String> {
        let mut vars = HashMap::with_capacity(IntentFamily::all().len() * SemanticRole::all().len());
        for family in IntentFamily::all() {
            let record = self.theme.semantic(*family);
            for role in SemanticRole::all() {
                vars.insert(
                    format!("{}-{}", family.id(), role.name()),
                    self.theme.resolve(record.get(*role)).to_css(),
                );
            }
        }
        vars
    }
}
