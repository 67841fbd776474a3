//! Error type for theme construction and parsing

use thiserror::Error;

/// Errors produced while constructing or parsing theme data.
///
/// Style resolution itself has no error path: unknown intents degrade to
/// "no styling" and absent optional props are valid absence. Errors only
/// arise at the edges where strings enter the typed token world.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A color literal could not be parsed (`#rgb`, `#rrggbb`, `#rrggbbaa`).
    #[error("invalid color literal `{0}`")]
    InvalidColor(String),

    /// A palette entry name did not match any declared family + shade.
    #[error("unknown palette entry `{0}`")]
    UnknownPaletteEntry(String),

    /// An intent family name did not match any declared family.
    #[error("unknown intent family `{0}`")]
    UnknownIntentFamily(String),

    /// `ThemeState::init` was called twice.
    #[error("theme state already initialized")]
    AlreadyInitialized,

    /// A theme config document failed to deserialize.
    #[error("invalid theme config: {0}")]
    InvalidConfig(#[from] toml::de::Error),
}
