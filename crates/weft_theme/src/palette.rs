//! Base palette: the table of concrete colors every semantic color derives from

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ThemeError;

/// Palette entry keys: color family + numeric shade.
///
/// The set is closed. Every token resolves to a concrete color, defined
/// once and never mutated; downstream layers refer to entries by token and
/// only resolve to a [`Color`] at emission time.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteToken {
    // Charcoal family (neutral grays)
    Charcoal000,
    Charcoal100,
    Charcoal300,
    Charcoal400,
    Charcoal500,
    Charcoal600,

    // Red family (danger / error)
    Red000,
    Red100,
    Red400,
    Red500,
    Red600,
    Red700,

    // Blue family (info / links)
    Blue100,
    Blue400,
    Blue500,

    // Yellow family (warning)
    Yellow100,
    Yellow500,

    // Green family (confirmation)
    Green100,

    // Purple family (brand accents)
    Purple000,
    Purple100,
    Purple400,

    // Primary brand ramp
    Primary500,
    Primary600,
    Primary700,

    White,
}

impl PaletteToken {
    /// The built-in color for this entry.
    pub const fn base(self) -> Color {
        match self {
            Self::Charcoal000 => Color::from_hex(0xF5F6F7),
            Self::Charcoal100 => Color::from_hex(0xDEE1E5),
            Self::Charcoal300 => Color::from_hex(0x9EA5AD),
            Self::Charcoal400 => Color::from_hex(0x707781),
            Self::Charcoal500 => Color::from_hex(0x4C535B),
            Self::Charcoal600 => Color::from_hex(0x33383D),

            Self::Red000 => Color::from_hex(0xFFF2F4),
            Self::Red100 => Color::from_hex(0xFFD6DC),
            Self::Red400 => Color::from_hex(0xEF5668),
            Self::Red500 => Color::from_hex(0xE32D43),
            Self::Red600 => Color::from_hex(0xB7263A),
            Self::Red700 => Color::from_hex(0x8E1F2F),

            Self::Blue100 => Color::from_hex(0xDBE9FE),
            Self::Blue400 => Color::from_hex(0x4B8BF5),
            Self::Blue500 => Color::from_hex(0x2D6AE0),

            Self::Yellow100 => Color::from_hex(0xFDF1D4),
            Self::Yellow500 => Color::from_hex(0xD9A600),

            Self::Green100 => Color::from_hex(0xD9F2E2),

            Self::Purple000 => Color::from_hex(0xF9F5FE),
            Self::Purple100 => Color::from_hex(0xEBDFFA),
            Self::Purple400 => Color::from_hex(0x8A4FD0),

            Self::Primary500 => Color::from_hex(0x6C43E0),
            Self::Primary600 => Color::from_hex(0x5A32C4),
            Self::Primary700 => Color::from_hex(0x4822A8),

            Self::White => Color::WHITE,
        }
    }

    /// Stable lowercase identifier (`"red500"`), used in configs and style
    /// props.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Charcoal000 => "charcoal000",
            Self::Charcoal100 => "charcoal100",
            Self::Charcoal300 => "charcoal300",
            Self::Charcoal400 => "charcoal400",
            Self::Charcoal500 => "charcoal500",
            Self::Charcoal600 => "charcoal600",
            Self::Red000 => "red000",
            Self::Red100 => "red100",
            Self::Red400 => "red400",
            Self::Red500 => "red500",
            Self::Red600 => "red600",
            Self::Red700 => "red700",
            Self::Blue100 => "blue100",
            Self::Blue400 => "blue400",
            Self::Blue500 => "blue500",
            Self::Yellow100 => "yellow100",
            Self::Yellow500 => "yellow500",
            Self::Green100 => "green100",
            Self::Purple000 => "purple000",
            Self::Purple100 => "purple100",
            Self::Purple400 => "purple400",
            Self::Primary500 => "primary500",
            Self::Primary600 => "primary600",
            Self::Primary700 => "primary700",
            Self::White => "white",
        }
    }

    /// Inverse of [`PaletteToken::name`].
    pub fn parse(name: &str) -> Result<Self, ThemeError> {
        Self::all()
            .iter()
            .copied()
            .find(|token| token.name() == name)
            .ok_or_else(|| ThemeError::UnknownPaletteEntry(name.to_string()))
    }

    /// Full entry list.
    pub fn all() -> &'static [PaletteToken] {
        const TOKENS: [PaletteToken; 25] = [
            PaletteToken::Charcoal000,
            PaletteToken::Charcoal100,
            PaletteToken::Charcoal300,
            PaletteToken::Charcoal400,
            PaletteToken::Charcoal500,
            PaletteToken::Charcoal600,
            PaletteToken::Red000,
            PaletteToken::Red100,
            PaletteToken::Red400,
            PaletteToken::Red500,
            PaletteToken::Red600,
            PaletteToken::Red700,
            PaletteToken::Blue100,
            PaletteToken::Blue400,
            PaletteToken::Blue500,
            PaletteToken::Yellow100,
            PaletteToken::Yellow500,
            PaletteToken::Green100,
            PaletteToken::Purple000,
            PaletteToken::Purple100,
            PaletteToken::Purple400,
            PaletteToken::Primary500,
            PaletteToken::Primary600,
            PaletteToken::Primary700,
            PaletteToken::White,
        ];
        &TOKENS
    }
}

/// The palette a theme resolves entries through.
///
/// Starts from the built-in table; individual entries may be overridden
/// while the theme is being constructed (for example from a
/// [`ThemeConfig`](crate::config::ThemeConfig) document). Once the owning
/// theme is installed the palette is never mutated again.
#[derive(Clone, Debug, Default)]
pub struct Palette {
    overrides: FxHashMap<PaletteToken, Color>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve an entry to its concrete color (override first).
    pub fn get(&self, token: PaletteToken) -> Color {
        if let Some(color) = self.overrides.get(&token) {
            return *color;
        }
        token.base()
    }

    /// Replace a single entry. Construction-time only.
    pub fn set_override(&mut self, token: PaletteToken, color: Color) {
        self.overrides.insert(token, color);
    }
}
