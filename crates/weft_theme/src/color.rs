//! Color value type shared by every token table

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ThemeError;

/// An RGBA color with components in the `0.0..=1.0` range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Create an opaque color from float components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from float components including alpha.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Return the same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Linear interpolation between two colors.
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// Parse a CSS-style hex literal: `#rgb`, `#rrggbb`, or `#rrggbbaa`.
    pub fn parse(s: &str) -> Result<Self, ThemeError> {
        let invalid = || ThemeError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).unwrap() as f32 / 15.0;
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap() as f32 / 255.0;
        match hex.len() {
            3 => Ok(Self::rgb(nibble(0), nibble(1), nibble(2))),
            6 => Ok(Self::rgb(byte(0), byte(2), byte(4))),
            8 => Ok(Self::rgba(byte(0), byte(2), byte(4), byte(6))),
            _ => Err(invalid()),
        }
    }

    /// Format as a CSS color value: `#rrggbb`, or `rgba(...)` when
    /// translucent.
    pub fn to_css(self) -> String {
        if self.a < 1.0 {
            format!(
                "rgba({},{},{},{})",
                (self.r * 255.0).round() as u8,
                (self.g * 255.0).round() as u8,
                (self.b * 255.0).round() as u8,
                self.a
            )
        } else {
            format!(
                "#{:02x}{:02x}{:02x}",
                (self.r * 255.0).round() as u8,
                (self.g * 255.0).round() as u8,
                (self.b * 255.0).round() as u8
            )
        }
    }

    /// Format as a hex literal, `#rrggbb` or `#rrggbbaa`. Unlike
    /// [`Color::to_css`] this form always round-trips through
    /// [`Color::parse`].
    pub fn to_hex_string(self) -> String {
        if self.a < 1.0 {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                (self.r * 255.0).round() as u8,
                (self.g * 255.0).round() as u8,
                (self.b * 255.0).round() as u8,
                (self.a * 255.0).round() as u8
            )
        } else {
            format!(
                "#{:02x}{:02x}{:02x}",
                (self.r * 255.0).round() as u8,
                (self.g * 255.0).round() as u8,
                (self.b * 255.0).round() as u8
            )
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_short_and_long_forms() {
        assert_eq!(Color::parse("#fff").unwrap(), Color::WHITE);
        assert_eq!(Color::parse("#ff0000").unwrap(), Color::from_hex(0xFF0000));
        let translucent = Color::parse("#ff000080").unwrap();
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn parse_rejects_malformed_literals() {
        for bad in ["ff0000", "#ff00", "#gggggg", "#", "red"] {
            assert!(Color::parse(bad).is_err(), "`{bad}` should not parse");
        }
    }

    #[test]
    fn hex_string_round_trips() {
        for hex in ["#1e66f5", "#d20f39", "#ff000080"] {
            let color = Color::parse(hex).unwrap();
            assert_eq!(color.to_hex_string(), hex);
        }
    }

    #[test]
    fn css_form_uses_rgba_for_translucent_colors() {
        assert_eq!(Color::from_hex(0xFF0000).to_css(), "#ff0000");
        assert_eq!(
            Color::from_hex(0xFF0000).with_alpha(0.5).to_css(),
            "rgba(255,0,0,0.5)"
        );
    }

    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&Color::from_hex(0x1E66F5)).unwrap();
        assert_eq!(json, "\"#1e66f5\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::from_hex(0x1E66F5));
    }
}
