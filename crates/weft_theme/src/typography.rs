//! Typography scale tokens

use serde::{Deserialize, Serialize};

/// Font size scale keys accepted by pass-through style props.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSizeToken {
    XxSmall,
    XSmall,
    Small,
    Medium,
    Large,
    XLarge,
    XxLarge,
}

/// Typography values: font stack, size scale in pixels, weight constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypographyTokens {
    pub font_family: String,
    pub xx_small: f32,
    pub x_small: f32,
    pub small: f32,
    pub medium: f32,
    pub large: f32,
    pub x_large: f32,
    pub xx_large: f32,
    pub weight_normal: u16,
    pub weight_medium: u16,
    pub weight_semi_bold: u16,
    pub weight_bold: u16,
    pub line_height: f32,
}

impl TypographyTokens {
    /// Get a font size by token key.
    pub fn get(&self, token: FontSizeToken) -> f32 {
        match token {
            FontSizeToken::XxSmall => self.xx_small,
            FontSizeToken::XSmall => self.x_small,
            FontSizeToken::Small => self.small,
            FontSizeToken::Medium => self.medium,
            FontSizeToken::Large => self.large,
            FontSizeToken::XLarge => self.x_large,
            FontSizeToken::XxLarge => self.xx_large,
        }
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            font_family: "'Inter', -apple-system, system-ui, sans-serif".to_string(),
            xx_small: 11.0,
            x_small: 12.0,
            small: 14.0,
            medium: 16.0,
            large: 20.0,
            x_large: 24.0,
            xx_large: 32.0,
            weight_normal: 400,
            weight_medium: 500,
            weight_semi_bold: 600,
            weight_bold: 700,
            line_height: 1.5,
        }
    }
}
