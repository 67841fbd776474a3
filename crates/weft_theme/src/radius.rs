//! Border radius tokens

use serde::{Deserialize, Serialize};

/// Border radius scale keys.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiusToken {
    None,
    Small,
    Medium,
    Large,
    Full,
}

/// Border radius values in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadiusTokens {
    pub none: f32,
    pub small: f32,
    pub medium: f32,
    pub large: f32,
    pub full: f32,
}

impl RadiusTokens {
    /// Get a radius value by token key.
    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::None => self.none,
            RadiusToken::Small => self.small,
            RadiusToken::Medium => self.medium,
            RadiusToken::Large => self.large,
            RadiusToken::Full => self.full,
        }
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            none: 0.0,
            small: 2.0,
            medium: 4.0,
            large: 8.0,
            full: 9999.0,
        }
    }
}
