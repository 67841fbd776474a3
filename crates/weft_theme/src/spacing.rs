//! Spacing scale tokens

use serde::{Deserialize, Serialize};

/// Spacing scale keys accepted by pass-through style props.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingToken {
    None,
    XxSmall,
    XSmall,
    Small,
    Medium,
    Large,
    XLarge,
    XxLarge,
}

/// Spacing scale values in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpacingTokens {
    pub none: f32,
    pub xx_small: f32,
    pub x_small: f32,
    pub small: f32,
    pub medium: f32,
    pub large: f32,
    pub x_large: f32,
    pub xx_large: f32,
}

impl SpacingTokens {
    /// Get a spacing value by token key.
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::None => self.none,
            SpacingToken::XxSmall => self.xx_small,
            SpacingToken::XSmall => self.x_small,
            SpacingToken::Small => self.small,
            SpacingToken::Medium => self.medium,
            SpacingToken::Large => self.large,
            SpacingToken::XLarge => self.x_large,
            SpacingToken::XxLarge => self.xx_large,
        }
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            none: 0.0,
            xx_small: 4.0,
            x_small: 8.0,
            small: 12.0,
            medium: 16.0,
            large: 20.0,
            x_large: 32.0,
            xx_large: 40.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_monotonic() {
        let tokens = SpacingTokens::default();
        let ramp = [
            SpacingToken::None,
            SpacingToken::XxSmall,
            SpacingToken::XSmall,
            SpacingToken::Small,
            SpacingToken::Medium,
            SpacingToken::Large,
            SpacingToken::XLarge,
            SpacingToken::XxLarge,
        ];
        for pair in ramp.windows(2) {
            assert!(
                tokens.get(pair[0]) < tokens.get(pair[1]),
                "{:?} should be smaller than {:?}",
                pair[0],
                pair[1]
            );
        }
    }
}
