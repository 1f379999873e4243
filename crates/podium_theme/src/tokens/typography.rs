//! Typography tokens

use serde::{Deserialize, Serialize};

/// Semantic typography token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TypographyToken {
    HeadingFont,
    BodyFont,
    HeadingWeight,
    BodyWeight,
}

impl TypographyToken {
    /// Key name as it appears in the projected token namespace
    /// (`theme-<css_name>`).
    pub fn css_name(self) -> &'static str {
        match self {
            Self::HeadingFont => "headingFont",
            Self::BodyFont => "bodyFont",
            Self::HeadingWeight => "headingWeight",
            Self::BodyWeight => "bodyWeight",
        }
    }

    /// Full token list, in projection order.
    pub fn all() -> &'static [TypographyToken] {
        const TOKENS: [TypographyToken; 4] = [
            TypographyToken::HeadingFont,
            TypographyToken::BodyFont,
            TypographyToken::HeadingWeight,
            TypographyToken::BodyWeight,
        ];
        &TOKENS
    }
}

/// Complete set of typography tokens.
///
/// Fonts are CSS font-family stacks; weights are CSS font-weight strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub heading_font: String,
    pub body_font: String,
    pub heading_weight: String,
    pub body_weight: String,
}

impl Typography {
    /// Get a value by token key
    pub fn get(&self, token: TypographyToken) -> &str {
        match token {
            TypographyToken::HeadingFont => &self.heading_font,
            TypographyToken::BodyFont => &self.body_font,
            TypographyToken::HeadingWeight => &self.heading_weight,
            TypographyToken::BodyWeight => &self.body_weight,
        }
    }

    /// Iterate every entry in projection order.
    pub fn entries(&self) -> impl Iterator<Item = (TypographyToken, &str)> {
        TypographyToken::all().iter().map(|&token| (token, self.get(token)))
    }
}
