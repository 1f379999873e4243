//! Palette color tokens

use serde::{Deserialize, Serialize};

/// Semantic palette token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum PaletteToken {
    Background,
    Surface,
    Primary,
    Secondary,
    Accent,
    Text,
    MutedText,
    Border,
}

impl PaletteToken {
    /// Key name as it appears in the projected token namespace
    /// (`theme-<css_name>`).
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Surface => "surface",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Text => "text",
            Self::MutedText => "mutedText",
            Self::Border => "border",
        }
    }

    /// Full token list, in projection order.
    pub fn all() -> &'static [PaletteToken] {
        const TOKENS: [PaletteToken; 8] = [
            PaletteToken::Background,
            PaletteToken::Surface,
            PaletteToken::Primary,
            PaletteToken::Secondary,
            PaletteToken::Accent,
            PaletteToken::Text,
            PaletteToken::MutedText,
            PaletteToken::Border,
        ];
        &TOKENS
    }
}

/// Complete set of palette colors.
///
/// Every field is present for every registered theme; the projector relies on
/// total coverage and emits each entry unconditionally.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub background: String,
    pub surface: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub text: String,
    pub muted_text: String,
    pub border: String,
}

impl Palette {
    /// Get a color by token key
    pub fn get(&self, token: PaletteToken) -> &str {
        match token {
            PaletteToken::Background => &self.background,
            PaletteToken::Surface => &self.surface,
            PaletteToken::Primary => &self.primary,
            PaletteToken::Secondary => &self.secondary,
            PaletteToken::Accent => &self.accent,
            PaletteToken::Text => &self.text,
            PaletteToken::MutedText => &self.muted_text,
            PaletteToken::Border => &self.border,
        }
    }

    /// Iterate every entry in projection order.
    pub fn entries(&self) -> impl Iterator<Item = (PaletteToken, &str)> {
        PaletteToken::all().iter().map(|&token| (token, self.get(token)))
    }
}
