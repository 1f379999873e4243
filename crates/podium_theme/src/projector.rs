//! Theme projection into the renderer-facing token map
//!
//! [`project`] flattens a [`Theme`] into the fixed `theme-*` key namespace.
//! The namespace is the wire contract between the theme system and any
//! renderer: every key is always emitted, in a stable order, for every theme,
//! which is what makes whole-map replacement atomic and lets renderers bind
//! to keys without caring which theme is active.

use indexmap::IndexMap;
use serde::Serialize;

use crate::theme::Theme;
use crate::tokens::{PaletteToken, TypographyToken};

/// The fixed token key namespace.
pub mod keys {
    pub const BACKGROUND: &str = "theme-background";
    pub const SURFACE: &str = "theme-surface";
    pub const PRIMARY: &str = "theme-primary";
    pub const SECONDARY: &str = "theme-secondary";
    pub const ACCENT: &str = "theme-accent";
    pub const TEXT: &str = "theme-text";
    pub const MUTED_TEXT: &str = "theme-mutedText";
    pub const BORDER: &str = "theme-border";

    pub const HEADING_FONT: &str = "theme-headingFont";
    pub const BODY_FONT: &str = "theme-bodyFont";
    pub const HEADING_WEIGHT: &str = "theme-headingWeight";
    pub const BODY_WEIGHT: &str = "theme-bodyWeight";

    pub const BACKGROUND_TYPE: &str = "theme-background-type";
    pub const BACKGROUND_VALUE: &str = "theme-background-value";
    pub const BORDER_RADIUS: &str = "theme-border-radius";
    pub const SHADOW: &str = "theme-shadow";

    /// Every key in the namespace, in projection order.
    pub const ALL: [&str; 16] = [
        BACKGROUND,
        SURFACE,
        PRIMARY,
        SECONDARY,
        ACCENT,
        TEXT,
        MUTED_TEXT,
        BORDER,
        HEADING_FONT,
        BODY_FONT,
        HEADING_WEIGHT,
        BODY_WEIGHT,
        BACKGROUND_TYPE,
        BACKGROUND_VALUE,
        BORDER_RADIUS,
        SHADOW,
    ];
}

impl PaletteToken {
    /// The namespace key this token projects to.
    pub fn token_key(self) -> &'static str {
        match self {
            Self::Background => keys::BACKGROUND,
            Self::Surface => keys::SURFACE,
            Self::Primary => keys::PRIMARY,
            Self::Secondary => keys::SECONDARY,
            Self::Accent => keys::ACCENT,
            Self::Text => keys::TEXT,
            Self::MutedText => keys::MUTED_TEXT,
            Self::Border => keys::BORDER,
        }
    }
}

impl TypographyToken {
    /// The namespace key this token projects to.
    pub fn token_key(self) -> &'static str {
        match self {
            Self::HeadingFont => keys::HEADING_FONT,
            Self::BodyFont => keys::BODY_FONT,
            Self::HeadingWeight => keys::HEADING_WEIGHT,
            Self::BodyWeight => keys::BODY_WEIGHT,
        }
    }
}

/// The flattened, renderer-facing projection of a theme.
///
/// A flat `key -> value` map over exactly the [`keys::ALL`] namespace, in
/// that order. This is the only artifact rendering code may consume for
/// styling.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StyleTokenMap {
    map: IndexMap<&'static str, String>,
}

impl StyleTokenMap {
    /// Value for a namespace key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    /// Iterate every `(key, value)` pair in projection order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.map.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Flatten a theme into the fixed token namespace.
///
/// Emits one token per palette and typography entry under `theme-<key>`,
/// then the backdrop and shape tokens. The result always contains exactly
/// the [`keys::ALL`] set.
pub fn project(theme: &Theme) -> StyleTokenMap {
    let mut map = IndexMap::with_capacity(keys::ALL.len());

    for (token, value) in theme.palette.entries() {
        map.insert(token.token_key(), value.to_string());
    }
    for (token, value) in theme.typography.entries() {
        map.insert(token.token_key(), value.to_string());
    }

    map.insert(keys::BACKGROUND_TYPE, theme.background.kind.as_str().to_string());
    map.insert(keys::BACKGROUND_VALUE, theme.background.value.clone());
    map.insert(keys::BORDER_RADIUS, theme.border_radius.clone());
    map.insert(keys::SHADOW, theme.shadow_style.clone());

    StyleTokenMap { map }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::ThemePreset;
    use pretty_assertions::assert_eq;

    #[test]
    fn projection_emits_the_full_namespace_in_order() {
        let tokens = project(&ThemePreset::ModernLight.theme());
        let emitted: Vec<&str> = tokens.iter().map(|(k, _)| k).collect();
        assert_eq!(emitted, keys::ALL);
    }

    #[test]
    fn values_come_from_the_theme_verbatim() {
        let tokens = project(&ThemePreset::ModernDark.theme());
        assert_eq!(tokens.get(keys::BACKGROUND), Some("#0F172A"));
        assert_eq!(tokens.get(keys::MUTED_TEXT), Some("#94A3B8"));
        assert_eq!(tokens.get(keys::HEADING_FONT), Some("'Outfit', system-ui, sans-serif"));
        assert_eq!(tokens.get(keys::BACKGROUND_TYPE), Some("gradient"));
        assert_eq!(
            tokens.get(keys::BACKGROUND_VALUE),
            Some("radial-gradient(circle at top right, #1e1b4b, #0f172a)")
        );
        assert_eq!(tokens.get(keys::BORDER_RADIUS), Some("20px"));
    }

    #[test]
    fn unknown_keys_read_as_absent() {
        let tokens = project(&ThemePreset::Professional.theme());
        assert_eq!(tokens.get("theme-nonexistent"), None);
    }
}
