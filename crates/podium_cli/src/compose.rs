//! End-to-end deck composition
//!
//! Theme resolution walks the sources in precedence order: the command-line
//! flag, then the deck's own `theme` field, then the configured default, then
//! a keyword scan of the deck text. Explicit sources win even when they name
//! an unknown theme (which resolves to the built-in default rather than
//! falling through to a heuristic) - persisted decks are already resolved and
//! are never silently rethemed.

use serde::Serialize;
use tracing::debug;

use podium_core::Deck;
use podium_layout::{assign_layouts, compose_slide, SlideFrame};
use podium_theme::{project, select_from_prompt, StyleTokenMap, ThemePreset};

use crate::config::PodiumConfig;

/// A fully specified render plan: every slide composed through its contract,
/// plus the projected token map renderers bind to.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPlan {
    pub title: String,
    pub description: String,
    /// Stable id of the resolved theme preset.
    pub theme: String,
    pub tokens: StyleTokenMap,
    pub frames: Vec<SlideFrame>,
}

/// Resolve the theme preset for a deck.
pub fn resolve_theme(flag: Option<&str>, deck: &Deck, config: &PodiumConfig) -> ThemePreset {
    if let Some(name) = flag {
        return ThemePreset::resolve(Some(name));
    }
    if let Some(name) = deck.theme.as_deref().filter(|n| !n.is_empty()) {
        return ThemePreset::resolve(Some(name));
    }
    if let Some(name) = config.theme.default.as_deref() {
        return ThemePreset::resolve(Some(name));
    }
    select_from_prompt(&format!("{} {}", deck.title, deck.description))
}

/// Assign layouts, project the theme, and compose every slide.
pub fn compose_deck(deck: &Deck, preset: ThemePreset) -> RenderPlan {
    let slides = assign_layouts(&deck.slides);
    let tokens = project(&preset.theme());
    debug!("composing {} slides as {}", slides.len(), preset.id());

    let frames = slides
        .iter()
        .enumerate()
        .map(|(index, slide)| compose_slide(slide, index, &tokens))
        .collect();

    RenderPlan {
        title: deck.title.clone(),
        description: deck.description.clone(),
        theme: preset.id().to_string(),
        tokens,
        frames,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeConfig;
    use podium_layout::Layout;
    use pretty_assertions::assert_eq;

    fn deck(description: &str, theme: Option<&str>) -> Deck {
        Deck {
            title: "Pitch".to_string(),
            description: description.to_string(),
            slides: vec![
                podium_core::Slide::new("Pitch", "Hello"),
                podium_core::Slide::new("One Number", "42% of teams agree"),
            ],
            theme: theme.map(str::to_string),
        }
    }

    fn config_with_default(name: &str) -> PodiumConfig {
        PodiumConfig {
            theme: ThemeConfig {
                default: Some(name.to_string()),
            },
            ..PodiumConfig::default()
        }
    }

    #[test]
    fn flag_beats_every_other_source() {
        let deck = deck("a dark futuristic pitch", Some("creative"));
        let config = config_with_default("professional");
        assert_eq!(
            resolve_theme(Some("vibrant"), &deck, &config),
            ThemePreset::Vibrant
        );
    }

    #[test]
    fn deck_field_beats_config_and_scan() {
        let deck = deck("a dark futuristic pitch", Some("creative"));
        let config = config_with_default("professional");
        assert_eq!(resolve_theme(None, &deck, &config), ThemePreset::Creative);
    }

    #[test]
    fn config_default_beats_the_keyword_scan() {
        let deck = deck("a dark futuristic pitch", None);
        let config = config_with_default("professional");
        assert_eq!(
            resolve_theme(None, &deck, &config),
            ThemePreset::Professional
        );
    }

    #[test]
    fn deck_text_is_scanned_last() {
        let deck = deck("a dark futuristic pitch", None);
        let config = PodiumConfig::default();
        assert_eq!(resolve_theme(None, &deck, &config), ThemePreset::ModernDark);

        let plain = self::deck("quarterly numbers", None);
        assert_eq!(resolve_theme(None, &plain, &config), ThemePreset::DEFAULT);
    }

    #[test]
    fn explicit_unknown_names_resolve_to_the_default_not_the_scan() {
        let deck = deck("a dark futuristic pitch", Some("no-such-theme"));
        let config = PodiumConfig::default();
        assert_eq!(resolve_theme(None, &deck, &config), ThemePreset::DEFAULT);
    }

    #[test]
    fn empty_deck_theme_is_not_an_explicit_choice() {
        let deck = deck("a dark futuristic pitch", Some(""));
        let config = PodiumConfig::default();
        assert_eq!(resolve_theme(None, &deck, &config), ThemePreset::ModernDark);
    }

    #[test]
    fn plans_carry_one_frame_per_slide() {
        let deck = deck("launch", None);
        let plan = compose_deck(&deck, ThemePreset::ModernDark);

        assert_eq!(plan.theme, "modern-dark");
        assert_eq!(plan.frames.len(), deck.slides.len());
        assert_eq!(plan.frames[0].layout, Layout::CoverCenter);
        assert!(plan.frames[0].accent_bar.is_some());
        assert!(plan.frames[1].accent_bar.is_none());
        assert_eq!(plan.tokens.get("theme-background"), Some("#0F172A"));
    }
}
