//! Theme selection from free text
//!
//! The keyword table is an explicit ordered slice, not a map: when several
//! presets could match a prompt, the earliest table entry always wins, and
//! that precedence is part of the observable contract (saved decks were
//! generated under it).

use tracing::debug;

use crate::presets::ThemePreset;
use crate::theme::Theme;

/// Keyword table scanned in order; first preset with any matching keyword
/// wins.
const KEYWORD_TABLE: &[(ThemePreset, &[&str])] = &[
    (
        ThemePreset::ModernDark,
        &[
            "dark",
            "night",
            "tech",
            "technology",
            "futuristic",
            "innovation",
            "digital",
        ],
    ),
    (
        ThemePreset::MinimalLight,
        &[
            "minimal",
            "simple",
            "clean",
            "elegant",
            "professional",
            "corporate",
            "business",
        ],
    ),
    (
        ThemePreset::Creative,
        &[
            "creative",
            "artistic",
            "design",
            "colorful",
            "vibrant",
            "fun",
            "playful",
        ],
    ),
    (
        ThemePreset::Professional,
        &[
            "professional",
            "corporate",
            "business",
            "formal",
            "executive",
            "enterprise",
        ],
    ),
    (
        ThemePreset::Vibrant,
        &[
            "vibrant",
            "energetic",
            "dynamic",
            "bold",
            "exciting",
            "modern",
            "startup",
        ],
    ),
];

/// Pick a preset for a free-text prompt by substring keyword scan.
///
/// The prompt is lower-cased and the table is walked in order; no match
/// yields [`ThemePreset::DEFAULT`].
pub fn select_from_prompt(prompt: &str) -> ThemePreset {
    let lower = prompt.to_lowercase();
    for (preset, keywords) in KEYWORD_TABLE {
        if let Some(keyword) = keywords.iter().find(|kw| lower.contains(*kw)) {
            debug!("select_from_prompt: {:?} via keyword {:?}", preset.id(), keyword);
            return *preset;
        }
    }
    ThemePreset::DEFAULT
}

/// Resolve an explicitly requested theme name.
///
/// Absent and unknown names silently fall back to the default theme; no
/// error is surfaced.
pub fn resolve_explicit(name: Option<&str>) -> Theme {
    ThemePreset::resolve(name).theme()
}
