//! Slide and deck records
//!
//! The data model is deliberately forgiving at the decode boundary: decks
//! arrive from a generation service or a persistence layer, and neither is
//! trusted to produce complete records. Inside the model, `title` and
//! `content` are always concrete strings (never null), and `layout` stays an
//! optional free-form string so that layout names persisted by other versions
//! survive a round-trip untouched.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DeckError;

/// A single slide: a title/content pair plus an optional layout tag.
///
/// `layout`, when present and non-empty, is authoritative - the classifier
/// never overwrites it. The value is kept as a plain string rather than a
/// closed enum so that unknown persisted variants remain valid data; they
/// resolve to the fallback rendering contract at dispatch time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Slide {
    #[serde(deserialize_with = "string_or_empty")]
    pub title: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
}

impl Slide {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            layout: None,
        }
    }

    /// Whether this slide already carries an explicit, non-empty layout tag.
    pub fn has_layout(&self) -> bool {
        self.layout.as_deref().is_some_and(|l| !l.is_empty())
    }
}

/// An ordered presentation: metadata plus its slides.
///
/// Slide order is significant - it drives the first-slide classification rule
/// and each slide's index. `theme` is a registry key, not a hard enum, so
/// decks saved against future theme catalogs still decode; unknown names
/// resolve to the default theme downstream.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deck {
    #[serde(deserialize_with = "string_or_empty")]
    pub title: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub description: String,
    pub slides: Vec<Slide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl Deck {
    /// Decode a deck from a clean JSON document.
    ///
    /// Missing fields default, `null` title/content coerce to `""`, and
    /// unknown fields are ignored. Structurally invalid JSON is the only
    /// failure mode.
    pub fn from_json_str(json: &str) -> Result<Self, DeckError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Deserialize a string field treating `null` (and absence, via
/// `#[serde(default)]`) as the empty string.
fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_fields_default() {
        let deck = Deck::from_json_str(r#"{"slides": [{}]}"#).unwrap();
        assert_eq!(deck.title, "");
        assert_eq!(deck.description, "");
        assert_eq!(deck.theme, None);
        assert_eq!(deck.slides, vec![Slide::default()]);
    }

    #[test]
    fn null_text_coerces_to_empty() {
        let deck = Deck::from_json_str(
            r#"{"title": null, "slides": [{"title": null, "content": null}]}"#,
        )
        .unwrap();
        assert_eq!(deck.title, "");
        assert_eq!(deck.slides[0].title, "");
        assert_eq!(deck.slides[0].content, "");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let deck = Deck::from_json_str(
            r#"{"title": "T", "owner": "someone", "slides": [{"title": "A", "content": "B", "notes": "x"}]}"#,
        )
        .unwrap();
        assert_eq!(deck.title, "T");
        assert_eq!(deck.slides[0].content, "B");
    }

    #[test]
    fn unknown_layout_names_round_trip() {
        let json = r#"{"slides": [{"title": "A", "content": "B", "layout": "hero-split"}]}"#;
        let deck = Deck::from_json_str(json).unwrap();
        assert_eq!(deck.slides[0].layout.as_deref(), Some("hero-split"));

        let out = serde_json::to_string(&deck).unwrap();
        let back = Deck::from_json_str(&out).unwrap();
        assert_eq!(back, deck);
    }

    #[test]
    fn empty_layout_is_not_an_assignment() {
        let slide = Slide {
            layout: Some(String::new()),
            ..Slide::default()
        };
        assert!(!slide.has_layout());
        assert!(!Slide::default().has_layout());
    }
}
