//! Recovery of a deck payload from raw generative-model output
//!
//! Generation backends are instructed to answer with a bare JSON object, but
//! in practice the text often arrives wrapped in markdown code fences or
//! surrounded by prose. Extraction runs two passes before parsing:
//!
//! 1. drop every ```` ```json ```` / ```` ``` ```` fence marker
//! 2. slice from the first `{` to the last `}`

use tracing::debug;

use crate::deck::Deck;
use crate::error::DeckError;

impl Deck {
    /// Decode a deck from raw model output.
    ///
    /// Accepts both clean JSON documents and fenced/prose-wrapped payloads.
    /// Returns [`DeckError::MissingPayload`] when no object remains after
    /// extraction.
    pub fn from_model_output(raw: &str) -> Result<Self, DeckError> {
        let payload = extract_json_object(raw).ok_or(DeckError::MissingPayload)?;
        debug!(
            "extracted {} byte payload from {} bytes of model output",
            payload.len(),
            raw.len()
        );
        Ok(serde_json::from_str(&payload)?)
    }
}

/// Extract the JSON object embedded in raw model output.
///
/// Strips markdown code fences (```` ```json ```` case-insensitively, then
/// bare ```` ``` ````) and slices from the first `{` through the last `}`.
/// Returns `None` when no braces survive.
pub fn extract_json_object(raw: &str) -> Option<String> {
    let cleaned = strip_code_fences(raw);
    let cleaned = cleaned.trim();
    let start = cleaned.find('{')?;
    let end = cleaned.rfind('}')?;
    if end < start {
        return None;
    }
    Some(cleaned[start..=end].to_string())
}

/// Remove every ``` fence marker, swallowing an attached `json` language tag.
fn strip_code_fences(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(pos) = rest.find("```") {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + 3..];
        // The tag is ASCII, so the 4-byte cut cannot split a character.
        if rest.len() >= 4 && rest.as_bytes()[..4].eq_ignore_ascii_case(b"json") {
            rest = &rest[4..];
        }
    }
    out.push_str(rest);
    out
}
