use thiserror::Error;

/// Errors from the deck decode boundary.
///
/// Malformed *content* never errors anywhere in podium; only structurally
/// unusable payloads surface here, and only from the decoding entry points.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("model output contains no JSON object")]
    MissingPayload,

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
