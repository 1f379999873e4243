//! Podium Core
//!
//! This crate provides the foundational data model for the Podium deck
//! pipeline:
//!
//! - **Slides and decks**: the records the rest of the pipeline consumes
//! - **Tolerant decoding**: generation services and saved documents are
//!   untrusted; missing fields default, `null` text coerces to `""`, and
//!   unknown fields are ignored
//! - **Model-output extraction**: generative backends wrap their JSON in
//!   markdown fences and prose; the payload is recovered before parsing
//!
//! # Example
//!
//! ```rust
//! use podium_core::Deck;
//!
//! let raw = r#"```json
//! {"title": "Launch", "slides": [{"title": "Why now", "content": "Timing"}]}
//! ```"#;
//!
//! let deck = Deck::from_model_output(raw).unwrap();
//! assert_eq!(deck.slides.len(), 1);
//! assert_eq!(deck.slides[0].title, "Why now");
//! ```

pub mod deck;
pub mod error;
pub mod generate;

pub use deck::{Deck, Slide};
pub use error::DeckError;
pub use generate::extract_json_object;
