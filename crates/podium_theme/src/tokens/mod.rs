//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a deck theme:
//! - Palette colors
//! - Typography (font stacks and weights)
//! - Background (solid color or gradient)
//!
//! Values are CSS-compatible strings rather than parsed color types: the
//! projected strings are the wire contract with saved decks and must survive
//! byte-for-byte.

mod background;
mod palette;
mod typography;

pub use background::*;
pub use palette::*;
pub use typography::*;
