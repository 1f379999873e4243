//! Podium Theme System
//!
//! Design-token theming for slide decks: a fixed preset catalog, a keyword
//! selector, and a projection into the flat style map renderers consume.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Design tokens**: palette colors, typography, background, and shape
//!   values, all CSS-compatible strings
//! - **Preset catalog**: six built-in themes behind stable string ids
//! - **Keyword selection**: resolving a theme from free prompt text with
//!   deterministic precedence
//! - **Projection**: flattening a theme into the fixed `theme-*` token
//!   namespace and applying it atomically to a presentation scope
//!
//! # Quick Start
//!
//! ```rust
//! use podium_theme::{select_from_prompt, ThemeScope};
//!
//! let preset = select_from_prompt("a dark futuristic startup pitch");
//! assert_eq!(preset.id(), "modern-dark");
//!
//! let scope = ThemeScope::new();
//! scope.apply(&preset.theme());
//! assert_eq!(scope.token("theme-background").as_deref(), Some("#0F172A"));
//! ```
//!
//! # Contract
//!
//! Rendering code styles itself exclusively through the projected
//! [`StyleTokenMap`] keys - never by reaching into a [`Theme`] - so switching
//! themes at runtime replaces values without touching layout logic. The key
//! namespace is fixed and every application rewrites every key, which makes
//! repeated and concurrent applies safe (last write wins for the whole set).

pub mod presets;
pub mod projector;
pub mod scope;
pub mod selector;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use presets::{get_theme, theme_names, ThemePreset};
pub use projector::{keys, project, StyleTokenMap};
pub use scope::ThemeScope;
pub use selector::{resolve_explicit, select_from_prompt};
pub use theme::Theme;
pub use tokens::*;
