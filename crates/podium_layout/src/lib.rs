//! Podium Layout Engine
//!
//! Turns raw slides into fully specified, renderable arrangements:
//!
//! - **Classification**: a pure, total heuristic mapping a slide's
//!   title/content/position to one of five layout variants
//! - **Assignment**: filling in layouts for a whole deck while preserving
//!   anything explicitly set upstream
//! - **Dispatch**: a sealed variant-to-contract table with a silent fallback
//!   for unknown persisted names
//!
//! # Example
//!
//! ```rust
//! use podium_core::Slide;
//! use podium_layout::{assign_layouts, suggest_layout, Layout};
//!
//! let slides = vec![
//!     Slide::new("Intro", "Welcome"),
//!     Slide::new("Roadmap", "A\nB\nC\nD"),
//! ];
//!
//! assert_eq!(suggest_layout(&slides[0], 0), Layout::CoverCenter);
//! let assigned = assign_layouts(&slides);
//! assert_eq!(assigned[1].layout.as_deref(), Some("title-bullets"));
//! ```
//!
//! Rendering contracts consume slide text plus the projected
//! [`podium_theme::StyleTokenMap`] - never a `Theme` directly - so theme
//! switches replace values without re-running layout logic.

pub mod assign;
pub mod classify;
pub mod render;
pub mod variant;

pub use assign::assign_layouts;
pub use classify::suggest_layout;
pub use render::{
    compose_slide, get_layout, LayoutContract, SlideArgs, SlideBody, SlideFrame, SurfaceStyle,
    TextBlock,
};
pub use variant::Layout;
