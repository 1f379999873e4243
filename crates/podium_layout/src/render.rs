//! Layout dispatch and rendering contracts
//!
//! Each layout variant maps to one static [`LayoutContract`]: a pure
//! function from slide text plus the projected token map to a structured
//! [`SlideFrame`]. Contracts own only their internal arrangement (how
//! content is split into bullets, columns, or a quotation); every style
//! value is read from [`StyleTokenMap`] keys, never from a `Theme`, so
//! switching themes re-reads values without touching layout logic.
//!
//! Dispatch is a sealed enum-to-handler table with an explicit default arm:
//! unknown persisted layout names silently resolve to the content-focus
//! contract.

use podium_core::Slide;
use podium_theme::{keys, StyleTokenMap};
use serde::Serialize;

use crate::classify::{raw_column_split, split_bullets};
use crate::variant::Layout;

/// Per-slide input to a rendering contract.
#[derive(Clone, Copy, Debug)]
pub struct SlideArgs<'a> {
    pub title: &'a str,
    pub content: &'a str,
    /// Decorative emphasis signal; true only for the slide at index 0.
    /// Independent of layout choice.
    pub accent: bool,
    pub index: usize,
}

impl<'a> SlideArgs<'a> {
    pub fn from_slide(slide: &'a Slide, index: usize) -> Self {
        Self {
            title: &slide.title,
            content: &slide.content,
            accent: index == 0,
            index,
        }
    }
}

/// A run of text with its resolved style values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TextBlock {
    pub text: String,
    pub font: String,
    pub weight: String,
    pub color: String,
}

/// Card styling behind a frame's body, when the layout draws one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceStyle {
    pub fill: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    pub radius: String,
    pub shadow: String,
}

/// The arranged content of a slide body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SlideBody {
    Paragraph(TextBlock),
    Bullets { marker: String, items: Vec<TextBlock> },
    Columns { left: TextBlock, #[serde(skip_serializing_if = "Option::is_none")] right: Option<TextBlock> },
    Quote { mark: String, quote: TextBlock, #[serde(skip_serializing_if = "Option::is_none")] attribution: Option<TextBlock> },
}

/// A fully specified slide arrangement, ready for a renderer to paint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideFrame {
    pub layout: Layout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface: Option<SurfaceStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<TextBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<SlideBody>,
    /// Accent bar color, present only when the accent flag was set and the
    /// layout shows one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_bar: Option<String>,
}

/// A layout's rendering contract.
pub trait LayoutContract: Send + Sync {
    /// The variant this contract renders.
    fn layout(&self) -> Layout;

    /// Arrange one slide. Total: malformed content renders whatever parts
    /// are available, never errors.
    fn compose(&self, args: &SlideArgs<'_>, tokens: &StyleTokenMap) -> SlideFrame;
}

/// Look up the contract for a layout name.
///
/// Unknown names resolve to the content-focus contract - the same instance
/// `get_layout("content-focus")` returns, not a copy.
pub fn get_layout(name: &str) -> &'static dyn LayoutContract {
    match Layout::from_id(name) {
        Some(Layout::CoverCenter) => &COVER_CENTER,
        Some(Layout::TitleBullets) => &TITLE_BULLETS,
        Some(Layout::TwoColumns) => &TWO_COLUMNS,
        Some(Layout::BigQuote) => &BIG_QUOTE,
        Some(Layout::ContentFocus) | None => &CONTENT_FOCUS,
    }
}

/// Compose one slide through the contract its `layout` tag names (absent
/// tags fall back to content-focus).
pub fn compose_slide(slide: &Slide, index: usize, tokens: &StyleTokenMap) -> SlideFrame {
    let contract = get_layout(slide.layout.as_deref().unwrap_or(Layout::ContentFocus.id()));
    contract.compose(&SlideArgs::from_slide(slide, index), tokens)
}

fn tok(tokens: &StyleTokenMap, key: &str) -> String {
    tokens.get(key).unwrap_or_default().to_string()
}

fn heading_text(text: &str, tokens: &StyleTokenMap) -> TextBlock {
    TextBlock {
        text: text.to_string(),
        font: tok(tokens, keys::HEADING_FONT),
        weight: tok(tokens, keys::HEADING_WEIGHT),
        color: tok(tokens, keys::TEXT),
    }
}

fn body_text(text: &str, tokens: &StyleTokenMap) -> TextBlock {
    TextBlock {
        text: text.to_string(),
        font: tok(tokens, keys::BODY_FONT),
        weight: tok(tokens, keys::BODY_WEIGHT),
        color: tok(tokens, keys::TEXT),
    }
}

fn muted_text(text: &str, tokens: &StyleTokenMap) -> TextBlock {
    TextBlock {
        color: tok(tokens, keys::MUTED_TEXT),
        ..body_text(text, tokens)
    }
}

fn card(tokens: &StyleTokenMap, bordered: bool) -> SurfaceStyle {
    SurfaceStyle {
        fill: tok(tokens, keys::SURFACE),
        border: bordered.then(|| tok(tokens, keys::BORDER)),
        radius: tok(tokens, keys::BORDER_RADIUS),
        shadow: tok(tokens, keys::SHADOW),
    }
}

fn heading_or_none(title: &str, tokens: &StyleTokenMap) -> Option<TextBlock> {
    (!title.is_empty()).then(|| heading_text(title, tokens))
}

/// Centered hero arrangement; no card, optional accent bar.
struct CoverCenterLayout;

impl LayoutContract for CoverCenterLayout {
    fn layout(&self) -> Layout {
        Layout::CoverCenter
    }

    fn compose(&self, args: &SlideArgs<'_>, tokens: &StyleTokenMap) -> SlideFrame {
        SlideFrame {
            layout: self.layout(),
            surface: None,
            heading: heading_or_none(args.title, tokens),
            body: (!args.content.is_empty())
                .then(|| SlideBody::Paragraph(muted_text(args.content, tokens))),
            accent_bar: args.accent.then(|| tok(tokens, keys::PRIMARY)),
        }
    }
}

/// Heading above discrete bullet items split on newlines, `•`, or `-`.
struct TitleBulletsLayout;

impl LayoutContract for TitleBulletsLayout {
    fn layout(&self) -> Layout {
        Layout::TitleBullets
    }

    fn compose(&self, args: &SlideArgs<'_>, tokens: &StyleTokenMap) -> SlideFrame {
        let items = split_bullets(args.content)
            .into_iter()
            .map(|item| body_text(item, tokens))
            .collect();
        SlideFrame {
            layout: self.layout(),
            surface: Some(card(tokens, false)),
            heading: heading_or_none(args.title, tokens),
            body: Some(SlideBody::Bullets {
                marker: tok(tokens, keys::PRIMARY),
                items,
            }),
            accent_bar: None,
        }
    }
}

/// Heading above a left/right split on `\n\n` or `||`; only the left part
/// renders when no second part exists.
struct TwoColumnsLayout;

impl LayoutContract for TwoColumnsLayout {
    fn layout(&self) -> Layout {
        Layout::TwoColumns
    }

    fn compose(&self, args: &SlideArgs<'_>, tokens: &StyleTokenMap) -> SlideFrame {
        let parts = raw_column_split(args.content);
        let left = match parts.first() {
            Some(first) if !first.is_empty() => first,
            _ => args.content,
        };
        let right = parts.get(1).filter(|p| !p.is_empty());
        SlideFrame {
            layout: self.layout(),
            surface: Some(card(tokens, true)),
            heading: heading_or_none(args.title, tokens),
            body: Some(SlideBody::Columns {
                left: body_text(left, tokens),
                right: right.map(|p| body_text(p, tokens)),
            }),
            accent_bar: None,
        }
    }
}

/// One oversized quotation; the title becomes the attribution.
struct BigQuoteLayout;

impl LayoutContract for BigQuoteLayout {
    fn layout(&self) -> Layout {
        Layout::BigQuote
    }

    fn compose(&self, args: &SlideArgs<'_>, tokens: &StyleTokenMap) -> SlideFrame {
        SlideFrame {
            layout: self.layout(),
            surface: Some(card(tokens, false)),
            heading: None,
            body: Some(SlideBody::Quote {
                mark: tok(tokens, keys::PRIMARY),
                quote: heading_text(args.content, tokens),
                attribution: (!args.title.is_empty()).then(|| muted_text(args.title, tokens)),
            }),
            accent_bar: None,
        }
    }
}

/// Heading above a single body paragraph; the fallback for unknown names.
struct ContentFocusLayout;

impl LayoutContract for ContentFocusLayout {
    fn layout(&self) -> Layout {
        Layout::ContentFocus
    }

    fn compose(&self, args: &SlideArgs<'_>, tokens: &StyleTokenMap) -> SlideFrame {
        SlideFrame {
            layout: self.layout(),
            surface: Some(card(tokens, true)),
            heading: heading_or_none(args.title, tokens),
            body: Some(SlideBody::Paragraph(body_text(args.content, tokens))),
            accent_bar: None,
        }
    }
}

static COVER_CENTER: CoverCenterLayout = CoverCenterLayout;
static TITLE_BULLETS: TitleBulletsLayout = TitleBulletsLayout;
static TWO_COLUMNS: TwoColumnsLayout = TwoColumnsLayout;
static BIG_QUOTE: BigQuoteLayout = BigQuoteLayout;
static CONTENT_FOCUS: ContentFocusLayout = ContentFocusLayout;
