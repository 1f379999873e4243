//! Layout variants

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The five fixed visual arrangements a slide can be rendered with.
///
/// Persisted decks carry these as strings; [`Layout::from_id`] returns
/// `None` for anything else so unknown names stay data and resolve to the
/// fallback contract at dispatch time instead of failing.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// Centered hero arrangement for covers and closing slides.
    CoverCenter,
    /// Heading above a discrete bullet list.
    TitleBullets,
    /// Heading above a left/right content split.
    TwoColumns,
    /// One oversized quotation or statistic with attribution.
    BigQuote,
    /// Heading above a single content body; also the fallback.
    ContentFocus,
}

impl Layout {
    /// Stable id for persistence/wire use.
    pub fn id(self) -> &'static str {
        match self {
            Self::CoverCenter => "cover-center",
            Self::TitleBullets => "title-bullets",
            Self::TwoColumns => "two-columns",
            Self::BigQuote => "big-quote",
            Self::ContentFocus => "content-focus",
        }
    }

    /// Parse a stable id; unknown names yield `None`.
    pub fn from_id(name: &str) -> Option<Layout> {
        Self::all().iter().copied().find(|l| l.id() == name)
    }

    /// Full variant list.
    pub fn all() -> &'static [Layout] {
        const LAYOUTS: [Layout; 5] = [
            Layout::CoverCenter,
            Layout::TitleBullets,
            Layout::TwoColumns,
            Layout::BigQuote,
            Layout::ContentFocus,
        ];
        &LAYOUTS
    }
}

impl Display for Layout {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
