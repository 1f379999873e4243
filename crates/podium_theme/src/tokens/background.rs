//! Background tokens

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// How a theme paints the slide backdrop.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    #[default]
    Solid,
    Gradient,
}

impl BackgroundKind {
    /// Stable id emitted under `theme-background-type`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Gradient => "gradient",
        }
    }
}

impl Display for BackgroundKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backdrop definition: a kind plus its CSS value (a color for `solid`, a
/// gradient expression for `gradient`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    #[serde(rename = "type")]
    pub kind: BackgroundKind,
    pub value: String,
}

impl Background {
    pub fn solid(value: impl Into<String>) -> Self {
        Self {
            kind: BackgroundKind::Solid,
            value: value.into(),
        }
    }

    pub fn gradient(value: impl Into<String>) -> Self {
        Self {
            kind: BackgroundKind::Gradient,
            value: value.into(),
        }
    }
}
