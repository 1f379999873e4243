//! The theme bundle

use serde::{Deserialize, Serialize};

use crate::tokens::{Background, Palette, Typography};

/// A named design-token bundle controlling every styled aspect of a deck.
///
/// Registered themes are total: every field is populated, so the projector
/// never guards against missing values. The serde derives exist for
/// *external* theme objects (custom template bundles); those are validated by
/// the type system at the decode boundary, after which the same totality
/// holds. Field names follow the persisted camelCase wire shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: String,
    pub palette: Palette,
    pub typography: Typography,
    pub background: Background,
    pub border_radius: String,
    pub shadow_style: String,
}
