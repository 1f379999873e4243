//! Built-in theme presets.
//!
//! The catalog is an immutable, process-wide constant: six presets behind
//! stable string ids. Catalog order is significant only for enumeration and
//! the selector's precedence; lookups fall back to [`ThemePreset::DEFAULT`],
//! never fail, and expose no mutation API.

use std::fmt::{Display, Formatter};

use crate::theme::Theme;
use crate::tokens::{Background, Palette, Typography};

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Soft blue/violet light theme (the default).
    ModernLight,
    /// Slate-blue dark theme.
    ModernDark,
    /// Monochrome editorial theme with square corners.
    MinimalLight,
    /// High-energy pink/amber theme with pop shadows.
    Creative,
    /// Corporate blue/teal theme.
    Professional,
    /// Neon-on-dark gradient theme.
    Vibrant,
}

impl ThemePreset {
    /// The theme every unknown or absent name resolves to.
    pub const DEFAULT: ThemePreset = ThemePreset::ModernLight;

    /// Stable preset id for persistence/wire use.
    pub fn id(self) -> &'static str {
        match self {
            Self::ModernLight => "modern-light",
            Self::ModernDark => "modern-dark",
            Self::MinimalLight => "minimal-light",
            Self::Creative => "creative",
            Self::Professional => "professional",
            Self::Vibrant => "vibrant",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::ModernLight => "Modern Light",
            Self::ModernDark => "Modern Dark",
            Self::MinimalLight => "Minimal",
            Self::Creative => "Creative",
            Self::Professional => "Professional",
            Self::Vibrant => "Vibrant",
        }
    }

    /// Full preset list, in catalog order.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 6] = [
            ThemePreset::ModernLight,
            ThemePreset::ModernDark,
            ThemePreset::MinimalLight,
            ThemePreset::Creative,
            ThemePreset::Professional,
            ThemePreset::Vibrant,
        ];
        &PRESETS
    }

    /// Resolve a name to a preset; absent or unknown names yield
    /// [`Self::DEFAULT`]. This call never fails.
    pub fn resolve(name: Option<&str>) -> ThemePreset {
        name.and_then(|n| Self::all().iter().copied().find(|p| p.id() == n))
            .unwrap_or(Self::DEFAULT)
    }

    /// Build the full token bundle for this preset.
    pub fn theme(self) -> Theme {
        match self {
            Self::ModernLight => modern_light(),
            Self::ModernDark => modern_dark(),
            Self::MinimalLight => minimal_light(),
            Self::Creative => creative(),
            Self::Professional => professional(),
            Self::Vibrant => vibrant(),
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Look up a theme by name, falling back to the default. Never fails.
pub fn get_theme(name: &str) -> Theme {
    ThemePreset::resolve(Some(name)).theme()
}

/// Stable ids of every registered preset, in catalog order.
pub fn theme_names() -> Vec<&'static str> {
    ThemePreset::all().iter().map(|p| p.id()).collect()
}

fn modern_light() -> Theme {
    Theme {
        name: "Modern Light".into(),
        palette: Palette {
            background: "#F0F5FF".into(),
            surface: "rgba(255, 255, 255, 0.85)".into(),
            primary: "#2563EB".into(),
            secondary: "#7C3AED".into(),
            accent: "#059669".into(),
            text: "#111827".into(),
            muted_text: "#4B5563".into(),
            border: "rgba(229, 231, 235, 0.5)".into(),
        },
        typography: Typography {
            heading_font: "'Inter', system-ui, sans-serif".into(),
            body_font: "'Inter', system-ui, sans-serif".into(),
            heading_weight: "800".into(),
            body_weight: "400".into(),
        },
        background: Background::gradient("linear-gradient(135deg, #EFF6FF 0%, #F5F3FF 100%)"),
        border_radius: "24px".into(),
        shadow_style: "0 20px 40px -5px rgba(0, 0, 0, 0.05), 0 8px 10px -6px rgba(0, 0, 0, 0.01)"
            .into(),
    }
}

fn modern_dark() -> Theme {
    Theme {
        name: "Modern Dark".into(),
        palette: Palette {
            background: "#0F172A".into(),
            surface: "rgba(30, 41, 59, 0.7)".into(),
            primary: "#38BDF8".into(),
            secondary: "#818CF8".into(),
            accent: "#34D399".into(),
            text: "#F8FAFC".into(),
            muted_text: "#94A3B8".into(),
            border: "rgba(51, 65, 85, 0.5)".into(),
        },
        typography: Typography {
            heading_font: "'Outfit', system-ui, sans-serif".into(),
            body_font: "'Inter', system-ui, sans-serif".into(),
            heading_weight: "700".into(),
            body_weight: "300".into(),
        },
        background: Background::gradient("radial-gradient(circle at top right, #1e1b4b, #0f172a)"),
        border_radius: "20px".into(),
        shadow_style: "0 25px 50px -12px rgba(0, 0, 0, 0.5)".into(),
    }
}

fn minimal_light() -> Theme {
    Theme {
        name: "Minimal".into(),
        palette: Palette {
            background: "#FFFFFF".into(),
            surface: "#FFFFFF".into(),
            primary: "#171717".into(),
            secondary: "#525252".into(),
            accent: "#DC2626".into(),
            text: "#0A0A0A".into(),
            muted_text: "#525252".into(),
            border: "#E5E5E5".into(),
        },
        typography: Typography {
            heading_font: "'Playfair Display', serif".into(),
            body_font: "'Lato', sans-serif".into(),
            heading_weight: "600".into(),
            body_weight: "400".into(),
        },
        background: Background::solid("#FFFFFF"),
        border_radius: "0px".into(),
        shadow_style: "none".into(),
    }
}

fn creative() -> Theme {
    Theme {
        name: "Creative".into(),
        palette: Palette {
            background: "#FFF0F5".into(),
            surface: "rgba(255, 255, 255, 0.9)".into(),
            primary: "#DB2777".into(),
            secondary: "#F59E0B".into(),
            accent: "#7C3AED".into(),
            text: "#1F2937".into(),
            muted_text: "#4B5563".into(),
            border: "rgba(252, 231, 243, 0.8)".into(),
        },
        typography: Typography {
            heading_font: "'Poppins', sans-serif".into(),
            body_font: "'DM Sans', sans-serif".into(),
            heading_weight: "900".into(),
            body_weight: "500".into(),
        },
        background: Background::gradient("linear-gradient(120deg, #fdfbfb 0%, #ebedee 100%)"),
        border_radius: "32px".into(),
        shadow_style: "8px 8px 0px rgba(0,0,0,0.1)".into(),
    }
}

fn professional() -> Theme {
    Theme {
        name: "Professional".into(),
        palette: Palette {
            background: "#F8FAFC".into(),
            surface: "#FFFFFF".into(),
            primary: "#0369A1".into(),
            secondary: "#0F766E".into(),
            accent: "#B45309".into(),
            text: "#0F172A".into(),
            muted_text: "#475569".into(),
            border: "#E2E8F0".into(),
        },
        typography: Typography {
            heading_font: "'Roboto', sans-serif".into(),
            body_font: "'Open Sans', sans-serif".into(),
            heading_weight: "700".into(),
            body_weight: "400".into(),
        },
        background: Background::solid("#F8FAFC"),
        border_radius: "8px".into(),
        shadow_style: "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)"
            .into(),
    }
}

fn vibrant() -> Theme {
    Theme {
        name: "Vibrant".into(),
        palette: Palette {
            background: "#111827".into(),
            surface: "rgba(0, 0, 0, 0.6)".into(),
            primary: "#F472B6".into(),
            secondary: "#A78BFA".into(),
            accent: "#FBBF24".into(),
            text: "#FFFFFF".into(),
            muted_text: "#D1D5DB".into(),
            border: "rgba(255, 255, 255, 0.1)".into(),
        },
        typography: Typography {
            heading_font: "'Montserrat', sans-serif".into(),
            body_font: "'Raleway', sans-serif".into(),
            heading_weight: "900".into(),
            body_weight: "500".into(),
        },
        background: Background::gradient("linear-gradient(to right bottom, #4338ca, #be185d)"),
        border_radius: "24px".into(),
        shadow_style: "0 0 30px rgba(190, 24, 93, 0.3)".into(),
    }
}
