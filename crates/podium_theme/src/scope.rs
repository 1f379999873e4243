//! Scoped theme state
//!
//! A [`ThemeScope`] is the style-variable scope attached to one presentation
//! view. Applying a theme swaps the entire projected token set under a single
//! write lock - the key set is constant and every apply rewrites every key,
//! so rapid theme switching is last-write-wins for the whole set and can
//! never leave a scope with tokens from two themes mixed together.

use std::sync::{Mutex, RwLock};

use tracing::debug;

use crate::presets::{get_theme, ThemePreset};
use crate::projector::{project, StyleTokenMap};
use crate::theme::Theme;

struct ActiveTheme {
    name: String,
    tokens: StyleTokenMap,
}

/// Per-presentation rendering context holding the active projected theme.
pub struct ThemeScope {
    active: RwLock<ActiveTheme>,
    /// Invoked after the token set actually changes (e.g. to request a
    /// repaint). Not invoked on no-op re-application.
    on_change: Mutex<Option<fn()>>,
}

impl ThemeScope {
    /// Create a scope with the default theme already applied.
    pub fn new() -> Self {
        Self::with_theme(&ThemePreset::DEFAULT.theme())
    }

    /// Create a scope with a specific theme applied.
    pub fn with_theme(theme: &Theme) -> Self {
        Self {
            active: RwLock::new(ActiveTheme {
                name: theme.name.clone(),
                tokens: project(theme),
            }),
            on_change: Mutex::new(None),
        }
    }

    /// Register a callback fired whenever an apply changes the token set.
    pub fn set_on_change(&self, callback: fn()) {
        *self.on_change.lock().unwrap() = Some(callback);
    }

    /// Apply a theme, replacing the whole token set atomically.
    ///
    /// Re-applying the currently active theme is an observable no-op: the
    /// map is untouched and the change callback does not fire.
    pub fn apply(&self, theme: &Theme) {
        let projected = project(theme);

        {
            let current = self.active.read().unwrap();
            if current.tokens == projected && current.name == theme.name {
                return;
            }
        }

        {
            let mut current = self.active.write().unwrap();
            debug!("ThemeScope::apply: {} -> {}", current.name, theme.name);
            current.name = theme.name.clone();
            current.tokens = projected;
        }

        if let Some(cb) = *self.on_change.lock().unwrap() {
            cb();
        }
    }

    /// Resolve a theme name (unknown names fall back to the default) and
    /// apply it.
    pub fn apply_named(&self, name: &str) {
        self.apply(&get_theme(name));
    }

    /// Display name of the active theme.
    pub fn theme_name(&self) -> String {
        self.active.read().unwrap().name.clone()
    }

    /// Value of one namespace key in the active projection.
    pub fn token(&self, key: &str) -> Option<String> {
        self.active
            .read()
            .unwrap()
            .tokens
            .get(key)
            .map(str::to_string)
    }

    /// Snapshot of the active token map.
    pub fn tokens(&self) -> StyleTokenMap {
        self.active.read().unwrap().tokens.clone()
    }
}

impl Default for ThemeScope {
    fn default() -> Self {
        Self::new()
    }
}
