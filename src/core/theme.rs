//! Dark/light theme switch.

use std::cell::Cell;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::host::{PreferenceStore, ThemeSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Value stored under the theme key and written to the root attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn parse(v: &str) -> Option<Self> {
        match v.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Icon class for the toggle control: the moon offers dark mode, the sun offers light.
    pub fn icon_class(self) -> &'static str {
        match self {
            ThemePreference::Light => "fas fa-moon",
            ThemePreference::Dark => "fas fa-sun",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemePreference::Light => "Switch to dark mode",
            ThemePreference::Dark => "Switch to light mode",
        }
    }
}

/// Startup priority: persisted value, then system preference, then light.
/// Unrecognized persisted values are ignored.
pub fn resolve_preference(persisted: Option<&str>, prefers_dark: bool) -> ThemePreference {
    if let Some(pref) = persisted.and_then(ThemePreference::parse) {
        return pref;
    }
    if prefers_dark {
        ThemePreference::Dark
    } else {
        ThemePreference::Light
    }
}

/// Owns the active preference. A missing store disables persistence only.
pub struct ThemeController<S, K> {
    surface: S,
    store: Option<K>,
    storage_key: String,
    active: Cell<ThemePreference>,
}

impl<S: ThemeSurface, K: PreferenceStore> ThemeController<S, K> {
    pub fn new(surface: S, store: Option<K>, storage_key: impl Into<String>) -> Self {
        Self {
            surface,
            store,
            storage_key: storage_key.into(),
            active: Cell::new(ThemePreference::default()),
        }
    }

    pub fn active(&self) -> ThemePreference {
        self.active.get()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn initialize_theme(&self, prefers_dark: bool) -> ThemePreference {
        let persisted = self
            .store
            .as_ref()
            .and_then(|s| s.get(&self.storage_key));
        let pref = resolve_preference(persisted.as_deref(), prefers_dark);
        debug!(
            persisted = persisted.as_deref().unwrap_or("<none>"),
            prefers_dark,
            theme = pref.as_attr(),
            "theme resolved"
        );
        self.set_theme(pref);
        pref
    }

    /// Applies `pref` unconditionally. Does not persist.
    pub fn set_theme(&self, pref: ThemePreference) {
        self.active.set(pref);
        if let Err(e) = self.surface.apply_theme(pref) {
            warn!("could not apply theme {}: {}", pref.as_attr(), e);
        }
    }

    /// Flips the active preference, applies it and persists it.
    pub fn toggle(&self) -> ThemePreference {
        let next = self.active().toggle();
        self.set_theme(next);
        if let Some(store) = &self.store {
            if let Err(e) = store.set(&self.storage_key, next.as_attr()) {
                warn!("could not persist theme: {}", e);
            }
        }
        next
    }
}
