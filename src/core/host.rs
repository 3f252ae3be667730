//! Seams to the host environment.
//!
//! The browser crate implements these over `web-sys`; tests use the in-memory
//! fakes at the bottom of this file. All methods take `&self`: the page is
//! single-threaded and surfaces are shared between event handlers.

use std::future::Future;

use crate::error::SiteError;
use crate::renderer::VisibilityState;
use crate::theme::ThemePreference;

/// Synchronous string key-value storage that survives reloads.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), SiteError>;
}

/// Applies the visual-mode flag on the document root and the toggle icon.
pub trait ThemeSurface {
    fn apply_theme(&self, pref: ThemePreference) -> Result<(), SiteError>;
}

/// The catalog container plus its loading and error panels.
pub trait CatalogSurface {
    fn set_visibility(&self, state: VisibilityState) -> Result<(), SiteError>;

    /// Replaces the container content with `fragments`, in order.
    fn replace_content(&self, fragments: &[String]) -> Result<(), SiteError>;

    /// Attaches view-triggered fade-in to the rendered cards; `delays_ms[i]`
    /// is the animation delay of card `i`.
    fn attach_fade_in(&self, delays_ms: &[u32]) -> Result<(), SiteError>;
}

pub trait Notifier {
    fn notify(&self, message: &str);
}

/// One-shot timer.
pub trait Delay {
    type Sleep: Future<Output = ()>;

    fn sleep(&self, ms: u32) -> Self::Sleep;
}

#[cfg(test)]
pub(crate) mod fakes {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::future::{ready, Ready};

    use super::*;

    #[derive(Default)]
    pub(crate) struct MemoryStore {
        pub(crate) values: RefCell<HashMap<String, String>>,
        pub(crate) writes: Cell<usize>,
    }

    impl MemoryStore {
        pub(crate) fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store
                .values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            store
        }
    }

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), SiteError> {
            self.writes.set(self.writes.get() + 1);
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    pub(crate) struct RecordingThemeSurface {
        pub(crate) applied: RefCell<Vec<ThemePreference>>,
    }

    impl RecordingThemeSurface {
        pub(crate) fn last(&self) -> Option<ThemePreference> {
            self.applied.borrow().last().copied()
        }
    }

    impl ThemeSurface for RecordingThemeSurface {
        fn apply_theme(&self, pref: ThemePreference) -> Result<(), SiteError> {
            self.applied.borrow_mut().push(pref);
            Ok(())
        }
    }

    #[derive(Default)]
    pub(crate) struct RecordingCatalogSurface {
        pub(crate) visibility: RefCell<Vec<VisibilityState>>,
        pub(crate) content: RefCell<Vec<String>>,
        pub(crate) fade_delays: RefCell<Vec<u32>>,
        pub(crate) fail_replace: Cell<bool>,
    }

    impl RecordingCatalogSurface {
        pub(crate) fn last_visibility(&self) -> Option<VisibilityState> {
            self.visibility.borrow().last().copied()
        }
    }

    impl CatalogSurface for RecordingCatalogSurface {
        fn set_visibility(&self, state: VisibilityState) -> Result<(), SiteError> {
            self.visibility.borrow_mut().push(state);
            Ok(())
        }

        fn replace_content(&self, fragments: &[String]) -> Result<(), SiteError> {
            if self.fail_replace.get() {
                return Err(SiteError::missing("#apps-grid"));
            }
            *self.content.borrow_mut() = fragments.to_vec();
            Ok(())
        }

        fn attach_fade_in(&self, delays_ms: &[u32]) -> Result<(), SiteError> {
            *self.fade_delays.borrow_mut() = delays_ms.to_vec();
            Ok(())
        }
    }

    #[derive(Default)]
    pub(crate) struct RecordingNotifier {
        pub(crate) messages: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    /// Resolves immediately, recording the requested delays.
    #[derive(Default)]
    pub(crate) struct InstantDelay {
        pub(crate) requested: RefCell<Vec<u32>>,
    }

    impl Delay for InstantDelay {
        type Sleep = Ready<()>;

        fn sleep(&self, ms: u32) -> Self::Sleep {
            self.requested.borrow_mut().push(ms);
            ready(())
        }
    }
}
