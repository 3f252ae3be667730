use inque_site::error::SiteError;
use inque_site::host::PreferenceStore;

/// `window.localStorage`, when the browser exposes it.
pub(super) struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub(super) fn open() -> Option<Self> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .map(|storage| Self { storage })
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SiteError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| SiteError::host("localStorage.setItem() threw"))
    }
}
