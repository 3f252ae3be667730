use thiserror::Error;

/// Everything that can go wrong while driving the page.
///
/// Nothing here is fatal: callers log the error and leave the affected
/// behavior inert. [`SiteError::NoApps`] is the only condition with a
/// user-visible outcome (the catalog error panel).
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no app data available")]
    NoApps,

    #[error("duplicate app name in catalog: {0}")]
    DuplicateApp(String),

    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("host call failed: {0}")]
    Host(String),

    #[cfg(feature = "serde")]
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SiteError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement(selector.into())
    }

    pub fn host(msg: impl Into<String>) -> Self {
        Self::Host(msg.into())
    }
}
