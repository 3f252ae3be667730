//! # inque_site
//!
//! Host-agnostic logic behind the inQue Apps marketing site.
//!
//! The browser crate (`site_web`) owns every `web-sys` call; this crate owns
//! what those calls should *do*: which theme to apply, what markup an app card
//! renders to, which visibility state the catalog is in, and the small bits of
//! arithmetic behind the page chrome (navbar restyle, parallax, typewriter).
//!
//! Host collaborators (storage, DOM surfaces, timers, notices) are traits in
//! [`host`], so everything here runs under plain `cargo test`.
//!
//! ## Quick Start
//!
//! ```
//! use inque_site::prelude::*;
//!
//! let config = SiteConfig::default();
//! let catalog = Catalog::builtin();
//! let listing = config.developer_listing_url();
//!
//! let card = create_app_card(&catalog.apps()[0], &listing);
//! assert!(card.contains("Vision Tech AI"));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): (de)serialize the catalog, theme preference and
//!   [`config::SiteConfig`], and load JSON overrides.

#[path = "core/card.rs"]
pub mod card;

#[path = "core/catalog.rs"]
pub mod catalog;

#[path = "core/config.rs"]
pub mod config;

#[path = "core/error.rs"]
pub mod error;

#[path = "core/host.rs"]
pub mod host;

#[path = "core/renderer.rs"]
pub mod renderer;

#[path = "core/theme.rs"]
pub mod theme;

pub mod chrome;

pub mod prelude {
    pub use crate::card::create_app_card;
    pub use crate::catalog::{AppDescriptor, AppIcon, Catalog, LearnMore};
    pub use crate::config::SiteConfig;
    pub use crate::error::SiteError;
    pub use crate::host::{CatalogSurface, Delay, Notifier, PreferenceStore, ThemeSurface};
    pub use crate::renderer::{CatalogRenderer, VisibilityState};
    pub use crate::theme::{ThemeController, ThemePreference};
}
