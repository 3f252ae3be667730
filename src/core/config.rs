//! Site-wide constants, overridable from JSON.
//!
//! Every section carries `#[serde(default)]`, so an override blob only needs
//! the fields it changes:
//!
//! ```json
//! { "catalog": { "fetch_delay_ms": 0 }, "theme": { "storage_key": "site.theme" } }
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SiteConfig {
    pub catalog: CatalogConfig,
    pub theme: ThemeConfig,
    pub observer: ObserverConfig,
    pub chrome: ChromeConfig,
}

impl SiteConfig {
    /// Parses a (possibly partial) JSON override on top of the defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(raw: &str) -> Result<Self, crate::error::SiteError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Developer page on the Play Store; the store link for apps without their own.
    pub fn developer_listing_url(&self) -> String {
        format!(
            "https://play.google.com/store/apps/developer?id={}",
            self.catalog.developer_id
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct CatalogConfig {
    pub developer_id: String,
    /// Simulated latency before the catalog renders.
    pub fetch_delay_ms: u32,
    /// Fade-in stagger between consecutive cards.
    pub card_stagger_ms: u32,
    pub grid_id: String,
    pub loading_id: String,
    pub error_id: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            developer_id: "inQue+Apps".to_string(),
            fetch_delay_ms: 1500,
            card_stagger_ms: 100,
            grid_id: "apps-grid".to_string(),
            loading_id: "loading".to_string(),
            error_id: "error".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ThemeConfig {
    pub storage_key: String,
    pub toggle_selector: String,
    /// Attribute set on the document root (`<html data-theme="dark">`).
    pub root_attribute: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            toggle_selector: "#theme-toggle".to_string(),
            root_attribute: "data-theme".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ObserverConfig {
    /// Fraction of the element that must be visible before it fades in.
    pub threshold: f64,
    pub root_margin: String,
    /// Elements that fade in once at DOM-ready.
    pub selectors: String,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            selectors: ".feature, .app-card, .contact-item, .section-header".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct NavbarStyle {
    pub background: String,
    pub box_shadow: String,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ChromeConfig {
    /// Scroll offset (px) past which the navbar switches to its scrolled style.
    pub navbar_threshold_px: f64,
    pub navbar_resting: NavbarStyle,
    pub navbar_scrolled: NavbarStyle,
    /// Hero translation per scrolled pixel.
    pub parallax_rate: f64,
    pub typewriter_start_ms: u32,
    pub typewriter_step_ms: u32,
    pub card_press_ms: u32,
    pub button_lift_px: f64,
}

impl Default for NavbarStyle {
    fn default() -> Self {
        Self {
            background: "rgba(255, 255, 255, 0.95)".to_string(),
            box_shadow: "0 2px 20px rgba(0, 0, 0, 0.1)".to_string(),
        }
    }
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            navbar_threshold_px: 50.0,
            navbar_resting: NavbarStyle::default(),
            navbar_scrolled: NavbarStyle {
                background: "rgba(255, 255, 255, 0.98)".to_string(),
                box_shadow: "0 2px 20px rgba(0, 0, 0, 0.15)".to_string(),
            },
            parallax_rate: -0.5,
            typewriter_start_ms: 500,
            typewriter_step_ms: 100,
            card_press_ms: 150,
            button_lift_px: -2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn developer_listing_uses_developer_id() {
        let cfg = SiteConfig::default();
        assert_eq!(
            cfg.developer_listing_url(),
            "https://play.google.com/store/apps/developer?id=inQue+Apps"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = SiteConfig::from_json(
            r#"{ "catalog": { "fetch_delay_ms": 0 }, "theme": { "storage_key": "site.theme" } }"#,
        )
        .unwrap();

        assert_eq!(cfg.catalog.fetch_delay_ms, 0);
        assert_eq!(cfg.catalog.card_stagger_ms, 100);
        assert_eq!(cfg.catalog.developer_id, "inQue+Apps");
        assert_eq!(cfg.theme.storage_key, "site.theme");
        assert_eq!(cfg.theme.toggle_selector, "#theme-toggle");
        assert_eq!(cfg.chrome, ChromeConfig::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn malformed_override_is_an_error() {
        assert!(SiteConfig::from_json("{ not json").is_err());
        assert!(SiteConfig::from_json(r#"{ "catalog": { "fetch_delay_ms": "soon" } }"#).is_err());
    }
}
