//! The fixed list of apps shown on the site.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// Card artwork: an image file, or a symbolic icon class (Font Awesome).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum AppIcon {
    Image(String),
    Glyph(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AppDescriptor {
    pub name: String,
    pub description: String,
    pub category: String,
    pub icon: AppIcon,
    #[cfg_attr(feature = "serde", serde(default))]
    pub details_url: Option<String>,
    /// Used when `details_url` is absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fallback_details_url: Option<String>,
    /// Store page; the developer listing when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub play_url: Option<String>,
}

/// Where a card's "Learn More" action goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LearnMore<'a> {
    Link(&'a str),
    /// No page exists yet; show a notice naming the app instead of navigating.
    Placeholder { app_name: &'a str },
}

impl<'a> LearnMore<'a> {
    pub fn href(self) -> Option<&'a str> {
        match self {
            LearnMore::Link(url) => Some(url),
            LearnMore::Placeholder { .. } => None,
        }
    }

    pub fn notice(self) -> Option<String> {
        match self {
            LearnMore::Link(_) => None,
            LearnMore::Placeholder { app_name } => Some(placeholder_notice(app_name)),
        }
    }
}

pub fn placeholder_notice(app_name: &str) -> String {
    format!(
        "More details about {app_name} coming soon! This could open a modal with detailed information about the app."
    )
}

fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl AppDescriptor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        icon: AppIcon,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: category.into(),
            icon,
            details_url: None,
            fallback_details_url: None,
            play_url: None,
        }
    }

    pub fn with_details_url(mut self, url: impl Into<String>) -> Self {
        self.details_url = Some(url.into());
        self
    }

    pub fn with_fallback_details_url(mut self, url: impl Into<String>) -> Self {
        self.fallback_details_url = Some(url.into());
        self
    }

    pub fn with_play_url(mut self, url: impl Into<String>) -> Self {
        self.play_url = Some(url.into());
        self
    }

    /// Store link target, falling back to the shared developer listing.
    pub fn store_url<'a>(&'a self, developer_listing: &'a str) -> &'a str {
        non_empty(&self.play_url).unwrap_or(developer_listing)
    }

    pub fn learn_more(&self) -> LearnMore<'_> {
        match non_empty(&self.details_url).or_else(|| non_empty(&self.fallback_details_url)) {
            Some(url) => LearnMore::Link(url),
            None => LearnMore::Placeholder {
                app_name: &self.name,
            },
        }
    }
}

/// Ordered, immutable app list. Order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    apps: Vec<AppDescriptor>,
}

impl Catalog {
    /// Rejects duplicate names; names identify cards and placeholder notices.
    pub fn new(apps: Vec<AppDescriptor>) -> Result<Self, SiteError> {
        for (i, app) in apps.iter().enumerate() {
            if apps[..i].iter().any(|prev| prev.name == app.name) {
                return Err(SiteError::DuplicateApp(app.name.clone()));
            }
        }
        Ok(Self { apps })
    }

    pub fn builtin() -> Self {
        Self {
            apps: vec![
                AppDescriptor::new(
                    "Vision Tech AI",
                    "Advanced AI-powered vision technology app for enhanced image processing and analysis.",
                    "AI & Technology",
                    AppIcon::Glyph("fas fa-eye".to_string()),
                ),
                AppDescriptor::new(
                    "Universal Media Converter",
                    "Convert and transform media files between different formats with ease and high quality.",
                    "Media & Tools",
                    AppIcon::Glyph("fas fa-exchange-alt".to_string()),
                )
                .with_details_url("https://inqueapps.github.io/umc/"),
                AppDescriptor::new(
                    "Tech Prep",
                    "Comprehensive preparation app for technology interviews and technical assessments.",
                    "Education & Learning",
                    AppIcon::Glyph("fas fa-laptop-code".to_string()),
                )
                .with_details_url("https://inqueapps.github.io/tp/"),
                AppDescriptor::new(
                    "Rate My Fit",
                    "Rate and review fashion outfits, get style recommendations and share your looks.",
                    "Lifestyle & Fashion",
                    AppIcon::Glyph("fas fa-tshirt".to_string()),
                )
                .with_details_url("https://inqueapps.github.io/rmf/"),
            ],
        }
    }

    /// Loads a catalog from a JSON array of descriptors.
    #[cfg(feature = "serde")]
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let apps: Vec<AppDescriptor> = serde_json::from_str(raw)?;
        Self::new(apps)
    }

    pub fn apps(&self) -> &[AppDescriptor] {
        &self.apps
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&AppDescriptor> {
        self.apps.iter().find(|a| a.name == name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
