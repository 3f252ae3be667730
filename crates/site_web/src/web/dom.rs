use std::rc::Rc;

use inque_site::chrome::{css_millis, STAGGER_PROPERTY};
use inque_site::config::{CatalogConfig, ThemeConfig};
use inque_site::error::SiteError;
use inque_site::host::{CatalogSurface, Notifier, ThemeSurface};
use inque_site::renderer::VisibilityState;
use inque_site::theme::ThemePreference;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::observer::FadeInObserver;

pub(super) fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub(super) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(super) fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property(property, value);
    }
}

pub(super) fn prefers_dark_scheme(window: &web_sys::Window) -> bool {
    window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// Root `data-theme` attribute plus the toggle button's icon.
pub(super) struct DomThemeSurface {
    document: Document,
    config: ThemeConfig,
}

impl DomThemeSurface {
    pub(super) fn new(document: Document, config: ThemeConfig) -> Self {
        Self { document, config }
    }
}

impl ThemeSurface for DomThemeSurface {
    fn apply_theme(&self, pref: ThemePreference) -> Result<(), SiteError> {
        let root = self
            .document
            .document_element()
            .ok_or_else(|| SiteError::missing("html"))?;
        root.set_attribute(&self.config.root_attribute, pref.as_attr())
            .map_err(|_| SiteError::host("setAttribute() threw"))?;

        // A page without the toggle just has no icon to update.
        let Some(toggle) = query(&self.document, &self.config.toggle_selector) else {
            return Ok(());
        };
        let _ = toggle.set_attribute("aria-label", pref.toggle_label());
        let _ = toggle.set_attribute("title", pref.toggle_label());
        let icon_selector = format!("{} i", self.config.toggle_selector);
        if let Some(icon) = query(&self.document, &icon_selector) {
            icon.set_class_name(pref.icon_class());
        }
        Ok(())
    }
}

/// The apps grid with its loading and error panels.
pub(super) struct DomCatalogSurface {
    document: Document,
    config: CatalogConfig,
    observer: Option<Rc<FadeInObserver>>,
}

impl DomCatalogSurface {
    pub(super) fn new(
        document: Document,
        config: CatalogConfig,
        observer: Option<Rc<FadeInObserver>>,
    ) -> Self {
        Self {
            document,
            config,
            observer,
        }
    }

    fn by_id(&self, id: &str) -> Result<HtmlElement, SiteError> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| SiteError::missing(format!("#{id}")))
    }

    pub(super) fn grid(&self) -> Result<HtmlElement, SiteError> {
        self.by_id(&self.config.grid_id)
    }
}

fn display(el: &HtmlElement, visible: bool, shown_as: &str) -> Result<(), SiteError> {
    el.style()
        .set_property("display", if visible { shown_as } else { "none" })
        .map_err(|_| SiteError::host("style.setProperty() threw"))
}

impl CatalogSurface for DomCatalogSurface {
    fn set_visibility(&self, state: VisibilityState) -> Result<(), SiteError> {
        display(&self.by_id(&self.config.loading_id)?, state.loading_visible(), "block")?;
        display(&self.grid()?, state.content_visible(), "grid")?;
        display(&self.by_id(&self.config.error_id)?, state.error_visible(), "block")
    }

    fn replace_content(&self, fragments: &[String]) -> Result<(), SiteError> {
        self.grid()?.set_inner_html(&fragments.concat());
        Ok(())
    }

    fn attach_fade_in(&self, delays_ms: &[u32]) -> Result<(), SiteError> {
        let grid = self.grid()?;
        let cards = grid
            .query_selector_all(".app-card")
            .map_err(|_| SiteError::host("querySelectorAll() threw"))?;

        for i in 0..cards.length() {
            let Some(card) = cards.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let delay = delays_ms.get(i as usize).copied().unwrap_or(0);
            set_style(&card, STAGGER_PROPERTY, &css_millis(delay));
            match &self.observer {
                Some(observer) => observer.observe(&card),
                // No observer support: show the card right away.
                None => {
                    let _ = card.class_list().add_2("fade-in", "visible");
                }
            }
        }
        Ok(())
    }
}

/// Placeholder notices as a plain `alert()`.
pub(super) struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        if let Some(w) = web_sys::window() {
            let _ = w.alert_with_message(message);
        }
    }
}
