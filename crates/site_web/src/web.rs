use std::rc::Rc;

use inque_site::card::DETAILS_ATTR;
use inque_site::catalog::Catalog;
use inque_site::config::SiteConfig;
use inque_site::renderer::CatalogRenderer;
use inque_site::theme::ThemeController;
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Window};

mod chrome;
mod console;
mod dom;
mod observer;
mod storage;
mod timer;

use dom::{AlertNotifier, DomCatalogSurface, DomThemeSurface};
use observer::FadeInObserver;
use storage::LocalStorage;
use timer::BrowserDelay;

/// Inline JSON overrides for [`SiteConfig`].
const CONFIG_ELEMENT_ID: &str = "site-config";

type Theme = ThemeController<DomThemeSurface, LocalStorage>;
type Renderer = CatalogRenderer<DomCatalogSurface>;

pub fn start() {
    console::init_tracing();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let config = Rc::new(load_config(&document));

    // Theme first so the page doesn't flash the wrong palette while the DOM settles.
    let theme: Rc<Theme> = Rc::new(ThemeController::new(
        DomThemeSurface::new(document.clone(), config.theme.clone()),
        LocalStorage::open(),
        config.theme.storage_key.clone(),
    ));
    let pref = theme.initialize_theme(dom::prefers_dark_scheme(&window));
    info!("theme: {}", pref.as_attr());

    let ready_doc = document.clone();
    on_dom_ready(&ready_doc, move || boot(window, document, config, theme));
}

fn load_config(document: &Document) -> SiteConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&raw) {
        Ok(cfg) => {
            debug!("site config overrides loaded");
            cfg
        }
        Err(e) => {
            warn!("ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
            SiteConfig::default()
        }
    }
}

/// Runs `f` once the DOM is parsed; immediately if that already happened.
fn on_dom_ready(document: &Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let cb = Closure::once_into_js(f);
    let _ = document.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref());
}

fn boot(window: Window, document: Document, config: Rc<SiteConfig>, theme: Rc<Theme>) {
    bind_theme_toggle(&document, &config, theme);

    chrome::install_mobile_nav(&document);
    chrome::install_smooth_scroll(&document);
    chrome::install_scroll_effects(&window, &document, Rc::new(config.chrome.clone()));
    chrome::install_button_hover(&document, &config.chrome);
    chrome::install_typewriter(&document, &config.chrome);

    let observer = match FadeInObserver::new(&config.observer) {
        Ok(observer) => {
            let n = observer.observe_all(&document, &config.observer.selectors);
            debug!("observing {} elements for fade-in", n);
            Some(Rc::new(observer))
        }
        Err(e) => {
            warn!("fade-in disabled: {}", e);
            None
        }
    };

    let surface = DomCatalogSurface::new(document.clone(), config.catalog.clone(), observer);
    let grid = match surface.grid() {
        Ok(grid) => grid,
        Err(e) => {
            warn!("app catalog disabled: {}", e);
            return;
        }
    };
    let renderer: Rc<Renderer> =
        Rc::new(CatalogRenderer::new(Catalog::builtin(), surface, &config));

    chrome::install_card_press(&grid, &config.chrome);
    bind_details_links(&grid, Rc::clone(&renderer));
    expose_refresh(&window, Rc::clone(&renderer));

    spawn_fetch(renderer);
}

fn bind_theme_toggle(document: &Document, config: &SiteConfig, theme: Rc<Theme>) {
    let Some(toggle) = dom::query(document, &config.theme.toggle_selector) else {
        debug!("no theme toggle ({})", config.theme.toggle_selector);
        return;
    };
    chrome::on(&toggle, "click", move |_| {
        let pref = theme.toggle();
        info!("theme toggled: {}", pref.as_attr());
    });
}

/// Placeholder "Learn More" links carry the app name; show a notice instead of navigating.
fn bind_details_links(grid: &Element, renderer: Rc<Renderer>) {
    let selector = format!("a[{DETAILS_ATTR}]");
    chrome::on(grid, "click", move |e| {
        let Some(link) = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(&selector).ok().flatten())
        else {
            return;
        };
        e.prevent_default();
        let name = link.get_attribute(DETAILS_ATTR).unwrap_or_default();
        renderer.show_details(&AlertNotifier, &name);
    });
}

fn spawn_fetch(renderer: Rc<Renderer>) {
    spawn_local(async move {
        let state = renderer.fetch_apps(&BrowserDelay).await;
        debug!("catalog: {}", state.label());
    });
}

/// `window.refreshApps()` re-runs the fetch; handy from the devtools console.
fn expose_refresh(window: &Window, renderer: Rc<Renderer>) {
    let cb = Closure::wrap(
        Box::new(move || spawn_fetch(Rc::clone(&renderer))) as Box<dyn FnMut()>
    );
    if js_sys::Reflect::set(window, &JsValue::from_str("refreshApps"), cb.as_ref()).is_ok() {
        cb.forget();
    }
}
