use inque_site::config::ObserverConfig;
use inque_site::error::SiteError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const FADE_IN: &str = "fade-in";
const VISIBLE: &str = "visible";

/// One shared intersection observer: elements gain `visible` the first time
/// they scroll into view. Nothing is ever un-observed.
pub(super) struct FadeInObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl FadeInObserver {
    pub(super) fn new(config: &ObserverConfig) -> Result<Self, SiteError> {
        let callback = Closure::wrap(Box::new(|entries: js_sys::Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1(VISIBLE);
                }
            }
        })
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config.threshold));
        init.set_root_margin(&config.root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|_| SiteError::host("IntersectionObserver() threw"))?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub(super) fn observe(&self, el: &Element) {
        let _ = el.class_list().add_1(FADE_IN);
        self.observer.observe(el);
    }

    /// Observes every element matching `selectors`; returns how many.
    pub(super) fn observe_all(&self, document: &web_sys::Document, selectors: &str) -> usize {
        let elements = super::dom::query_all(document, selectors);
        for el in &elements {
            self.observe(el);
        }
        elements.len()
    }
}
