//! Page chrome: mobile nav, anchor scrolling, scroll effects, hover/press
//! feedback, hero typewriter. Every installer skips silently when its
//! elements are missing.

use std::cell::RefCell;
use std::rc::Rc;

use inque_site::chrome::{anchor_target, navbar_style, parallax_transform, translate_y, Typewriter};
use inque_site::config::ChromeConfig;
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

use super::dom::{query, query_all, set_style};
use super::timer::set_timeout;

const ACTIVE: &str = "active";

/// Registers `handler` for `event` on `target` for the lifetime of the page.
pub(super) fn on(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .is_ok()
    {
        cb.forget();
    }
}

pub(super) fn install_mobile_nav(document: &Document) {
    let (Some(hamburger), Some(menu)) =
        (query(document, ".hamburger"), query(document, ".nav-menu"))
    else {
        debug!("mobile nav not present");
        return;
    };

    {
        let hamburger_el = hamburger.clone();
        let menu = menu.clone();
        on(&hamburger, "click", move |_| {
            let _ = hamburger_el.class_list().toggle(ACTIVE);
            let _ = menu.class_list().toggle(ACTIVE);
        });
    }

    for link in query_all(document, ".nav-menu a") {
        let hamburger = hamburger.clone();
        let menu = menu.clone();
        on(&link, "click", move |_| {
            let _ = hamburger.class_list().remove_1(ACTIVE);
            let _ = menu.class_list().remove_1(ACTIVE);
        });
    }
}

pub(super) fn install_smooth_scroll(document: &Document) {
    for anchor in query_all(document, r##"a[href^="#"]"##) {
        let document = document.clone();
        let anchor_el = anchor.clone();
        on(&anchor, "click", move |e| {
            e.prevent_default();
            let href = anchor_el.get_attribute("href").unwrap_or_default();
            let Some(target) = anchor_target(&href).and_then(|sel| query(&document, sel)) else {
                return;
            };
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            opts.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
        });
    }
}

/// Navbar restyle and hero parallax, both driven by `window.scrollY`.
pub(super) fn install_scroll_effects(
    window: &Window,
    document: &Document,
    config: Rc<ChromeConfig>,
) {
    let navbar = query(document, ".navbar");
    let hero = query(document, ".hero");
    if navbar.is_none() && hero.is_none() {
        return;
    }

    let window_el = window.clone();
    on(window, "scroll", move |_| {
        let y = window_el.scroll_y().unwrap_or(0.0);
        if let Some(navbar) = &navbar {
            let style = navbar_style(&config, y);
            set_style(navbar, "background", &style.background);
            set_style(navbar, "box-shadow", &style.box_shadow);
        }
        if let Some(hero) = &hero {
            set_style(hero, "transform", &parallax_transform(&config, y));
        }
    });
}

pub(super) fn install_button_hover(document: &Document, config: &ChromeConfig) {
    let lifted = translate_y(config.button_lift_px);
    let rest = translate_y(0.0);
    for button in query_all(document, ".btn") {
        {
            let el = button.clone();
            let lifted = lifted.clone();
            on(&button, "mouseenter", move |_| set_style(&el, "transform", &lifted));
        }
        let el = button.clone();
        let rest = rest.clone();
        on(&button, "mouseleave", move |_| set_style(&el, "transform", &rest));
    }
}

/// Press feedback on app cards. Delegated from the grid because cards are
/// re-rendered on every fetch; clicks on links are left alone.
pub(super) fn install_card_press(grid: &Element, config: &ChromeConfig) {
    let settle_ms = config.card_press_ms;
    on(grid, "click", move |e| {
        let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if target.closest("a").ok().flatten().is_some() {
            return;
        }
        let Some(card) = target.closest(".app-card").ok().flatten() else {
            return;
        };
        set_style(&card, "transform", "scale(0.98)");
        set_timeout(settle_ms, move || set_style(&card, "transform", "translateY(-8px)"));
    });
}

pub(super) fn install_typewriter(document: &Document, config: &ChromeConfig) {
    let Some(title) = query(document, ".hero-content h1") else {
        return;
    };
    let text = title.text_content().unwrap_or_default();
    if text.is_empty() {
        return;
    }
    title.set_text_content(Some(""));

    let writer = Rc::new(RefCell::new(Typewriter::new(text)));
    let step_ms = config.typewriter_step_ms;
    set_timeout(config.typewriter_start_ms, move || type_next(title, writer, step_ms));
}

fn type_next(title: Element, writer: Rc<RefCell<Typewriter>>, step_ms: u32) {
    let Some(frame) = writer.borrow_mut().next() else {
        return;
    };
    title.set_text_content(Some(&frame));
    if !writer.borrow().is_done() {
        set_timeout(step_ms, move || type_next(title, writer, step_ms));
    }
}
