//! Browser bindings for the marketing site.
//!
//! This crate is a stub by default so the workspace builds and tests on native
//! targets without a wasm toolchain. All behavior lives in `inque_site`; the
//! `web` module only wires it to `web-sys`.
//!
//! Enable the real bindings with: `--features web` (and a wasm32 target).

/// Placeholder function for non-web (or non-wasm) builds.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn placeholder() {
    // No-op.
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;

#[cfg(test)]
mod tests {
    use inque_site::chrome::STAGGER_PROPERTY;

    const STYLES: &str = include_str!("../styles.css");

    fn rule(selector: &str) -> &'static str {
        let start = STYLES
            .find(&format!("{selector} {{"))
            .unwrap_or_else(|| panic!("no rule for {selector}"));
        let body = &STYLES[start..];
        &body[..body.find('}').unwrap()]
    }

    #[test]
    fn card_stagger_is_an_animation_delay() {
        assert_eq!(STAGGER_PROPERTY, "animation-delay");
        assert!(rule(".app-card.fade-in.visible").contains("animation: card-fade-in"));
        assert!(STYLES.contains("@keyframes card-fade-in"));
    }

    #[test]
    fn card_transition_only_covers_press_transform() {
        let card = rule(".app-card.fade-in");
        assert!(card.contains("transition: transform 0.2s"));
        assert!(!card.contains("opacity"));
    }
}
