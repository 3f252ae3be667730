//! App catalog renderer: visibility states, simulated fetch, card insertion.

use std::cell::Cell;

use tracing::{debug, error, warn};

use crate::card::create_app_card;
use crate::catalog::{AppDescriptor, Catalog};
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::host::{CatalogSurface, Delay, Notifier};

/// Mutually exclusive display modes of the catalog section.
///
/// Before the first fetch starts the renderer reports `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityState {
    #[default]
    Loading,
    Content,
    Error,
}

impl VisibilityState {
    pub fn label(self) -> &'static str {
        match self {
            VisibilityState::Loading => "loading",
            VisibilityState::Content => "content",
            VisibilityState::Error => "error",
        }
    }

    pub fn loading_visible(self) -> bool {
        self == VisibilityState::Loading
    }

    pub fn content_visible(self) -> bool {
        self == VisibilityState::Content
    }

    pub fn error_visible(self) -> bool {
        self == VisibilityState::Error
    }
}

/// Card `index` starts its fade-in `index * step_ms` after becoming visible.
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

pub struct CatalogRenderer<S> {
    catalog: Catalog,
    surface: S,
    state: Cell<VisibilityState>,
    developer_listing: String,
    fetch_delay_ms: u32,
    stagger_ms: u32,
}

impl<S: CatalogSurface> CatalogRenderer<S> {
    pub fn new(catalog: Catalog, surface: S, config: &SiteConfig) -> Self {
        Self {
            catalog,
            surface,
            state: Cell::new(VisibilityState::default()),
            developer_listing: config.developer_listing_url(),
            fetch_delay_ms: config.catalog.fetch_delay_ms,
            stagger_ms: config.catalog.card_stagger_ms,
        }
    }

    pub fn state(&self) -> VisibilityState {
        self.state.get()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn create_app_card(&self, app: &AppDescriptor) -> String {
        create_app_card(app, &self.developer_listing)
    }

    /// Shows the loading panel, waits out the simulated latency, then renders
    /// the whole catalog. Any failure along the way ends in the error panel.
    ///
    /// Not cancellable: overlapping calls each run to completion and the last
    /// one to finish owns the container.
    pub async fn fetch_apps<D: Delay>(&self, delay: &D) -> VisibilityState {
        self.show(VisibilityState::Loading);
        delay.sleep(self.fetch_delay_ms).await;

        match self.display_apps(Some(self.catalog.apps())) {
            Ok(n) => debug!("rendered {} app cards", n),
            Err(e) => {
                error!("error fetching apps: {}", e);
                self.show(VisibilityState::Error);
            }
        }
        self.state()
    }

    /// Replaces the container with one card per app, in order.
    ///
    /// Empty or absent input switches to the error panel and returns
    /// [`SiteError::NoApps`].
    pub fn display_apps(&self, apps: Option<&[AppDescriptor]>) -> Result<usize, SiteError> {
        let apps = match apps {
            Some(apps) if !apps.is_empty() => apps,
            _ => {
                self.show(VisibilityState::Error);
                return Err(SiteError::NoApps);
            }
        };

        let fragments: Vec<String> = apps.iter().map(|a| self.create_app_card(a)).collect();
        if let Err(e) = self.surface.replace_content(&fragments) {
            self.show(VisibilityState::Error);
            return Err(e);
        }
        self.show(VisibilityState::Content);

        let delays: Vec<u32> = (0..fragments.len())
            .map(|i| stagger_delay_ms(i, self.stagger_ms))
            .collect();
        if let Err(e) = self.surface.attach_fade_in(&delays) {
            // Cards are already in place; they just won't animate.
            warn!("fade-in not attached: {}", e);
        }

        Ok(fragments.len())
    }

    /// Handles a click on a placeholder "Learn More" link.
    ///
    /// Returns `true` when a notice was shown. Apps with a real details page
    /// (or unknown names) produce no notice.
    pub fn show_details<N: Notifier>(&self, notifier: &N, app_name: &str) -> bool {
        let Some(notice) = self
            .catalog
            .find(app_name)
            .and_then(|app| app.learn_more().notice())
        else {
            return false;
        };
        notifier.notify(&notice);
        true
    }

    fn show(&self, state: VisibilityState) {
        self.state.set(state);
        if let Err(e) = self.surface.set_visibility(state) {
            warn!("could not switch catalog to {}: {}", state.label(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AppIcon;
    use crate::host::fakes::{InstantDelay, RecordingCatalogSurface, RecordingNotifier};

    fn renderer() -> CatalogRenderer<RecordingCatalogSurface> {
        CatalogRenderer::new(
            Catalog::builtin(),
            RecordingCatalogSurface::default(),
            &SiteConfig::default(),
        )
    }

    fn app(name: &str) -> AppDescriptor {
        AppDescriptor::new(
            name,
            format!("{name} description"),
            "Tools",
            AppIcon::Glyph("fas fa-cube".into()),
        )
    }

    #[test]
    fn pre_fetch_state_is_loading() {
        let r = renderer();
        assert_eq!(r.state(), VisibilityState::Loading);
        assert!(r.state().loading_visible());
        assert!(!r.state().content_visible());
        assert!(!r.state().error_visible());
    }

    #[test]
    fn empty_and_absent_lists_show_error() {
        for input in [Some(&[][..]), None] {
            let r = renderer();
            assert!(matches!(r.display_apps(input), Err(SiteError::NoApps)));
            assert_eq!(r.state(), VisibilityState::Error);
            assert_eq!(r.surface().last_visibility(), Some(VisibilityState::Error));
            assert!(r.surface().content.borrow().is_empty());
        }
    }

    #[test]
    fn two_apps_render_two_cards_in_order() {
        let r = renderer();
        let list = [app("First"), app("Second")];

        assert_eq!(r.display_apps(Some(&list)).unwrap(), 2);
        assert_eq!(r.state(), VisibilityState::Content);

        let content = r.surface().content.borrow();
        assert_eq!(content.len(), 2);
        assert_eq!(content[0], r.create_app_card(&list[0]));
        assert_eq!(content[1], r.create_app_card(&list[1]));
    }

    #[test]
    fn fade_in_is_staggered_per_index() {
        let r = renderer();
        r.display_apps(Some(r.catalog().apps())).unwrap();
        assert_eq!(*r.surface().fade_delays.borrow(), vec![0, 100, 200, 300]);
        assert_eq!(stagger_delay_ms(usize::MAX, 100), u32::MAX);
    }

    #[test]
    fn fetch_goes_loading_then_content() {
        let r = renderer();
        let delay = InstantDelay::default();

        let state = pollster::block_on(r.fetch_apps(&delay));

        assert_eq!(state, VisibilityState::Content);
        assert_eq!(*delay.requested.borrow(), vec![1500]);
        assert_eq!(
            *r.surface().visibility.borrow(),
            vec![VisibilityState::Loading, VisibilityState::Content]
        );
        assert_eq!(r.surface().content.borrow().len(), r.catalog().len());
    }

    #[test]
    fn fetch_failure_falls_back_to_error() {
        let r = renderer();
        r.surface().fail_replace.set(true);

        let state = pollster::block_on(r.fetch_apps(&InstantDelay::default()));

        assert_eq!(state, VisibilityState::Error);
        assert_eq!(r.surface().last_visibility(), Some(VisibilityState::Error));
    }

    #[test]
    fn failed_replace_leaves_catalog_in_error() {
        let r = renderer();
        r.surface().fail_replace.set(true);
        let list = [app("Only")];

        assert!(matches!(
            r.display_apps(Some(&list)),
            Err(SiteError::MissingElement(_))
        ));
        assert_eq!(r.state(), VisibilityState::Error);
        assert_eq!(r.surface().last_visibility(), Some(VisibilityState::Error));
        assert!(r.surface().fade_delays.borrow().is_empty());
    }

    #[test]
    fn refetch_returns_to_loading_and_renders_same_cards() {
        let r = renderer();
        let delay = InstantDelay::default();
        pollster::block_on(r.fetch_apps(&delay));
        let first = r.surface().content.borrow().clone();

        pollster::block_on(r.fetch_apps(&delay));

        assert_eq!(*r.surface().content.borrow(), first);
        assert_eq!(
            *r.surface().visibility.borrow(),
            vec![
                VisibilityState::Loading,
                VisibilityState::Content,
                VisibilityState::Loading,
                VisibilityState::Content,
            ]
        );
    }

    #[test]
    fn empty_catalog_fetch_ends_in_error() {
        let r = CatalogRenderer::new(
            Catalog::new(Vec::new()).unwrap(),
            RecordingCatalogSurface::default(),
            &SiteConfig::default(),
        );
        let state = pollster::block_on(r.fetch_apps(&InstantDelay::default()));
        assert_eq!(state, VisibilityState::Error);
    }

    #[test]
    fn placeholder_details_notify_with_name() {
        let r = renderer();
        let notifier = RecordingNotifier::default();

        assert!(r.show_details(&notifier, "Vision Tech AI"));
        assert!(!r.show_details(&notifier, "Tech Prep"));
        assert!(!r.show_details(&notifier, "Unknown"));

        let messages = notifier.messages.borrow();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("Vision Tech AI"));
    }
}
