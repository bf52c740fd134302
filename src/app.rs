// SPDX-License-Identifier: MPL-2.0
//! Application orchestration: wires the collection loader, the navigator,
//! and a display surface into a gallery session.
//!
//! A session loads the collection exactly once at startup. Under the lazy
//! strategy a background chain resolves the remaining entries one at a time
//! after the first artwork is shown; navigation resolves its target on
//! demand when it gets ahead of the chain.

use crate::collection_loader::CollectionLoader;
use crate::config::{Config, LoadStrategy};
use crate::error::LoadError;
use crate::navigator::GalleryNavigator;
use crate::viewer::{DisplaySurface, VisibilityUpgrade};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

type SharedNavigator = Arc<Mutex<GalleryNavigator>>;

pub struct GalleryApp<S: DisplaySurface> {
    loader: CollectionLoader,
    navigator: SharedNavigator,
    surface: S,
    upgrade: Option<VisibilityUpgrade>,
}

impl<S: DisplaySurface> GalleryApp<S> {
    /// Creates an app for the given configuration and surface.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: Config, surface: S) -> Result<Self, LoadError> {
        Ok(Self {
            loader: CollectionLoader::new(config)?,
            navigator: Arc::new(Mutex::new(GalleryNavigator::new())),
            surface,
            upgrade: None,
        })
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Loads the collection and displays the first artwork.
    ///
    /// On a load failure the error indicator is shown and the collection
    /// stays empty; there is no retry. Under the lazy strategy this also
    /// spawns the background resolution chain.
    pub async fn start(&mut self) {
        self.surface.set_loading(true);

        let collection = match self.loader.load().await {
            Ok(collection) => collection,
            Err(e) => {
                error!(error = %e, "collection load failed");
                self.surface.set_loading(false);
                self.surface.show_error(&e.to_string());
                return;
            }
        };
        info!(artworks = collection.len(), "collection loaded");

        {
            let mut navigator = self.navigator.lock().await;
            navigator.set_collection(collection);
        }

        self.display_current().await;
        self.surface.set_loading(false);

        if self.loader.strategy() == LoadStrategy::Lazy {
            let loader = self.loader.clone();
            let navigator = Arc::clone(&self.navigator);
            tokio::spawn(run_resolve_chain(loader, navigator));
        }
    }

    /// Moves to the previous artwork. A no-op at the first artwork.
    pub async fn previous(&mut self) {
        let moved = self.navigator.lock().await.previous().is_some();
        if moved {
            self.display_current().await;
        }
    }

    /// Moves to the next artwork. A no-op at the last artwork.
    pub async fn next(&mut self) {
        let moved = self.navigator.lock().await.next().is_some();
        if moved {
            self.display_current().await;
        }
    }

    /// Reports that the displayed image became visible in the viewport.
    ///
    /// Fires the pending one-shot upgrade, if any: the surface swaps the
    /// thumbnail for the full-resolution image exactly once per display.
    pub fn notify_visible(&mut self) {
        if let Some(upgrade) = &self.upgrade {
            if let Some(url) = upgrade.on_visible() {
                self.surface.upgrade_image(url);
            }
        }
    }

    /// Displays the artwork at the current position and refreshes the
    /// controls. Empty collections show the empty state instead.
    async fn display_current(&mut self) {
        // A new display tears down the previous one-shot subscription
        if let Some(upgrade) = self.upgrade.take() {
            upgrade.cancel();
        }

        let mut navigator = self.navigator.lock().await;
        if navigator.is_empty() {
            self.surface.show_empty();
            self.surface.update_controls(navigator.navigation_info());
            return;
        }

        // Lazy: navigation may be ahead of the background chain
        let artwork = navigator
            .resolve_current(self.loader.image_base())
            .cloned();
        let info = navigator.navigation_info();
        drop(navigator);

        let Some(artwork) = artwork else {
            self.surface.show_empty();
            self.surface.update_controls(info);
            return;
        };

        match self.loader.strategy() {
            LoadStrategy::Eager => {
                self.surface.show_artwork(&artwork, &artwork.image_url);
            }
            LoadStrategy::Lazy => {
                let initial = artwork.initial_image_url().to_string();
                if initial != artwork.image_url {
                    self.upgrade = Some(VisibilityUpgrade::new(artwork.image_url.clone()));
                }
                self.surface.show_artwork(&artwork, &initial);
            }
        }
        self.surface.update_controls(info);
    }
}

/// Resolves unresolved entries one at a time, front to back.
///
/// This is the lazy strategy's sequential chain: at most one image fetch is
/// in flight at any moment. A failed warm-up is logged by the loader and the
/// entry stays in place.
pub async fn run_resolve_chain(loader: CollectionLoader, navigator: SharedNavigator) {
    loop {
        let artwork = {
            let mut nav = navigator.lock().await;
            let Some(index) = nav.collection().first_unresolved() else {
                break;
            };
            let Some(artwork) = nav.collection_mut().resolve(index, loader.image_base()) else {
                // No record to resolve from; nothing further can progress
                break;
            };
            debug!(index, title = %artwork.title, "resolved artwork");
            artwork.clone()
        };

        loader.warm_image(&artwork).await;
    }
    debug!("resolution chain complete");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::NavigationInfo;
    use mockito::{Matcher, Server, ServerGuard};

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Artwork { title: String, image_url: String },
        Upgrade(String),
        Controls(NavigationInfo),
        Loading(bool),
        Error(String),
        Empty,
    }

    #[derive(Debug, Default)]
    struct RecordingSurface {
        events: Vec<Event>,
    }

    impl RecordingSurface {
        fn artworks(&self) -> Vec<&Event> {
            self.events
                .iter()
                .filter(|e| matches!(e, Event::Artwork { .. }))
                .collect()
        }

        fn last_controls(&self) -> Option<NavigationInfo> {
            self.events.iter().rev().find_map(|e| match e {
                Event::Controls(info) => Some(*info),
                _ => None,
            })
        }
    }

    impl DisplaySurface for RecordingSurface {
        fn show_artwork(&mut self, artwork: &crate::artwork::DisplayArtwork, image_url: &str) {
            self.events.push(Event::Artwork {
                title: artwork.title.clone(),
                image_url: image_url.to_string(),
            });
        }

        fn upgrade_image(&mut self, image_url: &str) {
            self.events.push(Event::Upgrade(image_url.to_string()));
        }

        fn update_controls(&mut self, info: NavigationInfo) {
            self.events.push(Event::Controls(info));
        }

        fn set_loading(&mut self, visible: bool) {
            self.events.push(Event::Loading(visible));
        }

        fn show_error(&mut self, message: &str) {
            self.events.push(Event::Error(message.to_string()));
        }

        fn show_empty(&mut self) {
            self.events.push(Event::Empty);
        }
    }

    fn test_config(server: &ServerGuard, strategy: LoadStrategy) -> Config {
        Config {
            api_base: server.url(),
            image_base: server.url(),
            page: 1,
            limit: 100,
            strategy,
        }
    }

    fn image_path(image_id: &str) -> String {
        format!("/iiif/2/{image_id}/full/2000,/0/default.jpg")
    }

    async fn mock_metadata(server: &mut ServerGuard, body: serde_json::Value) -> mockito::Mock {
        server
            .mock("GET", "/artworks")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(body.to_string())
            .create_async()
            .await
    }

    async fn mock_image(server: &mut ServerGuard, image_id: &str, status: usize) -> mockito::Mock {
        server
            .mock("GET", image_path(image_id).as_str())
            .with_status(status)
            .create_async()
            .await
    }

    fn three_artworks() -> serde_json::Value {
        serde_json::json!({ "data": [
            { "title": "First", "image_id": "a" },
            { "title": "Second", "artist_title": "Somebody", "image_id": "b" },
            { "title": "Third", "image_id": "c" },
        ]})
    }

    #[tokio::test]
    async fn startup_displays_first_artwork_with_defaults_applied() {
        let mut server = Server::new_async().await;
        let _meta = mock_metadata(&mut server, three_artworks()).await;
        let _a = mock_image(&mut server, "a", 200).await;
        let _b = mock_image(&mut server, "b", 200).await;
        let _c = mock_image(&mut server, "c", 200).await;

        let mut app = GalleryApp::new(
            test_config(&server, LoadStrategy::Eager),
            RecordingSurface::default(),
        )
        .expect("app");
        app.start().await;

        let surface = app.surface();
        assert!(surface.events.contains(&Event::Loading(true)));
        assert!(surface.events.contains(&Event::Loading(false)));

        let artworks = surface.artworks();
        assert_eq!(artworks.len(), 1);
        assert!(
            matches!(artworks[0], Event::Artwork { title, .. } if title.as_str() == "First"),
            "first artwork should be displayed"
        );

        let info = surface.last_controls().expect("controls updated");
        assert!(!info.previous_enabled);
        assert!(info.next_enabled);
        assert_eq!(info.current_index, 0);
        assert_eq!(info.total_count, 3);
    }

    #[tokio::test]
    async fn metadata_failure_shows_error_and_displays_nothing() {
        let mut server = Server::new_async().await;
        let _meta = server
            .mock("GET", "/artworks")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let mut app = GalleryApp::new(
            test_config(&server, LoadStrategy::Eager),
            RecordingSurface::default(),
        )
        .expect("app");
        app.start().await;

        let surface = app.surface();
        assert!(surface.artworks().is_empty());
        assert!(surface
            .events
            .iter()
            .any(|e| matches!(e, Event::Error(msg) if msg.contains("500"))));
    }

    #[tokio::test]
    async fn fully_filtered_collection_shows_empty_state() {
        let mut server = Server::new_async().await;
        let body = serde_json::json!({ "data": [
            { "title": "Broken", "image_id": "a" },
        ]});
        let _meta = mock_metadata(&mut server, body).await;
        let _a = mock_image(&mut server, "a", 404).await;

        let mut app = GalleryApp::new(
            test_config(&server, LoadStrategy::Eager),
            RecordingSurface::default(),
        )
        .expect("app");
        app.start().await;

        let surface = app.surface();
        assert!(surface.artworks().is_empty());
        assert!(surface.events.contains(&Event::Empty));

        let info = surface.last_controls().expect("controls updated");
        assert!(!info.previous_enabled);
        assert!(!info.next_enabled);
        assert_eq!(info.total_count, 0);
    }

    #[tokio::test]
    async fn navigation_walks_the_collection_and_respects_bounds() {
        let mut server = Server::new_async().await;
        let _meta = mock_metadata(&mut server, three_artworks()).await;
        let _a = mock_image(&mut server, "a", 200).await;
        let _b = mock_image(&mut server, "b", 200).await;
        let _c = mock_image(&mut server, "c", 200).await;

        let mut app = GalleryApp::new(
            test_config(&server, LoadStrategy::Eager),
            RecordingSurface::default(),
        )
        .expect("app");
        app.start().await;

        app.previous().await; // no-op at the first artwork
        app.next().await;
        app.next().await;
        app.next().await; // no-op at the last artwork
        app.previous().await;

        let titles: Vec<_> = app
            .surface()
            .events
            .iter()
            .filter_map(|e| match e {
                Event::Artwork { title, .. } => Some(title.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(titles, ["First", "Second", "Third", "Second"]);

        let info = app.surface().last_controls().expect("controls updated");
        assert_eq!(info.current_index, 1);
        assert!(info.previous_enabled);
        assert!(info.next_enabled);
    }

    #[tokio::test]
    async fn lazy_start_shows_thumbnail_then_upgrades_once_on_visibility() {
        let mut server = Server::new_async().await;
        let thumb_url = format!("{}/thumb/a.gif", server.url());
        let body = serde_json::json!({ "data": [
            {
                "title": "Lazy One",
                "image_id": "a",
                "thumbnail": { "lpiq": thumb_url, "alt_text": "a painting" }
            },
        ]});
        let _meta = mock_metadata(&mut server, body).await;
        let _thumb = server
            .mock("GET", "/thumb/a.gif")
            .with_status(200)
            .create_async()
            .await;
        let _full = mock_image(&mut server, "a", 200).await;

        let mut app = GalleryApp::new(
            test_config(&server, LoadStrategy::Lazy),
            RecordingSurface::default(),
        )
        .expect("app");
        app.start().await;

        let artworks = app.surface().artworks();
        assert_eq!(artworks.len(), 1);
        assert!(
            matches!(artworks[0], Event::Artwork { image_url, .. } if image_url.as_str() == thumb_url),
            "initial display should use the thumbnail"
        );

        app.notify_visible();
        app.notify_visible(); // one-shot: second visibility event is ignored

        let upgrades: Vec<_> = app
            .surface()
            .events
            .iter()
            .filter(|e| matches!(e, Event::Upgrade(_)))
            .collect();
        assert_eq!(upgrades.len(), 1);
        assert!(
            matches!(upgrades[0], Event::Upgrade(url) if url.contains("/iiif/2/a/")),
            "upgrade should switch to the full-resolution url"
        );
    }

    #[tokio::test]
    async fn lazy_navigation_resolves_target_on_demand() {
        let mut server = Server::new_async().await;
        let _meta = mock_metadata(&mut server, three_artworks()).await;
        let _a = mock_image(&mut server, "a", 200).await;
        let _b = mock_image(&mut server, "b", 200).await;
        let _c = mock_image(&mut server, "c", 200).await;

        let mut app = GalleryApp::new(
            test_config(&server, LoadStrategy::Lazy),
            RecordingSurface::default(),
        )
        .expect("app");
        app.start().await;

        // Jump ahead of whatever the background chain has reached
        app.next().await;
        app.next().await;

        let titles: Vec<_> = app
            .surface()
            .events
            .iter()
            .filter_map(|e| match e {
                Event::Artwork { title, .. } => Some(title.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn resolve_chain_resolves_every_entry_sequentially() {
        let mut server = Server::new_async().await;
        let _meta = mock_metadata(&mut server, three_artworks()).await;
        let _a = mock_image(&mut server, "a", 200).await;
        // Entry "b" fails to warm; it must stay in the collection anyway
        let _b = mock_image(&mut server, "b", 404).await;
        let _c = mock_image(&mut server, "c", 200).await;

        let config = test_config(&server, LoadStrategy::Lazy);
        let loader = CollectionLoader::new(config).expect("loader");
        let collection = loader.load().await.expect("load");
        let navigator = Arc::new(Mutex::new(GalleryNavigator::with_collection(collection)));

        run_resolve_chain(loader, Arc::clone(&navigator)).await;

        let nav = navigator.lock().await;
        assert_eq!(nav.collection().first_unresolved(), None);
        assert_eq!(nav.len(), 3);
        assert_eq!(nav.collection().get(1).unwrap().title, "Second");
    }
}
