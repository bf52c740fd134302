// SPDX-License-Identifier: MPL-2.0
//! Display surface port and the terminal implementation.
//!
//! The core never renders anything itself: it hands a [`DisplayArtwork`] and
//! a [`NavigationInfo`] snapshot to a [`DisplaySurface`] implementation.
//! Surfaces must tolerate defaulted fields, support being invoked repeatedly
//! (each call fully replaces prior content), and expose loading, error, and
//! empty indicators.

use crate::artwork::DisplayArtwork;
use crate::navigator::NavigationInfo;

pub mod upgrade;

pub use upgrade::VisibilityUpgrade;

/// Port for rendering the gallery.
///
/// Implementations receive already-defaulted data and never need to reach
/// back into the collection.
pub trait DisplaySurface {
    /// Displays an artwork, replacing whatever was shown before.
    ///
    /// `image_url` is the source to render now; under the lazy strategy this
    /// starts as the thumbnail and [`DisplaySurface::upgrade_image`] follows
    /// later.
    fn show_artwork(&mut self, artwork: &DisplayArtwork, image_url: &str);

    /// Swaps the displayed image source for the full-resolution URL.
    fn upgrade_image(&mut self, image_url: &str);

    /// Updates the enabled/disabled state of the navigation controls.
    fn update_controls(&mut self, info: NavigationInfo);

    /// Shows or hides the loading indicator.
    fn set_loading(&mut self, visible: bool);

    /// Shows the error indicator with a message. Fatal to the session; no
    /// artwork is displayed afterwards.
    fn show_error(&mut self, message: &str);

    /// Shows the empty-state indicator (collection loaded but has nothing
    /// displayable).
    fn show_empty(&mut self);
}

/// Renders the gallery as plain lines on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalSurface;

impl TerminalSurface {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DisplaySurface for TerminalSurface {
    fn show_artwork(&mut self, artwork: &DisplayArtwork, image_url: &str) {
        println!();
        println!("{}", artwork.title);
        println!("Artist: {}", artwork.artist);
        println!("{}", artwork.alt_text);
        println!("Image: {image_url}");
    }

    fn upgrade_image(&mut self, image_url: &str) {
        println!("Image: {image_url} (full resolution)");
    }

    fn update_controls(&mut self, info: NavigationInfo) {
        let prev = if info.previous_enabled { "prev" } else { "----" };
        let next = if info.next_enabled { "next" } else { "----" };
        let position = if info.total_count == 0 {
            0
        } else {
            info.current_index + 1
        };
        println!("[{prev}] {position}/{} [{next}]", info.total_count);
    }

    fn set_loading(&mut self, visible: bool) {
        if visible {
            println!("Loading artworks...");
        }
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("Error fetching artworks: {message}");
    }

    fn show_empty(&mut self) {
        println!("No artworks available.");
    }
}
