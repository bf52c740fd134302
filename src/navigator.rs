// SPDX-License-Identifier: MPL-2.0
//! Gallery navigation module for managing the loaded collection and
//! navigation state.
//!
//! The navigator owns the collection and the current index, providing a
//! single source of truth for position and control enablement. Transitions
//! never wrap: at either end the corresponding control is disabled and the
//! transition is a no-op.

use crate::artwork::DisplayArtwork;
use crate::collection::Collection;

/// Navigation state snapshot for the display surface.
///
/// Derived fresh from index and collection length after every load or
/// display event; never cached. The surface uses it to toggle the disabled
/// flag on each button without touching the collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Whether the previous control should accept input.
    pub previous_enabled: bool,
    /// Whether the next control should accept input.
    pub next_enabled: bool,
    /// Current position in the collection (0-indexed).
    pub current_index: usize,
    /// Total number of artworks in the collection.
    pub total_count: usize,
}

/// Manages navigation through the loaded artwork collection.
#[derive(Debug, Clone, Default)]
pub struct GalleryNavigator {
    collection: Collection,
    current_index: usize,
}

impl GalleryNavigator {
    /// Creates a navigator over an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a navigator positioned at the first artwork of `collection`.
    #[must_use]
    pub fn with_collection(collection: Collection) -> Self {
        Self {
            collection,
            current_index: 0,
        }
    }

    /// Replaces the collection and resets the position to the start.
    pub fn set_collection(&mut self, collection: Collection) {
        self.collection = collection;
        self.current_index = 0;
    }

    #[must_use]
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut Collection {
        &mut self.collection
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Current position. Remains 0 for an empty collection, where nothing
    /// is ever displayed.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the artwork at the current position, if the collection has
    /// one and it is resolved.
    #[must_use]
    pub fn current(&self) -> Option<&DisplayArtwork> {
        self.collection.get(self.current_index)
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_index + 1 < self.collection.len()
    }

    /// Moves to the previous artwork and returns the new index.
    ///
    /// A no-op returning `None` when already at the first artwork or the
    /// collection is empty.
    pub fn previous(&mut self) -> Option<usize> {
        if !self.has_previous() {
            return None;
        }
        self.current_index -= 1;
        Some(self.current_index)
    }

    /// Moves to the next artwork and returns the new index.
    ///
    /// A no-op returning `None` when already at the last artwork or the
    /// collection is empty.
    pub fn next(&mut self) -> Option<usize> {
        if !self.has_next() {
            return None;
        }
        self.current_index += 1;
        Some(self.current_index)
    }

    /// Resolves the artwork at the current position from its retained
    /// record (lazy strategy) and returns it.
    pub fn resolve_current(&mut self, image_base: &str) -> Option<&DisplayArtwork> {
        self.collection.resolve(self.current_index, image_base)
    }

    /// Returns a snapshot of the current navigation state for the display
    /// surface. Both controls are disabled for an empty collection.
    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        NavigationInfo {
            previous_enabled: self.has_previous(),
            next_enabled: self.has_next(),
            current_index: self.current_index,
            total_count: self.collection.len(),
        }
    }
}
