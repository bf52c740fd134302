// SPDX-License-Identifier: MPL-2.0
//! The loaded artwork collection.
//!
//! A collection is built once per session by the loader and holds an ordered
//! sequence of artworks. Under the eager strategy every entry arrives fully
//! resolved and probe-confirmed. Under the lazy strategy the raw records are
//! kept alongside an identically-indexed table of resolved entries, which
//! fills in one entry at a time as resolution progresses. The order never
//! changes after construction and nothing is ever removed.

use crate::artwork::{ArtworkRecord, DisplayArtwork};

#[derive(Debug, Clone, Default)]
pub struct Collection {
    /// Raw records, retained for on-demand resolution. Empty for eager
    /// collections, whose entries are resolved at build time.
    records: Vec<ArtworkRecord>,
    /// Resolved display entries, indexed identically to `records`.
    resolved: Vec<Option<DisplayArtwork>>,
}

impl Collection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a fully-resolved collection from probe-confirmed entries
    /// (eager strategy).
    #[must_use]
    pub fn from_resolved(entries: Vec<DisplayArtwork>) -> Self {
        Self {
            records: Vec::new(),
            resolved: entries.into_iter().map(Some).collect(),
        }
    }

    /// Builds an unresolved collection from eligible records (lazy strategy).
    #[must_use]
    pub fn from_records(records: Vec<ArtworkRecord>) -> Self {
        let resolved = vec![None; records.len()];
        Self { records, resolved }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }

    /// Returns the resolved entry at `index`, if resolution has reached it.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DisplayArtwork> {
        self.resolved.get(index)?.as_ref()
    }

    /// Whether the entry at `index` has been resolved.
    #[must_use]
    pub fn is_resolved(&self, index: usize) -> bool {
        matches!(self.resolved.get(index), Some(Some(_)))
    }

    /// Index of the first entry still awaiting resolution, if any.
    #[must_use]
    pub fn first_unresolved(&self) -> Option<usize> {
        self.resolved.iter().position(Option::is_none)
    }

    /// Resolves the entry at `index` from its retained record.
    ///
    /// Idempotent: an already-resolved entry is returned as-is. Returns
    /// `None` when the index is out of bounds or there is no record to
    /// resolve from (eager collections carry none).
    pub fn resolve(&mut self, index: usize, image_base: &str) -> Option<&DisplayArtwork> {
        if index >= self.resolved.len() {
            return None;
        }
        if self.resolved[index].is_none() {
            let record = self.records.get(index)?;
            self.resolved[index] = DisplayArtwork::from_record(record, image_base);
        }
        self.resolved[index].as_ref()
    }
}
