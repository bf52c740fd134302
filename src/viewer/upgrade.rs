// SPDX-License-Identifier: MPL-2.0
//! One-shot visibility-triggered image upgrade.
//!
//! Under the lazy strategy a displayed artwork starts on its low-resolution
//! thumbnail. When the rendered image first becomes visible, the source is
//! swapped for the full-resolution URL, exactly once. The trigger disarms
//! itself after firing and can be cancelled on surface teardown, so a late
//! visibility event never fires a stale upgrade.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared disarm handle for a [`VisibilityUpgrade`].
pub type UpgradeToken = Arc<AtomicBool>;

/// A one-shot subscription waiting for the displayed image to become
/// visible.
#[derive(Debug, Clone)]
pub struct VisibilityUpgrade {
    full_url: String,
    armed: UpgradeToken,
}

impl VisibilityUpgrade {
    /// Arms a new upgrade that will deliver `full_url` on first visibility.
    #[must_use]
    pub fn new(full_url: impl Into<String>) -> Self {
        Self {
            full_url: full_url.into(),
            armed: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Reports that the displayed image became visible.
    ///
    /// Returns the full-resolution URL the first time, `None` on every
    /// subsequent call and after [`VisibilityUpgrade::cancel`].
    pub fn on_visible(&self) -> Option<&str> {
        if self.armed.swap(false, Ordering::SeqCst) {
            Some(&self.full_url)
        } else {
            None
        }
    }

    /// Disarms the upgrade without firing it.
    pub fn cancel(&self) {
        self.armed.store(false, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::SeqCst)
    }

    /// Returns a shared handle that teardown code can use to disarm the
    /// upgrade without holding the upgrade itself.
    #[must_use]
    pub fn token(&self) -> UpgradeToken {
        Arc::clone(&self.armed)
    }
}
