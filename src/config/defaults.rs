// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Endpoint Defaults
// ==========================================================================

/// Base URL of the artwork metadata API.
pub const DEFAULT_API_BASE: &str = "https://api.artic.edu/api/v1";

/// Base URL for full-resolution IIIF image requests.
pub const DEFAULT_IMAGE_BASE: &str = "https://www.artic.edu";

// ==========================================================================
// Page Defaults
// ==========================================================================

/// Metadata page fetched at startup. Only a single page is ever consumed.
pub const DEFAULT_PAGE: u32 = 1;

/// Number of artwork records requested per page.
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

/// Minimum allowed page limit.
pub const MIN_PAGE_LIMIT: u32 = 1;

/// Maximum page limit accepted by the upstream API.
pub const MAX_PAGE_LIMIT: u32 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_PAGE >= 1);
    assert!(MIN_PAGE_LIMIT >= 1);
    assert!(MAX_PAGE_LIMIT >= MIN_PAGE_LIMIT);
    assert!(DEFAULT_PAGE_LIMIT >= MIN_PAGE_LIMIT);
    assert!(DEFAULT_PAGE_LIMIT <= MAX_PAGE_LIMIT);
};
