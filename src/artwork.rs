// SPDX-License-Identifier: MPL-2.0
//! Artwork data model: raw API records and the derived display form.
//!
//! The upstream API returns sparse records; only the handful of fields
//! consumed here are deserialized. A record is *eligible* for the gallery
//! when it carries a resolvable image reference, either an `image_id` for
//! the IIIF endpoint or a verbatim thumbnail URL.

use serde::Deserialize;

/// Title shown when the record carries none.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Artist line shown when the record carries none.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Description shown when the record has no alt text.
pub const NO_DESCRIPTION: &str = "No description available";

/// Thumbnail metadata embedded in an artwork record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thumbnail {
    /// Low-quality image placeholder URL, usable verbatim.
    pub lpiq: Option<String>,
    pub alt_text: Option<String>,
}

/// One artwork record as received from the metadata endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtworkRecord {
    pub title: Option<String>,
    pub artist_title: Option<String>,
    pub image_id: Option<String>,
    pub thumbnail: Option<Thumbnail>,
}

/// The metadata page payload: an ordered sequence of artwork records.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtworkPage {
    pub data: Vec<ArtworkRecord>,
}

impl ArtworkRecord {
    /// An eligible record has a resolvable image reference: an `image_id`
    /// or a thumbnail URL. Ineligible records never enter the collection.
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        self.image_id.is_some() || self.thumbnail_url().is_some()
    }

    /// Returns the verbatim thumbnail URL, if the record carries one.
    #[must_use]
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail.as_ref()?.lpiq.as_deref()
    }
}

/// Builds the full-resolution IIIF URL for an image id.
#[must_use]
pub fn full_image_url(image_base: &str, image_id: &str) -> String {
    format!("{image_base}/iiif/2/{image_id}/full/2000,/0/default.jpg")
}

/// An artwork ready for display, with defaulting applied.
///
/// `image_url` is always present: the IIIF URL when the record has an
/// `image_id`, otherwise the thumbnail URL. `thumbnail_url` is kept for the
/// lazy strategy's thumbnail-first rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayArtwork {
    pub title: String,
    pub artist: String,
    pub alt_text: String,
    pub image_url: String,
    pub thumbnail_url: Option<String>,
}

impl DisplayArtwork {
    /// Derives a display artwork from a raw record.
    ///
    /// Returns `None` for ineligible records (no image reference at all).
    #[must_use]
    pub fn from_record(record: &ArtworkRecord, image_base: &str) -> Option<Self> {
        let image_url = match &record.image_id {
            Some(id) => full_image_url(image_base, id),
            None => record.thumbnail_url()?.to_string(),
        };

        let alt_text = record
            .thumbnail
            .as_ref()
            .and_then(|t| t.alt_text.clone())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());

        Some(Self {
            title: record.title.clone().unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            artist: record
                .artist_title
                .clone()
                .unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
            alt_text,
            image_url,
            thumbnail_url: record.thumbnail_url().map(str::to_string),
        })
    }

    /// The URL to render first: the low-resolution thumbnail when one
    /// exists, otherwise the full image.
    #[must_use]
    pub fn initial_image_url(&self) -> &str {
        self.thumbnail_url.as_deref().unwrap_or(&self.image_url)
    }
}
