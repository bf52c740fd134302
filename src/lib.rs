// SPDX-License-Identifier: MPL-2.0
//! `gallery_lens` is a small artwork gallery viewer backed by the Art
//! Institute of Chicago public API.
//!
//! It fetches one page of artwork metadata, filters for records with a
//! usable image, optionally validates every image with a network probe, and
//! pages through the resulting collection on a pluggable display surface.

pub mod app;
pub mod artwork;
pub mod collection;
pub mod collection_loader;
pub mod config;
pub mod error;
pub mod navigator;
pub mod viewer;
