// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a filterable, searchable image gallery built with the
//! Iced GUI framework.
//!
//! Images come from a `gallery.toml` manifest or from a scanned directory.
//! The grid can be narrowed by category and by a title search, and any
//! visible image opens in a lightbox with keyboard navigation and download.
//!
//! # Layers
//!
//! - [`domain`] - Gallery entries and the visibility rules
//! - [`application`] - Gallery controller, lightbox state machine, dispatch
//! - [`catalog`] and [`download`] - Filesystem access
//! - [`app`] and [`ui`] - The Iced shell

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod catalog;
pub mod domain;
pub mod download;
pub mod error;
pub mod i18n;
pub mod ui;
