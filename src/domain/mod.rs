// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery types with ZERO external dependencies.
//!
//! This module contains pure domain types and the matching rules over them.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability without a window or a filesystem.
//!
//! # Modules
//!
//! - [`gallery`]: Entries ([`ImageEntry`](gallery::ImageEntry),
//!   [`GalleryItem`](gallery::GalleryItem)) and visibility predicates
//!   ([`CategoryFilter`](gallery::CategoryFilter), [`SearchTerm`](gallery::SearchTerm))

pub mod gallery;
