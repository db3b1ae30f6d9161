// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! Entries and the predicates over them, independent of any rendering
//! surface or file format.

pub mod entry;
pub mod filter;

pub use entry::{EntryId, GalleryItem, ImageEntry};
pub use filter::{CategoryFilter, SearchTerm, VisibilityQuery, ALL_CATEGORIES};
