// SPDX-License-Identifier: MPL-2.0
//! Predicates deciding which entries belong to the visible subset.
//!
//! # Available Filters
//!
//! - [`CategoryFilter`]: exact match on the category tag, or everything
//! - [`SearchTerm`]: case-insensitive substring match on title or alt text
//! - [`VisibilityQuery`]: whichever of the two was applied last
//!
//! Category and search never combine. Applying one replaces the other.

use super::entry::GalleryItem;

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

// =============================================================================
// Category Filter
// =============================================================================

/// Filter by category tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every entry matches.
    #[default]
    All,
    /// Only entries whose category equals this tag match.
    Only(String),
}

impl CategoryFilter {
    /// Builds a filter from a filter-control value; `"all"` disables filtering.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// Returns the filter-control value this filter was built from.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category,
        }
    }

    /// Returns `true` if the item passes this filter.
    ///
    /// An item without a category only matches [`CategoryFilter::All`].
    #[must_use]
    pub fn matches<E: GalleryItem + ?Sized>(&self, item: &E) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => item.category() == Some(category.as_str()),
        }
    }
}

// =============================================================================
// Search Term
// =============================================================================

/// Case-insensitive search term over title and alternate text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchTerm {
    raw: String,
    folded: String,
}

impl SearchTerm {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let folded = raw.to_lowercase();
        Self { raw, folded }
    }

    /// The term exactly as typed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns `true` if the title or alt text contains the term.
    ///
    /// The empty term matches every item, including items with neither
    /// attribute.
    #[must_use]
    pub fn matches<E: GalleryItem + ?Sized>(&self, item: &E) -> bool {
        if self.folded.is_empty() {
            return true;
        }
        let contains = |text: Option<&str>| {
            text.is_some_and(|text| text.to_lowercase().contains(&self.folded))
        };
        contains(item.alt_text()) || contains(item.title())
    }
}

// =============================================================================
// Visibility Query
// =============================================================================

/// The predicate currently deciding the visible subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisibilityQuery {
    Category(CategoryFilter),
    Search(SearchTerm),
}

impl Default for VisibilityQuery {
    fn default() -> Self {
        Self::Category(CategoryFilter::All)
    }
}

impl VisibilityQuery {
    #[must_use]
    pub fn matches<E: GalleryItem + ?Sized>(&self, item: &E) -> bool {
        match self {
            Self::Category(filter) => filter.matches(item),
            Self::Search(term) => term.matches(item),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::entry::{EntryId, ImageEntry};

    fn entry(title: Option<&str>, alt: Option<&str>, category: Option<&str>) -> ImageEntry {
        let mut entry = ImageEntry::new(EntryId::new(0), "img.jpg");
        if let Some(title) = title {
            entry = entry.with_title(title);
        }
        if let Some(alt) = alt {
            entry = entry.with_alt_text(alt);
        }
        if let Some(category) = category {
            entry = entry.with_category(category);
        }
        entry
    }

    // -------------------------------------------------------------------------
    // CategoryFilter tests
    // -------------------------------------------------------------------------

    #[test]
    fn all_value_disables_filtering() {
        let filter = CategoryFilter::from_value("all");
        assert_eq!(filter, CategoryFilter::All);
        assert!(filter.matches(&entry(None, None, None)));
    }

    #[test]
    fn category_filter_matches_exact_tag_only() {
        let filter = CategoryFilter::from_value("nature");
        assert!(filter.matches(&entry(None, None, Some("nature"))));
        assert!(!filter.matches(&entry(None, None, Some("Nature"))));
        assert!(!filter.matches(&entry(None, None, Some("city"))));
    }

    #[test]
    fn missing_category_never_matches_a_specific_filter() {
        let filter = CategoryFilter::from_value("nature");
        assert!(!filter.matches(&entry(Some("nature"), None, None)));
    }

    #[test]
    fn category_value_round_trips() {
        assert_eq!(CategoryFilter::All.value(), "all");
        assert_eq!(CategoryFilter::from_value("city").value(), "city");
    }

    // -------------------------------------------------------------------------
    // SearchTerm tests
    // -------------------------------------------------------------------------

    #[test]
    fn search_is_case_insensitive_on_title() {
        let term = SearchTerm::new("LAKE");
        assert!(term.matches(&entry(Some("Mountain lake"), None, None)));
    }

    #[test]
    fn search_matches_alt_text() {
        let term = SearchTerm::new("between");
        assert!(term.matches(&entry(Some("Lake"), Some("Water between peaks"), None)));
    }

    #[test]
    fn search_without_title_or_alt_does_not_match() {
        let term = SearchTerm::new("lake");
        assert!(!term.matches(&entry(None, None, Some("lake"))));
    }

    #[test]
    fn empty_search_matches_everything() {
        let term = SearchTerm::new("");
        assert!(term.is_empty());
        assert!(term.matches(&entry(None, None, None)));
    }

    #[test]
    fn search_keeps_raw_text() {
        let term = SearchTerm::new("Sun");
        assert_eq!(term.as_str(), "Sun");
    }

    // -------------------------------------------------------------------------
    // VisibilityQuery tests
    // -------------------------------------------------------------------------

    #[test]
    fn default_query_shows_everything() {
        let query = VisibilityQuery::default();
        assert!(query.matches(&entry(None, None, None)));
    }

    #[test]
    fn query_delegates_to_active_predicate() {
        let item = entry(Some("Bridge at night"), None, Some("city"));
        assert!(VisibilityQuery::Search(SearchTerm::new("bridge")).matches(&item));
        assert!(!VisibilityQuery::Category(CategoryFilter::from_value("nature")).matches(&item));
    }
}
