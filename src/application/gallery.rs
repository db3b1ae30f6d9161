// SPDX-License-Identifier: MPL-2.0
//! Gallery controller: the full entry list and the subset currently visible.
//!
//! Entries are fixed at construction. Only the visible subset changes, and it
//! is always recomputed from scratch by the last applied query, so category
//! filtering and searching never compose.

use crate::domain::gallery::{
    CategoryFilter, EntryId, GalleryItem, ImageEntry, SearchTerm, VisibilityQuery,
};

/// Owns the declared entries and derives the visible subset from the active
/// [`VisibilityQuery`].
#[derive(Debug, Clone)]
pub struct GalleryController<E = ImageEntry> {
    entries: Vec<E>,
    /// Declaration positions of the visible entries, in declaration order.
    visible: Vec<usize>,
    /// Per-entry visibility flag, indexed by declaration position.
    shown: Vec<bool>,
    /// Category whose filter control is highlighted. Searching leaves it as is.
    active_category: CategoryFilter,
    search: SearchTerm,
}

impl<E: GalleryItem> GalleryController<E> {
    /// Creates a controller showing every entry.
    #[must_use]
    pub fn new(entries: Vec<E>) -> Self {
        let len = entries.len();
        Self {
            entries,
            visible: (0..len).collect(),
            shown: vec![true; len],
            active_category: CategoryFilter::All,
            search: SearchTerm::default(),
        }
    }

    /// Shows the entries tagged with `category`, or every entry for `"all"`.
    ///
    /// Clears the search term.
    pub fn set_category_filter(&mut self, category: &str) {
        let filter = CategoryFilter::from_value(category);
        self.active_category = filter.clone();
        self.search = SearchTerm::default();
        self.apply(VisibilityQuery::Category(filter));
        log::debug!(
            "category filter '{}' -> {} of {} visible",
            category,
            self.visible.len(),
            self.entries.len()
        );
    }

    /// Shows the entries whose title or alt text contains `term`, ignoring
    /// case. The empty term shows every entry.
    pub fn set_search_term(&mut self, term: &str) {
        let search = SearchTerm::new(term);
        self.search = search.clone();
        self.apply(VisibilityQuery::Search(search));
        log::debug!(
            "search '{}' -> {} of {} visible",
            term,
            self.visible.len(),
            self.entries.len()
        );
    }

    fn apply(&mut self, query: VisibilityQuery) {
        self.visible.clear();
        for (position, entry) in self.entries.iter().enumerate() {
            let matches = query.matches(entry);
            self.shown[position] = matches;
            if matches {
                self.visible.push(position);
            }
        }
    }

    /// All declared entries, visible or not.
    #[must_use]
    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    /// Total number of declared entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries in the visible subset.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Returns whether the entry is currently shown.
    #[must_use]
    pub fn is_visible(&self, id: EntryId) -> bool {
        self.shown.get(id.value()).copied().unwrap_or(false)
    }

    /// Position of the entry within the visible subset.
    #[must_use]
    pub fn visible_position(&self, id: EntryId) -> Option<usize> {
        self.visible.iter().position(|&p| p == id.value())
    }

    /// Entry at `position` within the visible subset.
    #[must_use]
    pub fn visible_entry(&self, position: usize) -> Option<(EntryId, &E)> {
        let declared = *self.visible.get(position)?;
        self.entries
            .get(declared)
            .map(|entry| (EntryId::new(declared), entry))
    }

    #[must_use]
    pub fn active_category(&self) -> &CategoryFilter {
        &self.active_category
    }

    #[must_use]
    pub fn search_term(&self) -> &SearchTerm {
        &self.search
    }
}

impl<E: GalleryItem> Default for GalleryController<E> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(position: usize, title: &str, alt: &str, category: &str) -> ImageEntry {
        ImageEntry::new(EntryId::new(position), format!("{position}.jpg"))
            .with_title(title)
            .with_alt_text(alt)
            .with_category(category)
    }

    fn sample() -> GalleryController {
        GalleryController::new(vec![
            entry(0, "Mountain Lake", "Calm water", "nature"),
            entry(1, "Night Bridge", "Lights over the river", "city"),
            entry(2, "Forest Path", "Trail under pines", "nature"),
            entry(3, "Old Town", "Cobblestone street", "architecture"),
        ])
    }

    fn ids(controller: &GalleryController) -> Vec<usize> {
        (0..controller.len())
            .filter(|&p| controller.is_visible(EntryId::new(p)))
            .collect()
    }

    #[test]
    fn new_controller_shows_everything() {
        let controller = sample();
        assert_eq!(controller.visible_len(), 4);
        assert_eq!(ids(&controller), vec![0, 1, 2, 3]);
        assert!(controller.is_visible(EntryId::new(3)));
    }

    #[test]
    fn category_filter_keeps_only_matching_entries() {
        let mut controller = sample();
        controller.set_category_filter("nature");

        assert_eq!(ids(&controller), vec![0, 2]);
        assert!(!controller.is_visible(EntryId::new(1)));
        assert!(controller.is_visible(EntryId::new(2)));
    }

    #[test]
    fn all_category_restores_every_entry() {
        let mut controller = sample();
        controller.set_category_filter("city");
        controller.set_category_filter("all");

        assert_eq!(ids(&controller), vec![0, 1, 2, 3]);
        assert_eq!(controller.active_category(), &CategoryFilter::All);
    }

    #[test]
    fn unknown_category_hides_everything() {
        let mut controller = sample();
        controller.set_category_filter("animals");

        assert_eq!(controller.visible_len(), 0);
        assert!((0..4).all(|p| !controller.is_visible(EntryId::new(p))));
    }

    #[test]
    fn search_matches_title_or_alt_case_insensitively() {
        let mut controller = sample();
        controller.set_search_term("RIVER");
        assert_eq!(ids(&controller), vec![1]);

        controller.set_search_term("o");
        assert_eq!(ids(&controller), vec![0, 1, 2, 3]);

        controller.set_search_term("pines");
        assert_eq!(ids(&controller), vec![2]);
    }

    #[test]
    fn empty_search_restores_full_set() {
        let mut controller = sample();
        controller.set_search_term("bridge");
        controller.set_search_term("");
        assert_eq!(controller.visible_len(), 4);
    }

    #[test]
    fn search_ignores_active_category() {
        let mut controller = sample();
        controller.set_category_filter("nature");
        controller.set_search_term("bridge");

        assert_eq!(ids(&controller), vec![1]);
        // The highlighted category control is left untouched by searching.
        assert_eq!(controller.active_category().value(), "nature");
    }

    #[test]
    fn category_filter_clears_search_term() {
        let mut controller = sample();
        controller.set_search_term("lake");
        controller.set_category_filter("city");

        assert!(controller.search_term().is_empty());
        assert_eq!(ids(&controller), vec![1]);
    }

    #[test]
    fn visible_position_maps_ids_into_subset() {
        let mut controller = sample();
        controller.set_category_filter("nature");

        assert_eq!(controller.visible_position(EntryId::new(2)), Some(1));
        assert_eq!(controller.visible_position(EntryId::new(1)), None);
        let (id, entry) = controller.visible_entry(1).expect("entry");
        assert_eq!(id, EntryId::new(2));
        assert_eq!(entry.title(), Some("Forest Path"));
        assert!(controller.visible_entry(2).is_none());
    }

    #[test]
    fn entries_without_attributes_only_show_unfiltered() {
        let mut controller = GalleryController::new(vec![
            ImageEntry::new(EntryId::new(0), "bare.png"),
            entry(1, "Lake", "Water", "nature"),
        ]);

        controller.set_category_filter("nature");
        assert_eq!(ids(&controller), vec![1]);

        controller.set_search_term("a");
        assert_eq!(ids(&controller), vec![1]);

        controller.set_search_term("");
        assert_eq!(ids(&controller), vec![0, 1]);
    }
}
