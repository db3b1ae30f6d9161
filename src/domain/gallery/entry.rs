// SPDX-License-Identifier: MPL-2.0
//! Gallery entry types and the accessor trait the controller reads them through.
//!
//! The controller never touches a rendering surface: it only asks an item for
//! its title, alternate text, category and source. Any type implementing
//! [`GalleryItem`] can back a gallery, which is how tests drive the controller
//! without a window.

use std::path::{Path, PathBuf};

/// Stable identifier of an entry: its position in the declared order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(usize);

impl EntryId {
    /// Creates an identifier for the entry declared at `position`.
    #[must_use]
    pub fn new(position: usize) -> Self {
        Self(position)
    }

    /// Returns the declaration position.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

/// Read-only view over the attributes a gallery needs from an entry.
///
/// Missing attributes are reported as `None` and never match a category
/// filter or a search term.
pub trait GalleryItem {
    /// Display title shown on the card and in the lightbox.
    fn title(&self) -> Option<&str>;

    /// Alternate (accessible) text describing the image.
    fn alt_text(&self) -> Option<&str>;

    /// Category tag used by the filter bar.
    fn category(&self) -> Option<&str>;

    /// Location of the image data.
    fn source(&self) -> &Path;
}

/// One declared image and its metadata. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    id: EntryId,
    title: Option<String>,
    alt_text: Option<String>,
    category: Option<String>,
    source: PathBuf,
}

impl ImageEntry {
    /// Creates an entry with only a source; attributes are added with the
    /// `with_*` builders.
    #[must_use]
    pub fn new(id: EntryId, source: impl Into<PathBuf>) -> Self {
        Self {
            id,
            title: None,
            alt_text: None,
            category: None,
            source: source.into(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> EntryId {
        self.id
    }
}

impl GalleryItem for ImageEntry {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn alt_text(&self) -> Option<&str> {
        self.alt_text.as_deref()
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn source(&self) -> &Path {
        &self.source
    }
}
