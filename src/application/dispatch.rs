// SPDX-License-Identifier: MPL-2.0
//! Event dispatch for the gallery.
//!
//! [`Gallery`] owns the controller and the lightbox and is the only place
//! where both change together. Every user interaction is a [`GalleryEvent`];
//! [`Gallery::dispatch`] routes it to its handler and returns an [`Effect`]
//! for the shell to perform. Handlers run to completion and never block.

use super::gallery::GalleryController;
use super::lightbox::{suggested_file_name, Lightbox, LightboxInfo};
use crate::domain::gallery::{EntryId, GalleryItem, ImageEntry};
use std::path::PathBuf;

/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// Interaction events from the filter bar, the grid and the lightbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryEvent {
    /// A category filter control was pressed.
    FilterSelected(String),
    /// The search input changed.
    SearchChanged(String),
    /// A grid card was activated; the payload is its visible position.
    CardActivated(usize),
    /// Close control pressed.
    CloseRequested,
    /// Click on the backdrop around the image.
    BackdropPressed,
    PreviousRequested,
    NextRequested,
    DownloadRequested,
    KeyPressed(GalleryKey),
}

/// Request to save the focused image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub source: PathBuf,
    /// 1-based position within the visible subset at request time.
    pub position: usize,
}

impl DownloadRequest {
    #[must_use]
    pub fn file_name(&self) -> String {
        suggested_file_name(self.position)
    }
}

/// Side effects the shell performs after a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Download(DownloadRequest),
}

/// Gallery controller and lightbox, kept consistent with each other.
#[derive(Debug, Clone)]
pub struct Gallery<E = ImageEntry> {
    controller: GalleryController<E>,
    lightbox: Lightbox,
}

impl<E: GalleryItem> Gallery<E> {
    #[must_use]
    pub fn new(entries: Vec<E>) -> Self {
        Self {
            controller: GalleryController::new(entries),
            lightbox: Lightbox::new(),
        }
    }

    /// Routes one event to its handler.
    pub fn dispatch(&mut self, event: GalleryEvent) -> Effect {
        match event {
            GalleryEvent::FilterSelected(category) => self.set_category_filter(&category),
            GalleryEvent::SearchChanged(term) => self.set_search_term(&term),
            GalleryEvent::CardActivated(position) => {
                self.open(position);
            }
            GalleryEvent::CloseRequested | GalleryEvent::BackdropPressed => self.close(),
            GalleryEvent::PreviousRequested => self.previous(),
            GalleryEvent::NextRequested => self.next(),
            GalleryEvent::DownloadRequested => {
                return self
                    .download()
                    .map_or(Effect::None, Effect::Download);
            }
            GalleryEvent::KeyPressed(key) => self.handle_key(key),
        }
        Effect::None
    }

    // -------------------------------------------------------------------------
    // Gallery controller operations
    // -------------------------------------------------------------------------

    pub fn set_category_filter(&mut self, category: &str) {
        let focused = self.focused_id();
        self.controller.set_category_filter(category);
        self.reconcile(focused);
    }

    pub fn set_search_term(&mut self, term: &str) {
        let focused = self.focused_id();
        self.controller.set_search_term(term);
        self.reconcile(focused);
    }

    fn reconcile(&mut self, focused: Option<EntryId>) {
        let relocated = focused.and_then(|id| self.controller.visible_position(id));
        let was_open = self.lightbox.is_open();
        self.lightbox
            .reconcile(relocated, self.controller.visible_len());
        if was_open && !self.lightbox.is_open() {
            log::debug!("lightbox closed: visible subset is empty");
        }
    }

    // -------------------------------------------------------------------------
    // Lightbox operations
    // -------------------------------------------------------------------------

    /// Opens the lightbox on a visible position. Returns `false` if rejected.
    pub fn open(&mut self, index: usize) -> bool {
        let opened = self.lightbox.open(index, self.controller.visible_len());
        if opened {
            log::debug!("lightbox opened at {index}");
        }
        opened
    }

    pub fn close(&mut self) {
        if self.lightbox.close() {
            log::debug!("lightbox closed");
        }
    }

    pub fn next(&mut self) {
        self.lightbox.next(self.controller.visible_len());
    }

    pub fn previous(&mut self) {
        self.lightbox.previous(self.controller.visible_len());
    }

    /// Builds a download request for the focused image. `None` while closed.
    #[must_use]
    pub fn download(&self) -> Option<DownloadRequest> {
        let index = self.lightbox.index()?;
        let (_, entry) = self.controller.visible_entry(index)?;
        Some(DownloadRequest {
            source: entry.source().to_path_buf(),
            position: index + 1,
        })
    }

    fn handle_key(&mut self, key: GalleryKey) {
        if !self.lightbox.is_open() {
            return;
        }
        match key {
            GalleryKey::Escape => self.close(),
            GalleryKey::ArrowLeft => self.previous(),
            GalleryKey::ArrowRight => self.next(),
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn controller(&self) -> &GalleryController<E> {
        &self.controller
    }

    #[must_use]
    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.lightbox.is_open()
    }

    /// Entry shown in the lightbox.
    #[must_use]
    pub fn focused(&self) -> Option<(EntryId, &E)> {
        self.controller.visible_entry(self.lightbox.index()?)
    }

    fn focused_id(&self) -> Option<EntryId> {
        self.focused().map(|(id, _)| id)
    }

    #[must_use]
    pub fn lightbox_info(&self) -> Option<LightboxInfo> {
        self.lightbox.info(self.controller.visible_len())
    }
}

impl<E: GalleryItem> Default for Gallery<E> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
