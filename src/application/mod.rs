// SPDX-License-Identifier: MPL-2.0
//! Application layer - gallery use cases.
//!
//! - [`gallery`]: the controller deciding which entries are visible
//! - [`lightbox`]: the Closed/Open viewer state machine
//! - [`dispatch`]: event kind to handler routing over both
//!
//! # Dependency Rule
//!
//! This layer depends on the domain layer only. It knows nothing about Iced,
//! files or dialogs; the shell turns its [`dispatch::Effect`]s into work.
//!
//! # Example
//!
//! ```
//! use iced_gallery::application::dispatch::{Gallery, GalleryEvent};
//! use iced_gallery::domain::gallery::{EntryId, ImageEntry};
//!
//! let mut gallery = Gallery::new(vec![
//!     ImageEntry::new(EntryId::new(0), "lake.jpg").with_category("nature"),
//!     ImageEntry::new(EntryId::new(1), "bridge.jpg").with_category("city"),
//! ]);
//!
//! gallery.dispatch(GalleryEvent::FilterSelected("city".into()));
//! gallery.dispatch(GalleryEvent::CardActivated(0));
//! assert_eq!(gallery.focused().map(|(id, _)| id), Some(EntryId::new(1)));
//! ```

pub mod dispatch;
pub mod gallery;
pub mod lightbox;

pub use dispatch::{DownloadRequest, Effect, Gallery, GalleryEvent, GalleryKey};
pub use gallery::GalleryController;
pub use lightbox::{Lightbox, LightboxInfo, LightboxState};
