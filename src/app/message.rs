// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::dispatch::{DownloadRequest, GalleryEvent};
use crate::error::Error;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Interaction with the filter bar, the grid or the lightbox.
    Gallery(GalleryEvent),
    Notification(notifications::NotificationMessage),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
    /// The save dialog closed; `None` when it was dismissed.
    DownloadDestinationChosen {
        request: DownloadRequest,
        destination: Option<PathBuf>,
    },
    /// A download finished writing (or failed).
    DownloadSaved(Result<PathBuf, Error>),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Manifest file or image directory. Defaults to the working directory.
    pub gallery_path: Option<PathBuf>,
}
