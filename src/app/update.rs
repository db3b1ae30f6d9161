// SPDX-License-Identifier: MPL-2.0
//! Message handlers for `App::update`.
//!
//! Gallery events go through [`Gallery::dispatch`]; the only effect it asks
//! for is a download, which is carried out here with a save dialog or a
//! direct write into the download directory.

use super::config::Config;
use super::Message;
use crate::application::dispatch::{DownloadRequest, Effect, Gallery, GalleryEvent};
use crate::download;
use crate::error::Error;
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::path::PathBuf;

/// Error keys a later successful download makes obsolete.
const DOWNLOAD_ERROR_KEYS: &[&str] = &["error-io", "error-image", "notification-download-error"];

/// Mutable state the handlers work on.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut Gallery,
    pub notifications: &'a mut notifications::Manager,
    pub config: &'a Config,
}

pub fn handle_gallery_event(ctx: &mut UpdateContext<'_>, event: GalleryEvent) -> Task<Message> {
    match ctx.gallery.dispatch(event) {
        Effect::None => Task::none(),
        Effect::Download(request) => start_download(ctx, request),
    }
}

fn start_download(ctx: &mut UpdateContext<'_>, request: DownloadRequest) -> Task<Message> {
    let download_config = &ctx.config.download;

    if download_config.ask_destination() {
        let mut dialog = rfd::AsyncFileDialog::new()
            .set_file_name(request.file_name())
            .add_filter("JPEG", &["jpg", "jpeg"]);
        if let Some(dir) = download_config.target_directory() {
            dialog = dialog.set_directory(dir);
        }

        return Task::perform(
            async move {
                dialog
                    .save_file()
                    .await
                    .map(|handle| handle.path().to_path_buf())
            },
            move |destination| Message::DownloadDestinationChosen {
                request,
                destination,
            },
        );
    }

    match download_config.target_directory() {
        Some(directory) => Task::perform(
            async move {
                download::save_to_directory(&request.source, &directory, request.position)
            },
            Message::DownloadSaved,
        ),
        None => {
            log::warn!("no download directory available");
            ctx.notifications
                .push(Notification::error("notification-download-error"));
            Task::none()
        }
    }
}

pub fn handle_destination_chosen(
    request: DownloadRequest,
    destination: Option<PathBuf>,
) -> Task<Message> {
    let Some(destination) = destination else {
        return Task::done(Message::DownloadSaved(Err(Error::DialogCancelled)));
    };

    Task::perform(
        async move { download::save_image(&request.source, &destination).map(|()| destination) },
        Message::DownloadSaved,
    )
}

pub fn handle_download_saved(
    notifications: &mut notifications::Manager,
    result: Result<PathBuf, Error>,
) {
    match result {
        Ok(path) => {
            for key in DOWNLOAD_ERROR_KEYS {
                notifications.clear_key(key);
            }
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            notifications.push(
                Notification::success("notification-download-success").with_arg("name", name),
            );
        }
        Err(Error::DialogCancelled) => {
            log::debug!("download cancelled");
        }
        Err(err) => {
            log::error!("download failed: {err}");
            notifications.push(Notification::from_error(&err));
        }
    }
}
