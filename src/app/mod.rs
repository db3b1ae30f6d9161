// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and the shell.
//!
//! The `App` struct wires the gallery state machine to localization, the
//! theme, toast notifications and downloads, and translates messages into
//! side effects like writing a file to disk.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::dispatch::Gallery;
use crate::catalog::{is_decodable, Catalog};
use crate::domain::gallery::{EntryId, GalleryItem};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::AppTheme;
use config::Config;
use iced::widget::image::Handle;
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1080;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme: AppTheme,
    /// Title declared by the manifest or taken from the scanned directory.
    catalog_title: Option<String>,
    /// Filter control values, `all` first.
    filter_values: Vec<String>,
    gallery: Gallery,
    /// Image handles for entries whose source decodes; the rest get a placeholder.
    handles: HashMap<EntryId, Handle>,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("catalog_title", &self.catalog_title)
            .field("entries", &self.gallery.controller().len())
            .field("lightbox", &self.gallery.lightbox().state())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_catalog(Catalog::default(), Config::default(), I18n::default())
    }
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the gallery.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an `Fn` boot; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and catalog, then builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let gallery_path = flags
            .gallery_path
            .unwrap_or_else(|| Path::new(".").to_path_buf());
        let (catalog, catalog_error) = match Catalog::load(&gallery_path) {
            Ok(catalog) => (catalog, None),
            Err(err) => {
                log::error!("failed to load gallery {}: {err}", gallery_path.display());
                (Catalog::default(), Some(err))
            }
        };

        let mut app = Self::with_catalog(catalog, config, i18n);

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }
        if catalog_error.is_some() {
            app.notifications
                .push(Notification::error("notification-catalog-load-error"));
        }

        (app, Task::none())
    }

    /// Builds the state around an already loaded catalog.
    pub fn with_catalog(catalog: Catalog, config: Config, i18n: I18n) -> Self {
        let catalog_title = catalog.title().map(str::to_string);
        let filter_values = catalog.filter_values();
        let entries = catalog.into_entries();

        let handles: HashMap<EntryId, Handle> = entries
            .iter()
            .filter(|entry| is_decodable(entry.source()))
            .map(|entry| (entry.id(), Handle::from_path(entry.source())))
            .collect();
        let missing = entries.len() - handles.len();

        let mut notifications = notifications::Manager::new();
        if missing > 0 {
            log::warn!("{missing} gallery image(s) are missing or unreadable");
            notifications.push(
                Notification::warning("notification-catalog-missing-images")
                    .with_arg("count", missing.to_string()),
            );
        }

        Self {
            i18n,
            theme: AppTheme::new(config.general.theme_mode),
            config,
            catalog_title,
            filter_values,
            gallery: Gallery::new(entries),
            handles,
            notifications,
        }
    }

    fn title(&self) -> String {
        match &self.catalog_title {
            Some(name) => self
                .i18n
                .tr_with_args("app-title-with-name", &[("name", name.as_str())]),
            None => self.i18n.tr("app-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let keyboard_sub = subscription::create_keyboard_subscription(self.gallery.is_open());
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([keyboard_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(event) => {
                let mut ctx = update::UpdateContext {
                    gallery: &mut self.gallery,
                    notifications: &mut self.notifications,
                    config: &self.config,
                };
                update::handle_gallery_event(&mut ctx, event)
            }
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::Tick(_) => {
                self.notifications.tick();
                Task::none()
            }
            Message::DownloadDestinationChosen {
                request,
                destination,
            } => update::handle_destination_chosen(request, destination),
            Message::DownloadSaved(result) => {
                update::handle_download_saved(&mut self.notifications, result);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            colors: &self.theme.colors,
            gallery: &self.gallery,
            filter_values: &self.filter_values,
            handles: &self.handles,
            columns: usize::from(self.config.gallery.columns()),
            thumbnail_height: self.config.gallery.thumbnail_height(),
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dispatch::{GalleryEvent, GalleryKey};
    use crate::application::lightbox::LightboxState;
    use crate::domain::gallery::ImageEntry;
    use crate::error::Error;
    use crate::ui::notifications::Severity;
    use std::path::PathBuf;

    fn sample_catalog() -> Catalog {
        Catalog::from_entries(vec![
            ImageEntry::new(EntryId::new(0), "/missing/lake.jpg")
                .with_title("Lake")
                .with_category("nature"),
            ImageEntry::new(EntryId::new(1), "/missing/bridge.jpg")
                .with_title("Bridge")
                .with_category("city"),
            ImageEntry::new(EntryId::new(2), "/missing/forest.jpg")
                .with_title("Forest")
                .with_category("nature"),
        ])
    }

    fn sample_app() -> App {
        App::with_catalog(sample_catalog(), Config::default(), I18n::default())
    }

    fn send(app: &mut App, event: GalleryEvent) {
        let _ = app.update(Message::Gallery(event));
    }

    #[test]
    fn default_app_has_empty_gallery() {
        let app = App::default();
        assert!(app.gallery.controller().is_empty());
        assert!(!app.gallery.is_open());
        assert_eq!(app.filter_values, vec!["all".to_string()]);
    }

    #[test]
    fn title_uses_app_name_without_catalog_title() {
        let app = App::default();
        assert_eq!(app.title(), app.i18n.tr("app-title"));
    }

    #[test]
    fn title_includes_catalog_title() {
        let catalog = Catalog::from_manifest_str(
            "title = \"Holidays\"\n[[image]]\nsource = \"a.jpg\"\n",
            Path::new("/photos"),
        )
        .expect("manifest parses");
        let app = App::with_catalog(catalog, Config::default(), I18n::default());
        assert!(app.title().contains("Holidays"));
    }

    #[test]
    fn missing_sources_raise_one_warning() {
        let app = sample_app();
        assert!(app.handles.is_empty());
        assert_eq!(app.notifications.visible_count(), 1);

        let toast = app.notifications.visible().next().expect("toast");
        assert_eq!(toast.severity(), Severity::Warning);
        assert_eq!(
            toast.message_args(),
            [("count".to_string(), "3".to_string())]
        );
    }

    #[test]
    fn decodable_sources_get_handles() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("one.png");
        let image: image_rs::RgbImage =
            image_rs::ImageBuffer::from_pixel(2, 2, image_rs::Rgb([0, 0, 0]));
        image
            .save_with_format(&path, image_rs::ImageFormat::Png)
            .expect("write png");

        let catalog = Catalog::from_entries(vec![ImageEntry::new(EntryId::new(0), &path)]);
        let app = App::with_catalog(catalog, Config::default(), I18n::default());

        assert!(app.handles.contains_key(&EntryId::new(0)));
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn undecodable_source_gets_placeholder_and_is_counted() {
        let dir = tempfile::tempdir().expect("tempdir");
        let broken = dir.path().join("broken.png");
        std::fs::write(&broken, b"garbage").expect("write");

        let catalog = Catalog::from_entries(vec![
            ImageEntry::new(EntryId::new(0), &broken),
            ImageEntry::new(EntryId::new(1), dir.path().join("absent.jpg")),
        ]);
        let app = App::with_catalog(catalog, Config::default(), I18n::default());

        assert!(!app.handles.contains_key(&EntryId::new(0)));
        let toast = app.notifications.visible().next().expect("toast");
        assert_eq!(toast.severity(), Severity::Warning);
        assert_eq!(
            toast.message_args(),
            [("count".to_string(), "2".to_string())]
        );
    }

    #[test]
    fn filter_then_open_then_wrap() {
        let mut app = sample_app();

        send(&mut app, GalleryEvent::FilterSelected("nature".into()));
        assert_eq!(app.gallery.controller().visible_len(), 2);

        send(&mut app, GalleryEvent::CardActivated(1));
        assert_eq!(app.gallery.lightbox().index(), Some(1));

        send(&mut app, GalleryEvent::KeyPressed(GalleryKey::ArrowRight));
        assert_eq!(app.gallery.lightbox().index(), Some(0));

        send(&mut app, GalleryEvent::KeyPressed(GalleryKey::ArrowLeft));
        assert_eq!(app.gallery.lightbox().index(), Some(1));

        send(&mut app, GalleryEvent::KeyPressed(GalleryKey::Escape));
        assert_eq!(app.gallery.lightbox().state(), LightboxState::Closed);
    }

    #[test]
    fn backdrop_press_closes_lightbox() {
        let mut app = sample_app();
        send(&mut app, GalleryEvent::CardActivated(0));
        assert!(app.gallery.is_open());

        send(&mut app, GalleryEvent::BackdropPressed);
        assert!(!app.gallery.is_open());
    }

    fn layer_count(app: &App) -> usize {
        app.view().as_widget().children().len()
    }

    #[test]
    fn open_lightbox_is_one_extra_layer() {
        let mut app = sample_app();
        let closed = layer_count(&app);

        send(&mut app, GalleryEvent::CardActivated(0));
        assert_eq!(layer_count(&app), closed + 1);

        send(&mut app, GalleryEvent::CloseRequested);
        assert_eq!(layer_count(&app), closed);
    }

    #[test]
    fn search_narrows_visible_entries() {
        let mut app = sample_app();
        send(&mut app, GalleryEvent::SearchChanged("bri".into()));

        let controller = app.gallery.controller();
        assert_eq!(controller.visible_len(), 1);
        let (_, entry) = controller.visible_entry(0).expect("one match");
        assert_eq!(entry.title(), Some("Bridge"));
    }

    #[test]
    fn download_with_lightbox_closed_does_nothing() {
        let mut app = sample_app();
        let before = app.notifications.visible_count();
        send(&mut app, GalleryEvent::DownloadRequested);
        assert_eq!(app.notifications.visible_count(), before);
    }

    #[test]
    fn download_result_shows_toast() {
        let mut app = App::default();
        let _ = app.update(Message::DownloadSaved(Ok(PathBuf::from("/tmp/image-1.jpg"))));
        assert_eq!(app.notifications.visible_count(), 1);

        let _ = app.update(Message::DownloadSaved(Err(Error::DialogCancelled)));
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn dismiss_message_removes_toast() {
        let mut app = App::default();
        let _ = app.update(Message::DownloadSaved(Err(Error::Io("denied".into()))));
        let id = app.notifications.visible().next().expect("toast").id();

        let _ = app.update(Message::Notification(
            notifications::NotificationMessage::Dismiss(id),
        ));
        assert!(!app.notifications.has_notifications());
    }
}
