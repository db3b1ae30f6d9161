// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The filter bar sits above the grid. While the lightbox is open it is
//! stacked over both, and toasts float above everything.

use super::Message;
use crate::application::dispatch::Gallery;
use crate::domain::gallery::EntryId;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::{self, Toast};
use crate::ui::theming::ColorScheme;
use crate::ui::{filter_bar, grid, lightbox};
use iced::widget::image::Handle;
use iced::widget::{opaque, Column, Container, Stack};
use iced::{Element, Length};
use std::collections::HashMap;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub gallery: &'a Gallery,
    pub filter_values: &'a [String],
    pub handles: &'a HashMap<EntryId, Handle>,
    pub columns: usize,
    pub thumbnail_height: f32,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let controller = ctx.gallery.controller();

    let filters = filter_bar::view(filter_bar::ViewContext {
        i18n: ctx.i18n,
        filter_values: ctx.filter_values,
        active_category: controller.active_category(),
        search_term: controller.search_term().as_str(),
    })
    .map(Message::Gallery);

    let thumbnails = grid::view(grid::ViewContext {
        i18n: ctx.i18n,
        controller,
        handles: ctx.handles,
        columns: ctx.columns,
        thumbnail_height: ctx.thumbnail_height,
    })
    .map(Message::Gallery);

    let base = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(filters)
            .push(thumbnails),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .height(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if let (Some((id, entry)), Some(info)) = (ctx.gallery.focused(), ctx.gallery.lightbox_info()) {
        let overlay = lightbox::view(lightbox::ViewContext {
            i18n: ctx.i18n,
            colors: ctx.colors,
            entry,
            handle: ctx.handles.get(&id),
            info,
        })
        .map(Message::Gallery);

        // An open lightbox keeps wheel and pointer events away from the grid.
        layers = layers.push(opaque(overlay));
    }

    if let Some(toasts) = Toast::view_overlay(ctx.notifications, ctx.i18n) {
        layers = layers.push(toasts.map(Message::Notification));
    }

    layers.into()
}
