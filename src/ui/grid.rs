// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid of the visible entries.
//!
//! Every declared entry has a slot; the grid walks the full entry list and
//! skips the entries the current query hides. Rows are keyed by the
//! [`EntryId`] of their first card so widget state follows the entries, not
//! their row index. Activating a card opens the lightbox on that card's
//! position in the visible subset.

use crate::application::dispatch::GalleryEvent;
use crate::application::gallery::GalleryController;
use crate::domain::gallery::{EntryId, GalleryItem, ImageEntry};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::image::{self, Handle};
use iced::widget::{button, keyed_column, scrollable, text, Column, Container, Row};
use iced::{alignment, ContentFit, Element, Length};
use std::collections::HashMap;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub controller: &'a GalleryController<ImageEntry>,
    /// Decodable sources; entries without a handle show a placeholder.
    pub handles: &'a HashMap<EntryId, Handle>,
    pub columns: usize,
    pub thumbnail_height: f32,
}

/// Caption shown under a thumbnail and in the lightbox.
#[must_use]
pub fn caption<E: GalleryItem>(entry: &E, i18n: &I18n) -> String {
    entry
        .title()
        .map_or_else(|| i18n.tr("image-untitled"), str::to_string)
}

/// A card the grid draws for one shown entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card<'a, E> {
    pub id: EntryId,
    pub entry: &'a E,
    /// Position within the visible subset.
    pub position: usize,
}

/// Cards for the shown entries, in declared order.
#[must_use]
pub fn cards<E: GalleryItem>(controller: &GalleryController<E>) -> Vec<Card<'_, E>> {
    controller
        .entries()
        .iter()
        .enumerate()
        .map(|(declared, entry)| (EntryId::new(declared), entry))
        .filter(|&(id, _)| controller.is_visible(id))
        .enumerate()
        .map(|(position, (id, entry))| Card {
            id,
            entry,
            position,
        })
        .collect()
}

/// Splits `len` positions into rows of `columns`, the last row possibly shorter.
#[must_use]
pub fn row_ranges(len: usize, columns: usize) -> Vec<std::ops::Range<usize>> {
    let columns = columns.max(1);
    (0..len)
        .step_by(columns)
        .map(|start| start..(start + columns).min(len))
        .collect()
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, GalleryEvent> {
    let controller = ctx.controller;

    if controller.visible_len() == 0 {
        let key = if controller.is_empty() {
            "gallery-no-images"
        } else {
            "gallery-empty"
        };
        return Container::new(text(ctx.i18n.tr(key)).size(typography::BODY_LG))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into();
    }

    let shown = cards(controller);
    let columns = ctx.columns.max(1);

    let rows = row_ranges(shown.len(), columns).into_iter().map(|range| {
        let filled = range.len();
        let key = shown[range.start].id;
        let row = shown[range]
            .iter()
            .fold(Row::new().spacing(spacing::MD), |row, c| row.push(card(&ctx, c)));
        // Pad short rows so cards keep the same width.
        let row = (filled..columns)
            .fold(row, |row, _| row.push(Column::new().width(Length::Fill)));
        (key, Element::from(row))
    });

    let rows = keyed_column(rows)
        .spacing(spacing::MD)
        .padding(spacing::MD);

    scrollable(rows)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn card<'a>(ctx: &ViewContext<'a>, card: &Card<'a, ImageEntry>) -> Element<'a, GalleryEvent> {
    let thumbnail: Element<'a, GalleryEvent> = match ctx.handles.get(&card.id) {
        Some(handle) => image::Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(ctx.thumbnail_height))
            .content_fit(ContentFit::Cover)
            .into(),
        None => Container::new(text(ctx.i18n.tr("image-missing")).size(typography::CAPTION))
            .width(Length::Fill)
            .height(Length::Fixed(ctx.thumbnail_height))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::missing_image)
            .into(),
    };

    let content = Column::new()
        .spacing(spacing::XS)
        .push(thumbnail)
        .push(text(caption(card.entry, ctx.i18n)).size(typography::CAPTION));

    button(content)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::button::card)
        .on_press(GalleryEvent::CardActivated(card.position))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_split_by_column_count() {
        assert_eq!(row_ranges(7, 3), vec![0..3, 3..6, 6..7]);
        assert_eq!(row_ranges(4, 4), vec![0..4]);
    }

    #[test]
    fn empty_subset_has_no_rows() {
        assert!(row_ranges(0, 4).is_empty());
    }

    #[test]
    fn zero_columns_is_treated_as_one() {
        assert_eq!(row_ranges(2, 0), vec![0..1, 1..2]);
    }

    fn sample() -> GalleryController<ImageEntry> {
        GalleryController::new(vec![
            ImageEntry::new(EntryId::new(0), "lake.jpg")
                .with_title("Morning Lake")
                .with_category("nature"),
            ImageEntry::new(EntryId::new(1), "bridge.jpg")
                .with_title("Old Bridge")
                .with_category("city"),
            ImageEntry::new(EntryId::new(2), "forest.jpg")
                .with_title("Forest Path")
                .with_alt_text("Bridge over a creek")
                .with_category("nature"),
        ])
    }

    fn assert_cards_follow_visibility(controller: &GalleryController<ImageEntry>) {
        let shown = cards(controller);
        for declared in 0..controller.len() {
            let id = EntryId::new(declared);
            let card = shown.iter().find(|card| card.id == id);
            assert_eq!(card.is_some(), controller.is_visible(id), "entry {declared}");
            if let Some(card) = card {
                assert_eq!(Some(card.position), controller.visible_position(id));
                assert!(std::ptr::eq(card.entry, &controller.entries()[declared]));
            }
        }
        assert_eq!(shown.len(), controller.visible_len());
    }

    #[test]
    fn every_entry_has_a_card_when_unfiltered() {
        let controller = sample();
        assert_cards_follow_visibility(&controller);
        assert_eq!(cards(&controller).len(), 3);
    }

    #[test]
    fn category_filter_skips_hidden_entries() {
        let mut controller = sample();
        controller.set_category_filter("nature");

        assert_cards_follow_visibility(&controller);
        let ids: Vec<_> = cards(&controller).iter().map(|card| card.id).collect();
        assert_eq!(ids, vec![EntryId::new(0), EntryId::new(2)]);
    }

    #[test]
    fn search_cards_keep_declared_order() {
        let mut controller = sample();
        controller.set_search_term("bridge");

        assert_cards_follow_visibility(&controller);
        let positions: Vec<_> = cards(&controller)
            .iter()
            .map(|card| (card.id.value(), card.position))
            .collect();
        assert_eq!(positions, vec![(1, 0), (2, 1)]);
    }

    #[test]
    fn search_without_matches_has_no_cards() {
        let mut controller = sample();
        controller.set_search_term("sunset");

        assert_cards_follow_visibility(&controller);
        assert!(cards(&controller).is_empty());
    }

    #[test]
    fn untitled_entries_get_placeholder_caption() {
        let i18n = I18n::default();
        let entry = ImageEntry::new(EntryId::new(0), "a.jpg");
        assert_eq!(caption(&entry, &i18n), i18n.tr("image-untitled"));

        let entry = entry.with_title("Lake");
        assert_eq!(caption(&entry, &i18n), "Lake");
    }
}
