// SPDX-License-Identifier: MPL-2.0
//! Category filter controls and the search input.

use crate::application::dispatch::GalleryEvent;
use crate::domain::gallery::{CategoryFilter, ALL_CATEGORIES};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, text_input, Row};
use iced::{alignment, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Filter values in display order, `all` first.
    pub filter_values: &'a [String],
    pub active_category: &'a CategoryFilter,
    pub search_term: &'a str,
}

/// Label shown on a filter control.
#[must_use]
pub fn filter_label(value: &str, i18n: &I18n) -> String {
    if value == ALL_CATEGORIES {
        i18n.tr("filter-all")
    } else {
        value.to_string()
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, GalleryEvent> {
    let active = ctx.active_category.value();

    let filters = ctx
        .filter_values
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, value| {
            let style: fn(&Theme, button::Status) -> button::Style = if value == active {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            row.push(
                button(text(filter_label(value, ctx.i18n)).size(typography::BODY))
                    .padding([spacing::XXS, spacing::SM])
                    .style(style)
                    .on_press(GalleryEvent::FilterSelected(value.clone())),
            )
        })
        .wrap();

    let search = text_input(&ctx.i18n.tr("search-placeholder"), ctx.search_term)
        .on_input(GalleryEvent::SearchChanged)
        .size(typography::BODY_LG)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::SEARCH_WIDTH));

    Row::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(iced::widget::container(filters).width(Length::Fill))
        .push(search)
        .into()
}
