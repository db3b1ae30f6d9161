// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay: the focused image over a dimmed backdrop.
//!
//! Pressing the backdrop closes the lightbox. Buttons capture their own
//! presses, and the drawn image and the texts are `opaque`, so only presses
//! on empty space (including the letterbox around the image) reach the
//! backdrop.

use crate::application::dispatch::GalleryEvent;
use crate::application::lightbox::LightboxInfo;
use crate::domain::gallery::{GalleryItem, ImageEntry};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::grid::caption;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::image::{self, Handle};
use iced::widget::{button, mouse_area, opaque, text, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub entry: &'a ImageEntry,
    pub handle: Option<&'a Handle>,
    pub info: LightboxInfo,
}

/// The focused image at its fitted size.
///
/// Shrinks to the drawn picture instead of filling the stage, so the space
/// around it stays part of the backdrop.
fn picture(handle: &Handle) -> image::Image<Handle> {
    image::Image::new(handle.clone())
        .width(Length::Shrink)
        .height(Length::Shrink)
        .content_fit(ContentFit::Contain)
}

/// Counter text, e.g. `3 / 7`.
#[must_use]
pub fn counter_text(info: &LightboxInfo, i18n: &I18n) -> String {
    i18n.tr_with_args(
        "lightbox-counter",
        &[
            ("position", &info.position().to_string()),
            ("total", &info.total.to_string()),
        ],
    )
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, GalleryEvent> {
    let backdrop_text = ctx.colors.backdrop_text;

    let control = |label: &'static str, event: GalleryEvent| {
        button(
            Container::new(Text::new(label).size(typography::TITLE_MD))
                .center(Length::Fill),
        )
        .width(Length::Fixed(sizing::LIGHTBOX_CONTROL))
        .height(Length::Fixed(sizing::LIGHTBOX_CONTROL))
        .style(styles::button::overlay(
            backdrop_text,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_STRONG,
        ))
        .on_press(event)
    };

    let label = move |content: String, size: f32| {
        text(content)
            .size(size)
            .style(move |_theme: &iced::Theme| text::Style {
                color: Some(backdrop_text),
            })
    };

    // Top: counter and close.
    let top = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(opaque(label(
                counter_text(&ctx.info, ctx.i18n),
                typography::BODY,
            )))
            .width(Length::Fill),
        )
        .push(control("✕", GalleryEvent::CloseRequested));

    // Middle: previous, image, next.
    let shown: Element<'_, GalleryEvent> = match ctx.handle {
        Some(handle) => opaque(picture(handle)),
        None => opaque(label(ctx.i18n.tr("image-missing"), typography::BODY_LG)),
    };
    let stage = Container::new(shown).center(Length::Fill);

    let mut middle = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .height(Length::Fill);
    if ctx.info.controls_visible {
        middle = middle.push(control("◀", GalleryEvent::PreviousRequested));
    }
    middle = middle.push(stage);
    if ctx.info.controls_visible {
        middle = middle.push(control("▶", GalleryEvent::NextRequested));
    }

    // Bottom: caption, alternate text, download.
    let mut captions = Column::new()
        .spacing(spacing::XXS)
        .push(label(caption(ctx.entry, ctx.i18n), typography::TITLE_SM));
    if let Some(alt) = ctx.entry.alt_text() {
        captions = captions.push(label(alt.to_string(), typography::BODY_SM));
    }
    let download = button(text(ctx.i18n.tr("lightbox-download")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::selected)
        .on_press(GalleryEvent::DownloadRequested);
    let bottom = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(opaque(captions)).width(Length::Fill))
        .push(download);

    let frame = Column::new()
        .spacing(spacing::MD)
        .push(top)
        .push(middle)
        .push(bottom)
        .width(Length::Fill)
        .height(Length::Fill);

    let backdrop = Container::new(frame)
        .padding(spacing::XL)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop(ctx.colors.backdrop));

    mouse_area(backdrop)
        .on_press(GalleryEvent::BackdropPressed)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picture_shrinks_to_its_fitted_size() {
        use iced::advanced::Widget;

        let handle = Handle::from_bytes(Vec::<u8>::new());
        let size = Widget::<GalleryEvent, iced::Theme, iced::Renderer>::size(&picture(&handle));
        assert_eq!(size.width, Length::Shrink);
        assert_eq!(size.height, Length::Shrink);
    }

    #[test]
    fn counter_is_one_based() {
        let i18n = I18n::default();
        let info = LightboxInfo {
            index: 0,
            total: 4,
            controls_visible: true,
        };
        assert_eq!(counter_text(&info, &i18n), "1 / 4");
    }
}
