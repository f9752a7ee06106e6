// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid of the gallery section.

use crate::gallery::{Gallery, Message, Slot, SlotStatus};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use crate::ui::lightbox;
use iced::widget::{button, container, image, text, Column, Container, Row};
use iced::{alignment, ContentFit, Element, Length, Theme};

/// Thumbnails per grid row.
pub const COLUMNS: usize = 3;

pub fn view<'a>(gallery: &'a Gallery, i18n: &'a I18n) -> Element<'a, Message> {
    let slots: Vec<&Slot> = gallery.images().iter().collect();

    let rows = slots.chunks(COLUMNS).enumerate().map(|(row, chunk)| -> Element<'a, Message> {
        let cells = chunk.iter().enumerate().map(|(column, slot)| {
            thumbnail(slot, row * COLUMNS + column, i18n)
        });
        Row::with_children(cells).spacing(spacing::XS).into()
    });

    Column::new()
        .push(Column::with_children(rows).spacing(spacing::XS))
        .push(lightbox::indicator_row(gallery.indicators(), palette::ROSE_500))
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn thumbnail<'a>(slot: &'a Slot, index: usize, i18n: &'a I18n) -> Element<'a, Message> {
    let content: Element<'a, Message> = match slot.image() {
        Some(decoded) => image(decoded.thumbnail.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => {
            let key = match slot.status() {
                SlotStatus::Broken => "gallery-photo-broken",
                SlotStatus::Pending | SlotStatus::Loaded => "gallery-photo-loading",
            };
            Container::new(text(i18n.tr(key)).size(typography::CAPTION))
                .center(Length::Fill)
                .style(placeholder_style)
                .into()
        }
    };

    button(content)
        .on_press(Message::OpenRequested(index))
        .width(Length::Fixed(sizing::THUMBNAIL))
        .height(Length::Fixed(sizing::THUMBNAIL))
        .padding(0)
        .style(thumbnail_style)
        .into()
}

fn placeholder_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(palette::ROSE_100)),
        text_color: Some(palette::GRAY_700),
        ..Default::default()
    }
}

fn thumbnail_style(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ROSE_500,
        button::Status::Active | button::Status::Disabled => palette::GRAY_200,
    };
    button::Style {
        background: None,
        text_color: palette::INK,
        border: iced::Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: Default::default(),
        snap: true,
    }
}
