// SPDX-License-Identifier: MPL-2.0
//! Contact popup listing call/SMS links for the couple and their parents.
//!
//! Opening the popup records where the page was scrolled to; closing it
//! snaps the page back there.

use crate::i18n::fluent::I18n;
use crate::info::{ContactEntry, ContactLink, PageText, Side};
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{button, center, container, mouse_area, opaque, operation, text, Column, Container, Id, Row, Space};
use iced::{alignment, Color, Element, Length, Task, Theme};

/// Id of the page scrollable whose offset is restored on close.
pub const PAGE_SCROLL_ID: &str = "invitation-page";

#[derive(Debug, Clone)]
pub enum Message {
    OpenPressed,
    ClosePressed,
    LinkPressed(ContactLink),
}

/// Side effects the application performs for the popup.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    OpenLink(ContactLink),
}

#[derive(Debug, Clone, Default)]
pub struct ContactPopup {
    is_open: bool,
    saved_offset: Option<RelativeOffset>,
}

impl ContactPopup {
    /// Shows the popup, remembering the page offset at that moment.
    pub fn open(&mut self, page_offset: RelativeOffset) {
        if self.is_open {
            return;
        }
        self.is_open = true;
        self.saved_offset = Some(page_offset);
    }

    /// Hides the popup and returns the offset the page should go back to.
    pub fn close(&mut self) -> Option<RelativeOffset> {
        if !self.is_open {
            return None;
        }
        self.is_open = false;
        self.saved_offset.take()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn handle_message<M: Send + 'static>(
        &mut self,
        message: Message,
        page_offset: RelativeOffset,
    ) -> (Effect, Task<M>) {
        match message {
            Message::OpenPressed => {
                self.open(page_offset);
                (Effect::None, Task::none())
            }
            Message::ClosePressed => match self.close() {
                Some(offset) => (Effect::None, operation::snap_to(Id::new(PAGE_SCROLL_ID), offset)),
                None => (Effect::None, Task::none()),
            },
            Message::LinkPressed(link) => (Effect::OpenLink(link), Task::none()),
        }
    }
}

/// The popup card over a scrim that blocks the page underneath.
pub fn view<'a>(page: &'a PageText, i18n: &'a I18n) -> Element<'a, Message> {
    let title = text(i18n.tr("contact-title")).size(typography::TITLE);

    let mut sides = Column::new().spacing(spacing::LG);
    for side in Side::ALL {
        let entries = page.contacts.iter().filter(|entry| entry.role.side == side);
        let heading = text(i18n.tr(match side {
            Side::Groom => "contact-groom-side",
            Side::Bride => "contact-bride-side",
        }))
        .size(typography::CAPTION)
        .color(side_accent(side));
        let rows = Column::with_children(entries.map(|entry| contact_row(entry, i18n)))
            .spacing(spacing::SM);
        sides = sides.push(Column::new().push(heading).push(rows).spacing(spacing::XS));
    }

    let close = button(text(i18n.tr("contact-close")).size(typography::BODY))
        .on_press(Message::ClosePressed)
        .padding([spacing::XS, spacing::MD])
        .style(link_button_style);

    let card = Container::new(
        Column::new()
            .push(title)
            .push(sides)
            .push(close)
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fixed(sizing::POPUP_WIDTH))
    .padding(spacing::LG)
    .style(card_style);

    let scrim = center(opaque(card)).style(|_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::SCRIM,
            ..palette::BLACK
        })),
        ..Default::default()
    });

    opaque(mouse_area(scrim).on_press(Message::ClosePressed))
}

fn contact_row<'a>(entry: &'a ContactEntry, i18n: &'a I18n) -> Element<'a, Message> {
    let label = text(i18n.tr(entry.role.label_key()))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);
    let name = text(entry.name.as_str()).size(typography::BODY);

    Row::new()
        .push(Column::new().push(label).push(name).width(Length::Fill))
        .push(link_button(i18n.tr("contact-call"), &entry.call))
        .push(link_button(i18n.tr("contact-sms"), &entry.sms))
        .push(Space::new().width(Length::Fixed(spacing::XXS)))
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn link_button<'a>(label: String, link: &ContactLink) -> Element<'a, Message> {
    let mut button = button(text(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(link_button_style);
    if link.is_available() {
        button = button.on_press(Message::LinkPressed(link.clone()));
    }
    button.into()
}

fn side_accent(side: Side) -> Color {
    match side {
        Side::Groom => palette::GROOM,
        Side::Bride => palette::BRIDE,
    }
}

fn card_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(palette::PAPER)),
        text_color: Some(palette::INK),
        border: iced::Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

fn link_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Disabled => (palette::GRAY_200, palette::GRAY_400),
        button::Status::Hovered | button::Status::Pressed => (palette::ROSE_300, palette::INK),
        button::Status::Active => (palette::ROSE_100, palette::INK),
    };
    button::Style {
        background: Some(iced::Background::Color(background)),
        text_color,
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset(y: f32) -> RelativeOffset {
        RelativeOffset { x: 0.0, y }
    }

    #[test]
    fn close_returns_offset_recorded_at_open() {
        let mut popup = ContactPopup::default();
        popup.open(offset(0.4));
        assert!(popup.is_open());

        let restored = popup.close().expect("recorded offset");
        assert_eq!(restored.y, 0.4);
        assert!(!popup.is_open());
    }

    #[test]
    fn reopening_while_open_keeps_first_offset() {
        let mut popup = ContactPopup::default();
        popup.open(offset(0.2));
        popup.open(offset(0.9));
        assert_eq!(popup.close().map(|o| o.y), Some(0.2));
    }

    #[test]
    fn closing_a_closed_popup_restores_nothing() {
        let mut popup = ContactPopup::default();
        assert!(popup.close().is_none());
    }

    #[test]
    fn link_press_is_forwarded_as_effect() {
        let mut popup = ContactPopup::default();
        let link = ContactLink::tel("010-1234-5678");
        let (effect, _task) =
            popup.handle_message::<()>(Message::LinkPressed(link.clone()), offset(0.0));
        assert_eq!(effect, Effect::OpenLink(link));
    }
}
