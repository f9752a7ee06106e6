// SPDX-License-Identifier: MPL-2.0
//! Account panels, one per side. At most one panel is open at a time.

use crate::i18n::fluent::I18n;
use crate::info::{AccountEntry, PageText, Side};
use crate::ui::design_tokens::{border, palette, radius, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Space};
use iced::{alignment, Color, Element, Length, Theme};

#[derive(Debug, Clone)]
pub enum Message {
    TogglePressed(Side),
    CopyPressed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    CopyAccount(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<Side>,
}

impl Accordion {
    /// Opens `side` and closes the other panel, or closes `side` if it was open.
    pub fn toggle(&mut self, side: Side) {
        self.open = if self.open == Some(side) {
            None
        } else {
            Some(side)
        };
    }

    #[must_use]
    pub fn is_open(&self, side: Side) -> bool {
        self.open == Some(side)
    }

    #[must_use]
    pub fn open_panel(&self) -> Option<Side> {
        self.open
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::TogglePressed(side) => {
                self.toggle(side);
                Effect::None
            }
            Message::CopyPressed(payload) => Effect::CopyAccount(payload),
        }
    }

    pub fn view<'a>(&self, page: &'a PageText, i18n: &'a I18n) -> Element<'a, Message> {
        Column::with_children(Side::ALL.into_iter().map(|side| self.panel(side, page, i18n)))
            .spacing(spacing::SM)
            .into()
    }

    fn panel<'a>(&self, side: Side, page: &'a PageText, i18n: &'a I18n) -> Element<'a, Message> {
        let open = self.is_open(side);
        let title = match side {
            Side::Groom => "accounts-groom-side",
            Side::Bride => "accounts-bride-side",
        };
        let chevron = if open { "▴" } else { "▾" };

        let header = button(
            Row::new()
                .push(text(i18n.tr(title)).size(typography::BODY_LG))
                .push(Space::new().width(Length::Fill))
                .push(text(chevron).size(typography::BODY_LG))
                .align_y(alignment::Vertical::Center),
        )
        .on_press(Message::TogglePressed(side))
        .width(Length::Fill)
        .padding([spacing::SM, spacing::MD])
        .style(move |_theme: &Theme, status| header_style(side, status));

        let mut panel = Column::new().push(header);
        if open {
            let rows = page
                .accounts_of(side)
                .map(|account| account_row(account, i18n));
            panel = panel.push(
                Container::new(Column::with_children(rows).spacing(spacing::SM))
                    .padding(spacing::MD)
                    .width(Length::Fill)
                    .style(body_style),
            );
        }
        panel.into()
    }
}

fn account_row<'a>(account: &'a AccountEntry, i18n: &'a I18n) -> Element<'a, Message> {
    let label = i18n.tr(account.role.label_key());
    let details = Column::new()
        .push(text(account.display_name(&label)).size(typography::BODY))
        .push(
            text(account.number_line())
                .size(typography::CAPTION)
                .color(palette::GRAY_700),
        )
        .width(Length::Fill);

    let copy = button(text(i18n.tr("accounts-copy")).size(typography::CAPTION))
        .on_press(Message::CopyPressed(account.clipboard_text()))
        .padding([spacing::XXS, spacing::SM])
        .style(copy_style);

    Row::new()
        .push(details)
        .push(copy)
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn side_color(side: Side) -> Color {
    match side {
        Side::Groom => palette::GROOM,
        Side::Bride => palette::BRIDE,
    }
}

fn header_style(side: Side, status: button::Status) -> button::Style {
    let accent = side_color(side);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Color { a: 0.15, ..accent },
        button::Status::Active | button::Status::Disabled => palette::WHITE,
    };
    button::Style {
        background: Some(iced::Background::Color(background)),
        text_color: palette::INK,
        border: iced::Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: Default::default(),
        snap: true,
    }
}

fn body_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(palette::ROSE_100)),
        text_color: Some(palette::INK),
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn copy_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ROSE_700,
        button::Status::Active | button::Status::Disabled => palette::ROSE_500,
    };
    button::Style {
        background: Some(iced::Background::Color(background)),
        text_color: palette::WHITE,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: Default::default(),
        snap: true,
    }
}
