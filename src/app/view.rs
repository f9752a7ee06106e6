// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is the base layer; the lightbox, the contact popup and the toasts
//! are stacked above it when active.

use super::Message;
use crate::bgm::BgmIcon;
use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::info::PageText;
use crate::ui::accordion::Accordion;
use crate::ui::contact_popup::{self, ContactPopup};
use crate::ui::design_tokens::palette;
use crate::ui::lightbox;
use crate::ui::notifications::{self, Toast};
use crate::ui::page;
use iced::widget::{container, Container, Stack};
use iced::{Element, Length, Theme};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub page_text: &'a PageText,
    pub gallery: &'a Gallery,
    pub accordion: &'a Accordion,
    pub contact_popup: &'a ContactPopup,
    pub bgm_icon: BgmIcon,
    pub notifications: &'a notifications::Manager,
    pub revealed: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    if !ctx.revealed {
        return Container::new(iced::widget::Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(iced::Background::Color(palette::PAPER)),
                ..Default::default()
            })
            .into();
    }

    let page = page::view(page::ViewContext {
        i18n: ctx.i18n,
        text: ctx.page_text,
        gallery: ctx.gallery,
        accordion: ctx.accordion,
        bgm_icon: ctx.bgm_icon,
    })
    .map(Message::Page);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);

    if ctx.gallery.is_open() {
        stack = stack.push(
            lightbox::view(ctx.gallery, ctx.i18n, Instant::now())
                .map(|message| Message::Page(page::Message::Gallery(message))),
        );
    }

    if ctx.contact_popup.is_open() {
        stack = stack.push(contact_popup::view(ctx.page_text, ctx.i18n).map(Message::Contact));
    }

    stack
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}
