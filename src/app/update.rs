// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components return effects instead of touching shared state; the handlers
//! here turn those effects into toasts, clipboard writes and link launches.

use super::Message;
use crate::bgm::BgmControl;
use crate::clipboard;
use crate::gallery::{self, Gallery};
use crate::info::{InvitationInfo, PageText};
use crate::links;
use crate::ui::accordion::{self, Accordion};
use crate::ui::contact_popup::{self, ContactPopup};
use crate::ui::notifications::{self, Notification};
use crate::ui::page;
use iced::widget::scrollable::RelativeOffset;
use iced::Task;
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub page_text: &'a mut PageText,
    pub gallery: &'a mut Gallery,
    pub accordion: &'a mut Accordion,
    pub contact_popup: &'a mut ContactPopup,
    pub bgm: &'a mut BgmControl,
    pub page_offset: &'a mut RelativeOffset,
    pub revealed: &'a mut bool,
    pub notifications: &'a mut notifications::Manager,
}

impl<'a> UpdateContext<'a> {
    pub fn new(app: &'a mut super::App) -> Self {
        Self {
            page_text: &mut app.page_text,
            gallery: &mut app.gallery,
            accordion: &mut app.accordion,
            contact_popup: &mut app.contact_popup,
            bgm: &mut app.bgm,
            page_offset: &mut app.page_offset,
            revealed: &mut app.revealed,
            notifications: &mut app.notifications,
        }
    }
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Page(message) => handle_page_message(ctx, message),
        Message::Contact(message) => handle_contact_message(ctx, message),
        Message::Notification(message) => {
            ctx.notifications.handle_message(&message);
            Task::none()
        }
        Message::InfoLoaded(result) => {
            handle_info_loaded(ctx, result);
            Task::none()
        }
        Message::Revealed => {
            *ctx.revealed = true;
            Task::none()
        }
        Message::Tick(now) => {
            ctx.notifications.tick(now);
            Task::none()
        }
    }
}

fn handle_page_message(ctx: &mut UpdateContext<'_>, message: page::Message) -> Task<Message> {
    match message {
        page::Message::Gallery(message) => handle_gallery_message(ctx, message, Instant::now()),
        page::Message::Accordion(message) => match ctx.accordion.handle_message(message) {
            accordion::Effect::None => Task::none(),
            accordion::Effect::CopyAccount(text) => {
                let (notification, task) = clipboard::copy_account(&text);
                ctx.notifications.push(notification);
                task
            }
        },
        page::Message::Contact(message) => handle_contact_message(ctx, message),
        page::Message::Bgm(message) => {
            ctx.bgm.handle_message(message);
            Task::none()
        }
        page::Message::CopyAddressPressed => {
            let (notification, task) = clipboard::copy_address(&ctx.page_text.location.address);
            ctx.notifications.push(notification);
            task
        }
        page::Message::CallVenuePressed => {
            let link = ctx.page_text.location.call.clone();
            open_link(ctx, &link);
            Task::none()
        }
        page::Message::Scrolled(offset) => {
            *ctx.page_offset = offset;
            Task::none()
        }
    }
}

fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
    now: Instant,
) -> Task<Message> {
    let (effect, task) = ctx.gallery.handle_message(message, now);
    match effect {
        gallery::Effect::None => {}
        gallery::Effect::ShowErrorNotification { key } => {
            ctx.notifications.push(Notification::error(key));
        }
    }
    task.map(|message| Message::Page(page::Message::Gallery(message)))
}

fn handle_contact_message(
    ctx: &mut UpdateContext<'_>,
    message: contact_popup::Message,
) -> Task<Message> {
    let (effect, task) = ctx.contact_popup.handle_message(message, *ctx.page_offset);
    if let contact_popup::Effect::OpenLink(link) = effect {
        open_link(ctx, &link);
    }
    task
}

fn handle_info_loaded(ctx: &mut UpdateContext<'_>, result: crate::error::Result<InvitationInfo>) {
    match result {
        Ok(info) => {
            *ctx.page_text = PageText::from_info(&info);
        }
        Err(err) => {
            log::error!("{}", err);
            *ctx.page_text = PageText::default();
            ctx.notifications
                .push(Notification::warning("notification-info-load-error"));
        }
    }
}

fn open_link(ctx: &mut UpdateContext<'_>, link: &crate::info::ContactLink) {
    if link.is_available() && !links::open(link) {
        ctx.notifications
            .push(Notification::error("notification-link-failed").with_arg("link", link.to_string()));
    }
}
