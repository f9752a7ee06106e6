// SPDX-License-Identifier: MPL-2.0
//! The invitation page: a scrollable column of sections.
//!
//! Overlays (lightbox, contact popup, toasts) are stacked on top by the
//! application view.

use crate::bgm::{self, BgmIcon};
use crate::gallery::{self, Gallery};
use crate::i18n::fluent::I18n;
use crate::info::{FamilyText, PageText, Side};
use crate::ui::accordion::{self, Accordion};
use crate::ui::contact_popup::{self, PAGE_SCROLL_ID};
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use crate::ui::gallery_grid;
use iced::widget::scrollable::{RelativeOffset, Viewport};
use iced::widget::{
    button, container, rule, text, Column, Container, Id, Row, Scrollable, Space,
};
use iced::{alignment, Color, Element, Length, Theme};

#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Accordion(accordion::Message),
    Contact(contact_popup::Message),
    Bgm(bgm::Message),
    CopyAddressPressed,
    CallVenuePressed,
    Scrolled(RelativeOffset),
}

/// Everything the page needs to render.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub text: &'a PageText,
    pub gallery: &'a Gallery,
    pub accordion: &'a Accordion,
    pub bgm_icon: BgmIcon,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let sections = Column::new()
        .push(main_section(ctx.text, i18n, ctx.bgm_icon))
        .push(divider())
        .push(family_section(ctx.text, i18n))
        .push(contact_section(i18n))
        .push(divider())
        .push(section(
            i18n.tr("section-gallery"),
            gallery_grid::view(ctx.gallery, i18n).map(Message::Gallery),
        ))
        .push(divider())
        .push(location_section(ctx.text, i18n))
        .push(divider())
        .push(section(
            i18n.tr("section-accounts"),
            ctx.accordion.view(ctx.text, i18n).map(Message::Accordion),
        ))
        .spacing(spacing::XL)
        .padding([spacing::XL, spacing::LG])
        .width(Length::Fixed(sizing::PAGE_WIDTH))
        .align_x(alignment::Horizontal::Center);

    let centered = Container::new(sections)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let scrollable = Scrollable::new(centered)
        .id(Id::new(PAGE_SCROLL_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled(viewport.relative_offset()));

    Container::new(scrollable)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(paper_style)
        .into()
}

fn main_section<'a>(page: &'a PageText, i18n: &'a I18n, icon: BgmIcon) -> Element<'a, Message> {
    let bgm_key = match icon {
        BgmIcon::VolumeUp => "bgm-playing",
        BgmIcon::VolumeMute => "bgm-paused",
    };
    let bgm_toggle = button(text(i18n.tr(bgm_key)).size(typography::CAPTION))
        .on_press(Message::Bgm(bgm::Message::TogglePressed))
        .padding([spacing::XXS, spacing::SM])
        .style(pill_style);

    let names = Row::new()
        .push(text(page.main.groom_name.as_str()).size(typography::DISPLAY))
        .push(
            text(i18n.tr("main-and"))
                .size(typography::BODY_LG)
                .color(palette::ROSE_500),
        )
        .push(text(page.main.bride_name.as_str()).size(typography::DISPLAY))
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);

    Column::new()
        .push(
            Row::new()
                .push(Space::new().width(Length::Fill))
                .push(bgm_toggle),
        )
        .push(
            text(i18n.tr("main-invitation"))
                .size(typography::CAPTION)
                .color(palette::ROSE_700),
        )
        .push(names)
        .push(text(page.main.date_time.as_str()).size(typography::BODY_LG))
        .push(
            text(page.main.hall.as_str())
                .size(typography::BODY)
                .color(palette::GRAY_700),
        )
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .into()
}

fn family_section<'a>(page: &'a PageText, i18n: &'a I18n) -> Element<'a, Message> {
    Column::new()
        .push(family_line(Side::Groom, page.family_of(Side::Groom), i18n))
        .push(family_line(Side::Bride, page.family_of(Side::Bride), i18n))
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn family_line<'a>(side: Side, family: &'a FamilyText, i18n: &'a I18n) -> Element<'a, Message> {
    let (role, accent) = match side {
        Side::Groom => ("family-son", palette::GROOM),
        Side::Bride => ("family-daughter", palette::BRIDE),
    };
    let parents = i18n.tr_with_args(
        "family-parents-of",
        &[
            ("father", family.father.as_str()),
            ("mother", family.mother.as_str()),
        ],
    );
    Row::new()
        .push(text(parents).size(typography::BODY))
        .push(text(i18n.tr(role)).size(typography::CAPTION).color(accent))
        .push(text(family.name.as_str()).size(typography::BODY_LG))
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn contact_section(i18n: &I18n) -> Element<'_, Message> {
    button(text(i18n.tr("contact-open")).size(typography::BODY))
        .on_press(Message::Contact(contact_popup::Message::OpenPressed))
        .padding([spacing::XS, spacing::LG])
        .style(pill_style)
        .into()
}

fn location_section<'a>(page: &'a PageText, i18n: &'a I18n) -> Element<'a, Message> {
    let location = &page.location;

    let copy = button(text(i18n.tr("location-copy-address")).size(typography::CAPTION))
        .on_press(Message::CopyAddressPressed)
        .padding([spacing::XXS, spacing::SM])
        .style(pill_style);

    let mut call = button(text(i18n.tr("location-call")).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(pill_style);
    if location.call.is_available() {
        call = call.on_press(Message::CallVenuePressed);
    }

    let body = Column::new()
        .push(text(location.hall_name.as_str()).size(typography::BODY_LG))
        .push(
            text(location.address.as_str())
                .size(typography::BODY)
                .color(palette::GRAY_700),
        )
        .push(Row::new().push(copy).push(call).spacing(spacing::XS))
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center);

    section(i18n.tr("section-location"), body.into())
}

fn section<'a>(title: String, body: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .push(
            text(title)
                .size(typography::TITLE)
                .color(palette::ROSE_700),
        )
        .push(body)
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .into()
}

fn divider<'a>() -> Element<'a, Message> {
    Container::new(rule::horizontal(1))
        .width(Length::FillPortion(2))
        .max_width(sizing::PAGE_WIDTH / 3.0)
        .into()
}

fn paper_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(palette::PAPER)),
        text_color: Some(palette::INK),
        ..Default::default()
    }
}

fn pill_style(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Disabled => (palette::GRAY_200, palette::GRAY_400),
        button::Status::Hovered | button::Status::Pressed => (palette::ROSE_300, palette::INK),
        button::Status::Active => (palette::ROSE_100, palette::ROSE_700),
    };
    button::Style {
        background: Some(iced::Background::Color(background)),
        text_color,
        border: iced::Border {
            color: Color {
                a: 0.6,
                ..palette::ROSE_300
            },
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: Default::default(),
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::gallery::{GallerySettings, ImageSet};
    use crate::info::InvitationInfo;
    use std::path::Path;

    fn filled_text() -> PageText {
        PageText::from_info(&InvitationInfo::parse(
            "groom_self_name: Minho\ngroom_father_name: Jaehyun\nbride_self_name: Seoyeon\n",
        ))
    }

    #[test]
    fn family_text_is_exposed_per_side() {
        let text = filled_text();
        let groom: &FamilyText = text.family_of(Side::Groom);
        assert_eq!(groom.name, "Minho");
        assert_eq!(groom.father, "Jaehyun");
        assert_eq!(text.family_of(Side::Bride).name, "Seoyeon");
    }

    #[test]
    fn page_builds_with_dividers_and_sections() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let text = filled_text();
        let settings = GallerySettings::default();
        let gallery = Gallery::with_images(
            ImageSet::new(Path::new("/site"), settings.slot_count),
            settings,
        );
        let accordion = Accordion::default();

        let _page = view(ViewContext {
            i18n: &i18n,
            text: &text,
            gallery: &gallery,
            accordion: &accordion,
            bgm_icon: BgmIcon::VolumeMute,
        });
        let _divider = divider();
    }

    #[test]
    fn disabled_pill_is_greyed_out() {
        let style = pill_style(&Theme::Light, button::Status::Disabled);
        assert_eq!(style.text_color, palette::GRAY_400);
    }

    #[test]
    fn page_background_is_paper() {
        let style = paper_style(&Theme::Light);
        assert_eq!(
            style.background,
            Some(iced::Background::Color(palette::PAPER))
        );
    }
}
