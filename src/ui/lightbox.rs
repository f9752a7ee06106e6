// SPDX-License-Identifier: MPL-2.0
//! Modal lightbox drawn over the page.
//!
//! The image surface is a canvas that draws the displayed slot contain-fit,
//! shifted horizontally by the current slide offset, and reports pointer
//! presses/releases for swipe detection. Presses on the letterbox area around
//! the photo are left uncaptured so they reach the backdrop and close the
//! modal.

use crate::gallery::{Gallery, Message, Pointer, SlideVisual, Slot, SlotStatus};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use iced::widget::canvas::{self, Canvas, Text};
use iced::widget::{button, container, mouse_area, opaque, Column, Container, Row, Space};
use iced::{alignment, mouse, touch, Color, Element, Length, Point, Rectangle, Size, Theme};
use std::time::Instant;

/// Renders the lightbox for an open gallery.
pub fn view<'a>(gallery: &'a Gallery, i18n: &'a I18n, now: Instant) -> Element<'a, Message> {
    let close = button(iced::widget::text("×").size(typography::TITLE))
        .on_press(Message::ClosePressed)
        .padding([0.0, spacing::SM])
        .style(control_style);
    let top_bar = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(close)
        .padding(spacing::XS);

    let surface = Canvas::new(SlideSurface::new(gallery.surface(), gallery.visual(now), i18n))
        .width(Length::Fill)
        .height(Length::Fill);

    let prev = nav_button("‹", Message::PrevPressed);
    let next = nav_button("›", Message::NextPressed);
    let stage = Row::new()
        .push(prev)
        .push(surface)
        .push(next)
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .height(Length::Fill);

    let current = (gallery.current_index() + 1).to_string();
    let total = gallery.images().len().to_string();
    let position = iced::widget::text(i18n.tr_with_args(
        "gallery-photo-position",
        &[("current", current.as_str()), ("total", total.as_str())],
    ))
    .size(typography::CAPTION)
    .color(palette::WHITE);

    let content = Column::new()
        .push(top_bar)
        .push(stage)
        .push(position)
        .push(indicator_row(gallery.indicators(), palette::WHITE))
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .height(Length::Fill);

    let backdrop = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            })),
            ..Default::default()
        });

    opaque(mouse_area(backdrop).on_press(Message::BackdropPressed))
}

/// One dot per slot; clicking a dot opens the viewer at that slot.
pub fn indicator_row<'a>(indicators: Vec<bool>, accent: Color) -> Element<'a, Message> {
    let dots = indicators.into_iter().enumerate().map(|(index, active)| -> Element<'a, Message> {
        let dot = Space::new()
            .width(Length::Fixed(sizing::INDICATOR_DOT))
            .height(Length::Fixed(sizing::INDICATOR_DOT));
        button(dot)
            .on_press(Message::OpenRequested(index))
            .padding(0)
            .style(move |_theme: &Theme, status| dot_style(active, accent, status))
            .into()
    });
    Row::with_children(dots)
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn nav_button<'a>(glyph: &'a str, message: Message) -> Element<'a, Message> {
    button(
        iced::widget::text(glyph)
            .size(typography::DISPLAY)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press(message)
    .width(Length::Fixed(sizing::NAV_BUTTON))
    .style(control_style)
    .into()
}

fn control_style(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_MEDIUM,
        button::Status::Pressed => opacity::OVERLAY_MEDIUM + opacity::OVERLAY_SUBTLE,
        button::Status::Active | button::Status::Disabled => opacity::OVERLAY_SUBTLE,
    };
    button::Style {
        background: Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_700
        })),
        text_color: palette::WHITE,
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: Default::default(),
        snap: true,
    }
}

fn dot_style(active: bool, accent: Color, status: button::Status) -> button::Style {
    let alpha = if active {
        opacity::OPAQUE
    } else if matches!(status, button::Status::Hovered) {
        opacity::OVERLAY_MEDIUM + opacity::OVERLAY_SUBTLE
    } else {
        opacity::OVERLAY_MEDIUM
    };
    button::Style {
        background: Some(iced::Background::Color(Color { a: alpha, ..accent })),
        text_color: accent,
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: Default::default(),
        snap: true,
    }
}

/// Rectangle of an image of `image` size fitted inside `bounds` (contain).
pub fn contain_rect(image: Size, bounds: Size) -> Rectangle {
    if image.width <= 0.0 || image.height <= 0.0 || bounds.width <= 0.0 || bounds.height <= 0.0 {
        return Rectangle::new(Point::ORIGIN, Size::ZERO);
    }
    let image_aspect = image.width / image.height;
    let bounds_aspect = bounds.width / bounds.height;

    if image_aspect > bounds_aspect {
        let height = bounds.width / image_aspect;
        Rectangle::new(
            Point::new(0.0, (bounds.height - height) / 2.0),
            Size::new(bounds.width, height),
        )
    } else {
        let width = bounds.height * image_aspect;
        Rectangle::new(
            Point::new((bounds.width - width) / 2.0, 0.0),
            Size::new(width, bounds.height),
        )
    }
}

/// Canvas program for the display surface.
struct SlideSurface {
    handle: Option<iced::widget::image::Handle>,
    image_size: Size,
    status: Option<SlotStatus>,
    visual: SlideVisual,
    placeholder: String,
}

impl SlideSurface {
    fn new(slot: Option<&Slot>, visual: SlideVisual, i18n: &I18n) -> Self {
        let status = slot.map(Slot::status);
        let image = slot.and_then(Slot::image);
        let placeholder = match status {
            Some(SlotStatus::Broken) => i18n.tr("gallery-photo-broken"),
            _ => i18n.tr("gallery-photo-loading"),
        };
        Self {
            handle: slot.and_then(Slot::full_handle),
            image_size: image
                .map(|image| Size::new(image.width as f32, image.height as f32))
                .unwrap_or(Size::ZERO),
            status,
            visual,
            placeholder,
        }
    }

    /// Where the photo sits inside the canvas, relative to its origin.
    fn photo_rect(&self, bounds: Size) -> Option<Rectangle> {
        self.handle.as_ref()?;
        let mut rect = contain_rect(self.image_size, bounds);
        rect.x += self.visual.offset * bounds.width;
        Some(rect)
    }

    fn hits_photo(&self, position: Point, bounds: Rectangle) -> bool {
        let local = Point::new(position.x - bounds.x, position.y - bounds.y);
        self.photo_rect(bounds.size())
            .is_some_and(|rect| rect.contains(local))
    }
}

/// Pointer whose press started on the photo.
#[derive(Debug, Default)]
struct GestureState {
    pressed: Option<Pointer>,
}

impl canvas::Program<Message> for SlideSurface {
    type State = GestureState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position()?;
                if !self.hits_photo(position, bounds) {
                    return None;
                }
                state.pressed = Some(Pointer::Mouse);
                Some(
                    Action::publish(Message::SurfacePressed {
                        pointer: Pointer::Mouse,
                        position,
                    })
                    .and_capture(),
                )
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if state.pressed != Some(Pointer::Mouse) {
                    return None;
                }
                state.pressed = None;
                let message = match cursor.position() {
                    Some(position) => Message::SurfaceReleased {
                        pointer: Pointer::Mouse,
                        position,
                    },
                    None => Message::GestureLost,
                };
                Some(Action::publish(message).and_capture())
            }
            iced::Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if !self.hits_photo(*position, bounds) {
                    return None;
                }
                let pointer = Pointer::Finger(*id);
                state.pressed = Some(pointer);
                Some(
                    Action::publish(Message::SurfacePressed {
                        pointer,
                        position: *position,
                    })
                    .and_capture(),
                )
            }
            iced::Event::Touch(touch::Event::FingerLifted { id, position }) => {
                let pointer = Pointer::Finger(*id);
                if state.pressed != Some(pointer) {
                    return None;
                }
                state.pressed = None;
                Some(
                    Action::publish(Message::SurfaceReleased {
                        pointer,
                        position: *position,
                    })
                    .and_capture(),
                )
            }
            iced::Event::Touch(touch::Event::FingerLost { id, .. }) => {
                if state.pressed != Some(Pointer::Finger(*id)) {
                    return None;
                }
                state.pressed = None;
                Some(Action::publish(Message::GestureLost))
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                if state.pressed != Some(Pointer::Mouse) {
                    return None;
                }
                state.pressed = None;
                Some(Action::publish(Message::GestureLost))
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        match (&self.handle, self.photo_rect(bounds.size())) {
            (Some(handle), Some(rect)) => {
                frame.draw_image(rect, canvas::Image::new(handle.clone()));
            }
            _ => {
                let color = match self.status {
                    Some(SlotStatus::Broken) => palette::GRAY_400,
                    _ => palette::GRAY_200,
                };
                frame.fill_text(Text {
                    content: self.placeholder.clone(),
                    position: frame.center(),
                    color,
                    size: typography::BODY.into(),
                    align_x: alignment::Horizontal::Center.into(),
                    align_y: alignment::Vertical::Center,
                    ..Text::default()
                });
            }
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_image_is_letterboxed_vertically() {
        let rect = contain_rect(Size::new(400.0, 200.0), Size::new(200.0, 200.0));
        assert_eq!(rect.width, 200.0);
        assert_eq!(rect.height, 100.0);
        assert_eq!(rect.y, 50.0);
        assert_eq!(rect.x, 0.0);
    }

    #[test]
    fn tall_image_is_pillarboxed() {
        let rect = contain_rect(Size::new(100.0, 200.0), Size::new(300.0, 200.0));
        assert_eq!(rect.width, 100.0);
        assert_eq!(rect.x, 100.0);
    }

    #[test]
    fn degenerate_sizes_yield_empty_rect() {
        let rect = contain_rect(Size::new(0.0, 10.0), Size::new(100.0, 100.0));
        assert_eq!(rect.size(), Size::ZERO);
    }

    #[test]
    fn photo_rect_follows_slide_offset() {
        let surface = SlideSurface {
            handle: Some(iced::widget::image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255])),
            image_size: Size::new(100.0, 100.0),
            status: Some(SlotStatus::Loaded),
            visual: SlideVisual {
                offset: -0.5,
                ..SlideVisual::CENTERED
            },
            placeholder: String::new(),
        };
        let rect = surface
            .photo_rect(Size::new(200.0, 100.0))
            .expect("loaded photo has a rect");
        assert_eq!(rect.x, -50.0);
    }

    #[test]
    fn placeholder_surface_never_hits() {
        let surface = SlideSurface {
            handle: None,
            image_size: Size::ZERO,
            status: Some(SlotStatus::Broken),
            visual: SlideVisual::CENTERED,
            placeholder: String::new(),
        };
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(100.0, 100.0));
        assert!(!surface.hits_photo(Point::new(50.0, 50.0), bounds));
    }
}
