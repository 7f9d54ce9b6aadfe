// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of live toasts.
//!
//! Toasts render as fixed-width cards with a severity-colored accent
//! border, an elevated drop shadow, and a dismiss button. The overlay
//! anchors each card at its configured [`Position`] and fades closing
//! cards out over the 200ms exit window.

use super::controller::{Surface, ToastId, ToastPhase, ToastView, Toaster};
use crate::design_tokens::{border, motion, radius, shadow, sizing, spacing, typography};
use crate::theme::Theme;
use iced::widget::{button, container, text, Column, Container, Row, Stack};
use iced::{alignment, Background, Border, Color, Element, Length};
use std::time::Instant;

/// Renders a single toast card.
pub fn view<'a, Message: Clone + 'a>(
    theme: &Theme,
    toast: ToastView<'a>,
    now: Instant,
    on_close: impl Fn(ToastId) -> Message + 'a,
) -> Element<'a, Message> {
    let accent = toast.alert.severity().color();
    let fade = visibility(toast.phase, now, theme.reduced_motion);
    let text_color = faded(theme.text_color, fade);
    let surface = theme.palette.surface;
    let muted = theme.palette.neutral.n500;

    let mut body = Column::new().spacing(spacing::XXS);
    if let Some(title) = toast.alert.title_text() {
        body = body.push(
            text(title)
                .size(typography::BODY)
                .font(iced::Font {
                    weight: iced::font::Weight::Bold,
                    ..iced::Font::DEFAULT
                })
                .color(text_color),
        );
    }
    body = body.push(
        text(toast.alert.message())
            .size(typography::BODY)
            .color(text_color),
    );

    let id = toast.id;
    let dismiss = button(text("✕").size(typography::BODY).color(faded(muted, fade)))
        .on_press(on_close(id))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    let content_block = Container::new(body)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Left);

    // RTL flips the reading order: dismiss on the start edge, text
    // anchored to the end.
    let content = if toast.rtl {
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(dismiss)
            .push(content_block.align_x(alignment::Horizontal::Right))
    } else {
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(content_block)
            .push(dismiss)
    };

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |_theme: &iced::Theme| toast_container_style(surface, accent, text_color, fade))
        .into()
}

/// Renders the overlay with every live toast anchored at its position.
///
/// Returns an empty, zero-sized element when nothing is live.
pub fn overlay<'a, S: Surface, Message: Clone + 'a>(
    theme: &Theme,
    toaster: &'a Toaster<S>,
    now: Instant,
    on_close: impl Fn(ToastId) -> Message + Clone + 'a,
) -> Element<'a, Message> {
    if toaster.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let layers: Vec<Element<'a, Message>> = toaster
        .visible()
        .map(|toast| {
            let position = toast.position;
            Container::new(view(theme, toast, now, on_close.clone()))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(position.align_x())
                .align_y(position.align_y())
                .padding(position.inset())
                .into()
        })
        .collect();

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Remaining visibility of a toast, 1.0 while mounted and falling to 0.0
/// across the exit window.
///
/// With `reduced_motion` the exit does not animate: a closing card hides
/// immediately and waits out the rest of its grace window invisible.
fn visibility(phase: ToastPhase, now: Instant, reduced_motion: bool) -> f32 {
    match phase {
        ToastPhase::Mounted => 1.0,
        ToastPhase::Closing { .. } if reduced_motion => 0.0,
        ToastPhase::Closing { since } => {
            let elapsed = now.saturating_duration_since(since).as_secs_f32();
            let slide = motion::TOAST_SLIDE.as_secs_f32();
            (1.0 - elapsed / slide).clamp(0.0, 1.0)
        }
    }
}

fn faded(color: Color, fade: f32) -> Color {
    Color {
        a: color.a * fade,
        ..color
    }
}

/// Style function for the toast card.
fn toast_container_style(
    surface: Color,
    accent: Color,
    text_color: Color,
    fade: f32,
) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(surface, fade))),
        border: Border {
            color: faded(accent, fade),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: faded(shadow::TOAST.color, fade),
            ..shadow::TOAST
        },
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &iced::Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color {
                a: if matches!(status, button::Status::Hovered) {
                    0.2
                } else {
                    0.5
                },
                ..crate::design_tokens::palette::NEUTRAL_400
            })),
            text_color: base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color { a: 0.5, ..base.text },
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
