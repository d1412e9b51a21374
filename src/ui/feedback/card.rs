// SPDX-License-Identifier: MPL-2.0
//! Rendered banner widget.
//!
//! Banners carry no interactions, so the element is generic over the parent
//! message type. Styling is fixed at creation: a solid kind-colored
//! background with centered white text and rounded corners.

use super::banner::{Banner, Kind};
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::widget::{container, text, Container};
use iced::{alignment, Element, Length, Theme};

/// Renders a single banner.
pub fn view<Message: 'static>(banner: &Banner) -> Element<'_, Message> {
    let kind = banner.kind();

    let message = text(banner.message())
        .size(typography::BODY)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::WHITE),
        })
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill);

    Container::new(message)
        .width(Length::Fill)
        .padding(padding_for(kind))
        .style(move |_theme: &Theme| card_style(kind))
        .into()
}

/// Renders every visible banner in a stack, oldest first.
pub fn view_stack<Message: 'static>(stack: &super::Stack) -> Vec<Element<'_, Message>> {
    stack.visible().map(view).collect()
}

fn padding_for(kind: Kind) -> f32 {
    match kind {
        Kind::Error => spacing::MD,
        Kind::Success => spacing::LG,
    }
}

fn card_style(kind: Kind) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(kind.color())),
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}
