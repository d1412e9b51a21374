// SPDX-License-Identifier: MPL-2.0
//! Navigation bar: the boutique brand and the screen switcher.

use crate::app::Screen;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::{
    alignment::Vertical,
    widget::{button, container, space::horizontal as horizontal_space, text, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext {
    pub current: Screen,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    HomePressed,
    ContactPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    SwitchTo(Screen),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::HomePressed => Event::SwitchTo(Screen::Home),
        Message::ContactPressed => Event::SwitchTo(Screen::Contact),
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext) -> Element<'static, Message> {
    let brand = Text::new("Aurelia Fine Gold")
        .size(typography::TITLE_MD)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::GOLD_600),
        });

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(brand)
        .push(horizontal_space())
        .push(nav_button("Home", Message::HomePressed, ctx.current == Screen::Home))
        .push(nav_button(
            "Contact",
            Message::ContactPressed,
            ctx.current == Screen::Contact,
        ));

    Container::new(row)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..Default::default()
        })
        .into()
}

/// Build one nav button, highlighted when its screen is active.
fn nav_button(label: &str, message: Message, active: bool) -> Element<'static, Message> {
    let styled = button(text(label.to_string()).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .on_press(message);

    let styled = if active {
        styled.style(active_style)
    } else {
        styled.style(inactive_style)
    };

    styled.into()
}

fn active_style(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(palette::GOLD_500.into()),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn inactive_style(theme: &Theme, status: button::Status) -> button::Style {
    let base_text = theme.extended_palette().background.base.text;

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(theme.extended_palette().background.strong.color.into()),
            text_color: base_text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        _ => button::Style {
            background: None,
            text_color: base_text,
            border: Border::default(),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_press_switches_to_home() {
        assert_eq!(update(Message::HomePressed), Event::SwitchTo(Screen::Home));
    }

    #[test]
    fn contact_press_switches_to_contact() {
        assert_eq!(
            update(Message::ContactPressed),
            Event::SwitchTo(Screen::Contact)
        );
    }

    #[test]
    fn navbar_view_renders_on_both_screens() {
        let _home = view(ViewContext {
            current: Screen::Home,
        });
        let _contact = view(ViewContext {
            current: Screen::Contact,
        });
    }
}
