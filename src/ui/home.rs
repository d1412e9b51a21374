// SPDX-License-Identifier: MPL-2.0
//! Home screen: the hero slideshow.
//!
//! The hero is a pure projection of [`slideshow::State`]: a tinted panel with
//! the displayed caption, one indicator dot per slide, and (when enabled) a
//! hover region that pauses rotation.

use crate::slideshow::{self, Message};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, mouse_area, text, Column, Container, Row, Space},
    Border, Color, Element, Length, Padding, Theme,
};

/// Background tints cycled by slide position.
const HERO_TINTS: [Color; 3] = [palette::GOLD_800, palette::GOLD_600, palette::GOLD_700];

/// Contextual data needed to render the home screen.
pub struct ViewContext<'a> {
    pub slideshow: &'a slideshow::State,
}

/// Render the home screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let hero = build_hero(ctx.slideshow);

    // Only wrap in a hover region when pause-on-hover is enabled; without it
    // the hero is inert apart from the indicators.
    let hero: Element<'_, Message> = if ctx.slideshow.hover_pause_enabled() {
        mouse_area(hero)
            .on_enter(Message::HoverEntered)
            .on_exit(Message::HoverExited)
            .into()
    } else {
        hero
    };

    let welcome = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(text("Welcome to the boutique").size(typography::TITLE_MD))
        .push(
            text("Gold bars, coins and handcrafted jewellery, curated since 1987.")
                .size(typography::BODY),
        );

    Column::new()
        .spacing(spacing::LG)
        .push(hero)
        .push(Container::new(welcome).width(Length::Fill).center_x(Length::Fill))
        .into()
}

/// Build the tinted hero panel with caption and indicator dots.
fn build_hero(state: &slideshow::State) -> Element<'_, Message> {
    let tint = hero_tint(state.current());

    let mut content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .width(Length::Fill);

    if let Some(caption) = state.displayed_caption() {
        let text_color = Color {
            a: state.caption_opacity(),
            ..palette::WHITE
        };
        let subtitle_color = Color {
            a: state.caption_opacity(),
            ..palette::GOLD_200
        };

        // The swap phase pushes the hidden text down slightly, mirroring the
        // fade-out offset.
        let caption_block = Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(
                text(caption.title.clone())
                    .size(typography::TITLE_LG)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(text_color),
                    }),
            )
            .push(
                text(caption.subtitle.clone())
                    .size(typography::BODY_LG)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(subtitle_color),
                    }),
            );

        content = content.push(
            Container::new(caption_block).padding(Padding {
                top: state.caption_offset(),
                right: 0.0,
                bottom: 0.0,
                left: 0.0,
            }),
        );
    }

    content = content.push(Space::new().width(Length::Shrink).height(Length::Fixed(spacing::MD)));
    content = content.push(build_indicators(state));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HERO_HEIGHT))
        .align_y(Vertical::Center)
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(tint)),
            ..Default::default()
        })
        .into()
}

/// One dot per slide; the active dot is filled with the brand color.
fn build_indicators(state: &slideshow::State) -> Element<'_, Message> {
    let mut row = Row::new().spacing(spacing::XS).align_y(Vertical::Center);

    for index in 0..state.deck().len() {
        let active = state.is_active(index);
        let dot = button(Space::new()
            .width(Length::Fixed(sizing::INDICATOR_DOT))
            .height(Length::Fixed(sizing::INDICATOR_DOT)))
        .padding(0.0)
        .on_press(Message::IndicatorPressed(index))
        .style(move |_theme: &Theme, status: button::Status| indicator_style(active, status));

        row = row.push(dot);
    }

    row.into()
}

fn indicator_style(active: bool, status: button::Status) -> button::Style {
    let fill = if active {
        palette::GOLD_200
    } else if status == button::Status::Hovered {
        Color { a: 0.7, ..palette::WHITE }
    } else {
        Color { a: 0.4, ..palette::WHITE }
    };

    button::Style {
        background: Some(fill.into()),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn hero_tint(index: usize) -> Color {
    HERO_TINTS[index % HERO_TINTS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slideshow::SlideDeck;
    use std::time::{Duration, Instant};

    fn state(hover_pause: bool) -> slideshow::State {
        slideshow::State::new(SlideDeck::promotional(), Duration::from_secs(5), hover_pause)
    }

    #[test]
    fn home_view_renders() {
        let slideshow = state(true);
        let _element = view(ViewContext {
            slideshow: &slideshow,
        });
    }

    #[test]
    fn home_view_renders_without_hover_region() {
        let slideshow = state(false);
        let _element = view(ViewContext {
            slideshow: &slideshow,
        });
    }

    #[test]
    fn home_view_renders_mid_caption_swap() {
        let mut slideshow = state(true);
        slideshow.go_to(1, Instant::now());
        let _element = view(ViewContext {
            slideshow: &slideshow,
        });
    }

    #[test]
    fn home_view_renders_with_an_empty_deck() {
        let slideshow =
            slideshow::State::new(SlideDeck::default(), Duration::from_secs(5), true);
        let _element = view(ViewContext {
            slideshow: &slideshow,
        });
    }

    #[test]
    fn hero_tints_cycle_by_position() {
        assert_eq!(hero_tint(0), hero_tint(3));
        assert_ne!(hero_tint(0), hero_tint(1));
    }
}
