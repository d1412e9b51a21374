// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application: the navbar above the active screen.

use super::{App, Message, Screen};
use crate::ui::{contact_page, home, navbar};
use iced::{widget::Column, Element, Length};

/// Renders the current application view based on the active screen.
pub fn view(app: &App) -> Element<'_, Message> {
    let navbar_view = navbar::view(navbar::ViewContext {
        current: app.screen,
    })
    .map(Message::Navbar);

    let content: Element<'_, Message> = match app.screen {
        Screen::Home => home::view(home::ViewContext {
            slideshow: &app.slideshow,
        })
        .map(Message::Slideshow),
        Screen::Contact => contact_page::view(contact_page::ViewContext {
            form: &app.contact,
            feedback: &app.feedback,
        })
        .map(Message::Contact),
    };

    Column::new()
        .push(navbar_view)
        .push(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
