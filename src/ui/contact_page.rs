// SPDX-License-Identifier: MPL-2.0
//! Contact screen: feedback banners and the contact form.

use crate::contact::{Message, State, Subject};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::feedback::{card, Stack};
use iced::{
    alignment::Horizontal,
    widget::{button, pick_list, text, text_input, Column, Container},
    Element, Length,
};

/// Contextual data needed to render the contact screen.
pub struct ViewContext<'a> {
    pub form: &'a State,
    pub feedback: &'a Stack,
}

/// Render the contact screen. Banners come first, above the fields, so a
/// failure is visible without scrolling.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .push(text("Contact us").size(typography::TITLE_MD));

    for banner in card::view_stack(ctx.feedback) {
        column = column.push(banner);
    }

    let subject_picker = pick_list(
        &Subject::ALL[..],
        ctx.form.subject(),
        Message::SubjectSelected,
    )
    .placeholder("Select a subject")
    .padding(spacing::XS)
    .width(Length::Fill);

    column = column
        .push(labeled(
            "Name",
            text_input("Your name", ctx.form.name())
                .on_input(Message::NameChanged)
                .padding(spacing::XS),
        ))
        .push(labeled(
            "Email",
            text_input("name@example.com", ctx.form.email())
                .on_input(Message::EmailChanged)
                .padding(spacing::XS),
        ))
        .push(labeled(
            "Phone (optional)",
            text_input("Phone number", ctx.form.phone())
                .on_input(Message::PhoneChanged)
                .padding(spacing::XS),
        ))
        .push(labeled_element("Subject", subject_picker.into()))
        .push(labeled(
            "Message",
            text_input("How can we help?", ctx.form.message_body())
                .on_input(Message::MessageChanged)
                .padding(spacing::XS),
        ))
        .push(
            button(text("Send message").size(typography::BODY))
                .padding([spacing::XS, spacing::LG])
                .on_press(Message::SubmitPressed),
        );

    Container::new(column)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::XL)
        .into()
}

fn labeled<'a>(
    label: &'a str,
    input: text_input::TextInput<'a, Message>,
) -> Element<'a, Message> {
    labeled_element(label, input.into())
}

fn labeled_element<'a>(label: &'a str, input: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(text(label).size(typography::BODY_SM))
        .push(input)
        .into()
}
