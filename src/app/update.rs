// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message, Screen};
use crate::contact::{self, form};
use crate::slideshow;
use crate::ui::navbar;
use iced::Task;
use std::time::Instant;

pub fn handle_navbar(app: &mut App, message: navbar::Message) -> Task<Message> {
    match navbar::update(message) {
        navbar::Event::SwitchTo(target) => switch_screen(app, target),
    }
    Task::none()
}

/// Switches screens. Returning to Home restarts the rotation schedule so a
/// deadline that lapsed while the slideshow was hidden can never fire
/// immediately on re-entry.
pub fn switch_screen(app: &mut App, target: Screen) {
    if app.screen == target {
        return;
    }
    app.screen = target;
    if target == Screen::Home {
        app.slideshow.restart(Instant::now());
    }
}

pub fn handle_slideshow(app: &mut App, message: slideshow::Message) -> Task<Message> {
    app.slideshow.update(message);
    Task::none()
}

pub fn handle_contact(app: &mut App, message: contact::Message) -> Task<Message> {
    match app.contact.update(message) {
        contact::Effect::None => {}
        contact::Effect::Rejected(error) => {
            app.feedback.show_error(error.message(), Instant::now());
        }
        contact::Effect::Accepted(submission) => {
            // Simulated submission: record and echo, nothing leaves the app.
            let event = app.diagnostics.record_submission(submission);
            eprintln!("{event}");
            app.feedback
                .show_success(form::CONFIRMATION_MESSAGE, Instant::now());
        }
    }
    Task::none()
}

pub fn handle_tick(app: &mut App, now: Instant) -> Task<Message> {
    if app.screen == Screen::Home {
        app.slideshow.tick(now);
    }
    app.feedback.tick(now);
    Task::none()
}
