// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the two screens.
//!
//! The `App` struct wires the slideshow and contact domains to the Iced
//! runtime: it routes messages, gates the periodic tick subscription, and
//! records accepted submissions. Policy decisions (window sizing, startup
//! precedence of flags over config) stay close to the boot path so
//! user-facing behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::contact;
use crate::diagnostics::DiagnosticsLog;
use crate::slideshow::{self, SlideDeck};
use crate::ui::feedback;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 600;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

const APP_TITLE: &str = "Aurelia Fine Gold";

/// Root Iced application state.
pub struct App {
    screen: Screen,
    slideshow: slideshow::State,
    contact: contact::State,
    /// Feedback banners shown above the contact form.
    feedback: feedback::Stack,
    /// Log of simulated submissions.
    diagnostics: DiagnosticsLog,
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state, applying CLI flags over the config
    /// file over built-in defaults, and starts the rotation.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.as_ref().map(PathBuf::from);
        let config = config::load(config_dir.as_deref()).unwrap_or_default();

        let interval_secs = flags
            .interval_secs
            .or(config.rotation_interval_secs)
            .unwrap_or(config::DEFAULT_ROTATION_INTERVAL_SECS);
        let hover_pause = config.hover_pause.unwrap_or(true);

        let mut slideshow = slideshow::State::new(
            SlideDeck::promotional(),
            Duration::from_secs(interval_secs),
            hover_pause,
        );
        slideshow.start(Instant::now());

        let app = App {
            screen: Screen::Home,
            slideshow,
            contact: contact::State::new(),
            feedback: feedback::Stack::new(),
            diagnostics: DiagnosticsLog::default(),
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.screen {
            Screen::Home => APP_TITLE.to_string(),
            Screen::Contact => format!("Contact - {APP_TITLE}"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        let slideshow_pending = self.screen == Screen::Home && self.slideshow.needs_tick();
        subscription::create_tick_subscription(slideshow_pending || self.feedback.has_banners())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(m) => update::handle_navbar(self, m),
            Message::Slideshow(m) => update::handle_slideshow(self, m),
            Message::Contact(m) => update::handle_contact(self, m),
            Message::Tick(now) => update::handle_tick(self, now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Subject;
    use crate::ui::feedback::Kind;
    use crate::ui::navbar;

    fn app() -> App {
        App::new(Flags::default()).0
    }

    fn fill_valid_form(app: &mut App) {
        for message in [
            contact::Message::NameChanged("Anna".to_string()),
            contact::Message::EmailChanged("anna@example.com".to_string()),
            contact::Message::SubjectSelected(Subject::General),
            contact::Message::MessageChanged("Hello".to_string()),
        ] {
            app.update(Message::Contact(message));
        }
    }

    #[test]
    fn new_app_starts_on_home_with_rotation_running() {
        let app = app();
        assert_eq!(app.screen, Screen::Home);
        assert!(app.slideshow.is_running());
        assert!(app.feedback.is_empty());
    }

    #[test]
    fn title_follows_the_screen() {
        let mut app = app();
        assert_eq!(app.title(), "Aurelia Fine Gold");

        app.update(Message::Navbar(navbar::Message::ContactPressed));
        assert_eq!(app.title(), "Contact - Aurelia Fine Gold");
    }

    #[test]
    fn returning_home_restarts_rotation() {
        let mut app = app();
        app.slideshow.pause();
        assert!(!app.slideshow.is_running());

        app.update(Message::Navbar(navbar::Message::ContactPressed));
        app.update(Message::Navbar(navbar::Message::HomePressed));
        assert!(app.slideshow.is_running());
    }

    #[test]
    fn accepted_submission_logs_confirms_and_resets() {
        let mut app = app();
        fill_valid_form(&mut app);

        app.update(Message::Contact(contact::Message::SubmitPressed));

        assert_eq!(app.diagnostics.len(), 1);
        let kinds: Vec<Kind> = app.feedback.visible().map(|b| b.kind()).collect();
        assert_eq!(kinds, vec![Kind::Success]);
        assert!(app.contact.is_empty());
    }

    #[test]
    fn rejected_submission_shows_an_error_and_keeps_fields() {
        let mut app = app();
        fill_valid_form(&mut app);
        app.update(Message::Contact(contact::Message::EmailChanged(
            "foo@bar".to_string(),
        )));

        app.update(Message::Contact(contact::Message::SubmitPressed));

        assert!(app.diagnostics.is_empty());
        let kinds: Vec<Kind> = app.feedback.visible().map(|b| b.kind()).collect();
        assert_eq!(kinds, vec![Kind::Error]);
        assert_eq!(app.contact.name(), "Anna");
    }

    #[test]
    fn tick_expires_banners() {
        let mut app = app();
        fill_valid_form(&mut app);
        app.update(Message::Contact(contact::Message::SubmitPressed));
        assert!(app.feedback.has_banners());

        // Well past the 8 s success timeout.
        let later = Instant::now() + Duration::from_secs(9);
        app.update(Message::Tick(later));
        assert!(app.feedback.is_empty());
    }

    #[test]
    fn tick_does_not_rotate_while_on_the_contact_screen() {
        let mut app = app();
        app.update(Message::Navbar(navbar::Message::ContactPressed));
        let before = app.slideshow.current();

        app.update(Message::Tick(Instant::now() + Duration::from_secs(60)));
        assert_eq!(app.slideshow.current(), before);
    }

    #[test]
    fn subscription_is_idle_when_nothing_is_pending() {
        let mut app = app();
        // On Contact with no banners there is no timed work.
        app.update(Message::Navbar(navbar::Message::ContactPressed));
        let _idle = app.subscription();

        // On Home the rotation keeps the tick alive.
        app.update(Message::Navbar(navbar::Message::HomePressed));
        let _ticking = app.subscription();
    }
}
