// SPDX-License-Identifier: MPL-2.0
use iced_vitrine::config::{self, Config, DEFAULT_ROTATION_INTERVAL_SECS};
use iced_vitrine::contact::{self, validation, Subject};
use iced_vitrine::slideshow::{SlideDeck, State as Slideshow};
use iced_vitrine::ui::feedback::{Kind, Stack};
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn test_rotation_interval_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: default interval
    let initial_config = Config {
        rotation_interval_secs: Some(DEFAULT_ROTATION_INTERVAL_SECS),
        hover_pause: Some(true),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    assert_eq!(
        loaded.rotation_interval_secs,
        Some(DEFAULT_ROTATION_INTERVAL_SECS)
    );

    // 2. Change the interval and disable hover pause
    let changed_config = Config {
        rotation_interval_secs: Some(10),
        hover_pause: Some(false),
    };
    config::save_to_path(&changed_config, &temp_config_file_path)
        .expect("Failed to write changed config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load changed config from path");
    assert_eq!(loaded.rotation_interval_secs, Some(10));
    assert_eq!(loaded.hover_pause, Some(false));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_full_rotation_cycle_with_manual_override() {
    let interval = Duration::from_secs(5);
    let mut slideshow = Slideshow::new(SlideDeck::promotional(), interval, true);
    let start = Instant::now();
    slideshow.start(start);

    // Automatic rotation visits every slide and wraps.
    let mut now = start;
    for expected in [1, 2, 0] {
        now += interval;
        slideshow.tick(now);
        assert_eq!(slideshow.current(), expected);
    }

    // A manual jump grants a full interval before the next auto-advance.
    let click = now + Duration::from_secs(1);
    slideshow.go_to(1, click);
    slideshow.restart(click);
    assert_eq!(slideshow.current(), 1);
    assert_eq!(slideshow.next_advance_at(), Some(click + interval));
}

#[test]
fn test_submit_flow_accepts_and_resets() {
    let mut form = contact::State::new();
    let mut feedback = Stack::new();
    let now = Instant::now();

    for message in [
        contact::Message::NameChanged("Anna".to_string()),
        contact::Message::EmailChanged("anna@example.com".to_string()),
        contact::Message::SubjectSelected(Subject::General),
        contact::Message::MessageChanged("Hello".to_string()),
    ] {
        form.update(message);
    }

    match form.update(contact::Message::SubmitPressed) {
        contact::Effect::Accepted(submission) => {
            assert_eq!(submission.email, "anna@example.com");
            feedback.show_success(contact::form::CONFIRMATION_MESSAGE, now);
        }
        other => panic!("expected acceptance, got {other:?}"),
    }

    assert!(form.is_empty());
    let kinds: Vec<Kind> = feedback.visible().map(|banner| banner.kind()).collect();
    assert_eq!(kinds, vec![Kind::Success]);

    // The confirmation expires after its fixed 8 s timeout.
    feedback.tick(now + Duration::from_secs(8));
    assert!(feedback.is_empty());
}

#[test]
fn test_submit_flow_short_circuits_on_first_failure() {
    let mut form = contact::State::new();

    // Name missing and email invalid: only the name error surfaces.
    form.update(contact::Message::EmailChanged("foo@bar".to_string()));
    form.update(contact::Message::MessageChanged("Hello".to_string()));

    match form.update(contact::Message::SubmitPressed) {
        contact::Effect::Rejected(error) => {
            assert_eq!(error.message(), "Please provide your name.");
        }
        other => panic!("expected rejection, got {other:?}"),
    }

    // Fields are untouched so the user can correct them.
    assert_eq!(form.email(), "foo@bar");
}

#[test]
fn test_email_shape_acceptance() {
    assert!(validation::is_valid_email("a@b.c"));
    assert!(!validation::is_valid_email("foo@bar"));
    assert!(!validation::is_valid_email("no-at-sign.com"));
}
