// SPDX-License-Identifier: MPL-2.0
//! Contact form field state and the submit flow.

use super::validation::{self, ValidationError};
use std::fmt;

/// Confirmation shown after an accepted submission.
pub const CONFIRMATION_MESSAGE: &str =
    "Thank you for your message! We will get back to you within 24 hours.";

/// Topics offered by the subject selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    General,
    GoldBars,
    GoldCoins,
    Jewellery,
}

impl Subject {
    /// Options in display order for the pick list.
    pub const ALL: [Subject; 4] = [
        Subject::General,
        Subject::GoldBars,
        Subject::GoldCoins,
        Subject::Jewellery,
    ];
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Subject::General => "General inquiry",
            Subject::GoldBars => "Gold bars",
            Subject::GoldCoins => "Gold coins",
            Subject::Jewellery => "Jewellery",
        };
        f.write_str(label)
    }
}

/// Flat record extracted from the form at submit time. Ephemeral: logged for
/// diagnostics, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// Messages emitted by the contact form view.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    SubjectSelected(Subject),
    MessageChanged(String),
    SubmitPressed,
}

/// Outcome of a form message, propagated to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A validation check failed; surface the message near the form.
    Rejected(ValidationError),
    /// The submission was accepted and the fields have been reset; log the
    /// record and confirm to the user.
    Accepted(Submission),
}

/// Contact form field values. Stateless between submit attempts: no retry
/// count, no lockout.
#[derive(Debug, Clone, Default)]
pub struct State {
    name: String,
    email: String,
    phone: String,
    subject: Option<Subject>,
    message: String,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[must_use]
    pub fn subject(&self) -> Option<Subject> {
        self.subject
    }

    #[must_use]
    pub fn message_body(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.subject.is_none()
            && self.message.is_empty()
    }

    /// Builds the flat submission record from the current field values.
    #[must_use]
    pub fn submission(&self) -> Submission {
        Submission {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            subject: self.subject.map(|s| s.to_string()).unwrap_or_default(),
            message: self.message.clone(),
        }
    }

    /// Clears every field back to its initial value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Handles a form message. On submit the record is validated
    /// first-failure-wins; acceptance resets the form before the effect is
    /// returned.
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::NameChanged(value) => {
                self.name = value;
                Effect::None
            }
            Message::EmailChanged(value) => {
                self.email = value;
                Effect::None
            }
            Message::PhoneChanged(value) => {
                self.phone = value;
                Effect::None
            }
            Message::SubjectSelected(subject) => {
                self.subject = Some(subject);
                Effect::None
            }
            Message::MessageChanged(value) => {
                self.message = value;
                Effect::None
            }
            Message::SubmitPressed => {
                let submission = self.submission();
                match validation::validate(&submission) {
                    Err(error) => Effect::Rejected(error),
                    Ok(()) => {
                        self.reset();
                        Effect::Accepted(submission)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> State {
        let mut state = State::new();
        state.update(Message::NameChanged("Anna".to_string()));
        state.update(Message::EmailChanged("anna@example.com".to_string()));
        state.update(Message::SubjectSelected(Subject::General));
        state.update(Message::MessageChanged("Hello".to_string()));
        state
    }

    #[test]
    fn field_messages_update_state() {
        let mut state = State::new();
        state.update(Message::NameChanged("Anna".to_string()));
        state.update(Message::PhoneChanged("0700 000 000".to_string()));

        assert_eq!(state.name(), "Anna");
        assert_eq!(state.phone(), "0700 000 000");
        assert!(state.subject().is_none());
    }

    #[test]
    fn valid_submission_is_accepted_and_clears_the_form() {
        let mut state = filled_form();

        let effect = state.update(Message::SubmitPressed);
        match effect {
            Effect::Accepted(submission) => {
                assert_eq!(submission.name, "Anna");
                assert_eq!(submission.subject, "General inquiry");
                assert_eq!(submission.phone, "");
            }
            other => panic!("expected acceptance, got {other:?}"),
        }
        assert!(state.is_empty());
    }

    #[test]
    fn rejected_submission_keeps_the_fields() {
        let mut state = filled_form();
        state.update(Message::EmailChanged("foo@bar".to_string()));

        let effect = state.update(Message::SubmitPressed);
        match effect {
            Effect::Rejected(error) => {
                assert_eq!(error.message(), "Please provide a valid email address.");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert_eq!(state.name(), "Anna");
        assert_eq!(state.email(), "foo@bar");
        assert!(!state.is_empty());
    }

    #[test]
    fn validation_short_circuits_on_the_first_failure() {
        let mut state = State::new();
        state.update(Message::EmailChanged("anna@example.com".to_string()));
        state.update(Message::SubjectSelected(Subject::GoldCoins));
        state.update(Message::MessageChanged("Hello".to_string()));

        // Name is empty: only the name error may surface, not the others.
        match state.update(Message::SubmitPressed) {
            Effect::Rejected(error) => {
                assert_eq!(error.message(), "Please provide your name.");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn missing_subject_maps_to_empty_string_in_the_record() {
        let state = State::new();
        assert_eq!(state.submission().subject, "");
    }

    #[test]
    fn subject_labels_are_distinct() {
        let mut labels: Vec<String> = Subject::ALL.iter().map(Subject::to_string).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), Subject::ALL.len());
    }
}
