// SPDX-License-Identifier: MPL-2.0
//! Contact form domain: field state, the submit flow, and validation.
//!
//! Like the slideshow core this module has no Iced imports; the view in
//! [`crate::ui::contact_page`] projects [`form::State`] and feeds messages
//! back in. Submission is simulated — an accepted record is handed to the
//! application as an [`form::Effect`] to be logged, never sent anywhere.

pub mod form;
pub mod validation;

pub use form::{Effect, Message, State, Subject, Submission};
pub use validation::{validate, ValidationError};
