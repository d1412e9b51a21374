// SPDX-License-Identifier: MPL-2.0
//! First-failure-wins validation of a contact submission.
//!
//! There is exactly one failure kind: a human-readable message surfaced as a
//! banner near the form. Field-missing and field-malformed are deliberately
//! not distinguished at the type level.

use super::form::Submission;
use std::fmt;

/// A failed validation check, carrying the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    message: &'static str,
}

impl ValidationError {
    fn new(message: &'static str) -> Self {
        Self { message }
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

/// Checks the required fields in order, stopping at the first failure.
/// `phone` is optional and never checked.
pub fn validate(submission: &Submission) -> Result<(), ValidationError> {
    if submission.name.trim().is_empty() {
        return Err(ValidationError::new("Please provide your name."));
    }
    if !is_valid_email(&submission.email) {
        return Err(ValidationError::new(
            "Please provide a valid email address.",
        ));
    }
    if submission.subject.is_empty() {
        return Err(ValidationError::new("Please select a subject."));
    }
    if submission.message.trim().is_empty() {
        return Err(ValidationError::new("Please write a message."));
    }
    Ok(())
}

/// Simple address shape check: no whitespace, exactly one `@` with a
/// non-empty local part, and a `.` inside the domain with at least one
/// character on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
