// SPDX-License-Identifier: MPL-2.0
//! In-memory diagnostics log for simulated submissions.
//!
//! There is no backend to send contact submissions to; accepted records are
//! appended here (and echoed to stderr by the update loop) so they can be
//! inspected during development. The buffer is bounded: oldest entries are
//! dropped first.

use crate::contact::Submission;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::fmt;

/// Maximum number of retained events.
const DEFAULT_CAPACITY: usize = 64;

/// One accepted submission, stamped at acceptance time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionEvent {
    pub at: DateTime<Utc>,
    pub submission: Submission,
}

impl fmt::Display for SubmissionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] contact submission from {} <{}> ({})",
            self.at.format("%Y-%m-%d %H:%M:%S UTC"),
            self.submission.name,
            self.submission.email,
            self.submission.subject,
        )
    }
}

/// Bounded event log. The update loop is the only writer, so no handle or
/// locking is needed.
#[derive(Debug)]
pub struct DiagnosticsLog {
    events: VecDeque<SubmissionEvent>,
    capacity: usize,
}

impl Default for DiagnosticsLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl DiagnosticsLog {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records an accepted submission, evicting the oldest entry when full.
    pub fn record_submission(&mut self, submission: Submission) -> &SubmissionEvent {
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(SubmissionEvent {
            at: Utc::now(),
            submission,
        });
        self.events.back().expect("just pushed")
    }

    pub fn events(&self) -> impl Iterator<Item = &SubmissionEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
