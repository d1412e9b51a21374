// SPDX-License-Identifier: MPL-2.0
//! Banner data: kind, message, and expiry.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Banner kind. Determines background color and display duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A validation failure (red, 5 s).
    Error,
    /// An accepted submission (green, 8 s).
    Success,
}

impl Kind {
    /// Fixed time a banner of this kind stays on screen.
    #[must_use]
    pub fn display_duration(&self) -> Duration {
        match self {
            Kind::Error => Duration::from_secs(5),
            Kind::Success => Duration::from_secs(8),
        }
    }

    /// Background color for a banner of this kind.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Kind::Error => palette::ERROR_500,
            Kind::Success => palette::SUCCESS_500,
        }
    }
}

/// A transient feedback banner.
#[derive(Debug, Clone)]
pub struct Banner {
    kind: Kind,
    message: String,
    shown_at: Instant,
}

impl Banner {
    pub fn new(kind: Kind, message: impl Into<String>, now: Instant) -> Self {
        Self {
            kind,
            message: message.into(),
            shown_at: now,
        }
    }

    pub fn error(message: impl Into<String>, now: Instant) -> Self {
        Self::new(Kind::Error, message, now)
    }

    pub fn success(message: impl Into<String>, now: Instant) -> Self {
        Self::new(Kind::Success, message, now)
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn shown_at(&self) -> Instant {
        self.shown_at
    }

    #[must_use]
    pub fn expires_at(&self) -> Instant {
        self.shown_at + self.kind.display_duration()
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_outlives_error() {
        assert!(Kind::Success.display_duration() > Kind::Error.display_duration());
    }

    #[test]
    fn kind_colors_are_distinct() {
        assert_ne!(Kind::Error.color(), Kind::Success.color());
    }

    #[test]
    fn banner_expires_exactly_at_its_timeout() {
        let now = Instant::now();
        let banner = Banner::error("nope", now);

        assert!(!banner.is_expired(now));
        assert!(!banner.is_expired(now + Duration::from_millis(4_999)));
        assert!(banner.is_expired(now + Duration::from_secs(5)));
    }

    #[test]
    fn constructors_set_the_kind() {
        let now = Instant::now();
        assert_eq!(Banner::error("e", now).kind(), Kind::Error);
        assert_eq!(Banner::success("s", now).kind(), Kind::Success);
    }
}
