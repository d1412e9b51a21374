// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::contact;
use crate::slideshow;
use crate::ui::navbar;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Slideshow(slideshow::Message),
    Contact(contact::Message),
    /// Periodic tick driving rotation deadlines and banner expiry.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional rotation interval override in seconds.
    pub interval_secs: Option<u64>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
}
