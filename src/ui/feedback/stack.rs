// SPDX-License-Identifier: MPL-2.0
//! Banner lifecycle: replace-on-push and tick-driven expiry.

use super::banner::{Banner, Kind};
use std::time::Instant;

/// The set of currently visible banners, at most one per [`Kind`].
#[derive(Debug, Clone, Default)]
pub struct Stack {
    banners: Vec<Banner>,
}

impl Stack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a banner, removing any prior banner of the same kind first.
    pub fn push(&mut self, banner: Banner) {
        self.banners.retain(|existing| existing.kind() != banner.kind());
        self.banners.push(banner);
    }

    pub fn show_error(&mut self, message: impl Into<String>, now: Instant) {
        self.push(Banner::error(message, now));
    }

    pub fn show_success(&mut self, message: impl Into<String>, now: Instant) {
        self.push(Banner::success(message, now));
    }

    /// Removes banners whose display time has elapsed. Called from the
    /// periodic tick.
    pub fn tick(&mut self, now: Instant) {
        self.banners.retain(|banner| !banner.is_expired(now));
    }

    /// Visible banners in insertion order.
    pub fn visible(&self) -> impl Iterator<Item = &Banner> {
        self.banners.iter()
    }

    #[must_use]
    pub fn has_banners(&self) -> bool {
        !self.banners.is_empty()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.banners.is_empty()
    }

    pub fn clear(&mut self) {
        self.banners.clear();
    }
}
