// SPDX-License-Identifier: MPL-2.0
//! Rotation state machine for the hero slideshow.
//!
//! The automatic rotation "timer" is a single owned deadline
//! (`Option<Instant>`): `None` while paused, otherwise the instant of the
//! next automatic advance. Every reschedule goes through [`State::restart`],
//! which replaces the deadline in one assignment — there is no handle to
//! leak, so duplicate concurrent rotation callbacks (the double-speed bug a
//! forgotten cancel would cause) cannot occur.
//!
//! Caption changes are a two-phase swap: the visible text hides immediately
//! and the new text appears only after [`CAPTION_SWAP_DELAY`], so the old
//! caption is never shown over the new slide.

use super::deck::{Caption, SlideDeck};
use std::time::{Duration, Instant};

/// Delay between hiding the old caption and revealing the new one.
pub const CAPTION_SWAP_DELAY: Duration = Duration::from_millis(300);

/// Vertical offset applied to the caption while it is hidden.
pub const CAPTION_FADE_OFFSET: f32 = 20.0;

/// Pending caption text transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapPhase {
    /// The displayed caption matches the current slide.
    Idle,
    /// The caption is hidden; at `swap_at` the text changes to `target`
    /// and becomes visible again.
    FadingOut { target: usize, swap_at: Instant },
}

/// User interactions with the slideshow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// An indicator dot was pressed.
    IndicatorPressed(usize),
    /// The cursor entered the hero region.
    HoverEntered,
    /// The cursor left the hero region.
    HoverExited,
}

/// Slideshow rotation state.
#[derive(Debug, Clone)]
pub struct State {
    deck: SlideDeck,
    interval: Duration,
    hover_pause_enabled: bool,
    current: usize,
    /// Index of the caption currently shown (lags `current` during a swap).
    displayed: usize,
    swap: SwapPhase,
    next_advance_at: Option<Instant>,
}

impl State {
    /// Creates a stopped slideshow; call [`State::start`] to begin rotating.
    #[must_use]
    pub fn new(deck: SlideDeck, interval: Duration, hover_pause_enabled: bool) -> Self {
        Self {
            deck,
            interval,
            hover_pause_enabled,
            current: 0,
            displayed: 0,
            swap: SwapPhase::Idle,
            next_advance_at: None,
        }
    }

    #[must_use]
    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Exactly one index is active at any time: the current one.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }

    /// The caption whose text is currently on screen.
    #[must_use]
    pub fn displayed_caption(&self) -> Option<&Caption> {
        self.deck.caption(self.displayed)
    }

    /// Whether the caption text is visible (not mid-swap).
    #[must_use]
    pub fn caption_visible(&self) -> bool {
        self.swap == SwapPhase::Idle
    }

    /// Caption opacity derived from the swap phase.
    #[must_use]
    pub fn caption_opacity(&self) -> f32 {
        if self.caption_visible() { 1.0 } else { 0.0 }
    }

    /// Vertical caption offset derived from the swap phase.
    #[must_use]
    pub fn caption_offset(&self) -> f32 {
        if self.caption_visible() {
            0.0
        } else {
            CAPTION_FADE_OFFSET
        }
    }

    /// Whether automatic rotation is scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next_advance_at.is_some()
    }

    #[must_use]
    pub fn hover_pause_enabled(&self) -> bool {
        self.hover_pause_enabled
    }

    #[must_use]
    pub fn next_advance_at(&self) -> Option<Instant> {
        self.next_advance_at
    }

    /// Whether the periodic tick is needed to make progress.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.is_running() || self.swap != SwapPhase::Idle
    }

    /// Begins automatic rotation.
    pub fn start(&mut self, now: Instant) {
        self.restart(now);
    }

    /// Reschedules the next automatic advance to a full interval from `now`,
    /// replacing any previously scheduled advance. This is the only
    /// reschedule path.
    pub fn restart(&mut self, now: Instant) {
        self.next_advance_at = Some(now + self.interval);
    }

    /// Cancels automatic rotation. A pending caption swap still completes.
    pub fn pause(&mut self) {
        self.next_advance_at = None;
    }

    /// Activates the slide at `index`. The current index is updated
    /// unconditionally; the caption swap is scheduled only when there is a
    /// caption to show.
    pub fn go_to(&mut self, index: usize, now: Instant) {
        self.current = index;
        if !self.deck.is_empty() {
            self.swap = SwapPhase::FadingOut {
                target: index,
                swap_at: now + CAPTION_SWAP_DELAY,
            };
        }
    }

    /// Advances to the next slide, wrapping at the end. A no-op on an empty
    /// deck.
    pub fn advance(&mut self, now: Instant) {
        if self.deck.is_empty() {
            return;
        }
        let next = (self.current + 1) % self.deck.len();
        self.go_to(next, now);
    }

    /// Resolves due work: completes a pending caption swap, then performs a
    /// due automatic advance and schedules the next one.
    pub fn tick(&mut self, now: Instant) {
        if let SwapPhase::FadingOut { target, swap_at } = self.swap {
            if now >= swap_at {
                self.displayed = target;
                self.swap = SwapPhase::Idle;
            }
        }

        if let Some(deadline) = self.next_advance_at {
            if now >= deadline {
                self.advance(now);
                self.next_advance_at = Some(now + self.interval);
            }
        }
    }

    /// Handles a user interaction.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::IndicatorPressed(index) => {
                let now = Instant::now();
                self.go_to(index, now);
                // Manual navigation always grants a full interval before the
                // next automatic advance.
                self.restart(now);
            }
            Message::HoverEntered => {
                if self.hover_pause_enabled {
                    self.pause();
                }
            }
            Message::HoverExited => {
                if self.hover_pause_enabled {
                    self.restart(Instant::now());
                }
            }
        }
    }
}
