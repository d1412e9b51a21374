// SPDX-License-Identifier: MPL-2.0
//! Hero slideshow domain: the promotional slide deck and the rotation
//! state machine.
//!
//! The state machine in [`rotation`] is deliberately free of any Iced
//! imports; it operates on plain data and injected [`std::time::Instant`]
//! values so rotation behavior is unit-testable without a rendering
//! environment. The view layer in [`crate::ui::home`] is a projection of
//! this state.

pub mod deck;
pub mod rotation;

pub use deck::{Caption, SlideDeck};
pub use rotation::{Message, State, SwapPhase, CAPTION_SWAP_DELAY};
