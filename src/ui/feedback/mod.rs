// SPDX-License-Identifier: MPL-2.0
//! Transient feedback banners for the contact form.
//!
//! A banner is either an error or a success confirmation. At most one banner
//! of each kind is visible: pushing a new one replaces any prior banner of
//! the same kind. Banners remove themselves after a fixed timeout (5 s for
//! errors, 8 s for successes) and offer no manual dismissal.
//!
//! # Components
//!
//! - [`banner`] - the `Banner` record and its `Kind`
//! - [`stack`] - lifecycle: replace-on-push and tick-driven expiry
//! - [`card`] - the rendered banner widget

pub mod banner;
pub mod card;
pub mod stack;

pub use banner::{Banner, Kind};
pub use stack::Stack;
