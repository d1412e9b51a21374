// SPDX-License-Identifier: MPL-2.0
//! `iced_vitrine` is a promotional showcase kiosk built with the Iced GUI
//! framework.
//!
//! It rotates a hero slideshow of boutique promotions and validates a
//! (simulated) contact form, demonstrating timer-driven state machines kept
//! free of the view layer so both behaviors are unit-testable without a
//! rendering environment.

pub mod app;
pub mod config;
pub mod contact;
pub mod diagnostics;
pub mod error;
pub mod slideshow;
pub mod ui;
