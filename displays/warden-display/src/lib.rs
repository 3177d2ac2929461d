//! Text-mode display support for Warden
//!
//! This crate provides:
//! - `DisplayBackend` trait for character-addressed panels
//! - `Screen`, a character buffer with per-row inversion
//! - `TextRenderer`, which lays out the core's dialogs, home screen and
//!   info pages on a `Screen` and pushes it to any backend
//! - `InputSource` and `ButtonTracker` for turning button levels into the
//!   release edges the navigator consumes
//!
//! # Architecture
//!
//! `warden-core` decides what goes on screen and hands it over through its
//! `Renderer` trait. `TextRenderer` implements that trait on top of a
//! `DisplayBackend`, so the hardware driver only needs to place strings
//! and flush.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod input;
pub mod renderer;
pub mod screen;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use input::{ButtonLevels, ButtonTracker, InputSource};
pub use renderer::TextRenderer;
pub use screen::{Align, Screen, SCREEN_COLS, SCREEN_ROWS};
