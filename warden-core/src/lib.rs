//! Board-agnostic confirmation and navigation engine for the wallet firmware
//!
//! Every cryptographic action the device performs is gated on a confirmation
//! dialog built here, and the same crate decides from elapsed time and
//! transport state when to abort in-flight operations and wipe the session.
//!
//! - Text shaping (message pager, derivation-path humanizer)
//! - Dialog descriptors and the confirmation dialog catalogue
//! - Navigation state machine (home, info pages, screensaver, auto-lock)
//! - Timing configuration
//! - Collaborator traits (renderer, session control, config store, coins)
//!
//! Nothing here paints pixels or touches storage; those concerns are reached
//! through the traits in [`traits`].

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod dialog;
pub mod nav;
pub mod text;
pub mod traits;

/// Monotonic milliseconds since boot
pub type Millis = u64;
