//! Navigation timing configuration
//!
//! Board-agnostic settings, optionally persisted as postcard binary data.
//! The auto-lock delay is not part of this: it is user-adjustable and read
//! from the [`ConfigStore`](crate::traits::ConfigStore) on every tick.

pub mod types;

pub use types::*;
