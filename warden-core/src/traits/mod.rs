//! Collaborator traits
//!
//! These traits define the interface between the navigation/dialog logic
//! and the rest of the firmware (display, session, storage, coin tables).

pub mod coin;
pub mod config_store;
pub mod device_info;
pub mod renderer;
pub mod session;
pub mod status;

pub use coin::{AmountFormatter, CoinInfo, CoinRegistry};
pub use config_store::ConfigStore;
pub use device_info::DeviceInfo;
pub use renderer::{RenderError, Renderer};
pub use session::SessionControl;
pub use status::{Clock, StatusMonitor};

/// Everything the navigation state machine calls during a tick
pub trait Platform: SessionControl + StatusMonitor + ConfigStore + DeviceInfo {}

impl<T: SessionControl + StatusMonitor + ConfigStore + DeviceInfo> Platform for T {}
