//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of device info pages
pub const INFO_PAGE_COUNT: u8 = 4;

/// Default time an info page stays up without input
pub const DEFAULT_INFO_PAGE_TIMEOUT_MS: u32 = 10_000;

/// Default interval of the transport/tamper status poll
pub const DEFAULT_STATUS_POLL_INTERVAL_MS: u32 = 1_000;

/// Upper bound for an encoded [`NavConfig`]
pub const NAV_CONFIG_MAX_SIZE: usize = 16;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A timeout or interval is zero
    InvalidTimeout,
    /// Info page count outside `1..=4`
    InvalidPageCount,
    /// Serialization failed (buffer too small)
    Serialize,
    /// Deserialization failed
    Deserialize,
}

/// Navigation timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavConfig {
    /// Info pages revert to home after this long
    pub info_page_timeout_ms: u32,
    /// Interval of the status poll while on the home screen
    pub status_poll_interval_ms: u32,
    /// Number of info pages reachable from home
    pub info_page_count: u8,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            info_page_timeout_ms: DEFAULT_INFO_PAGE_TIMEOUT_MS,
            status_poll_interval_ms: DEFAULT_STATUS_POLL_INTERVAL_MS,
            info_page_count: INFO_PAGE_COUNT,
        }
    }
}

impl NavConfig {
    /// Check the configuration for values the state machine cannot use
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.info_page_timeout_ms == 0 || self.status_poll_interval_ms == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        if !(1..=INFO_PAGE_COUNT).contains(&self.info_page_count) {
            return Err(ConfigError::InvalidPageCount);
        }
        Ok(())
    }

    /// Decode and validate a postcard-encoded configuration
    #[cfg(feature = "serde")]
    pub fn from_postcard(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;
        config.validate()?;
        Ok(config)
    }

    /// Encode into `buffer`, returning the number of bytes written
    #[cfg(feature = "serde")]
    pub fn to_postcard(&self, buffer: &mut [u8]) -> Result<usize, ConfigError> {
        let bytes = postcard::to_slice(self, buffer).map_err(|_| ConfigError::Serialize)?;
        Ok(bytes.len())
    }
}
