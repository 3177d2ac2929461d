//! Screen identity

use crate::config::INFO_PAGE_COUNT;

/// Device info page number, always within `1..=4`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InfoPage(u8);

impl InfoPage {
    /// First info page
    pub const FIRST: InfoPage = InfoPage(1);
    /// Last info page
    pub const LAST: InfoPage = InfoPage(INFO_PAGE_COUNT);

    /// Create a page number, clamping out-of-range values to the nearest bound
    pub const fn new(number: u8) -> Self {
        if number < 1 {
            Self::FIRST
        } else if number > INFO_PAGE_COUNT {
            Self::LAST
        } else {
            InfoPage(number)
        }
    }

    /// Page number (1-based)
    pub const fn number(self) -> u8 {
        self.0
    }
}

/// Screen currently shown
///
/// Exactly one screen is current at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenId {
    /// Home screen (logo or label plus banners)
    Home,
    /// Device info page
    InfoPage(InfoPage),
    /// Blank screen after inactivity while a transport is connected
    Screensaver,
    /// A confirmation dialog owned by the caller
    DialogActive,
    /// Session cleared and power-off requested
    Locked,
}

impl ScreenId {
    /// Home or screensaver: no operation can be waiting for the user
    pub fn is_idle(self) -> bool {
        matches!(self, ScreenId::Home | ScreenId::Screensaver)
    }

    /// Info page number, if on an info page
    pub fn info_page(self) -> Option<InfoPage> {
        match self {
            ScreenId::InfoPage(page) => Some(page),
            _ => None,
        }
    }
}
