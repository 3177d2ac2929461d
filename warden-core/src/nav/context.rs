//! Navigation context: current screen plus timers

use super::screen::{InfoPage, ScreenId};
use crate::config::INFO_PAGE_COUNT;
use crate::Millis;

/// Mutable navigation state
///
/// Created once at UI startup and reset (never recreated) on lock or
/// session clear. Only the [`Navigator`](super::Navigator) writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NavContext {
    pub(super) current: ScreenId,
    pub(super) last_activity_ms: Millis,
    pub(super) info_display_started_ms: Millis,
    pub(super) pending_info_page: u8,
    pub(super) last_logo_poll_ms: Millis,
}

impl NavContext {
    /// Home screen with every timer started at `now`
    pub const fn new(now: Millis) -> Self {
        Self {
            current: ScreenId::Home,
            last_activity_ms: now,
            info_display_started_ms: now,
            pending_info_page: 0,
            last_logo_poll_ms: now,
        }
    }

    /// Back to the startup state
    pub fn reset(&mut self, now: Millis) {
        *self = Self::new(now);
    }

    /// Current screen
    pub fn current(&self) -> ScreenId {
        self.current
    }

    /// Last button edge or entry to the home screen
    pub fn last_activity_ms(&self) -> Millis {
        self.last_activity_ms
    }

    /// When the current info page was shown
    pub fn info_display_started_ms(&self) -> Millis {
        self.info_display_started_ms
    }

    /// Selected info page, `0` when none
    pub fn pending_info_page(&self) -> u8 {
        self.pending_info_page
    }

    /// Last run of the status poll
    pub fn last_logo_poll_ms(&self) -> Millis {
        self.last_logo_poll_ms
    }

    /// Select an info page, clamping to `0..=4`
    pub(super) fn set_pending_info_page(&mut self, page: u8) {
        self.pending_info_page = page.min(INFO_PAGE_COUNT);
    }

    /// Show `page` and restart the info timer
    pub(super) fn show_info_page(&mut self, page: InfoPage, now: Millis) {
        self.current = ScreenId::InfoPage(page);
        self.set_pending_info_page(page.number());
        self.info_display_started_ms = now;
    }

    /// Show home; counts as activity
    pub(super) fn show_home(&mut self, now: Millis) {
        self.current = ScreenId::Home;
        self.pending_info_page = 0;
        self.last_activity_ms = now;
    }
}
