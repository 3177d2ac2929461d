//! Device info pages

use core::fmt::Write;

use heapless::{String, Vec};

use super::screen::InfoPage;
use crate::dialog::descriptor::push_truncated;
use crate::traits::{ConfigStore, DeviceInfo};

/// Rows per info page
pub const MAX_INFO_ROWS: usize = 6;

/// Longest value shown in an info row
pub const INFO_VALUE_LEN: usize = 32;

/// One `label: value` row
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InfoRow {
    pub label: &'static str,
    pub value: String<INFO_VALUE_LEN>,
}

impl InfoRow {
    fn new(label: &'static str, value: &str) -> Self {
        let mut row = Self {
            label,
            value: String::new(),
        };
        push_truncated(&mut row.value, value);
        row
    }

    fn flag(label: &'static str, set: bool) -> Self {
        Self::new(label, if set { "Yes" } else { "No" })
    }

    /// Value as a string slice
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Content of one info page
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InfoPageView {
    pub page: InfoPage,
    /// Centered heading, if the page has one
    pub title: Option<&'static str>,
    pub rows: Vec<InfoRow, MAX_INFO_ROWS>,
}

impl InfoPageView {
    /// Collect the values shown on `page`
    pub fn build<P: DeviceInfo + ConfigStore + ?Sized>(page: InfoPage, platform: &P) -> Self {
        let mut view = Self {
            page,
            title: None,
            rows: Vec::new(),
        };

        match page.number() {
            1 => {
                view.push(InfoRow::new("Firmware version", platform.firmware_version()));
                if let Some(ble) = platform.ble_version() {
                    view.push(InfoRow::new("BLE version", ble));
                }
                if let Some(se) = platform.se_version() {
                    view.push(InfoRow::new("SE version", se));
                }
                view.push(InfoRow::new("Device ID", platform.device_id()));
            }
            2 => {
                if let Some(enabled) = platform.ble_enabled() {
                    view.push(InfoRow::flag("BLE enable", enabled));
                }
                view.push(InfoRow::flag("Use SE", platform.uses_se()));
                view.push(InfoRow::new("Label", platform.label().unwrap_or("")));
                if let Some(sn) = platform.serial_number() {
                    view.push(InfoRow::new("SN", sn));
                }
                let mut delay: String<INFO_VALUE_LEN> = String::new();
                let _ = write!(delay, "{} s", platform.auto_lock_delay_ms() / 1000);
                view.push(InfoRow::new("Auto-Lock & Shutdown", &delay));
            }
            3 => {
                view.title = Some("Fastpay settings");
                view.push(InfoRow::flag("Skip pin check", platform.fastpay_skip_pin()));
                view.push(InfoRow::flag(
                    "Skip button confirm",
                    platform.fastpay_skip_confirm(),
                ));
                let mut times: String<INFO_VALUE_LEN> = String::new();
                let _ = write!(times, "{}", platform.fastpay_remaining_times());
                view.push(InfoRow::new("Remaining times", &times));
                view.push(InfoRow::new("Quota", platform.fastpay_quota()));
            }
            _ => {
                view.push(InfoRow::new("BLE Name", platform.ble_name()));
            }
        }
        view
    }

    fn push(&mut self, row: InfoRow) {
        // At most five rows are built per page
        let _ = self.rows.push(row);
    }

    /// Row whose label is `label`
    pub fn row(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.value())
    }
}
