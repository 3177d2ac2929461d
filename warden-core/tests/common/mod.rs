//! Recording fakes for the collaborator traits

#![allow(dead_code)]

use std::cell::Cell;

use warden_core::dialog::DialogDescriptor;
use warden_core::nav::{HomeView, InfoPageView, Transition};
use warden_core::traits::{
    Clock, CoinInfo, CoinRegistry, ConfigStore, DeviceInfo, RenderError, Renderer,
    SessionControl, StatusMonitor,
};
use warden_core::Millis;

/// Session side effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCall {
    AbortSigning,
    AbortRecovery,
    ClearSession { wipe_keys: bool },
    PowerOff,
}

/// Platform fake recording every session call
#[derive(Debug)]
pub struct RecordingPlatform {
    pub calls: Vec<SessionCall>,
    pub transport: bool,
    /// Result of the next status poll, cleared once read
    pub tamper: bool,
    pub status_polls: u32,
    pub auto_lock_delay_ms: u32,
    pub initialized: bool,
    pub no_backup: bool,
    pub needs_backup: bool,
    pub label: Option<String>,
}

impl Default for RecordingPlatform {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            transport: true,
            tamper: false,
            status_polls: 0,
            auto_lock_delay_ms: 60_000,
            initialized: true,
            no_backup: false,
            needs_backup: false,
            label: Some("Test wallet".into()),
        }
    }
}

impl RecordingPlatform {
    pub fn count(&self, call: SessionCall) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }

    pub fn aborts(&self) -> (usize, usize) {
        (
            self.count(SessionCall::AbortSigning),
            self.count(SessionCall::AbortRecovery),
        )
    }
}

impl SessionControl for RecordingPlatform {
    fn abort_signing(&mut self) {
        self.calls.push(SessionCall::AbortSigning);
    }

    fn abort_recovery(&mut self) {
        self.calls.push(SessionCall::AbortRecovery);
    }

    fn clear_session(&mut self, wipe_keys: bool) {
        self.calls.push(SessionCall::ClearSession { wipe_keys });
    }

    fn power_off(&mut self) {
        self.calls.push(SessionCall::PowerOff);
    }
}

impl StatusMonitor for RecordingPlatform {
    fn transport_present(&self) -> bool {
        self.transport
    }

    fn tamper_or_disconnect_detected(&mut self) -> bool {
        self.status_polls += 1;
        std::mem::take(&mut self.tamper)
    }
}

impl ConfigStore for RecordingPlatform {
    fn auto_lock_delay_ms(&self) -> u32 {
        self.auto_lock_delay_ms
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn no_backup(&self) -> bool {
        self.no_backup
    }

    fn unfinished_backup(&self) -> bool {
        false
    }

    fn needs_backup(&self) -> bool {
        self.needs_backup
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl DeviceInfo for RecordingPlatform {
    fn firmware_version(&self) -> &str {
        "1.9.3"
    }

    fn ble_version(&self) -> Option<&str> {
        Some("1.2.0")
    }

    fn se_version(&self) -> Option<&str> {
        None
    }

    fn device_id(&self) -> &str {
        "4F2A9C0B7E1D3A5B6C8D9E0F"
    }

    fn ble_enabled(&self) -> Option<bool> {
        Some(true)
    }

    fn uses_se(&self) -> bool {
        false
    }

    fn serial_number(&self) -> Option<&str> {
        None
    }

    fn fastpay_skip_pin(&self) -> bool {
        false
    }

    fn fastpay_skip_confirm(&self) -> bool {
        false
    }

    fn fastpay_remaining_times(&self) -> u32 {
        10
    }

    fn fastpay_quota(&self) -> &str {
        "0.0001 BTC"
    }

    fn ble_name(&self) -> &str {
        "K4F2A"
    }
}

/// Renderer call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCall {
    Dialog(Transition),
    Home(Transition),
    InfoPage(u8),
    Screensaver,
    Clear,
    Refresh,
}

/// Renderer fake recording every call; optionally failing
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<RenderCall>,
    pub last_home: Option<HomeView>,
    pub fail_with: Option<RenderError>,
}

impl RecordingRenderer {
    fn record(&mut self, call: RenderCall) -> Result<(), RenderError> {
        if let Some(e) = self.fail_with {
            return Err(e);
        }
        self.calls.push(call);
        Ok(())
    }
}

impl Renderer for RecordingRenderer {
    fn render_dialog(
        &mut self,
        _dialog: &DialogDescriptor,
        transition: Transition,
    ) -> Result<(), RenderError> {
        self.record(RenderCall::Dialog(transition))
    }

    fn render_home(&mut self, home: &HomeView, transition: Transition) -> Result<(), RenderError> {
        self.last_home = Some(home.clone());
        self.record(RenderCall::Home(transition))
    }

    fn render_info_page(&mut self, page: &InfoPageView) -> Result<(), RenderError> {
        self.record(RenderCall::InfoPage(page.page.number()))
    }

    fn render_screensaver(&mut self) -> Result<(), RenderError> {
        self.record(RenderCall::Screensaver)
    }

    fn clear_display(&mut self) -> Result<(), RenderError> {
        self.record(RenderCall::Clear)
    }

    fn refresh_display(&mut self) -> Result<(), RenderError> {
        self.record(RenderCall::Refresh)
    }
}

/// Manually advanced clock
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Millis>,
}

impl ManualClock {
    pub fn at(now: Millis) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn advance(&self, ms: Millis) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> Millis {
        self.now.get()
    }
}

/// Small coin table: BTC, LTC, DOGE
pub struct TestCoins;

impl CoinRegistry for TestCoins {
    fn lookup_coin_by_slip44(&self, coin_type: u32) -> Option<CoinInfo> {
        match coin_type {
            0 => Some(CoinInfo {
                ticker: "BTC",
                supports_segwit: true,
                has_bech32_prefix: true,
                cashaddr_prefix: None,
            }),
            2 => Some(CoinInfo {
                ticker: "LTC",
                supports_segwit: true,
                has_bech32_prefix: true,
                cashaddr_prefix: None,
            }),
            3 => Some(CoinInfo {
                ticker: "DOGE",
                supports_segwit: false,
                has_bech32_prefix: false,
                cashaddr_prefix: None,
            }),
            _ => None,
        }
    }
}
