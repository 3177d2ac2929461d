//! Device information shown on the info pages

/// Values displayed on the four device info pages
pub trait DeviceInfo {
    /// Main firmware version, e.g. `"1.9.3"`
    fn firmware_version(&self) -> &str;

    /// Bluetooth module firmware version, if the module reported one
    fn ble_version(&self) -> Option<&str>;

    /// Secure element version, if present
    fn se_version(&self) -> Option<&str>;

    /// Device UUID as printed
    fn device_id(&self) -> &str;

    /// Bluetooth radio state, `None` when the device has no radio
    fn ble_enabled(&self) -> Option<bool>;

    /// Keys are held in the secure element
    fn uses_se(&self) -> bool;

    /// Secure element serial number, if present
    fn serial_number(&self) -> Option<&str>;

    /// Fastpay skips the PIN check
    fn fastpay_skip_pin(&self) -> bool;

    /// Fastpay skips the button confirmation
    fn fastpay_skip_confirm(&self) -> bool;

    /// Remaining fastpay uses
    fn fastpay_remaining_times(&self) -> u32;

    /// Fastpay per-payment limit, already formatted (e.g. `"0.001 BTC"`)
    fn fastpay_quota(&self) -> &str;

    /// Bluetooth advertising name
    fn ble_name(&self) -> &str;
}
