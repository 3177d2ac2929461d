//! Transport/tamper status and time source

use crate::Millis;

/// Result of the periodic 1 Hz status poll
pub trait StatusMonitor {
    /// A host transport (USB/NFC) is connected
    fn transport_present(&self) -> bool;

    /// Tamper or unexpected disconnect was detected since the last poll
    fn tamper_or_disconnect_detected(&mut self) -> bool;
}

/// Monotonic millisecond clock
pub trait Clock {
    /// Milliseconds since boot; never decreases
    fn now_ms(&self) -> Millis;
}
