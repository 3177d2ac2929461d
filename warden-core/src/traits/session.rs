//! Session and power control

/// Cancellation and wipe requests issued by the navigation state machine
///
/// All calls are fire-and-forget: the state machine never waits for an
/// acknowledgement.
pub trait SessionControl {
    /// Cancel an in-flight signing operation, if any
    fn abort_signing(&mut self);

    /// Cancel an in-flight seed recovery, if any
    fn abort_recovery(&mut self);

    /// Erase in-memory session secrets
    fn clear_session(&mut self, wipe_keys: bool);

    /// Power the device down
    fn power_off(&mut self);
}
