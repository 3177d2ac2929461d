//! Persistent configuration store

/// Read access to the persisted device configuration
///
/// Values may change at runtime (e.g. a new auto-lock delay), so they are
/// read on demand rather than cached.
pub trait ConfigStore {
    /// Inactivity delay before the home screen locks
    fn auto_lock_delay_ms(&self) -> u32;

    /// Device has a seed
    fn is_initialized(&self) -> bool;

    /// Device was set up without a seed backup
    fn no_backup(&self) -> bool;

    /// A backup was started but never finished
    fn unfinished_backup(&self) -> bool;

    /// Device still needs a backup
    fn needs_backup(&self) -> bool;

    /// User-assigned device label, if any
    fn label(&self) -> Option<&str>;
}
