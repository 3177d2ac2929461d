//! Home screen content

use heapless::String;

use crate::dialog::descriptor::push_truncated;
use crate::traits::ConfigStore;

/// Longest device label shown on the home screen
pub const MAX_LABEL_LEN: usize = 32;

/// Status banner along the bottom of the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HomeBanner {
    /// No seed on the device
    NotActivated,
    /// Set up without a seed backup
    Seedless,
    /// Backup started but never finished
    BackupFailed,
    /// Backup still to do
    NeedsBackup,
}

/// What the home screen shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HomeView {
    /// Device label; `None` shows the logo
    pub label: Option<String<MAX_LABEL_LEN>>,
    /// Backup/activation banner
    pub banner: Option<HomeBanner>,
}

impl HomeView {
    /// Read label and backup state from the configuration store
    pub fn from_config<C: ConfigStore + ?Sized>(config: &C) -> Self {
        let initialized = config.is_initialized();

        let label = config
            .label()
            .filter(|l| initialized && !l.is_empty())
            .map(|l| {
                let mut label = String::new();
                push_truncated(&mut label, l);
                label
            });

        let banner = if !initialized {
            Some(HomeBanner::NotActivated)
        } else if config.no_backup() {
            Some(HomeBanner::Seedless)
        } else if config.unfinished_backup() {
            Some(HomeBanner::BackupFailed)
        } else if config.needs_backup() {
            Some(HomeBanner::NeedsBackup)
        } else {
            None
        };

        Self { label, banner }
    }

    /// Label as a string slice
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}
