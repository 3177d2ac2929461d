//! Display backend trait
//!
//! Defines the interface a panel driver implements for the text renderer.

use warden_core::traits::RenderError;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
    /// Buffer overflow
    BufferOverflow,
}

impl From<DisplayError> for RenderError {
    fn from(e: DisplayError) -> Self {
        match e {
            DisplayError::Communication => RenderError::Communication,
            DisplayError::NotInitialized => RenderError::NotInitialized,
            DisplayError::InvalidCoordinates | DisplayError::BufferOverflow => {
                RenderError::BufferOverflow
            }
        }
    }
}

/// Display backend trait
///
/// Hardware-agnostic interface for character-addressed rendering.
pub trait DisplayBackend {
    /// Clear the entire display
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text at the specified row and column
    ///
    /// - `row`: Row number (0-based)
    /// - `col`: Column number in characters (0-based)
    /// - `text`: Text to display
    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;

    /// Invert a region on the specified row (buttons, banners)
    ///
    /// - `row`: Row number
    /// - `start_col`: Starting column
    /// - `end_col`: Ending column (exclusive)
    fn invert_region(&mut self, row: u8, start_col: u8, end_col: u8) -> Result<(), DisplayError>;

    /// Play the swipe animation that replaces the previous screen
    ///
    /// Panels without animation keep the default, which does nothing.
    fn swipe(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    /// Flush buffered content to the display
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Display dimensions as (columns, rows) in character units
    fn dimensions(&self) -> (u8, u8);

    /// Check if the display is ready
    fn is_ready(&self) -> bool;
}
