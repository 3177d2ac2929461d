//! Renderer trait
//!
//! The renderer paints what the core decides. It owns fonts, bitmaps,
//! localization and the actual display transfer.

use crate::dialog::DialogDescriptor;
use crate::nav::{HomeView, InfoPageView, Transition};

/// Errors that can occur while rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    /// Communication with the display failed
    Communication,
    /// Display not initialized
    NotInitialized,
    /// Content did not fit the display buffer
    BufferOverflow,
}

/// Screen painter
pub trait Renderer {
    /// Paint a confirmation dialog
    fn render_dialog(
        &mut self,
        dialog: &DialogDescriptor,
        transition: Transition,
    ) -> Result<(), RenderError>;

    /// Paint the home screen
    fn render_home(&mut self, home: &HomeView, transition: Transition) -> Result<(), RenderError>;

    /// Paint one of the device info pages
    fn render_info_page(&mut self, page: &InfoPageView) -> Result<(), RenderError>;

    /// Paint the screensaver (blank screen)
    fn render_screensaver(&mut self) -> Result<(), RenderError>;

    /// Clear the frame buffer
    fn clear_display(&mut self) -> Result<(), RenderError>;

    /// Push the frame buffer to the panel
    fn refresh_display(&mut self) -> Result<(), RenderError>;
}
