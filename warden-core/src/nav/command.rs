//! Render commands produced by the state machine

use super::home::HomeView;
use super::info::InfoPageView;
use crate::dialog::DialogDescriptor;
use crate::traits::{RenderError, Renderer};

/// How the new screen replaces the old one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Animated swipe
    Swipe,
    /// Plain clear and redraw
    Clear,
}

/// What to paint after a tick
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderCommand {
    /// Nothing changed on screen
    Unchanged,
    /// Home screen
    Home {
        transition: Transition,
        view: HomeView,
    },
    /// Device info page
    InfoPage(InfoPageView),
    /// Screensaver
    Screensaver,
    /// Confirmation dialog
    Dialog {
        dialog: DialogDescriptor,
        transition: Transition,
    },
    /// Blank panel before power-off
    Blank,
}

impl RenderCommand {
    /// No repaint needed
    pub fn is_unchanged(&self) -> bool {
        matches!(self, RenderCommand::Unchanged)
    }

    /// Paint the command and push it to the panel
    pub fn dispatch<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<(), RenderError> {
        match self {
            RenderCommand::Unchanged => return Ok(()),
            RenderCommand::Home { transition, view } => renderer.render_home(view, *transition)?,
            RenderCommand::InfoPage(view) => renderer.render_info_page(view)?,
            RenderCommand::Screensaver => renderer.render_screensaver()?,
            RenderCommand::Dialog { dialog, transition } => {
                renderer.render_dialog(dialog, *transition)?
            }
            RenderCommand::Blank => renderer.clear_display()?,
        }
        renderer.refresh_display()
    }
}
