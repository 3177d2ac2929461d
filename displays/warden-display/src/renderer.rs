//! Text-mode renderer
//!
//! Lays out the core's render requests on a [`Screen`] and pushes it to a
//! [`DisplayBackend`] on refresh.
//!
//! Dialog layout:
//! - row 0: icon marker and title
//! - rows 1-6: content lines
//! - row 7: buttons, confirm on the right (inverted)

use heapless::String;

use warden_core::dialog::{DialogDescriptor, Icon};
use warden_core::nav::{HomeBanner, HomeView, InfoPageView, Transition};
use warden_core::traits::{RenderError, Renderer};

use crate::backend::DisplayBackend;
use crate::screen::{Align, Screen, LINE_LEN, SCREEN_COLS, SCREEN_ROWS};

/// Row holding the dialog buttons and the home banner
const BOTTOM_ROW: usize = SCREEN_ROWS - 1;

/// Row of the label/logo on the home screen
const HOME_LABEL_ROW: usize = 3;

/// Text shown in place of the logo
const LOGO_TEXT: &str = "WARDEN";

/// Renders core screens through a character display backend
pub struct TextRenderer<B: DisplayBackend> {
    backend: B,
    screen: Screen,
    swipe_pending: bool,
}

impl<B: DisplayBackend> TextRenderer<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            screen: Screen::new(),
            swipe_pending: false,
        }
    }

    /// Screen buffer as last laid out
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Access the backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Give the backend back
    pub fn into_backend(self) -> B {
        self.backend
    }

    fn begin(&mut self, transition: Transition) {
        self.screen.clear();
        self.swipe_pending = transition == Transition::Swipe;
    }

    fn layout_buttons(&mut self, dialog: &DialogDescriptor) {
        let confirm = dialog.confirm.as_str();
        let confirm_len = confirm.chars().count().min(SCREEN_COLS);
        let placed = match dialog.cancel {
            Some(cancel) => self.screen.set_pair(BOTTOM_ROW, cancel.as_str(), confirm),
            None => false,
        };
        if !placed {
            self.screen.set_aligned(BOTTOM_ROW, confirm, Align::Right);
        }
        self.screen
            .set_highlight(BOTTOM_ROW, (SCREEN_COLS - confirm_len) as u8, SCREEN_COLS as u8);
    }

    /// Lay out `label: value`, returning the next free row
    fn layout_info_row(
        &mut self,
        row: usize,
        label: &str,
        value: &str,
    ) -> Result<usize, RenderError> {
        let mut caption: String<SCREEN_COLS> = String::new();
        for ch in label.chars().chain(core::iter::once(':')) {
            if caption.push(ch).is_err() {
                break;
            }
        }
        if value.is_empty() {
            self.screen.set_line(row, &caption);
            return Ok(row + 1);
        }
        if self.screen.set_pair(row, &caption, value) {
            return Ok(row + 1);
        }
        // Too long for one row: value goes right-aligned below
        if row + 1 >= SCREEN_ROWS {
            return Err(RenderError::BufferOverflow);
        }
        self.screen.set_line(row, &caption);
        self.screen.set_aligned(row + 1, value, Align::Right);
        Ok(row + 2)
    }
}

fn icon_marker(icon: Icon) -> &'static str {
    match icon {
        Icon::Question => "? ",
        Icon::Info => "i ",
        Icon::Warning => "! ",
    }
}

fn banner_text(banner: HomeBanner) -> &'static str {
    match banner {
        HomeBanner::NotActivated => "Not Activated",
        HomeBanner::Seedless => "SEEDLESS",
        HomeBanner::BackupFailed => "BACKUP FAILED!",
        HomeBanner::NeedsBackup => "Needs Backup",
    }
}

impl<B: DisplayBackend> Renderer for TextRenderer<B> {
    fn render_dialog(
        &mut self,
        dialog: &DialogDescriptor,
        transition: Transition,
    ) -> Result<(), RenderError> {
        self.begin(transition);

        let mut heading: String<LINE_LEN> = String::new();
        if let Some(icon) = dialog.icon {
            let _ = heading.push_str(icon_marker(icon));
        }
        for ch in dialog.title().unwrap_or("").chars() {
            if heading.push(ch).is_err() {
                break;
            }
        }
        self.screen.set_line(0, &heading);

        for (i, line) in dialog.lines.iter().enumerate() {
            if let Some(line) = line {
                self.screen.set_line(i + 1, line);
            }
        }

        self.layout_buttons(dialog);
        Ok(())
    }

    fn render_home(&mut self, home: &HomeView, transition: Transition) -> Result<(), RenderError> {
        self.begin(transition);
        let label = home.label().unwrap_or(LOGO_TEXT);
        self.screen.set_aligned(HOME_LABEL_ROW, label, Align::Center);

        if let Some(banner) = home.banner {
            self.screen
                .set_aligned(BOTTOM_ROW, banner_text(banner), Align::Center);
            if matches!(banner, HomeBanner::Seedless | HomeBanner::BackupFailed) {
                self.screen.set_highlight(BOTTOM_ROW, 0, SCREEN_COLS as u8);
            }
        }
        Ok(())
    }

    fn render_info_page(&mut self, page: &InfoPageView) -> Result<(), RenderError> {
        self.begin(Transition::Clear);

        let mut row = 0;
        if let Some(title) = page.title {
            self.screen.set_aligned(0, title, Align::Center);
            self.screen.set_highlight(0, 0, SCREEN_COLS as u8);
            row = 1;
        }
        for info in &page.rows {
            if row >= SCREEN_ROWS {
                return Err(RenderError::BufferOverflow);
            }
            row = self.layout_info_row(row, info.label, info.value())?;
        }
        Ok(())
    }

    fn render_screensaver(&mut self) -> Result<(), RenderError> {
        self.begin(Transition::Clear);
        Ok(())
    }

    fn clear_display(&mut self) -> Result<(), RenderError> {
        self.screen.clear();
        Ok(())
    }

    fn refresh_display(&mut self) -> Result<(), RenderError> {
        if !self.backend.is_ready() {
            return Err(RenderError::NotInitialized);
        }
        if !self.screen.is_dirty() {
            return Ok(());
        }

        self.backend.clear()?;
        if self.swipe_pending {
            self.backend.swipe()?;
            self.swipe_pending = false;
        }
        for (row, line) in self.screen.lines().enumerate() {
            if !line.is_empty() {
                self.backend.draw_text(row as u8, 0, line)?;
            }
        }
        for row in 0..SCREEN_ROWS {
            if let Some((start, end)) = self.screen.get_highlight(row) {
                self.backend.invert_region(row as u8, start, end)?;
            }
        }
        self.backend.flush()?;
        self.screen.mark_clean();
        Ok(())
    }
}
