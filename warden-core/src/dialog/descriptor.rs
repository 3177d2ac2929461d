//! Dialog descriptor and builder
//!
//! A descriptor is the language-neutral content of one confirmation screen:
//! an icon, up to two buttons, an optional title and up to six lines.
//! Painting and localization belong to the renderer.

use heapless::String;

use crate::text::PagedText;

/// Maximum content lines in a dialog
pub const MAX_DIALOG_LINES: usize = 6;

/// Maximum bytes per dialog line or title
pub const DIALOG_LINE_LEN: usize = 64;

/// One line of dialog text
pub type DialogLine = String<DIALOG_LINE_LEN>;

/// Dialog icon shown at the top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Icon {
    /// Question mark (needs a decision)
    Question,
    /// Information
    Info,
    /// Warning triangle
    Warning,
}

/// Button caption, translated by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonLabel {
    Cancel,
    Confirm,
    Next,
    Continue,
    Ok,
    QrCode,
    Finish,
    Again,
    TakeRisk,
}

impl ButtonLabel {
    /// Default English caption
    pub const fn as_str(self) -> &'static str {
        match self {
            ButtonLabel::Cancel => "Cancel",
            ButtonLabel::Confirm => "Confirm",
            ButtonLabel::Next => "Next",
            ButtonLabel::Continue => "Continue",
            ButtonLabel::Ok => "OK",
            ButtonLabel::QrCode => "QR Code",
            ButtonLabel::Finish => "Finish",
            ButtonLabel::Again => "Again",
            ButtonLabel::TakeRisk => "I take the risk",
        }
    }
}

/// Structured content of one confirmation screen
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DialogDescriptor {
    /// Icon, if any
    pub icon: Option<Icon>,
    /// Left button; `None` for acknowledge-only dialogs
    pub cancel: Option<ButtonLabel>,
    /// Right button
    pub confirm: ButtonLabel,
    /// Description / title text
    pub title: Option<DialogLine>,
    /// Content lines; `None` leaves the row blank
    pub lines: [Option<DialogLine>; MAX_DIALOG_LINES],
}

impl DialogDescriptor {
    /// Assemble a descriptor from already-shaped text
    pub fn new(
        icon: Option<Icon>,
        cancel: Option<ButtonLabel>,
        confirm: ButtonLabel,
        title: Option<&str>,
        lines: [Option<&str>; MAX_DIALOG_LINES],
    ) -> Self {
        Self {
            icon,
            cancel,
            confirm,
            title: title.map(to_line),
            lines: lines.map(|l| l.map(to_line)),
        }
    }

    /// Title as a string slice
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Line `index` as a string slice
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).and_then(|l| l.as_deref())
    }

    /// Number of occupied line slots
    pub fn line_count(&self) -> usize {
        self.lines.iter().filter(|l| l.is_some()).count()
    }
}

/// Incremental builder for [`DialogDescriptor`]
///
/// Lines fill slots top to bottom; anything past the sixth slot is dropped.
#[derive(Debug, Clone)]
pub struct DialogBuilder {
    dialog: DialogDescriptor,
    next_slot: usize,
}

impl DialogBuilder {
    /// Start a dialog with the given confirm button
    pub fn new(confirm: ButtonLabel) -> Self {
        Self {
            dialog: DialogDescriptor {
                icon: None,
                cancel: None,
                confirm,
                title: None,
                lines: Default::default(),
            },
            next_slot: 0,
        }
    }

    /// Question icon with Cancel / `confirm` buttons
    pub fn question(confirm: ButtonLabel) -> Self {
        Self::new(confirm)
            .icon(Icon::Question)
            .cancel(ButtonLabel::Cancel)
    }

    /// Set the icon
    pub fn icon(mut self, icon: Icon) -> Self {
        self.dialog.icon = Some(icon);
        self
    }

    /// Set the cancel button
    pub fn cancel(mut self, label: ButtonLabel) -> Self {
        self.dialog.cancel = Some(label);
        self
    }

    /// Set the title
    pub fn title(mut self, title: &str) -> Self {
        self.dialog.title = Some(to_line(title));
        self
    }

    /// Append a line
    pub fn line(self, text: &str) -> Self {
        self.optional_line(Some(text))
    }

    /// Append a line slot; `None` and empty text leave it blank
    pub fn optional_line(mut self, text: Option<&str>) -> Self {
        if let Some(slot) = self.dialog.lines.get_mut(self.next_slot) {
            *slot = text.filter(|t| !t.is_empty()).map(to_line);
            self.next_slot += 1;
        }
        self
    }

    /// Append a blank line slot
    pub fn blank(self) -> Self {
        self.optional_line(None)
    }

    /// Append all four pager rows
    pub fn paged(self, text: &PagedText) -> Self {
        text.iter().fold(self, |b, row| b.optional_line(Some(row)))
    }

    /// Finish the descriptor
    pub fn build(self) -> DialogDescriptor {
        self.dialog
    }
}

/// Copy `text` into a dialog line, cutting at a char boundary when too long
pub fn to_line(text: &str) -> DialogLine {
    let mut line = DialogLine::new();
    push_truncated(&mut line, text);
    line
}

/// Append as much of `text` as fits, never splitting a character
pub fn push_truncated<const N: usize>(out: &mut String<N>, text: &str) {
    for ch in text.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
}
