//! Screen buffer
//!
//! Character-based screen buffer sized for a 128x64 panel with a 6x8 font.

use heapless::String;

/// Number of character rows
pub const SCREEN_ROWS: usize = 8;

/// Number of character columns
pub const SCREEN_COLS: usize = 21;

/// Byte capacity of a row (any UTF-8 text up to `SCREEN_COLS` characters)
pub const LINE_LEN: usize = SCREEN_COLS * 4;

/// Horizontal placement of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Screen buffer for text-mode displays
///
/// Rows hold at most [`SCREEN_COLS`] characters; longer text is cut.
#[derive(Clone)]
pub struct Screen {
    /// Current display content
    lines: [String<LINE_LEN>; SCREEN_ROWS],
    /// Inverted region per row (start_col, end_col)
    highlights: [Option<(u8, u8)>; SCREEN_ROWS],
    /// Whether the screen needs to be redrawn
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new empty screen
    pub fn new() -> Self {
        Self {
            lines: core::array::from_fn(|_| String::new()),
            highlights: [None; SCREEN_ROWS],
            dirty: true,
        }
    }

    /// Clear the entire screen
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
        self.highlights = [None; SCREEN_ROWS];
        self.dirty = true;
    }

    /// Set the content of a specific row, left aligned
    pub fn set_line(&mut self, row: usize, text: &str) {
        self.set_aligned(row, text, Align::Left);
    }

    /// Set the content of a row with the given alignment
    pub fn set_aligned(&mut self, row: usize, text: &str, align: Align) {
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };
        line.clear();
        let width = text.chars().count().min(SCREEN_COLS);
        let pad = match align {
            Align::Left => 0,
            Align::Center => (SCREEN_COLS - width) / 2,
            Align::Right => SCREEN_COLS - width,
        };
        for _ in 0..pad {
            let _ = line.push(' ');
        }
        for ch in text.chars().take(width) {
            let _ = line.push(ch);
        }
        self.dirty = true;
    }

    /// Put `left` at the start of a row and `right` at its end
    ///
    /// Returns `false` and leaves the row untouched when both do not fit
    /// with at least one space between them.
    pub fn set_pair(&mut self, row: usize, left: &str, right: &str) -> bool {
        let left_len = left.chars().count();
        let right_len = right.chars().count();
        if row >= SCREEN_ROWS || left_len + 1 + right_len > SCREEN_COLS {
            return false;
        }
        let line = &mut self.lines[row];
        line.clear();
        let _ = line.push_str(left);
        for _ in 0..SCREEN_COLS - left_len - right_len {
            let _ = line.push(' ');
        }
        let _ = line.push_str(right);
        self.dirty = true;
        true
    }

    /// Get the content of a specific row
    pub fn get_line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Set highlight (invert) region for a row
    pub fn set_highlight(&mut self, row: usize, start_col: u8, end_col: u8) {
        if row < SCREEN_ROWS {
            self.highlights[row] = Some((start_col, end_col));
            self.dirty = true;
        }
    }

    /// Get highlight region for a row
    pub fn get_highlight(&self, row: usize) -> Option<(u8, u8)> {
        self.highlights.get(row).copied().flatten()
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as clean (after rendering)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Get all lines as an iterator
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|s| s.as_str())
    }

    /// Get number of rows
    pub const fn rows(&self) -> usize {
        SCREEN_ROWS
    }

    /// Get number of columns
    pub const fn cols(&self) -> usize {
        SCREEN_COLS
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line.as_str());
        }
        defmt::write!(f, "]");
    }
}
