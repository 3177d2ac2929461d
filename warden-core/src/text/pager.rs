//! Fixed-width message pager
//!
//! Splits a message into at most four rows for the confirmation dialogs.
//! Output capacity is fixed (4 × 32), so over-length input is truncated
//! with a visible marker instead of overflowing.

use core::fmt::Write;

use heapless::String;

/// Maximum number of rows produced by the pager
pub const MAX_ROWS: usize = 4;

/// Widest row the pager will produce; larger requests are clamped
pub const MAX_ROW_WIDTH: usize = 32;

/// Row width used for hex-encoded messages
pub const HEX_ROW_WIDTH: usize = 16;

/// Number of source bytes shown in hex mode
pub const HEX_MAX_BYTES: usize = 32;

/// A single pager row
pub type PagedLine = String<MAX_ROW_WIDTH>;

/// How the paged text was encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PageEncoding {
    /// Printable ASCII shown verbatim
    #[default]
    Plain,
    /// Lowercase hex of the source bytes
    Hex,
}

/// Up to four rows of shaped text
///
/// Unused rows are empty strings. A fresh value is returned by every call;
/// nothing is shared between callers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PagedText {
    lines: [PagedLine; MAX_ROWS],
    truncated: bool,
    encoding: PageEncoding,
}

impl PagedText {
    /// All four rows, including empty ones
    pub fn lines(&self) -> &[PagedLine; MAX_ROWS] {
        &self.lines
    }

    /// Row `index` as a string slice (empty when out of range)
    pub fn line(&self, index: usize) -> &str {
        self.lines.get(index).map(|l| l.as_str()).unwrap_or("")
    }

    /// Iterate over all four rows
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|l| l.as_str())
    }

    /// Number of non-empty rows
    pub fn used_rows(&self) -> usize {
        self.lines.iter().filter(|l| !l.is_empty()).count()
    }

    /// Whether input was cut off
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Encoding used to produce the rows
    pub fn encoding(&self) -> PageEncoding {
        self.encoding
    }

    /// Convenience for `encoding() == PageEncoding::Hex`
    pub fn is_hex(&self) -> bool {
        self.encoding == PageEncoding::Hex
    }
}

/// Check whether every byte is printable ASCII (0x20..=0x7E)
pub fn is_printable_ascii(bytes: &[u8]) -> bool {
    bytes.iter().all(|b| is_printable(*b))
}

fn is_printable(byte: u8) -> bool {
    (0x20..=0x7E).contains(&byte)
}

/// Split `bytes` into rows of `row_width` characters
///
/// `row_width` is clamped to [`MAX_ROW_WIDTH`]. When the input does not fit
/// in four rows, the last three characters of the fourth row become `"..."`
/// and the result is marked truncated. Bytes outside printable ASCII are
/// shown as `'?'`; callers that expect binary data should use
/// [`paginate_hex`] or [`paginate_auto`].
pub fn paginate(bytes: &[u8], row_width: usize) -> PagedText {
    let width = row_width.min(MAX_ROW_WIDTH);
    let mut text = PagedText::default();

    if width == 0 {
        text.truncated = !bytes.is_empty();
        return text;
    }

    for (line, chunk) in text.lines.iter_mut().zip(bytes.chunks(width)) {
        for &byte in chunk {
            let ch = if is_printable(byte) { byte as char } else { '?' };
            // Capacity equals MAX_ROW_WIDTH and chunks never exceed it
            let _ = line.push(ch);
        }
    }

    if bytes.len() > width * MAX_ROWS {
        text.truncated = true;
        mark_ellipsis(&mut text.lines[MAX_ROWS - 1], width);
    }

    text
}

/// Overwrite the tail of a full row with dots
fn mark_ellipsis(line: &mut PagedLine, width: usize) {
    let dots = width.min(3);
    line.truncate(width - dots);
    for _ in 0..dots {
        let _ = line.push('.');
    }
}

/// Hex-encode at most the first 32 bytes and paginate at 16 characters
///
/// When the source is longer than 32 bytes the final two hex digits are
/// replaced by `".."` and the result is marked truncated.
pub fn paginate_hex(bytes: &[u8]) -> PagedText {
    let shown = &bytes[..bytes.len().min(HEX_MAX_BYTES)];
    let mut hex: String<{ HEX_MAX_BYTES * 2 }> = String::new();
    write_hex(&mut hex, shown);

    let truncated = bytes.len() > HEX_MAX_BYTES;
    if truncated {
        hex.truncate(HEX_MAX_BYTES * 2 - 2);
        let _ = hex.push_str("..");
    }

    let mut text = paginate(hex.as_bytes(), HEX_ROW_WIDTH);
    text.truncated |= truncated;
    text.encoding = PageEncoding::Hex;
    text
}

/// Paginate printable input at `row_width`, anything else as hex
pub fn paginate_auto(bytes: &[u8], row_width: usize) -> PagedText {
    if is_printable_ascii(bytes) {
        paginate(bytes, row_width)
    } else {
        paginate_hex(bytes)
    }
}

/// Append lowercase hex of `bytes` to `out`, stopping when it is full
pub fn write_hex<const N: usize>(out: &mut String<N>, bytes: &[u8]) {
    for byte in bytes {
        if out.capacity() - out.len() < 2 {
            break;
        }
        let _ = write!(out, "{:02x}", byte);
    }
}
