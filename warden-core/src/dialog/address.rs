//! Address and extended public key display

use core::fmt::Write;

use heapless::String;

use super::descriptor::{ButtonLabel, DialogBuilder, DialogDescriptor};
use crate::text::{humanize, paginate, PathComponent};
use crate::traits::CoinRegistry;

/// Addresses up to this length are shown on a single row
const SHORT_ADDRESS_LEN: usize = 10;

/// Row width for split addresses and xpubs
const ROW_WIDTH: usize = 21;

/// Characters of an xpub shown per page (four rows minus the ellipsis)
const XPUB_PAGE_CHARS: usize = 81;

/// Rows used for an address of `len` characters
fn address_rows(len: usize) -> usize {
    match len {
        0..=42 => 2,
        43..=63 => 3,
        _ => 4,
    }
}

/// Receive address in text mode, followed by its derivation path
///
/// The cancel-side button offers the QR view instead of cancelling.
pub fn address<R: CoinRegistry + ?Sized>(
    address: &str,
    desc: Option<&str>,
    path: &[PathComponent],
    is_account: bool,
    coins: &R,
) -> DialogDescriptor {
    let mut builder = DialogBuilder::new(ButtonLabel::Confirm).cancel(ButtonLabel::QrCode);
    if let Some(desc) = desc {
        builder = builder.title(desc);
    }

    if address.len() > SHORT_ADDRESS_LEN {
        let text = paginate(address.as_bytes(), ROW_WIDTH);
        builder = text
            .iter()
            .take(address_rows(address.len()))
            .fold(builder, |b, row| b.line(row));
    } else {
        builder = builder.line(address);
    }

    builder.line(&humanize(path, is_account, coins)).build()
}

/// One page of an extended public key
///
/// `index` is the cosigner position (zero based), `page` is 0 or 1.
pub fn xpub(xpub: &str, index: u32, page: u8, ours: bool) -> DialogDescriptor {
    let number = index.saturating_add(1);
    let mut title: String<24> = String::new();
    let _ = if number >= 10 {
        write!(title, "XPUB #{:02}", number % 100)
    } else {
        write!(title, "XPUB #{:<2}", number)
    };
    let owner = if ours { "yours" } else { "others" };
    let _ = write!(title, " {}/2 ({})", u32::from(page) + 1, owner);

    let offset = usize::from(page) * XPUB_PAGE_CHARS;
    let shown = xpub.as_bytes().get(offset..).unwrap_or(&[]);

    DialogBuilder::new(ButtonLabel::Confirm)
        .cancel(ButtonLabel::Next)
        .title(&title)
        .paged(&paginate(shown, ROW_WIDTH))
        .build()
}
