//! Message, key and data confirmation dialogs

use core::fmt::Write;

use heapless::String;

use super::descriptor::{ButtonLabel, DialogBuilder, DialogDescriptor, Icon};
use crate::text::pager::write_hex;
use crate::text::{paginate, paginate_auto, paginate_hex, PathComponent};

/// SLIP-18 CoSi purpose
const SLIP18_PURPOSE: u32 = 10018;

/// OP_RETURN payload
pub fn confirm_op_return(data: &[u8]) -> DialogDescriptor {
    let text = paginate_auto(data, 20);
    DialogBuilder::question(ButtonLabel::Confirm)
        .line("Confirm OP_RETURN:")
        .paged(&text)
        .build()
}

/// Message about to be signed; binary messages are shown as hex
pub fn sign_message(msg: &[u8]) -> DialogDescriptor {
    let text = paginate_auto(msg, 18);
    let title = if text.is_hex() {
        "Sign binary message?"
    } else {
        "Sign message?"
    };
    DialogBuilder::question(ButtonLabel::Confirm)
        .title(title)
        .paged(&text)
        .build()
}

/// Message whose signature was verified
pub fn verify_message(msg: &[u8]) -> DialogDescriptor {
    let text = paginate_auto(msg, 20);
    let title = if text.is_hex() {
        "Verified binary message"
    } else {
        "Verified message"
    };
    DialogBuilder::new(ButtonLabel::Confirm)
        .icon(Icon::Info)
        .cancel(ButtonLabel::Cancel)
        .title(title)
        .paged(&text)
        .build()
}

/// Symmetric encrypt/decrypt of a keyed value
pub fn cipher_key_value(encrypt: bool, key: &str) -> DialogDescriptor {
    let title = if encrypt {
        "Encrypt value of this key?"
    } else {
        "Decrypt value of this key?"
    };
    DialogBuilder::question(ButtonLabel::Confirm)
        .title(title)
        .paged(&paginate(key.as_bytes(), 16))
        .build()
}

/// Message about to be encrypted (optionally also signed)
pub fn encrypt_message(msg: &[u8], signing: bool) -> DialogDescriptor {
    let title = if signing {
        "Encrypt+Sign message?"
    } else {
        "Encrypt message?"
    };
    DialogBuilder::question(ButtonLabel::Confirm)
        .title(title)
        .paged(&paginate(msg, 16))
        .build()
}

/// Result of a decryption; acknowledge only
pub fn decrypt_message(msg: &[u8], signed: bool) -> DialogDescriptor {
    let title = if signed {
        "Decrypted signed message"
    } else {
        "Decrypted message"
    };
    DialogBuilder::new(ButtonLabel::Ok)
        .icon(Icon::Info)
        .title(title)
        .paged(&paginate(msg, 16))
        .build()
}

/// Public key: one prefix byte followed by 32 key bytes
///
/// A prefix of `0x01` marks an ed25519 key and is shown as `00`.
pub fn public_key(pubkey: &[u8]) -> DialogDescriptor {
    let (prefix, key) = match pubkey.split_first() {
        Some((p, rest)) => (*p, rest),
        None => (0, pubkey),
    };

    let mut desc: String<16> = String::new();
    let _ = desc.push_str("Public Key: ");
    if prefix == 1 {
        let _ = desc.push_str("00");
    } else {
        write_hex(&mut desc, &[prefix]);
    }

    DialogBuilder::new(ButtonLabel::Continue)
        .icon(Icon::Question)
        .line(&desc)
        .paged(&paginate_hex(&key[..key.len().min(32)]))
        .build()
}

/// SLIP-18 path `10018'/i'` with `i <= 9`
fn slip18_index(path: &[PathComponent]) -> Option<u32> {
    match path {
        [purpose, index]
            if purpose.is_hardened()
                && purpose.index() == SLIP18_PURPOSE
                && index.is_hardened()
                && index.index() <= 9 =>
        {
            Some(index.index())
        }
        _ => None,
    }
}

/// CoSi commit or sign request over a 32-byte digest
pub fn cosi_commit_sign(
    path: &[PathComponent],
    data: &[u8],
    final_sign: bool,
) -> DialogDescriptor {
    let mut title: String<24> = String::new();
    match (slip18_index(path), final_sign) {
        (Some(i), true) => {
            let _ = write!(title, "CoSi sign index #{}?", i);
        }
        (Some(i), false) => {
            let _ = write!(title, "CoSi commit index #{}?", i);
        }
        (None, true) => {
            let _ = title.push_str("CoSi sign message?");
        }
        (None, false) => {
            let _ = title.push_str("CoSi commit message?");
        }
    }

    let builder = DialogBuilder::question(ButtonLabel::Confirm).title(&title);
    let builder = if data.len() == 32 {
        data.chunks(8).fold(builder, |b, chunk| {
            let mut row: String<16> = String::new();
            write_hex(&mut row, chunk);
            b.line(&row)
        })
    } else {
        builder
            .line("Data")
            .line("of")
            .line("unsupported")
            .line("length")
    };
    builder.build()
}
