//! Identity sign-in and decryption prompts

use heapless::String;

use super::descriptor::{push_truncated, ButtonLabel, DialogBuilder, DialogDescriptor};

/// Protocol row capacity (protocol name plus suffix)
const PROTO_ROW_LEN: usize = 19;

/// Host and port row capacity
const HOST_ROW_LEN: usize = 70;

/// User row capacity
const USER_ROW_LEN: usize = 72;

type ProtoRow = String<PROTO_ROW_LEN>;
type HostRow = String<HOST_ROW_LEN>;
type UserRow = String<USER_ROW_LEN>;

/// Identity a host asks the device to sign in or decrypt for
///
/// Empty strings are treated the same as absent fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Identity<'a> {
    pub proto: Option<&'a str>,
    pub user: Option<&'a str>,
    pub host: Option<&'a str>,
    pub port: Option<&'a str>,
}

fn present(field: Option<&str>) -> Option<&str> {
    field.filter(|f| !f.is_empty())
}

impl<'a> Identity<'a> {
    fn proto(&self) -> Option<&'a str> {
        present(self.proto)
    }

    fn is_gpg(&self) -> bool {
        self.proto() == Some("gpg")
    }

    /// `host[:port]`, empty without a host
    fn host_row(&self) -> HostRow {
        let mut row = HostRow::new();
        if let Some(host) = present(self.host) {
            push_truncated(&mut row, host);
            if let Some(port) = present(self.port) {
                push_truncated(&mut row, ":");
                push_truncated(&mut row, port);
            }
        }
        row
    }

    /// `user: <name>`, empty without a user
    fn user_row(&self) -> UserRow {
        let mut row = UserRow::new();
        if let Some(user) = present(self.user) {
            push_truncated(&mut row, "user: ");
            push_truncated(&mut row, user);
        }
        row
    }
}

/// Uppercased `name` followed by `suffix`, cut at the row capacity
fn proto_row(name: &str, suffix: &str) -> ProtoRow {
    let mut row = ProtoRow::new();
    for ch in name.chars() {
        if row.push(ch.to_ascii_uppercase()).is_err() {
            break;
        }
    }
    push_truncated(&mut row, suffix);
    row
}

/// Split `"Name <email>"` into the name and the bare email
fn split_gpg_user(host: &mut HostRow, user: &mut UserRow) {
    let Some(start) = host.find('<') else {
        return;
    };
    user.clear();
    let email = &host.as_str()[start + 1..];
    let email = email.split_once('>').map_or(email, |(e, _)| e);
    push_truncated(user, email);
    host.truncate(start);
}

/// Challenge-response login (SSH, HTTPS, GPG and friends)
pub fn sign_identity(identity: &Identity<'_>, challenge: Option<&str>) -> DialogDescriptor {
    let proto = match identity.proto() {
        Some("https") => proto_row("", "Web sign in to:"),
        Some("gpg") => proto_row("", "GPG sign for:"),
        Some(other) => proto_row(other, " login to:"),
        None => proto_row("", "Login to:"),
    };

    let mut host = identity.host_row();
    let mut user = identity.user_row();
    if identity.is_gpg() {
        split_gpg_user(&mut host, &mut user);
    }

    DialogBuilder::question(ButtonLabel::Confirm)
        .title("Do you want to sign in?")
        .line(&proto)
        .line(&host)
        .line(&user)
        .optional_line(challenge)
        .build()
}

/// Identity-bound decryption
pub fn decrypt_identity(identity: &Identity<'_>) -> DialogDescriptor {
    let proto = match identity.proto() {
        Some(proto) => proto_row(proto, " decrypt for:"),
        None => proto_row("", "Decrypt for:"),
    };

    DialogBuilder::question(ButtonLabel::Confirm)
        .title("Do you want to decrypt?")
        .line(&proto)
        .line(&identity.host_row())
        .line(&identity.user_row())
        .build()
}
