//! Confirmation dialogs
//!
//! Each function shapes its inputs with the pager and path humanizer and
//! returns a [`DialogDescriptor`] for the renderer. None of them keep state.

pub mod address;
pub mod descriptor;
pub mod device;
pub mod identity;
pub mod message;
pub mod transaction;

pub use address::{address, xpub};
pub use descriptor::{
    ButtonLabel, DialogBuilder, DialogDescriptor, DialogLine, Icon, DIALOG_LINE_LEN,
    MAX_DIALOG_LINES,
};
pub use device::{confirm_auto_lock_delay, reset_word};
pub use identity::{decrypt_identity, sign_identity, Identity};
pub use message::{
    cipher_key_value, confirm_op_return, cosi_commit_sign, decrypt_message, encrypt_message,
    public_key, sign_message, verify_message,
};
pub use transaction::{
    change_count_over_threshold, confirm_omni, confirm_output, confirm_tx, fee_over_threshold,
    verify_address, OmniSimpleSend,
};
