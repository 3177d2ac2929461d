//! Transaction confirmation dialogs
//!
//! Amounts arrive pre-formatted; only the OMNI payload is decoded here
//! because its currency and divisibility live inside the script data.

use core::fmt::Write;

use heapless::String;

use super::descriptor::{push_truncated, ButtonLabel, DialogBuilder, DialogDescriptor};
use crate::text::{humanize, paginate, PathComponent};
use crate::traits::{AmountFormatter, CoinInfo, CoinRegistry};

/// Addresses up to this length are split over two rows, longer over three
const TWO_ROW_ADDRESS_LEN: usize = 42;

/// Widest row used for addresses
const ADDRESS_ROW_WIDTH: usize = 21;

/// OMNI simple-send payload length
const OMNI_SIMPLE_SEND_LEN: usize = 20;

/// Strip `"<prefix>:"` from a cashaddr-style address
fn strip_cashaddr<'a>(coin: Option<&CoinInfo>, address: &'a str) -> &'a str {
    coin.and_then(|c| c.cashaddr_prefix)
        .and_then(|prefix| address.strip_prefix(prefix))
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(address)
}

/// Two heading lines, the address over up to four rows, then `extra`
/// in the fourth row slot when the address left it free
fn address_dialog(
    coin: Option<&CoinInfo>,
    address: &str,
    heading: &str,
    subheading: &str,
    extra: Option<&str>,
) -> DialogDescriptor {
    let address = strip_cashaddr(coin, address);
    let len = address.len();
    let rows = if len <= TWO_ROW_ADDRESS_LEN { 2 } else { 3 };
    let width = (len.saturating_sub(1) / rows + 1).min(ADDRESS_ROW_WIDTH);
    let text = paginate(address.as_bytes(), width);

    let last = if text.line(3).is_empty() {
        extra
    } else {
        Some(text.line(3))
    };

    DialogBuilder::question(ButtonLabel::Confirm)
        .line(heading)
        .line(subheading)
        .line(text.line(0))
        .line(text.line(1))
        .line(text.line(2))
        .optional_line(last)
        .build()
}

/// One transaction output: amount, destination and (for change) its path
pub fn confirm_output<R: CoinRegistry + ?Sized>(
    coin: &CoinInfo,
    amount: &str,
    address: &str,
    path: &[PathComponent],
    coins: &R,
) -> DialogDescriptor {
    let mut amount_to: String<35> = String::new();
    push_truncated(&mut amount_to, amount);
    push_truncated(&mut amount_to, " to");

    let extra = (!path.is_empty()).then(|| humanize(path, false, coins));
    address_dialog(
        Some(coin),
        address,
        "Confirm sending",
        &amount_to,
        extra.as_deref(),
    )
}

/// Address that produced a verified signature
pub fn verify_address(coin: Option<&CoinInfo>, address: &str) -> DialogDescriptor {
    address_dialog(coin, address, "Confirm address?", "Message signed by:", None)
}

/// Final confirmation of total amount and fee
pub fn confirm_tx(amount_out: &str, fee: &str) -> DialogDescriptor {
    DialogBuilder::question(ButtonLabel::Confirm)
        .line("Really send")
        .line(amount_out)
        .line("from your wallet?")
        .line("Fee included:")
        .line(fee)
        .build()
}

/// Fee above the coin's threshold
pub fn fee_over_threshold(fee: &str) -> DialogDescriptor {
    DialogBuilder::question(ButtonLabel::Confirm)
        .line("Fee")
        .line(fee)
        .line("is unexpectedly high.")
        .blank()
        .line("Send anyway?")
        .build()
}

/// Unusually many change outputs
pub fn change_count_over_threshold(change_count: u32) -> DialogDescriptor {
    let mut count: String<21> = String::new();
    let _ = write!(count, "There are {}", change_count);
    DialogBuilder::question(ButtonLabel::Confirm)
        .line("Warning!")
        .line(&count)
        .line("change-outputs.")
        .blank()
        .line("Continue?")
        .build()
}

/// Decoded OMNI simple send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OmniSimpleSend {
    /// OMNI currency identifier
    pub currency: u32,
    /// Raw amount
    pub amount: u64,
}

impl OmniSimpleSend {
    /// Decode a 20-byte simple-send payload (transaction type 0)
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() != OMNI_SIMPLE_SEND_LEN {
            return None;
        }
        let tx_type = u32::from_be_bytes([data[4], data[5], data[6], data[7]]);
        if tx_type != 0 {
            return None;
        }
        let currency = u32::from_be_bytes([data[8], data[9], data[10], data[11]]);
        let mut amount = [0u8; 8];
        amount.copy_from_slice(&data[12..20]);
        Some(Self {
            currency,
            amount: u64::from_be_bytes(amount),
        })
    }

    /// Display suffix and whether the currency is divisible
    pub fn currency_suffix(&self) -> (&'static str, bool) {
        match self.currency {
            1 => (" OMNI", true),
            2 => (" tOMNI", true),
            3 => (" MAID", false),
            31 => (" USDT", true),
            _ => (" UNKN", false),
        }
    }
}

/// OMNI layer transaction embedded in an output script
pub fn confirm_omni<F: AmountFormatter + ?Sized>(
    data: &[u8],
    formatter: &F,
) -> DialogDescriptor {
    let (desc, amount) = match OmniSimpleSend::parse(data) {
        Some(send) => {
            let (suffix, divisible) = send.currency_suffix();
            let decimals = if divisible { 8 } else { 0 };
            (
                "Simple send of ",
                Some(formatter.format_amount(send.amount, decimals, suffix)),
            )
        }
        None => ("Unknown transaction", None),
    };

    DialogBuilder::question(ButtonLabel::Confirm)
        .line("Confirm OMNI Transaction:")
        .blank()
        .line(desc)
        .blank()
        .optional_line(amount.as_deref())
        .build()
}
