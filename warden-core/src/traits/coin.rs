//! Coin registry lookup

use heapless::String;

/// Registry entry for a SLIP-44 coin type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CoinInfo {
    /// Short ticker without leading space, e.g. `"BTC"`
    pub ticker: &'static str,
    /// Coin supports segwit outputs
    pub supports_segwit: bool,
    /// Coin defines a bech32 address prefix
    pub has_bech32_prefix: bool,
    /// Cashaddr prefix stripped from displayed addresses (e.g. `"bitcoincash"`)
    pub cashaddr_prefix: Option<&'static str>,
}

/// Lookup of coin metadata by SLIP-44 coin type
pub trait CoinRegistry {
    /// Look up a coin by its unhardened SLIP-44 number
    fn lookup_coin_by_slip44(&self, coin_type: u32) -> Option<CoinInfo>;
}

/// Registry with no entries
impl CoinRegistry for () {
    fn lookup_coin_by_slip44(&self, _coin_type: u32) -> Option<CoinInfo> {
        None
    }
}

impl<T: CoinRegistry + ?Sized> CoinRegistry for &T {
    fn lookup_coin_by_slip44(&self, coin_type: u32) -> Option<CoinInfo> {
        (**self).lookup_coin_by_slip44(coin_type)
    }
}

/// Formatted amount, e.g. `"0.5 OMNI"`
pub type AmountString = String<32>;

/// Integer amount formatting (decimal point placement and suffix)
pub trait AmountFormatter {
    /// Format `amount` with `decimals` fractional digits followed by `suffix`
    fn format_amount(&self, amount: u64, decimals: u8, suffix: &str) -> AmountString;
}
