//! Derivation-path humanizer
//!
//! Turns a BIP-32 path into the short label shown under addresses and
//! outputs, e.g. `"BTC segwit account #01"`. Paths that do not follow a
//! known BIP-44/49/84 layout, or whose coin cannot be named, are rendered
//! raw (`"Path: m/44'/0'/0'/0/0"`). The humanizer never fails.

use core::fmt::Write;

use heapless::String;

use crate::traits::CoinRegistry;

/// Hardened-derivation flag bit
pub const HARDENED: u32 = 0x8000_0000;

/// Longest path that is interpreted at all
pub const MAX_PATH_DEPTH: usize = 8;

/// Highest address index accepted in a canonical path
pub const MAX_ADDRESS_INDEX: u32 = 1_000_000;

/// Label returned for paths deeper than [`MAX_PATH_DEPTH`]
pub const UNKNOWN_LONG_PATH: &str = "Unknown long path";

/// `"Path: m"` plus eight `"/2147483647'"` segments
pub const PATH_LABEL_LEN: usize = 7 + MAX_PATH_DEPTH * 12;

/// Humanized path text
pub type PathLabel = String<PATH_LABEL_LEN>;

/// One element of a derivation path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PathComponent {
    index: u32,
    hardened: bool,
}

impl PathComponent {
    /// Create a component; the index is masked to 31 bits
    pub const fn new(index: u32, hardened: bool) -> Self {
        Self {
            index: index & !HARDENED,
            hardened,
        }
    }

    /// Hardened component (`index'`)
    pub const fn hardened(index: u32) -> Self {
        Self::new(index, true)
    }

    /// Non-hardened component
    pub const fn normal(index: u32) -> Self {
        Self::new(index, false)
    }

    /// Decode the on-wire form where bit 31 marks hardening
    pub const fn from_raw(raw: u32) -> Self {
        Self::new(raw, raw & HARDENED != 0)
    }

    /// Encode to the on-wire form
    pub const fn to_raw(self) -> u32 {
        if self.hardened {
            self.index | HARDENED
        } else {
            self.index
        }
    }

    /// 31-bit index without the hardened flag
    pub const fn index(self) -> u32 {
        self.index
    }

    /// Whether this component is hardened
    pub const fn is_hardened(self) -> bool {
        self.hardened
    }
}

impl From<u32> for PathComponent {
    fn from(raw: u32) -> Self {
        Self::from_raw(raw)
    }
}

/// Address family selected by the purpose component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressFamily {
    /// BIP-44 (purpose 44')
    Standard,
    /// BIP-49 (purpose 49')
    P2shSegwit,
    /// BIP-84 (purpose 84')
    NativeSegwit,
}

impl AddressFamily {
    fn from_purpose(purpose: PathComponent) -> Option<Self> {
        if !purpose.is_hardened() {
            return None;
        }
        match purpose.index() {
            44 => Some(AddressFamily::Standard),
            49 => Some(AddressFamily::P2shSegwit),
            84 => Some(AddressFamily::NativeSegwit),
            _ => None,
        }
    }
}

/// Tickers for account-based coins that have no registry entry
fn slip44_extras(coin_type: PathComponent) -> Option<&'static str> {
    if !coin_type.is_hardened() {
        return None;
    }
    match coin_type.index() {
        40 => Some("EXP"),
        43 => Some("NEM"),
        60 => Some("ETH"),
        61 => Some("ETC"),
        108 => Some("UBQ"),
        137 => Some("RSK"),
        37310 => Some("tRSK"),
        _ => None,
    }
}

/// Check for `purpose'/coin'/account'/chain/index` with sane bounds
fn canonical_family(path: &[PathComponent]) -> Option<AddressFamily> {
    let [purpose, coin, account, chain, index] = path else {
        return None;
    };
    let family = AddressFamily::from_purpose(*purpose)?;
    let shape_ok = coin.is_hardened()
        && account.is_hardened()
        && chain.to_raw() <= 1
        && index.to_raw() <= MAX_ADDRESS_INDEX;
    shape_ok.then_some(family)
}

/// Resolve the ticker and whether the `legacy` qualifier applies
///
/// The extras table is the last resort: it is only reached for standard
/// paths whose coin type is not in the registry.
fn resolve_ticker<R: CoinRegistry + ?Sized>(
    family: AddressFamily,
    coin_type: PathComponent,
    coins: &R,
) -> Option<(&'static str, bool)> {
    let coin = coins.lookup_coin_by_slip44(coin_type.index());
    match family {
        AddressFamily::NativeSegwit => coin
            .filter(|c| c.supports_segwit && c.has_bech32_prefix)
            .map(|c| (c.ticker, false)),
        AddressFamily::P2shSegwit => coin
            .filter(|c| c.supports_segwit)
            .map(|c| (c.ticker, false)),
        AddressFamily::Standard => match coin {
            Some(c) => Some((c.ticker, c.supports_segwit)),
            None => slip44_extras(coin_type).map(|t| (t, false)),
        },
    }
}

fn humanize_canonical<R: CoinRegistry + ?Sized>(
    path: &[PathComponent],
    is_account_level: bool,
    coins: &R,
) -> Option<PathLabel> {
    let family = canonical_family(path)?;
    let (ticker, legacy) = resolve_ticker(family, path[1], coins)?;

    let numbered = if is_account_level { path[4] } else { path[2] };
    let number = numbered.index().wrapping_add(1) & !HARDENED;
    if number >= 100 {
        return None;
    }

    let mut label = PathLabel::new();
    let _ = label.push_str(ticker);
    if legacy {
        let _ = label.push_str(" legacy");
    }
    if family == AddressFamily::NativeSegwit {
        let _ = label.push_str(" segwit");
    }
    let noun = if is_account_level { "address" } else { "account" };
    let _ = write!(label, " {} #{:02}", noun, number);
    Some(label)
}

/// Render `Path: m/a'/b/...` with `'` marking hardened components
pub fn raw_path(path: &[PathComponent]) -> PathLabel {
    let mut label = PathLabel::new();
    let _ = label.push_str("Path: m");
    for component in path.iter().take(MAX_PATH_DEPTH) {
        let _ = write!(label, "/{}", component.index());
        if component.is_hardened() {
            let _ = label.push('\'');
        }
    }
    label
}

fn unknown_long_path() -> PathLabel {
    let mut label = PathLabel::new();
    let _ = label.push_str(UNKNOWN_LONG_PATH);
    label
}

/// Humanize a derivation path
///
/// - more than eight components: [`UNKNOWN_LONG_PATH`], never parsed
/// - empty path: `"Path: m"`
/// - canonical BIP-44/49/84 path with a nameable coin and number below 100:
///   `"<TICKER>[ legacy][ segwit] <address|account> #NN"`
/// - anything else: raw rendering
///
/// `is_account_level` selects which component is numbered: the address
/// index (noun `address`) or the account (noun `account`).
pub fn humanize<R: CoinRegistry + ?Sized>(
    path: &[PathComponent],
    is_account_level: bool,
    coins: &R,
) -> PathLabel {
    if path.len() > MAX_PATH_DEPTH {
        return unknown_long_path();
    }

    humanize_canonical(path, is_account_level, coins).unwrap_or_else(|| raw_path(path))
}

/// Humanize a path given in on-wire `u32` form
pub fn humanize_raw<R: CoinRegistry + ?Sized>(
    raw: &[u32],
    is_account_level: bool,
    coins: &R,
) -> PathLabel {
    if raw.len() > MAX_PATH_DEPTH {
        return unknown_long_path();
    }
    let mut path = heapless::Vec::<PathComponent, MAX_PATH_DEPTH>::new();
    for &r in raw {
        let _ = path.push(PathComponent::from_raw(r));
    }
    humanize(&path, is_account_level, coins)
}
