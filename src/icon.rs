//! Supported payment-method icons, alias resolution, and validated icon sets.
//!
//! Callers name icons with an [`IconId`], a numeric code, or a
//! case-insensitive alias. [`IconSet::resolve`] filters out anything it
//! cannot resolve, keeps at most [`MAX_ICONS`] entries in input order, and
//! falls back to [`FALLBACK_ICONS`] when nothing survives.
//!
//! ```
//! use payicons::{IconId, IconSet};
//!
//! let set = IconSet::resolve(["jcb", "Mc", "interac", "vISa"]);
//! assert_eq!(set.as_slice(), &[IconId::Jcb, IconId::Mastercard, IconId::Visa]);
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Maximum number of icons in one image. Extra entries are dropped.
pub const MAX_ICONS: usize = 6;

/// Icons used when no supplied entry resolves.
pub const FALLBACK_ICONS: [IconId; 2] = [IconId::Mastercard, IconId::Visa];

/// A supported payment method.
///
/// Every variant has a stable numeric [`code`](Self::code) and an asset
/// file (`<stem>.png`) in the icon directory.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IconId {
    Amex,
    Dankort,
    DinersClub,
    Discover,
    Jcb,
    Maestro,
    Mastercard,
    PostePay,
    UnionPay,
    Visa,
    Bitcoin,
    BitcoinCash,
    Litecoin,
    Ethereum,
}

/// Case-insensitive names, many-to-one. Keys are stored uppercase.
const ALIASES: &[(&str, IconId)] = &[
    ("VISA", IconId::Visa),
    ("MASTERCARD", IconId::Mastercard),
    ("MC", IconId::Mastercard),
    ("DISCOVER", IconId::Discover),
    // UK Electron / Visa Electron
    ("UKE", IconId::Visa),
    // Rebranded as Maestro in 2002
    ("SWITCH", IconId::Maestro),
    // Ran on the Maestro network until 2011
    ("SOLO", IconId::Maestro),
    ("MAESTRO", IconId::Maestro),
    ("DINERSCLUB", IconId::DinersClub),
    ("DANKORT", IconId::Dankort),
    // Rebranded as Visa Debit
    ("DELTA", IconId::Visa),
    ("AMEX", IconId::Amex),
    ("JCB", IconId::Jcb),
    ("UNIONPAY", IconId::UnionPay),
    ("POSTEPAY", IconId::PostePay),
    ("BTC", IconId::Bitcoin),
    ("BITCOIN", IconId::Bitcoin),
    ("BCH", IconId::BitcoinCash),
    ("BITCOINCASH", IconId::BitcoinCash),
    ("LTC", IconId::Litecoin),
    ("LITECOIN", IconId::Litecoin),
    ("ETH", IconId::Ethereum),
    ("ETHEREUM", IconId::Ethereum),
];

impl IconId {
    /// All icons, ordered by code.
    pub const ALL: [Self; 14] = [
        Self::Amex,
        Self::Dankort,
        Self::DinersClub,
        Self::Discover,
        Self::Jcb,
        Self::Maestro,
        Self::Mastercard,
        Self::PostePay,
        Self::UnionPay,
        Self::Visa,
        Self::Bitcoin,
        Self::BitcoinCash,
        Self::Litecoin,
        Self::Ethereum,
    ];

    /// Stable numeric code (1-based, in [`ALL`](Self::ALL) order).
    pub fn code(self) -> u8 {
        match self {
            Self::Amex => 1,
            Self::Dankort => 2,
            Self::DinersClub => 3,
            Self::Discover => 4,
            Self::Jcb => 5,
            Self::Maestro => 6,
            Self::Mastercard => 7,
            Self::PostePay => 8,
            Self::UnionPay => 9,
            Self::Visa => 10,
            Self::Bitcoin => 11,
            Self::BitcoinCash => 12,
            Self::Litecoin => 13,
            Self::Ethereum => 14,
        }
    }

    /// Look up an icon by numeric code. Returns `None` for unknown codes.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.code() == code)
    }

    /// Resolve a case-insensitive alias such as `"visa"` or `"SWITCH"`.
    pub fn from_alias(alias: &str) -> Option<Self> {
        ALIASES
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(alias))
            .map(|&(_, id)| id)
    }

    /// Asset file stem, e.g. `"dinersclub"`.
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::Amex => "amex",
            Self::Dankort => "dankort",
            Self::DinersClub => "dinersclub",
            Self::Discover => "discover",
            Self::Jcb => "jcb",
            Self::Maestro => "maestro",
            Self::Mastercard => "mastercard",
            Self::PostePay => "postepay",
            Self::UnionPay => "unionpay",
            Self::Visa => "visa",
            Self::Bitcoin => "bitcoin",
            Self::BitcoinCash => "bitcoincash",
            Self::Litecoin => "litecoin",
            Self::Ethereum => "ethereum",
        }
    }

    /// Asset file name, e.g. `"visa.png"`.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Amex => "amex.png",
            Self::Dankort => "dankort.png",
            Self::DinersClub => "dinersclub.png",
            Self::Discover => "discover.png",
            Self::Jcb => "jcb.png",
            Self::Maestro => "maestro.png",
            Self::Mastercard => "mastercard.png",
            Self::PostePay => "postepay.png",
            Self::UnionPay => "unionpay.png",
            Self::Visa => "visa.png",
            Self::Bitcoin => "bitcoin.png",
            Self::BitcoinCash => "bitcoincash.png",
            Self::Litecoin => "litecoin.png",
            Self::Ethereum => "ethereum.png",
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Amex => "American Express",
            Self::Dankort => "Dankort",
            Self::DinersClub => "Diners Club",
            Self::Discover => "Discover",
            Self::Jcb => "JCB",
            Self::Maestro => "Maestro",
            Self::Mastercard => "Mastercard",
            Self::PostePay => "PostePay",
            Self::UnionPay => "UnionPay",
            Self::Visa => "Visa",
            Self::Bitcoin => "Bitcoin",
            Self::BitcoinCash => "Bitcoin Cash",
            Self::Litecoin => "Litecoin",
            Self::Ethereum => "Ethereum",
        }
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One caller-supplied icon entry, before resolution.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum IconRef {
    /// A known icon.
    Id(IconId),
    /// A numeric code (see [`IconId::code`]).
    Code(u8),
    /// A case-insensitive alias.
    Alias(String),
}

impl IconRef {
    /// Resolve to an icon, or `None` if the code or alias is unknown.
    pub fn resolve(&self) -> Option<IconId> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Code(code) => IconId::from_code(*code),
            Self::Alias(alias) => IconId::from_alias(alias),
        }
    }
}

impl From<IconId> for IconRef {
    fn from(id: IconId) -> Self {
        Self::Id(id)
    }
}

impl From<u8> for IconRef {
    fn from(code: u8) -> Self {
        Self::Code(code)
    }
}

impl From<&str> for IconRef {
    fn from(alias: &str) -> Self {
        Self::Alias(String::from(alias))
    }
}

impl From<String> for IconRef {
    fn from(alias: String) -> Self {
        Self::Alias(alias)
    }
}

/// An order-preserving list of 1 to [`MAX_ICONS`] icons. Duplicates allowed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IconSet {
    icons: Vec<IconId>,
}

impl IconSet {
    /// Resolve caller entries into an icon set.
    ///
    /// Unresolvable entries are dropped silently, the survivors are
    /// truncated to the first [`MAX_ICONS`], and an empty result becomes
    /// [`FALLBACK_ICONS`].
    pub fn resolve<I, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<IconRef>,
    {
        let mut icons = Vec::with_capacity(MAX_ICONS);
        let mut dropped = 0usize;
        let mut truncated = 0usize;
        for entry in entries {
            let entry = entry.into();
            match entry.resolve() {
                Some(id) if icons.len() < MAX_ICONS => icons.push(id),
                Some(_) => truncated += 1,
                None => {
                    tracing::debug!(?entry, "dropping unrecognized icon");
                    dropped += 1;
                }
            }
        }
        if truncated > 0 {
            tracing::debug!(truncated, max = MAX_ICONS, "too many icons, keeping the first");
        }
        if icons.is_empty() {
            tracing::debug!(dropped, "no icons resolved, using fallback pair");
            icons.extend_from_slice(&FALLBACK_ICONS);
        }
        Self { icons }
    }

    /// The resolved icons in display order.
    pub fn as_slice(&self) -> &[IconId] {
        &self.icons
    }

    /// Number of icons (always 1..=[`MAX_ICONS`]).
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = IconId> + '_ {
        self.icons.iter().copied()
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            icons: FALLBACK_ICONS.to_vec(),
        }
    }
}

impl<'a> IntoIterator for &'a IconSet {
    type Item = IconId;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, IconId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.icons.iter().copied()
    }
}
