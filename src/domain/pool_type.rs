//! Pool-type classification.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Which side(s) of the market a pair makes.
///
/// | Type | Buys items (sell swaps) | Sells items (buy swaps) | Trade fee |
/// |------|:---:|:---:|:---:|
/// | `Token` | yes | no | no |
/// | `Nft` | no | yes | no |
/// | `Trade` | yes | yes | yes |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolType {
    /// Holds native value and buys items from sellers.
    Token,
    /// Holds items and sells them to buyers.
    Nft,
    /// Holds both and trades in both directions.
    Trade,
}

impl PoolType {
    /// Returns `true` if the pair accepts items in exchange for value.
    #[must_use]
    pub const fn accepts_items(&self) -> bool {
        matches!(self, Self::Token | Self::Trade)
    }

    /// Returns `true` if the pair sells items for value.
    #[must_use]
    pub const fn sells_items(&self) -> bool {
        matches!(self, Self::Nft | Self::Trade)
    }

    /// Returns `true` for [`PoolType::Trade`].
    #[must_use]
    pub const fn is_trade(&self) -> bool {
        matches!(self, Self::Trade)
    }
}

impl fmt::Display for PoolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Token => "token",
            Self::Nft => "nft",
            Self::Trade => "trade",
        };
        f.write_str(name)
    }
}
