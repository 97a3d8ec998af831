//! Blueprint for a new pair.

use serde::{Deserialize, Serialize};

use crate::domain::{has_duplicates, Address, Amount, CurveKind, Fraction, ItemId, PoolType};
use crate::error::AmmError;

/// Exclusive upper bound on a Trade pool's fee (90 %).
pub const MAX_TRADE_FEE: Fraction = Fraction::percent(90);

/// Declarative description of a pair handed to
/// [`PairFactory::create_pair`](crate::factory::PairFactory::create_pair).
///
/// Curve-specific checks on `spot_price` and `delta` happen at pair
/// initialization, since they depend on the curve implementation.
///
/// # Validation
///
/// - `item_ids` has no duplicates.
/// - Token pools start without items; NFT and Trade pools with at least one.
/// - `trade_fee` is zero unless the pool is a Trade pool, and below
///   [`MAX_TRADE_FEE`] for Trade pools.
/// - Trade pools leave `assets_recipient` unset (zero).
///
/// ```
/// use nft_amm::config::PairConfig;
/// use nft_amm::domain::{Address, Amount, CurveKind, ItemId, PoolType};
///
/// let config = PairConfig::new(
///     Address::from_bytes([1u8; 32]),
///     CurveKind::Linear,
///     PoolType::Nft,
///     Amount::units(1),
///     Amount::ratio(1, 2),
/// )
/// .with_items((1..=10).map(ItemId::new));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairConfig {
    collection: Address,
    curve: CurveKind,
    pool_type: PoolType,
    spot_price: Amount,
    delta: Amount,
    #[serde(default)]
    trade_fee: Fraction,
    #[serde(default)]
    assets_recipient: Address,
    #[serde(default)]
    item_ids: Vec<ItemId>,
}

impl PairConfig {
    /// Starts a blueprint with no fee, default recipient and no items.
    #[must_use]
    pub const fn new(
        collection: Address,
        curve: CurveKind,
        pool_type: PoolType,
        spot_price: Amount,
        delta: Amount,
    ) -> Self {
        Self {
            collection,
            curve,
            pool_type,
            spot_price,
            delta,
            trade_fee: Fraction::ZERO,
            assets_recipient: Address::zero(),
            item_ids: Vec::new(),
        }
    }

    /// Sets the trade fee.
    #[must_use]
    pub fn with_trade_fee(mut self, fee: Fraction) -> Self {
        self.trade_fee = fee;
        self
    }

    /// Sets the assets recipient; zero means "the owner".
    #[must_use]
    pub fn with_assets_recipient(mut self, recipient: Address) -> Self {
        self.assets_recipient = recipient;
        self
    }

    /// Sets the items deposited at creation.
    #[must_use]
    pub fn with_items(mut self, ids: impl IntoIterator<Item = ItemId>) -> Self {
        self.item_ids = ids.into_iter().collect();
        self
    }

    /// Validates the structural invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] for duplicate ids or item
    ///   funding that does not match the pool type.
    /// - [`AmmError::InvalidParameter`] for an out-of-range trade fee.
    /// - [`AmmError::RecipientUnsupported`] for a Trade pool with a
    ///   recipient.
    pub fn validate(&self) -> Result<(), AmmError> {
        if has_duplicates(&self.item_ids) {
            return Err(AmmError::InvalidConfiguration("duplicate item ids"));
        }
        match self.pool_type {
            PoolType::Token if !self.item_ids.is_empty() => {
                return Err(AmmError::InvalidConfiguration(
                    "token pools start without items",
                ));
            }
            PoolType::Nft | PoolType::Trade if self.item_ids.is_empty() => {
                return Err(AmmError::InvalidConfiguration(
                    "pool type requires initial items",
                ));
            }
            _ => {}
        }
        if self.pool_type.is_trade() {
            if !self.trade_fee.is_below(MAX_TRADE_FEE) {
                return Err(AmmError::InvalidParameter("trade fee too high"));
            }
            if !self.assets_recipient.is_zero() {
                return Err(AmmError::RecipientUnsupported);
            }
        } else if !self.trade_fee.is_zero() {
            return Err(AmmError::InvalidParameter(
                "trade fee only applies to trade pools",
            ));
        }
        Ok(())
    }

    /// Collection address.
    #[must_use]
    pub const fn collection(&self) -> Address {
        self.collection
    }

    /// Curve kind.
    #[must_use]
    pub const fn curve(&self) -> CurveKind {
        self.curve
    }

    /// Pool type.
    #[must_use]
    pub const fn pool_type(&self) -> PoolType {
        self.pool_type
    }

    /// Starting spot price.
    pub const fn spot_price(&self) -> Amount {
        self.spot_price
    }

    /// Starting delta.
    pub const fn delta(&self) -> Amount {
        self.delta
    }

    /// Trade fee.
    #[must_use]
    pub const fn trade_fee(&self) -> Fraction {
        self.trade_fee
    }

    /// Requested assets recipient (zero when unset).
    #[must_use]
    pub const fn assets_recipient(&self) -> Address {
        self.assets_recipient
    }

    /// Items deposited at creation.
    #[must_use]
    pub fn item_ids(&self) -> &[ItemId] {
        &self.item_ids
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn base(pool_type: PoolType) -> PairConfig {
        PairConfig::new(
            Address::from_bytes([1u8; 32]),
            CurveKind::Linear,
            pool_type,
            Amount::units(1),
            Amount::ratio(1, 2),
        )
    }

    fn items() -> Vec<ItemId> {
        (1..=3).map(ItemId::new).collect()
    }

    #[test]
    fn valid_blueprints() {
        assert!(base(PoolType::Token).validate().is_ok());
        assert!(base(PoolType::Nft).with_items(items()).validate().is_ok());
        assert!(base(PoolType::Trade)
            .with_items(items())
            .with_trade_fee(Fraction::percent(10))
            .validate()
            .is_ok());
    }

    #[test]
    fn item_funding_rules() {
        assert!(matches!(
            base(PoolType::Token).with_items(items()).validate(),
            Err(AmmError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            base(PoolType::Nft).validate(),
            Err(AmmError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            base(PoolType::Trade).validate(),
            Err(AmmError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn duplicate_items_rejected() {
        let dup = vec![ItemId::new(1), ItemId::new(1)];
        assert!(matches!(
            base(PoolType::Nft).with_items(dup).validate(),
            Err(AmmError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn trade_fee_rules() {
        assert!(matches!(
            base(PoolType::Nft)
                .with_items(items())
                .with_trade_fee(Fraction::percent(1))
                .validate(),
            Err(AmmError::InvalidParameter(_))
        ));
        assert!(matches!(
            base(PoolType::Trade)
                .with_items(items())
                .with_trade_fee(MAX_TRADE_FEE)
                .validate(),
            Err(AmmError::InvalidParameter(_))
        ));
    }

    #[test]
    fn trade_pool_recipient_rejected() {
        let result = base(PoolType::Trade)
            .with_items(items())
            .with_assets_recipient(Address::from_bytes([2u8; 32]))
            .validate();
        assert_eq!(result, Err(AmmError::RecipientUnsupported));
    }

    #[test]
    fn json_defaults_optional_fields() {
        let json = r#"{
            "collection": "0x0101010101010101010101010101010101010101010101010101010101010101",
            "curve": "linear",
            "pool_type": "token",
            "spot_price": 1000000000000000000,
            "delta": 500000000000000000
        }"#;
        let Ok(config) = serde_json::from_str::<PairConfig>(json) else {
            panic!("deserialize");
        };
        assert_eq!(config, base(PoolType::Token));
    }
}
