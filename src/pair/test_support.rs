//! Fixtures shared by the pair's unit and property tests.

#![allow(clippy::panic)]

use super::{CallContext, Pair};
use crate::config::{PairConfig, ProtocolFeeConfig, ProtocolFees};
use crate::domain::{Address, Amount, CurveKind, Fraction, ItemId, PoolType};
use crate::ledger::{MemoryBank, MemoryCollection};
use crate::traits::ItemCollection;

pub(crate) fn owner() -> Address {
    Address::from_bytes([1u8; 32])
}

pub(crate) fn stranger() -> Address {
    Address::from_bytes([2u8; 32])
}

pub(crate) fn fee_recipient() -> Address {
    Address::from_bytes([3u8; 32])
}

pub(crate) fn factory() -> Address {
    Address::from_bytes([4u8; 32])
}

pub(crate) fn ids(raw: &[u64]) -> Vec<ItemId> {
    raw.iter().copied().map(ItemId::new).collect()
}

/// Starting `(spot_price, delta)` for each curve.
pub(crate) fn curve_params(curve: CurveKind) -> (Amount, Amount) {
    match curve {
        CurveKind::Linear => (Amount::units(1), Amount::ratio(1, 2)),
        CurveKind::Exponential => (Amount::units(1), Amount::ratio(3, 2)),
        CurveKind::ConstantProduct => (Amount::units(11), Amount::units(10)),
    }
}

/// A bank, a collection and protocol fees at the default 1 %.
pub(crate) struct World {
    pub bank: MemoryBank,
    pub collection: MemoryCollection,
    pub protocol: ProtocolFees,
    next_pair: u8,
}

impl World {
    pub(crate) fn new(enumerable: bool) -> Self {
        let address = Address::from_bytes([0xaa; 32]);
        let collection = if enumerable {
            MemoryCollection::enumerable(address)
        } else {
            MemoryCollection::new(address)
        };
        let mut bank = MemoryBank::new();
        for account in [owner(), stranger()] {
            let Ok(()) = bank.mint(&account, Amount::units(1_000)) else {
                panic!("mint");
            };
        }
        Self {
            bank,
            collection,
            protocol: ProtocolFees::new(ProtocolFeeConfig::with_default_fee(fee_recipient())),
            next_pair: 0x10,
        }
    }

    pub(crate) fn ctx(&mut self, sender: Address) -> CallContext<'_> {
        CallContext::new(sender, &mut self.bank, &mut self.collection)
    }

    pub(crate) fn config(&self, pool_type: PoolType, curve: CurveKind) -> PairConfig {
        let (spot, delta) = curve_params(curve);
        let config = PairConfig::new(self.collection.address(), curve, pool_type, spot, delta);
        if pool_type.is_trade() {
            config.with_trade_fee(Fraction::percent(10))
        } else {
            config
        }
    }

    pub(crate) fn blank_pair(&self) -> Pair {
        Pair::new(
            Address::from_bytes([0x0f; 32]),
            factory(),
            self.protocol.clone(),
        )
    }

    /// Mints `items` to `holder`, skipping ids that already exist.
    pub(crate) fn give(&mut self, holder: &Address, items: &[u64]) {
        for id in ids(items) {
            if self.collection.owner_of(id).is_none() {
                let _ = self.collection.mint(holder, id);
            }
        }
    }

    /// Creates, initializes and funds a pair owned by [`owner`].
    pub(crate) fn pair(
        &mut self,
        pool_type: PoolType,
        curve: CurveKind,
        items: &[u64],
        deposit: Amount,
    ) -> Pair {
        let config = self.config(pool_type, curve).with_items(ids(items));
        self.pair_from(&config, deposit)
    }

    pub(crate) fn pair_from(&mut self, config: &PairConfig, deposit: Amount) -> Pair {
        self.next_pair = self.next_pair.wrapping_add(1);
        let mut pair = Pair::new(
            Address::from_bytes([self.next_pair; 32]),
            factory(),
            self.protocol.clone(),
        );
        let Ok(()) = pair.init(owner(), config, &self.collection) else {
            panic!("init");
        };
        let raw: Vec<u64> = config.item_ids().iter().map(ItemId::get).collect();
        self.give(&owner(), &raw);
        let Ok(()) = pair.fund(&mut self.ctx(owner()), config.item_ids(), deposit) else {
            panic!("fund");
        };
        pair
    }

    pub(crate) fn nft_pair_linear(&mut self, items: &[u64]) -> Pair {
        self.pair(PoolType::Nft, CurveKind::Linear, items, Amount::ZERO)
    }
}
