//! The pair: one pool of items and native value priced by one curve.
//!
//! A [`Pair`] is created uninitialized by the factory and configured
//! exactly once through [`Pair::init`].  After that its collection, curve,
//! pool type and trade fee never change; the spot price moves with swaps
//! and, like delta and the assets recipient, through owner-only setters.
//!
//! # Operations
//!
//! | Operation | Pool types | Caller |
//! |---|---|---|
//! | [`swap_items_for_token`](Pair::swap_items_for_token) | Token, Trade | anyone |
//! | [`swap_token_for_items`](Pair::swap_token_for_items) | NFT, Trade | anyone |
//! | [`swap_token_for_any_items`](Pair::swap_token_for_any_items) | NFT, Trade | anyone |
//! | [`set_spot_price`](Pair::set_spot_price), [`set_delta`](Pair::set_delta) | all | owner |
//! | [`set_assets_recipient`](Pair::set_assets_recipient) | Token, NFT | owner |
//! | [`withdraw_token`](Pair::withdraw_token), [`withdraw_items`](Pair::withdraw_items) | all | owner |
//!
//! # Atomicity
//!
//! Every state-changing call validates first, then updates the pair's own
//! state, then performs transfers through a journaled settlement.  If any
//! transfer fails, applied transfers are reversed and the state is
//! restored, so a failed call leaves no trace.  Calls take `&mut self`,
//! which rules out re-entering a pair while one of its calls is running.

mod context;
mod settlement;
mod swap;

#[cfg(all(test, feature = "all-curves"))]
pub(crate) mod test_support;

#[cfg(all(test, feature = "all-curves"))]
mod proptest_properties;

pub use context::CallContext;
pub use settlement::Settlement;

use tracing::{debug, info, warn};

use crate::config::{PairConfig, ProtocolFees};
use crate::curves::CurveBox;
use crate::domain::{
    has_duplicates, Address, Amount, CurveKind, CurveQuote, Fraction, ItemId, PoolType,
};
use crate::error::AmmError;
use crate::inventory::{InventoryTracker, RegistryInventory};
use crate::traits::{Curve, Inventory, ItemCollection, NativeBank};

/// Fields fixed by [`Pair::init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Setup {
    owner: Address,
    collection: Address,
    curve: CurveBox,
    pool_type: PoolType,
    trade_fee: Fraction,
}

/// Fields that change after initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Market {
    spot_price: Amount,
    delta: Amount,
    assets_recipient: Address,
    inventory: InventoryTracker,
}

/// A bonding-curve pool for one collection.
#[derive(Debug, Clone)]
pub struct Pair {
    address: Address,
    factory: Address,
    protocol: ProtocolFees,
    setup: Option<Setup>,
    market: Market,
}

impl Pair {
    /// Creates an uninitialized pair at `address`, reading protocol fees
    /// through `protocol`.
    #[must_use]
    pub fn new(address: Address, factory: Address, protocol: ProtocolFees) -> Self {
        Self {
            address,
            factory,
            protocol,
            setup: None,
            market: Market {
                spot_price: Amount::ZERO,
                delta: Amount::ZERO,
                assets_recipient: Address::zero(),
                inventory: InventoryTracker::Registry(RegistryInventory::new()),
            },
        }
    }

    /// Configures the pair.  Runs once; the inventory strategy is chosen
    /// here from `collection`'s capabilities.
    ///
    /// A zero assets recipient on a Token or NFT pool means "the owner".
    ///
    /// # Errors
    ///
    /// - [`AmmError::AlreadyInitialized`] on any call after the first
    ///   successful one; nothing is modified.
    /// - [`AmmError::InvalidParameter`] if `collection` is not the one the
    ///   config names, the curve rejects the spot price or delta, or the
    ///   recipient is the pair itself.
    /// - Any error from [`PairConfig::validate`] or
    ///   [`CurveBox::from_kind`].
    pub fn init(
        &mut self,
        owner: Address,
        config: &PairConfig,
        collection: &dyn ItemCollection,
    ) -> Result<(), AmmError> {
        if self.setup.is_some() {
            return Err(AmmError::AlreadyInitialized);
        }
        if collection.address() != config.collection() {
            return Err(AmmError::InvalidParameter("collection mismatch"));
        }
        config.validate()?;
        let curve = CurveBox::from_kind(config.curve())?;
        if !curve.validate_spot_price(config.spot_price()) {
            return Err(AmmError::InvalidParameter("invalid spot price"));
        }
        if !curve.validate_delta(config.delta()) {
            return Err(AmmError::InvalidParameter("invalid delta"));
        }
        let assets_recipient = match config.pool_type() {
            PoolType::Trade => Address::zero(),
            _ if config.assets_recipient().is_zero() => owner,
            _ => config.assets_recipient(),
        };
        if assets_recipient == self.address {
            return Err(AmmError::InvalidParameter("recipient cannot be the pair"));
        }

        self.setup = Some(Setup {
            owner,
            collection: config.collection(),
            curve,
            pool_type: config.pool_type(),
            trade_fee: config.trade_fee(),
        });
        self.market = Market {
            spot_price: config.spot_price(),
            delta: config.delta(),
            assets_recipient,
            inventory: InventoryTracker::for_collection(collection, self.address),
        };
        debug!(
            pair = %self.address,
            curve = %config.curve(),
            pool_type = %config.pool_type(),
            "pair initialized"
        );
        Ok(())
    }

    // -- accessors ------------------------------------------------------------

    /// Address of this pair.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Address of the factory that created this pair.
    #[must_use]
    pub const fn factory(&self) -> Address {
        self.factory
    }

    /// Returns `true` once [`init`](Self::init) has succeeded.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.setup.is_some()
    }

    /// Owner; zero before initialization.
    #[must_use]
    pub fn owner(&self) -> Address {
        self.setup.map_or(Address::zero(), |s| s.owner)
    }

    /// Collection address; zero before initialization.
    #[must_use]
    pub fn collection(&self) -> Address {
        self.setup.map_or(Address::zero(), |s| s.collection)
    }

    /// Curve in use.
    #[must_use]
    pub fn curve(&self) -> Option<CurveKind> {
        self.setup.map(|s| s.curve.kind())
    }

    /// Pool type.
    #[must_use]
    pub fn pool_type(&self) -> Option<PoolType> {
        self.setup.map(|s| s.pool_type)
    }

    /// Trade fee; zero for Token and NFT pools.
    #[must_use]
    pub fn trade_fee(&self) -> Fraction {
        self.setup.map_or(Fraction::ZERO, |s| s.trade_fee)
    }

    /// Current spot price.
    pub const fn spot_price(&self) -> Amount {
        self.market.spot_price
    }

    /// Current delta.
    pub const fn delta(&self) -> Amount {
        self.market.delta
    }

    /// Where proceeds go.  Trade pools always report their own address.
    #[must_use]
    pub fn assets_recipient(&self) -> Address {
        match self.pool_type() {
            Some(PoolType::Trade) => self.address,
            _ => self.market.assets_recipient,
        }
    }

    /// Handle on the factory's live protocol fee settings.
    #[must_use]
    pub const fn protocol_fees(&self) -> &ProtocolFees {
        &self.protocol
    }

    /// Identifiers currently held, in snapshot order.  Empty if
    /// `collection` is not this pair's collection.
    #[must_use]
    pub fn nft_ids(&self, collection: &dyn ItemCollection) -> Vec<ItemId> {
        if collection.address() != self.collection() {
            return Vec::new();
        }
        self.market.inventory.snapshot(collection)
    }

    /// Number of items currently held.
    #[must_use]
    pub fn held_count(&self, collection: &dyn ItemCollection) -> usize {
        if collection.address() != self.collection() {
            return 0;
        }
        self.market.inventory.len(collection)
    }

    /// Native value held by the pair.
    pub fn balance(&self, bank: &dyn NativeBank) -> Amount {
        bank.balance_of(&self.address)
    }

    /// Prices buying `num_items` at the current state without changing it.
    ///
    /// # Errors
    ///
    /// [`AmmError::NotInitialized`], or the curve's
    /// [`AmmError::CurveError`].
    pub fn quote_buy(&self, num_items: u32) -> Result<CurveQuote, AmmError> {
        let setup = self.setup()?;
        let fees = self.protocol.schedule(setup.trade_fee);
        let quote = setup
            .curve
            .buy_info(self.market.spot_price, self.market.delta, num_items, &fees);
        debug!(pair = %self.address, num_items, ?quote, "buy quote");
        quote
    }

    /// Prices selling `num_items` at the current state without changing it.
    ///
    /// # Errors
    ///
    /// [`AmmError::NotInitialized`], or the curve's
    /// [`AmmError::CurveError`].
    pub fn quote_sell(&self, num_items: u32) -> Result<CurveQuote, AmmError> {
        let setup = self.setup()?;
        let fees = self.protocol.schedule(setup.trade_fee);
        let quote = setup
            .curve
            .sell_info(self.market.spot_price, self.market.delta, num_items, &fees);
        debug!(pair = %self.address, num_items, ?quote, "sell quote");
        quote
    }

    // -- administration -------------------------------------------------------

    /// Sets the spot price.
    ///
    /// # Errors
    ///
    /// [`AmmError::Unauthorized`] for non-owners, then
    /// [`AmmError::InvalidParameter`] if `value` equals the current price
    /// or the curve rejects it.
    pub fn set_spot_price(&mut self, sender: &Address, value: Amount) -> Result<(), AmmError> {
        let setup = self.authorize(sender)?;
        if value == self.market.spot_price {
            return Err(reject("new price is equal to current"));
        }
        if !setup.curve.validate_spot_price(value) {
            return Err(reject("invalid spot price"));
        }
        self.market.spot_price = value;
        info!(pair = %self.address, spot_price = %value, "spot price updated");
        Ok(())
    }

    /// Sets delta.
    ///
    /// # Errors
    ///
    /// [`AmmError::Unauthorized`] for non-owners, then
    /// [`AmmError::InvalidParameter`] if `value` equals the current delta
    /// or the curve rejects it.
    pub fn set_delta(&mut self, sender: &Address, value: Amount) -> Result<(), AmmError> {
        let setup = self.authorize(sender)?;
        if value == self.market.delta {
            return Err(reject("delta is equal to current"));
        }
        if !setup.curve.validate_delta(value) {
            return Err(reject("invalid delta"));
        }
        self.market.delta = value;
        info!(pair = %self.address, delta = %value, "delta updated");
        Ok(())
    }

    /// Sets the assets recipient of a Token or NFT pool.
    ///
    /// # Errors
    ///
    /// [`AmmError::Unauthorized`] for non-owners,
    /// [`AmmError::RecipientUnsupported`] on Trade pools, and
    /// [`AmmError::InvalidParameter`] if `recipient` is the current one or
    /// the pair itself.
    pub fn set_assets_recipient(
        &mut self,
        sender: &Address,
        recipient: Address,
    ) -> Result<(), AmmError> {
        let setup = self.authorize(sender)?;
        if setup.pool_type.is_trade() {
            return Err(AmmError::RecipientUnsupported);
        }
        if recipient == self.market.assets_recipient {
            return Err(reject("new recipient is equal to current"));
        }
        if recipient == self.address || recipient.is_zero() {
            return Err(reject("invalid recipient"));
        }
        self.market.assets_recipient = recipient;
        info!(pair = %self.address, %recipient, "assets recipient updated");
        Ok(())
    }

    /// Sends the pair's whole native balance to the owner.  Returns the
    /// amount withdrawn.
    ///
    /// # Errors
    ///
    /// [`AmmError::Unauthorized`] for non-owners,
    /// [`AmmError::InsufficientBalance`] when the balance is zero, or the
    /// bank's transfer error.
    pub fn withdraw_token(&mut self, ctx: &mut CallContext<'_>) -> Result<Amount, AmmError> {
        let setup = self.authorize(&ctx.sender)?;
        let balance = ctx.bank.balance_of(&self.address);
        if balance.is_zero() {
            return Err(AmmError::InsufficientBalance("nothing to withdraw"));
        }
        ctx.bank.transfer(&self.address, &setup.owner, balance)?;
        info!(pair = %self.address, amount = %balance, "native value withdrawn");
        Ok(balance)
    }

    /// Sends `ids` of `ctx.collection` to the owner.
    ///
    /// Works for any item the pair holds, tracked or not; for the pair's
    /// own collection the inventory is updated as well.
    ///
    /// # Errors
    ///
    /// [`AmmError::Unauthorized`] for non-owners,
    /// [`AmmError::InvalidParameter`] for duplicate ids,
    /// [`AmmError::InsufficientBalance`] if `ids` is empty or any id is not
    /// held, or a transfer error (after rollback).
    pub fn withdraw_items(
        &mut self,
        ctx: &mut CallContext<'_>,
        ids: &[ItemId],
    ) -> Result<(), AmmError> {
        let setup = self.authorize(&ctx.sender)?;
        if ids.is_empty() {
            return Err(AmmError::InsufficientBalance("nothing to withdraw"));
        }
        if has_duplicates(ids) {
            return Err(reject("duplicate item ids"));
        }
        let tracked = ctx.collection.address() == setup.collection;
        // Custody, not the inventory, gates withdrawals.
        if !ids
            .iter()
            .all(|id| ctx.collection.owner_of(*id) == Some(self.address))
        {
            return Err(AmmError::InsufficientBalance("item not held by pair"));
        }

        let saved = self.market.clone();
        if tracked {
            for id in ids {
                self.market.inventory.remove(*id);
            }
        }
        let pair = self.address;
        self.settle(ctx, saved, |s, ctx| {
            ids.iter()
                .try_for_each(|id| s.move_item(ctx, pair, setup.owner, *id))
        })?;
        info!(pair = %self.address, items = ids.len(), "items withdrawn");
        Ok(())
    }

    // -- crate-internal -------------------------------------------------------

    /// Moves the creator's initial items and native deposit into the pair.
    pub(crate) fn fund(
        &mut self,
        ctx: &mut CallContext<'_>,
        ids: &[ItemId],
        deposit: Amount,
    ) -> Result<(), AmmError> {
        self.setup()?;
        let saved = self.market.clone();
        for id in ids {
            self.market.inventory.add(*id);
        }
        let pair = self.address;
        let sender = ctx.sender;
        self.settle(ctx, saved, |s, ctx| {
            for id in ids {
                s.move_item(ctx, sender, pair, *id)?;
            }
            s.pay(ctx, sender, pair, deposit)
        })
    }

    fn setup(&self) -> Result<Setup, AmmError> {
        self.setup.ok_or(AmmError::NotInitialized)
    }

    fn authorize(&self, sender: &Address) -> Result<Setup, AmmError> {
        let setup = self.setup()?;
        if *sender != setup.owner {
            debug!(pair = %self.address, %sender, "rejected non-owner call");
            return Err(AmmError::Unauthorized);
        }
        Ok(setup)
    }

    /// Runs `transfers` under a journal; on failure reverses them and
    /// restores `saved`.
    fn settle<T>(
        &mut self,
        ctx: &mut CallContext<'_>,
        saved: Market,
        transfers: impl FnOnce(&mut Settlement, &mut CallContext<'_>) -> Result<T, AmmError>,
    ) -> Result<T, AmmError> {
        let mut settlement = Settlement::new();
        match transfers(&mut settlement, ctx) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(
                    pair = %self.address,
                    error = %err,
                    applied = settlement.len(),
                    "settlement failed, rolling back"
                );
                settlement.unwind(ctx);
                self.market = saved;
                Err(err)
            }
        }
    }
}

fn reject(reason: &'static str) -> AmmError {
    debug!(reason, "rejected parameter update");
    AmmError::InvalidParameter(reason)
}
