//! Swap entry points.
//!
//! Sell swaps (items in, value out) and buy swaps (value in, items out)
//! share one shape: validate, quote, check slippage, update state, settle.
//!
//! # Routing
//!
//! | Pool | Sold items go to | Buy proceeds (`notional + trade fee`) go to |
//! |---|---|---|
//! | Token | assets recipient | n/a |
//! | NFT | n/a | assets recipient |
//! | Trade | pair custody | stay in the pair |
//!
//! The protocol fee is always paid to the factory's current fee recipient.

use tracing::{debug, info};

use super::{reject, CallContext, Pair};
use crate::domain::{has_duplicates, Address, Amount, BuyRecord, ItemId, SellRecord};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::traits::{Curve, Inventory};

fn item_count(len: usize) -> Result<u32, AmmError> {
    u32::try_from(len).map_err(|_| AmmError::CurveError("too many items"))
}

impl Pair {
    /// Sells `ids` owned by the caller to the pair; pays the net output to
    /// `recipient`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPoolType`] on NFT pools.
    /// - [`AmmError::InvalidParameter`] for duplicate ids, the wrong
    ///   collection, or the pair itself as `recipient`.
    /// - [`AmmError::CurveError`] if `ids` is empty or cannot be priced.
    /// - [`AmmError::SlippageExceeded`] if the output is below
    ///   `min_output`.
    /// - A transfer error if the caller does not own an item or the pair
    ///   cannot pay; the call is rolled back.
    pub fn swap_items_for_token(
        &mut self,
        ctx: &mut CallContext<'_>,
        ids: &[ItemId],
        min_output: Amount,
        recipient: Address,
    ) -> Result<SellRecord, AmmError> {
        let setup = self.setup()?;
        if !setup.pool_type.accepts_items() {
            return Err(AmmError::InvalidPoolType);
        }
        self.check_collection(ctx)?;
        self.check_recipient(recipient)?;
        if has_duplicates(ids) {
            return Err(reject("duplicate item ids"));
        }
        let fees = self.protocol.schedule(setup.trade_fee);
        let quote = setup
            .curve
            .sell_info(
                self.market.spot_price,
                self.market.delta,
                item_count(ids.len())?,
                &fees,
            )
            .inspect_err(|err| debug!(pair = %self.address, error = %err, "sell not priced"))?;
        if quote.value() < min_output {
            return Err(AmmError::SlippageExceeded(
                "output amount is less than min expected",
            ));
        }

        let saved = self.market.clone();
        self.market.spot_price = quote.new_spot_price();
        let destination = if setup.pool_type.is_trade() {
            for id in ids {
                self.market.inventory.add(*id);
            }
            self.address
        } else {
            self.market.assets_recipient
        };
        let pair = self.address;
        let seller = ctx.sender;
        let fee_recipient = self.protocol.recipient();
        self.settle(ctx, saved, |s, ctx| {
            for id in ids {
                s.move_item(ctx, seller, destination, *id)?;
            }
            s.pay(ctx, pair, recipient, quote.value())?;
            s.pay(ctx, pair, fee_recipient, quote.protocol_fee())
        })?;

        info!(
            pair = %self.address,
            items = ids.len(),
            amount_out = %quote.value(),
            protocol_fee = %quote.protocol_fee(),
            "items sold to pair"
        );
        Ok(SellRecord {
            amount_out: quote.value(),
        })
    }

    /// Buys the specific `ids` from the pair, sending them to `recipient`.
    /// The price is taken from the attached value; any excess is refunded
    /// to the caller.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPoolType`] on Token pools.
    /// - [`AmmError::InvalidParameter`] for duplicate ids, the wrong
    ///   collection, or the pair itself as `recipient`.
    /// - [`AmmError::InsufficientBalance`] if the pair does not hold every
    ///   id.
    /// - [`AmmError::CurveError`] if `ids` is empty or cannot be priced.
    /// - [`AmmError::SlippageExceeded`] if the price exceeds `max_input`.
    /// - [`AmmError::InsufficientPayment`] if the attached value is below
    ///   the price.
    pub fn swap_token_for_items(
        &mut self,
        ctx: &mut CallContext<'_>,
        ids: &[ItemId],
        max_input: Amount,
        recipient: Address,
    ) -> Result<BuyRecord, AmmError> {
        let setup = self.setup()?;
        if !setup.pool_type.sells_items() {
            return Err(AmmError::InvalidPoolType);
        }
        self.check_collection(ctx)?;
        self.check_recipient(recipient)?;
        if has_duplicates(ids) {
            return Err(reject("duplicate item ids"));
        }
        if !ids
            .iter()
            .all(|id| self.market.inventory.contains(&*ctx.collection, *id))
        {
            return Err(AmmError::InsufficientBalance("item not held by pair"));
        }
        self.execute_buy(ctx, ids, max_input, recipient)
    }

    /// Buys `num_items` from the pair, taking the first `num_items`
    /// identifiers of the current [`nft_ids`](Self::nft_ids) snapshot.
    ///
    /// # Errors
    ///
    /// As [`swap_token_for_items`](Self::swap_token_for_items), with
    /// [`AmmError::CurveError`] when `num_items` is zero or exceeds the
    /// items held.
    pub fn swap_token_for_any_items(
        &mut self,
        ctx: &mut CallContext<'_>,
        num_items: usize,
        max_input: Amount,
        recipient: Address,
    ) -> Result<BuyRecord, AmmError> {
        let setup = self.setup()?;
        if !setup.pool_type.sells_items() {
            return Err(AmmError::InvalidPoolType);
        }
        self.check_collection(ctx)?;
        self.check_recipient(recipient)?;
        if num_items == 0 {
            return Err(AmmError::CurveError("zero items requested"));
        }
        let held = self.market.inventory.snapshot(&*ctx.collection);
        let Some(ids) = held.get(..num_items) else {
            return Err(AmmError::CurveError("not enough items held"));
        };
        let ids = ids.to_vec();
        self.execute_buy(ctx, &ids, max_input, recipient)
    }

    fn execute_buy(
        &mut self,
        ctx: &mut CallContext<'_>,
        ids: &[ItemId],
        max_input: Amount,
        recipient: Address,
    ) -> Result<BuyRecord, AmmError> {
        let setup = self.setup()?;
        let fees = self.protocol.schedule(setup.trade_fee);
        let quote = setup
            .curve
            .buy_info(
                self.market.spot_price,
                self.market.delta,
                item_count(ids.len())?,
                &fees,
            )
            .inspect_err(|err| debug!(pair = %self.address, error = %err, "buy not priced"))?;
        if quote.value() > max_input {
            return Err(AmmError::SlippageExceeded("input amount exceeds max expected"));
        }
        if ctx.value < quote.value() {
            debug!(pair = %self.address, attached = %ctx.value, price = %quote.value(), "underpaid buy");
            return Err(AmmError::InsufficientPayment);
        }
        let proceeds = quote.notional().safe_add(&quote.trade_fee())?;
        let refund = ctx.value.safe_sub(&quote.value())?;

        let saved = self.market.clone();
        self.market.spot_price = quote.new_spot_price();
        for id in ids {
            self.market.inventory.remove(*id);
        }
        let pair = self.address;
        let buyer = ctx.sender;
        let attached = ctx.value;
        let fee_recipient = self.protocol.recipient();
        let assets_recipient = self.assets_recipient();
        self.settle(ctx, saved, |s, ctx| {
            s.pay(ctx, buyer, pair, attached)?;
            for id in ids {
                s.move_item(ctx, pair, recipient, *id)?;
            }
            s.pay(ctx, pair, fee_recipient, quote.protocol_fee())?;
            s.pay(ctx, pair, assets_recipient, proceeds)?;
            s.pay(ctx, pair, buyer, refund)
        })?;

        info!(
            pair = %self.address,
            items = ids.len(),
            amount_in = %quote.value(),
            protocol_fee = %quote.protocol_fee(),
            "items bought from pair"
        );
        Ok(BuyRecord {
            amount_in: quote.value(),
        })
    }

    fn check_collection(&self, ctx: &CallContext<'_>) -> Result<(), AmmError> {
        if ctx.collection.address() != self.collection() {
            return Err(reject("collection mismatch"));
        }
        Ok(())
    }

    /// The pair cannot be the recipient of its own swap.
    fn check_recipient(&self, recipient: Address) -> Result<(), AmmError> {
        if recipient == self.address {
            return Err(reject("pair cannot receive its own swap"));
        }
        Ok(())
    }
}
