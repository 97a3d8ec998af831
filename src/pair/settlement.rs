//! Journaled transfers with compensation.

use tracing::error;

use super::CallContext;
use crate::domain::{Address, Amount, ItemId};
use crate::error::AmmError;

#[derive(Debug, Clone, Copy)]
enum Leg {
    Native {
        from: Address,
        to: Address,
        amount: Amount,
    },
    Item {
        from: Address,
        to: Address,
        id: ItemId,
    },
}

/// Records every transfer it performs so a failed call can be unwound.
///
/// Transfers are applied immediately.  On failure the caller invokes
/// [`unwind`](Self::unwind), which replays the journal backwards with
/// source and destination swapped.
#[derive(Debug, Default)]
pub struct Settlement {
    legs: Vec<Leg>,
}

impl Settlement {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Moves native value; zero amounts and self-transfers are skipped.
    pub(crate) fn pay(
        &mut self,
        ctx: &mut CallContext<'_>,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), AmmError> {
        if amount.is_zero() || from == to {
            return Ok(());
        }
        ctx.bank.transfer(&from, &to, amount)?;
        self.legs.push(Leg::Native { from, to, amount });
        Ok(())
    }

    /// Moves one item.
    pub(crate) fn move_item(
        &mut self,
        ctx: &mut CallContext<'_>,
        from: Address,
        to: Address,
        id: ItemId,
    ) -> Result<(), AmmError> {
        ctx.collection.transfer(&from, &to, id)?;
        self.legs.push(Leg::Item { from, to, id });
        Ok(())
    }

    /// Number of transfers applied so far.
    pub(crate) fn len(&self) -> usize {
        self.legs.len()
    }

    /// Reverses every applied transfer, newest first.
    pub(crate) fn unwind(self, ctx: &mut CallContext<'_>) {
        for leg in self.legs.into_iter().rev() {
            let outcome = match leg {
                Leg::Native { from, to, amount } => ctx.bank.transfer(&to, &from, amount),
                Leg::Item { from, to, id } => ctx.collection.transfer(&to, &from, id),
            };
            if let Err(err) = outcome {
                error!(?leg, error = %err, "failed to reverse transfer");
            }
        }
    }
}
