//! Native-value collaborator.

use crate::domain::{Address, Amount};
use crate::error::AmmError;

/// Balances and transfers of the native fungible asset.
pub trait NativeBank {
    /// Balance held by `account`.
    fn balance_of(&self, account: &Address) -> Amount;

    /// Moves `amount` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientBalance`] if `from` holds less than
    /// `amount`, or [`AmmError::TransferFailed`] if the recipient refuses.
    fn transfer(&mut self, from: &Address, to: &Address, amount: Amount)
        -> Result<(), AmmError>;
}
