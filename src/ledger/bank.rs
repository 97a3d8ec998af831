use std::collections::{HashMap, HashSet};

use crate::domain::{Address, Amount};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::traits::NativeBank;

/// In-memory native-value ledger.
///
/// Zero balances are not stored.  Accounts can be marked as refusing
/// incoming value to exercise failed-transfer paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryBank {
    balances: HashMap<Address, Amount>,
    refusing: HashSet<Address>,
}

impl MemoryBank {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` to `account` out of thin air.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the balance would overflow.
    pub fn mint(&mut self, account: &Address, amount: Amount) -> Result<(), AmmError> {
        self.increase_balance(account, amount)
    }

    /// Makes every later transfer *to* `account` fail.
    pub fn refuse_incoming(&mut self, account: Address) {
        self.refusing.insert(account);
    }

    /// Lets `account` receive value again.
    pub fn accept_incoming(&mut self, account: &Address) {
        self.refusing.remove(account);
    }

    /// Sum of all balances.
    #[must_use]
    pub fn total_supply(&self) -> Amount {
        self.balances
            .values()
            .fold(Amount::ZERO, |acc, b| acc.checked_add(b).unwrap_or(Amount::MAX))
    }

    fn increase_balance(&mut self, account: &Address, amount: Amount) -> Result<(), AmmError> {
        if amount.is_zero() {
            return Ok(());
        }
        let balance = self.balance_of(account).safe_add(&amount)?;
        self.balances.insert(*account, balance);
        Ok(())
    }

    fn decrease_balance(&mut self, account: &Address, amount: Amount) -> Result<(), AmmError> {
        let balance = self
            .balance_of(account)
            .safe_sub(&amount)
            .map_err(|_| AmmError::InsufficientBalance("insufficient native balance"))?;
        if balance.is_zero() {
            self.balances.remove(account);
        } else {
            self.balances.insert(*account, balance);
        }
        Ok(())
    }
}

impl NativeBank for MemoryBank {
    fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or(Amount::ZERO)
    }

    fn transfer(
        &mut self,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), AmmError> {
        if self.refusing.contains(to) {
            return Err(AmmError::TransferFailed("recipient refused native value"));
        }
        if from == to {
            return if self.balance_of(from) >= amount {
                Ok(())
            } else {
                Err(AmmError::InsufficientBalance("insufficient native balance"))
            };
        }
        self.decrease_balance(from, amount)?;
        self.increase_balance(to, amount)
    }
}
