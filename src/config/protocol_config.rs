//! Factory-wide protocol fee settings.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Address, FeeSchedule, Fraction};
use crate::error::AmmError;

/// Protocol fee applied when none is configured (1 %).
pub const DEFAULT_PROTOCOL_FEE: Fraction = Fraction::percent(1);

/// Highest accepted protocol fee (10 %).
pub const MAX_PROTOCOL_FEE: Fraction = Fraction::percent(10);

/// Protocol fee rate and the account that collects it.
///
/// Loadable from TOML:
///
/// ```
/// use nft_amm::config::ProtocolFeeConfig;
/// use nft_amm::domain::Fraction;
///
/// let text = r#"
///     fee = "10000000000000000"
///     recipient = "0x0101010101010101010101010101010101010101010101010101010101010101"
/// "#;
/// let config = ProtocolFeeConfig::from_toml_str(text);
/// assert_eq!(config.map(|c| c.fee()), Ok(Fraction::percent(1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolFeeConfig {
    fee: Fraction,
    recipient: Address,
}

impl ProtocolFeeConfig {
    /// Creates a validated config.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `fee` exceeds
    /// [`MAX_PROTOCOL_FEE`].
    pub fn new(fee: Fraction, recipient: Address) -> Result<Self, AmmError> {
        let config = Self { fee, recipient };
        config.validate()?;
        Ok(config)
    }

    /// Default fee paid to `recipient`.
    #[must_use]
    pub const fn with_default_fee(recipient: Address) -> Self {
        Self {
            fee: DEFAULT_PROTOCOL_FEE,
            recipient,
        }
    }

    /// Parses and validates a TOML document with `fee` and `recipient` keys.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the document is
    /// malformed or the fee is out of range.
    pub fn from_toml_str(text: &str) -> Result<Self, AmmError> {
        let config: Self = toml::from_str(text).map_err(|err| {
            debug!(error = %err, "rejected protocol fee config");
            AmmError::InvalidConfiguration("malformed protocol fee config")
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `fee` exceeds
    /// [`MAX_PROTOCOL_FEE`].
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.fee > MAX_PROTOCOL_FEE {
            return Err(AmmError::InvalidConfiguration("protocol fee above maximum"));
        }
        Ok(())
    }

    /// Fee fraction.
    #[must_use]
    pub const fn fee(&self) -> Fraction {
        self.fee
    }

    /// Fee recipient.
    #[must_use]
    pub const fn recipient(&self) -> Address {
        self.recipient
    }
}

/// Live, shared handle on the factory's protocol fee settings.
///
/// The factory writes through it; every pair it created reads it on each
/// call, so changes apply to the next trade without any caching.
#[derive(Debug, Clone)]
pub struct ProtocolFees(Arc<RwLock<ProtocolFeeConfig>>);

impl ProtocolFees {
    /// Wraps `config` in a new shared handle.
    #[must_use]
    pub fn new(config: ProtocolFeeConfig) -> Self {
        Self(Arc::new(RwLock::new(config)))
    }

    /// Current settings.
    #[must_use]
    pub fn current(&self) -> ProtocolFeeConfig {
        *self.0.read()
    }

    /// Current fee fraction.
    #[must_use]
    pub fn fee(&self) -> Fraction {
        self.0.read().fee
    }

    /// Current fee recipient.
    #[must_use]
    pub fn recipient(&self) -> Address {
        self.0.read().recipient
    }

    /// Fee schedule for a trade with `trade_fee`.
    #[must_use]
    pub fn schedule(&self, trade_fee: Fraction) -> FeeSchedule {
        FeeSchedule::new(trade_fee, self.fee())
    }

    pub(crate) fn set_fee(&self, fee: Fraction) -> Result<(), AmmError> {
        let mut guard = self.0.write();
        ProtocolFeeConfig::new(fee, guard.recipient)?;
        guard.fee = fee;
        Ok(())
    }

    pub(crate) fn set_recipient(&self, recipient: Address) {
        self.0.write().recipient = recipient;
    }
}
