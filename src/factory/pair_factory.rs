//! The pair factory.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::config::{PairConfig, ProtocolFeeConfig, ProtocolFees};
use crate::domain::{Address, CurveKind, Fraction, PairCreated, PoolType};
use crate::error::AmmError;
use crate::pair::{CallContext, Pair};

/// Deploys pairs and administers the protocol fee.
///
/// Every pair created here shares the factory's [`ProtocolFees`] handle,
/// so a fee or recipient change applies to each pair's next trade.
///
/// Pair addresses are `keccak256(factory || nonce)`; the nonce only
/// advances when a creation succeeds.
#[derive(Debug)]
pub struct PairFactory {
    address: Address,
    owner: Address,
    protocol: ProtocolFees,
    allowed: HashSet<CurveKind>,
    nonce: u64,
    records: Vec<PairCreated>,
}

impl PairFactory {
    /// Creates a factory at `address` administered by `owner`.  Every
    /// curve compiled into the crate starts out allowed.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `protocol` fails
    /// validation.
    pub fn new(
        address: Address,
        owner: Address,
        protocol: ProtocolFeeConfig,
    ) -> Result<Self, AmmError> {
        protocol.validate()?;
        let allowed = CurveKind::ALL
            .into_iter()
            .filter(CurveKind::is_compiled)
            .collect();
        Ok(Self {
            address,
            owner,
            protocol: ProtocolFees::new(protocol),
            allowed,
            nonce: 0,
            records: Vec::new(),
        })
    }

    /// Deploys, initializes and funds a pair owned by `ctx.sender`.
    ///
    /// `ctx.value` is the native deposit and `config.item_ids()` the items
    /// moved from the sender.  Token pools need a deposit and no items, NFT
    /// pools items and no deposit, Trade pools both.
    ///
    /// # Errors
    ///
    /// - [`AmmError::CurveNotApproved`] if the curve is not allowed.
    /// - [`AmmError::InvalidConfiguration`] if `config` is inconsistent or
    ///   the funding does not match the pool type.
    /// - Any [`Pair::init`] error.
    /// - A transfer error if the sender cannot supply the deposit or an
    ///   item; nothing is moved in that case.
    pub fn create_pair(
        &mut self,
        ctx: &mut CallContext<'_>,
        config: &PairConfig,
    ) -> Result<Pair, AmmError> {
        if !self.allowed.contains(&config.curve()) {
            debug!(curve = %config.curve(), "curve not approved");
            return Err(AmmError::CurveNotApproved);
        }
        config.validate()?;
        let funded = !ctx.value.is_zero();
        match config.pool_type() {
            PoolType::Token | PoolType::Trade if !funded => {
                return Err(AmmError::InvalidConfiguration("pool requires a native deposit"));
            }
            PoolType::Nft if funded => {
                return Err(AmmError::InvalidConfiguration("nft pool takes no native deposit"));
            }
            _ => {}
        }

        let address = Address::derive(&self.address, self.nonce);
        let mut pair = Pair::new(address, self.address, self.protocol.clone());
        pair.init(ctx.sender, config, &*ctx.collection)?;
        let deposit = ctx.value;
        pair.fund(ctx, config.item_ids(), deposit)?;

        self.nonce = self.nonce.saturating_add(1);
        let record = PairCreated {
            pair: address,
            owner: ctx.sender,
        };
        self.records.push(record);
        info!(
            pair = %address,
            owner = %ctx.sender,
            curve = %config.curve(),
            pool_type = %config.pool_type(),
            items = config.item_ids().len(),
            deposit = %deposit,
            "pair created"
        );
        Ok(pair)
    }

    /// Sets the protocol fee for every pair.
    ///
    /// # Errors
    ///
    /// [`AmmError::Unauthorized`] for non-owners,
    /// [`AmmError::InvalidParameter`] above
    /// [`MAX_PROTOCOL_FEE`](crate::config::MAX_PROTOCOL_FEE).
    pub fn set_protocol_fee(&mut self, sender: &Address, fee: Fraction) -> Result<(), AmmError> {
        self.authorize(sender)?;
        self.protocol
            .set_fee(fee)
            .map_err(|_| AmmError::InvalidParameter("protocol fee above maximum"))?;
        info!(factory = %self.address, %fee, "protocol fee updated");
        Ok(())
    }

    /// Sets the account that collects protocol fees.
    ///
    /// # Errors
    ///
    /// [`AmmError::Unauthorized`] for non-owners.
    pub fn set_protocol_fee_recipient(
        &mut self,
        sender: &Address,
        recipient: Address,
    ) -> Result<(), AmmError> {
        self.authorize(sender)?;
        self.protocol.set_recipient(recipient);
        info!(factory = %self.address, %recipient, "protocol fee recipient updated");
        Ok(())
    }

    /// Adds `curve` to or removes it from the allow-list.  Existing pairs
    /// keep their curve.
    ///
    /// # Errors
    ///
    /// [`AmmError::Unauthorized`] for non-owners,
    /// [`AmmError::CurveNotApproved`] when allowing a curve that is not
    /// compiled in.
    pub fn set_curve_allowed(
        &mut self,
        sender: &Address,
        curve: CurveKind,
        allowed: bool,
    ) -> Result<(), AmmError> {
        self.authorize(sender)?;
        if allowed {
            if !curve.is_compiled() {
                return Err(AmmError::CurveNotApproved);
            }
            self.allowed.insert(curve);
        } else {
            self.allowed.remove(&curve);
        }
        info!(factory = %self.address, %curve, allowed, "curve allow-list updated");
        Ok(())
    }

    /// Factory address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Factory owner.
    #[must_use]
    pub const fn owner(&self) -> Address {
        self.owner
    }

    /// Returns `true` if pairs may be created with `curve`.
    #[must_use]
    pub fn is_curve_allowed(&self, curve: CurveKind) -> bool {
        self.allowed.contains(&curve)
    }

    /// Shared protocol fee handle.
    #[must_use]
    pub const fn protocol(&self) -> &ProtocolFees {
        &self.protocol
    }

    /// Every pair created so far, oldest first.
    #[must_use]
    pub fn records(&self) -> &[PairCreated] {
        &self.records
    }

    fn authorize(&self, sender: &Address) -> Result<(), AmmError> {
        if *sender != self.owner {
            debug!(factory = %self.address, %sender, "rejected non-owner call");
            return Err(AmmError::Unauthorized);
        }
        Ok(())
    }
}
