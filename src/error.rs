//! Unified error types for the NFT AMM library.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type.  Every variant maps to a stable reason code (see
//! [`AmmError::code`]) so callers can branch on the cause without parsing
//! display strings.
//!
//! # Propagation
//!
//! An error aborts the entire call.  Pair and factory operations restore
//! their state and reverse any transfers already applied before returning
//! the error, so no partial effect is ever observable.  Nothing is retried
//! internally.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Every way an AMM operation can fail.
///
/// String payloads are static context describing which check tripped; they
/// are informational and not part of the stable contract.  Use
/// [`code`](Self::code) for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AmmError {
    /// `init` was called on a pair that is already initialized.
    #[error("it is already initialized")]
    AlreadyInitialized,

    /// An operation was attempted on a pair that was never initialized.
    #[error("pair is not initialized")]
    NotInitialized,

    /// The swap direction is not supported by the pair's pool type.
    #[error("invalid pool type")]
    InvalidPoolType,

    /// The curve cannot price the request (zero items, exhausted reserves,
    /// or arithmetic outside the representable range).
    #[error("curve error: {0}")]
    CurveError(&'static str),

    /// Output fell below the caller's minimum or input exceeded the
    /// caller's maximum.
    #[error("slippage exceeded: {0}")]
    SlippageExceeded(&'static str),

    /// The value attached to a buy does not cover the required input.
    #[error("insufficient amount of native value attached")]
    InsufficientPayment,

    /// A proposed parameter is rejected by the curve or is a no-op update.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// The caller is not allowed to perform an owner-only operation.
    #[error("caller is not authorized")]
    Unauthorized,

    /// The assets recipient cannot be changed on Trade pools.
    #[error("recipient not supported in trade pools")]
    RecipientUnsupported,

    /// Nothing to withdraw, or the requested items are not in custody.
    #[error("insufficient balance: {0}")]
    InsufficientBalance(&'static str),

    /// The curve is not on the factory's allow-list.
    #[error("curve is not approved by the factory")]
    CurveNotApproved,

    /// The pair blueprint is internally inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// An external item or value transfer was refused.
    #[error("transfer failed: {0}")]
    TransferFailed(&'static str),

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,
}

impl AmmError {
    /// Returns a stable, machine-readable reason code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::AlreadyInitialized => "ALREADY_INITIALIZED",
            Self::NotInitialized => "NOT_INITIALIZED",
            Self::InvalidPoolType => "INVALID_POOL_TYPE",
            Self::CurveError(_) => "CURVE_ERROR",
            Self::SlippageExceeded(_) => "SLIPPAGE_EXCEEDED",
            Self::InsufficientPayment => "INSUFFICIENT_PAYMENT",
            Self::InvalidParameter(_) => "INVALID_PARAMETER",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::RecipientUnsupported => "RECIPIENT_UNSUPPORTED",
            Self::InsufficientBalance(_) => "INSUFFICIENT_BALANCE",
            Self::CurveNotApproved => "CURVE_NOT_APPROVED",
            Self::InvalidConfiguration(_) => "INVALID_CONFIGURATION",
            Self::TransferFailed(_) => "TRANSFER_FAILED",
            Self::Overflow(_) => "OVERFLOW",
            Self::Underflow(_) => "UNDERFLOW",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
        }
    }

    /// Returns `true` for arithmetic failures (overflow, underflow,
    /// division by zero).
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Self::Overflow(_) | Self::Underflow(_) | Self::DivisionByZero
        )
    }
}
