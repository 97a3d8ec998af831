//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use nft_amm::prelude::*;
//! ```

pub use crate::domain::{
    Address, Amount, BuyRecord, CurveKind, CurveQuote, Fraction, ItemId, PairCreated, PoolType,
    Rounding, SellRecord,
};

pub use crate::traits::{Curve, Inventory, ItemCollection, ItemEnumeration, NativeBank};

pub use crate::config::{PairConfig, ProtocolFeeConfig, ProtocolFees};

pub use crate::curves::CurveBox;

pub use crate::error::{AmmError, Result};

pub use crate::factory::PairFactory;

pub use crate::ledger::{MemoryBank, MemoryCollection};

pub use crate::pair::{CallContext, Pair};
