//! Validated configuration structs.
//!
//! - [`PairConfig`]: blueprint for one pair.
//! - [`ProtocolFeeConfig`]: factory-wide fee rate and recipient, loadable
//!   from TOML; [`ProtocolFees`] is its live shared handle.

mod pair_config;
mod protocol_config;

pub use pair_config::{PairConfig, MAX_TRADE_FEE};
pub use protocol_config::{
    ProtocolFeeConfig, ProtocolFees, DEFAULT_PROTOCOL_FEE, MAX_PROTOCOL_FEE,
};
