//! Records returned to callers after state-changing operations.

use serde::{Deserialize, Serialize};

use super::{Address, Amount};

/// Emitted by the factory when a pair is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairCreated {
    /// Address of the new pair.
    pub pair: Address,
    /// Owner of the new pair.
    pub owner: Address,
}

/// Result of selling items into a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SellRecord {
    /// Native value paid to the seller's recipient.
    pub amount_out: Amount,
}

/// Result of buying items from a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuyRecord {
    /// Native value charged to the buyer, fees included.
    pub amount_in: Amount,
}
