use crate::domain::{Address, Amount};
use crate::traits::{ItemCollection, NativeBank};

/// Caller identity and the collaborators a state-changing call may touch.
///
/// `value` is the native value attached to the call.  It still sits in the
/// sender's account; only buy swaps and funding pull it, and buys refund
/// whatever exceeds the price.
pub struct CallContext<'a> {
    /// Account making the call.
    pub sender: Address,
    /// Native value attached to the call.
    pub value: Amount,
    /// Native-value ledger.
    pub bank: &'a mut dyn NativeBank,
    /// Item collection the call operates on.
    pub collection: &'a mut dyn ItemCollection,
}

impl<'a> CallContext<'a> {
    /// Context with no attached value.
    pub fn new(
        sender: Address,
        bank: &'a mut dyn NativeBank,
        collection: &'a mut dyn ItemCollection,
    ) -> Self {
        Self {
            sender,
            value: Amount::ZERO,
            bank,
            collection,
        }
    }

    /// Attaches `value` to the call.
    #[must_use]
    pub fn with_value(mut self, value: Amount) -> Self {
        self.value = value;
        self
    }
}
