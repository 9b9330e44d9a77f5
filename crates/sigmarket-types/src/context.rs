//! Per-call execution context supplied by the hosting ledger.

use serde::{Deserialize, Serialize};

use crate::Address;

/// The transaction environment of a single engine invocation.
///
/// The caller need not equal the buyer of a fill: relayers submit orders
/// on behalf of buyers, attaching native value themselves while the
/// buyer's token allowance is the one debited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContext {
    /// The account submitting the transaction.
    pub caller: Address,
    /// Native value escrowed with the call (the `msg.value` analogue).
    pub attached_value: u128,
    /// Current block height. Cancellation epochs are block heights.
    pub block_height: u64,
    /// Current ledger timestamp, seconds.
    pub timestamp: u64,
}

impl CallContext {
    /// A plain call with no attached native value.
    #[must_use]
    pub fn new(caller: Address, block_height: u64, timestamp: u64) -> Self {
        Self {
            caller,
            attached_value: 0,
            block_height,
            timestamp,
        }
    }

    /// The same call with native value attached.
    #[must_use]
    pub fn with_value(mut self, attached_value: u128) -> Self {
        self.attached_value = attached_value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_value_attaches() {
        let ctx = CallContext::new(Address([1u8; 32]), 10, 1_000).with_value(500);
        assert_eq!(ctx.attached_value, 500);
        assert_eq!(ctx.block_height, 10);
        assert_eq!(ctx.timestamp, 1_000);
    }
}
