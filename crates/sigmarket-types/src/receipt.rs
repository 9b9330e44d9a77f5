//! Fill receipts — the audit record of a completed settlement.
//!
//! The engine keeps no on-chain order state, so the receipt returned from
//! a successful fill is the only settlement artifact. It identifies the
//! filled order by digest, not by any stored identifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Address, ReceiptId, TokenId};

/// Proof that one sell order settled: who paid what to whom, and which
/// asset units moved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillReceipt {
    /// Unique receipt identifier.
    pub id: ReceiptId,
    /// SHA-256 digest of the filled order's signing payload.
    pub order_digest: [u8; 32],
    pub seller: Address,
    pub buyer: Address,
    pub asset_contract: Address,
    pub asset_id: TokenId,
    /// Units actually moved: `quantity` on the batch path, 1 on the
    /// single-unit path.
    pub quantity_transferred: u128,
    /// [`Address::ZERO`] for native settlement.
    pub payment_asset: Address,
    /// Total debited from the paying side (`price * quantity`).
    pub total_paid: u128,
    /// Portion of `total_paid` routed to the maker wallet.
    pub fee_paid: u128,
    /// Wall-clock issue time of the receipt.
    pub executed_at: DateTime<Utc>,
    /// Ledger block the fill executed in.
    pub block_height: u64,
}

impl FillReceipt {
    /// Portion of `total_paid` forwarded to the seller.
    #[must_use]
    pub fn seller_proceeds(&self) -> u128 {
        self.total_paid - self.fee_paid
    }
}
