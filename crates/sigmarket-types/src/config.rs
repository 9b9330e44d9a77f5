//! Configuration for a Settlement Engine instance.

use serde::{Deserialize, Serialize};

use crate::{constants, Address, Result, SigmarketError};

/// Owner-mutable configuration of one engine instance.
///
/// Set at deployment-adjacent configuration time, read on every fill.
/// The three registries the engine consults are shared by reference and
/// wired separately (see `SettlementEngine::set_registry_contracts`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// The administrator: the only account allowed to mutate this config.
    pub owner: Address,
    /// Fee recipient. [`Address::ZERO`] disables the fee path entirely.
    pub maker_wallet: Address,
    /// Maker fee in basis points of the order total, routed to
    /// `maker_wallet`; the remainder goes to the seller.
    pub fee_bps: u16,
}

impl EngineConfig {
    /// Create a validated config.
    ///
    /// # Errors
    /// Returns [`SigmarketError::FeeOutOfRange`] when `fee_bps` exceeds
    /// 10_000.
    pub fn new(owner: Address, maker_wallet: Address, fee_bps: u16) -> Result<Self> {
        if fee_bps > constants::MAX_FEE_BPS {
            return Err(SigmarketError::FeeOutOfRange { bps: fee_bps });
        }
        Ok(Self {
            owner,
            maker_wallet,
            fee_bps,
        })
    }

    /// Fee-free config with no maker wallet.
    #[must_use]
    pub fn fee_free(owner: Address) -> Self {
        Self {
            owner,
            maker_wallet: Address::ZERO,
            fee_bps: 0,
        }
    }

    /// The maker fee taken from an order total. Zero when the fee path is
    /// disabled. Cannot overflow: `fee_bps <= FEE_DENOMINATOR` bounds the
    /// product below `u128::MAX`.
    #[must_use]
    pub fn fee_for(&self, total: u128) -> u128 {
        if self.fee_bps == 0 || self.maker_wallet.is_zero() {
            return 0;
        }
        total / constants::FEE_DENOMINATOR * u128::from(self.fee_bps)
            + total % constants::FEE_DENOMINATOR * u128::from(self.fee_bps)
                / constants::FEE_DENOMINATOR
    }
}
