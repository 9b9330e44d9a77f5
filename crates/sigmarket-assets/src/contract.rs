//! The asset-contract capability surface.
//!
//! Token collections come in two recognized shapes: single-unit
//! (one indivisible unit per identifier, one owner at a time) and
//! batch-unit (a per-owner quantity under each identifier). The engine
//! never branches on concrete types; it probes [`AssetContract::capability`]
//! and dispatches through the matching transfer entry point. A contract
//! exposing neither shape is a hard `UnrecognizedAssetKind` stop.

use sigmarket_types::{Address, Result, SigmarketError, TokenId};

/// The tagged result of a capability probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// One indivisible unit per identifier, owned by exactly one address.
    SingleUnit,
    /// Per-owner quantity under each identifier, divisible into partial
    /// transfers.
    BatchUnit,
    /// Neither recognized transfer interface.
    Unsupported,
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SingleUnit => write!(f, "SINGLE_UNIT"),
            Self::BatchUnit => write!(f, "BATCH_UNIT"),
            Self::Unsupported => write!(f, "UNSUPPORTED"),
        }
    }
}

/// The interface every deployed token collection exposes to the ledger.
///
/// Operator approvals are shared bookkeeping across both kinds — a
/// contract of either shape (and even an unsupported one) answers
/// [`is_approved_for_all`](Self::is_approved_for_all), which is why the
/// engine can check the seller's approval before probing the kind.
///
/// The two transfer entry points default to `UnrecognizedAssetKind`:
/// a collection overrides exactly the one matching its capability.
pub trait AssetContract: std::fmt::Debug {
    /// The address this contract is deployed at.
    fn address(&self) -> Address;

    /// Probe which transfer interface this contract exposes.
    fn capability(&self) -> AssetKind;

    /// Grant or revoke `operator`'s right to move all of `owner`'s units.
    fn set_approval_for_all(&mut self, owner: Address, operator: Address, approved: bool);

    /// Whether `operator` may move all of `owner`'s units.
    fn is_approved_for_all(&self, owner: Address, operator: Address) -> bool;

    /// Move the single unit `token_id` from `from` to `to`.
    ///
    /// # Errors
    /// `UnrecognizedAssetKind` unless overridden by a single-unit contract.
    fn transfer_single(
        &mut self,
        operator: Address,
        token_id: TokenId,
        from: Address,
        to: Address,
    ) -> Result<()> {
        let _ = (operator, token_id, from, to);
        Err(SigmarketError::UnrecognizedAssetKind(self.address()))
    }

    /// Move `quantity` units of `token_id` from `from` to `to`.
    ///
    /// # Errors
    /// `UnrecognizedAssetKind` unless overridden by a batch-unit contract.
    fn transfer_batch(
        &mut self,
        operator: Address,
        token_id: TokenId,
        from: Address,
        to: Address,
        quantity: u128,
    ) -> Result<()> {
        let _ = (operator, token_id, from, to, quantity);
        Err(SigmarketError::UnrecognizedAssetKind(self.address()))
    }
}

/// A contract that keeps operator approvals but implements neither
/// transfer interface. Drives the `UnrecognizedAssetKind` paths in tests.
#[cfg(any(test, feature = "test-helpers"))]
#[derive(Debug)]
pub struct InertContract {
    address: Address,
    approvals: std::collections::HashSet<(Address, Address)>,
}

#[cfg(any(test, feature = "test-helpers"))]
impl InertContract {
    #[must_use]
    pub fn new(address: Address) -> Self {
        Self {
            address,
            approvals: std::collections::HashSet::new(),
        }
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl AssetContract for InertContract {
    fn address(&self) -> Address {
        self.address
    }

    fn capability(&self) -> AssetKind {
        AssetKind::Unsupported
    }

    fn set_approval_for_all(&mut self, owner: Address, operator: Address, approved: bool) {
        if approved {
            self.approvals.insert((owner, operator));
        } else {
            self.approvals.remove(&(owner, operator));
        }
    }

    fn is_approved_for_all(&self, owner: Address, operator: Address) -> bool {
        self.approvals.contains(&(owner, operator))
    }
}
