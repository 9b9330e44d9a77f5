//! Batch-unit token collection: each identifier has a per-owner balance,
//! divisible into partial transfers.

use std::collections::{HashMap, HashSet};

use sigmarket_types::{Address, Result, SigmarketError, TokenId};

use crate::contract::{AssetContract, AssetKind};

/// Quantity-bearing collection.
#[derive(Debug, Clone)]
pub struct BatchUnitCollection {
    address: Address,
    balances: HashMap<(TokenId, Address), u128>,
    approvals: HashSet<(Address, Address)>,
}

impl BatchUnitCollection {
    #[must_use]
    pub fn new(address: Address) -> Self {
        Self {
            address,
            balances: HashMap::new(),
            approvals: HashSet::new(),
        }
    }

    /// Credit `quantity` units of `token_id` to `owner`. Saturates at
    /// `u128::MAX` rather than wrapping.
    pub fn mint(&mut self, token_id: TokenId, owner: Address, quantity: u128) {
        let balance = self.balances.entry((token_id, owner)).or_insert(0);
        *balance = balance.saturating_add(quantity);
    }

    /// `owner`'s balance of `token_id`.
    #[must_use]
    pub fn balance_of(&self, token_id: TokenId, owner: Address) -> u128 {
        self.balances.get(&(token_id, owner)).copied().unwrap_or(0)
    }
}

impl AssetContract for BatchUnitCollection {
    fn address(&self) -> Address {
        self.address
    }

    fn capability(&self) -> AssetKind {
        AssetKind::BatchUnit
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

    fn transfer_batch(
        &mut self,
        operator: Address,
        token_id: TokenId,
        from: Address,
        to: Address,
        quantity: u128,
    ) -> Result<()> {
        if operator != from && !self.is_approved_for_all(from, operator) {
            return Err(SigmarketError::NotAuthorized { caller: operator });
        }
        let available = self.balance_of(token_id, from);
        if available < quantity {
            return Err(SigmarketError::InsufficientAssetBalance {
                needed: quantity,
                available,
            });
        }
        *self.balances.entry((token_id, from)).or_insert(0) -= quantity;
        let credited = self.balances.entry((token_id, to)).or_insert(0);
        *credited = credited.saturating_add(quantity);
        Ok(())
    }
}
