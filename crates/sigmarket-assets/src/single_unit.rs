//! Single-unit token collection: each identifier denotes exactly one
//! indivisible unit owned by exactly one address at a time.

use std::collections::{HashMap, HashSet};

use sigmarket_types::{Address, Result, SigmarketError, TokenId};

use crate::contract::{AssetContract, AssetKind};

/// Ownership-style collection. Transfers move exactly one unit; any
/// quantity beyond 1 on the order is meaningless here and ignored by the
/// adapter.
#[derive(Debug, Clone)]
pub struct SingleUnitCollection {
    address: Address,
    owners: HashMap<TokenId, Address>,
    /// (owner, operator) pairs with blanket transfer rights.
    approvals: HashSet<(Address, Address)>,
}

impl SingleUnitCollection {
    #[must_use]
    pub fn new(address: Address) -> Self {
        Self {
            address,
            owners: HashMap::new(),
            approvals: HashSet::new(),
        }
    }

    /// Assign a previously unowned unit to `owner`.
    pub fn mint(&mut self, token_id: TokenId, owner: Address) {
        self.owners.insert(token_id, owner);
    }

    /// Current owner of a unit, if it exists.
    #[must_use]
    pub fn owner_of(&self, token_id: TokenId) -> Option<Address> {
        self.owners.get(&token_id).copied()
    }
}

impl AssetContract for SingleUnitCollection {
    fn address(&self) -> Address {
        self.address
    }

    fn capability(&self) -> AssetKind {
        AssetKind::SingleUnit
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

    fn transfer_single(
        &mut self,
        operator: Address,
        token_id: TokenId,
        from: Address,
        to: Address,
    ) -> Result<()> {
        let owner = self
            .owners
            .get(&token_id)
            .copied()
            .ok_or(SigmarketError::AssetNotOwned {
                token_id,
                claimed_owner: from,
            })?;
        if owner != from {
            return Err(SigmarketError::AssetNotOwned {
                token_id,
                claimed_owner: from,
            });
        }
        if operator != from && !self.is_approved_for_all(from, operator) {
            return Err(SigmarketError::NotAuthorized { caller: operator });
        }
        self.owners.insert(token_id, to);
        Ok(())
    }
}
