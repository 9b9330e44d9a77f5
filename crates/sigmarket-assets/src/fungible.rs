//! Fungible payment token: balances plus (owner, spender) allowances.
//!
//! The engine never custodies these tokens; it spends the buyer's
//! allowance within the settlement call via [`FungibleToken::transfer_from`].

use std::collections::HashMap;

use sigmarket_types::{Address, Result, SigmarketError};

/// An allowance-based fungible token, amounts in smallest units.
#[derive(Debug, Clone, Default)]
pub struct FungibleToken {
    balances: HashMap<Address, u128>,
    /// (owner, spender) -> remaining approved amount.
    allowances: HashMap<(Address, Address), u128>,
}

impl FungibleToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit freshly issued units to `owner`. Saturates at `u128::MAX`
    /// rather than wrapping.
    pub fn mint(&mut self, owner: Address, amount: u128) {
        let balance = self.balances.entry(owner).or_insert(0);
        *balance = balance.saturating_add(amount);
    }

    #[must_use]
    pub fn balance_of(&self, owner: Address) -> u128 {
        self.balances.get(&owner).copied().unwrap_or(0)
    }

    /// Set `spender`'s allowance over `owner`'s balance. Overwrites, does
    /// not accumulate.
    pub fn approve(&mut self, owner: Address, spender: Address, amount: u128) {
        self.allowances.insert((owner, spender), amount);
    }

    #[must_use]
    pub fn allowance(&self, owner: Address, spender: Address) -> u128 {
        self.allowances
            .get(&(owner, spender))
            .copied()
            .unwrap_or(0)
    }

    /// Move `amount` from `from` to `to`, debiting `spender`'s allowance.
    ///
    /// Check-then-mutate: nothing changes unless both the allowance and
    /// the balance cover the amount.
    ///
    /// # Errors
    /// `InsufficientAllowance` or `InsufficientBuyerBalance`.
    pub fn transfer_from(
        &mut self,
        spender: Address,
        from: Address,
        to: Address,
        amount: u128,
    ) -> Result<()> {
        let approved = self.allowance(from, spender);
        if approved < amount {
            return Err(SigmarketError::InsufficientAllowance {
                needed: amount,
                approved,
            });
        }
        let available = self.balance_of(from);
        if available < amount {
            return Err(SigmarketError::InsufficientBuyerBalance {
                needed: amount,
                available,
            });
        }
        self.allowances.insert((from, spender), approved - amount);
        *self.balances.entry(from).or_insert(0) -= amount;
        let credited = self.balances.entry(to).or_insert(0);
        *credited = credited.saturating_add(amount);
        Ok(())
    }
}
