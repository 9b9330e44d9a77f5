//! Payment Asset Registry — the whitelist of fungible payment tokens.
//!
//! A sell order priced in anything other than the native asset must name a
//! token on this list, or the fill rejects with `PaymentAssetNotApproved`.
//! Deliberately minimal: address-keyed membership, admin-gated mutation,
//! public reads, no expiry.

use std::collections::HashSet;

use sigmarket_types::{Address, Result, SigmarketError};

/// Whitelist of fungible-token contracts accepted as payment.
#[derive(Debug, Clone)]
pub struct PaymentAssetRegistry {
    admin: Address,
    approved: HashSet<Address>,
}

impl PaymentAssetRegistry {
    #[must_use]
    pub fn new(admin: Address) -> Self {
        Self {
            admin,
            approved: HashSet::new(),
        }
    }

    /// Approve a token contract for payment.
    ///
    /// # Errors
    /// `NotOwner` when `caller` is not the administrator.
    pub fn add(&mut self, caller: Address, token: Address) -> Result<()> {
        if caller != self.admin {
            return Err(SigmarketError::NotOwner { caller });
        }
        self.approved.insert(token);
        tracing::info!(token = %token, "Payment asset approved");
        Ok(())
    }

    /// Remove a token contract from the whitelist.
    ///
    /// # Errors
    /// `NotOwner` when `caller` is not the administrator.
    pub fn remove(&mut self, caller: Address, token: Address) -> Result<()> {
        if caller != self.admin {
            return Err(SigmarketError::NotOwner { caller });
        }
        self.approved.remove(&token);
        tracing::info!(token = %token, "Payment asset removed");
        Ok(())
    }

    /// Whether `token` is currently accepted as payment.
    #[must_use]
    pub fn is_approved(&self, token: Address) -> bool {
        self.approved.contains(&token)
    }

    /// Hand the registry to a new administrator.
    ///
    /// # Errors
    /// `NotOwner` when `caller` is not the current administrator.
    pub fn transfer_admin(&mut self, caller: Address, new_admin: Address) -> Result<()> {
        if caller != self.admin {
            return Err(SigmarketError::NotOwner { caller });
        }
        self.admin = new_admin;
        Ok(())
    }

    #[must_use]
    pub fn admin(&self) -> Address {
        self.admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigmarket_types::testkit::random_address;

    #[test]
    fn add_then_remove() {
        let admin = random_address();
        let token = random_address();
        let mut reg = PaymentAssetRegistry::new(admin);

        assert!(!reg.is_approved(token));
        reg.add(admin, token).unwrap();
        assert!(reg.is_approved(token));
        reg.remove(admin, token).unwrap();
        assert!(!reg.is_approved(token));
    }

    #[test]
    fn mutation_is_admin_gated() {
        let mut reg = PaymentAssetRegistry::new(random_address());
        let intruder = random_address();

        let err = reg.add(intruder, random_address()).unwrap_err();
        assert!(matches!(err, SigmarketError::NotOwner { .. }));
        let err = reg.remove(intruder, random_address()).unwrap_err();
        assert!(matches!(err, SigmarketError::NotOwner { .. }));
    }

    #[test]
    fn add_is_idempotent() {
        let admin = random_address();
        let token = random_address();
        let mut reg = PaymentAssetRegistry::new(admin);
        reg.add(admin, token).unwrap();
        reg.add(admin, token).unwrap();
        assert!(reg.is_approved(token));
    }
}
