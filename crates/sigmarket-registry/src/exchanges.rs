//! Exchange Registry — the whitelist of trusted settlement engines.
//!
//! The Cancellation Registry is shared by reference across exchange
//! instances; this registry is the access-control gate deciding which
//! Settlement Engine instances may rely on it. An engine that is not
//! listed refuses to fill, rather than trusting (or silently ignoring)
//! cancellation state it has no standing to read.

use std::collections::HashSet;

use sigmarket_types::{Address, Result, SigmarketError};

/// Whitelist of Settlement Engine instances.
#[derive(Debug, Clone)]
pub struct ExchangeRegistry {
    admin: Address,
    approved: HashSet<Address>,
}

impl ExchangeRegistry {
    #[must_use]
    pub fn new(admin: Address) -> Self {
        Self {
            admin,
            approved: HashSet::new(),
        }
    }

    /// Authorize an exchange instance.
    ///
    /// # Errors
    /// `NotOwner` when `caller` is not the administrator.
    pub fn add(&mut self, caller: Address, exchange: Address) -> Result<()> {
        if caller != self.admin {
            return Err(SigmarketError::NotOwner { caller });
        }
        self.approved.insert(exchange);
        tracing::info!(exchange = %exchange, "Exchange authorized");
        Ok(())
    }

    /// Revoke an exchange instance.
    ///
    /// # Errors
    /// `NotOwner` when `caller` is not the administrator.
    pub fn remove(&mut self, caller: Address, exchange: Address) -> Result<()> {
        if caller != self.admin {
            return Err(SigmarketError::NotOwner { caller });
        }
        self.approved.remove(&exchange);
        tracing::info!(exchange = %exchange, "Exchange revoked");
        Ok(())
    }

    /// Whether `exchange` is a trusted engine instance.
    #[must_use]
    pub fn is_approved(&self, exchange: Address) -> bool {
        self.approved.contains(&exchange)
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
