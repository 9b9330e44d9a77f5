//! Cancellation Registry — the per-seller, per-asset revocation ledger.
//!
//! Sell orders are never stored on-chain, so a seller cannot delete one.
//! Instead the registry keeps a block-height watermark per
//! `(seller, asset_contract, asset_id)` triple: every order authored at or
//! below the watermark is revoked. The registry is shared by reference
//! across exchange instances; registrants (typically exchanges) may cancel
//! on behalf of sellers who placed through them.

use std::collections::{HashMap, HashSet};

use sigmarket_types::{Address, Result, SigmarketError, TokenId};

/// Revocation ledger keyed by block-height epochs.
///
/// Epochs only ever advance: re-cancelling sets the watermark to
/// `max(stored, current_block)`, never backwards.
#[derive(Debug, Clone)]
pub struct CancellationRegistry {
    /// The only account allowed to manage registrants.
    admin: Address,
    /// Accounts allowed to cancel on sellers' behalf.
    registrants: HashSet<Address>,
    /// Last-cancelled-at-block per (seller, asset contract, asset id).
    epochs: HashMap<(Address, Address, TokenId), u64>,
}

impl CancellationRegistry {
    #[must_use]
    pub fn new(admin: Address) -> Self {
        Self {
            admin,
            registrants: HashSet::new(),
            epochs: HashMap::new(),
        }
    }

    fn require_admin(&self, caller: Address) -> Result<()> {
        if caller == self.admin {
            Ok(())
        } else {
            Err(SigmarketError::NotOwner { caller })
        }
    }

    /// Grant `registrant` permission to cancel on sellers' behalf.
    ///
    /// # Errors
    /// `NotOwner` when `caller` is not the administrator.
    pub fn add_registrant(&mut self, caller: Address, registrant: Address) -> Result<()> {
        self.require_admin(caller)?;
        self.registrants.insert(registrant);
        tracing::info!(registrant = %registrant, "Registrant added");
        Ok(())
    }

    /// Revoke a registrant's cancellation rights.
    ///
    /// # Errors
    /// `NotOwner` when `caller` is not the administrator.
    pub fn remove_registrant(&mut self, caller: Address, registrant: Address) -> Result<()> {
        self.require_admin(caller)?;
        self.registrants.remove(&registrant);
        tracing::info!(registrant = %registrant, "Registrant removed");
        Ok(())
    }

    /// Whether `addr` may cancel on sellers' behalf.
    #[must_use]
    pub fn is_registrant(&self, addr: Address) -> bool {
        self.registrants.contains(&addr)
    }

    /// Revoke every order for `(seller, asset_contract, asset_id)` authored
    /// at or below `block_height`.
    ///
    /// Callable by the seller directly or by a registered registrant acting
    /// for the seller. Idempotent-safe: the epoch only advances.
    ///
    /// # Errors
    /// `NotAuthorized` when `caller` is neither the seller nor a registrant.
    pub fn cancel_previous_sell_orders(
        &mut self,
        caller: Address,
        seller: Address,
        asset_contract: Address,
        asset_id: TokenId,
        block_height: u64,
    ) -> Result<()> {
        if caller != seller && !self.registrants.contains(&caller) {
            return Err(SigmarketError::NotAuthorized { caller });
        }
        let epoch = self
            .epochs
            .entry((seller, asset_contract, asset_id))
            .or_insert(0);
        *epoch = (*epoch).max(block_height);
        tracing::debug!(
            seller = %seller,
            asset_contract = %asset_contract,
            asset_id = %asset_id,
            epoch = *epoch,
            "Sell orders cancelled"
        );
        Ok(())
    }

    /// Whether an order authored at `created_at_block` is revoked.
    ///
    /// True iff a cancellation exists for the triple and
    /// `created_at_block <= stored epoch`.
    #[must_use]
    pub fn is_cancelled(
        &self,
        seller: Address,
        asset_contract: Address,
        asset_id: TokenId,
        created_at_block: u64,
    ) -> bool {
        self.epochs
            .get(&(seller, asset_contract, asset_id))
            .is_some_and(|epoch| created_at_block <= *epoch)
    }

    /// The stored cancellation epoch for a triple, if any.
    #[must_use]
    pub fn cancellation_epoch(
        &self,
        seller: Address,
        asset_contract: Address,
        asset_id: TokenId,
    ) -> Option<u64> {
        self.epochs.get(&(seller, asset_contract, asset_id)).copied()
    }

    /// Hand the registry to a new administrator.
    ///
    /// # Errors
    /// `NotOwner` when `caller` is not the current administrator.
    pub fn transfer_admin(&mut self, caller: Address, new_admin: Address) -> Result<()> {
        self.require_admin(caller)?;
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

    fn setup() -> (CancellationRegistry, Address) {
        let admin = random_address();
        (CancellationRegistry::new(admin), admin)
    }

    #[test]
    fn seller_cancels_own_orders() {
        let (mut reg, _) = setup();
        let seller = random_address();
        let contract = random_address();

        reg.cancel_previous_sell_orders(seller, seller, contract, TokenId(1), 50)
            .unwrap();

        assert!(reg.is_cancelled(seller, contract, TokenId(1), 50));
        assert!(reg.is_cancelled(seller, contract, TokenId(1), 49));
        assert!(!reg.is_cancelled(seller, contract, TokenId(1), 51));
    }

    #[test]
    fn stranger_cannot_cancel() {
        let (mut reg, _) = setup();
        let seller = random_address();
        let stranger = random_address();

        let err = reg
            .cancel_previous_sell_orders(stranger, seller, random_address(), TokenId(1), 50)
            .unwrap_err();
        assert!(matches!(err, SigmarketError::NotAuthorized { .. }));
    }

    #[test]
    fn registrant_cancels_for_seller() {
        let (mut reg, admin) = setup();
        let seller = random_address();
        let exchange = random_address();
        let contract = random_address();

        reg.add_registrant(admin, exchange).unwrap();
        reg.cancel_previous_sell_orders(exchange, seller, contract, TokenId(1), 30)
            .unwrap();
        assert!(reg.is_cancelled(seller, contract, TokenId(1), 30));
    }

    #[test]
    fn removed_registrant_loses_rights() {
        let (mut reg, admin) = setup();
        let exchange = random_address();
        reg.add_registrant(admin, exchange).unwrap();
        reg.remove_registrant(admin, exchange).unwrap();

        let err = reg
            .cancel_previous_sell_orders(exchange, random_address(), random_address(), TokenId(1), 5)
            .unwrap_err();
        assert!(matches!(err, SigmarketError::NotAuthorized { .. }));
    }

    #[test]
    fn non_admin_cannot_manage_registrants() {
        let (mut reg, _) = setup();
        let intruder = random_address();
        let err = reg.add_registrant(intruder, random_address()).unwrap_err();
        assert!(matches!(err, SigmarketError::NotOwner { .. }));
    }

    #[test]
    fn epoch_is_monotonic() {
        let (mut reg, _) = setup();
        let seller = random_address();
        let contract = random_address();

        reg.cancel_previous_sell_orders(seller, seller, contract, TokenId(1), 100)
            .unwrap();
        // A stale cancel at a lower height must not regress the epoch.
        reg.cancel_previous_sell_orders(seller, seller, contract, TokenId(1), 40)
            .unwrap();

        assert_eq!(reg.cancellation_epoch(seller, contract, TokenId(1)), Some(100));
        assert!(reg.is_cancelled(seller, contract, TokenId(1), 100));
    }

    #[test]
    fn triples_are_independent() {
        let (mut reg, _) = setup();
        let seller = random_address();
        let contract = random_address();

        reg.cancel_previous_sell_orders(seller, seller, contract, TokenId(1), 50)
            .unwrap();

        assert!(!reg.is_cancelled(seller, contract, TokenId(2), 50));
        assert!(!reg.is_cancelled(seller, random_address(), TokenId(1), 50));
        assert!(!reg.is_cancelled(random_address(), contract, TokenId(1), 50));
    }

    #[test]
    fn never_cancelled_is_not_cancelled() {
        let (reg, _) = setup();
        assert!(!reg.is_cancelled(random_address(), random_address(), TokenId(1), 0));
        assert_eq!(
            reg.cancellation_epoch(random_address(), random_address(), TokenId(1)),
            None
        );
    }

    #[test]
    fn admin_transfer() {
        let (mut reg, admin) = setup();
        let new_admin = random_address();
        reg.transfer_admin(admin, new_admin).unwrap();
        assert_eq!(reg.admin(), new_admin);

        // The old admin lost its rights.
        let err = reg.add_registrant(admin, random_address()).unwrap_err();
        assert!(matches!(err, SigmarketError::NotOwner { .. }));
        reg.add_registrant(new_admin, random_address()).unwrap();
    }
}
