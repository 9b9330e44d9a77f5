//! The hosting ledger: native balances, deployed fungible tokens, and
//! deployed asset collections, all behind one address space.
//!
//! Execution is single-threaded and serialized; every engine call runs
//! against `&mut Ledger` to completion. The engine is responsible for
//! ordering its reads and writes so that no fallible step remains once
//! the first state write has occurred.

use std::collections::HashMap;

use sigmarket_types::{Address, Result, SigmarketError};

use crate::contract::AssetContract;
use crate::fungible::FungibleToken;

/// In-process ledger state.
#[derive(Debug, Default)]
pub struct Ledger {
    native: HashMap<Address, u128>,
    fungibles: HashMap<Address, FungibleToken>,
    assets: HashMap<Address, Box<dyn AssetContract>>,
}

impl Ledger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- native asset --------------------------------------------------

    /// Credit native units to an account. Saturates at `u128::MAX` rather
    /// than wrapping.
    pub fn deposit_native(&mut self, account: Address, amount: u128) {
        let balance = self.native.entry(account).or_insert(0);
        *balance = balance.saturating_add(amount);
    }

    #[must_use]
    pub fn native_balance(&self, account: Address) -> u128 {
        self.native.get(&account).copied().unwrap_or(0)
    }

    /// Debit native units from an account, checked.
    ///
    /// # Errors
    /// `InsufficientNativeBalance` when the account cannot cover `amount`.
    pub fn debit_native(&mut self, account: Address, amount: u128) -> Result<()> {
        let available = self.native_balance(account);
        if available < amount {
            return Err(SigmarketError::InsufficientNativeBalance {
                needed: amount,
                available,
            });
        }
        *self.native.entry(account).or_insert(0) -= amount;
        Ok(())
    }

    // -- fungible tokens -----------------------------------------------

    /// Deploy a fungible token at `address`.
    pub fn register_fungible(&mut self, address: Address, token: FungibleToken) {
        tracing::debug!(address = %address, "Fungible token deployed");
        self.fungibles.insert(address, token);
    }

    /// # Errors
    /// `UnknownPaymentAsset` when nothing is deployed at `address`.
    pub fn fungible(&self, address: Address) -> Result<&FungibleToken> {
        self.fungibles
            .get(&address)
            .ok_or(SigmarketError::UnknownPaymentAsset(address))
    }

    /// # Errors
    /// `UnknownPaymentAsset` when nothing is deployed at `address`.
    pub fn fungible_mut(&mut self, address: Address) -> Result<&mut FungibleToken> {
        self.fungibles
            .get_mut(&address)
            .ok_or(SigmarketError::UnknownPaymentAsset(address))
    }

    // -- asset collections ---------------------------------------------

    /// Deploy an asset collection; keyed by the contract's own address.
    pub fn register_asset(&mut self, contract: Box<dyn AssetContract>) {
        tracing::debug!(
            address = %contract.address(),
            kind = %contract.capability(),
            "Asset collection deployed"
        );
        self.assets.insert(contract.address(), contract);
    }

    /// # Errors
    /// `UnknownAssetContract` when nothing is deployed at `address`.
    pub fn asset(&self, address: Address) -> Result<&dyn AssetContract> {
        self.assets
            .get(&address)
            .map(AsRef::as_ref)
            .ok_or(SigmarketError::UnknownAssetContract(address))
    }

    /// # Errors
    /// `UnknownAssetContract` when nothing is deployed at `address`.
    pub fn asset_mut(&mut self, address: Address) -> Result<&mut dyn AssetContract> {
        match self.assets.get_mut(&address) {
            Some(contract) => Ok(contract.as_mut()),
            None => Err(SigmarketError::UnknownAssetContract(address)),
        }
    }
}
