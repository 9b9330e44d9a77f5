//! The sell-order model and its structured signing payload.
//!
//! A [`SellOrder`] is never persisted by the engine. Sellers sign the
//! order's digest off-chain; anyone holding the signed tuple can submit it
//! for settlement. The engine reconstructs the order from call arguments
//! on every invocation and re-derives the digest, so no field can be
//! altered after signing without invalidating the signature.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{constants, Address, Result, SigmarketError, TokenId};

/// An off-chain-signed intent to sell `quantity` units of `asset_id` at a
/// fixed total price within a time window.
///
/// `created_at_block` is the cancellation-epoch marker, not a replay
/// nonce: the order is revoked once the seller's cancellation epoch for
/// `(seller, asset_contract, asset_id)` reaches or passes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellOrder {
    /// The asserted signer and expected current owner of the asset.
    pub seller: Address,
    /// The token collection being sold from.
    pub asset_contract: Address,
    /// The unit (or unit class) within `asset_contract`.
    pub asset_id: TokenId,
    /// Validity window open, seconds.
    pub start_time: u64,
    /// Validity window close, seconds. The order is invalid at and after
    /// this instant.
    pub expiration: u64,
    /// Price per unit, in the payment asset's smallest denomination.
    pub price: u128,
    /// Units to transfer. Fixed 1-unit semantics on single-unit assets.
    pub quantity: u128,
    /// Block height the order was authored at; compared against the
    /// seller's cancellation epoch.
    pub created_at_block: u64,
    /// Payment token address; [`Address::ZERO`] means native payment.
    pub payment_asset: Address,
}

impl SellOrder {
    /// Canonical signing payload, bound to the fixed domain name/version.
    ///
    /// Format: [`constants::SELL_ORDER_PAYLOAD_PREFIX`] followed by every
    /// field in declaration order, integers little-endian. This is a
    /// versioned wire format: any reordering or width change invalidates
    /// all previously issued signatures.
    #[must_use]
    pub fn signing_payload(&self) -> Vec<u8> {
        let mut payload = Vec::with_capacity(192);
        payload.extend_from_slice(constants::SELL_ORDER_PAYLOAD_PREFIX);
        payload.extend_from_slice(self.seller.as_bytes());
        payload.extend_from_slice(self.asset_contract.as_bytes());
        payload.extend_from_slice(&self.asset_id.0.to_le_bytes());
        payload.extend_from_slice(&self.start_time.to_le_bytes());
        payload.extend_from_slice(&self.expiration.to_le_bytes());
        payload.extend_from_slice(&self.price.to_le_bytes());
        payload.extend_from_slice(&self.quantity.to_le_bytes());
        payload.extend_from_slice(&self.created_at_block.to_le_bytes());
        payload.extend_from_slice(self.payment_asset.as_bytes());
        payload
    }

    /// SHA-256 digest of the signing payload — the 32-byte message the
    /// seller actually signs.
    #[must_use]
    pub fn digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.signing_payload());
        hasher.finalize().into()
    }

    /// Total payment amount, `price * quantity` with checked arithmetic.
    ///
    /// # Errors
    /// Returns [`SigmarketError::AmountOverflow`] when the product does
    /// not fit in `u128`.
    pub fn total_price(&self) -> Result<u128> {
        self.price
            .checked_mul(self.quantity)
            .ok_or(SigmarketError::AmountOverflow {
                price: self.price,
                quantity: self.quantity,
            })
    }

    /// Whether this order settles in the native base asset.
    #[must_use]
    pub fn is_native_payment(&self) -> bool {
        self.payment_asset.is_zero()
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl SellOrder {
    /// A single-unit native-payment order with a wide-open time window.
    pub fn dummy(seller: Address, asset_contract: Address, asset_id: TokenId, price: u128) -> Self {
        Self {
            seller,
            asset_contract,
            asset_id,
            start_time: 0,
            expiration: u64::MAX,
            price,
            quantity: 1,
            created_at_block: 1,
            payment_asset: Address::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_order() -> SellOrder {
        SellOrder {
            seller: Address([1u8; 32]),
            asset_contract: Address([2u8; 32]),
            asset_id: TokenId(7),
            start_time: 100,
            expiration: 200,
            price: 1_000,
            quantity: 3,
            created_at_block: 42,
            payment_asset: Address([3u8; 32]),
        }
    }

    #[test]
    fn digest_is_deterministic() {
        let order = make_order();
        assert_eq!(order.digest(), order.digest());
    }

    #[test]
    fn digest_changes_with_every_field() {
        let base = make_order();
        let mut variants = Vec::new();

        let mut o = base.clone();
        o.seller = Address([9u8; 32]);
        variants.push(o);
        let mut o = base.clone();
        o.asset_contract = Address([9u8; 32]);
        variants.push(o);
        let mut o = base.clone();
        o.asset_id = TokenId(8);
        variants.push(o);
        let mut o = base.clone();
        o.start_time += 1;
        variants.push(o);
        let mut o = base.clone();
        o.expiration += 1;
        variants.push(o);
        let mut o = base.clone();
        o.price += 1;
        variants.push(o);
        let mut o = base.clone();
        o.quantity += 1;
        variants.push(o);
        let mut o = base.clone();
        o.created_at_block += 1;
        variants.push(o);
        let mut o = base.clone();
        o.payment_asset = Address::ZERO;
        variants.push(o);

        for tampered in variants {
            assert_ne!(
                base.digest(),
                tampered.digest(),
                "tampering must change the digest: {tampered:?}"
            );
        }
    }

    #[test]
    fn payload_starts_with_domain_prefix() {
        let order = make_order();
        assert!(order
            .signing_payload()
            .starts_with(constants::SELL_ORDER_PAYLOAD_PREFIX));
        // The prefix is the wire encoding of the signing domain version.
        let prefix = std::str::from_utf8(constants::SELL_ORDER_PAYLOAD_PREFIX).unwrap();
        assert!(prefix.ends_with(&format!("v{}:", constants::SIGNING_DOMAIN_VERSION)));
    }

    #[test]
    fn total_price_checked() {
        let order = make_order();
        assert_eq!(order.total_price().unwrap(), 3_000);

        let mut huge = make_order();
        huge.price = u128::MAX;
        huge.quantity = 2;
        assert!(matches!(
            huge.total_price().unwrap_err(),
            SigmarketError::AmountOverflow { .. }
        ));
    }

    #[test]
    fn native_payment_sentinel() {
        let mut order = make_order();
        assert!(!order.is_native_payment());
        order.payment_asset = Address::ZERO;
        assert!(order.is_native_payment());
    }

    #[test]
    fn serde_roundtrip() {
        let order = make_order();
        let json = serde_json::to_string(&order).unwrap();
        let back: SellOrder = serde_json::from_str(&json).unwrap();
        assert_eq!(order, back);
        assert_eq!(order.digest(), back.digest());
    }
}
