//! Error types for the Sigmarket settlement engine.
//!
//! All errors use the `SM_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Order / signature errors
//! - 2xx: Payment errors
//! - 3xx: Authorization / registry errors
//! - 4xx: Asset errors
//!
//! The stage name after the code (`InsufficientPayment`, `OrderCancelled`,
//! and so on) is part of the observable contract: relayers and test suites
//! match on it, and each validation stage of `fill_sell_order` surfaces
//! exactly one of these. Reordering the stages is a breaking change.

use thiserror::Error;

use crate::{Address, TokenId};

/// Central error enum for all Sigmarket operations.
#[derive(Debug, Error)]
pub enum SigmarketError {
    // =================================================================
    // Order / Signature Errors (1xx)
    // =================================================================
    /// The order failed structural validation (zero quantity, stray
    /// attached value on a token-payment fill, etc.).
    #[error("SM_ERR_100: InvalidOrder: {reason}")]
    InvalidOrder { reason: String },

    /// The signature does not verify against the seller's key over the
    /// order digest.
    #[error("SM_ERR_101: InvalidSignature: order digest was not signed by the claimed seller")]
    InvalidSignature,

    /// The order predates the seller's cancellation epoch for this asset.
    #[error(
        "SM_ERR_102: OrderCancelled: created at block {created_at_block} <= cancellation epoch {cancelled_at_block}"
    )]
    OrderCancelled {
        created_at_block: u64,
        cancelled_at_block: u64,
    },

    /// The order's validity window has not opened yet.
    #[error("SM_ERR_103: OrderNotStarted: starts at {starts_at}, now {now}")]
    OrderNotStarted { starts_at: u64, now: u64 },

    /// The order's validity window has closed.
    #[error("SM_ERR_104: OrderExpired: expired at {expired_at}, now {now}")]
    OrderExpired { expired_at: u64, now: u64 },

    /// `price * quantity` overflowed the amount type.
    #[error("SM_ERR_105: AmountOverflow: price {price} * quantity {quantity} overflows")]
    AmountOverflow { price: u128, quantity: u128 },

    // =================================================================
    // Payment Errors (2xx)
    // =================================================================
    /// Native-payment fill where the attached value does not exactly equal
    /// the order total. Strict equality, not >=.
    #[error("SM_ERR_200: InsufficientPayment: attached {attached} != required {required}")]
    InsufficientPayment { attached: u128, required: u128 },

    /// The payment token is not whitelisted in the Payment Asset Registry.
    #[error("SM_ERR_201: PaymentAssetNotApproved: {0}")]
    PaymentAssetNotApproved(Address),

    /// The buyer's payment-token balance does not cover the order total.
    #[error("SM_ERR_202: InsufficientBuyerBalance: need {needed}, have {available}")]
    InsufficientBuyerBalance { needed: u128, available: u128 },

    /// The buyer's allowance to the engine does not cover the order total.
    #[error("SM_ERR_203: InsufficientAllowance: need {needed}, approved {approved}")]
    InsufficientAllowance { needed: u128, approved: u128 },

    /// The caller cannot fund the native value it claims to attach.
    #[error("SM_ERR_204: InsufficientNativeBalance: need {needed}, have {available}")]
    InsufficientNativeBalance { needed: u128, available: u128 },

    /// No fungible token is deployed at the payment-asset address.
    #[error("SM_ERR_205: UnknownPaymentAsset: {0}")]
    UnknownPaymentAsset(Address),

    // =================================================================
    // Authorization / Registry Errors (3xx)
    // =================================================================
    /// An administrator-only operation was called by a non-administrator.
    #[error("SM_ERR_300: NotOwner: caller {caller} is not the administrator")]
    NotOwner { caller: Address },

    /// The caller is neither the seller nor a registered registrant, or
    /// the engine instance is not trusted by the Exchange Registry.
    #[error("SM_ERR_301: NotAuthorized: caller {caller} lacks permission")]
    NotAuthorized { caller: Address },

    /// Maker fee outside the [0, 10_000] basis-point range.
    #[error("SM_ERR_302: FeeOutOfRange: {bps} bps exceeds the 10000 bps maximum")]
    FeeOutOfRange { bps: u16 },

    // =================================================================
    // Asset Errors (4xx)
    // =================================================================
    /// The seller has not approved the engine as an operator over the
    /// asset collection.
    #[error("SM_ERR_400: AssetNotApproved: seller {seller} has not approved operator {operator}")]
    AssetNotApproved { seller: Address, operator: Address },

    /// The contract exposes neither the single-unit nor the batch-unit
    /// transfer interface. Hard stop.
    #[error("SM_ERR_401: UnrecognizedAssetKind: contract {0} exposes no known transfer interface")]
    UnrecognizedAssetKind(Address),

    /// No asset contract is deployed at the given address.
    #[error("SM_ERR_402: UnknownAssetContract: {0}")]
    UnknownAssetContract(Address),

    /// Single-unit transfer where `from` does not own the token.
    #[error("SM_ERR_403: AssetNotOwned: {token_id} is not owned by {claimed_owner}")]
    AssetNotOwned {
        token_id: TokenId,
        claimed_owner: Address,
    },

    /// Batch-unit transfer exceeding the sender's token balance.
    #[error("SM_ERR_404: InsufficientAssetBalance: need {needed}, have {available}")]
    InsufficientAssetBalance { needed: u128, available: u128 },
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, SigmarketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix_and_stage_name() {
        let err = SigmarketError::InsufficientPayment {
            attached: 90,
            required: 100,
        };
        let msg = format!("{err}");
        assert!(msg.starts_with("SM_ERR_200"), "Got: {msg}");
        assert!(msg.contains("InsufficientPayment"));
        assert!(msg.contains("90"));
        assert!(msg.contains("100"));
    }

    #[test]
    fn cancelled_display_carries_epochs() {
        let err = SigmarketError::OrderCancelled {
            created_at_block: 10,
            cancelled_at_block: 15,
        };
        let msg = format!("{err}");
        assert!(msg.contains("SM_ERR_102"));
        assert!(msg.contains("OrderCancelled"));
        assert!(msg.contains("10"));
        assert!(msg.contains("15"));
    }

    #[test]
    fn all_errors_have_sm_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(SigmarketError::InvalidSignature),
            Box::new(SigmarketError::PaymentAssetNotApproved(Address::ZERO)),
            Box::new(SigmarketError::NotOwner {
                caller: Address::ZERO,
            }),
            Box::new(SigmarketError::UnrecognizedAssetKind(Address::ZERO)),
            Box::new(SigmarketError::OrderExpired {
                expired_at: 1,
                now: 2,
            }),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("SM_ERR_"),
                "Error missing SM_ERR_ prefix: {msg}"
            );
        }
    }

    #[test]
    fn stage_names_are_stable() {
        // Revert-reason strings are matched on by external callers.
        for (err, stage) in [
            (
                SigmarketError::InvalidSignature,
                "InvalidSignature",
            ),
            (
                SigmarketError::OrderNotStarted { starts_at: 5, now: 1 },
                "OrderNotStarted",
            ),
            (
                SigmarketError::AssetNotApproved {
                    seller: Address::ZERO,
                    operator: Address::ZERO,
                },
                "AssetNotApproved",
            ),
            (
                SigmarketError::InsufficientAllowance {
                    needed: 2,
                    approved: 1,
                },
                "InsufficientAllowance",
            ),
        ] {
            assert!(format!("{err}").contains(stage));
        }
    }
}
