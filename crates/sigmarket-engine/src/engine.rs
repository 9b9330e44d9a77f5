//! The Settlement Engine: the staged `fill_sell_order` pipeline plus its
//! owner-gated configuration surface.
//!
//! The engine stores no orders and keeps no fill counters. A signed order
//! can be presented any number of times; whatever still passes every
//! validation stage settles. Single-unit assets self-limit (ownership
//! moves, so the transfer's owner check fails on a second fill);
//! quantity-bearing assets are bounded by the seller's remaining token
//! balance at the transfer itself.
//!
//! Stage order is a contract: exactly one error surfaces per failed call,
//! the first stage to fail, and external callers match on the stage names
//! in the error strings. Do not reorder stages without versioning.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use sigmarket_assets::{transfer_asset, Ledger};
use sigmarket_registry::{CancellationRegistry, ExchangeRegistry, PaymentAssetRegistry};
use sigmarket_types::{
    Address, CallContext, EngineConfig, FillReceipt, ReceiptId, Result, SellOrder, SigmarketError,
    TokenId,
};

use crate::verifier::{self, SIGNATURE_LEN};

/// One deployed exchange instance.
///
/// Registries are shared by reference: several engine instances may point
/// at one [`CancellationRegistry`], with the [`ExchangeRegistry`] deciding
/// which of them are trusted to rely on it.
pub struct SettlementEngine {
    /// This instance's own address (its identity toward the registries
    /// and the operator identity sellers approve on their collections).
    address: Address,
    config: EngineConfig,
    exchanges: Rc<RefCell<ExchangeRegistry>>,
    cancellations: Rc<RefCell<CancellationRegistry>>,
    payment_assets: Rc<RefCell<PaymentAssetRegistry>>,
}

impl SettlementEngine {
    #[must_use]
    pub fn new(
        address: Address,
        config: EngineConfig,
        exchanges: Rc<RefCell<ExchangeRegistry>>,
        cancellations: Rc<RefCell<CancellationRegistry>>,
        payment_assets: Rc<RefCell<PaymentAssetRegistry>>,
    ) -> Self {
        Self {
            address,
            config,
            exchanges,
            cancellations,
            payment_assets,
        }
    }

    #[must_use]
    pub fn address(&self) -> Address {
        self.address
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Administrative operations
    // ------------------------------------------------------------------

    fn require_owner(&self, caller: Address) -> Result<()> {
        if caller == self.config.owner {
            Ok(())
        } else {
            Err(SigmarketError::NotOwner { caller })
        }
    }

    /// Hand the engine to a new administrator.
    ///
    /// # Errors
    /// `NotOwner` when `caller` is not the current administrator.
    pub fn transfer_ownership(&mut self, caller: Address, new_owner: Address) -> Result<()> {
        self.require_owner(caller)?;
        self.config.owner = new_owner;
        tracing::info!(new_owner = %new_owner, "Engine ownership transferred");
        Ok(())
    }

    /// Point the fee path at a new recipient. The zero address disables it.
    ///
    /// # Errors
    /// `NotOwner` when `caller` is not the administrator.
    pub fn set_maker_wallet(&mut self, caller: Address, maker_wallet: Address) -> Result<()> {
        self.require_owner(caller)?;
        self.config.maker_wallet = maker_wallet;
        Ok(())
    }

    /// Set the maker fee in basis points of the order total.
    ///
    /// # Errors
    /// `NotOwner` when `caller` is not the administrator; `FeeOutOfRange`
    /// above 10_000 bps.
    pub fn set_fee_bps(&mut self, caller: Address, fee_bps: u16) -> Result<()> {
        self.require_owner(caller)?;
        self.config = EngineConfig::new(self.config.owner, self.config.maker_wallet, fee_bps)?;
        Ok(())
    }

    /// Re-wire the three registry references.
    ///
    /// # Errors
    /// `NotOwner` when `caller` is not the administrator.
    pub fn set_registry_contracts(
        &mut self,
        caller: Address,
        exchanges: Rc<RefCell<ExchangeRegistry>>,
        cancellations: Rc<RefCell<CancellationRegistry>>,
        payment_assets: Rc<RefCell<PaymentAssetRegistry>>,
    ) -> Result<()> {
        self.require_owner(caller)?;
        self.exchanges = exchanges;
        self.cancellations = cancellations;
        self.payment_assets = payment_assets;
        Ok(())
    }

    /// Cancel the caller's own previous sell orders for an asset, with the
    /// engine acting as the registrant toward the shared registry.
    ///
    /// # Errors
    /// `NotAuthorized` when this engine is not a registrant of the
    /// Cancellation Registry.
    pub fn cancel_sell_orders(
        &self,
        ctx: &CallContext,
        asset_contract: Address,
        asset_id: TokenId,
    ) -> Result<()> {
        self.cancellations.borrow_mut().cancel_previous_sell_orders(
            self.address,
            ctx.caller,
            asset_contract,
            asset_id,
            ctx.block_height,
        )
    }

    // ------------------------------------------------------------------
    // Settlement
    // ------------------------------------------------------------------

    /// Fill a signed sell order, transferring the asset to `buyer` and the
    /// payment to the seller (net of the maker fee) atomically.
    ///
    /// `ctx.caller` need not equal `buyer`: relayers submit fills that
    /// debit the buyer's token allowance, not their own.
    ///
    /// Validation stages run strictly in order; the first failing stage is
    /// the only error surfaced and nothing is written before every stage
    /// has passed. Once the asset leg writes, no fallible step remains —
    /// the payment leg spends exactly the balances and allowances the
    /// earlier stages validated, and nothing can change them in between.
    pub fn fill_sell_order(
        &self,
        ledger: &mut Ledger,
        ctx: &CallContext,
        order: &SellOrder,
        signature: &[u8; SIGNATURE_LEN],
        buyer: Address,
    ) -> Result<FillReceipt> {
        // Structural validation.
        if order.quantity == 0 {
            return Err(SigmarketError::InvalidOrder {
                reason: "quantity must be at least 1".into(),
            });
        }
        let total = order.total_price()?;
        if !order.is_native_payment() && ctx.attached_value != 0 {
            return Err(SigmarketError::InvalidOrder {
                reason: "native value attached to a token-payment fill".into(),
            });
        }

        if order.is_native_payment() {
            // Stage 1: exact native payment, strict equality.
            if ctx.attached_value != total {
                return Err(SigmarketError::InsufficientPayment {
                    attached: ctx.attached_value,
                    required: total,
                });
            }
            let available = ledger.native_balance(ctx.caller);
            if available < total {
                return Err(SigmarketError::InsufficientNativeBalance {
                    needed: total,
                    available,
                });
            }
        } else {
            // Stage 2: payment token must be whitelisted.
            if !self.payment_assets.borrow().is_approved(order.payment_asset) {
                return Err(SigmarketError::PaymentAssetNotApproved(order.payment_asset));
            }
            let token = ledger.fungible(order.payment_asset)?;
            // Stage 3: buyer balance.
            let available = token.balance_of(buyer);
            if available < total {
                return Err(SigmarketError::InsufficientBuyerBalance {
                    needed: total,
                    available,
                });
            }
            // Stage 4: buyer allowance to this engine.
            let approved = token.allowance(buyer, self.address);
            if approved < total {
                return Err(SigmarketError::InsufficientAllowance {
                    needed: total,
                    approved,
                });
            }
        }

        // Stage 5: signature.
        verifier::verify_sell_order(order, signature)?;

        // Stage 6: cancellation, through the Exchange Registry gate. An
        // engine the registry does not list has no standing to trust the
        // cancellation ledger and must refuse the fill.
        if !self.exchanges.borrow().is_approved(self.address) {
            return Err(SigmarketError::NotAuthorized {
                caller: self.address,
            });
        }
        {
            let cancellations = self.cancellations.borrow();
            if cancellations.is_cancelled(
                order.seller,
                order.asset_contract,
                order.asset_id,
                order.created_at_block,
            ) {
                let cancelled_at_block = cancellations
                    .cancellation_epoch(order.seller, order.asset_contract, order.asset_id)
                    .unwrap_or(0);
                return Err(SigmarketError::OrderCancelled {
                    created_at_block: order.created_at_block,
                    cancelled_at_block,
                });
            }
        }

        // Stage 7: time window.
        if ctx.timestamp < order.start_time {
            return Err(SigmarketError::OrderNotStarted {
                starts_at: order.start_time,
                now: ctx.timestamp,
            });
        }
        if ctx.timestamp >= order.expiration {
            return Err(SigmarketError::OrderExpired {
                expired_at: order.expiration,
                now: ctx.timestamp,
            });
        }

        // Stage 8: the seller must have approved this engine as operator.
        let contract = ledger.asset_mut(order.asset_contract)?;
        if !contract.is_approved_for_all(order.seller, self.address) {
            return Err(SigmarketError::AssetNotApproved {
                seller: order.seller,
                operator: self.address,
            });
        }

        // Stage 9: asset leg — capability probe and transfer. The first
        // state write happens inside on success; on failure nothing has
        // been written yet.
        let quantity_transferred = transfer_asset(
            contract,
            self.address,
            order.asset_id,
            order.seller,
            buyer,
            order.quantity,
        )?;

        // Stage 10: payment leg, after the asset leg. Amounts were
        // validated in stages 1-4 and nothing else ran since.
        let fee = self.config.fee_for(total);
        if order.is_native_payment() {
            ledger.debit_native(ctx.caller, total)?;
            ledger.deposit_native(order.seller, total - fee);
            if fee > 0 {
                ledger.deposit_native(self.config.maker_wallet, fee);
            }
        } else {
            let token = ledger.fungible_mut(order.payment_asset)?;
            token.transfer_from(self.address, buyer, order.seller, total - fee)?;
            if fee > 0 {
                token.transfer_from(self.address, buyer, self.config.maker_wallet, fee)?;
            }
        }

        let receipt = FillReceipt {
            id: ReceiptId::new(),
            order_digest: order.digest(),
            seller: order.seller,
            buyer,
            asset_contract: order.asset_contract,
            asset_id: order.asset_id,
            quantity_transferred,
            payment_asset: order.payment_asset,
            total_paid: total,
            fee_paid: fee,
            executed_at: Utc::now(),
            block_height: ctx.block_height,
        };
        tracing::info!(
            receipt = %receipt.id,
            seller = %order.seller,
            buyer = %buyer,
            asset_contract = %order.asset_contract,
            asset_id = %order.asset_id,
            quantity = quantity_transferred,
            total = total,
            fee = fee,
            "Sell order filled"
        );
        Ok(receipt)
    }
}
