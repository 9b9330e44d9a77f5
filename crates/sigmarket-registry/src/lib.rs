//! # sigmarket-registry
//!
//! The three trust-boundary registries gating settlement:
//!
//! 1. **`CancellationRegistry`**: per-seller, per-asset revocation ledger
//!    keyed by block-height epochs; shared by reference across exchanges
//! 2. **`PaymentAssetRegistry`**: whitelist of fungible payment tokens
//! 3. **`ExchangeRegistry`**: whitelist of engine instances trusted to
//!    rely on the cancellation ledger
//!
//! All three are administrator-mutable, publicly readable, and carry no
//! coupling to any single exchange instance's state.

pub mod cancellation;
pub mod exchanges;
pub mod payment_assets;

pub use cancellation::CancellationRegistry;
pub use exchanges::ExchangeRegistry;
pub use payment_assets::PaymentAssetRegistry;
