//! # sigmarket-assets
//!
//! The ledger model the Settlement Engine settles against, and the Asset
//! Transfer Adapter that bridges the two recognized token shapes.
//!
//! ## Architecture
//!
//! 1. **`FungibleToken`**: allowance-based payment token
//! 2. **`SingleUnitCollection`** / **`BatchUnitCollection`**: the two
//!    recognized asset shapes behind the [`AssetContract`] trait
//! 3. **`transfer_asset`**: capability probe + dispatch (the adapter)
//! 4. **`Ledger`**: native balances plus deployed contracts by address
//!
//! The engine holds no assets at rest; it orchestrates pull-then-push
//! transfers inside a single settlement call against `&mut Ledger`.

pub mod adapter;
pub mod batch_unit;
pub mod contract;
pub mod fungible;
pub mod ledger;
pub mod single_unit;

pub use adapter::transfer_asset;
pub use batch_unit::BatchUnitCollection;
pub use contract::{AssetContract, AssetKind};
pub use fungible::FungibleToken;
pub use ledger::Ledger;
pub use single_unit::SingleUnitCollection;

#[cfg(any(test, feature = "test-helpers"))]
pub use contract::InertContract;
