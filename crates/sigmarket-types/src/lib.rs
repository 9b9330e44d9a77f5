//! # sigmarket-types
//!
//! Shared types, errors, and configuration for the **Sigmarket**
//! signature-based settlement engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`Address`], [`TokenId`], [`ReceiptId`]
//! - **Order model**: [`SellOrder`] and its canonical signing payload
//! - **Call environment**: [`CallContext`]
//! - **Configuration**: [`EngineConfig`]
//! - **Receipt model**: [`FillReceipt`]
//! - **Errors**: [`SigmarketError`] with `SM_ERR_` prefix codes
//! - **Constants**: signing domain strings, fee denominator

pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod ids;
pub mod order;
pub mod receipt;

#[cfg(any(test, feature = "test-helpers"))]
pub mod testkit;

// Re-export all primary types at crate root for ergonomic imports:
//   use sigmarket_types::{SellOrder, Address, EngineConfig, ...};

pub use config::*;
pub use context::*;
pub use error::*;
pub use ids::*;
pub use order::*;
pub use receipt::*;

// Constants are accessed via `sigmarket_types::constants::FOO`
// (not re-exported to avoid name collisions).
