//! # sigmarket-engine
//!
//! The Settlement Engine: consumes a fully-formed signed sell order and a
//! filling request, and orchestrates the atomic trade.
//!
//! ## Fill pipeline
//!
//! ```text
//! fill_sell_order
//!   -> structural checks (quantity, overflow, stray native value)
//!   -> payment capacity        (native: exact value; token: whitelist,
//!                               buyer balance, buyer allowance)
//!   -> signature verification  (ed25519 over the order digest)
//!   -> cancellation check      (gated by the Exchange Registry)
//!   -> time window
//!   -> seller operator approval
//!   -> asset leg               (capability probe -> transfer)
//!   -> payment leg             (seller proceeds + maker fee)
//! ```
//!
//! Exactly one error per failed call — the first stage to fail — and no
//! state is written before every validation stage has passed.

pub mod engine;
pub mod verifier;

pub use engine::SettlementEngine;
pub use verifier::{sign_sell_order, verify_sell_order, SIGNATURE_LEN};
