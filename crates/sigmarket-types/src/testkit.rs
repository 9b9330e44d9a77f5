//! Keypair helpers for tests. **Never use in production.**

use ed25519_dalek::SigningKey;
use rand::rngs::OsRng;

use crate::Address;

/// Generate a fresh ed25519 keypair and the address it controls.
#[must_use]
pub fn random_keypair() -> (SigningKey, Address) {
    let signing_key = SigningKey::generate(&mut OsRng);
    let address = Address::from_pubkey(signing_key.verifying_key().to_bytes());
    (signing_key, address)
}

/// A throwaway address with no controlling keypair.
#[must_use]
pub fn random_address() -> Address {
    let mut bytes = [0u8; 32];
    rand::Rng::fill(&mut rand::thread_rng(), &mut bytes);
    Address(bytes)
}
