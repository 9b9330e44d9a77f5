//! Asset Transfer Adapter — capability probe and dispatch.
//!
//! Probes the contract's declared capability and invokes the matching
//! transfer call. `quantity` is passed only on the batch path; the
//! single-unit path moves exactly one unit regardless of the order's
//! numeric quantity.

use sigmarket_types::{Address, Result, SigmarketError, TokenId};

use crate::contract::{AssetContract, AssetKind};

/// Move units of `token_id` from `from` to `to` through whichever transfer
/// interface the contract exposes. Returns the units actually moved.
///
/// # Errors
/// `UnrecognizedAssetKind` when the contract exposes neither interface —
/// a hard stop, not a recoverable condition. Transfer-level failures
/// (ownership, balance, operator rights) propagate from the contract.
pub fn transfer_asset(
    contract: &mut dyn AssetContract,
    operator: Address,
    token_id: TokenId,
    from: Address,
    to: Address,
    quantity: u128,
) -> Result<u128> {
    match contract.capability() {
        AssetKind::SingleUnit => {
            contract.transfer_single(operator, token_id, from, to)?;
            Ok(1)
        }
        AssetKind::BatchUnit => {
            contract.transfer_batch(operator, token_id, from, to, quantity)?;
            Ok(quantity)
        }
        AssetKind::Unsupported => Err(SigmarketError::UnrecognizedAssetKind(contract.address())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch_unit::BatchUnitCollection;
    use crate::contract::InertContract;
    use crate::single_unit::SingleUnitCollection;
    use sigmarket_types::testkit::random_address;

    #[test]
    fn single_unit_path_moves_exactly_one() {
        let owner = random_address();
        let recipient = random_address();
        let mut collection = SingleUnitCollection::new(random_address());
        collection.mint(TokenId(1), owner);

        // Quantity 5 on the order is ignored on the single-unit path.
        let moved =
            transfer_asset(&mut collection, owner, TokenId(1), owner, recipient, 5).unwrap();
        assert_eq!(moved, 1);
        assert_eq!(collection.owner_of(TokenId(1)), Some(recipient));
    }

    #[test]
    fn batch_path_moves_quantity() {
        let owner = random_address();
        let recipient = random_address();
        let mut collection = BatchUnitCollection::new(random_address());
        collection.mint(TokenId(1), owner, 10);

        let moved =
            transfer_asset(&mut collection, owner, TokenId(1), owner, recipient, 7).unwrap();
        assert_eq!(moved, 7);
        assert_eq!(collection.balance_of(TokenId(1), recipient), 7);
    }

    #[test]
    fn unsupported_contract_is_hard_stop() {
        let contract_addr = random_address();
        let mut contract = InertContract::new(contract_addr);
        let err = transfer_asset(
            &mut contract,
            random_address(),
            TokenId(1),
            random_address(),
            random_address(),
            1,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SigmarketError::UnrecognizedAssetKind(addr) if addr == contract_addr
        ));
    }
}
