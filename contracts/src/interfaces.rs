//! External collaborator interfaces.
//!
//! The pool core never talks to the outside world directly: prices, token
//! movements and staking rewards all go through these contract interfaces,
//! injected by address at construction. This keeps the ledger testable
//! against stub implementations.

use odra::casper_types::U256;
use odra::prelude::*;

/// Value oracle mapping an asset to its price in canonical value units.
///
/// Returns `None` for assets the oracle has no price for.
#[odra::external_contract]
pub trait PriceOracle {
    fn price_of(&self, asset: Address) -> Option<U256>;
}

/// CEP-18 token surface used to pull and push asset amounts.
#[odra::external_contract]
pub trait FungibleToken {
    fn transfer(&mut self, recipient: Address, amount: U256) -> bool;
    fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool;
    fn allowance(&self, owner: Address, spender: Address) -> U256;
    fn balance_of(&self, account: Address) -> U256;
}

/// The stable unit token: CEP-18 plus pool-controlled supply.
///
/// The pool mints on base-pair deposits and `sell`, and burns on base-pair
/// withdrawals and `buy`.
#[odra::external_contract]
pub trait StableUnit {
    fn mint(&mut self, recipient: Address, amount: U256);
    fn burn(&mut self, owner: Address, amount: U256);
    fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool;
    fn allowance(&self, owner: Address, spender: Address) -> U256;
    fn balance_of(&self, account: Address) -> U256;
}

/// Validator/delegation staking system realizing accrued rewards per epoch.
#[odra::external_contract]
pub trait StakingBridge {
    fn claim_delegation_rewards(&mut self, epoch: u64) -> U256;
    fn claim_validator_rewards(&mut self, epoch: u64) -> U256;
}
