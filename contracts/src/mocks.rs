//! Test collaborator contracts.
//!
//! Stub implementations of the pool's external interfaces, used by the
//! integration tests and the livenet bootstrap: a settable price oracle, a
//! settable staking bridge and a minimal CEP-18 token with authorized
//! mint/burn. None of them carry pool logic.

use odra::casper_types::U256;
use odra::prelude::*;

use crate::errors::PoolError;

/// Settable price oracle.
#[odra::module]
pub struct TestOracle {
    /// Asset prices in canonical value units
    prices: Mapping<Address, U256>,
}

#[odra::module]
impl TestOracle {
    pub fn set_price(&mut self, asset: Address, price: U256) {
        self.prices.set(&asset, price);
    }

    /// Price of an asset, `None` if never set.
    pub fn price_of(&self, asset: Address) -> Option<U256> {
        self.prices.get(&asset)
    }
}

/// Settable staking bridge. Rewards are configured per epoch and realized at
/// most once.
#[odra::module]
pub struct TestStaking {
    delegation_rewards: Mapping<u64, U256>,
    validator_rewards: Mapping<u64, U256>,
}

#[odra::module]
impl TestStaking {
    pub fn set_delegation_reward(&mut self, epoch: u64, amount: U256) {
        self.delegation_rewards.set(&epoch, amount);
    }

    pub fn set_validator_reward(&mut self, epoch: u64, amount: U256) {
        self.validator_rewards.set(&epoch, amount);
    }

    /// Realize the delegation reward for an epoch. Subsequent claims of the
    /// same epoch return zero.
    pub fn claim_delegation_rewards(&mut self, epoch: u64) -> U256 {
        let amount = self.delegation_rewards.get(&epoch).unwrap_or_default();
        self.delegation_rewards.set(&epoch, U256::zero());
        amount
    }

    /// Realize the validator reward for an epoch, once.
    pub fn claim_validator_rewards(&mut self, epoch: u64) -> U256 {
        let amount = self.validator_rewards.get(&epoch).unwrap_or_default();
        self.validator_rewards.set(&epoch, U256::zero());
        amount
    }
}

/// Minimal CEP-18 style token with admin-authorized mint and burn.
#[odra::module]
pub struct TestToken {
    name: Var<String>,
    symbol: Var<String>,
    decimals: Var<u8>,
    total_supply: Var<U256>,
    balances: Mapping<Address, U256>,
    allowances: Mapping<(Address, Address), U256>,
    /// Token admin (deployer)
    admin: Var<Address>,
    /// Accounts allowed to mint and burn (e.g. the pool)
    minters: Mapping<Address, bool>,
}

#[odra::module]
impl TestToken {
    pub fn init(&mut self, name: String, symbol: String, decimals: u8) {
        self.name.set(name);
        self.symbol.set(symbol);
        self.decimals.set(decimals);
        self.total_supply.set(U256::zero());
        self.admin.set(self.env().caller());
    }

    pub fn name(&self) -> String {
        self.name.get_or_default()
    }

    pub fn symbol(&self) -> String {
        self.symbol.get_or_default()
    }

    pub fn decimals(&self) -> u8 {
        self.decimals.get_or_default()
    }

    pub fn total_supply(&self) -> U256 {
        self.total_supply.get_or_default()
    }

    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).unwrap_or_default()
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(&(owner, spender)).unwrap_or_default()
    }

    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let owner = self.env().caller();
        self.allowances.set(&(owner, spender), amount);
        true
    }

    pub fn increase_allowance(&mut self, spender: Address, amount: U256) -> bool {
        let owner = self.env().caller();
        let current = self.allowance(owner, spender);
        self.allowances.set(&(owner, spender), current + amount);
        true
    }

    pub fn transfer(&mut self, recipient: Address, amount: U256) -> bool {
        let sender = self.env().caller();
        self.move_balance(sender, recipient, amount)
    }

    pub fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool {
        let spender = self.env().caller();
        let current = self.allowance(owner, spender);
        if current < amount {
            return false;
        }
        if !self.move_balance(owner, recipient, amount) {
            return false;
        }
        self.allowances.set(&(owner, spender), current - amount);
        true
    }

    /// Mint new tokens (admin or authorized minter only).
    pub fn mint(&mut self, recipient: Address, amount: U256) {
        self.require_minter();
        let balance = self.balance_of(recipient);
        self.balances.set(&recipient, balance + amount);
        self.total_supply.set(self.total_supply() + amount);
    }

    /// Burn tokens from `owner` (admin or authorized minter only).
    pub fn burn(&mut self, owner: Address, amount: U256) {
        self.require_minter();
        let balance = self.balance_of(owner);
        if balance < amount {
            self.env().revert(PoolError::InsufficientBalance);
        }
        self.balances.set(&owner, balance - amount);
        self.total_supply.set(self.total_supply() - amount);
    }

    /// Authorize an account to mint and burn (admin only).
    pub fn add_minter(&mut self, minter: Address) {
        let caller = self.env().caller();
        if self.admin.get() != Some(caller) {
            self.env().revert(PoolError::Unauthorized);
        }
        self.minters.set(&minter, true);
    }

    fn require_minter(&self) {
        let caller = self.env().caller();
        if self.admin.get() == Some(caller) {
            return;
        }
        if !self.minters.get(&caller).unwrap_or(false) {
            self.env().revert(PoolError::Unauthorized);
        }
    }

    fn move_balance(&mut self, from: Address, to: Address, amount: U256) -> bool {
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            return false;
        }
        self.balances.set(&from, from_balance - amount);
        let to_balance = self.balance_of(to);
        self.balances.set(&to, to_balance + amount);
        true
    }
}
