//! Collateral/debt position ledger.
//!
//! The single owner of per-account, per-asset position state. Every other
//! component mutates positions through this module, never directly. Positions
//! are created lazily on first nonzero credit and are never deleted; an entry
//! returning to zero simply stays at zero.
//!
//! Besides the two position maps the ledger keeps an append-only index of the
//! assets each account has ever touched (count + index mapping), so aggregate
//! valuation can enumerate positions without iterating storage.

use odra::casper_types::U256;
use odra::prelude::*;

use crate::errors::PoolError;

/// Per-account collateral and debt bookkeeping.
#[odra::module]
pub struct CollateralDebtLedger {
    /// Collateral positions: (account, asset) -> amount
    collateral: Mapping<(Address, Address), U256>,
    /// Debt positions: (account, asset) -> amount
    debt: Mapping<(Address, Address), U256>,
    /// Number of distinct assets an account has touched
    asset_count: Mapping<Address, u32>,
    /// Asset at a given index in the account's touched list
    asset_at: Mapping<(Address, u32), Address>,
    /// Whether an asset is already indexed for an account
    indexed: Mapping<(Address, Address), bool>,
}

impl CollateralDebtLedger {
    pub fn collateral_of(&self, account: Address, asset: Address) -> U256 {
        self.collateral.get(&(account, asset)).unwrap_or_default()
    }

    pub fn debt_of(&self, account: Address, asset: Address) -> U256 {
        self.debt.get(&(account, asset)).unwrap_or_default()
    }

    /// Increase a collateral position. Returns the resulting position.
    pub fn credit_collateral(&mut self, account: Address, asset: Address, amount: U256) -> U256 {
        let new_position = self.collateral_of(account, asset) + amount;
        self.collateral.set(&(account, asset), new_position);
        self.index_asset(account, asset);
        new_position
    }

    /// Decrease a collateral position. A debit past zero is reported as
    /// `InsufficientBalance`; positions never go negative.
    pub fn debit_collateral(
        &mut self,
        account: Address,
        asset: Address,
        amount: U256,
    ) -> Result<U256, PoolError> {
        let current = self.collateral_of(account, asset);
        if amount > current {
            return Err(PoolError::InsufficientBalance);
        }
        let new_position = current - amount;
        self.collateral.set(&(account, asset), new_position);
        Ok(new_position)
    }

    /// Increase a debt position. Returns the resulting position.
    pub fn credit_debt(&mut self, account: Address, asset: Address, amount: U256) -> U256 {
        let new_position = self.debt_of(account, asset) + amount;
        self.debt.set(&(account, asset), new_position);
        self.index_asset(account, asset);
        new_position
    }

    /// Decrease a debt position, with the same zero floor as collateral.
    pub fn debit_debt(
        &mut self,
        account: Address,
        asset: Address,
        amount: U256,
    ) -> Result<U256, PoolError> {
        let current = self.debt_of(account, asset);
        if amount > current {
            return Err(PoolError::InsufficientBalance);
        }
        let new_position = current - amount;
        self.debt.set(&(account, asset), new_position);
        Ok(new_position)
    }

    /// All assets the account has ever held a position in, in first-touch
    /// order. Entries may have returned to zero.
    pub fn assets_of(&self, account: Address) -> Vec<Address> {
        let count = self.asset_count.get(&account).unwrap_or(0);
        let mut assets = Vec::new();
        for index in 0..count {
            if let Some(asset) = self.asset_at.get(&(account, index)) {
                assets.push(asset);
            }
        }
        assets
    }

    fn index_asset(&mut self, account: Address, asset: Address) {
        if self.indexed.get(&(account, asset)).unwrap_or(false) {
            return;
        }
        let count = self.asset_count.get(&account).unwrap_or(0);
        self.asset_at.set(&(account, count), asset);
        self.asset_count.set(&account, count + 1);
        self.indexed.set(&(account, asset), true);
    }
}
