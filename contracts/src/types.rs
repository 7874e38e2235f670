//! Common types used across the liquidity pool.

use odra::casper_types::U256;
use odra::prelude::*;

use crate::errors::PoolError;

/// A configurable ratio applied as floored integer multiplication.
///
/// `apply(amount)` computes `floor(amount * num / denom)`. The denominator is
/// guaranteed nonzero by construction.
#[odra::odra_type]
#[derive(Copy)]
pub struct Ratio {
    /// Numerator
    pub num: u64,
    /// Denominator (always nonzero)
    pub denom: u64,
}

impl Ratio {
    /// Build a ratio, rejecting a zero denominator.
    pub fn new(num: u64, denom: u64) -> Result<Self, PoolError> {
        if denom == 0 {
            return Err(PoolError::InvalidRatio);
        }
        Ok(Self { num, denom })
    }

    /// The zero ratio `0/1`.
    pub fn zero() -> Self {
        Self { num: 0, denom: 1 }
    }

    /// The unit ratio `1/1`.
    pub fn one() -> Self {
        Self { num: 1, denom: 1 }
    }

    /// Apply the ratio to an amount, rounding down.
    pub fn apply(&self, amount: U256) -> U256 {
        amount * U256::from(self.num) / U256::from(self.denom)
    }
}

/// Preview of a deposit: the deposited amount and the stable-unit reward that
/// would be minted on top of it for a base-pair deposit.
#[odra::odra_type]
pub struct DepositPreview {
    /// Amount to deposit
    pub amount: U256,
    /// Reward minted alongside, `floor(amount * reward)`
    pub reward: U256,
}

/// Preview of a withdrawal: the requested amount, the stable-unit fee burned
/// on top of it, and the limit-ratio cap derived from the stable balance.
#[odra::odra_type]
pub struct WithdrawPreview {
    /// Amount to withdraw
    pub amount: U256,
    /// Fee burned alongside, `floor(amount * fee)`
    pub fee: U256,
    /// Withdrawal cap, `floor(stable_balance * limit)`
    pub limit: U256,
}

/// A closed accounting epoch. Snapshots are immutable once written.
#[odra::odra_type]
pub struct EpochSnapshot {
    /// Monotonically increasing epoch id
    pub epoch_id: u64,
    /// Timestamp at which the epoch was closed
    pub end_time: u64,
}
