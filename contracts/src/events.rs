//! Audit events emitted by the pool.
//!
//! Every mutating operation emits one record carrying the account, asset,
//! amount and resulting position, independent of the return value.

use odra::casper_types::U256;
use odra::prelude::*;

#[odra::event]
pub struct Deposited {
    pub account: Address,
    pub asset: Address,
    pub amount: U256,
    /// Stable units minted on top for base-pair deposits (zero otherwise)
    pub reward_minted: U256,
    /// Resulting collateral position
    pub position: U256,
}

#[odra::event]
pub struct Withdrawn {
    pub account: Address,
    pub asset: Address,
    pub amount: U256,
    /// Stable units burned on top for base-pair withdrawals (zero otherwise)
    pub fee_burned: U256,
    /// Resulting collateral position
    pub position: U256,
}

#[odra::event]
pub struct Borrowed {
    pub account: Address,
    pub asset: Address,
    pub amount: U256,
    /// Resulting debt position
    pub position: U256,
}

#[odra::event]
pub struct Repaid {
    pub account: Address,
    pub asset: Address,
    /// Amount actually settled, `min(requested, debt)`
    pub amount: U256,
    /// Resulting debt position
    pub position: U256,
}

#[odra::event]
pub struct Bought {
    pub account: Address,
    pub asset: Address,
    pub amount: U256,
    /// Stable units burned as payment
    pub cost: U256,
}

#[odra::event]
pub struct Sold {
    pub account: Address,
    pub asset: Address,
    pub amount: U256,
    /// Stable units minted as proceeds
    pub proceeds: U256,
}

#[odra::event]
pub struct RewardsClaimed {
    /// "delegation" or "validator"
    pub source: String,
    pub epoch: u64,
    pub amount: U256,
    /// Pool reserve after crediting
    pub reserve: U256,
}

#[odra::event]
pub struct EpochClosed {
    pub epoch_id: u64,
    pub end_time: u64,
    /// Id of the newly opened epoch
    pub next_epoch_id: u64,
}

#[odra::event]
pub struct RatioUpdated {
    /// "reward", "fee" or "limit"
    pub param: String,
    pub num: u64,
    pub denom: u64,
}
