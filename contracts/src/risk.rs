//! Risk checks and ratio previews.
//!
//! Pure functions over already-computed values: the collateralization check
//! for borrows, the withdraw guard, and the reward/fee/limit previews. The
//! facade gathers oracle valuations and balances, then calls in here.

use odra::casper_types::U256;

use crate::errors::PoolError;
use crate::types::{DepositPreview, Ratio, WithdrawPreview};

/// Preview a deposit: the stable-unit reward minted on top of a base-pair
/// deposit is `floor(amount * reward)`.
pub fn preview_deposit(amount: U256, reward: Ratio) -> DepositPreview {
    DepositPreview {
        amount,
        reward: reward.apply(amount),
    }
}

/// Preview a withdrawal: `fee = floor(amount * fee_ratio)` is burned on top
/// of the withdrawn amount; `limit = floor(stable_balance * limit_ratio)`
/// caps the request.
pub fn preview_withdraw(
    amount: U256,
    stable_balance: U256,
    fee: Ratio,
    limit: Ratio,
) -> WithdrawPreview {
    WithdrawPreview {
        amount,
        fee: fee.apply(amount),
        limit: limit.apply(stable_balance),
    }
}

/// The collateralization invariant: the prospective debt value after the
/// operation may not exceed the account's collateral value.
pub fn check_collateralized(
    prospective_debt_value: U256,
    collateral_value: U256,
) -> Result<(), PoolError> {
    if prospective_debt_value > collateral_value {
        return Err(PoolError::InsufficientCollateral);
    }
    Ok(())
}

/// Reject a withdrawal request above the limit-ratio cap.
pub fn check_withdraw_limit(amount: U256, limit: U256) -> Result<(), PoolError> {
    if amount > limit {
        return Err(PoolError::LimitExceeded);
    }
    Ok(())
}
