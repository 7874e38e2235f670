//! Pool parameter storage.
//!
//! Owns the three configurable ratios. Validation happens in [`Ratio::new`]
//! and admin gating on the pool facade; this module is pure storage.

use odra::prelude::*;

use crate::types::Ratio;

/// The pool's configurable ratios: deposit reward, withdrawal fee and
/// withdrawal limit.
#[odra::module]
pub struct PoolParameters {
    /// Reward minted on top of base-pair deposits (default 0/1)
    reward: Var<Ratio>,
    /// Fee burned on top of base-pair withdrawals (default 0/1)
    fee: Var<Ratio>,
    /// Cap on base-pair withdrawals relative to the stable balance (default 1/1)
    limit: Var<Ratio>,
}

impl PoolParameters {
    /// Reset all ratios to their defaults: reward 0/1, fee 0/1, limit 1/1.
    pub fn init_defaults(&mut self) {
        self.reward.set(Ratio::zero());
        self.fee.set(Ratio::zero());
        self.limit.set(Ratio::one());
    }

    pub fn reward(&self) -> Ratio {
        self.reward.get().unwrap_or_else(Ratio::zero)
    }

    pub fn fee(&self) -> Ratio {
        self.fee.get().unwrap_or_else(Ratio::zero)
    }

    pub fn limit(&self) -> Ratio {
        self.limit.get().unwrap_or_else(Ratio::one)
    }

    pub fn set_reward(&mut self, ratio: Ratio) {
        self.reward.set(ratio);
    }

    pub fn set_fee(&mut self, ratio: Ratio) {
        self.fee.set(ratio);
    }

    pub fn set_limit(&mut self, ratio: Ratio) {
        self.limit.set(ratio);
    }
}
