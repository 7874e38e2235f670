//! Liquidity pool facade contract.
//!
//! Composes the parameter store, the collateral/debt ledger, the valuation
//! engine and the epoch tracker into the pool's operation surface. Every
//! mutating entry point runs validate -> ledger effects -> external calls in
//! that order, so a reentrant observer only ever sees post-mutation state;
//! a revert at any point rolls the whole operation back.

use odra::casper_types::U256;
use odra::prelude::*;
use odra::ContractRef;

use crate::epochs::EpochSnapshotTracker;
use crate::errors::PoolError;
use crate::events::{
    Borrowed, Bought, Deposited, EpochClosed, RatioUpdated, Repaid, RewardsClaimed, Sold,
    Withdrawn,
};
use crate::interfaces::{
    FungibleTokenContractRef, StableUnitContractRef, StakingBridgeContractRef,
};
use crate::ledger::CollateralDebtLedger;
use crate::params::PoolParameters;
use crate::risk;
use crate::types::{EpochSnapshot, Ratio};
use crate::valuation::ValuationEngine;

/// Collateralized liquidity pool
#[odra::module(events = [
    Deposited,
    Withdrawn,
    Borrowed,
    Repaid,
    Bought,
    Sold,
    RewardsClaimed,
    EpochClosed,
    RatioUpdated
])]
pub struct LiquidityPool {
    /// Admin identity, fixed at construction
    admin: Var<Address>,
    /// The native reserve asset (wrapped-native CEP-18 token)
    native_asset: Var<Address>,
    /// The stable unit token
    stable_unit: Var<Address>,
    /// Staking bridge contract realizing delegation/validator rewards
    staking_bridge: Var<Address>,
    /// Realized staking rewards held by the pool
    reserve: Var<U256>,
    /// Configurable reward/fee/limit ratios
    params: SubModule<PoolParameters>,
    /// Per-account collateral and debt positions
    ledger: SubModule<CollateralDebtLedger>,
    /// Oracle-driven valuation
    valuation: SubModule<ValuationEngine>,
    /// Reward-accounting epoch sequence
    epochs: SubModule<EpochSnapshotTracker>,
}

#[odra::module]
impl LiquidityPool {
    /// Initialize the pool with its collaborators. The caller becomes the
    /// admin for the lifetime of the contract.
    pub fn init(
        &mut self,
        native_asset: Address,
        stable_unit: Address,
        oracle: Address,
        staking_bridge: Address,
    ) {
        self.admin.set(self.env().caller());
        self.native_asset.set(native_asset);
        self.stable_unit.set(stable_unit);
        self.staking_bridge.set(staking_bridge);
        self.reserve.set(U256::zero());
        self.params.init_defaults();
        self.valuation.configure(oracle, stable_unit);
    }

    // ========== Trade Operations ==========

    /// Deposit `amount` of `asset` as collateral.
    ///
    /// Base-pair deposits (the native reserve asset) additionally mint
    /// `amount + reward` stable units to the caller.
    pub fn deposit(&mut self, asset: Address, amount: U256) {
        let caller = self.env().caller();
        self.require_nonzero(amount);

        // The asset must be priced so the position can count as collateral.
        if let Err(error) = self.valuation.price_of(asset) {
            self.env().revert(error);
        }

        let position = self.ledger.credit_collateral(caller, asset, amount);

        let reward = if self.is_native(asset) {
            let preview = risk::preview_deposit(amount, self.params.reward());
            self.mint_stable(caller, amount + preview.reward);
            preview.reward
        } else {
            U256::zero()
        };

        self.pull(asset, caller, amount);

        self.env().emit_event(Deposited {
            account: caller,
            asset,
            amount,
            reward_minted: reward,
            position,
        });
    }

    /// Withdraw `amount` of `asset` collateral back to the caller.
    ///
    /// Base-pair withdrawals are capped by the limit ratio applied to the
    /// caller's stable balance and burn `amount + fee` stable units.
    pub fn withdraw(&mut self, asset: Address, amount: U256) {
        let caller = self.env().caller();
        self.require_nonzero(amount);

        let current = self.ledger.collateral_of(caller, asset);
        if amount > current {
            self.env().revert(PoolError::InsufficientBalance);
        }

        // Collateralization must still hold once this collateral leaves.
        let debt_value = self.value_or_revert(self.valuation.debt_value(&self.ledger, caller));
        if !debt_value.is_zero() {
            let collateral_value =
                self.value_or_revert(self.valuation.collateral_value(&self.ledger, caller));
            let removed = self.value_or_revert(self.valuation.value_of(asset, amount));
            if let Err(error) = risk::check_collateralized(debt_value, collateral_value - removed)
            {
                self.env().revert(error);
            }
        }

        let fee = if self.is_native(asset) {
            let stable_balance = self.stable_token().balance_of(caller);
            let preview = risk::preview_withdraw(
                amount,
                stable_balance,
                self.params.fee(),
                self.params.limit(),
            );
            if let Err(error) = risk::check_withdraw_limit(amount, preview.limit) {
                self.env().revert(error);
            }
            preview.fee
        } else {
            U256::zero()
        };

        let position = match self.ledger.debit_collateral(caller, asset, amount) {
            Ok(position) => position,
            Err(error) => self.env().revert(error),
        };

        if self.is_native(asset) {
            self.pull_and_burn_stable(caller, amount + fee);
        }
        self.push(asset, caller, amount);

        self.env().emit_event(Withdrawn {
            account: caller,
            asset,
            amount,
            fee_burned: fee,
            position,
        });
    }

    /// Borrow `amount` of `asset` against the caller's collateral.
    ///
    /// The prospective debt value may not exceed the collateral value. The
    /// native reserve asset and the stable unit cannot be borrowed.
    pub fn borrow(&mut self, asset: Address, amount: U256) {
        let caller = self.env().caller();
        self.require_nonzero(amount);
        self.require_tradable(asset);

        let value = self.value_or_revert(self.valuation.value_of(asset, amount));
        let debt_value = self.value_or_revert(self.valuation.debt_value(&self.ledger, caller));
        let collateral_value =
            self.value_or_revert(self.valuation.collateral_value(&self.ledger, caller));
        if let Err(error) = risk::check_collateralized(debt_value + value, collateral_value) {
            self.env().revert(error);
        }

        let position = self.ledger.credit_debt(caller, asset, amount);

        self.push(asset, caller, amount);

        self.env().emit_event(Borrowed {
            account: caller,
            asset,
            amount,
            position,
        });
    }

    /// Repay outstanding `asset` debt. Settles `min(amount, debt)` and pulls
    /// only the settled amount from the caller.
    pub fn repay(&mut self, asset: Address, amount: U256) {
        let caller = self.env().caller();
        self.require_nonzero(amount);
        if self.is_native(asset) {
            self.env().revert(PoolError::UnsupportedAsset);
        }

        let debt = self.ledger.debt_of(caller, asset);
        let settled = amount.min(debt);

        let position = if settled.is_zero() {
            debt
        } else {
            match self.ledger.debit_debt(caller, asset, settled) {
                Ok(position) => position,
                Err(error) => self.env().revert(error),
            }
        };

        if !settled.is_zero() {
            self.pull(asset, caller, settled);
        }

        self.env().emit_event(Repaid {
            account: caller,
            asset,
            amount: settled,
            position,
        });
    }

    /// Buy `amount` of `asset` from the pool reserve, paying its oracle value
    /// in stable units. The payment is burned.
    pub fn buy(&mut self, asset: Address, amount: U256) {
        let caller = self.env().caller();
        self.require_nonzero(amount);
        self.require_tradable(asset);

        let cost = self.value_or_revert(self.valuation.value_of(asset, amount));

        self.pull_and_burn_stable(caller, cost);
        self.push(asset, caller, amount);

        self.env().emit_event(Bought {
            account: caller,
            asset,
            amount,
            cost,
        });
    }

    /// Sell `amount` of `asset` into the pool reserve, receiving its oracle
    /// value in freshly minted stable units.
    pub fn sell(&mut self, asset: Address, amount: U256) {
        let caller = self.env().caller();
        self.require_nonzero(amount);
        self.require_tradable(asset);

        let proceeds = self.value_or_revert(self.valuation.value_of(asset, amount));

        self.pull(asset, caller, amount);
        self.mint_stable(caller, proceeds);

        self.env().emit_event(Sold {
            account: caller,
            asset,
            amount,
            proceeds,
        });
    }

    // ========== Staking Rewards ==========

    /// Realize delegation rewards for an epoch into the pool reserve.
    pub fn claim_delegation_rewards(&mut self, epoch: u64) -> U256 {
        let amount = self.staking_bridge().claim_delegation_rewards(epoch);
        let reserve = self.credit_reserve(amount);

        self.env().emit_event(RewardsClaimed {
            source: String::from("delegation"),
            epoch,
            amount,
            reserve,
        });
        amount
    }

    /// Realize validator rewards for an epoch into the pool reserve.
    pub fn claim_validator_rewards(&mut self, epoch: u64) -> U256 {
        let amount = self.staking_bridge().claim_validator_rewards(epoch);
        let reserve = self.credit_reserve(amount);

        self.env().emit_event(RewardsClaimed {
            source: String::from("validator"),
            epoch,
            amount,
            reserve,
        });
        amount
    }

    // ========== Epoch Sequencing ==========

    /// Close the open epoch at the current block time and open the next one.
    /// Returns the closed epoch id.
    pub fn close_current_epoch(&mut self) -> u64 {
        let now = self.env().get_block_time();
        let snapshot = self.epochs.close(now);

        self.env().emit_event(EpochClosed {
            epoch_id: snapshot.epoch_id,
            end_time: snapshot.end_time,
            next_epoch_id: snapshot.epoch_id + 1,
        });
        snapshot.epoch_id
    }

    /// Id of the currently open epoch.
    pub fn current_epoch(&self) -> u64 {
        self.epochs.current_epoch()
    }

    /// Snapshot of a closed epoch; `None` for the open epoch or future ids.
    pub fn epoch_snapshot(&self, epoch_id: u64) -> Option<EpochSnapshot> {
        self.epochs.snapshot(epoch_id)
    }

    // ========== Parameter Administration ==========

    /// Set the deposit reward ratio (admin only).
    pub fn set_reward(&mut self, num: u64, denom: u64) {
        self.require_admin();
        self.params.set_reward(self.ratio_or_revert(num, denom));
        self.env().emit_event(RatioUpdated {
            param: String::from("reward"),
            num,
            denom,
        });
    }

    /// Set the withdrawal fee ratio (admin only).
    pub fn set_fee(&mut self, num: u64, denom: u64) {
        self.require_admin();
        self.params.set_fee(self.ratio_or_revert(num, denom));
        self.env().emit_event(RatioUpdated {
            param: String::from("fee"),
            num,
            denom,
        });
    }

    /// Set the withdrawal limit ratio (admin only).
    pub fn set_limit(&mut self, num: u64, denom: u64) {
        self.require_admin();
        self.params.set_limit(self.ratio_or_revert(num, denom));
        self.env().emit_event(RatioUpdated {
            param: String::from("limit"),
            num,
            denom,
        });
    }

    /// Current reward ratio as `(num, denom)`.
    pub fn get_reward(&self) -> (u64, u64) {
        let ratio = self.params.reward();
        (ratio.num, ratio.denom)
    }

    /// Current fee ratio as `(num, denom)`.
    pub fn get_fee(&self) -> (u64, u64) {
        let ratio = self.params.fee();
        (ratio.num, ratio.denom)
    }

    /// Current limit ratio as `(num, denom)`.
    pub fn get_limit(&self) -> (u64, u64) {
        let ratio = self.params.limit();
        (ratio.num, ratio.denom)
    }

    // ========== Views ==========

    /// Aggregate collateral value of an account in canonical value units.
    pub fn collateral_value_of(&self, account: Address) -> U256 {
        self.value_or_revert(self.valuation.collateral_value(&self.ledger, account))
    }

    /// Aggregate debt value of an account in canonical value units.
    pub fn debt_value_of(&self, account: Address) -> U256 {
        self.value_or_revert(self.valuation.debt_value(&self.ledger, account))
    }

    /// Preview a deposit: `(amount, reward)` under the current reward ratio.
    pub fn deposit_info(&self, amount: U256) -> (U256, U256) {
        let preview = risk::preview_deposit(amount, self.params.reward());
        (preview.amount, preview.reward)
    }

    /// Preview a withdrawal for an account: `(amount, fee, limit)` under the
    /// current fee and limit ratios.
    pub fn withdraw_info(&self, account: Address, amount: U256) -> (U256, U256, U256) {
        let stable_balance = self.stable_token().balance_of(account);
        let preview = risk::preview_withdraw(
            amount,
            stable_balance,
            self.params.fee(),
            self.params.limit(),
        );
        (preview.amount, preview.fee, preview.limit)
    }

    /// Recorded collateral position.
    pub fn collateral_of(&self, account: Address, asset: Address) -> U256 {
        self.ledger.collateral_of(account, asset)
    }

    /// Recorded debt position.
    pub fn debt_of(&self, account: Address, asset: Address) -> U256 {
        self.ledger.debt_of(account, asset)
    }

    /// Realized staking rewards held by the pool.
    pub fn reserve(&self) -> U256 {
        self.reserve.get_or_default()
    }

    /// The native reserve asset address.
    pub fn native_asset(&self) -> Address {
        self.native_asset.get().expect("native asset not set")
    }

    /// The stable unit token address.
    pub fn stable_unit(&self) -> Address {
        self.stable_unit.get().expect("stable unit not set")
    }

    /// The admin address.
    pub fn get_admin(&self) -> Option<Address> {
        self.admin.get()
    }

    // ========== Internal helpers ==========

    fn require_admin(&self) {
        let caller = self.env().caller();
        if self.admin.get() != Some(caller) {
            self.env().revert(PoolError::Unauthorized);
        }
    }

    fn require_nonzero(&self, amount: U256) {
        if amount.is_zero() {
            self.env().revert(PoolError::InvalidAmount);
        }
    }

    /// The native reserve asset and the stable unit are excluded from
    /// borrow/buy/sell.
    fn require_tradable(&self, asset: Address) {
        if self.is_native(asset) || Some(asset) == self.stable_unit.get() {
            self.env().revert(PoolError::UnsupportedAsset);
        }
    }

    fn is_native(&self, asset: Address) -> bool {
        Some(asset) == self.native_asset.get()
    }

    fn value_or_revert(&self, result: Result<U256, PoolError>) -> U256 {
        match result {
            Ok(value) => value,
            Err(error) => self.env().revert(error),
        }
    }

    fn ratio_or_revert(&self, num: u64, denom: u64) -> Ratio {
        match Ratio::new(num, denom) {
            Ok(ratio) => ratio,
            Err(error) => self.env().revert(error),
        }
    }

    fn stable_token(&self) -> StableUnitContractRef {
        let stable = self.stable_unit.get().expect("stable unit not set");
        StableUnitContractRef::new(self.env(), stable)
    }

    fn staking_bridge(&self) -> StakingBridgeContractRef {
        let bridge = self.staking_bridge.get().expect("staking bridge not set");
        StakingBridgeContractRef::new(self.env(), bridge)
    }

    fn credit_reserve(&mut self, amount: U256) -> U256 {
        let reserve = self.reserve.get_or_default() + amount;
        self.reserve.set(reserve);
        reserve
    }

    /// Pull tokens from `from` into the pool. The allowance is checked first
    /// so a short approval surfaces as `TransferFailed` rather than a raw
    /// token error.
    fn pull(&self, asset: Address, from: Address, amount: U256) {
        let mut token = FungibleTokenContractRef::new(self.env(), asset);
        let self_address = self.env().self_address();
        if token.allowance(from, self_address) < amount {
            self.env().revert(PoolError::TransferFailed);
        }
        if !token.transfer_from(from, self_address, amount) {
            self.env().revert(PoolError::TransferFailed);
        }
    }

    /// Push tokens from the pool to `to`.
    fn push(&self, asset: Address, to: Address, amount: U256) {
        let mut token = FungibleTokenContractRef::new(self.env(), asset);
        if !token.transfer(to, amount) {
            self.env().revert(PoolError::TransferFailed);
        }
    }

    fn mint_stable(&self, to: Address, amount: U256) {
        self.stable_token().mint(to, amount);
    }

    /// Pull stable units from `owner` and retire them.
    fn pull_and_burn_stable(&self, owner: Address, amount: U256) {
        let mut stable = self.stable_token();
        let self_address = self.env().self_address();
        if stable.allowance(owner, self_address) < amount {
            self.env().revert(PoolError::TransferFailed);
        }
        if !stable.transfer_from(owner, self_address, amount) {
            self.env().revert(PoolError::TransferFailed);
        }
        stable.burn(self_address, amount);
    }
}
