//! Oracle-driven valuation.
//!
//! Converts asset amounts into canonical value units through the injected
//! price oracle and aggregates position values per account. Read-only; all
//! results are reported as `Result` and reverted at the facade boundary.

use odra::casper_types::U256;
use odra::prelude::*;
use odra::ContractRef;

use crate::errors::PoolError;
use crate::interfaces::PriceOracleContractRef;
use crate::ledger::CollateralDebtLedger;

/// Valuation component: oracle address plus the stable unit, which is priced
/// implicitly at 1 canonical value unit.
#[odra::module]
pub struct ValuationEngine {
    /// Price oracle contract
    oracle: Var<Address>,
    /// Stable unit token (fixed price of 1)
    stable_unit: Var<Address>,
}

impl ValuationEngine {
    pub fn configure(&mut self, oracle: Address, stable_unit: Address) {
        self.oracle.set(oracle);
        self.stable_unit.set(stable_unit);
    }

    /// Current oracle price of an asset in canonical value units.
    ///
    /// The stable unit is always worth 1. Any other asset without an oracle
    /// price is `UnsupportedAsset`.
    pub fn price_of(&self, asset: Address) -> Result<U256, PoolError> {
        if Some(asset) == self.stable_unit.get() {
            return Ok(U256::one());
        }
        let oracle = match self.oracle.get() {
            Some(oracle) => oracle,
            None => return Err(PoolError::OracleUnavailable),
        };
        PriceOracleContractRef::new(self.env(), oracle)
            .price_of(asset)
            .ok_or(PoolError::UnsupportedAsset)
    }

    /// `amount * price(asset)` in canonical value units.
    pub fn value_of(&self, asset: Address, amount: U256) -> Result<U256, PoolError> {
        Ok(amount * self.price_of(asset)?)
    }

    /// Aggregate value of an account's collateral positions.
    pub fn collateral_value(
        &self,
        ledger: &CollateralDebtLedger,
        account: Address,
    ) -> Result<U256, PoolError> {
        let mut total = U256::zero();
        for asset in ledger.assets_of(account) {
            let position = ledger.collateral_of(account, asset);
            if position.is_zero() {
                continue;
            }
            total += self.value_of(asset, position)?;
        }
        Ok(total)
    }

    /// Aggregate value of an account's debt positions.
    pub fn debt_value(
        &self,
        ledger: &CollateralDebtLedger,
        account: Address,
    ) -> Result<U256, PoolError> {
        let mut total = U256::zero();
        for asset in ledger.assets_of(account) {
            let position = ledger.debt_of(account, asset);
            if position.is_zero() {
                continue;
            }
            total += self.value_of(asset, position)?;
        }
        Ok(total)
    }
}
