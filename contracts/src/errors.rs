//! Pool error definitions.

use odra::prelude::*;

/// Liquidity pool errors
#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PoolError {
    // Amount / asset validation (1xx)
    InvalidAmount = 100,
    UnsupportedAsset = 101,

    // Ledger errors (2xx)
    InsufficientBalance = 200,
    InsufficientCollateral = 201,
    LimitExceeded = 202,

    // External collaborator errors (3xx)
    TransferFailed = 300,
    OracleUnavailable = 301,

    // Administrative errors (4xx)
    Unauthorized = 400,
    InvalidRatio = 401,
}

impl PoolError {
    pub const fn message(&self) -> &'static str {
        match self {
            PoolError::InvalidAmount => "Amount must be greater than zero",
            PoolError::UnsupportedAsset => "Asset is not priced or not allowed for this operation",

            PoolError::InsufficientBalance => "Recorded position is smaller than the requested amount",
            PoolError::InsufficientCollateral => "Debt value would exceed collateral value",
            PoolError::LimitExceeded => "Withdrawal exceeds the limit-ratio cap",

            PoolError::TransferFailed => "Token transfer was rejected",
            PoolError::OracleUnavailable => "Price oracle is unavailable",

            PoolError::Unauthorized => "Unauthorized: caller is not admin",
            PoolError::InvalidRatio => "Ratio denominator must be nonzero",
        }
    }
}

impl core::fmt::Display for PoolError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<PoolError> for OdraError {
    fn from(error: PoolError) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            OdraError::user(error as u16)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            OdraError::user(error as u16, error.message())
        }
    }
}
