//! Token-transfer errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("insufficient CRED: need {needed}, have {available}")]
    InsufficientFunds { needed: u128, available: u128 },

    #[error("insufficient allowance: need {needed}, approved {approved}")]
    InsufficientAllowance { needed: u128, approved: u128 },

    #[error("token backend error: {0}")]
    Backend(String),
}
