//! Ledger-specific errors.

use thiserror::Error;
use vouch_score::ScoreError;
use vouch_token::TokenError;
use vouch_types::{PoolId, WalletAddress};

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("pool {0} not found")]
    PoolNotFound(PoolId),

    #[error("stake amount must be non-zero")]
    ZeroStake,

    #[error("{caller} is not authorized to create pools")]
    Unauthorized { caller: WalletAddress },

    #[error("staker {staker} has no allocation in pool {pool}")]
    StakerNotInPool { pool: PoolId, staker: WalletAddress },

    #[error("rewards for pool {pool} already claimed by {staker}")]
    AlreadyClaimed { pool: PoolId, staker: WalletAddress },

    #[error("insufficient custody balance: need {needed}, have {available}")]
    InsufficientCustody { needed: u128, available: u128 },

    #[error("token transfer failed: {0}")]
    Token(#[from] TokenError),

    #[error("arithmetic overflow in ledger accounting")]
    Overflow,

    #[error("score computation failed: {0}")]
    Score(#[from] ScoreError),

    #[error("storage error: {0}")]
    Store(String),
}
