//! Scoring-specific errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    #[error("max_endorsements must be non-zero")]
    ZeroMaxEndorsements,

    #[error("stake profile is empty")]
    EmptyProfile,

    #[error("stake profile length mismatch: {own} own entries, {totals} pool totals")]
    LengthMismatch { own: usize, totals: usize },

    #[error("pool total at position {0} is zero")]
    ZeroPoolTotal(usize),

    #[error("aggregate stake contribution is zero, no share can be computed")]
    ZeroAggregateContribution,

    #[error("arithmetic overflow in score computation")]
    Overflow,
}
