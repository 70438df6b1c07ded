//! Scoring equations for the Vouch protocol.
//!
//! Four chained fixed-point formulas convert raw allocation vectors into
//! endorsement-activity percents, stake-quality percents, blended staker
//! quality, pool reward budgets, and per-staker reward shares.
//!
//! Everything here is pure and stateless: each function is a deterministic
//! map from its explicit inputs to a scalar. The ledger assembles the input
//! vectors; this crate never sees its storage.
//!
//! Integer division truncates toward zero at each named step. The truncation
//! points are load-bearing: reassociating a multiply/divide pair, or routing
//! through floating point, changes results by ±1 and breaks compatibility
//! with the reference fixtures.

pub mod equations;
pub mod error;

pub use equations::{
    max_rewards_for_pool, number_of_endorsements, quality_of_staker, quality_of_stakes,
    reward_share, EndorsementActivity, RewardEntry, StakeSpread,
};
pub use error::ScoreError;
