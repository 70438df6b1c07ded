//! The Vouch staking ledger.
//!
//! [`StakingLedger`] owns all mutable protocol state: the pool arena, every
//! staker's allocation history, and per-pool claim markers. It assembles
//! live vectors for the scoring equations in `vouch-score` and settles
//! deposits and reward payouts against the external [`vouch_token::CredToken`]
//! collaborator.
//!
//! Concurrency model: every mutation takes `&mut self`, so one ledger
//! instance serializes its writers; queries take `&self` and always observe
//! a consistent snapshot. A service embedding the ledger must keep it behind
//! one exclusive lock (or a single-writer queue) to preserve this. The only
//! external blocking boundary is the token call inside staking and claiming,
//! ordered so that failure leaves the ledger untouched and success is
//! followed by an infallible commit.

pub mod error;
pub mod ledger;
pub mod pool;
pub mod staker;

pub use error::LedgerError;
pub use ledger::StakingLedger;
pub use pool::Pool;
pub use staker::{PoolAllocation, StakerData, StakerProfile};
