//! Pool state — one reward bucket endorsing a single subject.

use serde::{Deserialize, Serialize};
use vouch_types::{PoolId, WalletAddress};

/// A staking pool.
///
/// Weighting parameters and the endorsed subject are fixed at creation;
/// `total_staked`, `stakers`, and `claimed` mutate only through the ledger.
/// Pools are never deleted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pool {
    pub id: PoolId,
    /// Activity weightage (basis points).
    pub weightage_activity: u64,
    /// Stake-quality weightage (basis points). Convention: sums with the
    /// activity weightage to 10_000; not enforced.
    pub weightage_quality: u64,
    /// APR-like reward multiplier (basis points; 11_000 = 110%).
    pub multiplier: u64,
    /// The subject this pool endorses.
    pub subject: WalletAddress,
    /// Running sum of all allocations, raw CRED.
    pub total_staked: u128,
    /// Stakers in insertion order, no duplicates.
    pub stakers: Vec<WalletAddress>,
    /// Stakers who have already settled a reward claim.
    pub claimed: Vec<WalletAddress>,
}

impl Pool {
    pub fn new(
        id: PoolId,
        weightage_activity: u64,
        weightage_quality: u64,
        multiplier: u64,
        subject: WalletAddress,
    ) -> Self {
        Self {
            id,
            weightage_activity,
            weightage_quality,
            multiplier,
            subject,
            total_staked: 0,
            stakers: Vec::new(),
            claimed: Vec::new(),
        }
    }

    /// Whether `staker` has an allocation in this pool.
    pub fn has_staker(&self, staker: &WalletAddress) -> bool {
        self.stakers.iter().any(|s| s == staker)
    }

    /// Whether `staker` has already claimed rewards from this pool.
    pub fn has_claimed(&self, staker: &WalletAddress) -> bool {
        self.claimed.iter().any(|s| s == staker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pool_is_empty() {
        let pool = Pool::new(0, 3000, 7000, 11_000, WalletAddress::new("vch_subject"));
        assert_eq!(pool.total_staked, 0);
        assert!(pool.stakers.is_empty());
        assert!(pool.claimed.is_empty());
    }

    #[test]
    fn test_has_staker() {
        let mut pool = Pool::new(0, 3000, 7000, 11_000, WalletAddress::new("vch_subject"));
        let staker = WalletAddress::new("vch_staker_1");
        assert!(!pool.has_staker(&staker));
        pool.stakers.push(staker.clone());
        assert!(pool.has_staker(&staker));
    }
}
