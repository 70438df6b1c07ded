//! Per-staker allocation history.

use serde::{Deserialize, Serialize};
use vouch_types::PoolId;

/// One staker's cumulative allocation in one pool.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PoolAllocation {
    pub pool: PoolId,
    /// Cumulative amount staked, raw CRED. Monotonically non-decreasing —
    /// there is no unstake path.
    pub amount_staked: u128,
}

/// A staker's full allocation history, in pool touch order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StakerProfile {
    pub allocations: Vec<PoolAllocation>,
}

impl StakerProfile {
    /// The staker's allocation in `pool`, if any.
    pub fn allocation(&self, pool: PoolId) -> Option<&PoolAllocation> {
        self.allocations.iter().find(|a| a.pool == pool)
    }

    pub fn allocation_mut(&mut self, pool: PoolId) -> Option<&mut PoolAllocation> {
        self.allocations.iter_mut().find(|a| a.pool == pool)
    }

    /// Number of distinct pools this staker has entered.
    pub fn endorsements_made(&self) -> u64 {
        self.allocations.len() as u64
    }
}

/// Read-only snapshot of a staker as the scoring equations see them:
/// own cumulative stakes paired position-by-position with each pool's
/// live total, plus the distinct-pool count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StakerData {
    /// Own cumulative stake per pool touched, in touch order.
    pub own_stakes: Vec<u128>,
    /// Each touched pool's current total, at the same positions.
    pub pool_totals: Vec<u128>,
    pub endorsements_made: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_lookup() {
        let mut profile = StakerProfile::default();
        profile.allocations.push(PoolAllocation {
            pool: 3,
            amount_staked: 500,
        });
        assert_eq!(profile.allocation(3).unwrap().amount_staked, 500);
        assert!(profile.allocation(0).is_none());
        assert_eq!(profile.endorsements_made(), 1);
    }

    #[test]
    fn test_touch_order_is_preserved() {
        let mut profile = StakerProfile::default();
        for pool in [7u64, 2, 5] {
            profile.allocations.push(PoolAllocation {
                pool,
                amount_staked: 100,
            });
        }
        let order: Vec<_> = profile.allocations.iter().map(|a| a.pool).collect();
        assert_eq!(order, vec![7, 2, 5]);
    }
}
