//! Protocol parameters and fixed-point conventions.
//!
//! All percentage-like quantities are integers: weightages and multipliers
//! are basis points (10_000 = 100.00%), scores are whole percents (100 = 100%).

use serde::{Deserialize, Serialize};

/// Sequential pool identifier, assigned at creation starting from 0.
pub type PoolId = u64;

/// Basis-point denominator: 10_000 basis points = 100.00%.
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Whole-percent denominator: 100 = 100%.
pub const PERCENT_DENOMINATOR: u128 = 100;

/// Number of raw units in one CRED. 1 CRED = 10^18 raw.
pub const CRED_UNIT: u128 = 1_000_000_000_000_000_000;

/// All protocol parameters carried by a ledger instance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProtocolParams {
    /// Expected endorsement ceiling — the denominator of the activity score.
    /// A staker active in this many distinct pools scores 100.
    pub max_endorsements: u64,

    /// Default activity weightage for new pools (basis points).
    pub default_weightage_activity: u64,

    /// Default stake-quality weightage for new pools (basis points).
    /// Convention: activity + quality weightages sum to 10_000.
    pub default_weightage_quality: u64,

    /// Default reward multiplier for new pools (basis points, APR-like;
    /// 11_000 = 110%).
    pub default_multiplier: u64,

    /// Reserved fixed-point scratch constant passed through reward
    /// computations for call parity. Conventionally [`CRED_UNIT`].
    pub reward_precision: u128,
}

impl ProtocolParams {
    /// Vouch defaults — the reference configuration.
    pub fn vouch_defaults() -> Self {
        Self {
            max_endorsements: 10,
            default_weightage_activity: 3_000, // 30%
            default_weightage_quality: 7_000,  // 70%
            default_multiplier: 11_000,        // 110%
            reward_precision: CRED_UNIT,
        }
    }
}

/// Default is the Vouch reference configuration.
impl Default for ProtocolParams {
    fn default() -> Self {
        Self::vouch_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weightages_sum_to_full_bps() {
        let params = ProtocolParams::default();
        assert_eq!(
            u128::from(params.default_weightage_activity + params.default_weightage_quality),
            BPS_DENOMINATOR
        );
    }

    #[test]
    fn test_default_precision_is_one_cred() {
        let params = ProtocolParams::default();
        assert_eq!(params.reward_precision, CRED_UNIT);
    }
}
