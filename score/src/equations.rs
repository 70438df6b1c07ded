//! The four scoring equations.
//!
//! Conventions: weightages and multipliers are basis points (10_000 =
//! 100.00%); activity and quality scores are whole percents (100 = 100%);
//! stake amounts are raw u128 CRED units.

use crate::error::ScoreError;
use vouch_types::{BPS_DENOMINATOR, PERCENT_DENOMINATOR};

/// A staker's endorsement activity relative to the expected ceiling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndorsementActivity {
    /// The activity ceiling: staking into this many distinct pools scores 100.
    pub max_endorsements: u64,
    /// Number of distinct pools the staker has entered.
    pub endorsements_made: u64,
}

/// A staker's allocation spread: own cumulative stake per pool touched,
/// paired position-by-position with that pool's total stake.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StakeSpread {
    /// The staker's own cumulative stake in each pool, in touch order.
    pub own: Vec<u128>,
    /// Each pool's total stake, at the same positions.
    pub totals: Vec<u128>,
}

/// One staker's entry in a pool-wide reward computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewardEntry {
    /// The staker's allocation in the pool, raw CRED units.
    pub stake_amount: u128,
    /// The staker's blended quality score, whole percent.
    pub quality_score: u64,
}

/// Activity score: how close a staker's endorsement count is to the ceiling,
/// as a whole percent. Counts above the ceiling are capped at 100.
///
/// `min(endorsements_made, max_endorsements) * 100 / max_endorsements`
///
/// # Errors
/// [`ScoreError::ZeroMaxEndorsements`] if the ceiling is zero.
pub fn number_of_endorsements(
    max_endorsements: u64,
    endorsements_made: u64,
) -> Result<u64, ScoreError> {
    if max_endorsements == 0 {
        return Err(ScoreError::ZeroMaxEndorsements);
    }
    let capped = u128::from(endorsements_made.min(max_endorsements));
    let pct = capped * PERCENT_DENOMINATOR / u128::from(max_endorsements);
    Ok(pct as u64)
}

/// Stake-quality score: the staker's average ownership share across every
/// pool they have entered, as a whole percent.
///
/// Per pool: `ratio = own * 10_000 / total` (ownership in basis points).
/// Then `avg = sum(ratio) / n`, and the result is `avg / 100`. Each division
/// truncates; the order must not be reassociated.
///
/// # Errors
/// Rejects empty or mismatched vectors and zero pool totals; overlarge
/// inputs fail with [`ScoreError::Overflow`] rather than wrapping.
pub fn quality_of_stakes(own: &[u128], totals: &[u128]) -> Result<u64, ScoreError> {
    if own.len() != totals.len() {
        return Err(ScoreError::LengthMismatch {
            own: own.len(),
            totals: totals.len(),
        });
    }
    if own.is_empty() {
        return Err(ScoreError::EmptyProfile);
    }

    let mut sum: u128 = 0;
    for (i, (&held, &total)) in own.iter().zip(totals.iter()).enumerate() {
        if total == 0 {
            return Err(ScoreError::ZeroPoolTotal(i));
        }
        let ratio = held
            .checked_mul(BPS_DENOMINATOR)
            .ok_or(ScoreError::Overflow)?
            / total;
        sum = sum.checked_add(ratio).ok_or(ScoreError::Overflow)?;
    }

    let avg = sum / own.len() as u128;
    u64::try_from(avg / PERCENT_DENOMINATOR).map_err(|_| ScoreError::Overflow)
}

/// Blended staker quality: endorsement activity and stake quality combined
/// under a pool's weighting scheme.
///
/// `(ne * weightage_activity + qs * weightage_quality) / 10_000`
///
/// The caller is responsible for supplying weightages that sum to 10_000;
/// the blend is computed as given and not validated.
pub fn quality_of_staker(
    weightage_activity: u64,
    weightage_quality: u64,
    activity: &EndorsementActivity,
    spread: &StakeSpread,
) -> Result<u64, ScoreError> {
    let ne = number_of_endorsements(activity.max_endorsements, activity.endorsements_made)?;
    let qs = quality_of_stakes(&spread.own, &spread.totals)?;

    let weighted_ne = u128::from(ne)
        .checked_mul(u128::from(weightage_activity))
        .ok_or(ScoreError::Overflow)?;
    let weighted_qs = u128::from(qs)
        .checked_mul(u128::from(weightage_quality))
        .ok_or(ScoreError::Overflow)?;
    let blended = weighted_ne
        .checked_add(weighted_qs)
        .ok_or(ScoreError::Overflow)?
        / BPS_DENOMINATOR;
    u64::try_from(blended).map_err(|_| ScoreError::Overflow)
}

/// A single staker's stake×quality contribution: `stake * quality / 100`.
fn contribution(entry: &RewardEntry) -> Result<u128, ScoreError> {
    Ok(entry
        .stake_amount
        .checked_mul(u128::from(entry.quality_score))
        .ok_or(ScoreError::Overflow)?
        / PERCENT_DENOMINATOR)
}

/// Aggregate reward budget for a pool: the sum of every staker's
/// stake×quality contribution, scaled by the basis-point multiplier.
///
/// `sum(stake_i * quality_i / 100) * multiplier / 10_000`
///
/// An empty entry set yields a zero budget. `_precision` is a reserved
/// fixed-point scratch constant (conventionally 10^18) kept for call parity;
/// it does not change the integral result over the documented value domain.
pub fn max_rewards_for_pool(
    multiplier: u64,
    entries: &[RewardEntry],
    _precision: u128,
) -> Result<u128, ScoreError> {
    let mut total: u128 = 0;
    for entry in entries {
        total = total
            .checked_add(contribution(entry)?)
            .ok_or(ScoreError::Overflow)?;
    }
    Ok(total
        .checked_mul(u128::from(multiplier))
        .ok_or(ScoreError::Overflow)?
        / BPS_DENOMINATOR)
}

/// The target staker's proportional share of a pool's reward budget,
/// weighted by its stake×quality contribution relative to the aggregate.
///
/// The target's weight is truncated to a whole percent before it is applied:
/// `pct = contribution_target * 100 / total`, then
/// `share = max_rewards * pct / 100`. Collapsing the two divisions into one
/// (`max_rewards * contribution / total`) produces different, incompatible
/// results.
///
/// # Errors
/// [`ScoreError::ZeroAggregateContribution`] when every contribution
/// truncates to zero — there is no proportion to take.
pub fn reward_share(
    max_rewards: u128,
    entries: &[RewardEntry],
    target: &RewardEntry,
) -> Result<u128, ScoreError> {
    let mut total: u128 = 0;
    for entry in entries {
        total = total
            .checked_add(contribution(entry)?)
            .ok_or(ScoreError::Overflow)?;
    }
    if total == 0 {
        return Err(ScoreError::ZeroAggregateContribution);
    }

    let pct = contribution(target)?
        .checked_mul(PERCENT_DENOMINATOR)
        .ok_or(ScoreError::Overflow)?
        / total;
    Ok(max_rewards
        .checked_mul(pct)
        .ok_or(ScoreError::Overflow)?
        / PERCENT_DENOMINATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The reference staker profiles used across the fixture suite.
    // Profile i: (own stakes per pool, pool totals, endorsements made).
    fn staker_profile(i: usize) -> (Vec<u128>, Vec<u128>, u64) {
        match i {
            0 => (
                vec![500, 300, 1000, 1050, 200, 400, 600, 800, 1000],
                vec![1000, 2000, 3000, 4000, 5000, 6000, 7000, 8000, 9000],
                9,
            ),
            1 => (vec![100, 800, 500, 2000], vec![1000, 2000, 3000, 4000], 4),
            2 => (vec![200, 200], vec![1000, 2000], 2),
            3 => (
                vec![200, 700, 1500, 950, 4800, 5600, 6400, 7200, 8000],
                vec![1000, 2000, 3000, 4000, 5000, 6000, 7000, 8000, 9000],
                9,
            ),
            _ => unreachable!(),
        }
    }

    fn quality_for(i: usize) -> u64 {
        let (own, totals, made) = staker_profile(i);
        quality_of_staker(
            3000,
            7000,
            &EndorsementActivity {
                max_endorsements: 10,
                endorsements_made: made,
            },
            &StakeSpread { own, totals },
        )
        .unwrap()
    }

    #[test]
    fn test_number_of_endorsements_reference_vectors() {
        assert_eq!(number_of_endorsements(10, 9).unwrap(), 90);
        assert_eq!(number_of_endorsements(10, 4).unwrap(), 40);
    }

    #[test]
    fn test_number_of_endorsements_bounds() {
        assert_eq!(number_of_endorsements(10, 0).unwrap(), 0);
        assert_eq!(number_of_endorsements(10, 10).unwrap(), 100);
        // Above the ceiling is capped, not extrapolated.
        assert_eq!(number_of_endorsements(10, 25).unwrap(), 100);
    }

    #[test]
    fn test_number_of_endorsements_zero_ceiling() {
        assert_eq!(
            number_of_endorsements(0, 5),
            Err(ScoreError::ZeroMaxEndorsements)
        );
    }

    #[test]
    fn test_quality_of_stakes_reference_vectors() {
        assert_eq!(quality_of_stakes(&[200, 200], &[1000, 2000]).unwrap(), 15);

        let (own, totals, _) = staker_profile(0);
        assert_eq!(quality_of_stakes(&own, &totals).unwrap(), 18);
    }

    #[test]
    fn test_quality_of_stakes_sole_staker_is_100() {
        assert_eq!(quality_of_stakes(&[700], &[700]).unwrap(), 100);
    }

    #[test]
    fn test_quality_of_stakes_rejects_empty() {
        assert_eq!(quality_of_stakes(&[], &[]), Err(ScoreError::EmptyProfile));
    }

    #[test]
    fn test_quality_of_stakes_rejects_mismatch() {
        assert_eq!(
            quality_of_stakes(&[1, 2], &[10]),
            Err(ScoreError::LengthMismatch { own: 2, totals: 1 })
        );
    }

    #[test]
    fn test_quality_of_stakes_rejects_zero_total() {
        assert_eq!(
            quality_of_stakes(&[100, 0], &[1000, 0]),
            Err(ScoreError::ZeroPoolTotal(1))
        );
    }

    #[test]
    fn test_quality_of_stakes_overflow_is_detected() {
        assert_eq!(
            quality_of_stakes(&[u128::MAX], &[u128::MAX]),
            Err(ScoreError::Overflow)
        );
    }

    #[test]
    fn test_quality_of_staker_reference_vector() {
        assert_eq!(quality_for(0), 39);
        assert_eq!(quality_for(1), 32);
        assert_eq!(quality_for(2), 16);
        assert_eq!(quality_for(3), 72);
    }

    #[test]
    fn test_quality_of_staker_matches_manual_blend() {
        let (own, totals, made) = staker_profile(0);
        let ne = number_of_endorsements(10, made).unwrap();
        let qs = quality_of_stakes(&own, &totals).unwrap();
        let blended = (u128::from(ne) * 3000 + u128::from(qs) * 7000) / 10_000;
        assert_eq!(quality_for(0), blended as u64);
    }

    #[test]
    fn test_max_rewards_reference_vectors() {
        let three = [
            RewardEntry { stake_amount: 500, quality_score: 39 },
            RewardEntry { stake_amount: 100, quality_score: 32 },
            RewardEntry { stake_amount: 200, quality_score: 16 },
        ];
        assert_eq!(
            max_rewards_for_pool(11_000, &three, vouch_types::CRED_UNIT).unwrap(),
            284
        );

        let four = [
            RewardEntry { stake_amount: 500, quality_score: 39 },
            RewardEntry { stake_amount: 100, quality_score: 32 },
            RewardEntry { stake_amount: 200, quality_score: 16 },
            RewardEntry { stake_amount: 200, quality_score: 72 },
        ];
        assert_eq!(
            max_rewards_for_pool(11_000, &four, vouch_types::CRED_UNIT).unwrap(),
            443
        );
    }

    #[test]
    fn test_max_rewards_empty_pool_is_zero() {
        assert_eq!(
            max_rewards_for_pool(11_000, &[], vouch_types::CRED_UNIT).unwrap(),
            0
        );
    }

    #[test]
    fn test_reward_share_reference_vectors() {
        let target = RewardEntry { stake_amount: 200, quality_score: 16 };

        let three = [
            RewardEntry { stake_amount: 500, quality_score: 39 },
            RewardEntry { stake_amount: 100, quality_score: 32 },
            target,
        ];
        // contribution 32 of 259 total = 12 whole percent of 284.
        assert_eq!(reward_share(284, &three, &target).unwrap(), 34);

        let four = [
            RewardEntry { stake_amount: 500, quality_score: 39 },
            RewardEntry { stake_amount: 100, quality_score: 32 },
            target,
            RewardEntry { stake_amount: 200, quality_score: 72 },
        ];
        // contribution 32 of 403 total = 7 whole percent of 443.
        assert_eq!(reward_share(443, &four, &target).unwrap(), 31);
    }

    #[test]
    fn test_reward_share_zero_aggregate() {
        let dust = [RewardEntry { stake_amount: 1, quality_score: 40 }];
        assert_eq!(
            reward_share(100, &dust, &dust[0]),
            Err(ScoreError::ZeroAggregateContribution)
        );
    }

    #[test]
    fn test_reward_share_full_pool_goes_to_sole_staker() {
        let sole = RewardEntry { stake_amount: 1000, quality_score: 50 };
        assert_eq!(reward_share(550, &[sole], &sole).unwrap(), 550);
    }
}
