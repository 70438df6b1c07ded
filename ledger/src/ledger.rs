//! The staking ledger — pool arena, allocation history, reward settlement.

use std::collections::HashMap;

use crate::error::LedgerError;
use crate::pool::Pool;
use crate::staker::{PoolAllocation, StakerData, StakerProfile};
use vouch_score::{EndorsementActivity, RewardEntry, StakeSpread};
use vouch_store::LedgerStore;
use vouch_token::CredToken;
use vouch_types::{PoolId, ProtocolParams, WalletAddress};

/// Meta keys used for store persistence.
const META_AUTHORITY: &[u8] = b"authority";
const META_CUSTODY: &[u8] = b"custody";
const META_PARAMS: &[u8] = b"params";

/// The staking ledger.
///
/// Owns all mutable state: pools live in an arena-style growable table
/// indexed by [`PoolId`], staker allocation histories in a map keyed by
/// address. Scores are always computed from live state through the pure
/// equations in `vouch-score`; funds only move through the [`CredToken`]
/// collaborator passed into the settling operations.
pub struct StakingLedger {
    /// The only account allowed to create pools.
    authority: WalletAddress,
    /// The ledger's own account at the token collaborator. Deposits
    /// accumulate here; claims pay out of it.
    custody: WalletAddress,
    params: ProtocolParams,
    /// Pool arena — a pool's id is its index. Pools are never removed.
    pools: Vec<Pool>,
    stakers: HashMap<WalletAddress, StakerProfile>,
}

impl StakingLedger {
    pub fn new(authority: WalletAddress, custody: WalletAddress, params: ProtocolParams) -> Self {
        Self {
            authority,
            custody,
            params,
            pools: Vec::new(),
            stakers: HashMap::new(),
        }
    }

    pub fn authority(&self) -> &WalletAddress {
        &self.authority
    }

    pub fn custody(&self) -> &WalletAddress {
        &self.custody
    }

    pub fn params(&self) -> &ProtocolParams {
        &self.params
    }

    pub fn total_pools(&self) -> u64 {
        self.pools.len() as u64
    }

    fn pool(&self, pool_id: PoolId) -> Result<&Pool, LedgerError> {
        self.pools
            .get(pool_id as usize)
            .ok_or(LedgerError::PoolNotFound(pool_id))
    }

    /// Create a new pool endorsing `subject`.
    ///
    /// Weighting parameters are fixed for the pool's lifetime. The caller is
    /// responsible for weightages that sum to 10_000 basis points.
    ///
    /// # Errors
    /// [`LedgerError::Unauthorized`] unless `caller` is the ledger authority.
    pub fn create_pool(
        &mut self,
        caller: &WalletAddress,
        weightage_activity: u64,
        weightage_quality: u64,
        multiplier: u64,
        subject: WalletAddress,
    ) -> Result<PoolId, LedgerError> {
        if *caller != self.authority {
            return Err(LedgerError::Unauthorized {
                caller: caller.clone(),
            });
        }

        let id = self.pools.len() as PoolId;
        self.pools.push(Pool::new(
            id,
            weightage_activity,
            weightage_quality,
            multiplier,
            subject.clone(),
        ));
        tracing::info!(pool = id, subject = %subject, multiplier, "pool created");
        Ok(id)
    }

    /// Stake `amount` raw CRED on a pool, pulling the deposit from `staker`
    /// into ledger custody.
    ///
    /// The post-deposit allocation and pool total are pre-computed with
    /// checked arithmetic before the external transfer, so the commit after
    /// a successful pull cannot fail — the operation is all-or-nothing. On
    /// transfer failure no ledger state changes.
    pub fn stake_on_pool(
        &mut self,
        token: &dyn CredToken,
        staker: &WalletAddress,
        pool_id: PoolId,
        amount: u128,
    ) -> Result<(), LedgerError> {
        if amount == 0 {
            return Err(LedgerError::ZeroStake);
        }
        let pool_index = self.pool(pool_id)?.id as usize;

        let current = self
            .stakers
            .get(staker)
            .and_then(|p| p.allocation(pool_id))
            .map(|a| a.amount_staked)
            .unwrap_or(0);
        let new_allocation = current.checked_add(amount).ok_or(LedgerError::Overflow)?;
        let new_total = self.pools[pool_index]
            .total_staked
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        // The all-or-nothing boundary: nothing has been written yet.
        token.transfer_from(staker, amount)?;

        // Infallible commit.
        let pool = &mut self.pools[pool_index];
        if !pool.has_staker(staker) {
            pool.stakers.push(staker.clone());
        }
        pool.total_staked = new_total;

        let profile = self.stakers.entry(staker.clone()).or_default();
        match profile.allocation_mut(pool_id) {
            Some(alloc) => alloc.amount_staked = new_allocation,
            None => profile.allocations.push(PoolAllocation {
                pool: pool_id,
                amount_staked: amount,
            }),
        }

        tracing::debug!(
            pool = pool_id,
            staker = %staker,
            amount,
            pool_total = new_total,
            "stake applied"
        );
        Ok(())
    }

    /// Read-only snapshot of a staker's profile, with pool totals read live.
    /// An unknown staker yields the empty profile.
    pub fn get_staker_data(&self, staker: &WalletAddress) -> StakerData {
        let profile = match self.stakers.get(staker) {
            Some(profile) => profile,
            None => return StakerData::default(),
        };

        let mut own_stakes = Vec::with_capacity(profile.allocations.len());
        let mut pool_totals = Vec::with_capacity(profile.allocations.len());
        for alloc in &profile.allocations {
            own_stakes.push(alloc.amount_staked);
            // Allocations only ever reference existing pools, and pools are
            // never removed from the arena.
            pool_totals.push(self.pools[alloc.pool as usize].total_staked);
        }
        StakerData {
            own_stakes,
            pool_totals,
            endorsements_made: profile.endorsements_made(),
        }
    }

    /// Read-only snapshot of a pool.
    pub fn get_pool_data(&self, pool_id: PoolId) -> Result<&Pool, LedgerError> {
        self.pool(pool_id)
    }

    /// The staker's raw allocation history, if they have ever staked.
    pub fn get_staker_profile(&self, staker: &WalletAddress) -> Option<&StakerProfile> {
        self.stakers.get(staker)
    }

    /// The staker's activity score (whole percent) against the protocol's
    /// endorsement ceiling.
    pub fn get_number_of_endorsements(&self, staker: &WalletAddress) -> Result<u64, LedgerError> {
        let data = self.get_staker_data(staker);
        Ok(vouch_score::number_of_endorsements(
            self.params.max_endorsements,
            data.endorsements_made,
        )?)
    }

    /// The staker's average ownership share across every pool entered.
    pub fn get_quality_of_stakes(&self, staker: &WalletAddress) -> Result<u64, LedgerError> {
        let data = self.get_staker_data(staker);
        Ok(vouch_score::quality_of_stakes(
            &data.own_stakes,
            &data.pool_totals,
        )?)
    }

    /// The staker's blended quality under one pool's weighting scheme.
    /// There is no global blended score — quality is always relative to a
    /// pool's weightages.
    pub fn get_quality_of_staker(
        &self,
        pool_id: PoolId,
        staker: &WalletAddress,
    ) -> Result<u64, LedgerError> {
        let pool = self.pool(pool_id)?;
        let data = self.get_staker_data(staker);
        Ok(vouch_score::quality_of_staker(
            pool.weightage_activity,
            pool.weightage_quality,
            &EndorsementActivity {
                max_endorsements: self.params.max_endorsements,
                endorsements_made: data.endorsements_made,
            },
            &StakeSpread {
                own: data.own_stakes,
                totals: data.pool_totals,
            },
        )?)
    }

    /// One reward entry per staker currently in the pool: their allocation
    /// paired with a freshly computed blended quality under the pool's
    /// weightages.
    fn reward_entries(&self, pool: &Pool) -> Result<Vec<RewardEntry>, LedgerError> {
        pool.stakers
            .iter()
            .map(|staker| {
                let stake_amount = self
                    .stakers
                    .get(staker)
                    .and_then(|p| p.allocation(pool.id))
                    .map(|a| a.amount_staked)
                    .unwrap_or(0);
                let quality_score = self.get_quality_of_staker(pool.id, staker)?;
                Ok(RewardEntry {
                    stake_amount,
                    quality_score,
                })
            })
            .collect()
    }

    /// The pool's aggregate reward budget at current allocations.
    pub fn get_max_rewards(&self, pool_id: PoolId, precision: u128) -> Result<u128, LedgerError> {
        let pool = self.pool(pool_id)?;
        let entries = self.reward_entries(pool)?;
        Ok(vouch_score::max_rewards_for_pool(
            pool.multiplier,
            &entries,
            precision,
        )?)
    }

    /// The named staker's share of the pool's reward budget.
    pub fn get_reward_per_user(
        &self,
        pool_id: PoolId,
        precision: u128,
        staker: &WalletAddress,
    ) -> Result<u128, LedgerError> {
        let pool = self.pool(pool_id)?;
        let position = pool
            .stakers
            .iter()
            .position(|s| s == staker)
            .ok_or_else(|| LedgerError::StakerNotInPool {
                pool: pool_id,
                staker: staker.clone(),
            })?;

        let entries = self.reward_entries(pool)?;
        let max_rewards =
            vouch_score::max_rewards_for_pool(pool.multiplier, &entries, precision)?;
        Ok(vouch_score::reward_share(
            max_rewards,
            &entries,
            &entries[position],
        )?)
    }

    /// Settle a staker's reward claim: compute the share, pay it out of
    /// custody, and record the claim marker.
    ///
    /// Reward settlement is independent of stake-principal accounting —
    /// neither `total_staked` nor the staker's allocation changes. A repeat
    /// claim on the same pool is rejected.
    ///
    /// Returns the amount paid.
    pub fn claim_rewards_from_pool(
        &mut self,
        token: &dyn CredToken,
        pool_id: PoolId,
        staker: &WalletAddress,
    ) -> Result<u128, LedgerError> {
        if self.pool(pool_id)?.has_claimed(staker) {
            return Err(LedgerError::AlreadyClaimed {
                pool: pool_id,
                staker: staker.clone(),
            });
        }

        let reward = self.get_reward_per_user(pool_id, self.params.reward_precision, staker)?;
        let available = token.balance_of(&self.custody);
        if reward > available {
            return Err(LedgerError::InsufficientCustody {
                needed: reward,
                available,
            });
        }

        token.transfer(staker, reward)?;
        // Marker only after the payout has settled.
        self.pools[pool_id as usize].claimed.push(staker.clone());
        tracing::info!(pool = pool_id, staker = %staker, reward, "rewards claimed");
        Ok(reward)
    }
}

impl StakingLedger {
    /// Persist all ledger state to a store.
    pub fn save_to_store(&self, store: &dyn LedgerStore) -> Result<(), LedgerError> {
        let authority = bincode::serialize(&self.authority)
            .map_err(|e| LedgerError::Store(e.to_string()))?;
        store
            .put_meta(META_AUTHORITY, &authority)
            .map_err(|e| LedgerError::Store(e.to_string()))?;

        let custody =
            bincode::serialize(&self.custody).map_err(|e| LedgerError::Store(e.to_string()))?;
        store
            .put_meta(META_CUSTODY, &custody)
            .map_err(|e| LedgerError::Store(e.to_string()))?;

        let params =
            bincode::serialize(&self.params).map_err(|e| LedgerError::Store(e.to_string()))?;
        store
            .put_meta(META_PARAMS, &params)
            .map_err(|e| LedgerError::Store(e.to_string()))?;

        for pool in &self.pools {
            let bytes =
                bincode::serialize(pool).map_err(|e| LedgerError::Store(e.to_string()))?;
            store
                .put_pool(pool.id, &bytes)
                .map_err(|e| LedgerError::Store(e.to_string()))?;
        }

        for (address, profile) in &self.stakers {
            let bytes =
                bincode::serialize(profile).map_err(|e| LedgerError::Store(e.to_string()))?;
            store
                .put_staker_profile(address, &bytes)
                .map_err(|e| LedgerError::Store(e.to_string()))?;
        }
        Ok(())
    }

    /// Restore ledger state from a store.
    pub fn load_from_store(store: &dyn LedgerStore) -> Result<Self, LedgerError> {
        let authority = match store
            .get_meta(META_AUTHORITY)
            .map_err(|e| LedgerError::Store(e.to_string()))?
        {
            Some(bytes) => bincode::deserialize(&bytes)
                .map_err(|e| LedgerError::Store(e.to_string()))?,
            None => return Err(LedgerError::Store("missing authority meta entry".into())),
        };
        let custody = match store
            .get_meta(META_CUSTODY)
            .map_err(|e| LedgerError::Store(e.to_string()))?
        {
            Some(bytes) => bincode::deserialize(&bytes)
                .map_err(|e| LedgerError::Store(e.to_string()))?,
            None => return Err(LedgerError::Store("missing custody meta entry".into())),
        };
        let params = match store
            .get_meta(META_PARAMS)
            .map_err(|e| LedgerError::Store(e.to_string()))?
        {
            Some(bytes) => bincode::deserialize(&bytes)
                .map_err(|e| LedgerError::Store(e.to_string()))?,
            None => ProtocolParams::default(),
        };

        let mut entries = store
            .iter_pools()
            .map_err(|e| LedgerError::Store(e.to_string()))?;
        entries.sort_by_key(|(id, _)| *id);
        let mut pools = Vec::with_capacity(entries.len());
        for (_, bytes) in entries {
            let pool: Pool = bincode::deserialize(&bytes)
                .map_err(|e| LedgerError::Store(e.to_string()))?;
            pools.push(pool);
        }

        let mut stakers = HashMap::new();
        for (address, bytes) in store
            .iter_staker_profiles()
            .map_err(|e| LedgerError::Store(e.to_string()))?
        {
            let profile: StakerProfile = bincode::deserialize(&bytes)
                .map_err(|e| LedgerError::Store(e.to_string()))?;
            stakers.insert(address, profile);
        }

        Ok(Self {
            authority,
            custody,
            params,
            pools,
            stakers,
        })
    }
}
