use crate::StoreError;
use vouch_types::{PoolId, WalletAddress};

/// Store trait for persisting staking-ledger state to durable storage.
///
/// Uses opaque `Vec<u8>` values so the store doesn't depend on the
/// `vouch-ledger` crate (which would create a circular dependency). The
/// ledger serializes/deserializes its own types.
pub trait LedgerStore {
    fn get_pool(&self, id: PoolId) -> Result<Option<Vec<u8>>, StoreError>;
    fn put_pool(&self, id: PoolId, pool: &[u8]) -> Result<(), StoreError>;
    fn iter_pools(&self) -> Result<Vec<(PoolId, Vec<u8>)>, StoreError>;

    fn get_staker_profile(&self, address: &WalletAddress) -> Result<Option<Vec<u8>>, StoreError>;
    fn put_staker_profile(&self, address: &WalletAddress, profile: &[u8])
        -> Result<(), StoreError>;
    fn iter_staker_profiles(&self) -> Result<Vec<(WalletAddress, Vec<u8>)>, StoreError>;

    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;
    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;
}
