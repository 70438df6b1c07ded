//! Nullable store — thread-safe in-memory ledger storage for testing.

use std::collections::HashMap;
use std::sync::Mutex;

use vouch_store::{LedgerStore, StoreError};
use vouch_types::{PoolId, WalletAddress};

/// An in-memory ledger store for testing.
pub struct NullLedgerStore {
    pools: Mutex<HashMap<PoolId, Vec<u8>>>,
    profiles: Mutex<HashMap<String, Vec<u8>>>,
    meta: Mutex<HashMap<Vec<u8>, Vec<u8>>>,
}

impl NullLedgerStore {
    pub fn new() -> Self {
        Self {
            pools: Mutex::new(HashMap::new()),
            profiles: Mutex::new(HashMap::new()),
            meta: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for NullLedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for NullLedgerStore {
    fn get_pool(&self, id: PoolId) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.pools.lock().unwrap().get(&id).cloned())
    }

    fn put_pool(&self, id: PoolId, pool: &[u8]) -> Result<(), StoreError> {
        self.pools.lock().unwrap().insert(id, pool.to_vec());
        Ok(())
    }

    fn iter_pools(&self) -> Result<Vec<(PoolId, Vec<u8>)>, StoreError> {
        let mut pools: Vec<_> = self
            .pools
            .lock()
            .unwrap()
            .iter()
            .map(|(id, bytes)| (*id, bytes.clone()))
            .collect();
        pools.sort_by_key(|(id, _)| *id);
        Ok(pools)
    }

    fn get_staker_profile(&self, address: &WalletAddress) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.profiles.lock().unwrap().get(address.as_str()).cloned())
    }

    fn put_staker_profile(
        &self,
        address: &WalletAddress,
        profile: &[u8],
    ) -> Result<(), StoreError> {
        self.profiles
            .lock()
            .unwrap()
            .insert(address.to_string(), profile.to_vec());
        Ok(())
    }

    fn iter_staker_profiles(&self) -> Result<Vec<(WalletAddress, Vec<u8>)>, StoreError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .map(|(addr, bytes)| (WalletAddress::new(addr.clone()), bytes.clone()))
            .collect())
    }

    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.meta.lock().unwrap().get(key).cloned())
    }

    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.meta.lock().unwrap().insert(key.to_vec(), value.to_vec());
        Ok(())
    }
}
