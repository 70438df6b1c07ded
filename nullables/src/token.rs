//! Nullable CRED token — thread-safe in-memory balances for testing.

use std::collections::HashMap;
use std::sync::Mutex;

use vouch_token::{CredToken, TokenError};
use vouch_types::WalletAddress;

/// An in-memory CRED token for testing.
///
/// Models the external asset contract the ledger settles against: per-account
/// balances, plus per-owner allowances toward the ledger's custody account.
/// `transfer_from` pulls into custody, `transfer` pays out of it.
/// Thread-safe behind `Mutex` so trait methods can take `&self`.
pub struct NullCredToken {
    custody: WalletAddress,
    balances: Mutex<HashMap<String, u128>>,
    allowances: Mutex<HashMap<String, u128>>,
}

impl NullCredToken {
    pub fn new(custody: WalletAddress) -> Self {
        Self {
            custody,
            balances: Mutex::new(HashMap::new()),
            allowances: Mutex::new(HashMap::new()),
        }
    }

    /// Credit `amount` raw CRED to an account out of thin air.
    pub fn mint(&self, account: &WalletAddress, amount: u128) {
        let mut balances = self.balances.lock().unwrap();
        let balance = balances.entry(account.to_string()).or_default();
        *balance = balance.saturating_add(amount);
    }

    /// Approve the custody account to pull up to `amount` from `owner`.
    /// Replaces any previous approval.
    pub fn approve(&self, owner: &WalletAddress, amount: u128) {
        self.allowances
            .lock()
            .unwrap()
            .insert(owner.to_string(), amount);
    }

    /// Remaining approval from `owner` toward custody.
    pub fn allowance(&self, owner: &WalletAddress) -> u128 {
        self.allowances
            .lock()
            .unwrap()
            .get(owner.as_str())
            .copied()
            .unwrap_or(0)
    }
}

impl CredToken for NullCredToken {
    fn transfer_from(&self, owner: &WalletAddress, amount: u128) -> Result<(), TokenError> {
        let mut allowances = self.allowances.lock().unwrap();
        let approved = allowances.get(owner.as_str()).copied().unwrap_or(0);
        if approved < amount {
            return Err(TokenError::InsufficientAllowance {
                needed: amount,
                approved,
            });
        }

        let mut balances = self.balances.lock().unwrap();
        let available = balances.get(owner.as_str()).copied().unwrap_or(0);
        if available < amount {
            return Err(TokenError::InsufficientFunds {
                needed: amount,
                available,
            });
        }

        balances.insert(owner.to_string(), available - amount);
        let custody = balances.entry(self.custody.to_string()).or_default();
        *custody = custody.saturating_add(amount);
        allowances.insert(owner.to_string(), approved - amount);
        Ok(())
    }

    fn transfer(&self, recipient: &WalletAddress, amount: u128) -> Result<(), TokenError> {
        let mut balances = self.balances.lock().unwrap();
        let available = balances.get(self.custody.as_str()).copied().unwrap_or(0);
        if available < amount {
            return Err(TokenError::InsufficientFunds {
                needed: amount,
                available,
            });
        }

        balances.insert(self.custody.to_string(), available - amount);
        let credit = balances.entry(recipient.to_string()).or_default();
        *credit = credit.saturating_add(amount);
        Ok(())
    }

    fn balance_of(&self, account: &WalletAddress) -> u128 {
        self.balances
            .lock()
            .unwrap()
            .get(account.as_str())
            .copied()
            .unwrap_or(0)
    }
}
