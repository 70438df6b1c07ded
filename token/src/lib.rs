//! Abstract CRED token capability.
//!
//! The staking ledger never moves funds itself — it settles against an
//! external fungible-asset collaborator through the [`CredToken`] trait.
//! Mint, approval, and transfer internals belong to the implementation;
//! the ledger depends on nothing beyond the three methods here.

pub mod error;

pub use error::TokenError;

use vouch_types::WalletAddress;

/// Minimal fungible-asset capability.
///
/// Implementations hold their own custody mapping; the ledger identifies
/// itself by the custody address it was constructed with. Every method is
/// atomic: it either applies in full or fails leaving balances untouched.
pub trait CredToken {
    /// Pull `amount` raw CRED from `owner` into ledger custody.
    ///
    /// # Errors
    /// [`TokenError::InsufficientFunds`] if `owner` cannot cover `amount`;
    /// [`TokenError::InsufficientAllowance`] if `owner` has not approved
    /// custody for at least `amount`.
    fn transfer_from(&self, owner: &WalletAddress, amount: u128) -> Result<(), TokenError>;

    /// Pay `amount` raw CRED out of ledger custody to `recipient`.
    fn transfer(&self, recipient: &WalletAddress, amount: u128) -> Result<(), TokenError>;

    /// Current balance of `account` in raw CRED.
    fn balance_of(&self, account: &WalletAddress) -> u128;
}
