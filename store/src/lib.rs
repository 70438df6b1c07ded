//! Abstract storage traits for the Vouch protocol.
//!
//! Every storage backend (durable key-value stores, in-memory for testing)
//! implements these traits. The rest of the workspace depends only on the
//! traits.

pub mod error;
pub mod ledger;

pub use error::StoreError;
pub use ledger::LedgerStore;
