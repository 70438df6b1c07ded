//! Fundamental types for the Vouch protocol.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: wallet addresses, pool identifiers, fixed-point denominators,
//! and protocol parameters.
//!
//! All monetary values are raw `u128` integers in the smallest unit of CRED.
//! 1 CRED = 10^18 raw.

pub mod address;
pub mod params;

pub use address::WalletAddress;
pub use params::{
    PoolId, ProtocolParams, BPS_DENOMINATOR, CRED_UNIT, PERCENT_DENOMINATOR,
};
