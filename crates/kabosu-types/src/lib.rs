//! Kabosu Types - Core value types for the Kabosu fee-policy layer.
//!
//! This crate provides the fundamental types the relay and wallet fee
//! policy operates over:
//! - Amounts in koinu, with the valid monetary range
//! - Fee rates (koinu per kilobyte) and their derivation rule
//! - Transaction identifiers (32-byte, blake3 digests)
//! - Read-only transaction views and output dust classification
//! - Policy parameters (relay/wallet base rates, priority area size)

pub mod amount;
pub mod chain_params;
pub mod error;
pub mod feerate;
pub mod hash;
pub mod transaction;

pub use amount::{money_range, Amount, COIN, MAX_MONEY};
pub use chain_params::PolicyParams;
pub use error::TypesError;
pub use feerate::FeeRate;
pub use hash::Txid;
pub use transaction::{Transaction, TxOut};
