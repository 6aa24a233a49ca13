//! Kabosu Mempool - per-transaction fee and priority overrides.
//!
//! Holds the operator-applied prioritisation table the relay fee
//! policy consults before charging a transaction.

pub mod pool;

pub use pool::{FeeDelta, Mempool};
