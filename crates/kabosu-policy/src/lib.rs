//! Kabosu Policy - relay and wallet fee policy.
//!
//! Decides what a candidate transaction must pay before this node will
//! relay it, and which fee rate a locally originated transaction
//! requests for a given priority tier. Consensus validation, block
//! templates, and fee estimation live elsewhere; this crate is pure
//! policy over read-only snapshots.

pub mod fees;
pub mod tiers;

pub use fees::{
    dust_surcharge, min_relay_fee, priority_label, select_fee_rate, wallet_fee, wallet_fee_rate,
};
pub use tiers::PriorityTier;
