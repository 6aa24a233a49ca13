//! Prioritisation table for the shared transaction pool.
//!
//! Operators can boost a transaction's priority or discount its fee;
//! the relay policy reads both deltas together before computing any
//! fee. The table is keyed by txid and mutated only through this
//! module.

use std::collections::HashMap;

use parking_lot::Mutex;
use tracing::debug;

use kabosu_types::{Amount, Txid};

/// Per-transaction override record. Always read and written as a
/// pair, never one field at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FeeDelta {
    /// Priority boost applied on top of the computed priority
    pub priority: f64,
    /// Fee discount in koinu
    pub fee: Amount,
}

/// Shared transaction pool state visible to the fee policy.
#[derive(Debug, Default)]
pub struct Mempool {
    deltas: Mutex<HashMap<Txid, FeeDelta>>,
}

impl Mempool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a prioritisation for `txid`. Repeated calls accumulate
    /// onto the existing record.
    pub fn prioritise(&self, txid: Txid, priority_delta: f64, fee_delta: Amount) {
        let mut deltas = self.deltas.lock();
        let entry = deltas.entry(txid).or_default();
        entry.priority += priority_delta;
        entry.fee = entry.fee.saturating_add(fee_delta);
        debug!(
            %txid,
            priority = entry.priority,
            fee = entry.fee,
            "prioritised transaction"
        );
    }

    /// Read the accumulated deltas for `txid`.
    ///
    /// The lock is taken for the lookup only and released before this
    /// returns, so callers can never hold the pool across fee
    /// arithmetic. A transaction with no record reads as zero deltas.
    pub fn apply_deltas(&self, txid: &Txid) -> FeeDelta {
        let deltas = self.deltas.lock();
        deltas.get(txid).copied().unwrap_or_default()
    }

    /// Drop any prioritisation recorded for `txid`.
    pub fn clear_prioritisation(&self, txid: &Txid) {
        let mut deltas = self.deltas.lock();
        if deltas.remove(txid).is_some() {
            debug!(%txid, "cleared prioritisation");
        }
    }

    /// Number of transactions with an override on record.
    pub fn prioritised_count(&self) -> usize {
        self.deltas.lock().len()
    }
}
