//! Fee calculations.
//!
//! Three pieces: a tier-to-rate selector for wallet sends, a dust
//! surcharge over a transaction's outputs, and the minimum relay fee
//! evaluator that combines size fee, dust surcharge, prioritisation
//! overrides, and the free-relay carve-out.

use tracing::trace;

use kabosu_mempool::Mempool;
use kabosu_types::{money_range, Amount, FeeRate, PolicyParams, Transaction, TxOut, COIN, MAX_MONEY};

use crate::tiers::PriorityTier;

/// Fee rate requested for a priority tier, scaled off the wallet's
/// base rate. An unrecognized tier (`None`) falls back to the base
/// rate unchanged.
pub fn select_fee_rate(tier: Option<PriorityTier>, base: FeeRate) -> FeeRate {
    match tier {
        // 5.21 coins per kB; the division runs first, in integers,
        // so the constant is exact regardless of the base rate.
        Some(PriorityTier::SuchExpensive) => FeeRate::per_kilobyte(COIN / 100 * 521),
        Some(PriorityTier::ManyGenerous) => base.scaled(100),
        Some(PriorityTier::Amaze) => base.scaled(10),
        Some(PriorityTier::Wow) => base.scaled(5),
        Some(PriorityTier::More) => base.scaled(2),
        Some(PriorityTier::Minimum) | None => base,
    }
}

/// Translator-friendly label for a priority tier; unrecognized tiers
/// label as "Default".
pub fn priority_label(tier: Option<PriorityTier>) -> &'static str {
    match tier {
        Some(PriorityTier::SuchExpensive) => "Such expensive",
        Some(PriorityTier::ManyGenerous) => "Many generous",
        Some(PriorityTier::Amaze) => "Amaze",
        Some(PriorityTier::Wow) => "Wow",
        Some(PriorityTier::More) => "More",
        Some(PriorityTier::Minimum) => "Minimum",
        None => "Default",
    }
}

/// Flat surcharge for dust outputs: each output classified as dust at
/// `reference` adds `surcharge`'s whole per-kilobyte figure to the
/// total. Zero for an empty output sequence.
pub fn dust_surcharge(outputs: &[TxOut], reference: &FeeRate, surcharge: &FeeRate) -> Amount {
    let mut fee: Amount = 0;

    for out in outputs {
        if out.is_dust(reference) {
            fee = fee.saturating_add(surcharge.fee_per_kilobyte());
        }
    }

    fee
}

/// Minimum fee required to relay `tx`.
///
/// A recorded priority or fee override waives the requirement
/// entirely. Otherwise the fee is the relay rate over `size_bytes`
/// plus the dust surcharge, zeroed for small transactions when
/// `allow_free` is set, and clamped into `[0, MAX_MONEY]`.
pub fn min_relay_fee(
    tx: &Transaction,
    size_bytes: u32,
    allow_free: bool,
    mempool: &Mempool,
    params: &PolicyParams,
) -> Amount {
    let txid = tx.txid();
    let deltas = mempool.apply_deltas(&txid);
    if deltas.priority > 0.0 || deltas.fee > 0 {
        trace!(%txid, "fee requirement waived by prioritisation");
        return 0;
    }

    let mut fee = params.min_relay_tx_fee.fee(size_bytes);
    fee = fee.saturating_add(dust_surcharge(
        tx.outputs(),
        &params.min_relay_tx_fee,
        &params.min_relay_tx_fee,
    ));

    if allow_free && size_bytes < params.free_relay_limit() {
        // Blocks reserve an area for high-priority transactions. One
        // reasonably small transaction fits there whole, so relaying
        // it free beats encouraging senders to split it into many.
        fee = 0;
    }

    if !money_range(fee) {
        fee = MAX_MONEY;
    }

    trace!(%txid, size_bytes, fee, "minimum relay fee");
    fee
}

/// Wallet fee for a transaction of `size_bytes` at the configured
/// wallet rate.
pub fn wallet_fee(size_bytes: u32, params: &PolicyParams) -> Amount {
    wallet_fee_rate(params).fee(size_bytes)
}

/// The wallet's configured minimum fee rate.
pub fn wallet_fee_rate(params: &PolicyParams) -> FeeRate {
    params.min_wallet_tx_fee
}
