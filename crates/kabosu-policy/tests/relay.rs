//! End-to-end relay fee scenarios across the mempool and policy
//! crates.

use kabosu_mempool::Mempool;
use kabosu_policy::{min_relay_fee, priority_label, select_fee_rate, wallet_fee, PriorityTier};
use kabosu_types::{money_range, FeeRate, PolicyParams, Transaction, TxOut, COIN};

fn standard_output(value: i64) -> TxOut {
    TxOut::new(value, vec![0u8; 25])
}

#[test]
fn test_relay_decision_lifecycle() {
    let mempool = Mempool::new();
    let params = PolicyParams::mainnet();

    // A large transaction with one dust output pays size fee plus the
    // dust surcharge.
    let tx = Transaction::new(vec![standard_output(1), standard_output(5 * COIN)]);
    let charged = min_relay_fee(&tx, 30_000, true, &mempool, &params);
    let expected =
        params.min_relay_tx_fee.fee(30_000) + params.min_relay_tx_fee.fee_per_kilobyte();
    assert_eq!(charged, expected);
    assert!(money_range(charged));

    // An operator prioritises it; the requirement disappears.
    mempool.prioritise(tx.txid(), 0.0, 1000);
    assert_eq!(min_relay_fee(&tx, 30_000, true, &mempool, &params), 0);

    // Clearing the prioritisation restores the normal fee.
    mempool.clear_prioritisation(&tx.txid());
    assert_eq!(min_relay_fee(&tx, 30_000, true, &mempool, &params), charged);
}

#[test]
fn test_free_relay_is_a_relay_policy_not_a_wallet_policy() {
    let mempool = Mempool::new();
    let params = PolicyParams::mainnet();
    let tx = Transaction::new(vec![standard_output(5 * COIN)]);

    // Small enough for the priority area: relays free
    assert_eq!(min_relay_fee(&tx, 200, true, &mempool, &params), 0);
    // The wallet still charges its own rate for the same size
    assert_eq!(wallet_fee(200, &params), params.min_wallet_tx_fee.fee(200));
}

#[test]
fn test_wallet_send_across_all_tiers() {
    let base = PolicyParams::mainnet().min_wallet_tx_fee;
    let mut previous = FeeRate::ZERO;

    for tier in PriorityTier::ALL {
        let rate = select_fee_rate(Some(tier), base);
        let label = priority_label(Some(tier));
        assert!(!label.is_empty());
        // Rates rise with the tier, except the fixed top tier which
        // sits where configuration puts it
        if tier != PriorityTier::SuchExpensive {
            assert!(rate > previous, "{label} should cost more than the tier below");
            previous = rate;
        }
    }

    assert_eq!(
        select_fee_rate(Some(PriorityTier::SuchExpensive), base),
        FeeRate::per_kilobyte(COIN / 100 * 521)
    );
}

#[test]
fn test_regtest_relays_everything_free() {
    let mempool = Mempool::new();
    let params = PolicyParams::regtest();
    let tx = Transaction::new(vec![standard_output(5 * COIN)]);

    assert_eq!(min_relay_fee(&tx, 100_000, false, &mempool, &params), 0);
}
