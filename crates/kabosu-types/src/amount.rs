//! Monetary amounts, denominated in koinu.

/// Amount in koinu, the smallest monetary unit. Signed so that fee
/// arithmetic can represent intermediate differences, but every value
/// handed to callers must satisfy [`money_range`].
pub type Amount = i64;

/// Koinu per coin.
pub const COIN: Amount = 100_000_000;

/// Upper bound on any amount the policy layer will produce or accept.
pub const MAX_MONEY: Amount = 10_000_000_000 * COIN;

/// Check that an amount lies in the valid range `[0, MAX_MONEY]`.
pub fn money_range(amount: Amount) -> bool {
    (0..=MAX_MONEY).contains(&amount)
}
