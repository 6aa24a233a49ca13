use crate::amount::{Amount, MAX_MONEY};
use std::fmt;

/// Fee rate in koinu per kilobyte (1000 bytes).
///
/// Immutable value type; the derivation rule in [`FeeRate::fee`]
/// rounds up so a nonzero rate never under-charges for a partial
/// kilobyte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeeRate(Amount);

impl FeeRate {
    pub const ZERO: Self = Self(0);

    /// Create a rate of `koinu_per_kb` koinu per 1000 bytes.
    pub const fn per_kilobyte(koinu_per_kb: Amount) -> Self {
        Self(koinu_per_kb)
    }

    /// The rate's per-kilobyte figure.
    pub const fn fee_per_kilobyte(&self) -> Amount {
        self.0
    }

    /// Fee for `size_bytes` bytes at this rate.
    ///
    /// Computed as `ceil(rate * size / 1000)` in widened integer
    /// arithmetic, capped at `MAX_MONEY` rather than wrapping on the
    /// narrowing cast. A size of zero always costs zero.
    pub fn fee(&self, size_bytes: u32) -> Amount {
        let scaled = self.0 as i128 * size_bytes as i128;
        let mut fee = scaled / 1000;
        if scaled % 1000 != 0 {
            fee += 1;
        }
        fee.min(MAX_MONEY as i128) as Amount
    }

    /// Scale the per-kilobyte figure by an integer multiplier,
    /// clamping to `MAX_MONEY` per kilobyte instead of overflowing.
    pub fn scaled(&self, multiplier: Amount) -> Self {
        match self.0.checked_mul(multiplier) {
            Some(per_kb) if per_kb <= MAX_MONEY => Self(per_kb),
            _ => Self(MAX_MONEY),
        }
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} koinu/kB", self.0)
    }
}
