use crate::amount::Amount;
use crate::feerate::FeeRate;
use crate::hash::Txid;

/// A transaction output: a value and the script that locks it.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TxOut {
    /// Value in koinu
    pub value: Amount,
    /// Locking script (spending-condition descriptor)
    pub script_pubkey: Vec<u8>,
}

impl TxOut {
    pub fn new(value: Amount, script_pubkey: Vec<u8>) -> Self {
        Self {
            value,
            script_pubkey,
        }
    }

    /// Serialized size in bytes: 8-byte value, compact-size script
    /// length, then the script itself.
    pub fn serialized_size(&self) -> usize {
        8 + compact_size_len(self.script_pubkey.len()) + self.script_pubkey.len()
    }

    /// Dust classification: an output is dust when spending it back
    /// would cost more than a third of its own value at `rate`. The
    /// spend cost is estimated over this output plus the 148 bytes of
    /// input that will later redeem it.
    pub fn is_dust(&self, rate: &FeeRate) -> bool {
        let spend_size = self.serialized_size() + 148;
        let spend_cost = rate.fee(spend_size as u32);
        (self.value as i128) < 3 * spend_cost as i128
    }
}

fn compact_size_len(n: usize) -> usize {
    match n {
        0..=0xfc => 1,
        0xfd..=0xffff => 3,
        0x1_0000..=0xffff_ffff => 5,
        _ => 9,
    }
}

/// Read-only transaction view for fee evaluation: an identifying hash
/// over an ordered sequence of outputs. Inputs, witnesses, and
/// consensus serialization are out of scope for the policy layer.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transaction {
    outputs: Vec<TxOut>,
}

impl Transaction {
    pub fn new(outputs: Vec<TxOut>) -> Self {
        Self { outputs }
    }

    pub fn outputs(&self) -> &[TxOut] {
        &self.outputs
    }

    /// Identifying hash, derived from a canonical byte string over the
    /// output sequence.
    pub fn txid(&self) -> Txid {
        let mut data = Vec::new();
        data.extend_from_slice(&(self.outputs.len() as u64).to_le_bytes());
        for out in &self.outputs {
            data.extend_from_slice(&out.value.to_le_bytes());
            data.extend_from_slice(&(out.script_pubkey.len() as u64).to_le_bytes());
            data.extend_from_slice(&out.script_pubkey);
        }
        Txid::compute(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::COIN;

    fn p2pkh_script() -> Vec<u8> {
        // OP_DUP OP_HASH160 <20 bytes> OP_EQUALVERIFY OP_CHECKSIG
        vec![0u8; 25]
    }

    #[test]
    fn test_serialized_size() {
        let out = TxOut::new(COIN, p2pkh_script());
        assert_eq!(out.serialized_size(), 8 + 1 + 25);

        let big = TxOut::new(COIN, vec![0u8; 300]);
        assert_eq!(big.serialized_size(), 8 + 3 + 300);
    }

    #[test]
    fn test_is_dust_thresholds() {
        // 1 COIN/kB reference rate, 25-byte script: spend size 182,
        // spend cost ceil(COIN * 182 / 1000) = 18_200_000.
        let rate = FeeRate::per_kilobyte(COIN);
        let threshold = 3 * 18_200_000;

        let dusty = TxOut::new(threshold - 1, p2pkh_script());
        assert!(dusty.is_dust(&rate));

        let exact = TxOut::new(threshold, p2pkh_script());
        assert!(!exact.is_dust(&rate));

        let healthy = TxOut::new(COIN, p2pkh_script());
        assert!(!healthy.is_dust(&rate));
    }

    #[test]
    fn test_zero_rate_nothing_is_dust() {
        let out = TxOut::new(0, p2pkh_script());
        assert!(!out.is_dust(&FeeRate::ZERO));
    }

    #[test]
    fn test_txid_depends_on_outputs() {
        let a = Transaction::new(vec![TxOut::new(COIN, p2pkh_script())]);
        let b = Transaction::new(vec![TxOut::new(COIN, p2pkh_script())]);
        assert_eq!(a.txid(), b.txid());

        let c = Transaction::new(vec![TxOut::new(2 * COIN, p2pkh_script())]);
        assert_ne!(a.txid(), c.txid());

        let empty = Transaction::new(Vec::new());
        assert_ne!(a.txid(), empty.txid());
    }
}
