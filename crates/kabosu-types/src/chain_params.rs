use crate::amount::COIN;
use crate::feerate::FeeRate;

/// Process-wide fee-policy parameters.
///
/// Owned by node/wallet configuration and passed explicitly into every
/// policy function, so each can be tested in isolation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolicyParams {
    /// Minimum relay fee rate (koinu per kB)
    pub min_relay_tx_fee: FeeRate,
    /// Minimum wallet transaction fee rate (koinu per kB)
    pub min_wallet_tx_fee: FeeRate,
    /// Size of the free/high-priority area in mined blocks, bytes
    pub block_priority_size: u32,
}

impl Default for PolicyParams {
    fn default() -> Self {
        Self::mainnet()
    }
}

impl PolicyParams {
    /// Mainnet configuration
    pub fn mainnet() -> Self {
        Self {
            min_relay_tx_fee: FeeRate::per_kilobyte(COIN / 1000),
            min_wallet_tx_fee: FeeRate::per_kilobyte(COIN),
            block_priority_size: 27_000,
        }
    }

    /// Testnet configuration
    pub fn testnet() -> Self {
        Self::mainnet()
    }

    /// Local development configuration: everything relays for free
    pub fn regtest() -> Self {
        Self {
            min_relay_tx_fee: FeeRate::ZERO,
            min_wallet_tx_fee: FeeRate::ZERO,
            block_priority_size: 27_000,
        }
    }

    /// Upper size bound for the small-transaction free-relay
    /// carve-out. Saturates so an undersized priority area disables
    /// the carve-out rather than wrapping.
    pub fn free_relay_limit(&self) -> u32 {
        self.block_priority_size.saturating_sub(1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_defaults() {
        let params = PolicyParams::mainnet();
        assert_eq!(params.min_relay_tx_fee.fee_per_kilobyte(), COIN / 1000);
        assert_eq!(params.min_wallet_tx_fee.fee_per_kilobyte(), COIN);
        assert_eq!(params.free_relay_limit(), 26_000);
        assert_eq!(PolicyParams::default(), params);
    }

    #[test]
    fn test_free_relay_limit_saturates() {
        let mut params = PolicyParams::mainnet();
        params.block_priority_size = 500;
        assert_eq!(params.free_relay_limit(), 0);
    }
}
