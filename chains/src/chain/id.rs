//! Closed set of chain identifiers and their canonical text form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A supported network/environment pair.
///
/// The set is closed: every variant has exactly one record in the registry
/// (see [`chain_info`](super::chain_info)). Text that names no variant is
/// rejected when parsed, so an unknown chain never reaches the lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChainId {
    /// Ethereum mainnet (eip155:1)
    EthereumMainnet,
    /// Ethereum Sepolia testnet (eip155:11155111)
    EthereumSepolia,
    /// Polygon `PoS` mainnet (eip155:137)
    PolygonMainnet,
    /// Polygon Amoy testnet (eip155:80002)
    PolygonAmoy,
    /// Arbitrum One mainnet (eip155:42161)
    ArbitrumMainnet,
    /// Arbitrum Sepolia testnet (eip155:421614)
    ArbitrumSepolia,
    /// OP Mainnet (eip155:10)
    OptimismMainnet,
    /// OP Sepolia testnet (eip155:11155420)
    OptimismSepolia,
    /// Base mainnet (eip155:8453)
    BaseMainnet,
    /// Base Sepolia testnet (eip155:84532)
    BaseSepolia,
    /// Avalanche C-Chain mainnet (eip155:43114)
    AvalancheMainnet,
    /// Avalanche Fuji testnet (eip155:43113)
    AvalancheFuji,
    /// BNB Smart Chain mainnet (eip155:56)
    BscMainnet,
    /// BNB Smart Chain testnet (eip155:97)
    BscTestnet,
    /// Linea mainnet (eip155:59144)
    LineaMainnet,
    /// Linea Sepolia testnet (eip155:59141)
    LineaSepolia,
    /// Scroll mainnet (eip155:534352)
    ScrollMainnet,
    /// Scroll Sepolia testnet (eip155:534351)
    ScrollSepolia,
    /// `ZKsync` Era mainnet (eip155:324)
    ZksyncMainnet,
    /// `ZKsync` Era Sepolia testnet (eip155:300)
    ZksyncSepolia,
    /// Gnosis Chain mainnet (eip155:100)
    GnosisMainnet,
    /// Celo mainnet (eip155:42220)
    CeloMainnet,
    /// Blast mainnet (eip155:81457)
    BlastMainnet,
    /// Mantle mainnet (eip155:5000)
    MantleMainnet,
    /// Solana mainnet-beta
    SolanaMainnet,
    /// Solana devnet
    SolanaDevnet,
    /// Solana testnet
    SolanaTestnet,
}

impl ChainId {
    /// Every identifier, in registry order.
    pub const ALL: [Self; 27] = [
        Self::EthereumMainnet,
        Self::EthereumSepolia,
        Self::PolygonMainnet,
        Self::PolygonAmoy,
        Self::ArbitrumMainnet,
        Self::ArbitrumSepolia,
        Self::OptimismMainnet,
        Self::OptimismSepolia,
        Self::BaseMainnet,
        Self::BaseSepolia,
        Self::AvalancheMainnet,
        Self::AvalancheFuji,
        Self::BscMainnet,
        Self::BscTestnet,
        Self::LineaMainnet,
        Self::LineaSepolia,
        Self::ScrollMainnet,
        Self::ScrollSepolia,
        Self::ZksyncMainnet,
        Self::ZksyncSepolia,
        Self::GnosisMainnet,
        Self::CeloMainnet,
        Self::BlastMainnet,
        Self::MantleMainnet,
        Self::SolanaMainnet,
        Self::SolanaDevnet,
        Self::SolanaTestnet,
    ];

    /// Canonical kebab-case name, identical to the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EthereumMainnet => "ethereum-mainnet",
            Self::EthereumSepolia => "ethereum-sepolia",
            Self::PolygonMainnet => "polygon-mainnet",
            Self::PolygonAmoy => "polygon-amoy",
            Self::ArbitrumMainnet => "arbitrum-mainnet",
            Self::ArbitrumSepolia => "arbitrum-sepolia",
            Self::OptimismMainnet => "optimism-mainnet",
            Self::OptimismSepolia => "optimism-sepolia",
            Self::BaseMainnet => "base-mainnet",
            Self::BaseSepolia => "base-sepolia",
            Self::AvalancheMainnet => "avalanche-mainnet",
            Self::AvalancheFuji => "avalanche-fuji",
            Self::BscMainnet => "bsc-mainnet",
            Self::BscTestnet => "bsc-testnet",
            Self::LineaMainnet => "linea-mainnet",
            Self::LineaSepolia => "linea-sepolia",
            Self::ScrollMainnet => "scroll-mainnet",
            Self::ScrollSepolia => "scroll-sepolia",
            Self::ZksyncMainnet => "zksync-mainnet",
            Self::ZksyncSepolia => "zksync-sepolia",
            Self::GnosisMainnet => "gnosis-mainnet",
            Self::CeloMainnet => "celo-mainnet",
            Self::BlastMainnet => "blast-mainnet",
            Self::MantleMainnet => "mantle-mainnet",
            Self::SolanaMainnet => "solana-mainnet",
            Self::SolanaDevnet => "solana-devnet",
            Self::SolanaTestnet => "solana-testnet",
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainId {
    type Err = Error;

    /// Parses the canonical name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownChain(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names() {
        for id in ChainId::ALL {
            assert_eq!(id.as_str().parse::<ChainId>().unwrap(), id);
        }
    }

    #[test]
    fn parsing_ignores_case_and_whitespace() {
        assert_eq!(
            " Ethereum-Mainnet ".parse::<ChainId>().unwrap(),
            ChainId::EthereumMainnet
        );
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "ethereum-goerli".parse::<ChainId>().unwrap_err();
        assert!(matches!(err, Error::UnknownChain(ref name) if name == "ethereum-goerli"));
    }

    #[test]
    fn serde_matches_display() {
        let json = serde_json::to_string(&ChainId::SolanaDevnet).unwrap();
        assert_eq!(json, "\"solana-devnet\"");
        let back: ChainId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ChainId::SolanaDevnet);
    }

    #[test]
    fn all_is_duplicate_free() {
        let mut ids = ChainId::ALL.to_vec();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), ChainId::ALL.len());
    }
}
