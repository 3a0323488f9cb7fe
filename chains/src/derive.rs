//! One-shot derivation of everything known about a chain for a set of credentials.

use serde::{Deserialize, Serialize};

use crate::chain::{ChainFamily, ChainId, chain_info};
use crate::provider::{ApiKeys, Provider, block_explorer_url, resolve_rpc};

/// Provider tried first by [`derive_chain_info`] when none is configured.
pub const DEFAULT_DERIVE_PROVIDER: Provider = Provider::Alchemy;

/// Input to [`derive_chain_info`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Chain to describe.
    pub chain: ChainId,
    /// Provider and explorer credentials.
    #[serde(default)]
    pub api_keys: ApiKeys,
    /// Provider tried before the priority cascade.
    #[serde(default)]
    pub preferred_provider: Option<Provider>,
}

impl ChainConfig {
    /// Config for `chain` with no credentials.
    #[must_use]
    pub fn new(chain: ChainId) -> Self {
        Self {
            chain,
            api_keys: ApiKeys::default(),
            preferred_provider: None,
        }
    }

    /// Replaces the credentials.
    #[must_use]
    pub fn with_api_keys(mut self, api_keys: ApiKeys) -> Self {
        self.api_keys = api_keys;
        self
    }

    /// Sets the preferred provider.
    #[must_use]
    pub fn with_preferred_provider(mut self, provider: Provider) -> Self {
        self.preferred_provider = Some(provider);
        self
    }
}

/// Everything derivable for one chain and one set of credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedChainInfo {
    /// Identifier the record was derived for.
    pub chain: ChainId,
    /// Numeric chain id.
    pub chain_id: i64,
    /// Chain family.
    pub family: ChainFamily,
    /// Human readable name.
    pub name: &'static str,
    /// Whether this is a test network.
    pub is_testnet: bool,
    /// Resolved RPC URL.
    pub rpc_url: Option<String>,
    /// Provider that produced [`rpc_url`](Self::rpc_url).
    pub rpc_provider: Option<Provider>,
    /// Explorer API URL.
    pub explorer_api_url: Option<String>,
    /// Block explorer browser URL.
    pub block_explorer_url: Option<String>,
    /// USDC token address.
    pub usdc_address: Option<&'static str>,
}

/// Derives a [`DerivedChainInfo`] from `config`.
///
/// The RPC URL comes from [`resolve_rpc`] with the configured preferred
/// provider, or [`DEFAULT_DERIVE_PROVIDER`] when none is set, falling back
/// to the priority cascade.
#[must_use]
pub fn derive_chain_info(config: &ChainConfig) -> DerivedChainInfo {
    let info = chain_info(config.chain);
    let preferred = config.preferred_provider.unwrap_or(DEFAULT_DERIVE_PROVIDER);
    let rpc = resolve_rpc(&config.api_keys, config.chain, Some(preferred));

    DerivedChainInfo {
        chain: config.chain,
        chain_id: info.numeric_id,
        family: info.family,
        name: info.display_name,
        is_testnet: info.is_testnet,
        rpc_provider: rpc.as_ref().map(|rpc| rpc.provider),
        rpc_url: rpc.map(|rpc| rpc.url),
        explorer_api_url: config.api_keys.explorer_api_url(config.chain),
        block_explorer_url: block_explorer_url(config.chain),
        usdc_address: info.usdc_address,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_ethereum_mainnet() {
        let keys = ApiKeys::default()
            .with(Provider::Alchemy, "test-api-key")
            .with(Provider::Ankr, "ankr-key")
            .with_explorer("test-api-key");
        let derived = derive_chain_info(&ChainConfig::new(ChainId::EthereumMainnet).with_api_keys(keys));

        assert_eq!(derived.chain_id, 1);
        assert_eq!(derived.family, ChainFamily::Evm);
        assert_eq!(derived.name, "Ethereum");
        assert!(!derived.is_testnet);
        assert_eq!(derived.rpc_provider, Some(Provider::Alchemy));
        assert_eq!(
            derived.rpc_url.as_deref(),
            Some("https://eth-mainnet.g.alchemy.com/v2/test-api-key")
        );
        assert_eq!(
            derived.explorer_api_url.as_deref(),
            Some("https://api.etherscan.io/api?apikey=test-api-key")
        );
        assert_eq!(derived.block_explorer_url.as_deref(), Some("https://etherscan.io"));
        assert_eq!(
            derived.usdc_address,
            Some("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48")
        );
    }

    #[test]
    fn falls_back_when_alchemy_is_missing() {
        let keys = ApiKeys::default().with(Provider::Ankr, "ankr-key");
        let derived = derive_chain_info(&ChainConfig::new(ChainId::PolygonMainnet).with_api_keys(keys));
        assert_eq!(derived.rpc_provider, Some(Provider::Ankr));
        assert_eq!(derived.rpc_url.as_deref(), Some("https://rpc.ankr.com/polygon/ankr-key"));
    }

    #[test]
    fn configured_preference_overrides_default() {
        let keys = ApiKeys::default()
            .with(Provider::Alchemy, "alchemy-key")
            .with(Provider::Metamask, "infura-key");
        let config = ChainConfig::new(ChainId::BaseSepolia)
            .with_api_keys(keys)
            .with_preferred_provider(Provider::Metamask);
        let derived = derive_chain_info(&config);
        assert_eq!(
            derived.rpc_url.as_deref(),
            Some("https://base-sepolia.infura.io/v3/infura-key")
        );
    }

    #[test]
    fn solana_without_credentials() {
        let derived = derive_chain_info(&ChainConfig::new(ChainId::SolanaMainnet));
        assert_eq!(derived.chain_id, -101);
        assert_eq!(derived.family, ChainFamily::Solana);
        assert_eq!(derived.rpc_url, None);
        assert_eq!(derived.rpc_provider, None);
        assert_eq!(derived.explorer_api_url, None);
        assert_eq!(derived.block_explorer_url.as_deref(), Some("https://solscan.io"));
        assert_eq!(
            derived.usdc_address,
            Some("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v")
        );
    }

    #[test]
    fn config_deserializes_from_toml() {
        let config: ChainConfig = toml::from_str(
            r#"
            chain = "base-mainnet"
            preferred_provider = "ankr"

            [api_keys]
            ankr = "ankr-key"
            "#,
        )
        .unwrap();
        assert_eq!(config.chain, ChainId::BaseMainnet);
        assert_eq!(config.preferred_provider, Some(Provider::Ankr));
        assert_eq!(config.api_keys.credential(Provider::Ankr), Some("ankr-key"));
    }
}
