//! Provider selection by preference and fixed priority.

use serde::Serialize;

use super::{ApiKeys, Provider};
use crate::chain::ChainId;

/// Order tried when no preferred provider yields a URL.
pub const PROVIDER_PRIORITY: [Provider; 4] = [
    Provider::QuickNode,
    Provider::Ankr,
    Provider::Metamask,
    Provider::Alchemy,
];

/// An RPC URL together with the provider that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRpc {
    /// Provider whose template was used.
    pub provider: Provider,
    /// Fully formed RPC URL.
    pub url: String,
}

/// Selects an RPC endpoint for `chain`.
///
/// `preferred` is tried first. If it is `None`, lacks a credential, or does
/// not serve `chain`, each provider in [`PROVIDER_PRIORITY`] is tried in
/// turn. The first URL produced wins.
#[must_use]
pub fn resolve_rpc(
    keys: &ApiKeys,
    chain: ChainId,
    preferred: Option<Provider>,
) -> Option<ResolvedRpc> {
    if let Some(provider) = preferred {
        if let Some(url) = keys.provider_url(provider, chain) {
            tracing::debug!(%chain, %provider, "using preferred provider");
            return Some(ResolvedRpc { provider, url });
        }
        tracing::debug!(%chain, %provider, "preferred provider unavailable, falling back");
    }

    let resolved = PROVIDER_PRIORITY.into_iter().find_map(|provider| {
        let url = keys.provider_url(provider, chain);
        if url.is_none() {
            tracing::trace!(%chain, %provider, "provider skipped");
        }
        url.map(|url| ResolvedRpc { provider, url })
    });

    match &resolved {
        Some(rpc) => tracing::debug!(%chain, provider = %rpc.provider, "resolved by priority"),
        None => tracing::debug!(%chain, "no provider can serve chain"),
    }
    resolved
}

/// RPC URL for `chain`, following [`resolve_rpc`].
#[must_use]
pub fn rpc_url(keys: &ApiKeys, chain: ChainId, preferred: Option<Provider>) -> Option<String> {
    resolve_rpc(keys, chain, preferred).map(|rpc| rpc.url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_keys() -> ApiKeys {
        ApiKeys::default()
            .with(Provider::Alchemy, "alchemy-key")
            .with(Provider::Ankr, "ankr-key")
            .with(Provider::Metamask, "infura-key")
            .with(Provider::QuickNode, "node:qn-token")
    }

    #[test]
    fn highest_priority_wins_without_preference() {
        let rpc = resolve_rpc(&all_keys(), ChainId::PolygonMainnet, None).unwrap();
        assert_eq!(rpc.provider, PROVIDER_PRIORITY[0]);
        assert_eq!(rpc.url, "https://node.matic.quiknode.pro/qn-token/");
    }

    #[test]
    fn unsupported_provider_is_skipped() {
        // QuickNode has no slug for Ethereum mainnet.
        let rpc = resolve_rpc(&all_keys(), ChainId::EthereumMainnet, None).unwrap();
        assert_eq!(rpc.provider, Provider::Ankr);
        assert_eq!(rpc.url, "https://rpc.ankr.com/eth/ankr-key");
    }

    #[test]
    fn lowest_priority_alone_is_used() {
        let keys = ApiKeys::default().with(Provider::Alchemy, "alchemy-key");
        assert_eq!(
            rpc_url(&keys, ChainId::BaseMainnet, None).as_deref(),
            Some("https://base-mainnet.g.alchemy.com/v2/alchemy-key")
        );
    }

    #[test]
    fn preferred_provider_wins() {
        let rpc = resolve_rpc(&all_keys(), ChainId::BaseMainnet, Some(Provider::Metamask)).unwrap();
        assert_eq!(rpc.provider, Provider::Metamask);
        assert_eq!(rpc.url, "https://base-mainnet.infura.io/v3/infura-key");
    }

    #[test]
    fn missing_preferred_credential_falls_through() {
        let keys = ApiKeys::default()
            .with(Provider::Ankr, "ankr-key")
            .with(Provider::Alchemy, "alchemy-key");
        let rpc = resolve_rpc(&keys, ChainId::ArbitrumMainnet, Some(Provider::QuickNode)).unwrap();
        assert_eq!(rpc.provider, Provider::Ankr);
        assert_eq!(rpc.url, "https://rpc.ankr.com/arbitrum/ankr-key");
    }

    #[test]
    fn preferred_without_chain_support_falls_through() {
        let keys = ApiKeys::default()
            .with(Provider::Metamask, "infura-key")
            .with(Provider::Alchemy, "alchemy-key");
        let rpc = resolve_rpc(&keys, ChainId::SolanaMainnet, Some(Provider::Metamask)).unwrap();
        assert_eq!(rpc.provider, Provider::Alchemy);
    }

    #[test]
    fn nothing_configured_yields_none() {
        assert_eq!(rpc_url(&ApiKeys::default(), ChainId::EthereumMainnet, None), None);
        let keys = ApiKeys::default().with(Provider::Metamask, "infura-key");
        assert_eq!(rpc_url(&keys, ChainId::SolanaTestnet, Some(Provider::Metamask)), None);
    }

    #[test]
    fn string_preference_is_parsed_at_the_boundary() {
        let keys = all_keys();
        let preferred = Provider::from_name(Some("ALCHEMY"));
        assert_eq!(
            rpc_url(&keys, ChainId::OptimismMainnet, preferred).as_deref(),
            Some("https://opt-mainnet.g.alchemy.com/v2/alchemy-key")
        );
        let unknown = Provider::from_name(Some("chainstack"));
        assert_eq!(
            rpc_url(&keys, ChainId::OptimismMainnet, unknown),
            rpc_url(&keys, ChainId::OptimismMainnet, None)
        );
    }

    #[test]
    fn priority_lists_every_provider_once() {
        for provider in Provider::ALL {
            assert_eq!(
                PROVIDER_PRIORITY.iter().filter(|p| **p == provider).count(),
                1
            );
        }
    }
}
